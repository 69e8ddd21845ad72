fn main() {
    invasion::game::run();
}
