fn main() {
    webby::cli::run();
}
