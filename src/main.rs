fn main() {
    stlc::cli::run();
}
