fn main() {
    grr::app::cli::run();
}
