fn main() {
    modprompt::app::cli::run();
}
