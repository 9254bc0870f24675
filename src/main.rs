fn main() {
    sentry_shell::app::cli::run();
}
