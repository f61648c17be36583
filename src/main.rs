fn main() {
    diego_installer_gen::app::cli::run();
}
