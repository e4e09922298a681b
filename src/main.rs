use colored::Colorize;

fn main() {
    // RUST_LOG controls verbosity; everything below warn is off by default.
    if let Ok(logger) = flexi_logger::Logger::try_with_env_or_str("warn") {
        let _ = logger.start();
    }

    if let Err(e) = cardz::cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
