use sitemapper_core::logging;

mod cli;

fn main() {
    // Log file first; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("sitemapper error: {:#}", err);
        std::process::exit(1);
    }
}
