//! Statuswatch CLI binary entrypoint.

fn main() {
    if let Err(err) = statuswatch_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
