use fridge::logging;

mod cli;

fn main() {
    logging::init(logging::CLI_LEVEL);

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
