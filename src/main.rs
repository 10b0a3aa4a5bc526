mod board;
mod cli;
mod output;
mod solver;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
