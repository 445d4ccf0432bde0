use ionbench_cli::{Failure, classify_failure};
use std::process::ExitCode;

fn main() -> ExitCode {
    match ionbench_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match classify_failure(&e) {
                Failure::Fatal => println!("FATAL ERROR!"),
                Failure::Error(message) => eprintln!("Error: {}", message),
            }
            ExitCode::FAILURE
        }
    }
}
