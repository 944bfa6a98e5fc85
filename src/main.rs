mod app;

use app::error::ScanError;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match app::run() {
        Ok(output_path) => {
            println!(
                "Successfully scanned directory and saved output to: {}",
                output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            if err.downcast_ref::<ScanError>().is_some() {
                eprintln!("[!] {}", err);
            } else {
                eprintln!("[!] An unexpected error occurred: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
