//! Tesseract - headless frame runner
//!
//! Prints the last frame's projected vertices and the edge table to stdout.

use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = std::io::stdout();
    match tesseract::app::launch(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
