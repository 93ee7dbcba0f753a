mod cli;
mod demo;
mod report;
mod session;

use hiring_tracker::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
