mod args;
mod commands;
mod config;
mod error;
mod extract;
mod request;
mod ui;

use args::{Args, Command};
use clap::Parser;
use commands::{compare, interactive};
use env_logger::Env;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let result = match &args.command {
        Command::Compare(compare_args) => compare(&args, compare_args).await,
        Command::Interactive => interactive(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
