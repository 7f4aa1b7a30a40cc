use anyhow::Result;

use lounge_overlay::cli::Command;
use lounge_overlay::{handle_completions, handle_overlay, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Overlay { server, name, game } => handle_overlay(server, name, game),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
