use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "MK Lounge player overlay")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the player stats API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Show the rotating player card in the terminal
    Overlay {
        /// Base URL of a running `serve` instance
        #[arg(short, long, default_value = "http://localhost:3000")]
        server: String,
        /// Lounge player name
        #[arg(short, long, default_value = "Julian")]
        name: String,
        /// Game mode code ("12p" or "24p")
        #[arg(short, long, default_value = "12p")]
        game: String,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
