pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use hexstr_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Decode { hex, out } => handlers::handle_decode(hex, out),
        Commands::Check { hex, len } => handlers::handle_check(hex, len),
        Commands::Encode { input } => handlers::handle_encode(input),
    }
}
