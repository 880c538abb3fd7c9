use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "hexstr: strict hex string decoder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a hex string to raw bytes
    Decode {
        /// hex text; read from stdin when omitted
        hex: Option<String>,
        /// write bytes here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a hex string without writing the bytes
    Check {
        /// hex text; read from stdin when omitted
        hex: Option<String>,
        /// require exactly this many decoded bytes
        #[arg(long)]
        len: Option<usize>,
    },

    /// Encode raw bytes as lowercase hex
    Encode {
        /// input file; stdin when omitted
        input: Option<PathBuf>,
    },
}
