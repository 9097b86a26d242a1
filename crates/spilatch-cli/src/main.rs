// crates/spilatch-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "spilatch-cli")]
#[command(about = "Decode SPI bytes from analog scope captures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one or more capture tables (clock + data columns) into words
    Decode(cmd::decode::DecodeArgs),

    /// Show capture statistics (voltage range, edge counts) without decoding
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
