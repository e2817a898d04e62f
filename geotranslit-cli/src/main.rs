use clap::Parser;
use geotranslit_cli::commands::Commands;
use geotranslit_cli::CliResult;

/// Transliterate Latvian, Lithuanian, Polish and Estonian place names into Russian Cyrillic
#[derive(Debug, Parser)]
#[command(name = "geotranslit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
