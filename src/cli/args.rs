use clap::Parser;
use std::path::PathBuf;

/// Generate an e-commerce sales report from a transactions CSV file
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Generate an e-commerce sales report from a transactions CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transaction records
    ///
    /// When omitted, the program prompts for a file name interactively.
    #[arg(
        value_name = "INPUT",
        help = "Path to the input CSV file (prompted for when omitted)"
    )]
    pub input_file: Option<PathBuf>,
}
