use crate::adapters::export::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-catalog")]
#[command(about = "Print the built-in vehicle catalog")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Validate every vehicle before printing")]
    pub validate: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}
