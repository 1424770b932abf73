use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quality-logistix")]
#[command(about = "Render the Quality Logistix site and submit its forms")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a site TOML config")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List recognized routes
    Routes {
        #[arg(long)]
        json: bool,
    },
    /// Print the site HTML for a URL fragment
    Render {
        #[arg(long, default_value = "")]
        route: String,
    },
    /// Write one HTML file per page
    Export {
        #[arg(long, default_value = "./site")]
        out: PathBuf,
    },
    /// Send a shipping inquiry through the contact form
    Contact(ContactArgs),
    /// Request a shipment status update through the tracking form
    Track(TrackArgs),
    /// Fill in the home page Quick Quote card
    Quote(QuoteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub origin: String,
    #[arg(long, default_value = "")]
    pub destination: String,
    #[arg(long, default_value = "Documents")]
    pub package_type: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Debug, Clone, Args)]
pub struct TrackArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub tracking_number: String,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    #[arg(long, default_value = "")]
    pub origin: String,
    #[arg(long, default_value = "")]
    pub destination: String,
    #[arg(long, default_value = "")]
    pub weight_kg: String,
}
