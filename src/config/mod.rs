#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "posture-check")]
#[command(about = "Classify neck posture from pre-computed body landmarks")]
pub struct CliConfig {
    /// JSON file with the 33 pose landmarks (`-` reads stdin)
    #[arg(short, long)]
    pub landmarks: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub right_min: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub right_max: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub left_min: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub left_max: Option<i32>,

    /// Print the effective thresholds and exit
    #[arg(long)]
    pub show_config: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_log: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
