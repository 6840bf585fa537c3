//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Cyclesense - rule-based menstrual health advisor
#[derive(Parser, Debug)]
#[command(name = "cyclesense", version)]
#[command(about = "Rule-based menstrual health advisor", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze one observation and print the advice
    Analyze(AnalyzeArgs),
    /// Print fact graph statistics
    Graph,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Observation fields, mirroring the analysis form.
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Self-reported cycle phase
    #[arg(long)]
    pub phase: String,
    /// Pain on a 0-10 scale
    #[arg(long, allow_negative_numbers = true)]
    pub pain_level: i64,
    /// Flow: light, moderate or heavy
    #[arg(long, default_value = "moderate")]
    pub flow_intensity: String,
    /// Free-text mood
    #[arg(long, default_value = "N/A")]
    pub mood: String,
    /// Hours slept last night
    #[arg(long, default_value_t = 7.0)]
    pub sleep_hours: f64,
    /// Fatigue level
    #[arg(long, default_value = "Medium")]
    pub fatigue: String,
    /// Headache level
    #[arg(long, default_value = "Medium")]
    pub headaches: String,
    /// Bloating level
    #[arg(long, default_value = "Medium")]
    pub bloating: String,
    /// Day within the current cycle
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub day_in_cycle: i64,
    /// Age in years
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    pub age: i64,
    /// Contraception in use
    #[arg(long, default_value = "None")]
    pub contraception_type: String,
    /// Print the full analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for docker run
        #[arg(long)]
        docker_env: bool,
    },
}
