use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "complex-inspect")]
#[command(about = "Construct a complex value and inspect it")]
pub struct CliConfig {
    /// Optional TOML file with default values and logging settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the real and imaginary parts
    ///
    /// Values may start with '-' (`-2`, `-inf`, `-NaN`), so pass flags
    /// before the subcommand.
    #[command(allow_negative_numbers = true)]
    Print {
        /// Real part, defaults to the config file or 0
        #[arg(allow_hyphen_values = true)]
        real: Option<f32>,
        /// Imaginary part, defaults to the config file or 0
        #[arg(allow_hyphen_values = true)]
        imag: Option<f32>,
    },
    /// Print "Nothing."
    Nothing,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
