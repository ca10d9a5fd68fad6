use anyhow::Context;
use clap::Parser;
use complex_inspect::utils::{logger, validation::Validate};
use complex_inspect::{CliConfig, Command, InspectError, TomlConfig};

fn load_config(cli: &CliConfig) -> anyhow::Result<TomlConfig> {
    cli.validate()?;
    match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path)),
        None => Ok(TomlConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let exit_code = match e.downcast_ref::<InspectError>() {
                Some(inspect_err) => {
                    eprintln!("❌ {}", inspect_err.user_friendly_message());
                    eprintln!("💡 {:#}", e);
                    inspect_err.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    2
                }
            };
            std::process::exit(exit_code);
        }
    };

    let verbose = cli.verbose || config.verbose();
    if cli.log_json || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match cli.command {
        Command::Print { real, imag } => {
            let value = config.resolve_value(real, imag);
            complex_inspect::print(&value);
        }
        Command::Nothing => complex_inspect::nothing(),
    }

    Ok(())
}
