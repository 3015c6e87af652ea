use crate::cli::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        opacity,
        update_interval,
    } = &cli.command
    {
        let path = config_path(cli);

        if opacity.is_some() || update_interval.is_some() {
            // Edit what is on disk, not the runtime overrides from the command line.
            let mut stored = Config::load_from(&path);

            if let Some(o) = opacity {
                stored.set_opacity(*o)?;
            }
            if let Some(u) = update_interval {
                stored.set_update_interval(u)?;
            }

            stored.save_to(&path)?;
            success(format!("Configuration saved to {}", path.display()));
        }

        if *print_config || (opacity.is_none() && update_interval.is_none()) {
            info(format!("Current configuration ({}):", path.display()));
            let current = if path.exists() {
                Config::load_from(&path)
            } else {
                cfg.clone()
            };
            let yaml = serde_yaml::to_string(&current).map_err(|_| AppError::ConfigSave)?;
            println!("{}", yaml);
        }
    }

    Ok(())
}
