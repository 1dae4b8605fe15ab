#![warn(clippy::pedantic, clippy::cargo)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use paperconf::{Config, ConfigError};

#[derive(Parser)]
#[command(name = "paperconf", about = "Blog site configuration", version)]
struct Cli {
    /// Config file to use instead of the bundled one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config
    Check,

    /// List social links
    Socials {
        /// Include inactive links
        #[arg(short, long)]
        all: bool
    },

    /// Print the normalized config
    Dump {
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json
}

fn load(path: Option<&PathBuf>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            info!("Reading config: {}", path.display());
            Config::from_path(path)
        }
        None => {
            info!("Reading bundled config");
            paperconf::load_config()
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let config = load(cli.config.as_ref())?;

    match cli.command {
        Commands::Check => {
            info!(
                "{} ({}): {} of {} social links active, {} posts per page",
                config.site.title,
                config.site.website,
                config.active_socials().count(),
                config.socials.len(),
                config.site.post_per_page
            );
            info!("Config OK");
        }
        Commands::Socials { all } => {
            let links: Vec<_> = if all {
                config.socials.iter().collect()
            } else {
                config.active_socials().collect()
            };
            for link in links {
                println!("{}\t{}\t{}", link.name, link.href, link.link_title);
            }
        }
        Commands::Dump { format } => {
            let out = match format {
                Format::Toml => config.to_toml_string()?,
                Format::Json => config.to_json_string()?
            };
            println!("{}", out);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
