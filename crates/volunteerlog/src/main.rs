//! `vlog` - CLI for volunteerlog
//!
//! This binary loads the volunteer log from the working directory, applies one
//! command to it, and writes it back when the command changed something.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use volunteerlog::cli::{self, Cli, Command, ConfigCommand, RegisterCommand};
use volunteerlog::{init_logging, Config, RecordStore, LOG_FILE_NAME};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config_path = cli.config.clone();
    let command = match cli.command_or_default() {
        Command::Config(cmd) => return handle_config(config_path, cmd),
        other => other,
    };

    let config = Config::load_from(config_path).context("loading configuration")?;

    let log_path = Path::new(LOG_FILE_NAME);
    let mut store = config.record_store();
    store
        .load(log_path)
        .with_context(|| format!("loading {}", log_path.display()))?;

    match command {
        Command::Register(cmd) => {
            handle_register(&mut store, &cmd)?;
            autosave(&config, &store, log_path)
        }
        Command::Log(cmd) => {
            let hours = store
                .log_hours(&cmd.email, &cmd.start, &cmd.end)
                .with_context(|| format!("logging hours for {}", cmd.email.trim()))?;
            let name = store
                .get(&cmd.email)
                .map_or("volunteer", |r| r.name.as_str());
            println!(
                "Thanks for volunteering at {} today for {hours} hours, {name}!",
                config.organization.name
            );
            autosave(&config, &store, log_path)
        }
        Command::List(cmd) => {
            print!("{}", cli::render_records(&store.list_records(), cmd.format)?);
            Ok(())
        }
        Command::Save => {
            save(&store, log_path)?;
            println!("Volunteer log saved successfully!");
            Ok(())
        }
        Command::Config(_) => unreachable!("config commands return before the log is loaded"),
    }
}

fn handle_register(store: &mut RecordStore, cmd: &RegisterCommand) -> Result<()> {
    let (name, email, phone) = cmd.trimmed();
    store
        .register(name, email, phone)
        .context("registering volunteer")?;
    println!("Volunteer registered successfully!");
    Ok(())
}

fn autosave(config: &Config, store: &RecordStore, path: &Path) -> Result<()> {
    if config.storage.auto_save {
        save(store, path)
    } else {
        tracing::warn!("auto_save is off; run `vlog save` to keep this change");
        Ok(())
    }
}

fn save(store: &RecordStore, path: &Path) -> Result<()> {
    store
        .save(path)
        .with_context(|| format!("saving {}", path.display()))
}

/// Config commands never touch the volunteer log, and `path` and
/// `validate` don't need the active configuration to be valid either.
fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path).context("loading configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Organization]");
                println!("  Name:               {}", config.organization.name);
                println!();
                println!("[Hours]");
                println!("  Overnight shifts:   {}", config.hours.overnight);
                println!();
                println!("[Storage]");
                println!("  Log file:           {LOG_FILE_NAME}");
                println!("  Auto save:          {}", config.storage.auto_save);
            }
        }
        ConfigCommand::Path => {
            println!(
                "{}",
                config_path
                    .unwrap_or_else(Config::default_config_path)
                    .display()
            );
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("validating {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
