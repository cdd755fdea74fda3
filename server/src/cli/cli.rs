// server/src/cli/cli.rs

// Main entry point for the CLI: parses arguments, loads configuration,
// initialises logging and storage, then dispatches to the handlers.
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use hospital_store::config::{read_storage_config, ConfigOrigin, StorageConfig};
use hospital_store::storage_engine::create_storage;
use log::{info, warn};

use crate::cli::commands::CliArgs;
use crate::cli::handlers::handle_command;

/// Initialises `env_logger`. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &StorageConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    // try_init fails when a logger is already installed; the first one stays.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Logs where the configuration came from. Runs after `init_logging` so the
/// missing-file warning is visible.
fn report_config_origin(origin: &ConfigOrigin) {
    match origin {
        ConfigOrigin::File(_) => info!("{}", origin),
        ConfigOrigin::Defaults(_) => warn!("{}", origin),
    }
}

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    run_cli(args).await
}

pub async fn run_cli(args: CliArgs) -> Result<()> {
    let (mut config, origin) = read_storage_config(args.config.as_deref())
        .context("Failed to load storage configuration")?;
    if let Some(engine) = args.engine {
        config.storage_engine_type = engine;
    }
    init_logging(&config);
    report_config_origin(&origin);
    info!("{}", config);

    let storage = create_storage(&config).context("Failed to open storage engine")?;
    let mut stdout = io::stdout();
    let result = handle_command(storage.as_ref(), args.command, &mut stdout).await;
    storage.flush().await.context("Failed to flush storage")?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_store::config::{save_storage_config, StorageEngineType};
    use hospital_store::storage_engine::{HospitalStorageEngine, SledStorage};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_register_persists_through_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("storage_config.yaml");
        let config = StorageConfig {
            storage_engine_type: StorageEngineType::Sled,
            data_directory: dir.path().join("data"),
            ..StorageConfig::default()
        };
        save_storage_config(&config, Some(&config_path)).unwrap();

        let config_arg = config_path.to_string_lossy().to_string();
        let args = CliArgs::try_parse_from([
            "hospital-cli", "--config", &config_arg, "register",
            "--phone", "+10000000001", "--name", "City General",
        ])
        .unwrap();
        run_cli(args).await.unwrap();

        let duplicate = CliArgs::try_parse_from([
            "hospital-cli", "--config", &config_arg, "register", "--phone", "+10000000001",
        ])
        .unwrap();
        assert!(run_cli(duplicate).await.is_err());

        let storage = SledStorage::open(&config).unwrap();
        let hospital = storage.get_hospital_by_phone("+10000000001").await.unwrap().unwrap();
        assert_eq!(hospital.to_string(), "City General");
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config_arg = dir.path().join("absent.yaml").to_string_lossy().to_string();
        let args = CliArgs::try_parse_from([
            "hospital-cli", "--config", &config_arg, "--engine", "in_memory", "count",
        ])
        .unwrap();
        run_cli(args).await.unwrap();

        // The logger is installed by the time the fallback warning is emitted.
        assert!(log::max_level() >= log::LevelFilter::Warn);
    }
}
