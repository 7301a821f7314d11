// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   List | Get | Export | Exec | Options | Configs | Version
//! ```

use std::process::ExitCode;

use envr_rs::cli::global::GlobalOptions;
use envr_rs::cli::{self, Command};
use envr_rs::cmd::Store;
use envr_rs::cmd::config::{run_configs_command, run_options_command};
use envr_rs::cmd::exec::run_exec_command;
use envr_rs::cmd::export::run_export_command;
use envr_rs::cmd::get::run_get_command;
use envr_rs::cmd::list::run_list_command;
use envr_rs::config::loader::ConfigLoader;
use envr_rs::config::{CONFIG_FILE_NAME, Config};
use envr_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::List(args)) => match open_store(&cli.global, config) {
            Ok(store) => run_list_command(args, config, &store)
                .await
                .map(|()| ExitCode::SUCCESS),
            Err(e) => Err(e),
        },
        Some(Command::Get(args)) => match open_store(&cli.global, config) {
            Ok(store) => run_get_command(args, config, &store)
                .await
                .map(|()| ExitCode::SUCCESS),
            Err(e) => Err(e),
        },
        Some(Command::Export(args)) => match open_store(&cli.global, config) {
            Ok(store) => run_export_command(args, config, &store)
                .await
                .map(|()| ExitCode::SUCCESS),
            Err(e) => Err(e),
        },
        Some(Command::Exec(args)) => match open_store(&cli.global, config) {
            Ok(store) => run_exec_command(args, config, &store).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(CONFIG_FILE_NAME);
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("ENVR")
}

fn load_config(global: &GlobalOptions) -> envr_rs::error::Result<Config> {
    global.apply_overrides(build_config_loader(global))?.build()
}

fn open_store(global: &GlobalOptions, config: &Config) -> envr_rs::error::Result<Store> {
    Ok(Store::open(config, global.records.as_deref())?)
}
