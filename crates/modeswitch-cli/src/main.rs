//! modeswitch CLI: mode selector demo and config tooling

use clap::{Parser, Subcommand, ValueEnum};
use modeswitch_core::{Config, KeybindAction, Platform, UiMode, CONFIG_DIR, CONFIG_FILE};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat / plan / exec mode selector for the terminal
#[derive(Parser)]
#[command(name = "modeswitch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .modeswitch/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Start in this mode instead of the configured one
        #[arg(long)]
        mode: Option<UiMode>,

        /// Write logs to this file while the TUI is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List the available modes
    Modes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configured keybindings
    Keybinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Format for this platform instead of the current one
        #[arg(long, value_enum)]
        platform: Option<PlatformArg>,
    },

    /// Write the default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Mac,
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Mac => Platform::Mac,
            PlatformArg::Other => Platform::Other,
        }
    }
}

/// Log filter variable, e.g. `MODESWITCH_LOG=debug`.
const LOG_ENV: &str = "MODESWITCH_LOG";

fn main() {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| Path::new(CONFIG_DIR).join(CONFIG_FILE));

    match cli.command {
        None => cmd_tui(&config_path, None, None),
        Some(Commands::Tui { mode, log_file }) => {
            cmd_tui(&config_path, mode, log_file.as_deref());
        }
        Some(Commands::Modes { json }) => {
            init_logging(None, false);
            cmd_modes(&config_path, json);
        }
        Some(Commands::Keybinds { json, platform }) => {
            init_logging(None, false);
            let platform = platform.map_or_else(Platform::current, Platform::from);
            cmd_keybinds(&config_path, json, platform);
        }
        Some(Commands::Init { force }) => {
            init_logging(None, false);
            cmd_init(&config_path, force);
        }
    }
}

/// Install the log subscriber.
///
/// The TUI owns the terminal, so while it runs logs go only to `log_file`
/// and are dropped when there is none. Other commands log to stderr.
fn init_logging(log_file: Option<&Path>, tui: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file {}: {e}", path.display());
            }
        },
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn cmd_tui(config_path: &Path, mode: Option<UiMode>, log_file: Option<&Path>) {
    init_logging(log_file, true);

    let mut config = load_config(config_path);
    if let Some(mode) = mode {
        config.default_mode = mode;
    }

    if let Err(e) = modeswitch_tui::run_tui(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_modes(config_path: &Path, json: bool) {
    let config = load_config(config_path);

    if json {
        let modes: Vec<_> = UiMode::ALL
            .iter()
            .map(|mode| {
                serde_json::json!({
                    "id": mode,
                    "label": mode.label(),
                    "description": mode.description(),
                    "default": *mode == config.default_mode,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&modes).unwrap_or_default()
        );
        return;
    }

    for mode in UiMode::ALL {
        let marker = if mode == config.default_mode { "*" } else { " " };
        println!(
            "{marker} {:<5} {:<5} {}",
            mode.as_str(),
            mode.label(),
            mode.description()
        );
    }
}

fn cmd_keybinds(config_path: &Path, json: bool, platform: Platform) {
    let config = load_config(config_path);

    if json {
        let binds: Vec<_> = config
            .keybinds
            .iter()
            .map(|(action, bind)| {
                serde_json::json!({
                    "action": action.as_str(),
                    "keys": bind.format(platform),
                    "binding": bind,
                    "description": action.description(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&binds).unwrap_or_default()
        );
        return;
    }

    for (action, bind) in config.keybinds.iter() {
        println!(
            "{:<12} {:<14} {}",
            action.as_str(),
            bind.format(platform),
            action.description()
        );
    }

    let cycle = config.keybinds.get(KeybindAction::ToggleMode).format(platform);
    println!("\nCycle modes with: {cycle}");
}

fn cmd_init(config_path: &Path, force: bool) {
    if config_path.exists() && !force {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    match Config::default().save(config_path) {
        Ok(()) => {
            info!(path = %config_path.display(), "wrote default config");
            println!("Created {}", config_path.display());
        }
        Err(e) => {
            eprintln!("Error: failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
