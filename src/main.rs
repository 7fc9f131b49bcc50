use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use vimtodo::core::config::{self, ResolvedConfig, TodoConfig};

#[derive(Parser)]
#[command(name = "vimtodo", about = "Vim-style terminal todo list")]
struct Args {
    /// Task file to use instead of ~/.vim_todo.json
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Where to write the log (default ~/.vimtodo/vimtodo.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Up before the config is read so its warnings land in the file
    if let Some(path) = args.log_file.clone().or_else(config::default_log_path) {
        init_logger(&path);
    }

    let resolved = load_settings(args.file.as_deref());
    log::set_max_level(resolved.log_level);

    log::info!(
        "vimtodo starting up with task file {}",
        resolved.data_file.display()
    );

    vimtodo::tui::run(resolved)
}

/// Installs the file logger at the default level. The logger itself accepts
/// everything; `log::set_max_level` does the filtering, so the configured
/// level can be applied once it is known.
fn init_logger(path: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(path)
        && WriteLogger::init(LevelFilter::Trace, log_config, log_file).is_ok()
    {
        log::set_max_level(config::DEFAULT_LOG_LEVEL);
    }
}

fn load_settings(cli_file: Option<&Path>) -> ResolvedConfig {
    let todo_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}; using defaults", e);
        TodoConfig::default()
    });
    config::resolve(&todo_config, cli_file)
}
