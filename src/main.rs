mod bootstrap;
mod data_loaders;
mod error;
mod images;
mod logging;
mod paths;
mod repkg;
mod workshop;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::{
    bootstrap::locate_extractor,
    data_loaders::config::AppConfig,
    error::WorkshopError,
    paths::{resolve_workshop_path, NonInteractive},
    repkg::Extractor,
};

pub const DEBUG_NAME: &str = "REPKG";

/// Browse Wallpaper Engine workshop content and drive the RePKG extractor.
#[derive(Parser)]
#[command(name = "repkg-workshop", version, about)]
struct Cli {
    /// Workshop content directory; overrides config and discovery
    #[arg(long, global = true, value_name = "DIR")]
    base: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the workshop directory and print its items as JSON
    List,
    /// Print the raw project.json of one item directory
    Info { dir: PathBuf },
    /// Encode a preview image as a base64 data URI
    Preview { file: PathBuf },
    /// Unpack a scene.pkg (or an item directory holding one) via RePKG
    Extract {
        source: PathBuf,

        /// Directory the extractor writes into
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },
    /// Print the extractor's version string
    Version,
    /// Reveal a directory in the system file manager
    Open { dir: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(true);
    bootstrap::bootstrap();
    let config = AppConfig::load(&bootstrap::config_path()).unwrap_or_default();
    logging::set_debug(config.debug);

    std::panic::set_hook(Box::new(|panic_info| {
        error!("[{}] Panic: {}", DEBUG_NAME, panic_info);
    }));

    info!("[{}] Starting repkg-workshop v{}", DEBUG_NAME, env!("CARGO_PKG_VERSION"));

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[{}] {e}", DEBUG_NAME);
            eprintln!("repkg-workshop: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<(), WorkshopError> {
    match cli.command {
        Command::List => {
            let base = workshop_base(cli.base, config)?;
            println!("{}", workshop::scan_json(&base)?);
        }
        Command::Info { dir } => {
            print!("{}", workshop::descriptor_raw(&dir)?);
        }
        Command::Preview { file } => {
            println!("{}", images::data_uri(&file)?);
        }
        Command::Extract { source, output } => {
            let extractor = Extractor::new(locate_extractor(config.settings.extractor.as_deref()));
            let source = package_source(&source)?;
            let report = extractor.extract(&source, &output)?;
            if !report.trim().is_empty() {
                print!("{report}");
            }
            if config.settings.open_after_extract {
                repkg::open_in_file_manager(&output);
            }
        }
        Command::Version => {
            let extractor = Extractor::new(locate_extractor(config.settings.extractor.as_deref()));
            println!("{}", extractor.version().trim_end());
        }
        Command::Open { dir } => {
            repkg::open_in_file_manager(&dir);
        }
    }
    Ok(())
}

/// Base path for scanning: CLI flag, then config override, then discovery of
/// the well-known Steam layouts. A path that turns out to be a Steam workshop
/// root (rather than the content directory itself) is descended into, the
/// same courtesy the original dialog flow extended to picked directories.
fn workshop_base(flag: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf, WorkshopError> {
    let explicit = flag
        .or_else(|| config.settings.workshop_dir.clone())
        .map(|dir| {
            let nested = paths::workshop_content_dir(&dir);
            if nested.is_dir() {
                nested
            } else {
                dir
            }
        });
    resolve_workshop_path(explicit, &NonInteractive)
}

/// An item directory stands in for the scene.pkg inside it.
fn package_source(source: &Path) -> Result<PathBuf, WorkshopError> {
    let path = if source.is_dir() {
        source.join(workshop::PACKAGE_FILE)
    } else {
        source.to_path_buf()
    };

    if !path.is_file() {
        return Err(WorkshopError::NotFound(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn package_source_accepts_item_directory() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join(workshop::PACKAGE_FILE);
        fs::write(&pkg, b"pkg").unwrap();
        assert_eq!(package_source(temp.path()).unwrap(), pkg);
    }

    #[test]
    fn package_source_rejects_directory_without_package() {
        let temp = TempDir::new().unwrap();
        let err = package_source(temp.path()).unwrap_err();
        assert!(matches!(err, WorkshopError::NotFound(_)));
    }

    #[test]
    fn package_source_accepts_pkg_file_directly() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("other.pkg");
        fs::write(&pkg, b"pkg").unwrap();
        assert_eq!(package_source(&pkg).unwrap(), pkg);
    }

    #[test]
    fn workshop_base_descends_into_steam_workshop_roots() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content").join(paths::WORKSHOP_APP_ID);
        fs::create_dir_all(&content).unwrap();

        let base =
            workshop_base(Some(temp.path().to_path_buf()), &AppConfig::default()).unwrap();
        assert_eq!(base, content);
    }

    #[test]
    fn workshop_base_keeps_content_directories_as_given() {
        let temp = TempDir::new().unwrap();
        let base =
            workshop_base(Some(temp.path().to_path_buf()), &AppConfig::default()).unwrap();
        assert_eq!(base, temp.path());
    }
}
