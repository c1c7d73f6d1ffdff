// ~/repkg-workshop/src/bootstrap.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::tool_root_dir;
use crate::{info, warn};

/// Conventional name of the external extractor binary.
pub const EXTRACTOR_NAME: &str = "RePKG.exe";

const DEFAULT_CONFIG: &str = r#"# repkg-workshop configuration
debug: false

settings:
  # Workshop content directory; discovery of well-known Steam layouts is
  # used when empty.
  workshop_dir: ""
  # Extractor binary; looked up next to this executable, then on PATH,
  # when empty.
  extractor: ""
  open_after_extract: true
"#;

/// The tool's config file lives next to the executable.
pub fn config_path() -> PathBuf {
    tool_root_dir().join("config.yaml")
}

/// First-run scaffolding: write a default config if none exists yet.
pub fn bootstrap() {
    scaffold_config_yaml(&config_path());
}

fn scaffold_config_yaml(path: &Path) {
    if path.exists() {
        return;
    }

    match fs::write(path, DEFAULT_CONFIG) {
        Ok(_) => info!("Created default config at {}", path.display()),
        Err(e) => warn!("Failed to create {}: {e}", path.display()),
    }
}

/// Locates the extractor: config override first, then a binary sitting next
/// to our own executable, then the bare name left for PATH lookup at spawn
/// time.
pub fn locate_extractor(override_path: Option<&Path>) -> PathBuf {
    locate_extractor_in(&tool_root_dir(), override_path)
}

fn locate_extractor_in(root: &Path, override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        info!("Using configured extractor {}", path.display());
        return path.to_path_buf();
    }

    let beside = root.join(EXTRACTOR_NAME);
    if beside.is_file() {
        info!("Using extractor next to the executable: {}", beside.display());
        return beside;
    }

    warn!("{EXTRACTOR_NAME} not found next to the executable; relying on PATH");
    PathBuf::from(EXTRACTOR_NAME)
}
