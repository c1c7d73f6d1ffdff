// ~/repkg-workshop/src/paths.rs

use std::path::{Path, PathBuf};

use crate::error::WorkshopError;
use crate::{info, warn};

/// Steam app id of Wallpaper Engine; workshop items live under
/// `<steam library>/steamapps/workshop/content/431960/<item id>/`.
pub const WORKSHOP_APP_ID: &str = "431960";

const WORKSHOP_CANDIDATES: [&str; 5] = [
    "C:/Program Files (x86)/Steam/steamapps/workshop/content/431960",
    "D:/Steam/steamapps/workshop/content/431960",
    "D:/SteamLibrary/steamapps/workshop/content/431960",
    "E:/SteamLibrary/steamapps/workshop/content/431960",
    "F:/SteamLibrary/steamapps/workshop/content/431960",
];

/// Directory the tool itself runs from; config and log files live here.
pub fn tool_root_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(path) => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        Err(_) => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Maps a user-selected Steam workshop root to the Wallpaper Engine content
/// directory inside it.
pub fn workshop_content_dir(workshop_root: &Path) -> PathBuf {
    workshop_root.join("content").join(WORKSHOP_APP_ID)
}

/// Fallback strategy consulted when none of the well-known candidates exist.
/// `None` means a definitive cancellation, not a request to retry.
pub trait PathResolver {
    fn resolve(&self) -> Option<PathBuf>;
}

/// Resolver that never supplies a path; discovery then fails cleanly instead
/// of prompting. Interactive front-ends plug in their own implementation.
pub struct NonInteractive;

impl PathResolver for NonInteractive {
    fn resolve(&self) -> Option<PathBuf> {
        None
    }
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_dir()).cloned()
}

/// Checks the well-known install layouts and returns the first that exists.
pub fn find_workshop_path() -> Option<PathBuf> {
    let candidates: Vec<PathBuf> = WORKSHOP_CANDIDATES.iter().map(PathBuf::from).collect();
    first_existing(&candidates)
}

/// Resolution order: explicit override, then well-known candidates, then a
/// single resolver attempt. A cancelled resolver terminates resolution.
pub fn resolve_workshop_path(
    explicit: Option<PathBuf>,
    resolver: &dyn PathResolver,
) -> Result<PathBuf, WorkshopError> {
    if let Some(path) = explicit {
        info!("Using explicitly configured workshop path {}", path.display());
        return Ok(path);
    }

    if let Some(path) = find_workshop_path() {
        info!("Found workshop content at {}", path.display());
        return Ok(path);
    }

    warn!("No well-known workshop path exists, deferring to resolver");
    match resolver.resolve() {
        Some(path) => {
            info!("Resolver supplied workshop path {}", path.display());
            Ok(path)
        }
        None => Err(WorkshopError::WorkshopUnresolved),
    }
}
