use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::Value;

use crate::error::WorkshopError;
use crate::info;

/// Per-item metadata descriptor written by Wallpaper Engine.
pub const DESCRIPTOR_FILE: &str = "project.json";
/// Packed scene archive; opaque here, unpacked only by the external extractor.
pub const PACKAGE_FILE: &str = "scene.pkg";

const DESCRIPTION_PLACEHOLDER: &str = "No description";

/// One workshop item assembled from its directory and descriptor.
///
/// An entry exists only if the descriptor parsed and carried a string `title`;
/// there are no partially populated entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperEntry {
    pub name: String,
    pub content_directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_path: Option<PathBuf>,
    pub content_rating: String,
    pub description: String,
}

/// Enumerates the immediate children of `base` and assembles an entry for
/// every one holding a parseable descriptor. Children without one are skipped
/// silently; only a bad `base` fails the whole scan.
///
/// Order follows filesystem enumeration and is not guaranteed stable across
/// platforms.
pub fn scan(base: &Path) -> Result<Vec<WallpaperEntry>, WorkshopError> {
    let meta = fs::metadata(base).map_err(|_| WorkshopError::NotFound(base.to_path_buf()))?;
    if !meta.is_dir() {
        return Err(WorkshopError::NotADirectory(base.to_path_buf()));
    }

    let mut entries = Vec::new();
    for child in fs::read_dir(base)?.flatten() {
        if let Some(entry) = read_entry(&child.path()) {
            entries.push(entry);
        }
    }

    info!("Scanned {} -> {} wallpaper(s)", base.display(), entries.len());
    Ok(entries)
}

/// `scan` rendered as a pretty-printed JSON array; indentation is cosmetic.
pub fn scan_json(base: &Path) -> Result<String, WorkshopError> {
    let entries = scan(base)?;
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Raw descriptor text of a single item directory. Unlike the bulk scan, a
/// missing or unreadable descriptor is the caller's problem here.
pub fn descriptor_raw(dir: &Path) -> Result<String, WorkshopError> {
    let path = dir.join(DESCRIPTOR_FILE);
    if !path.is_file() {
        return Err(WorkshopError::NotFound(path));
    }
    Ok(fs::read_to_string(&path)?)
}

fn read_entry(dir: &Path) -> Option<WallpaperEntry> {
    if !dir.is_dir() {
        return None;
    }

    let raw = fs::read_to_string(dir.join(DESCRIPTOR_FILE)).ok()?;
    let descriptor: Value = serde_json::from_str(&raw).ok()?;
    let fields = descriptor.as_object()?;

    // `title` is the one required field; anything missing it never becomes
    // an entry.
    let name = fields.get("title")?.as_str()?.to_string();

    let cover_image_path = fields
        .get("preview")
        .and_then(Value::as_str)
        .map(|preview| dir.join(preview));
    let content_rating = fields
        .get("contentrating")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(DESCRIPTION_PLACEHOLDER)
        .to_string();

    let package = dir.join(PACKAGE_FILE);
    let package_path = package.is_file().then_some(package);

    Some(WallpaperEntry {
        name,
        content_directory: dir.to_path_buf(),
        package_path,
        cover_image_path,
        content_rating,
        description,
    })
}
