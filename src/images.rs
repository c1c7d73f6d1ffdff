use std::{ffi::OsStr, fs, path::Path};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::WorkshopError;

/// Extensions accepted for preview encoding. Everything else is rejected
/// without touching the file.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

fn allowed_extension(path: &Path) -> Option<String> {
    let ext = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Reads an image file and renders it as a `data:image/<ext>;base64,` URI.
/// The bytes are embedded verbatim; no resizing, no transcoding. The MIME
/// subtype is the matched lowercase extension.
pub fn data_uri(path: &Path) -> Result<String, WorkshopError> {
    let ext = allowed_extension(path)
        .ok_or_else(|| WorkshopError::UnsupportedImage(path.to_path_buf()))?;
    let raw = fs::read(path)?;
    Ok(format!("data:image/{ext};base64,{}", STANDARD.encode(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn data_uri_round_trips_original_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cover.png");
        let bytes: Vec<u8> = (0u8..=255).collect();
        fs::write(&path, &bytes).unwrap();

        let uri = data_uri(&path).unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn extension_case_is_normalized() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("COVER.JPEG");
        fs::write(&path, b"jpeg-ish").unwrap();

        let uri = data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn disallowed_extension_is_rejected_unread() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cover.bmp");
        fs::write(&path, b"bmp").unwrap();

        let err = data_uri(&path).unwrap_err();
        assert!(matches!(err, WorkshopError::UnsupportedImage(_)));
    }

    #[test]
    fn extensionless_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cover");
        fs::write(&path, b"??").unwrap();

        let err = data_uri(&path).unwrap_err();
        assert!(matches!(err, WorkshopError::UnsupportedImage(_)));
    }

    #[test]
    fn allowed_extension_with_missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = data_uri(&temp.path().join("gone.gif")).unwrap_err();
        assert!(matches!(err, WorkshopError::Io(_)));
    }
}
