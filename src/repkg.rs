use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use crate::error::WorkshopError;
use crate::{error, info, warn};

/// Fixed sentinel returned by the version query when the extractor cannot be
/// run or reports failure.
pub const VERSION_ERROR_SENTINEL: &str = "ERROR";

/// Wrapper around the external RePKG binary. The PKG format is opaque to this
/// crate; everything interesting happens inside the subprocess.
pub struct Extractor {
    binary: PathBuf,
}

impl Extractor {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Runs `<binary> extract <source> -o <target>`. Exit code 0 is success;
    /// the combined stdout/stderr is returned to the caller either way, inside
    /// the error when the process failed.
    ///
    /// No timeout: a hung extractor blocks the caller.
    pub fn extract(&self, source: &Path, target: &Path) -> Result<String, WorkshopError> {
        info!(
            "Extracting {} -> {} via {}",
            source.display(),
            target.display(),
            self.binary.display()
        );

        let output = Command::new(&self.binary)
            .arg("extract")
            .arg(source)
            .arg("-o")
            .arg(target)
            .output()
            .map_err(|e| WorkshopError::ExtractorLaunch {
                binary: self.binary.clone(),
                source: e,
            })?;

        let combined = combined_output(&output);
        if !output.status.success() {
            error!("Extractor exited with {}: {}", output.status, combined.trim_end());
            return Err(WorkshopError::ExtractionFailed { output: combined });
        }
        Ok(combined)
    }

    /// Runs `<binary> version` and returns the combined output text, or the
    /// fixed `"ERROR"` sentinel when the process cannot run or exits non-zero.
    pub fn version(&self) -> String {
        match Command::new(&self.binary).arg("version").output() {
            Ok(output) if output.status.success() => combined_output(&output),
            Ok(output) => {
                warn!("Extractor version query exited with {}", output.status);
                VERSION_ERROR_SENTINEL.to_string()
            }
            Err(e) => {
                warn!("Extractor version query failed to launch: {e}");
                VERSION_ERROR_SENTINEL.to_string()
            }
        }
    }
}

fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

/// Reveal a directory in the system file manager. Failure is logged, never
/// surfaced; this is a convenience, not part of any contract.
pub fn open_in_file_manager(path: &Path) {
    #[cfg(windows)]
    let program = "explorer.exe";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(all(unix, not(target_os = "macos")))]
    let program = "xdg-open";

    if let Err(e) = Command::new(program).arg(path).spawn() {
        warn!("Failed to open {} in file manager: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_extractor(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("repkg");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn missing_binary_version_returns_sentinel() {
        let temp = TempDir::new().unwrap();
        let extractor = Extractor::new(temp.path().join("no-such-repkg"));
        assert_eq!(extractor.version(), VERSION_ERROR_SENTINEL);
    }

    #[test]
    fn missing_binary_extract_surfaces_launch_error() {
        let temp = TempDir::new().unwrap();
        let extractor = Extractor::new(temp.path().join("no-such-repkg"));
        let err = extractor
            .extract(Path::new("scene.pkg"), temp.path())
            .unwrap_err();
        assert!(matches!(err, WorkshopError::ExtractorLaunch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn successful_extract_returns_combined_output() {
        let temp = TempDir::new().unwrap();
        let binary = fake_extractor(temp.path(), "#!/bin/sh\necho \"unpacked $1 $2 $3 $4\"\n");
        let extractor = Extractor::new(binary);

        let output = extractor
            .extract(Path::new("scene.pkg"), Path::new("out"))
            .unwrap();
        assert_eq!(output, "unpacked extract scene.pkg -o out\n");
    }

    #[cfg(unix)]
    #[test]
    fn failing_extract_carries_stderr_in_the_error() {
        let temp = TempDir::new().unwrap();
        let binary = fake_extractor(temp.path(), "#!/bin/sh\necho boom >&2\nexit 3\n");
        let extractor = Extractor::new(binary);

        let err = extractor
            .extract(Path::new("scene.pkg"), Path::new("out"))
            .unwrap_err();
        match err {
            WorkshopError::ExtractionFailed { output } => assert!(output.contains("boom")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn version_returns_process_output_verbatim() {
        let temp = TempDir::new().unwrap();
        let binary = fake_extractor(temp.path(), "#!/bin/sh\necho \"RePKG v0.4.0 $1\"\n");
        let extractor = Extractor::new(binary);
        assert_eq!(extractor.version(), "RePKG v0.4.0 version\n");
    }
}
