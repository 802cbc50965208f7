//! Output placement for converted files.

use std::fs::OpenOptions;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Suffixes tried per stem before giving up on a name
const MAX_NAME_ATTEMPTS: usize = 10_000;

/// Where converted files are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output directory (created on demand, never emptied)
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
        }
    }
}

impl OutputConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Reserve a fresh output path for `input` with a new extension
    ///
    /// Tries `<stem>.<ext>`, then `<stem>-1.<ext>`, `<stem>-2.<ext>`, ...
    /// and creates the first one that does not exist yet, so two inputs
    /// with the same stem never write to the same file. Existing files are
    /// never touched.
    pub fn claim_output_path(&self, input: &Path, extension: &str) -> io::Result<PathBuf> {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());

        for n in 0..MAX_NAME_ATTEMPTS {
            let name = if n == 0 {
                format!("{}.{}", stem, extension)
            } else {
                format!("{}-{}.{}", stem, n, extension)
            };
            let path = self.output_dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(path),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }

        Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!(
                "no free output name for '{}' in {}",
                stem,
                self.output_dir.display()
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_claim_replaces_extension() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig::new(dir.path());
        let path = config
            .claim_output_path(Path::new("/tmp/in/photo.png"), "wav")
            .unwrap();
        assert_eq!(path, dir.path().join("photo.wav"));
        assert!(path.exists());
    }

    #[test]
    fn test_same_stem_gets_suffix() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig::new(dir.path());
        let first = config.claim_output_path(Path::new("a/pic.png"), "wav").unwrap();
        let second = config.claim_output_path(Path::new("b/pic.jpg"), "wav").unwrap();
        let third = config.claim_output_path(Path::new("pic.png"), "wav").unwrap();

        assert_eq!(first, dir.path().join("pic.wav"));
        assert_eq!(second, dir.path().join("pic-1.wav"));
        assert_eq!(third, dir.path().join("pic-2.wav"));
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let taken = dir.path().join("song.png");
        std::fs::write(&taken, "keep").unwrap();

        let config = OutputConfig::new(dir.path());
        let path = config.claim_output_path(Path::new("song.wav"), "png").unwrap();
        assert_eq!(path, dir.path().join("song-1.png"));
        assert_eq!(std::fs::read_to_string(&taken).unwrap(), "keep");
    }

    #[test]
    fn test_claim_without_stem() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig::new(dir.path());
        let path = config.claim_output_path(Path::new("/"), "png").unwrap();
        assert_eq!(path, dir.path().join("output.png"));
    }
}
