use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::ViewerError;

const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];

fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed, ordered list of images found in one directory at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    paths: Vec<PathBuf>,
}

impl Catalog {
    /// Lists `dir` (non-recursive) and keeps every non-directory entry whose
    /// name ends in a recognised image suffix, in listing order.
    pub fn build(dir: &Path) -> Result<Self, ViewerError> {
        let start_time = Instant::now();
        let unreadable = |source: io::Error| ViewerError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            // file_type() does not follow symlinks
            if entry.file_type().map_err(unreadable)?.is_dir() {
                continue;
            }
            if is_image_name(&entry.file_name().to_string_lossy()) {
                paths.push(dir.join(entry.file_name()));
            }
        }

        log::info!(
            "Scanned {:?} in {:.3}s. Found {} images.",
            dir,
            start_time.elapsed().as_secs_f64(),
            paths.len()
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            paths,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Catalog with a fixed order, for tests that depend on which file comes first.
    #[cfg(test)]
    pub(crate) fn from_paths(dir: &Path, paths: Vec<PathBuf>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            paths,
        }
    }
}
