// pixconv/src/processors/walker.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates candidate input files under a root directory.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    recursive: bool,
    excluded: Option<PathBuf>,
}

impl Walker {
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            excluded: None,
        }
    }

    /// Prunes the subtree rooted at `path` from every walk.
    pub fn excluding(mut self, path: &Path) -> Self {
        self.excluded = Some(path.to_path_buf());
        self
    }

    /// Regular files under `root`, sorted by name within each directory.
    /// Symlinked directories are never entered.
    pub fn collect(&self, root: &Path) -> Vec<PathBuf> {
        let walker = if self.recursive {
            WalkDir::new(root)
        } else {
            WalkDir::new(root).max_depth(1)
        };

        walker
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.excluded.as_deref() != Some(entry.path()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }
}
