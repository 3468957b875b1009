//! Filesystem source: walks a directory and yields its regular files.
//!
//! Item names are the `/`-joined path relative to the root, normalized to NFC
//! so that names read from filesystems that store decomposed forms compare
//! equal to names written by hand.

use super::{Item, PathFilter, Source};
use crate::error::SourceError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

/// Walker options
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub follow_symlinks: bool,
    /// Maximum depth below the root; `None` is unbounded
    pub max_depth: Option<usize>,
}

/// A file found under the source root.
#[derive(Debug, Clone)]
pub struct FileItem {
    name: String,
    path: PathBuf,
}

impl FileItem {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Item for FileItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> std::io::Result<Box<dyn Read + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Source over the files below a root directory, in file-name order.
pub struct FileSource {
    root: PathBuf,
    walker_config: WalkerConfig,
    include: Vec<PathFilter>,
    exclude: Vec<PathFilter>,
    walker: Option<walkdir::IntoIter>,
}

impl FileSource {
    /// Create a source rooted at `root`, which must be an existing directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SourceError> {
        let root = dunce::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(SourceError::NotADirectory(root.display().to_string()));
        }
        Ok(Self {
            root,
            walker_config: WalkerConfig::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            walker: None,
        })
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Only yield items matching at least one include filter.
    pub fn include(mut self, filter: PathFilter) -> Self {
        self.include.push(filter);
        self
    }

    /// Skip items matching any exclude filter.
    pub fn exclude(mut self, filter: PathFilter) -> Self {
        self.exclude.push(filter);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, name: &str) -> bool {
        if self.exclude.iter().any(|f| f(name)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|f| f(name))
    }

    fn relative_name(&self, path: &Path) -> Result<String, SourceError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| SourceError::InvalidPath(path.display().to_string()))?;
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part = part
                        .to_str()
                        .ok_or_else(|| SourceError::InvalidPath(path.display().to_string()))?;
                    parts.push(part.nfc().collect::<String>());
                }
                _ => return Err(SourceError::InvalidPath(path.display().to_string())),
            }
        }
        Ok(parts.join("/"))
    }

    fn walker(&mut self) -> &mut walkdir::IntoIter {
        let root = &self.root;
        let config = &self.walker_config;
        self.walker.get_or_insert_with(|| {
            let mut walk = WalkDir::new(root)
                .follow_links(config.follow_symlinks)
                .sort_by_file_name()
                .min_depth(1);
            if let Some(depth) = config.max_depth {
                walk = walk.max_depth(depth);
            }
            walk.into_iter()
        })
    }
}

impl Source for FileSource {
    fn next(&mut self) -> Result<Option<Box<dyn Item>>, SourceError> {
        loop {
            let entry = match self.walker().next() {
                None => return Ok(None),
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    return Err(SourceError::Walk {
                        path,
                        message: e.to_string(),
                    });
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = self.relative_name(entry.path())?;
            if !self.accepts(&name) {
                tracing::trace!(item = %name, "Filtered out");
                continue;
            }
            return Ok(Some(Box::new(FileItem {
                name,
                path: entry.into_path(),
            })));
        }
    }
}
