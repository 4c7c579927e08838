use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a configuration value came from, for diagnostics.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Origin {
    pub(crate) file: PathBuf,
    pub(crate) section: String,
    pub(crate) index: Option<usize>,
}

impl Origin {
    pub fn new(file: &Path, section: &str, index: Option<usize>) -> Self {
        Self {
            file: file.to_path_buf(),
            section: section.to_owned(),
            index,
        }
    }

    /// Same file and section, pointing at one element of a list.
    pub fn at(&self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self.clone()
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    #[cfg(test)]
    pub fn test(section: &str) -> Self {
        Self::new(Path::new("/test/quill.hcl"), section, None)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}: {}[{}]", self.file.display(), self.section, i),
            None => write!(f, "{}: {}", self.file.display(), self.section),
        }
    }
}
