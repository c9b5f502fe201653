//! Template source loaded from disk.

use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Template text split into lines. Each line keeps its own terminator, so
/// joining the lines gives back the file byte for byte.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    lines: Vec<String>,
}

impl Template {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                Error::Configuration {
                    path: path.to_path_buf(),
                    reason: "template is not valid UTF-8".to_string(),
                }
            } else {
                Error::TemplateRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let template = Self::from_text(path, &text);
        log::debug!(
            "Loaded template {} ({} lines)",
            path.display(),
            template.lines.len()
        );
        Ok(template)
    }

    pub fn from_text(path: &Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
