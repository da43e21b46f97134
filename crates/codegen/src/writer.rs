use crudkit_core::CoreError;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What writing a generated file would do to the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    Create,
    Overwrite,
    /// Existing content is identical
    Skip,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Create => "create",
            Self::Overwrite => "overwrite",
            Self::Skip => "unchanged",
        };
        f.write_str(label)
    }
}

/// A rendered file and its target path
#[derive(Debug, Clone, Serialize)]
pub struct CodeFile {
    pub path: PathBuf,
    pub content: String,
    pub operation: FileOperation,
}

impl CodeFile {
    /// Create a code file, comparing the content against what is on disk
    pub fn new(path: PathBuf, content: String) -> Result<Self, CoreError> {
        let operation = if !path.exists() {
            FileOperation::Create
        } else if fs::read_to_string(&path)? == content {
            FileOperation::Skip
        } else {
            FileOperation::Overwrite
        };

        Ok(Self {
            path,
            content,
            operation,
        })
    }
}

pub struct CodeWriter;

impl CodeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a generated file.
    ///
    /// New files are always written; changed files only with `overwrite`.
    /// Returns whether the file was written.
    pub fn write(&self, file: &CodeFile, overwrite: bool) -> Result<bool, CoreError> {
        match file.operation {
            FileOperation::Skip => Ok(false),
            FileOperation::Overwrite if !overwrite => {
                tracing::info!("Keeping modified file {}", file.path.display());
                Ok(false)
            }
            FileOperation::Create | FileOperation::Overwrite => {
                self.write_if_changed(&file.path, &file.content)
            }
        }
    }

    pub fn write_if_changed(&self, path: &Path, content: &str) -> Result<bool, CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            let existing = fs::read_to_string(path)?;
            if existing == content {
                return Ok(false);
            }
        }

        fs::write(path, content)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(true)
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
