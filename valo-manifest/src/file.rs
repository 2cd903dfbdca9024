use std::path::{Path, PathBuf};

use crate::error::SourceContext;
use crate::manifest::Manifest;
use crate::resolve::{ResolvedValueObject, resolve};
use crate::Result;

/// Represents a valo.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ValoToml {
    path: PathBuf,
    context: SourceContext,
    manifest: Manifest,
}

impl ValoToml {
    /// Open and parse a valo.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            context: SourceContext::new(content, filename),
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        self.context.src()
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve the manifest into generation-ready entries.
    pub fn resolve(&self) -> Result<Vec<ResolvedValueObject>> {
        resolve(&self.manifest, &self.context)
    }
}
