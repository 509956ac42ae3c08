use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

use super::resolve_refs;

/// Memory-mapped OpenAPI JSON document.
pub struct SpecLoader {
  file: AsyncMmapFile,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file })
  }

  /// Parses the document as-is, leaving `$ref` pointers in place.
  pub fn parse(&self) -> anyhow::Result<Value> {
    Ok(serde_json::from_slice(self.file.as_slice())?)
  }

  /// Parses the document and inlines every local `$ref`.
  pub fn resolve(&self) -> anyhow::Result<Value> {
    let raw = self.parse()?;
    Ok(resolve_refs(&raw)?)
  }
}

/// Opens, parses and resolves the spec at `path` in one go.
pub async fn load_resolved(path: &Path) -> anyhow::Result<Value> {
  SpecLoader::open(path).await?.resolve()
}
