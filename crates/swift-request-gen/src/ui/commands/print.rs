use std::path::Path;

use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::utils::{PathLookupError, object_by_path, spec::load_resolved};

const WHOLE_SPEC: &str = "*";

/// Picks the subtree to print; no path or `*` selects the whole document.
fn select<'a>(spec: &'a Value, path: Option<&str>) -> Result<&'a Value, PathLookupError> {
  match path.map(str::trim) {
    None | Some(WHOLE_SPEC | "") => Ok(spec),
    Some(path) => object_by_path(spec, path),
  }
}

pub async fn print_value(input: &Path, path: Option<&str>) -> anyhow::Result<()> {
  let spec = load_resolved(input).await?;
  let value = select(&spec, path)?;

  let mut rendered = serde_json::to_string_pretty(value)?;
  rendered.push('\n');

  let mut stdout = tokio::io::stdout();
  stdout.write_all(rendered.as_bytes()).await?;
  stdout.flush().await?;
  Ok(())
}
