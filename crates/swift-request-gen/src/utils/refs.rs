use std::collections::HashMap;

use serde_json::{Map, Value};
use strum::Display;

/// Key added to every object inlined from a `$ref`, holding the original pointer.
pub const RESOLVED_REF_KEY: &str = "$$ref";

const REF_KEY: &str = "$ref";

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RefResolveError {
  #[strum(to_string = "unresolvable reference '{ref_path}': segment '{segment}' not found")]
  MissingTarget { ref_path: String, segment: String },
}

impl std::error::Error for RefResolveError {}

/// Returns a copy of `root` with every local `$ref` (`#/...`) replaced by the
/// referenced subtree.
///
/// Inlined objects keep their origin under [`RESOLVED_REF_KEY`]. External
/// references are left untouched, and a reference that points back into its
/// own resolution chain stays a `$ref` object so the result is finite.
pub(crate) fn resolve_refs(root: &Value) -> Result<Value, RefResolveError> {
  RefResolver::new(root).resolve(root)
}

struct RefResolver<'a> {
  root: &'a Value,
  stack: Vec<String>,
  cache: HashMap<String, Value>,
  cycles_seen: usize,
}

impl<'a> RefResolver<'a> {
  fn new(root: &'a Value) -> Self {
    Self {
      root,
      stack: vec![],
      cache: HashMap::new(),
      cycles_seen: 0,
    }
  }

  fn resolve(&mut self, value: &Value) -> Result<Value, RefResolveError> {
    match value {
      Value::Object(map) => {
        if let Some(Value::String(ref_path)) = map.get(REF_KEY)
          && ref_path.starts_with('#')
        {
          return self.resolve_ref(ref_path, value);
        }

        let mut resolved = Map::with_capacity(map.len());
        for (key, child) in map {
          resolved.insert(key.clone(), self.resolve(child)?);
        }
        Ok(Value::Object(resolved))
      }
      Value::Array(items) => items
        .iter()
        .map(|item| self.resolve(item))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array),
      scalar => Ok(scalar.clone()),
    }
  }

  fn resolve_ref(&mut self, ref_path: &str, original: &Value) -> Result<Value, RefResolveError> {
    if let Some(cached) = self.cache.get(ref_path) {
      return Ok(cached.clone());
    }

    if self.stack.iter().any(|entry| entry == ref_path) {
      self.cycles_seen += 1;
      return Ok(original.clone());
    }

    let target = lookup_pointer(self.root, ref_path)?;
    let cycles_before = self.cycles_seen;

    self.stack.push(ref_path.to_string());
    let mut resolved = self.resolve(target)?;
    self.stack.pop();

    if let Value::Object(map) = &mut resolved {
      map.insert(RESOLVED_REF_KEY.to_string(), Value::String(ref_path.to_string()));
    }

    // Only cycle-free results are independent of the current chain.
    if self.cycles_seen == cycles_before {
      self.cache.insert(ref_path.to_string(), resolved.clone());
    }

    Ok(resolved)
  }
}

fn lookup_pointer<'v>(root: &'v Value, ref_path: &str) -> Result<&'v Value, RefResolveError> {
  let pointer = ref_path.trim_start_matches('#');
  let mut current = root;

  for raw in pointer.split('/').skip(1) {
    let segment = raw.replace("~1", "/").replace("~0", "~");
    let next = match current {
      Value::Object(map) => map.get(&segment),
      Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
      _ => None,
    };
    current = next.ok_or_else(|| RefResolveError::MissingTarget {
      ref_path: ref_path.to_string(),
      segment: segment.clone(),
    })?;
  }

  Ok(current)
}
