use serde_json::Value;

use crate::utils::{object_by_path, resolve_refs};

const DM_API_JSON: &str = include_str!("../../../fixtures/twitter_dm.json");

/// The direct message fixture with every `$ref` inlined.
pub(super) fn dm_api() -> Value {
  let raw: Value = serde_json::from_str(DM_API_JSON).expect("fixture is valid JSON");
  resolve_refs(&raw).expect("fixture refs resolve")
}

pub(super) fn value_at(spec: &Value, path: &str) -> Value {
  object_by_path(spec, path)
    .unwrap_or_else(|err| panic!("fixture has no value at {path}: {err}"))
    .clone()
}
