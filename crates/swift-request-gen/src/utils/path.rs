use serde_json::Value;
use strum::Display;

/// Separator between segments of a lookup path such as
/// `components.parameters.DmEventFieldsParameter` or `paths./2/dm_events.get`.
pub const PATH_SEPARATOR: char = '.';

const SNAPSHOT_KEY_LIMIT: usize = 12;
const SNAPSHOT_SCALAR_LIMIT: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PathLookupError {
  #[strum(to_string = "segment '{segment}' not found in {snapshot}")]
  MissingSegment { segment: String, snapshot: String },
  #[strum(to_string = "empty lookup path")]
  EmptyPath,
}

impl std::error::Error for PathLookupError {}

/// Walks `path` from `root`, one separator-delimited segment at a time.
///
/// Keys that contain the separator themselves (a URL such as
/// `/2/tweets/search/stream.json`) are matched by joining consecutive
/// segments. Shorter keys are tried first; when the rest of the path cannot be
/// walked below one, the next longer joined key is tried. Array elements are
/// addressed by index.
pub(crate) fn object_by_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value, PathLookupError> {
  if path.is_empty() {
    return Err(PathLookupError::EmptyPath);
  }

  let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
  walk(root, &segments, &PATH_SEPARATOR.to_string())
}

fn walk<'a>(current: &'a Value, segments: &[&str], separator: &str) -> Result<&'a Value, PathLookupError> {
  let Some(first) = segments.first() else {
    return Ok(current);
  };

  // Failures below the shortest matching key are reported.
  let mut first_error = None;
  for end in 1..=segments.len() {
    let Some(next) = child(current, &segments[..end].join(separator)) else {
      continue;
    };
    match walk(next, &segments[end..], separator) {
      Ok(found) => return Ok(found),
      Err(err) => {
        first_error.get_or_insert(err);
      }
    }
  }

  Err(first_error.unwrap_or_else(|| PathLookupError::MissingSegment {
    segment: (*first).to_string(),
    snapshot: snapshot(current),
  }))
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
  match value {
    Value::Object(map) => map.get(key),
    Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
    _ => None,
  }
}

fn snapshot(value: &Value) -> String {
  match value {
    Value::Object(map) => {
      let mut keys: Vec<&str> = map.keys().map(String::as_str).take(SNAPSHOT_KEY_LIMIT).collect();
      if map.len() > SNAPSHOT_KEY_LIMIT {
        keys.push("...");
      }
      format!("object {{ {} }}", keys.join(", "))
    }
    Value::Array(items) => format!("array of {} items", items.len()),
    scalar => {
      let text = scalar.to_string();
      if text.len() > SNAPSHOT_SCALAR_LIMIT {
        let cut = text
          .char_indices()
          .map(|(index, _)| index)
          .take_while(|index| *index <= SNAPSHOT_SCALAR_LIMIT)
          .last()
          .unwrap_or(0);
        format!("{}...", &text[..cut])
      } else {
        text
      }
    }
  }
}
