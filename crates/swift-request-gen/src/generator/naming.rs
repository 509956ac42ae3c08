use std::sync::LazyLock;

use regex::Regex;

use crate::utils::PATH_SEPARATOR;

const TYPE_NAMESPACE: &str = "Twitter";
const TYPE_VERSION: &str = "V2";

static FIELDS_REF_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"#/components/parameters/(.+)FieldsParameter").unwrap());
static EXPANSIONS_REF_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"#/components/parameters/(.+)ExpansionsParameter").unwrap());

/// Converts `snake_case` and dotted wire names into Swift `camelCase`.
///
/// The first segment is kept as-is; every following segment gets its first
/// letter capitalized, except `id` and `ids` which become `ID` and `IDs`.
///
/// ```text
/// dm_conversation_id    -> dmConversationID
/// attachments.poll_ids  -> attachmentsPollIDs
/// ```
pub(crate) fn snake_case_to_camel_case(input: &str) -> String {
  let mut segments = input.split(['_', '.']);
  let mut result = segments.next().unwrap_or_default().to_string();

  for segment in segments {
    match segment {
      "id" => result.push_str("ID"),
      "ids" => result.push_str("IDs"),
      _ => result.push_str(&capitalize_first_letter(segment)),
    }
  }

  result
}

pub(crate) fn capitalize_first_letter(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

#[cfg(test)]
pub(crate) fn lower_case_first_letter(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
  }
}

/// Derives the Swift enum name from the last segment of a generation path.
///
/// `components.parameters.DmEventFieldsParameter` becomes `TwitterDmEventFieldsV2`.
pub(crate) fn path_to_enum_name(path: &str) -> String {
  let last = path.rsplit(PATH_SEPARATOR).next().unwrap_or(path);
  let base = last.strip_suffix("Parameter").unwrap_or(last);
  format!("{TYPE_NAMESPACE}{base}{TYPE_VERSION}")
}

/// Derives a type name from a plain parameter name by dropping one trailing `s`.
///
/// This is a naive singularization: `tweet_ids` becomes `TweetID`, but irregular
/// plurals such as `replies` come out as `Replie`.
pub(crate) fn simple_name_to_type(name: &str) -> String {
  let type_name = capitalize_first_letter(&snake_case_to_camel_case(name));
  match type_name.strip_suffix('s') {
    Some(singular) => singular.to_string(),
    None => type_name,
  }
}

/// Maps a shared parameter component pointer to the enum generated for it.
pub(crate) fn ref_to_type_name(ref_path: &str) -> Option<String> {
  if let Some(captures) = FIELDS_REF_RE.captures(ref_path) {
    return Some(format!("{TYPE_NAMESPACE}{}Fields{TYPE_VERSION}", &captures[1]));
  }

  EXPANSIONS_REF_RE
    .captures(ref_path)
    .map(|captures| format!("{TYPE_NAMESPACE}{}Expansions{TYPE_VERSION}", &captures[1]))
}

pub(crate) fn oauth_scope_comment(scopes: &[String]) -> Option<String> {
  if scopes.is_empty() {
    return None;
  }
  Some(format!("Required OAuth 2.0 scopes: {}", scopes.join(", ")))
}
