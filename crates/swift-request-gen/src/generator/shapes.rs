//! Typed decoding of the spec fragments the generators understand.
//!
//! The resolved spec is an untyped JSON tree. Each shape here is recognized
//! purely structurally: a value matches when it deserializes into the shape's
//! struct and passes the shape's pattern checks. Unknown keys are ignored.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Number, Value};
use strum::Display;

static ARRAY_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("array").unwrap());
static QUERY_LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("query").unwrap());
static FIELDS_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".+\.fields$").unwrap());
static EXPANSIONS_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("expansions").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ShapeMismatch {
  #[strum(to_string = "at '{path}': {message}")]
  Decode { path: String, message: String },
  #[strum(to_string = "'{field}' value '{value}' does not match /{pattern}/")]
  Pattern {
    field: &'static str,
    value: String,
    pattern: String,
  },
}

impl std::error::Error for ShapeMismatch {}

/// A structural category a JSON subtree can be decoded into.
pub(crate) trait Shape: DeserializeOwned {
  const NAME: &'static str;

  /// Value-pattern checks that serde alone cannot express.
  fn check(&self) -> Result<(), ShapeMismatch> {
    Ok(())
  }

  fn decode(value: &Value) -> Result<Self, ShapeMismatch> {
    let shape: Self = serde_path_to_error::deserialize(value).map_err(|err| ShapeMismatch::Decode {
      path: err.path().to_string(),
      message: err.inner().to_string(),
    })?;
    shape.check()?;
    Ok(shape)
  }

  fn matches(value: &Value) -> bool {
    Self::decode(value).is_ok()
  }
}

fn check_pattern(field: &'static str, value: &str, pattern: &Regex) -> Result<(), ShapeMismatch> {
  if pattern.is_match(value) {
    return Ok(());
  }
  Err(ShapeMismatch::Pattern {
    field,
    value: value.to_string(),
    pattern: pattern.as_str().to_string(),
  })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SchemaType {
  Object,
  Array,
  Integer,
  String,
  Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterIn {
  Query,
  Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize)]
pub enum SecurityScheme {
  BearerToken,
  OAuth2UserToken,
  UserToken,
}

/// Plain JSON schema as it appears on parameters and request bodies.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "type")]
  pub schema_type: SchemaType,
  pub minimum: Option<Number>,
  pub maximum: Option<Number>,
  pub max_items: Option<Number>,
  pub min_items: Option<Number>,
  pub unique_items: Option<bool>,
  pub items: Option<Box<Schema>>,
  pub format: Option<String>,
  pub default: Option<Value>,
  pub example: Option<Value>,
  #[serde(rename = "enum")]
  pub enum_values: Option<Vec<String>>,
  pub description: Option<String>,
  pub max_length: Option<Number>,
  pub min_length: Option<Number>,
  pub pattern: Option<String>,
  pub properties: Option<IndexMap<String, PropertySchema>>,
  pub required: Option<Vec<String>>,
  pub additional_properties: Option<bool>,
  #[serde(rename = "$$ref")]
  pub ref_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyOfSchema {
  pub any_of: Vec<Schema>,
  #[serde(rename = "$$ref")]
  pub ref_path: Option<String>,
}

/// An object property or request body: either a union or a plain schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PropertySchema {
  AnyOf(AnyOfSchema),
  Schema(Box<Schema>),
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct EnumItems {
  #[serde(rename = "type")]
  pub item_type: String,
  #[serde(rename = "enum")]
  pub values: Vec<String>,
}

/// `type: array` schema whose items are a closed list of strings.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumArraySchema {
  #[serde(rename = "type")]
  pub schema_type: String,
  pub description: String,
  pub min_items: Number,
  pub unique_items: bool,
  pub items: EnumItems,
  pub example: Vec<String>,
}

impl EnumArraySchema {
  fn check(&self) -> Result<(), ShapeMismatch> {
    check_pattern("schema.type", &self.schema_type, &ARRAY_TYPE_RE)
  }
}

/// Query parameter selecting the fields of one resource, e.g. `dm_event.fields`.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct FieldParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  pub description: String,
  pub required: bool,
  pub schema: EnumArraySchema,
  pub explode: bool,
  pub style: String,
}

impl Shape for FieldParameter {
  const NAME: &'static str = "field parameter";

  fn check(&self) -> Result<(), ShapeMismatch> {
    check_pattern("name", &self.name, &FIELDS_NAME_RE)?;
    check_pattern("in", &self.location, &QUERY_LOCATION_RE)?;
    self.schema.check()
  }
}

/// Query parameter selecting which related objects are expanded.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  pub description: String,
  pub schema: EnumArraySchema,
  pub explode: bool,
  pub style: String,
}

impl Shape for ExpansionParameter {
  const NAME: &'static str = "expansion parameter";

  fn check(&self) -> Result<(), ShapeMismatch> {
    check_pattern("name", &self.name, &EXPANSIONS_NAME_RE)?;
    check_pattern("in", &self.location, &QUERY_LOCATION_RE)?;
    self.schema.check()
  }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterIn,
  pub description: String,
  pub required: Option<bool>,
  pub style: Option<String>,
  pub schema: Schema,
  pub explode: Option<bool>,
  pub example: Option<Value>,
  #[serde(rename = "$$ref")]
  pub ref_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonContent {
  pub schema: PropertySchema,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestBodyContent {
  #[serde(rename = "application/json")]
  pub json: JsonContent,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
  pub content: RequestBodyContent,
  pub required: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalDocs {
  pub url: String,
}

/// One HTTP operation under `paths.<url>.<method>`.
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub security: Vec<IndexMap<SecurityScheme, Vec<String>>>,
  pub tags: Vec<String>,
  pub summary: String,
  pub description: String,
  pub operation_id: String,
  #[serde(default)]
  pub parameters: Vec<Parameter>,
  pub request_body: Option<RequestBody>,
  pub responses: Map<String, Value>,
  pub external_docs: Option<ExternalDocs>,
}

impl Shape for Operation {
  const NAME: &'static str = "operation";
}

impl Operation {
  /// Scopes of the OAuth 2.0 user-token security requirement, if any.
  pub fn oauth2_scopes(&self) -> &[String] {
    self
      .security
      .iter()
      .find_map(|requirement| requirement.get(&SecurityScheme::OAuth2UserToken))
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn json_body(&self) -> Option<&PropertySchema> {
    self.request_body.as_ref().map(|body| &body.content.json.schema)
  }
}
