use http::Method;
use itertools::Itertools;
use strum::Display;

use super::{
  INDENT,
  descriptor::{DescriptorLocation, ParameterDescriptor, ResolvedParameters, resolve_operation},
  naming::{capitalize_first_letter, oauth_scope_comment},
  shapes::{Operation, SchemaType},
  warnings::GenerationWarning,
};
use crate::utils::{PATH_SEPARATOR, doc_comment_lines};

const MANUAL_BODY_BINDING: &str =
  "#warning(\"Please write it yourself as it is difficult to generate automatically.\")";

const SUPPORTED_METHODS: [Method; 5] = [Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RequestPathError {
  #[strum(to_string = "'{path}' is not of the form paths.<url>.<method>")]
  Malformed { path: String },
  #[strum(to_string = "unsupported HTTP method '{method}'")]
  UnsupportedMethod { method: String },
}

impl std::error::Error for RequestPathError {}

/// URL template and HTTP method encoded in a `paths.<url>.<method>` lookup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestTarget<'a> {
  pub(crate) url: &'a str,
  pub(crate) method: Method,
}

impl<'a> RequestTarget<'a> {
  pub(crate) fn from_path(path: &'a str) -> Result<Self, RequestPathError> {
    let malformed = || RequestPathError::Malformed { path: path.to_string() };

    let (_, rest) = path.split_once(PATH_SEPARATOR).ok_or_else(malformed)?;
    let (url, method) = rest.rsplit_once(PATH_SEPARATOR).ok_or_else(malformed)?;
    if url.is_empty() {
      return Err(malformed());
    }

    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
      .ok()
      .filter(|m| SUPPORTED_METHODS.contains(m))
      .ok_or_else(|| RequestPathError::UnsupportedMethod {
        method: method.to_string(),
      })?;

    Ok(Self { url, method })
  }

  fn method_name(&self) -> String {
    self.method.as_str().to_ascii_lowercase()
  }
}

#[derive(Debug, Clone)]
pub(crate) struct GeneratedRequest {
  pub(crate) code: String,
  pub(crate) warnings: Vec<GenerationWarning>,
}

pub(crate) fn generate_request(path: &str, operation: &Operation) -> Result<GeneratedRequest, RequestPathError> {
  let target = RequestTarget::from_path(path)?;
  let resolved = resolve_operation(operation);
  let mut warnings = resolved.warnings.clone();

  let (url, undeclared) = substitute_path_parameters(target.url, &resolved);
  warnings.extend(
    undeclared
      .into_iter()
      .map(|parameter_name| GenerationWarning::UndeclaredPathParameter { parameter_name }),
  );

  let code = RequestClass {
    name: request_class_name(&target.method_name(), &operation.operation_id),
    method: target.method_name(),
    url,
    operation,
    resolved: &resolved,
  }
  .render();

  Ok(GeneratedRequest { code, warnings })
}

/// `get` + `getDmEvents` gives `GetDmEventsRequestV2`; `post` +
/// `dmConversationIdCreate` gives `PostDmConversationRequestV2`.
pub(crate) fn request_class_name(method: &str, operation_id: &str) -> String {
  let prefix = if operation_id.starts_with(method) { "" } else { method };
  let operation = operation_id.strip_suffix("EventIdCreate").unwrap_or(operation_id);
  let operation = operation.strip_suffix("IdCreate").unwrap_or(operation);
  capitalize_first_letter(&format!("{prefix}{}RequestV2", capitalize_first_letter(operation)))
}

/// Replaces each `{name}` placeholder with a Swift interpolation of the matching
/// path property. Placeholders without a declared parameter are kept verbatim
/// and returned.
fn substitute_path_parameters(url: &str, resolved: &ResolvedParameters) -> (String, Vec<String>) {
  let mut result = url.to_string();
  for descriptor in resolved.at(DescriptorLocation::Path) {
    result = result.replace(
      &format!("{{{}}}", descriptor.source_name),
      &format!("\\({})", descriptor.property_name),
    );
  }

  let undeclared = placeholders(&result).map(str::to_string).unique().collect();
  (result, undeclared)
}

/// Names of the `{...}` placeholders left in `url`.
fn placeholders(url: &str) -> impl Iterator<Item = &str> {
  url
    .split('{')
    .skip(1)
    .filter_map(|chunk| chunk.split_once('}'))
    .map(|(name, _)| name)
    .filter(|name| !name.is_empty())
}

struct RequestClass<'a> {
  name: String,
  method: String,
  url: String,
  operation: &'a Operation,
  resolved: &'a ResolvedParameters,
}

impl RequestClass<'_> {
  fn render(&self) -> String {
    let mut lines = vec!["import Foundation".to_string(), String::new()];

    lines.extend(self.doc_lines());
    lines.push(format!("open class {}: TwitterAPIRequest {{", self.name));
    lines.push(String::new());

    if !self.resolved.descriptors.is_empty() {
      for descriptor in &self.resolved.descriptors {
        lines.extend(doc_comment_lines(&descriptor.comment, INDENT));
        lines.push(format!(
          "{INDENT}public let {}: {}",
          descriptor.property_name, descriptor.swift_type
        ));
      }
      lines.push(String::new());
    }

    lines.extend(accessor("public var method: HTTPMethod", &format!(".{}", self.method)));
    lines.push(String::new());
    lines.extend(accessor("public var path: String", &format!("\"{}\"", self.url)));
    lines.push(String::new());

    if self.resolved.has_json_body() {
      lines.extend(accessor("public var bodyContentType: BodyContentType", ".json"));
      lines.push(String::new());
    }

    lines.extend(self.parameters_block());
    lines.push(String::new());
    lines.extend(self.initializer());
    lines.push("}".to_string());

    let mut code = lines.join("\n");
    code.push('\n');
    code
  }

  fn doc_lines(&self) -> Vec<String> {
    let operation = self.operation;
    let comments = [
      Some(operation.description.clone()),
      operation.external_docs.as_ref().map(|docs| docs.url.clone()),
      oauth_scope_comment(operation.oauth2_scopes()),
    ];

    comments
      .into_iter()
      .flatten()
      .filter(|comment| !comment.is_empty())
      .flat_map(|comment| doc_comment_lines(&comment, ""))
      .collect()
  }

  fn parameters_block(&self) -> Vec<String> {
    let body_indent = format!("{INDENT}{INDENT}");
    let mut lines = vec![
      format!("{INDENT}open var parameters: [String: Any] {{"),
      format!("{body_indent}var p = [String: Any]()"),
    ];

    lines.extend(
      self
        .resolved
        .at(DescriptorLocation::Query)
        .map(|descriptor| format!("{body_indent}{}", bind_line(descriptor))),
    );

    if self.resolved.has_json_body() {
      lines.push(format!("{body_indent}{MANUAL_BODY_BINDING}"));
    }

    lines.push(format!("{body_indent}return p"));
    lines.push(format!("{INDENT}}}"));
    lines
  }

  fn initializer(&self) -> Vec<String> {
    let descriptors = &self.resolved.descriptors;
    if descriptors.is_empty() {
      return vec![format!("{INDENT}public init() {{}}")];
    }

    let argument_indent = format!("{INDENT}{INDENT}");
    let arguments = descriptors
      .iter()
      .map(|d| {
        let default = if d.is_optional { " = .none" } else { "" };
        format!("{argument_indent}{}: {}{default}", d.property_name, d.swift_type)
      })
      .join(",\n");

    let mut lines = vec![format!("{INDENT}public init("), arguments, format!("{INDENT}) {{")];
    lines.extend(
      descriptors
        .iter()
        .map(|d| format!("{argument_indent}self.{name} = {name}", name = d.property_name)),
    );
    lines.push(format!("{INDENT}}}"));
    lines
  }
}

fn accessor(signature: &str, value: &str) -> [String; 3] {
  [
    format!("{INDENT}{signature} {{"),
    format!("{INDENT}{INDENT}return {value}"),
    format!("{INDENT}}}"),
  ]
}

/// Query binding for one descriptor: scalars are assigned directly, string
/// lists are joined, and generated enum sets bind themselves.
fn bind_line(descriptor: &ParameterDescriptor) -> String {
  let ParameterDescriptor {
    property_name: name,
    source_name: key,
    is_optional,
    ..
  } = descriptor;

  match descriptor.source_type {
    SchemaType::Integer | SchemaType::String => {
      if *is_optional {
        format!("{name}.map {{ p[\"{key}\"] = $0 }}")
      } else {
        format!("p[\"{key}\"] = {name}")
      }
    }
    _ if descriptor.is_primitive() => {
      if *is_optional {
        format!("{name}.map {{ p[\"{key}\"] = $0.joined(separator: \",\") }}")
      } else {
        format!("p[\"{key}\"] = {name}.joined(separator: \",\")")
      }
    }
    _ => {
      let chain = if *is_optional { "?" } else { "" };
      format!("{name}{chain}.bind(param: &p)")
    }
  }
}
