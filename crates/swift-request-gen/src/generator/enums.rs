use super::{
  INDENT,
  naming::{path_to_enum_name, snake_case_to_camel_case},
  shapes::{EnumArraySchema, ExpansionParameter, FieldParameter},
};
use crate::utils::doc_comment_lines;

const FIELDS_PROTOCOL: &str = "TwitterAPIv2RequestParameter";
const EXPANSIONS_PROTOCOL: &str = "TwitterExpansionsParameterV2";

/// Swift enum over the closed value list of a `*.fields` or `expansions` parameter.
struct ParameterEnum<'a> {
  name: String,
  protocol: &'static str,
  description: &'a str,
  parameter_name: &'a str,
  values: &'a [String],
  /// Emit the `Set` extension that writes the comma separated wire value.
  with_binding: bool,
}

impl ParameterEnum<'_> {
  fn render(&self) -> String {
    let ParameterEnum {
      name,
      protocol,
      description,
      parameter_name,
      values,
      with_binding,
    } = self;

    let mut lines = doc_comment_lines(description, "");
    lines.push(format!("/// {parameter_name}"));
    lines.push(format!("public enum {name}: {protocol}, Hashable {{"));
    lines.extend(values.iter().map(|value| format!("{INDENT}case {}", case_name(value))));
    lines.push(format!("{INDENT}case other(String)"));
    lines.push(String::new());

    lines.push(format!("{INDENT}public var stringValue: String {{"));
    lines.push(format!("{INDENT}{INDENT}switch self {{"));
    lines.extend(
      values
        .iter()
        .map(|value| format!("{INDENT}{INDENT}case .{}: return \"{value}\"", case_name(value))),
    );
    lines.push(format!("{INDENT}{INDENT}case .other(let string): return string"));
    lines.push(format!("{INDENT}{INDENT}}}"));
    lines.push(format!("{INDENT}}}"));
    lines.push(String::new());

    lines.push(format!("{INDENT}public static let all: Set<Self> = ["));
    lines.extend(
      values
        .iter()
        .map(|value| format!("{INDENT}{INDENT}.{},", case_name(value))),
    );
    lines.push(format!("{INDENT}]"));
    lines.push("}".to_string());

    if *with_binding {
      lines.push(String::new());
      lines.push(format!("extension Set where Element == {name} {{"));
      lines.push(format!("{INDENT}func bind(param: inout [String: Any]) {{"));
      lines.push(format!(
        "{INDENT}{INDENT}param[\"{parameter_name}\"] = commaSeparatedString"
      ));
      lines.push(format!("{INDENT}}}"));
      lines.push("}".to_string());
    }

    let mut code = lines.join("\n");
    code.push('\n');
    code
  }
}

fn case_name(value: &str) -> String {
  snake_case_to_camel_case(value)
}

fn enum_values(schema: &EnumArraySchema) -> &[String] {
  &schema.items.values
}

pub(crate) fn generate_field_enum(path: &str, parameter: &FieldParameter) -> String {
  ParameterEnum {
    name: path_to_enum_name(path),
    protocol: FIELDS_PROTOCOL,
    description: &parameter.description,
    parameter_name: &parameter.name,
    values: enum_values(&parameter.schema),
    with_binding: true,
  }
  .render()
}

/// Expansions are passed to the API client as a whole set, so unlike field
/// enums they get no `bind(param:)` extension.
pub(crate) fn generate_expansion_enum(path: &str, parameter: &ExpansionParameter) -> String {
  ParameterEnum {
    name: path_to_enum_name(path),
    protocol: EXPANSIONS_PROTOCOL,
    description: &parameter.description,
    parameter_name: &parameter.name,
    values: enum_values(&parameter.schema),
    with_binding: false,
  }
  .render()
}
