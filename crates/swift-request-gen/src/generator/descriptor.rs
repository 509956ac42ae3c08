use indexmap::IndexMap;

use super::{
  naming::{ref_to_type_name, simple_name_to_type, snake_case_to_camel_case},
  shapes::{Operation, Parameter, ParameterIn, PropertySchema, Schema, SchemaType},
  swift_type::SwiftType,
  warnings::GenerationWarning,
};

const DIRECT_MESSAGE_EVENT_TYPE: &str = "TwitterDirectMessageEventTypeV2";
const USER_ID_REF_SUFFIX: &str = "UserId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorLocation {
  Query,
  Path,
  JsonBody,
}

impl From<ParameterIn> for DescriptorLocation {
  fn from(location: ParameterIn) -> Self {
    match location {
      ParameterIn::Query => Self::Query,
      ParameterIn::Path => Self::Path,
    }
  }
}

/// One generated request property, normalized from a parameter or a body field.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ParameterDescriptor {
  #[builder(into, default)]
  pub comment: String,
  #[builder(into)]
  pub property_name: String,
  pub swift_type: SwiftType,
  pub is_optional: bool,
  pub source_type: SchemaType,
  #[builder(into)]
  pub source_name: String,
  pub location: DescriptorLocation,
}

impl ParameterDescriptor {
  pub fn is_primitive(&self) -> bool {
    self.swift_type.is_primitive()
  }
}

/// Descriptors of one operation, ready for rendering.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedParameters {
  /// All descriptors, unique by property name, required ones first.
  pub(crate) descriptors: Vec<ParameterDescriptor>,
  pub(crate) warnings: Vec<GenerationWarning>,
}

impl ResolvedParameters {
  pub(crate) fn at(&self, location: DescriptorLocation) -> impl Iterator<Item = &ParameterDescriptor> {
    self.descriptors.iter().filter(move |d| d.location == location)
  }

  pub(crate) fn has_json_body(&self) -> bool {
    self.at(DescriptorLocation::JsonBody).next().is_some()
  }
}

/// Resolves every path, query and JSON body field of `operation`.
pub(crate) fn resolve_operation(operation: &Operation) -> ResolvedParameters {
  let mut warnings = vec![];

  let by_location = |location: ParameterIn| operation.parameters.iter().filter(move |p| p.location == location);
  let mut descriptors: Vec<ParameterDescriptor> = by_location(ParameterIn::Path)
    .chain(by_location(ParameterIn::Query))
    .map(|parameter| resolve_parameter(parameter, &mut warnings))
    .collect();

  if let Some(body) = operation.json_body() {
    descriptors.extend(resolve_body(body, &mut warnings));
  }

  ResolvedParameters {
    descriptors: normalize(descriptors),
    warnings,
  }
}

pub(crate) fn resolve_parameter(parameter: &Parameter, warnings: &mut Vec<GenerationWarning>) -> ParameterDescriptor {
  let required = parameter.required.unwrap_or(false);
  let swift_type = TypeQuery {
    name: &parameter.name,
    schema: &parameter.schema,
    ref_path: parameter.ref_path.as_deref(),
    required,
  }
  .resolve(warnings);

  ParameterDescriptor::builder()
    .comment(parameter.description.as_str())
    .property_name(snake_case_to_camel_case(&parameter.name))
    .swift_type(swift_type)
    .is_optional(!required)
    .source_type(parameter.schema.schema_type)
    .source_name(parameter.name.as_str())
    .location(parameter.location.into())
    .build()
}

/// Flattens a JSON request body into one descriptor per leaf property.
///
/// `anyOf` branches are merged into their parent and nested objects are
/// hoisted into the enclosing property list, so every leaf ends up in the root
/// object. Requiredness is therefore judged against the root `required` list.
pub(crate) fn resolve_body(body: &PropertySchema, warnings: &mut Vec<GenerationWarning>) -> Vec<ParameterDescriptor> {
  let no_required: &[String] = &[];
  let (roots, required): (Vec<&Schema>, &[String]) = match body {
    PropertySchema::AnyOf(union) => (union.any_of.iter().collect(), no_required),
    PropertySchema::Schema(schema) => (vec![&**schema], schema.required.as_deref().unwrap_or(no_required)),
  };

  let mut leaves = vec![];
  for root in roots {
    if let Some(properties) = &root.properties {
      flatten_properties(properties, &mut leaves);
    }
  }

  let descriptors: Vec<_> = leaves
    .into_iter()
    .map(|(name, schema)| {
      let is_required = required.iter().any(|r| r == name);
      let swift_type = TypeQuery {
        name,
        schema,
        ref_path: schema.ref_path.as_deref(),
        required: is_required,
      }
      .resolve(warnings);

      ParameterDescriptor::builder()
        .comment(schema.description.clone().unwrap_or_default())
        .property_name(snake_case_to_camel_case(name))
        .swift_type(swift_type)
        .is_optional(!is_required)
        .source_type(schema.schema_type)
        .source_name(name)
        .location(DescriptorLocation::JsonBody)
        .build()
    })
    .collect();

  normalize(descriptors)
}

fn flatten_properties<'a>(properties: &'a IndexMap<String, PropertySchema>, leaves: &mut Vec<(&'a str, &'a Schema)>) {
  for (name, property) in properties {
    match property {
      PropertySchema::AnyOf(union) => {
        for branch in &union.any_of {
          flatten_schema(name, branch, leaves);
        }
      }
      PropertySchema::Schema(schema) => flatten_schema(name, schema, leaves),
    }
  }
}

fn flatten_schema<'a>(name: &'a str, schema: &'a Schema, leaves: &mut Vec<(&'a str, &'a Schema)>) {
  match &schema.properties {
    Some(properties) => flatten_properties(properties, leaves),
    None => leaves.push((name, schema)),
  }
}

/// Drops duplicate property names, preferring an optional variant, then moves
/// required descriptors ahead of optional ones without reordering either group.
pub(crate) fn normalize(descriptors: impl IntoIterator<Item = ParameterDescriptor>) -> Vec<ParameterDescriptor> {
  let mut unique: IndexMap<String, ParameterDescriptor> = IndexMap::new();

  for descriptor in descriptors {
    match unique.get_mut(&descriptor.property_name) {
      Some(existing) => {
        if !existing.is_optional && descriptor.is_optional {
          *existing = descriptor;
        }
      }
      None => {
        unique.insert(descriptor.property_name.clone(), descriptor);
      }
    }
  }

  let (required, optional): (Vec<_>, Vec<_>) = unique.into_values().partition(|d| !d.is_optional);
  required.into_iter().chain(optional).collect()
}

struct TypeQuery<'a> {
  name: &'a str,
  schema: &'a Schema,
  ref_path: Option<&'a str>,
  required: bool,
}

impl TypeQuery<'_> {
  fn resolve(&self, warnings: &mut Vec<GenerationWarning>) -> SwiftType {
    let optional = !self.required;
    let schema = self.schema;

    match schema.schema_type {
      SchemaType::String if schema.enum_values.is_some() => {
        return SwiftType::Named {
          name: simple_name_to_type(self.name),
          optional,
        };
      }
      SchemaType::String => return SwiftType::String { optional },
      SchemaType::Integer => return SwiftType::Int { optional },
      _ => {}
    }

    if self.is_direct_message_event_types() {
      return SwiftType::Set {
        element: DIRECT_MESSAGE_EVENT_TYPE.to_string(),
        optional,
      };
    }

    if schema.schema_type == SchemaType::Array
      && let Some(swift_type) = self.resolve_array(optional)
    {
      return swift_type;
    }

    warnings.push(GenerationWarning::UnresolvedType {
      parameter_name: self.name.to_string(),
      schema_type: schema.schema_type.to_string(),
    });
    SwiftType::Unresolved {
      parameter_name: self.name.to_string(),
    }
  }

  fn is_direct_message_event_types(&self) -> bool {
    self.name == "event_types"
      && self
        .schema
        .items
        .as_ref()
        .and_then(|items| items.enum_values.as_ref())
        .is_some_and(|values| values.iter().any(|v| v == "MessageCreate"))
  }

  fn resolve_array(&self, optional: bool) -> Option<SwiftType> {
    if let Some(element) = self.ref_path.and_then(ref_to_type_name) {
      return Some(SwiftType::Set { element, optional });
    }

    let items = self.schema.items.as_ref()?;

    if items.schema_type == SchemaType::String {
      let is_user_id = items
        .ref_path
        .as_deref()
        .is_some_and(|r| r.ends_with(USER_ID_REF_SUFFIX));
      if is_user_id {
        return Some(SwiftType::StringArray { optional });
      }
      return Some(SwiftType::Set {
        element: simple_name_to_type(self.name),
        optional,
      });
    }

    // An array of single-string objects, e.g. `[{ "media_id": "..." }]`.
    let properties = items.properties.as_ref()?;
    match properties.first() {
      Some((_, PropertySchema::Schema(only))) if properties.len() == 1 && only.schema_type == SchemaType::String => {
        Some(SwiftType::StringArray { optional })
      }
      _ => None,
    }
  }
}
