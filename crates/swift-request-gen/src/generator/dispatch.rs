use serde_json::Value;
use strum::Display;

use super::{
  enums::{generate_expansion_enum, generate_field_enum},
  request::{RequestPathError, generate_request},
  shapes::{ExpansionParameter, FieldParameter, Operation, Shape, ShapeMismatch},
  warnings::GenerationWarning,
};
use crate::utils::PATH_SEPARATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum GeneratorKind {
  FieldEnum,
  ExpansionEnum,
  RequestClass,
}

/// Order in which generators are tried; the first whose shape matches wins.
pub const GENERATOR_PRIORITY: [GeneratorKind; 3] = [
  GeneratorKind::FieldEnum,
  GeneratorKind::ExpansionEnum,
  GeneratorKind::RequestClass,
];

impl GeneratorKind {
  pub fn can_generate(self, value: &Value) -> bool {
    SpecShape::decode(self, value).is_ok()
  }

  const fn shape_name(self) -> &'static str {
    match self {
      Self::FieldEnum => FieldParameter::NAME,
      Self::ExpansionEnum => ExpansionParameter::NAME,
      Self::RequestClass => Operation::NAME,
    }
  }

  /// Only a failed operation decode is worth reporting: field and expansion
  /// shapes are probed against nearly every value and mostly miss.
  const fn reports_mismatch(self) -> bool {
    matches!(self, Self::RequestClass)
  }
}

/// A spec value decoded into the shape of the generator that accepts it.
#[derive(Debug, Clone)]
pub(crate) enum SpecShape {
  FieldParameter(FieldParameter),
  ExpansionParameter(ExpansionParameter),
  Operation(Box<Operation>),
}

impl SpecShape {
  fn decode(kind: GeneratorKind, value: &Value) -> Result<Self, ShapeMismatch> {
    Ok(match kind {
      GeneratorKind::FieldEnum => Self::FieldParameter(FieldParameter::decode(value)?),
      GeneratorKind::ExpansionEnum => Self::ExpansionParameter(ExpansionParameter::decode(value)?),
      GeneratorKind::RequestClass => Self::Operation(Box::new(Operation::decode(value)?)),
    })
  }

  pub(crate) const fn kind(&self) -> GeneratorKind {
    match self {
      Self::FieldParameter(_) => GeneratorKind::FieldEnum,
      Self::ExpansionParameter(_) => GeneratorKind::ExpansionEnum,
      Self::Operation(_) => GeneratorKind::RequestClass,
    }
  }

  /// Decodes `value` with each generator's shape in priority order.
  pub(crate) fn classify(path: &str, value: &Value) -> Classification {
    let mut diagnostics = vec![];

    for kind in GENERATOR_PRIORITY {
      match Self::decode(kind, value) {
        Ok(shape) => {
          return Classification {
            shape: Some(shape),
            diagnostics,
          };
        }
        Err(error) if kind.reports_mismatch() => diagnostics.push(GenerationWarning::ShapeMismatch {
          path: path.to_string(),
          shape: kind.shape_name().to_string(),
          error: error.to_string(),
        }),
        Err(_) => {}
      }
    }

    Classification {
      shape: None,
      diagnostics,
    }
  }
}

#[derive(Debug, Clone)]
pub(crate) struct Classification {
  pub(crate) shape: Option<SpecShape>,
  pub(crate) diagnostics: Vec<GenerationWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
  pub generator: GeneratorKind,
  pub code: String,
  pub warnings: Vec<GenerationWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
  Generated(GeneratedCode),
  NoMatch { diagnostics: Vec<GenerationWarning> },
}

/// Renders the value found at `path` with the first generator whose shape it matches.
pub fn dispatch(path: &str, value: &Value) -> Result<DispatchOutcome, RequestPathError> {
  let Classification { shape, diagnostics } = SpecShape::classify(path, value);
  let Some(shape) = shape else {
    return Ok(DispatchOutcome::NoMatch { diagnostics });
  };

  let generator = shape.kind();
  let (code, warnings) = match &shape {
    SpecShape::FieldParameter(parameter) => (generate_field_enum(path, parameter), vec![]),
    SpecShape::ExpansionParameter(parameter) => (generate_expansion_enum(path, parameter), vec![]),
    SpecShape::Operation(operation) => {
      let request = generate_request(path, operation)?;
      (request.code, request.warnings)
    }
  };

  Ok(DispatchOutcome::Generated(GeneratedCode {
    generator,
    code,
    warnings,
  }))
}

/// Every shared parameter and operation in `spec` that some generator accepts.
pub fn generatable_paths(spec: &Value) -> Vec<(GeneratorKind, String)> {
  let mut found = vec![];

  if let Some(parameters) = spec.pointer("/components/parameters").and_then(Value::as_object) {
    for (name, value) in parameters {
      let path = format!("components{PATH_SEPARATOR}parameters{PATH_SEPARATOR}{name}");
      if let Some(shape) = SpecShape::classify(&path, value).shape {
        found.push((shape.kind(), path));
      }
    }
  }

  if let Some(paths) = spec.get("paths").and_then(Value::as_object) {
    for (url, methods) in paths {
      let Some(methods) = methods.as_object() else {
        continue;
      };
      for (method, value) in methods {
        let path = format!("paths{PATH_SEPARATOR}{url}{PATH_SEPARATOR}{method}");
        if GeneratorKind::RequestClass.can_generate(value) {
          found.push((GeneratorKind::RequestClass, path));
        }
      }
    }
  }

  found
}
