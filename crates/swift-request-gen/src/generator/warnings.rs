use strum::Display;

/// Non-fatal findings collected while classifying and rendering one path.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Can not resolve type of '{parameter_name}' ({schema_type}), emitting a placeholder")]
  UnresolvedType {
    parameter_name: String,
    schema_type: String,
  },
  #[strum(to_string = "Value at '{path}' is not a valid {shape}: {error}")]
  ShapeMismatch {
    path: String,
    shape: String,
    error: String,
  },
  #[strum(to_string = "Path parameter '{{{parameter_name}}}' is not declared by the operation")]
  UndeclaredPathParameter { parameter_name: String },
}

impl GenerationWarning {
  /// Shape diagnostics are only interesting when asked for.
  pub fn is_diagnostic(&self) -> bool {
    matches!(self, Self::ShapeMismatch { .. })
  }
}
