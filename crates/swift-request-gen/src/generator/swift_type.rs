use std::fmt;

/// Swift type of one generated request property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SwiftType {
  String { optional: bool },
  Int { optional: bool },
  /// `[String]`, bound as a comma separated string.
  StringArray { optional: bool },
  /// An enum generated from an inline `string` schema with `enum` values.
  Named { name: String, optional: bool },
  /// `Set<Element>` of a generated parameter enum.
  Set { element: String, optional: bool },
  /// Placeholder emitted when no mapping rule applies.
  Unresolved { parameter_name: String },
}

impl SwiftType {
  pub fn is_optional(&self) -> bool {
    match self {
      Self::String { optional }
      | Self::Int { optional }
      | Self::StringArray { optional }
      | Self::Named { optional, .. }
      | Self::Set { optional, .. } => *optional,
      Self::Unresolved { .. } => false,
    }
  }

  /// Types the request binder can assign without a generated `bind(param:)` helper.
  pub fn is_primitive(&self) -> bool {
    matches!(
      self,
      Self::String { .. } | Self::Int { .. } | Self::StringArray { .. }
    )
  }
}

impl fmt::Display for SwiftType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let suffix = if self.is_optional() { "?" } else { "" };
    match self {
      Self::String { .. } => write!(f, "String{suffix}"),
      Self::Int { .. } => write!(f, "Int{suffix}"),
      Self::StringArray { .. } => write!(f, "[String]{suffix}"),
      Self::Named { name, .. } => write!(f, "{name}{suffix}"),
      Self::Set { element, .. } => write!(f, "Set<{element}>{suffix}"),
      Self::Unresolved { parameter_name } => write!(f, "Can not resolve: {parameter_name}"),
    }
  }
}
