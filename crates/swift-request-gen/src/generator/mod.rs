pub(crate) mod descriptor;
pub mod dispatch;
pub(crate) mod enums;
pub(crate) mod naming;
pub(crate) mod request;
pub(crate) mod shapes;
pub(crate) mod swift_type;
pub mod warnings;

#[cfg(test)]
mod tests;

/// One level of indentation in generated Swift code.
pub(crate) const INDENT: &str = "    ";

pub use dispatch::{DispatchOutcome, GENERATOR_PRIORITY, GeneratedCode, GeneratorKind, dispatch, generatable_paths};
pub use warnings::GenerationWarning;
