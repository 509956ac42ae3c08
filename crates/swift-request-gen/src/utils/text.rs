#[inline]
#[must_use]
fn process_doc_text(input: &str) -> String {
  input.replace("\\n", "\n")
}

/// Renders `input` as Swift `///` comment lines at the given indentation.
///
/// Escaped `\n` sequences in spec descriptions are treated as line breaks so a
/// multi-line description never leaks out of its comment.
#[must_use]
pub(crate) fn doc_comment_lines(input: &str, indent: &str) -> Vec<String> {
  process_doc_text(input)
    .lines()
    .map(|line| {
      if line.trim().is_empty() {
        format!("{indent}///")
      } else {
        format!("{indent}/// {}", line.trim_end())
      }
    })
    .collect()
}
