use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{GENERATOR_PRIORITY, GeneratorKind, generatable_paths},
  ui::{Colors, Role, term_width},
  utils::spec::load_resolved,
};

/// Orders entries by generator priority, keeping document order within a kind.
fn sort_by_priority(entries: &mut [(GeneratorKind, String)]) {
  entries.sort_by_key(|(kind, _)| GENERATOR_PRIORITY.iter().position(|k| k == kind));
}

fn build_table(entries: &[(GeneratorKind, String)], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("GENERATOR").fg(colors.comfy(Role::Label)));
  header.add_cell(Cell::new("PATH").fg(colors.comfy(Role::Label)));
  table.set_header(header);

  for (kind, path) in entries {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(kind)
        .fg(colors.comfy(Role::Warning))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(path)
        .fg(colors.comfy(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    table.add_row(row);
  }

  table
}

pub async fn list_paths(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let spec = load_resolved(input).await?;

  let mut entries = generatable_paths(&spec);
  sort_by_priority(&mut entries);

  println!("{}", build_table(&entries, colors));
  println!("{} generatable paths", entries.len());

  Ok(())
}
