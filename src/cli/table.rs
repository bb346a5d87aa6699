use crate::db::result::ResultSet;
use comfy_table::{Cell, ContentArrangement, Table};

/// Renders headers and rows as a boxed terminal table.
pub fn format_table(result: &ResultSet) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    if !result.headers.is_empty() {
        table.set_header(result.headers.iter().map(Cell::new));
    }
    for row in result.rows.iter() {
        table.add_row(row.iter().map(Cell::new));
    }
    table.to_string()
}
