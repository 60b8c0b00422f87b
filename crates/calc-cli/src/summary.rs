use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use calc_cli::router::KeyRouter;
use calc_core::History;

/// Most recent calculations first, numbered from the newest.
pub fn history_table(history: &History, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Calculation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    if history.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("no calculations yet")]);
    }
    for (index, entry) in history.iter().take(limit).enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(entry)]);
    }
    let hidden = history.len().saturating_sub(limit);
    if hidden > 0 {
        table.add_row(vec![dim_cell("…"), dim_cell(format!("{hidden} older"))]);
    }
    table
}

/// Effective key bindings, one row per keypad action.
pub fn bindings_table(router: &KeyRouter) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Action"), header_cell("Keys")]);
    apply_table_style(&mut table);
    for (action, keys) in router.bindings() {
        let keys = keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        table.add_row(vec![
            Cell::new(action.label()).add_attribute(Attribute::Bold),
            Cell::new(keys),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_cli::settings::KeySettings;

    fn history_of(entries: &[&str]) -> History {
        let mut history = History::default();
        for entry in entries {
            history.push((*entry).to_string());
        }
        history
    }

    #[test]
    fn history_table_lists_newest_first() {
        let history = history_of(&["1 + 1 = 2", "2 * 3 = 6", "6 / 4 = 1.5"]);
        let rendered = history_table(&history, 2).to_string();
        assert!(rendered.contains("6 / 4 = 1.5"));
        assert!(rendered.contains("2 * 3 = 6"));
        assert!(!rendered.contains("1 + 1 = 2"));
        assert!(rendered.contains("1 older"));
    }

    #[test]
    fn empty_history_has_placeholder_row() {
        let rendered = history_table(&History::default(), 5).to_string();
        assert!(rendered.contains("no calculations yet"));
    }

    #[test]
    fn bindings_table_shows_named_keys() {
        let router = KeyRouter::new(&KeySettings::default()).unwrap();
        let rendered = bindings_table(&router).to_string();
        assert!(rendered.contains("<enter>"));
        assert!(rendered.contains("<esc>"));
        assert!(rendered.contains("Backspace"));
    }
}
