use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cube_model::NormalizeError;

use crate::commands::CheckResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_check(result: &CheckResult) {
    println!("{}", model_table(result));
    if result.has_errors() {
        println!("{}", error_table(result));
    }
}

/// Per-model column and error counts with a total row.
pub fn model_table(result: &CheckResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Model"),
        header_cell("Columns"),
        header_cell("Unknown types"),
    ]);
    apply_table_style(&mut table);
    let mut total_columns = 0usize;
    for model in &result.models {
        total_columns += model.columns;
        table.add_row(vec![
            Cell::new(&model.model),
            Cell::new(model.columns).set_alignment(CellAlignment::Right),
            count_cell(model.errors.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_columns)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        count_cell(result.error_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per column whose declared type could not be normalized.
pub fn error_table(result: &CheckResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Model"),
        header_cell("Column"),
        header_cell("Declared type"),
    ]);
    apply_table_style(&mut table);
    for error in result.models.iter().flat_map(|m| &m.errors) {
        let NormalizeError::UnmappableType {
            model,
            column,
            data_type,
        } = error;
        table.add_row(vec![
            Cell::new(model),
            Cell::new(column),
            Cell::new(data_type).fg(Color::Red),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 { cell.fg(Color::Red) } else { cell }
}
