use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::ImportOutcome;

pub fn print_summary(outcome: &ImportOutcome) {
    println!("File: {}", outcome.filename);
    if let Some(path) = &outcome.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    if outcome.dry_run {
        println!("Dry run: no records were persisted");
    }
    if let Some(message) = &outcome.response.error {
        eprintln!("Import rejected: {message}");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Imported"),
        header_cell("Failed"),
        header_cell("Total"),
    ]);
    apply_counts_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let success = outcome.response.success;
    let errors = outcome.response.errors;
    table.add_row(vec![
        Cell::new(success)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(errors, Color::Red),
        Cell::new(success + errors).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(outcome);
}

fn print_issue_table(outcome: &ImportOutcome) {
    let issues = &outcome.response.details;
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Error"),
        header_cell("Data"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(issue.error.clone()),
            match &issue.data {
                Some(data) => Cell::new(data.clone()),
                None => dim_cell("-"),
            },
        ]);
    }
    println!();
    println!("Rejected rows:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_counts_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
