//! Terminal summary of a cleaning run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addrnorm_model::ZipValidation;

use crate::types::RunReport;

pub fn print_summary(report: &RunReport) {
    println!("Input: {}", report.input.display());
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Columns: {}", report.output_columns.join(", "));

    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(stats.rows)]);
    table.add_row(vec![
        Cell::new("States split from city"),
        count_cell(stats.states_split, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("ZIPs accepted"),
        count_cell(stats.zips_accepted, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("ZIPs rejected"),
        count_cell(stats.zips_rejected, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("ZIPs absent"),
        count_cell(stats.zips_absent, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Placeholders cleared"),
        count_cell(stats.sentinels_replaced, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("ZIP screening"),
        validation_cell(report.options.zip_validation),
    ]);
    table.add_row(vec![Cell::new("Encoding"), dim_cell(&report.encoding)]);
    table.add_row(vec![
        Cell::new("Duration")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} ms", report.duration_ms)).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn validation_cell(validation: ZipValidation) -> Cell {
    match validation {
        ZipValidation::Strict => Cell::new("strict").fg(Color::Green),
        ZipValidation::Permissive => Cell::new("permissive").fg(Color::Yellow),
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
