use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fin_common::{CellValue, format_numeric};
use fin_profile::{ColumnKind, ColumnProfile, ColumnStats, DatasetProfile, TableFormatAudit};

pub fn print_profile(profile: &DatasetProfile) {
    println!("File: {}", profile.file_name);
    println!(
        "Rows: {}  Columns: {}  Format: {}",
        profile.row_count, profile.column_count, profile.orientation
    );
    println!("Periods: {}", join_or_dash(&profile.periods));
    println!("Metrics: {}", join_or_dash(&profile.metrics));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
        header_cell("Nulls"),
        header_cell("Unique"),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &profile.columns {
        table.add_row(column_row(column));
    }
    println!("{table}");

    print_preview(profile);
}

fn column_row(column: &ColumnProfile) -> Vec<Cell> {
    let name = Cell::new(&column.name).add_attribute(Attribute::Bold);
    let kind = kind_cell(column.kind);
    match &column.stats {
        ColumnStats::Numeric(stats) => vec![
            name,
            kind,
            number_cell(stats.min),
            number_cell(stats.max),
            number_cell(stats.mean),
            count_cell(stats.null_count, Color::Yellow),
            dim_cell("-"),
            dim_cell("-"),
        ],
        ColumnStats::Distinct(stats) => vec![
            name,
            kind,
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(stats.unique_values),
            Cell::new(
                stats
                    .sample_values
                    .iter()
                    .map(CellValue::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ],
    }
}

fn print_preview(profile: &DatasetProfile) {
    if profile.sample_rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        profile
            .columns
            .iter()
            .map(|column| header_cell(&column.name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in &profile.sample_rows {
        table.add_row(row.iter().map(preview_cell).collect::<Vec<_>>());
    }
    println!("Preview:");
    println!("{table}");
}

pub fn print_audit(file_name: &str, audit: &TableFormatAudit) {
    println!("File: {file_name}");
    if audit.is_empty() {
        println!("No data columns to audit.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Format"),
        header_cell("Count"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, report) in audit.iter() {
        for (index, (category, bucket)) in report.iter().enumerate() {
            let column_cell = if index == 0 {
                Cell::new(column).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let format_cell = if category.is_numeric() {
                Cell::new(category)
            } else {
                Cell::new(category).fg(Color::Yellow)
            };
            table.add_row(vec![
                column_cell,
                format_cell,
                Cell::new(bucket.count),
                dim_cell(bucket.examples.join(", ")),
            ]);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn kind_cell(kind: ColumnKind) -> Cell {
    let color = match kind {
        ColumnKind::Category => Color::Magenta,
        ColumnKind::Numeric => Color::Green,
        ColumnKind::Text => Color::Grey,
    };
    Cell::new(kind).fg(color)
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_numeric(value)),
        None => dim_cell("-"),
    }
}

fn preview_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Absent => dim_cell("null"),
        CellValue::Float(v) if v.is_nan() => dim_cell("null"),
        other => Cell::new(other),
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
