//! Terminal tables.

use barcode_checksum::CalculatorRow;
use barcode_core::{BatchReport, RenderRequest};
use barcode_model::Category;
use barcode_standards::{ChecksumOption, FormatDescriptor};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Rows listed per batch summary before the rest are elided.
const MAX_REJECTED_ROWS: usize = 20;

pub fn print_formats<'a>(formats: impl IntoIterator<Item = &'a FormatDescriptor>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Characters"),
        header_cell("Length"),
        header_cell("Checksums"),
    ]);
    apply_table_style(&mut table);
    for descriptor in formats {
        let checksums: Vec<&str> = descriptor
            .checksums
            .iter()
            .filter(|option| !option.kind.is_none())
            .map(|option| option.kind.as_str())
            .collect();
        let checksum_cell = if checksums.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(checksums.join(", "))
        };
        table.add_row(vec![
            Cell::new(descriptor.format.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(descriptor.label),
            category_cell(descriptor.category),
            Cell::new(descriptor.valid_chars),
            Cell::new(descriptor.length_hint),
            checksum_cell,
        ]);
    }
    println!("{table}");
}

pub fn print_checksum_options(descriptor: &FormatDescriptor) {
    println!("{} ({})", descriptor.label, descriptor.format);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Checksum"), header_cell("Description")]);
    apply_table_style(&mut table);
    for ChecksumOption { kind, label } in &descriptor.checksums {
        let id = if kind.is_none() {
            dim_cell(kind.as_str())
        } else {
            Cell::new(kind.as_str()).fg(Color::Blue)
        };
        table.add_row(vec![id, Cell::new(*label)]);
    }
    println!("{table}");
}

pub fn print_render_request(request: &RenderRequest) {
    let style = &request.style;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Value", request.value.clone()),
        ("Format", request.format.to_string()),
        ("Bar width", format_px(style.width)),
        ("Height", format_px(style.height)),
        ("Margin", format_px(style.margin)),
        ("Font size", format_px(style.font_size)),
        ("Show text", style.display_value.to_string()),
        ("Line color", style.line_color.clone()),
        ("Background", style.background.clone()),
        (
            "Quality",
            format!(
                "{} - {}",
                request.quality,
                request.quality.description()
            ),
        ),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_calculator(input: &str, rows: &[CalculatorRow]) {
    println!("Input: {input}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Algorithm"),
        header_cell("Check"),
        header_cell("Full value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for row in rows {
        let name = if row.applicable {
            Cell::new(row.name)
        } else {
            dim_cell(row.name)
        };
        table.add_row(vec![
            name,
            optional_cell(row.value.as_deref(), Color::Green),
            optional_cell(row.full_value.as_deref(), Color::Reset),
        ]);
    }
    println!("{table}");
}

pub fn print_batch_summary(report: &BatchReport) {
    println!(
        "Format: {}  Checksum: {}",
        report.format,
        report.checksum.label()
    );

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Values"),
        header_cell("Prepared"),
        header_cell("Rejected"),
    ]);
    apply_summary_table_style(&mut totals);
    let rejected = report.rejected_count();
    totals.add_row(vec![
        Cell::new(report.total()).add_attribute(Attribute::Bold),
        Cell::new(report.prepared_count()).fg(Color::Green),
        if rejected == 0 {
            dim_cell(rejected)
        } else {
            Cell::new(rejected).fg(Color::Red)
        },
    ]);
    println!("{totals}");

    if rejected == 0 {
        return;
    }
    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Line"),
        header_cell("Value"),
        header_cell("Problem"),
    ]);
    apply_summary_table_style(&mut issues);
    align_column(&mut issues, 0, CellAlignment::Right);
    for item in report
        .items
        .iter()
        .filter(|item| !item.is_prepared())
        .take(MAX_REJECTED_ROWS)
    {
        issues.add_row(vec![
            Cell::new(item.index + 1),
            Cell::new(&item.input),
            Cell::new(item.message()).fg(Color::Yellow),
        ]);
    }
    println!("{issues}");
    if rejected > MAX_REJECTED_ROWS {
        println!("... and {} more", rejected - MAX_REJECTED_ROWS);
    }
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
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_px(value: f32) -> String {
    format!("{value}px")
}

fn category_cell(category: Category) -> Cell {
    match category {
        Category::Linear => Cell::new(category.as_str()),
        Category::Matrix => Cell::new(category.as_str()).fg(Color::Magenta),
    }
}

fn optional_cell(value: Option<&str>, color: Color) -> Cell {
    match value {
        Some(value) => Cell::new(value).fg(color),
        None => dim_cell("-"),
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
