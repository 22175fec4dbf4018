use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fieldmap_cli::script::ReplayReport;
use fieldmap_map::{CommitBatch, ReviewView};
use fieldmap_model::{ChangeKind, ChangeRecord, Edge, EdgeOrigin, Field, FieldRegistry, FieldSide};

/// Source and target fields side by side, one row per position.
pub fn fields_table(registry: &FieldRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source"),
        header_cell("Type"),
        header_cell("Target"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    let source = registry.fields(FieldSide::Source);
    let target = registry.fields(FieldSide::Target);
    for index in 0..source.len().max(target.len()) {
        let (source_name, source_type) = field_cells(source.get(index));
        let (target_name, target_type) = field_cells(target.get(index));
        table.add_row(vec![
            dim_cell(index + 1),
            source_name,
            source_type,
            target_name,
            target_type,
        ]);
    }
    table
}

fn field_cells(field: Option<&Field>) -> (Cell, Cell) {
    match field {
        Some(field) => (
            Cell::new(&field.name).add_attribute(Attribute::Bold),
            dim_cell(&field.data_type),
        ),
        None => (dim_cell("-"), dim_cell("-")),
    }
}

/// Current edges with resolved field names.
pub fn edges_table(registry: &FieldRegistry, edges: &[Edge]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Edge"),
        header_cell("Source"),
        header_cell(""),
        header_cell("Target"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    for edge in edges {
        table.add_row(vec![
            Cell::new(&edge.id).fg(Color::Blue),
            Cell::new(registry.field_name(&edge.source)),
            dim_cell("→"),
            Cell::new(registry.field_name(&edge.target)),
            origin_cell(edge.origin),
        ]);
    }
    table
}

/// The review dialog as a single-column table.
pub fn review_table(view: &ReviewView) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(ReviewView::TITLE)]);
    apply_table_style(&mut table);
    if view.is_empty() {
        table.add_row(vec![dim_cell(ReviewView::NO_CHANGES)]);
    } else {
        for change in view.changes() {
            table.add_row(vec![change_cell(change)]);
        }
    }
    table
}

pub fn commit_table(batch: &CommitBatch) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Source"),
        header_cell("Target"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for change in &batch.changes {
        table.add_row(vec![
            kind_cell(change.kind),
            Cell::new(&change.source_name),
            Cell::new(&change.target_name),
        ]);
    }
    table
}

pub fn print_replay(registry: &FieldRegistry, report: &ReplayReport) {
    for (index, view) in report.reviews.iter().enumerate() {
        println!("Review {}:", index + 1);
        println!("{}", review_table(view));
    }
    for batch in &report.commits {
        println!("Commit {} ({} changes):", batch.sequence, batch.changes.len());
        if !batch.changes.is_empty() {
            println!("{}", commit_table(batch));
        }
    }
    println!("Edges:");
    println!("{}", edges_table(registry, &report.edges));
    println!(
        "Pending: {} added, {} removed",
        report.pending_summary.added, report.pending_summary.removed
    );
    if report.ignored > 0 {
        eprintln!(
            "warning: {} gesture(s) ignored while the review dialog was open",
            report.ignored
        );
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

fn change_cell(change: &ChangeRecord) -> Cell {
    Cell::new(change).fg(kind_color(change.kind))
}

fn kind_cell(kind: ChangeKind) -> Cell {
    Cell::new(kind.as_str().to_uppercase())
        .fg(kind_color(kind))
        .add_attribute(Attribute::Bold)
}

fn kind_color(kind: ChangeKind) -> Color {
    match kind {
        ChangeKind::Add => Color::Green,
        ChangeKind::Remove => Color::Red,
    }
}

fn origin_cell(origin: EdgeOrigin) -> Cell {
    match origin {
        EdgeOrigin::Seeded => Cell::new("mapped").fg(Color::Green),
        EdgeOrigin::Drawn => Cell::new("pending")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
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
