//! Terminal rendering of result tables and run summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use drill_ingest::any_to_string;
use drill_model::{ActionOutcome, RuleKind, RunReport, Severity, is_pass_status};
use drill_report::export_headers;
use drill_report::style::{CATEGORY_COLUMN, HEADER_FILL, category_fill, hex_to_rgb};
use drill_standards::{SHADOWED_CORRESPONDENCES, lithology_codes, rock_type_correspondences};

/// Result table with the export palette applied.
pub fn result_table(rule: RuleKind, df: &DataFrame) -> Table {
    let headers = export_headers(df);
    let category_idx = headers.iter().position(|name| name == CATEGORY_COLUMN);
    let status_idx = rule
        .status_column()
        .and_then(|status| headers.iter().position(|name| name.eq_ignore_ascii_case(status)));

    let mut table = Table::new();
    table.set_header(headers.iter().map(|name| palette_header_cell(name)));
    apply_table_style(&mut table);

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let row = columns.iter().enumerate().map(|(col_idx, column)| {
            let value = column.get(idx).map(any_to_string).unwrap_or_default();
            if Some(col_idx) == status_idx {
                status_cell(&value)
            } else if Some(col_idx) == category_idx {
                category_cell(value)
            } else if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        });
        table.add_row(row);
    }
    table
}

pub fn print_result_table(rule: RuleKind, df: &DataFrame) {
    println!("{}:", rule.label());
    println!("{}", result_table(rule, df));
}

pub fn print_run_summary(report: &RunReport) {
    println!("Hole: {}", report.hole);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Rows"),
        header_cell("Passed"),
        header_cell("Flagged"),
        header_cell("Outcome"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for action in &report.actions {
        let output = match &action.output {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        };
        let rule = Cell::new(action.rule.label())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        match &action.outcome {
            ActionOutcome::Completed { summary } => table.add_row(vec![
                rule,
                Cell::new(summary.rows),
                count_cell(summary.passed, Color::Green),
                count_cell(summary.flagged, Color::Red),
                if summary.is_clean() {
                    Cell::new("clean").fg(Color::Green)
                } else {
                    Cell::new("flagged").fg(Color::Yellow)
                },
                output,
            ]),
            ActionOutcome::Failed {
                severity,
                message,
                dataset,
            } => table.add_row(vec![
                rule,
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                severity_cell(*severity, message),
                match dataset {
                    Some(kind) => Cell::new(format!("input: {}", kind.label())).fg(Color::Yellow),
                    None => output,
                },
            ]),
            ActionOutcome::Skipped { reason } => table.add_row(vec![
                rule,
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell(format!("skipped: {reason}")),
                output,
            ]),
        };
    }
    println!("{table}");

    let notes: Vec<_> = report
        .actions
        .iter()
        .flat_map(|action| action.notes.iter().map(move |note| (action.rule, note)))
        .collect();
    if !notes.is_empty() {
        eprintln!("Notes:");
        for (rule, note) in notes {
            eprintln!("- {rule}: {note}");
        }
    }
}

/// Prints the clito → units and unit → rock type tables.
pub fn print_lookup_tables() {
    let mut lithology = Table::new();
    lithology.set_header(vec![header_cell("Clito"), header_cell("Allowed units")]);
    apply_table_style(&mut lithology);
    align_column(&mut lithology, 0, CellAlignment::Right);
    for (clito, units) in lithology_codes() {
        lithology.add_row(vec![Cell::new(clito), Cell::new(units.join(", "))]);
    }
    println!("Lithology codes:");
    println!("{lithology}");

    let mut rock_types = Table::new();
    rock_types.set_header(vec![header_cell("Unit"), header_cell("Rock type")]);
    apply_table_style(&mut rock_types);
    for (unit, rock_type) in rock_type_correspondences() {
        rock_types.add_row(vec![Cell::new(unit), Cell::new(rock_type)]);
    }
    println!("Rock type correspondences:");
    println!("{rock_types}");
    for (unit, rock_type) in SHADOWED_CORRESPONDENCES {
        println!("note: {unit} -> {rock_type} is listed twice; the later entry applies");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rgb(hex: &str) -> Option<Color> {
    hex_to_rgb(hex).map(|(r, g, b)| Color::Rgb { r, g, b })
}

fn palette_header_cell(label: &str) -> Cell {
    let cell = Cell::new(label)
        .fg(Color::Black)
        .add_attribute(Attribute::Bold);
    match rgb(HEADER_FILL) {
        Some(fill) => cell.bg(fill),
        None => cell,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(value: String) -> Cell {
    match category_fill(&value).and_then(rgb) {
        Some(fill) => Cell::new(value).fg(Color::Black).bg(fill),
        None => Cell::new(value),
    }
}

fn status_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else if is_pass_status(value) {
        Cell::new(value).fg(Color::Green)
    } else {
        Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn severity_cell(severity: Severity, message: &str) -> Cell {
    let cell = Cell::new(format!("{}: {message}", severity.label()));
    match severity {
        Severity::Error => cell.fg(Color::Red),
        Severity::Warning => cell.fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
