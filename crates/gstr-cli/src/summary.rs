use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gstr_cli::pipeline::{SupplyTotals, supply_totals};
use gstr_model::{Amount, SupplyType};

use crate::types::ReturnResult;

pub fn print_summary(result: &ReturnResult) {
    let document = &result.document;
    println!("GSTIN: {}", result.selector.taxpayer);
    println!(
        "Period: {} {} (fp {})",
        result.selector.period, result.selector.year, document.filing_period_code
    );
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: {} (not written)", result.file_name),
    }

    let mut sources = Table::new();
    sources.set_header(vec![
        header_cell("Sheet"),
        header_cell("Source"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut sources);
    align_column(&mut sources, 2, CellAlignment::Right);
    for slot in &result.slots {
        sources.add_row(vec![
            Cell::new(&slot.label).fg(Color::Blue),
            Cell::new(&slot.source),
            count_cell(slot.rows),
        ]);
    }
    println!("{sources}");

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Supplies"),
        header_cell("Records"),
        header_cell("Taxable value"),
        header_cell("IGST"),
        header_cell("CGST"),
        header_cell("SGST"),
        header_cell("Cess"),
    ]);
    apply_summary_table_style(&mut totals);
    for index in 1..=6 {
        align_column(&mut totals, index, CellAlignment::Right);
    }
    for supply_type in [SupplyType::Inter, SupplyType::Intra] {
        let row = supply_totals(&document.outbound_supplies, supply_type);
        totals.add_row(totals_row(supply_type.as_str(), &row));
    }
    for summary in &document.counterparty_supplies.details {
        totals.add_row(vec![
            Cell::new(format!("ECO {}", summary.counterparty))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            amount_cell(summary.total_supply_value),
            amount_cell(summary.integrated_tax),
            amount_cell(summary.central_tax),
            amount_cell(summary.state_tax),
            amount_cell(summary.cess),
        ]);
    }
    println!("{totals}");
}

fn totals_row(label: &str, totals: &SupplyTotals) -> Vec<Cell> {
    vec![
        Cell::new(label).fg(Color::Blue).add_attribute(Attribute::Bold),
        count_cell(totals.records),
        amount_cell(totals.taxable_value),
        amount_cell(totals.integrated_tax),
        amount_cell(totals.central_tax),
        amount_cell(totals.state_tax),
        amount_cell(totals.cess),
    ]
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn amount_cell(amount: Amount) -> Cell {
    if amount.is_zero() {
        dim_cell(amount)
    } else {
        Cell::new(amount)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
