use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use gstr_cli::logging::redact_value;
use gstr_cli::pipeline::{default_year, load_session, prepare_return, slot_label, upload_plan};
use gstr_model::{FilingForm, FilingPeriod, FrequencyType, Quarter};
use gstr_output::{document_file_name, to_pretty_json, write_document};
use gstr_transform::quarter_last_month_code;

use crate::cli::{FilingArgs, MonthlyArgs, QuarterlyArgs};
use crate::summary::apply_table_style;
use crate::types::{ReturnResult, SlotSummary};

pub fn run_quarters() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Quarter", "Months", "Period code"]);
    apply_table_style(&mut table);
    for quarter in Quarter::ALL {
        let months = quarter
            .months()
            .iter()
            .map(|month| month.name())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            quarter.label(),
            months,
            format!("{}YYYY", quarter_last_month_code(quarter)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_monthly(args: &MonthlyArgs) -> Result<ReturnResult> {
    let form = filing_form(&args.filing, FrequencyType::Monthly, args.month.clone());
    run_filing(
        &form,
        &args.filing,
        FrequencyType::Monthly,
        std::slice::from_ref(&args.forward),
        std::slice::from_ref(&args.reverse),
    )
}

pub fn run_quarterly(args: &QuarterlyArgs) -> Result<ReturnResult> {
    let form = filing_form(
        &args.filing,
        FrequencyType::Quarterly,
        args.quarter.to_string(),
    );
    run_filing(
        &form,
        &args.filing,
        FrequencyType::Quarterly,
        &args.forward,
        &args.reverse,
    )
}

fn filing_form(args: &FilingArgs, frequency: FrequencyType, period: String) -> FilingForm {
    FilingForm::new()
        .with_frequency(frequency)
        .with_period(period)
        .with_year(args.year.unwrap_or_else(default_year))
        .with_taxpayer(args.gstin.clone())
        .with_counterparty(args.etin.clone())
}

fn run_filing(
    form: &FilingForm,
    args: &FilingArgs,
    frequency: FrequencyType,
    forward: &[PathBuf],
    reverse: &[PathBuf],
) -> Result<ReturnResult> {
    let span = info_span!(
        "filing",
        frequency = %frequency,
        gstin = %redact_value(&args.gstin)
    );
    let _guard = span.enter();
    let start = Instant::now();

    let plan = upload_plan(frequency, forward, reverse)?;
    let store = load_session(frequency, &plan)?;
    let (selector, document) = prepare_return(form, &store)?;

    let slots = store
        .slots()
        .into_iter()
        .filter_map(|(slot, data)| {
            data.map(|data| SlotSummary {
                label: slot_label(slot, selector.period),
                source: data.source.clone(),
                rows: data.len(),
            })
        })
        .collect();

    if args.stdout {
        println!("{}", to_pretty_json(&document)?);
    }
    let output_path = if args.dry_run {
        info!("dry run, return not written");
        None
    } else {
        let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        Some(write_document(&document, &selector, &dir)?)
    };

    info!(
        fp = %document.filing_period_code,
        period = %display_period(selector.period),
        duration_ms = start.elapsed().as_millis(),
        "filing complete"
    );
    Ok(ReturnResult {
        file_name: document_file_name(&selector),
        selector,
        document,
        output_path,
        slots,
    })
}

fn display_period(period: FilingPeriod) -> String {
    match period {
        FilingPeriod::Monthly(month) => month.name().to_string(),
        FilingPeriod::Quarterly(quarter) => quarter.label(),
    }
}
