//! Pipeline stages behind the filing commands: map files to slots, load
//! them into a session, and assemble the return.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use tracing::{debug, info};

use gstr_core::{DataSet, MonthOfQuarter, SessionStore, Slot, build_document, check_ready};
use gstr_ingest::read_rows;
use gstr_model::{
    Amount, FilingDocument, FilingForm, FilingPeriod, FilingSelector, FrequencyType,
    OutboundSupply, SupplyType,
};

use crate::logging::redact_value;

/// Calendar year used when `--year` is not given.
pub fn default_year() -> i32 {
    chrono::Local::now().year()
}

/// Assign input files to session slots.
///
/// Monthly filings take one forward and one reverse file; quarterly filings
/// take three of each, in calendar order within the quarter.
pub fn upload_plan(
    frequency: FrequencyType,
    forward: &[PathBuf],
    reverse: &[PathBuf],
) -> Result<Vec<(Slot, PathBuf)>> {
    let expected = frequency.months_per_period();
    if forward.len() != expected || reverse.len() != expected {
        bail!(
            "{frequency} filing needs {expected} forward and {expected} reverse file(s), got {} and {}",
            forward.len(),
            reverse.len()
        );
    }
    let plan = match frequency {
        FrequencyType::Monthly => vec![
            (Slot::Forward, forward[0].clone()),
            (Slot::Reverse, reverse[0].clone()),
        ],
        FrequencyType::Quarterly => MonthOfQuarter::ALL
            .into_iter()
            .zip(forward)
            .map(|(month, path)| (Slot::QuarterForward(month), path.clone()))
            .chain(
                MonthOfQuarter::ALL
                    .into_iter()
                    .zip(reverse)
                    .map(|(month, path)| (Slot::QuarterReverse(month), path.clone())),
            )
            .collect(),
    };
    Ok(plan)
}

/// Read every planned file into a fresh session.
pub fn load_session(frequency: FrequencyType, plan: &[(Slot, PathBuf)]) -> Result<SessionStore> {
    let mut store = SessionStore::new(frequency);
    for (slot, path) in plan {
        let data = load_data_set(path).with_context(|| format!("load {slot} sheet"))?;
        debug!(slot = %slot, rows = data.len(), "sheet loaded");
        store.set_data(*slot, data)?;
    }
    info!(slots = plan.len(), "session loaded");
    Ok(store)
}

fn load_data_set(path: &Path) -> Result<DataSet> {
    let rows = read_rows(path)?;
    Ok(DataSet::new(path.display().to_string(), rows))
}

/// Validate the form against the session and build the return.
pub fn prepare_return(
    form: &FilingForm,
    store: &SessionStore,
) -> Result<(FilingSelector, FilingDocument)> {
    let selector = check_ready(form, store).context("cannot generate return")?;
    debug!(
        gstin = %redact_value(selector.taxpayer.as_str()),
        etin = %redact_value(selector.counterparty.as_str()),
        "filing form accepted"
    );
    let document = build_document(&selector, store)?;
    Ok((selector, document))
}

/// Human label for a slot, naming the calendar month for quarterly slots.
pub fn slot_label(slot: Slot, period: FilingPeriod) -> String {
    match (slot.month_of_quarter(), period) {
        (Some(month), FilingPeriod::Quarterly(quarter)) => format!(
            "{} ({})",
            slot.kind().as_str(),
            quarter.months()[month.index()].name()
        ),
        _ => slot.kind().as_str().to_string(),
    }
}

/// Column totals over the outbound supplies of one supply type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyTotals {
    pub records: usize,
    pub taxable_value: Amount,
    pub integrated_tax: Amount,
    pub central_tax: Amount,
    pub state_tax: Amount,
    pub cess: Amount,
}

/// Totals for the records of `supply_type`.
pub fn supply_totals(records: &[OutboundSupply], supply_type: SupplyType) -> SupplyTotals {
    let matching: Vec<&OutboundSupply> = records
        .iter()
        .filter(|record| record.supply_type() == supply_type)
        .collect();
    SupplyTotals {
        records: matching.len(),
        taxable_value: matching.iter().map(|r| r.line().taxable_value).sum(),
        integrated_tax: matching
            .iter()
            .copied()
            .filter_map(OutboundSupply::integrated_tax)
            .sum(),
        central_tax: matching
            .iter()
            .copied()
            .filter_map(OutboundSupply::central_tax)
            .sum(),
        state_tax: matching
            .iter()
            .copied()
            .filter_map(OutboundSupply::state_tax)
            .sum(),
        cess: matching.iter().copied().map(OutboundSupply::cess).sum(),
    }
}
