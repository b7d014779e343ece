//! Return document assembly.

use gstr_model::{
    CounterpartySupplies, FilingDocument, FilingSelector, INTEGRITY_HASH_PLACEHOLDER,
    SCHEMA_VERSION, SupplyType,
};
use gstr_transform::{format_period, normalize_rows, summarize_counterparty};
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::readiness::ensure_matches;
use crate::session::SessionStore;

/// Build the return for `selector` from the session's uploads.
///
/// Forward rows are normalized in calendar order with INTER as the default
/// supply type. Reverse rows from every slot are pooled into one operator
/// summary.
///
/// # Errors
///
/// Fails when the session's frequency differs from the selection or any
/// slot has no data set.
pub fn build_document(selector: &FilingSelector, store: &SessionStore) -> Result<FilingDocument> {
    let span = info_span!(
        "build_document",
        period = %selector.period,
        year = %selector.year
    );
    let _guard = span.enter();

    ensure_matches(selector, store)?;

    let outbound_supplies = normalize_rows(store.forward_rows(), SupplyType::Inter);
    debug!(records = outbound_supplies.len(), "normalized forward rows");
    let summary = summarize_counterparty(store.reverse_rows(), &selector.counterparty);
    let filing_period_code = format_period(selector.period, selector.year);

    info!(
        fp = %filing_period_code,
        records = outbound_supplies.len(),
        "return assembled"
    );
    Ok(FilingDocument {
        taxpayer: selector.taxpayer.clone(),
        filing_period_code,
        schema_version: SCHEMA_VERSION,
        integrity_hash: INTEGRITY_HASH_PLACEHOLDER,
        outbound_supplies,
        counterparty_supplies: CounterpartySupplies {
            details: vec![summary],
        },
    })
}
