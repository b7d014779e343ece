//! Whether a return can be generated from the current form and session.

use gstr_model::{FilingForm, FilingSelector};

use crate::error::{BuildError, Result};
use crate::session::SessionStore;

/// Validate the form against the session and return the selection to build.
///
/// # Errors
///
/// Reports the first form problem, then a frequency mismatch, then every
/// slot still missing data.
pub fn check_ready(form: &FilingForm, store: &SessionStore) -> Result<FilingSelector> {
    let selector = form.validate()?;
    ensure_matches(&selector, store)?;
    Ok(selector)
}

/// True iff the form validates, its frequency matches the session, and every
/// slot holds a data set.
pub fn can_generate(form: &FilingForm, store: &SessionStore) -> bool {
    check_ready(form, store).is_ok()
}

pub(crate) fn ensure_matches(selector: &FilingSelector, store: &SessionStore) -> Result<()> {
    if selector.frequency() != store.frequency() {
        return Err(BuildError::FrequencyMismatch {
            selected: selector.frequency(),
            session: store.frequency(),
        });
    }
    let missing = store.missing_slots();
    if !missing.is_empty() {
        return Err(BuildError::IncompleteSession { missing });
    }
    Ok(())
}
