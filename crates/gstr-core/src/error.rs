//! Error types for session handling and document assembly.

use gstr_model::{FormError, FrequencyType};
use thiserror::Error;

use crate::session::Slot;

/// Errors raised by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("slot '{slot}' does not exist in {mode} mode")]
    SlotNotInMode { slot: Slot, mode: FrequencyType },
}

/// Reasons a return cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("filing form is not ready: {0}")]
    Form(#[from] FormError),

    #[error("selection is {selected} but the session holds {session} data")]
    FrequencyMismatch {
        selected: FrequencyType,
        session: FrequencyType,
    },

    #[error("no data uploaded for {}", join_slots(.missing))]
    IncompleteSession { missing: Vec<Slot> },
}

fn join_slots(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, BuildError>;
