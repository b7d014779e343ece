//! GST return data model.
//!
//! Typed vocabulary shared by the ingest, transform, core, and output crates:
//!
//! - [`ids`]: validated GSTINs
//! - [`period`]: filing frequency, months, fiscal quarters, years
//! - [`selector`]: the filing form and the validated selection built from it
//! - [`row`]: untyped spreadsheet rows
//! - [`amount`]: cent-precision money
//! - [`document`]: the output records of a return

pub mod amount;
pub mod document;
pub mod error;
pub mod ids;
pub mod period;
pub mod row;
pub mod selector;

pub use amount::Amount;
pub use document::{
    COUNTERPARTY_FLAG, CounterpartySummary, CounterpartySupplies, FilingDocument,
    INTEGRITY_HASH_PLACEHOLDER, OutboundSupply, SCHEMA_VERSION, SupplyLine, SupplyType,
};
pub use error::{FormError, ModelError, Result};
pub use ids::Gstin;
pub use period::{FilingPeriod, FilingYear, FrequencyType, Month, Quarter};
pub use row::{CellValue, RawRow};
pub use selector::{DEFAULT_COUNTERPARTY_GSTIN, FilingForm, FilingSelector};
