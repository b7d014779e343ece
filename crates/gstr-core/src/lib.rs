//! Filing session state and return assembly.
//!
//! [`SessionStore`] holds the uploaded sheets for one filing session,
//! [`can_generate`] answers whether a return can be built yet, and
//! [`build_document`] turns a validated selection plus the session into a
//! [`gstr_model::FilingDocument`].

pub mod builder;
pub mod error;
pub mod readiness;
pub mod session;

pub use builder::build_document;
pub use error::{BuildError, Result, SessionError};
pub use readiness::{can_generate, check_ready};
pub use session::{DataSet, MonthOfQuarter, SessionStore, SheetKind, Slot};
