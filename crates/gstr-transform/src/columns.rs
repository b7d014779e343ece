//! Spreadsheet column names read by the transforms.

/// Columns of the forward (outbound supplies) sheet.
pub mod forward {
    pub const SUPPLY_TYPE: &str = "sply_ty";
    pub const RATE: &str = "rt";
    pub const SUPPLY_KIND: &str = "typ";
    pub const PLACE_OF_SUPPLY: &str = "pos";
    pub const TAXABLE_VALUE: &str = "txval";
    pub const INTEGRATED_TAX: &str = "iamt";
    pub const CENTRAL_TAX: &str = "camt";
    pub const STATE_TAX: &str = "samt";
    pub const CESS: &str = "csamt";
}

/// Columns of the reverse (e-commerce operator) sheet.
pub mod reverse {
    pub const SUPPLY_VALUE: &str = "suppval";
    pub const INTEGRATED_TAX: &str = "igst";
    pub const CENTRAL_TAX: &str = "cgst";
    pub const STATE_TAX: &str = "sgst";
    pub const CESS: &str = "cess";
}
