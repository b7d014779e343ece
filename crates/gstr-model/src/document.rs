//! Output records of a GST return.
//!
//! Field names on the wire follow the GST portal's offline-tool JSON schema
//! (`b2cs`, `supeco.clttx`, ...); the Rust names say what the fields mean.

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::amount::{Amount, serialize_decimal};
use crate::ids::Gstin;

/// Schema version stamped on every generated return.
pub const SCHEMA_VERSION: &str = "GST3.1.6";

/// Placeholder integrity hash; the portal computes the real one on upload.
pub const INTEGRITY_HASH_PLACEHOLDER: &str = "hash";

/// Flag carried by every counterparty summary.
pub const COUNTERPARTY_FLAG: &str = "N";

/// Whether a supply crosses state lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupplyType {
    #[serde(rename = "INTER")]
    Inter,
    #[serde(rename = "INTRA")]
    Intra,
}

impl SupplyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyType::Inter => "INTER",
            SupplyType::Intra => "INTRA",
        }
    }
}

/// Fields shared by both shapes of outbound supply.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyLine {
    pub rate: Decimal,
    pub supply_kind: String,
    pub place_of_supply: String,
    pub taxable_value: Amount,
}

/// One B2C small outbound supply line.
///
/// Inter-state supplies carry integrated tax only; intra-state supplies carry
/// central and state tax only. Serialized as one flat object whose `sply_ty`
/// key selects the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundSupply {
    Inter {
        line: SupplyLine,
        integrated_tax: Amount,
        cess: Amount,
    },
    Intra {
        line: SupplyLine,
        central_tax: Amount,
        state_tax: Amount,
        cess: Amount,
    },
}

struct Rate<'a>(&'a Decimal);

impl Serialize for Rate<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(self.0, serializer)
    }
}

impl Serialize for OutboundSupply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let line = self.line();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("sply_ty", self.supply_type().as_str())?;
        map.serialize_entry("rt", &Rate(&line.rate))?;
        map.serialize_entry("typ", &line.supply_kind)?;
        map.serialize_entry("pos", &line.place_of_supply)?;
        map.serialize_entry("txval", &line.taxable_value)?;
        match self {
            OutboundSupply::Inter { integrated_tax, .. } => {
                map.serialize_entry("iamt", integrated_tax)?;
            }
            OutboundSupply::Intra {
                central_tax,
                state_tax,
                ..
            } => {
                map.serialize_entry("camt", central_tax)?;
                map.serialize_entry("samt", state_tax)?;
            }
        }
        map.serialize_entry("csamt", &self.cess())?;
        map.end()
    }
}

impl OutboundSupply {
    pub fn supply_type(&self) -> SupplyType {
        match self {
            OutboundSupply::Inter { .. } => SupplyType::Inter,
            OutboundSupply::Intra { .. } => SupplyType::Intra,
        }
    }

    pub fn line(&self) -> &SupplyLine {
        match self {
            OutboundSupply::Inter { line, .. } | OutboundSupply::Intra { line, .. } => line,
        }
    }

    pub fn cess(&self) -> Amount {
        match self {
            OutboundSupply::Inter { cess, .. } | OutboundSupply::Intra { cess, .. } => *cess,
        }
    }

    pub fn integrated_tax(&self) -> Option<Amount> {
        match self {
            OutboundSupply::Inter { integrated_tax, .. } => Some(*integrated_tax),
            OutboundSupply::Intra { .. } => None,
        }
    }

    pub fn central_tax(&self) -> Option<Amount> {
        match self {
            OutboundSupply::Intra { central_tax, .. } => Some(*central_tax),
            OutboundSupply::Inter { .. } => None,
        }
    }

    pub fn state_tax(&self) -> Option<Amount> {
        match self {
            OutboundSupply::Intra { state_tax, .. } => Some(*state_tax),
            OutboundSupply::Inter { .. } => None,
        }
    }
}

/// Totals of supplies made through one e-commerce operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartySummary {
    #[serde(rename = "etin")]
    pub counterparty: Gstin,
    #[serde(rename = "suppval")]
    pub total_supply_value: Amount,
    #[serde(rename = "igst")]
    pub integrated_tax: Amount,
    #[serde(rename = "cgst")]
    pub central_tax: Amount,
    #[serde(rename = "sgst")]
    pub state_tax: Amount,
    pub cess: Amount,
    pub flag: &'static str,
}

impl CounterpartySummary {
    /// A summary with every total at zero.
    pub fn zero(counterparty: Gstin) -> Self {
        Self {
            counterparty,
            total_supply_value: Amount::ZERO,
            integrated_tax: Amount::ZERO,
            central_tax: Amount::ZERO,
            state_tax: Amount::ZERO,
            cess: Amount::ZERO,
            flag: COUNTERPARTY_FLAG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartySupplies {
    #[serde(rename = "clttx")]
    pub details: Vec<CounterpartySummary>,
}

/// A complete return ready for upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingDocument {
    #[serde(rename = "gstin")]
    pub taxpayer: Gstin,
    #[serde(rename = "fp")]
    pub filing_period_code: String,
    #[serde(rename = "version")]
    pub schema_version: &'static str,
    #[serde(rename = "hash")]
    pub integrity_hash: &'static str,
    #[serde(rename = "b2cs")]
    pub outbound_supplies: Vec<OutboundSupply>,
    #[serde(rename = "supeco")]
    pub counterparty_supplies: CounterpartySupplies,
}
