//! Per-session storage of uploaded data sets.
//!
//! A monthly session has one forward and one reverse slot. A quarterly
//! session has three of each, one per month of the quarter in calendar
//! order. Changing the filing frequency discards everything.

use std::fmt;

use gstr_model::{FrequencyType, RawRow};

use crate::error::SessionError;

/// Position of a month within its quarter, 0 through 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthOfQuarter(u8);

impl MonthOfQuarter {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);
    pub const THIRD: Self = Self(2);
    pub const ALL: [Self; 3] = [Self::FIRST, Self::SECOND, Self::THIRD];

    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for MonthOfQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Which sheet a data set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    /// Outbound supplies, one row per supply.
    Forward,
    /// Supplies made through the e-commerce operator.
    Reverse,
}

impl SheetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Forward => "forward",
            SheetKind::Reverse => "reverse",
        }
    }
}

/// A named storage location for one uploaded data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Forward,
    Reverse,
    QuarterForward(MonthOfQuarter),
    QuarterReverse(MonthOfQuarter),
}

impl Slot {
    pub fn kind(&self) -> SheetKind {
        match self {
            Slot::Forward | Slot::QuarterForward(_) => SheetKind::Forward,
            Slot::Reverse | Slot::QuarterReverse(_) => SheetKind::Reverse,
        }
    }

    /// The filing frequency this slot belongs to.
    pub fn frequency(&self) -> FrequencyType {
        match self {
            Slot::Forward | Slot::Reverse => FrequencyType::Monthly,
            Slot::QuarterForward(_) | Slot::QuarterReverse(_) => FrequencyType::Quarterly,
        }
    }

    pub fn month_of_quarter(&self) -> Option<MonthOfQuarter> {
        match self {
            Slot::QuarterForward(month) | Slot::QuarterReverse(month) => Some(*month),
            Slot::Forward | Slot::Reverse => None,
        }
    }

    /// Every slot of a session with the given frequency, forward slots first.
    pub fn all_for(frequency: FrequencyType) -> Vec<Slot> {
        match frequency {
            FrequencyType::Monthly => vec![Slot::Forward, Slot::Reverse],
            FrequencyType::Quarterly => MonthOfQuarter::ALL
                .into_iter()
                .map(Slot::QuarterForward)
                .chain(MonthOfQuarter::ALL.into_iter().map(Slot::QuarterReverse))
                .collect(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month_of_quarter() {
            Some(month) => write!(f, "{} month {month}", self.kind().as_str()),
            None => f.write_str(self.kind().as_str()),
        }
    }
}

/// Rows parsed from one upload, labelled with where they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    pub source: String,
    pub rows: Vec<RawRow>,
}

impl DataSet {
    pub fn new(source: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SlotState {
    Monthly {
        forward: Option<DataSet>,
        reverse: Option<DataSet>,
    },
    Quarterly {
        forward: [Option<DataSet>; 3],
        reverse: [Option<DataSet>; 3],
    },
}

impl SlotState {
    fn empty(frequency: FrequencyType) -> Self {
        match frequency {
            FrequencyType::Monthly => SlotState::Monthly {
                forward: None,
                reverse: None,
            },
            FrequencyType::Quarterly => SlotState::Quarterly {
                forward: Default::default(),
                reverse: Default::default(),
            },
        }
    }
}

/// Uploaded data for one filing session.
///
/// Owned by the session and passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    state: SlotState,
}

impl SessionStore {
    /// An empty store laid out for `frequency`.
    pub fn new(frequency: FrequencyType) -> Self {
        Self {
            state: SlotState::empty(frequency),
        }
    }

    pub fn frequency(&self) -> FrequencyType {
        match self.state {
            SlotState::Monthly { .. } => FrequencyType::Monthly,
            SlotState::Quarterly { .. } => FrequencyType::Quarterly,
        }
    }

    /// Switch filing frequency. A change discards every slot; setting the
    /// current frequency again keeps the data.
    pub fn set_frequency(&mut self, frequency: FrequencyType) {
        if frequency == self.frequency() {
            return;
        }
        tracing::debug!(from = %self.frequency(), to = %frequency, "frequency changed, clearing session");
        self.state = SlotState::empty(frequency);
    }

    /// Store a data set, replacing whatever the slot held.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SlotNotInMode`] when the slot belongs to the
    /// other filing frequency.
    pub fn set_data(&mut self, slot: Slot, data: DataSet) -> Result<(), SessionError> {
        let mode = self.frequency();
        let target = self
            .slot_mut(slot)
            .ok_or(SessionError::SlotNotInMode { slot, mode })?;
        tracing::debug!(slot = %slot, source = %data.source, rows = data.len(), "slot updated");
        *target = Some(data);
        Ok(())
    }

    /// The data set held by `slot`, if any.
    pub fn data(&self, slot: Slot) -> Option<&DataSet> {
        match (&self.state, slot) {
            (SlotState::Monthly { forward, .. }, Slot::Forward) => forward.as_ref(),
            (SlotState::Monthly { reverse, .. }, Slot::Reverse) => reverse.as_ref(),
            (SlotState::Quarterly { forward, .. }, Slot::QuarterForward(m)) => {
                forward[m.index()].as_ref()
            }
            (SlotState::Quarterly { reverse, .. }, Slot::QuarterReverse(m)) => {
                reverse[m.index()].as_ref()
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<DataSet>> {
        match (&mut self.state, slot) {
            (SlotState::Monthly { forward, .. }, Slot::Forward) => Some(forward),
            (SlotState::Monthly { reverse, .. }, Slot::Reverse) => Some(reverse),
            (SlotState::Quarterly { forward, .. }, Slot::QuarterForward(m)) => {
                Some(&mut forward[m.index()])
            }
            (SlotState::Quarterly { reverse, .. }, Slot::QuarterReverse(m)) => {
                Some(&mut reverse[m.index()])
            }
            _ => None,
        }
    }

    /// Discard every data set, keeping the current frequency.
    pub fn reset(&mut self) {
        self.state = SlotState::empty(self.frequency());
    }

    /// Every slot of the current frequency with its data set, if any.
    pub fn slots(&self) -> Vec<(Slot, Option<&DataSet>)> {
        Slot::all_for(self.frequency())
            .into_iter()
            .map(|slot| (slot, self.data(slot)))
            .collect()
    }

    /// Slots still waiting for an upload.
    pub fn missing_slots(&self) -> Vec<Slot> {
        self.slots()
            .into_iter()
            .filter(|(_, data)| data.is_none())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// True when every slot holds a data set, even an empty one.
    pub fn is_complete(&self) -> bool {
        self.missing_slots().is_empty()
    }

    /// Forward rows of every populated slot in calendar order.
    pub fn forward_rows(&self) -> impl Iterator<Item = &RawRow> {
        self.rows_of(SheetKind::Forward)
    }

    /// Reverse rows of every populated slot in calendar order.
    pub fn reverse_rows(&self) -> impl Iterator<Item = &RawRow> {
        self.rows_of(SheetKind::Reverse)
    }

    fn rows_of(&self, kind: SheetKind) -> impl Iterator<Item = &RawRow> {
        let sets: Vec<&DataSet> = match &self.state {
            SlotState::Monthly { forward, reverse } => match kind {
                SheetKind::Forward => forward.iter().collect(),
                SheetKind::Reverse => reverse.iter().collect(),
            },
            SlotState::Quarterly { forward, reverse } => match kind {
                SheetKind::Forward => forward.iter().flatten().collect(),
                SheetKind::Reverse => reverse.iter().flatten().collect(),
            },
        };
        sets.into_iter().flat_map(|set| set.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_labels() {
        assert_eq!(Slot::Forward.to_string(), "forward");
        assert_eq!(
            Slot::QuarterReverse(MonthOfQuarter::THIRD).to_string(),
            "reverse month 3"
        );
    }

    #[test]
    fn month_of_quarter_bounds() {
        assert_eq!(MonthOfQuarter::new(2), Some(MonthOfQuarter::THIRD));
        assert_eq!(MonthOfQuarter::new(3), None);
    }

    #[test]
    fn quarterly_slots_list_forward_then_reverse() {
        let slots = Slot::all_for(FrequencyType::Quarterly);
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], Slot::QuarterForward(MonthOfQuarter::FIRST));
        assert_eq!(slots[3], Slot::QuarterReverse(MonthOfQuarter::FIRST));
    }
}
