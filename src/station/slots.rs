//! Hourly availability table
//!
//! A table holds exactly 24 one-hour slots starting at the hour the station
//! was created and wrapping past midnight. Slots keep that generation order,
//! so "earliest" always means "soonest after creation", not earliest on the
//! clock face. Booking only ever flips a slot from available to taken.

use crate::constants::slots::{HOURS_PER_DAY, SLOTS_PER_STATION};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// A single one-hour window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Display label, e.g. "14:00-15:00"
    pub label: String,
    /// Starting hour on the clock (0-23)
    pub hour: u8,
    /// Whether the slot can still be booked
    pub available: bool,
}

/// Label for the window starting at `hour`, e.g. `23 -> "23:00-00:00"`
pub fn slot_label(hour: u8) -> String {
    let start = hour % HOURS_PER_DAY;
    let end = (start + 1) % HOURS_PER_DAY;
    format!("{:02}:00-{:02}:00", start, end)
}

/// The 24-slot availability table of one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Build a table starting at `start_hour`, asking `available` for each
    /// offset (0 = the starting hour)
    pub fn from_fn(start_hour: u8, mut available: impl FnMut(usize) -> bool) -> Self {
        let start = start_hour % HOURS_PER_DAY;
        let slots = (0..SLOTS_PER_STATION)
            .map(|offset| {
                let hour = ((start as usize + offset) % HOURS_PER_DAY as usize) as u8;
                Slot {
                    label: slot_label(hour),
                    hour,
                    available: available(offset),
                }
            })
            .collect();
        Self { slots }
    }

    /// Random table, each slot independently free with probability 1/2
    pub fn generate(start_hour: u8, rng: &dyn RandomSource) -> Self {
        Self::from_fn(start_hour, |_| rng.coin())
    }

    /// Table with every slot free
    pub fn all_available(start_hour: u8) -> Self {
        Self::from_fn(start_hour, |_| true)
    }

    /// Number of slots (always 24)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in stored order
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Look up a slot by label
    pub fn get(&self, label: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.label == label)
    }

    /// Number of slots still free
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.available).count()
    }

    /// True if at least one slot is free
    pub fn any_available(&self) -> bool {
        self.slots.iter().any(|s| s.available)
    }

    /// Mark up to `count` of the earliest free slots as taken and return
    /// their labels
    ///
    /// Takes `&mut self`, so the scan and the flips happen under one
    /// exclusive borrow.
    pub(crate) fn claim_earliest(&mut self, count: usize) -> Vec<String> {
        let mut claimed = Vec::with_capacity(count.min(self.slots.len()));
        for slot in self.slots.iter_mut().filter(|s| s.available).take(count) {
            slot.available = false;
            claimed.push(slot.label.clone());
        }
        claimed
    }
}
