use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recommended watering cadence for a plant, as obtained from the
/// recommendation lookup (or its fallback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringInfo {
    pub frequency_days: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    /// `None` until the first watering; afterwards only ever replaced with a
    /// newer timestamp, never cleared.
    pub last_watered: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering: Option<WateringInfo>,
}

impl Plant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_watered: None,
            watering: None,
        }
    }

    pub fn with_watering(mut self, watering: WateringInfo) -> Self {
        self.watering = Some(watering);
        self
    }

    pub fn water(&mut self, now: DateTime<Utc>) {
        self.last_watered = Some(now);
    }

    pub fn frequency_days(&self) -> Option<u32> {
        self.watering.as_ref().map(|info| info.frequency_days)
    }
}
