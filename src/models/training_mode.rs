//! Training-travel policy modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The per-diem policy applied to a trip.
///
/// Training trips pay per-diem differently depending on whether the
/// traveller boards at the venue or commutes to it.
///
/// # Example
///
/// ```
/// use trip_expense::models::TrainingMode;
///
/// let mode: TrainingMode = "commute".parse().unwrap();
/// assert_eq!(mode, TrainingMode::Commute);
/// assert_eq!(mode.label(), "통학");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMode {
    /// Ordinary travel: every day earns the full rate.
    #[default]
    None,
    /// Boarding at the venue: only the first and last day earn the rate.
    Dorm,
    /// Commuting to the venue: first and last day full, middle days half.
    Commute,
}

impl TrainingMode {
    /// All modes, in display order.
    pub const ALL: [TrainingMode; 3] = [
        TrainingMode::None,
        TrainingMode::Dorm,
        TrainingMode::Commute,
    ];

    /// Returns the wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingMode::None => "none",
            TrainingMode::Dorm => "dorm",
            TrainingMode::Commute => "commute",
        }
    }

    /// Returns the Korean display label of the mode.
    pub fn label(self) -> &'static str {
        match self {
            TrainingMode::None => "일반",
            TrainingMode::Dorm => "입소",
            TrainingMode::Commute => "통학",
        }
    }
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`TrainingMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrainingMode(pub String);

impl fmt::Display for UnknownTrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown training mode: {}", self.0)
    }
}

impl std::error::Error for UnknownTrainingMode {}

impl FromStr for TrainingMode {
    type Err = UnknownTrainingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTrainingMode(s.to_string()))
    }
}
