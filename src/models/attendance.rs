//! Attendance code models.
//!
//! This module defines the closed set of attendance codes a ledger day can
//! carry and the [`DayCode`] tagged union that replaces ad hoc string
//! splitting of composite `X/Y` values.

use serde::{Deserialize, Serialize};

/// A single attendance code from the closed company catalog.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::AttendanceCode;
///
/// assert_eq!(AttendanceCode::from_token("TQ"), Some(AttendanceCode::Tq));
/// assert_eq!(AttendanceCode::K.to_string(), "K");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceCode {
    /// Full work day.
    K,
    /// Paid leave.
    P,
    /// Meeting.
    H,
    /// Study trip.
    Tq,
    /// Training.
    Bd,
    /// Public holiday.
    L,
    /// Sick or family-sick leave.
    O,
    /// Bereavement or celebration leave.
    Vr,
    /// Company retreat.
    Nm,
    /// Maternity leave.
    Ts,
    /// Paternity (spouse birth) leave.
    Vs,
    /// Probation.
    Tv,
}

impl AttendanceCode {
    /// Parses a single code token, returning `None` for anything outside the
    /// closed set. Matching is exact; legacy rows store codes uppercase.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "K" => Some(Self::K),
            "P" => Some(Self::P),
            "H" => Some(Self::H),
            "TQ" => Some(Self::Tq),
            "BD" => Some(Self::Bd),
            "L" => Some(Self::L),
            "O" => Some(Self::O),
            "VR" => Some(Self::Vr),
            "NM" => Some(Self::Nm),
            "TS" => Some(Self::Ts),
            "VS" => Some(Self::Vs),
            "TV" => Some(Self::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::K => "K",
            Self::P => "P",
            Self::H => "H",
            Self::Tq => "TQ",
            Self::Bd => "BD",
            Self::L => "L",
            Self::O => "O",
            Self::Vr => "VR",
            Self::Nm => "NM",
            Self::Ts => "TS",
            Self::Vs => "VS",
            Self::Tv => "TV",
        };
        write!(f, "{}", token)
    }
}

/// The decoded value of one ledger day.
///
/// Composite values like `K/P` mean the day was split between two statuses,
/// half a unit each. Modeling this explicitly keeps the `X/Y` string format
/// out of the aggregation logic.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{AttendanceCode, DayCode};
///
/// let code = DayCode::parse("K/P").unwrap();
/// assert_eq!(code, DayCode::Split(AttendanceCode::K, AttendanceCode::P));
/// assert!(DayCode::parse("???").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCode {
    /// No entry for the day.
    Blank,
    /// One code covering the whole day.
    Single(AttendanceCode),
    /// A day split between two statuses, half a unit each.
    Split(AttendanceCode, AttendanceCode),
}

impl DayCode {
    /// Decodes a raw ledger value.
    ///
    /// Empty or whitespace-only strings are [`DayCode::Blank`]. Returns
    /// `None` for unrecognized values, including composites where either
    /// half is unknown; callers skip those rather than fail, tolerating
    /// historical data drift.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Self::Blank);
        }
        match trimmed.split_once('/') {
            Some((first, second)) => {
                let first = AttendanceCode::from_token(first.trim())?;
                let second = AttendanceCode::from_token(second.trim())?;
                Some(Self::Split(first, second))
            }
            None => AttendanceCode::from_token(trimmed).map(Self::Single),
        }
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Single(code) => write!(f, "{}", code),
            Self::Split(first, second) => write!(f, "{}/{}", first, second),
        }
    }
}
