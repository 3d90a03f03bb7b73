//! Configuration types for hour calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine YAML configuration file.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed daily work-shift boundaries.
///
/// The gap between `morning_end` and `afternoon_start` is the unpaid lunch
/// break; time inside it is never billable.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::config::ShiftWindow;
///
/// let window = ShiftWindow::default();
/// assert_eq!(window.full_day_hours(), Decimal::from(8));
/// assert_eq!(window.lunch_hours(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShiftWindow {
    /// Start of the morning shift.
    pub morning_start: NaiveTime,
    /// End of the morning shift (start of lunch).
    pub morning_end: NaiveTime,
    /// Start of the afternoon shift (end of lunch).
    pub afternoon_start: NaiveTime,
    /// End of the afternoon shift.
    pub afternoon_end: NaiveTime,
}

impl ShiftWindow {
    /// Start of the working day.
    pub fn day_start(&self) -> NaiveTime {
        self.morning_start
    }

    /// End of the working day.
    pub fn day_end(&self) -> NaiveTime {
        self.afternoon_end
    }

    /// Start of the unpaid lunch break.
    pub fn lunch_start(&self) -> NaiveTime {
        self.morning_end
    }

    /// End of the unpaid lunch break.
    pub fn lunch_end(&self) -> NaiveTime {
        self.afternoon_start
    }

    /// Duration of the lunch break in decimal hours.
    pub fn lunch_hours(&self) -> Decimal {
        hours_between(self.morning_end, self.afternoon_start)
    }

    /// Billable hours in one full working day (morning plus afternoon).
    pub fn full_day_hours(&self) -> Decimal {
        hours_between(self.morning_start, self.morning_end)
            + hours_between(self.afternoon_start, self.afternoon_end)
    }
}

impl Default for ShiftWindow {
    fn default() -> Self {
        Self {
            morning_start: hms(8, 0),
            morning_end: hms(12, 0),
            afternoon_start: hms(13, 0),
            afternoon_end: hms(17, 0),
        }
    }
}

/// How hours outside the nominal shift window are treated.
///
/// The source system shipped divergent revisions of this rule; the choice is
/// therefore explicit configuration rather than a silent default pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourPolicy {
    /// Clamp span boundaries into the shift window; early or evening work
    /// earns nothing.
    #[default]
    ClampToShift,
    /// Bill time before the morning shift and after the afternoon shift
    /// additively as overtime. The lunch exclusion is unchanged.
    AccrueOvertime,
}

/// Policy section of the engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// The hour policy to calculate with.
    #[serde(default)]
    pub hour_policy: HourPolicy,
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Work-shift boundaries.
    #[serde(default)]
    shift: ShiftWindow,
    /// Calculation policy.
    #[serde(default)]
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(shift: ShiftWindow, policy: PolicyConfig) -> Self {
        Self { shift, policy }
    }

    /// Returns the shift window.
    pub fn shift(&self) -> &ShiftWindow {
        &self.shift
    }

    /// Returns the configured hour policy.
    pub fn hour_policy(&self) -> HourPolicy {
        self.policy.hour_policy
    }
}

/// Decimal hours between two times of day.
fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid shift time")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// CF-001: defaults match the standard office shifts
    #[test]
    fn test_default_shift_window() {
        let window = ShiftWindow::default();
        assert_eq!(window.day_start(), hms(8, 0));
        assert_eq!(window.lunch_start(), hms(12, 0));
        assert_eq!(window.lunch_end(), hms(13, 0));
        assert_eq!(window.day_end(), hms(17, 0));
        assert_eq!(window.full_day_hours(), Decimal::from(8));
        assert_eq!(window.lunch_hours(), Decimal::ONE);
    }

    /// CF-002: default policy is shift clamping
    #[test]
    fn test_default_policy() {
        assert_eq!(EngineConfig::default().hour_policy(), HourPolicy::ClampToShift);
    }

    /// CF-003: full YAML deserializes
    #[test]
    fn test_deserialize_full_yaml() {
        let yaml = r#"
shift:
  morning_start: "07:30:00"
  morning_end: "11:30:00"
  afternoon_start: "12:30:00"
  afternoon_end: "16:30:00"
policy:
  hour_policy: accrue_overtime
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.shift().day_start(), hms(7, 30));
        assert_eq!(config.hour_policy(), HourPolicy::AccrueOvertime);
    }

    /// CF-004: omitted sections fall back to defaults
    #[test]
    fn test_deserialize_partial_yaml() {
        let config: EngineConfig = serde_yaml::from_str("policy:\n  hour_policy: accrue_overtime\n").unwrap();
        assert_eq!(config.shift(), &ShiftWindow::default());
        assert_eq!(config.hour_policy(), HourPolicy::AccrueOvertime);
    }

    #[test]
    fn test_hour_policy_serde_names() {
        let clamp: HourPolicy = serde_yaml::from_str("clamp_to_shift").unwrap();
        assert_eq!(clamp, HourPolicy::ClampToShift);
        let accrue: HourPolicy = serde_yaml::from_str("accrue_overtime").unwrap();
        assert_eq!(accrue, HourPolicy::AccrueOvertime);
    }
}
