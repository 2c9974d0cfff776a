//! Layout specs: per-axis priorities and the constraint list

use thiserror::Error;

use super::constraint::Constraint;

/// One of the two layout axes a content priority applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAxis {
    Horizontal,
    Vertical,
}

impl LayoutAxis {
    /// Source token used by the emitter (`.horizontal` / `.vertical`).
    pub fn token(&self) -> &'static str {
        match self {
            LayoutAxis::Horizontal => "horizontal",
            LayoutAxis::Vertical => "vertical",
        }
    }
}

/// A pair of per-axis values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> PerAxis<T> {
    pub fn new(horizontal: T, vertical: T) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn get(&self, axis: LayoutAxis) -> &T {
        match axis {
            LayoutAxis::Horizontal => &self.horizontal,
            LayoutAxis::Vertical => &self.vertical,
        }
    }
}

/// A constraint priority, either one of the four named levels or a custom
/// numeric value. Named levels map onto the toolkit's 0..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintPriority {
    Required,
    High,
    Medium,
    Low,
    Custom(f64),
}

/// Raised when a priority keyword is not one of the four named levels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown constraint priority `{0}`")]
pub struct UnknownPriority(pub String);

impl ConstraintPriority {
    /// Numeric value on the 0..=1000 scale.
    pub fn numeric(&self) -> f64 {
        match self {
            ConstraintPriority::Required => 1000.0,
            ConstraintPriority::High => 750.0,
            ConstraintPriority::Medium => 500.0,
            ConstraintPriority::Low => 250.0,
            ConstraintPriority::Custom(value) => *value,
        }
    }

    /// Parse one of the named priority keywords.
    pub fn parse(value: &str) -> Result<Self, UnknownPriority> {
        match value {
            "required" => Ok(ConstraintPriority::Required),
            "high" => Ok(ConstraintPriority::High),
            "medium" => Ok(ConstraintPriority::Medium),
            "low" => Ok(ConstraintPriority::Low),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

impl Default for ConstraintPriority {
    fn default() -> Self {
        ConstraintPriority::Required
    }
}

/// The layout spec attached to every element.
///
/// `id` is the stable cross-reference key other constraints may target.
/// Unset axis priorities are left to the backend's default policy: the
/// emitter omits the statement, the applier falls back to the element
/// kind's catalog default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub id: Option<String>,
    pub compression: PerAxis<Option<ConstraintPriority>>,
    pub hugging: PerAxis<Option<ConstraintPriority>>,
    pub constraints: Vec<Constraint>,
}
