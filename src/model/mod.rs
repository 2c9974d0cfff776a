//! Tree model shared by both backends
//!
//! This module defines the immutable view-hierarchy description handed over
//! by the parsing layer: elements, containers, layout specs, constraints,
//! styles, and the component definition that roots them. The model is
//! already shape-validated when it reaches this crate and is never mutated
//! by either backend.

pub mod component;
pub mod constraint;
pub mod element;
pub mod layout;
pub mod style;

pub use component::{ComponentDefinition, RectEdge};
pub use constraint::{Constraint, ConstraintRelation, ConstraintTarget, LayoutAnchor, TargetRef};
pub use element::{ElementKind, ElementNode};
pub use layout::{ConstraintPriority, Layout, LayoutAxis, PerAxis};
pub use style::{group_type_name, Property, PropertyValue, Style, StyleGroup};

/// Format a numeric literal for generated source.
///
/// Whole numbers are printed without a fractional part so that emitted
/// statements read `equalTo(100)` rather than `equalTo(100.0)`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
