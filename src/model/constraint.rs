//! Abstract layout constraints as declared in the tree

use super::layout::ConstraintPriority;

/// A named edge, dimension, baseline, or center attribute usable as one
/// side of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAnchor {
    Top,
    Bottom,
    Leading,
    Trailing,
    Left,
    Right,
    Width,
    Height,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
    Size,
}

impl LayoutAnchor {
    /// Source token used in emitted statements.
    pub fn token(&self) -> &'static str {
        match self {
            LayoutAnchor::Top => "top",
            LayoutAnchor::Bottom => "bottom",
            LayoutAnchor::Leading => "leading",
            LayoutAnchor::Trailing => "trailing",
            LayoutAnchor::Left => "left",
            LayoutAnchor::Right => "right",
            LayoutAnchor::Width => "width",
            LayoutAnchor::Height => "height",
            LayoutAnchor::CenterX => "centerX",
            LayoutAnchor::CenterY => "centerY",
            LayoutAnchor::FirstBaseline => "firstBaseline",
            LayoutAnchor::LastBaseline => "lastBaseline",
            LayoutAnchor::Size => "size",
        }
    }
}

/// Relation between the source anchor and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintRelation {
    Equal,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl ConstraintRelation {
    /// Source token used in emitted statements.
    pub fn token(&self) -> &'static str {
        match self {
            ConstraintRelation::Equal => "equalTo",
            ConstraintRelation::GreaterThanOrEqual => "greaterThanOrEqualTo",
            ConstraintRelation::LessThanOrEqual => "lessThanOrEqualTo",
        }
    }
}

/// What a targeted constraint points at.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetRef {
    /// Another node's field identity.
    Field(String),
    /// Another node's layout id.
    LayoutId(String),
    /// The enclosing container.
    Parent,
    /// The node itself.
    This,
}

/// The right-hand side of a constraint: either a literal value or a
/// reference to another node's anchor with optional offset and multiplier.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintTarget {
    Constant(f64),
    Targeted {
        target: TargetRef,
        /// Target anchor; `None` means same as the source anchor.
        anchor: Option<LayoutAnchor>,
        /// Added to the target value; defaults to 0.
        offset: f64,
        /// Multiplies the target value; defaults to 1.
        multiplier: f64,
    },
}

impl ConstraintTarget {
    /// A targeted reference with all modifiers at their defaults.
    pub fn to(target: TargetRef) -> Self {
        ConstraintTarget::Targeted {
            target,
            anchor: None,
            offset: 0.0,
            multiplier: 1.0,
        }
    }
}

/// One declared layout constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub anchor: LayoutAnchor,
    pub relation: ConstraintRelation,
    pub target: ConstraintTarget,
    pub priority: ConstraintPriority,
    /// Where the produced constraint handle is stored for later mutation.
    pub field: Option<String>,
}

impl Constraint {
    /// An `equal` constraint at required priority with no result field.
    pub fn equal(anchor: LayoutAnchor, target: ConstraintTarget) -> Self {
        Self {
            anchor,
            relation: ConstraintRelation::Equal,
            target,
            priority: ConstraintPriority::Required,
            field: None,
        }
    }

    /// Builder-style relation override.
    pub fn with_relation(mut self, relation: ConstraintRelation) -> Self {
        self.relation = relation;
        self
    }

    /// Builder-style priority override.
    pub fn with_priority(mut self, priority: ConstraintPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder-style result-field binding.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}
