//! Constraint resolution into a backend-neutral form
//!
//! Turns an abstract constraint into a [`ResolvedConstraint`] both backends
//! can consume: the emitter renders it as one statement, the applier turns
//! it into a toolkit install. Defaults are elided here once so that both
//! backends agree on what "default" means: offset 0, multiplier 1,
//! priority 1000, and a target anchor equal to the source anchor.

use crate::model::{Constraint, ConstraintRelation, ConstraintTarget, LayoutAnchor, TargetRef};

/// The resolved right-hand side of a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget {
    Constant(f64),
    Anchored {
        /// Resolved target identity (backend-specific rendering).
        name: String,
        /// Present only when it differs from the source anchor.
        anchor: Option<LayoutAnchor>,
    },
}

/// A fully resolved constraint with defaults elided.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConstraint {
    pub anchor: LayoutAnchor,
    pub relation: ConstraintRelation,
    pub target: ResolvedTarget,
    /// Present only when non-zero.
    pub offset: Option<f64>,
    /// Present only when not 1.
    pub multiplier: Option<f64>,
    /// Present only when not the required 1000.
    pub priority: Option<f64>,
    pub field: Option<String>,
}

/// Resolve one constraint against the current node and parent identities.
///
/// `lookup` supplies field and layout-id resolution and is the only
/// fallible part: the emitter's lookup is textual and infallible, the
/// applier's consults the association list and reports missing views.
pub fn resolve_constraint<E>(
    constraint: &Constraint,
    mut lookup: impl FnMut(&TargetRef) -> Result<String, E>,
    self_name: &str,
    parent_name: &str,
) -> Result<ResolvedConstraint, E> {
    let (target, offset, multiplier) = match &constraint.target {
        ConstraintTarget::Constant(value) => (ResolvedTarget::Constant(*value), None, None),
        ConstraintTarget::Targeted {
            target,
            anchor,
            offset,
            multiplier,
        } => {
            let name = match target {
                TargetRef::Parent => parent_name.to_string(),
                TargetRef::This => self_name.to_string(),
                other => lookup(other)?,
            };
            let anchor = anchor.filter(|a| *a != constraint.anchor);
            (
                ResolvedTarget::Anchored { name, anchor },
                Some(*offset).filter(|o| *o != 0.0),
                Some(*multiplier).filter(|m| *m != 1.0),
            )
        }
    };

    let priority = Some(constraint.priority.numeric()).filter(|p| *p != 1000.0);

    Ok(ResolvedConstraint {
        anchor: constraint.anchor,
        relation: constraint.relation,
        target,
        offset,
        multiplier,
        priority,
        field: constraint.field.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConstraintPriority;
    use std::convert::Infallible;

    fn textual(target: &TargetRef) -> Result<String, Infallible> {
        Ok(match target {
            TargetRef::Field(name) => format!("target.{}", name),
            TargetRef::LayoutId(id) => format!("named_{}", id),
            _ => unreachable!("handled by the resolver"),
        })
    }

    #[test]
    fn test_constant_target_has_no_modifiers() {
        let constraint = Constraint::equal(LayoutAnchor::Width, ConstraintTarget::Constant(100.0));
        let resolved =
            resolve_constraint(&constraint, textual, "temp_View_1", "target").unwrap();
        assert_eq!(resolved.target, ResolvedTarget::Constant(100.0));
        assert_eq!(resolved.offset, None);
        assert_eq!(resolved.multiplier, None);
        assert_eq!(resolved.priority, None);
    }

    #[test]
    fn test_default_modifiers_are_elided() {
        let constraint = Constraint::equal(
            LayoutAnchor::Top,
            ConstraintTarget::to(TargetRef::Parent),
        );
        let resolved =
            resolve_constraint(&constraint, textual, "temp_View_1", "target").unwrap();
        assert_eq!(
            resolved.target,
            ResolvedTarget::Anchored {
                name: "target".into(),
                anchor: None,
            }
        );
        assert_eq!(resolved.offset, None);
        assert_eq!(resolved.multiplier, None);
        assert_eq!(resolved.priority, None);
    }

    #[test]
    fn test_non_default_modifiers_survive() {
        let constraint = Constraint {
            anchor: LayoutAnchor::Height,
            relation: ConstraintRelation::Equal,
            target: ConstraintTarget::Targeted {
                target: TargetRef::Parent,
                anchor: Some(LayoutAnchor::Height),
                offset: 10.0,
                multiplier: 0.5,
            },
            priority: ConstraintPriority::High,
            field: None,
        };
        let resolved =
            resolve_constraint(&constraint, textual, "named_box", "target").unwrap();
        // Same-anchor target collapses even when declared explicitly.
        assert_eq!(
            resolved.target,
            ResolvedTarget::Anchored {
                name: "target".into(),
                anchor: None,
            }
        );
        assert_eq!(resolved.offset, Some(10.0));
        assert_eq!(resolved.multiplier, Some(0.5));
        assert_eq!(resolved.priority, Some(750.0));
    }

    #[test]
    fn test_differing_target_anchor_is_kept() {
        let constraint = Constraint::equal(
            LayoutAnchor::Top,
            ConstraintTarget::Targeted {
                target: TargetRef::LayoutId("box".into()),
                anchor: Some(LayoutAnchor::Bottom),
                offset: 0.0,
                multiplier: 1.0,
            },
        );
        let resolved =
            resolve_constraint(&constraint, textual, "temp_View_1", "target").unwrap();
        assert_eq!(
            resolved.target,
            ResolvedTarget::Anchored {
                name: "named_box".into(),
                anchor: Some(LayoutAnchor::Bottom),
            }
        );
    }

    #[test]
    fn test_this_target_resolves_to_self_name() {
        let constraint = Constraint::equal(
            LayoutAnchor::Width,
            ConstraintTarget::Targeted {
                target: TargetRef::This,
                anchor: Some(LayoutAnchor::Height),
                offset: 0.0,
                multiplier: 1.0,
            },
        );
        let resolved =
            resolve_constraint(&constraint, textual, "temp_View_1", "target").unwrap();
        assert_eq!(
            resolved.target,
            ResolvedTarget::Anchored {
                name: "temp_View_1".into(),
                anchor: Some(LayoutAnchor::Height),
            }
        );
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let constraint = Constraint::equal(
            LayoutAnchor::Top,
            ConstraintTarget::to(TargetRef::Field("missing".into())),
        );
        let result = resolve_constraint(
            &constraint,
            |_| Err("missing target view"),
            "temp_View_1",
            "target",
        );
        assert_eq!(result.unwrap_err(), "missing target view");
    }
}
