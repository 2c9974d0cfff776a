//! Host toolkit driver trait
//!
//! The applier never touches host internals directly; everything it does
//! to a running instance goes through this trait. Hosts implement it once
//! per UI toolkit. Constraint installation is atomic per view: the
//! previous set is removed and the new set added in one call, mirroring
//! the applier's outer teardown-then-rebuild policy.

use crate::error::LiveApplyError;
use crate::model::{ConstraintRelation, ElementKind, LayoutAnchor, LayoutAxis, Property};

/// The resolved right-hand side of a constraint ready for installation.
#[derive(Debug, Clone)]
pub enum InstalledTarget<V> {
    Constant(f64),
    Anchor { view: V, anchor: LayoutAnchor },
}

/// One constraint ready for installation, with defaults filled in.
#[derive(Debug, Clone)]
pub struct InstalledConstraint<V> {
    pub anchor: LayoutAnchor,
    pub relation: ConstraintRelation,
    pub target: InstalledTarget<V>,
    pub offset: f64,
    pub multiplier: f64,
    pub priority: f64,
}

/// Driver for one host UI toolkit.
pub trait Toolkit {
    /// A live view instance. Cloning must yield another handle to the
    /// same instance, not a copy of it.
    type View: Clone;
    /// Handle to one installed constraint, passed to result-field
    /// callbacks for later mutation.
    type Handle;

    /// Instantiate a fresh view for an element kind.
    fn instantiate(&mut self, kind: &ElementKind) -> Result<Self::View, LiveApplyError>;

    /// Apply one resolved property to an instance.
    fn apply_property(
        &mut self,
        view: &Self::View,
        property: &Property,
    ) -> Result<(), LiveApplyError>;

    /// Detach every child from an instance.
    fn remove_children(&mut self, view: &Self::View);

    /// Attach a child using the named attachment operation.
    fn attach(&mut self, parent: &Self::View, child: &Self::View, method: &str);

    /// Set content compression resistance for one axis.
    fn set_compression_resistance(&mut self, view: &Self::View, axis: LayoutAxis, priority: f64);

    /// Set content hugging for one axis.
    fn set_hugging(&mut self, view: &Self::View, axis: LayoutAxis, priority: f64);

    /// Replace the instance's installed constraint set with the given one,
    /// returning one handle per constraint in order.
    fn replace_constraints(
        &mut self,
        view: &Self::View,
        constraints: Vec<InstalledConstraint<Self::View>>,
    ) -> Result<Vec<Self::Handle>, LiveApplyError>;
}
