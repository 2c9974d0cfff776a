//! Live Applier backend
//!
//! Builds the component tree directly against an already-running host
//! instance through the [`Toolkit`] driver trait, so a changed definition
//! can be re-applied without restarting the application. Every apply call
//! tears the previous children and constraints down and rebuilds from
//! scratch; no state survives between invocations.

pub mod applier;
pub mod toolkit;

pub use applier::{FieldBindings, LiveApplier};
pub use toolkit::{InstalledConstraint, InstalledTarget, Toolkit};
