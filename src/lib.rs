//! viewforge - declarative UI trees translated to running UI
//!
//! This library takes an already-parsed, tree-shaped UI description (a view
//! hierarchy with styles and layout constraints) and drives it through one
//! of two backends sharing a single resolution core:
//!
//! - the [`generate`] backend emits the imperative source that rebuilds the
//!   tree, for inclusion in a generated source unit;
//! - the [`live`] backend instantiates the tree directly against a running
//!   host instance through a [`live::Toolkit`] driver, so edited markup can
//!   be re-applied without restarting the application.
//!
//! Both backends walk the tree twice (a construction pass and a constraint
//! pass) and share the identity, style, and constraint resolvers in
//! [`resolve`], which is what keeps their outputs semantically aligned.
//!
//! # Example
//!
//! ```rust
//! use viewforge::model::{ComponentDefinition, ElementKind, ElementNode};
//! use viewforge::{emit_component, EmitOptions};
//!
//! let definition = ComponentDefinition::new(
//!     "Card",
//!     vec![ElementNode::new(ElementKind::Label)],
//! );
//! let source = emit_component(&definition, EmitOptions::default());
//! assert!(source.contains("let temp_Label_1 = UILabel()"));
//! ```

pub mod catalog;
pub mod error;
pub mod generate;
pub mod live;
pub mod model;
pub mod resolve;

pub use catalog::{CatalogError, ElementCatalog, KindInfo};
pub use error::{LiveApplyError, StyleError};
pub use generate::{emit_component, EmitOptions, SourceEmitter};
pub use live::{FieldBindings, LiveApplier, Toolkit};
