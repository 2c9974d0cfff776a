//! Shared resolution algorithms
//!
//! Both backends drive the same three resolvers: identity assignment
//! ([`naming`]), style expansion ([`style`]), and constraint resolution
//! ([`constraint`]). Keeping them here, independent of either backend,
//! is what keeps the two tree walks semantically aligned.

pub mod constraint;
pub mod naming;
pub mod style;

pub use constraint::{resolve_constraint, ResolvedConstraint, ResolvedTarget};
pub use naming::{NameAllocator, NodeIdentity};
pub use style::{resolve_element_styles, StyleReference, StyleScope};
