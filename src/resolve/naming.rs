//! Identity resolution: stable node names shared by both backends
//!
//! Each pass walks the tree in pre-order and resolves every node to one
//! identity. Field and layout-id identities are deterministic on their
//! own; anonymous nodes draw from a monotonic counter that starts at 1
//! and increments once per synthesized name. The allocator is an explicit
//! context value constructed fresh for every pass, so the construction
//! and constraint passes produce identical names as long as they visit
//! nodes in the same order.

use crate::model::ElementNode;

/// The resolved identity of one tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdentity {
    /// Externally addressable slot on the owning instance.
    Field(String),
    /// Declared cross-reference key.
    LayoutId(String),
    /// Synthesized name for an anonymous node.
    Temp { tag: String, index: u32 },
}

impl NodeIdentity {
    /// The identity key used in the association list and in generated
    /// binding names: `field`, `named_<id>`, or `temp_<tag>_<n>`.
    pub fn key(&self) -> String {
        match self {
            NodeIdentity::Field(name) => name.clone(),
            NodeIdentity::LayoutId(id) => format!("named_{}", id),
            NodeIdentity::Temp { tag, index } => format!("temp_{}_{}", tag, index),
        }
    }

    /// Whether the node is bound to a host field and therefore already
    /// exists on the instance.
    pub fn is_field(&self) -> bool {
        matches!(self, NodeIdentity::Field(_))
    }
}

/// Compose the identity key for a layout id without allocating a node.
pub fn layout_id_key(id: &str) -> String {
    format!("named_{}", id)
}

/// Per-pass naming context.
///
/// One allocator lives exactly as long as one tree walk; re-running a walk
/// with a fresh allocator replays the same names.
#[derive(Debug)]
pub struct NameAllocator {
    next_temp: u32,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self { next_temp: 1 }
    }

    /// Resolve a node to its identity, drawing a synthesized name if the
    /// node declares neither a field nor a layout id.
    pub fn allocate(&mut self, node: &ElementNode) -> NodeIdentity {
        if let Some(field) = &node.field {
            NodeIdentity::Field(field.clone())
        } else if let Some(id) = &node.layout.id {
            NodeIdentity::LayoutId(id.clone())
        } else {
            let index = self.next_temp;
            self.next_temp += 1;
            NodeIdentity::Temp {
                tag: node.kind.tag().to_string(),
                index,
            }
        }
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}
