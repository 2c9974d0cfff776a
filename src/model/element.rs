//! Element nodes and the closed set of element kinds

use super::layout::Layout;
use super::style::Property;

/// The closed set of element kinds understood by the engine.
///
/// Kinds are a tagged-variant set resolved against the capability table in
/// [`crate::catalog::ElementCatalog`] rather than through virtual dispatch.
/// A `Component` carries the referenced component's type name and is
/// instantiated by that name while sharing the plain view's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    View,
    Label,
    Button,
    TextField,
    ImageView,
    ScrollView,
    StackView,
    Component { type_name: String },
}

impl ElementKind {
    /// Stable tag used in synthesized identities and as the catalog key.
    pub fn tag(&self) -> &str {
        match self {
            ElementKind::View => "View",
            ElementKind::Label => "Label",
            ElementKind::Button => "Button",
            ElementKind::TextField => "TextField",
            ElementKind::ImageView => "ImageView",
            ElementKind::ScrollView => "ScrollView",
            ElementKind::StackView => "StackView",
            ElementKind::Component { .. } => "Component",
        }
    }
}

/// A single node of the view hierarchy.
///
/// Children are owned exclusively; sharing and cycles are impossible by
/// construction. Only kinds whose catalog entry is a container carry
/// children, which the parsing layer guarantees before hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub kind: ElementKind,
    /// Stable external binding onto the owning instance, if declared.
    pub field: Option<String>,
    /// Raw style references in declared order (`name` or `:group:name`).
    pub styles: Vec<String>,
    /// Direct property assignments, applied after all referenced styles.
    pub properties: Vec<Property>,
    pub layout: Layout,
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a bare node of the given kind with no identity, styles,
    /// properties, or constraints.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            field: None,
            styles: Vec::new(),
            properties: Vec::new(),
            layout: Layout::default(),
            children: Vec::new(),
        }
    }

    /// Builder-style field identity.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Builder-style layout id.
    pub fn with_layout_id(mut self, id: impl Into<String>) -> Self {
        self.layout.id = Some(id.into());
        self
    }

    /// Builder-style style reference.
    pub fn with_style(mut self, reference: impl Into<String>) -> Self {
        self.styles.push(reference.into());
        self
    }

    /// Builder-style direct property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Builder-style constraint.
    pub fn with_constraint(mut self, constraint: super::constraint::Constraint) -> Self {
        self.layout.constraints.push(constraint);
        self
    }

    /// Builder-style child.
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }
}
