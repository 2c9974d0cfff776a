//! Component definitions: the root containers handed to the backends

use super::element::ElementNode;
use super::style::Style;

/// One edge of the screen a root view may extend its layout under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectEdge {
    Top,
    Left,
    Bottom,
    Right,
    All,
}

impl RectEdge {
    /// Source token for a single edge.
    pub fn token(&self) -> &'static str {
        match self {
            RectEdge::Top => "top",
            RectEdge::Left => "left",
            RectEdge::Bottom => "bottom",
            RectEdge::Right => "right",
            RectEdge::All => "all",
        }
    }

    /// Render an edge set as a source literal (`[.top, .bottom]`).
    pub fn render_set(edges: &[RectEdge]) -> String {
        let tokens: Vec<String> = edges
            .iter()
            .map(|edge| format!(".{}", edge.token()))
            .collect();
        format!("[{}]", tokens.join(", "))
    }
}

/// The root of one declared component: a container with a type name,
/// root-view and anonymity flags, extended edges, and its own style group.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
    pub type_name: String,
    pub is_root_view: bool,
    /// No externally declared type exists; the host synthesizes one.
    pub is_anonymous: bool,
    pub extended_edges: Vec<RectEdge>,
    /// Type name of the generated style container, `Styles` by default.
    pub styles_name: String,
    pub styles: Vec<Style>,
    pub children: Vec<ElementNode>,
}

impl ComponentDefinition {
    pub fn new(type_name: impl Into<String>, children: Vec<ElementNode>) -> Self {
        Self {
            type_name: type_name.into(),
            is_root_view: false,
            is_anonymous: false,
            extended_edges: Vec::new(),
            styles_name: "Styles".to_string(),
            styles: Vec::new(),
            children,
        }
    }

    /// Builder-style root-view flag.
    pub fn root_view(mut self, is_root_view: bool) -> Self {
        self.is_root_view = is_root_view;
        self
    }

    /// Builder-style anonymity flag.
    pub fn anonymous(mut self, is_anonymous: bool) -> Self {
        self.is_anonymous = is_anonymous;
        self
    }

    /// Builder-style extended edges.
    pub fn with_extended_edges(mut self, edges: Vec<RectEdge>) -> Self {
        self.extended_edges = edges;
        self
    }

    /// Builder-style component styles.
    pub fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.styles = styles;
        self
    }

    /// Collect every constraint result-field name in the tree, pre-order.
    ///
    /// Feeds the generated constraint-field container and the live
    /// registration switch.
    pub fn constraint_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        for child in &self.children {
            collect_constraint_fields(child, &mut fields);
        }
        fields
    }
}

fn collect_constraint_fields(node: &ElementNode, fields: &mut Vec<String>) {
    for constraint in &node.layout.constraints {
        if let Some(field) = &constraint.field {
            fields.push(field.clone());
        }
    }
    for child in &node.children {
        collect_constraint_fields(child, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Constraint, ConstraintTarget, ElementKind, ElementNode, LayoutAnchor, TargetRef,
    };

    #[test]
    fn test_render_edge_set() {
        assert_eq!(
            RectEdge::render_set(&[RectEdge::Top, RectEdge::Bottom]),
            "[.top, .bottom]"
        );
        assert_eq!(RectEdge::render_set(&[]), "[]");
    }

    #[test]
    fn test_constraint_fields_preorder() {
        let tree = ComponentDefinition::new(
            "Card",
            vec![ElementNode::new(ElementKind::View)
                .with_constraint(
                    Constraint::equal(
                        LayoutAnchor::Width,
                        ConstraintTarget::Constant(100.0),
                    )
                    .with_field("widthConstraint"),
                )
                .with_child(ElementNode::new(ElementKind::Label).with_constraint(
                    Constraint::equal(
                        LayoutAnchor::Top,
                        ConstraintTarget::to(TargetRef::Parent),
                    )
                    .with_field("topConstraint"),
                ))],
        );
        assert_eq!(
            tree.constraint_fields(),
            vec!["widthConstraint", "topConstraint"]
        );
    }
}
