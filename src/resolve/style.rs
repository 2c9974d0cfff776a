//! Style resolution: reference expansion into ordered property lists
//!
//! A node's effective properties are the concatenation of every referenced
//! style's expansion (extension chains first, own properties second), in
//! declared order, followed by the node's direct properties. The resolver
//! never deduplicates; consumers apply the list in order and later entries
//! win on the same underlying attribute.

use std::collections::HashSet;

use crate::error::StyleError;
use crate::model::{ElementNode, Property, Style, StyleGroup};

/// A parsed style reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleReference {
    /// Resolved within the component's own style group.
    Local(String),
    /// Resolved within a named global group (`:group:name`).
    Global { group: String, name: String },
}

impl StyleReference {
    /// Parse the raw reference form: `name` or `:group:name`.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let Some(qualified) = raw.strip_prefix(':') else {
            return Ok(StyleReference::Local(raw.to_string()));
        };
        let parts: Vec<&str> = qualified.split(':').collect();
        match parts.as_slice() {
            [group, name] if !group.is_empty() && !name.is_empty() => {
                Ok(StyleReference::Global {
                    group: group.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(StyleError::malformed(raw)),
        }
    }
}

/// The styles visible to one resolution: the component's own styles plus
/// the registered global groups.
#[derive(Debug, Clone, Copy)]
pub struct StyleScope<'a> {
    pub component: &'a [Style],
    pub globals: &'a [StyleGroup],
}

impl<'a> StyleScope<'a> {
    pub fn new(component: &'a [Style], globals: &'a [StyleGroup]) -> Self {
        Self { component, globals }
    }

    fn group(&self, name: &str) -> Result<&'a [Style], StyleError> {
        self.globals
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.styles.as_slice())
            .ok_or_else(|| StyleError::unknown_group(name))
    }
}

/// Expand every style reference on a node, in declared order, and append
/// the node's direct properties last.
pub fn resolve_element_styles(
    scope: &StyleScope<'_>,
    node: &ElementNode,
) -> Result<Vec<Property>, StyleError> {
    let mut properties = Vec::new();
    for raw in &node.styles {
        let (styles, name) = match StyleReference::parse(raw)? {
            StyleReference::Local(name) => (scope.component, name),
            StyleReference::Global { group, name } => (scope.group(&group)?, name),
        };
        let mut chain = Vec::new();
        let mut in_progress = HashSet::new();
        expand(styles, &name, &mut chain, &mut in_progress, &mut properties)?;
    }
    properties.extend(node.properties.iter().cloned());
    Ok(properties)
}

/// Expand one style: extension chain first (in listed order), own
/// properties second. Extensions resolve within the same group.
fn expand(
    styles: &[Style],
    name: &str,
    chain: &mut Vec<String>,
    in_progress: &mut HashSet<String>,
    out: &mut Vec<Property>,
) -> Result<(), StyleError> {
    if !in_progress.insert(name.to_string()) {
        let mut cycle = chain.clone();
        cycle.push(name.to_string());
        return Err(StyleError::cyclic(cycle));
    }
    chain.push(name.to_string());

    let style = styles
        .iter()
        .find(|style| style.name == name)
        .ok_or_else(|| StyleError::unknown_style(name))?;
    for extended in &style.extends {
        expand(styles, extended, chain, in_progress, out)?;
    }
    out.extend(style.properties.iter().cloned());

    chain.pop();
    in_progress.remove(name);
    Ok(())
}
