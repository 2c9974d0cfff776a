//! Styles, style groups, and property assignments

use super::element::ElementKind;
use super::format_number;

/// A property value, rendered as a source literal by the emitter and
/// applied through the toolkit's property catalog by the live backend.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Number(f64),
    Bool(bool),
    /// Hex color string such as `#ff8800`.
    Color(String),
    /// Bare enumeration token such as `center`, rendered as `.center`.
    Token(String),
}

impl PropertyValue {
    /// Render the value as a source-code literal.
    pub fn literal(&self) -> String {
        match self {
            PropertyValue::String(value) => format!("\"{}\"", value.replace('"', "\\\"")),
            PropertyValue::Number(value) => format_number(*value),
            PropertyValue::Bool(value) => value.to_string(),
            PropertyValue::Color(hex) => format!("UIColor(hexString: \"{}\")", hex),
            PropertyValue::Token(token) => format!(".{}", token),
        }
    }
}

/// One property assignment (`name = value`).
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named, reusable set of property assignments, optionally built by
/// extending other styles from the same group.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub name: String,
    /// Kind the style is written against; decides the parameter type of the
    /// generated style function. `None` falls back to the plain view type.
    pub target: Option<ElementKind>,
    /// Names applied before this style's own properties, in listed order.
    pub extends: Vec<String>,
    pub properties: Vec<Property>,
}

impl Style {
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            target: None,
            extends: Vec::new(),
            properties,
        }
    }

    /// Builder-style extension list.
    pub fn extending(mut self, extends: Vec<String>) -> Self {
        self.extends = extends;
        self
    }

    /// Builder-style target kind.
    pub fn for_kind(mut self, kind: ElementKind) -> Self {
        self.target = Some(kind);
        self
    }
}

/// A named group of styles, scoped either to one component or registered
/// globally and addressed with the `:group:style` qualifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleGroup {
    pub name: String,
    pub styles: Vec<Style>,
}

impl StyleGroup {
    pub fn new(name: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            name: name.into(),
            styles,
        }
    }

    /// Find a style by name within this group.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Type name of the generated style container: capitalized group name
    /// with a `Styles` suffix (`common` becomes `CommonStyles`).
    pub fn type_name(&self) -> String {
        group_type_name(&self.name)
    }
}

/// Compose a global group's generated type name from its bare name.
pub fn group_type_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}Styles", first.to_uppercase(), chars.as_str()),
        None => "Styles".to_string(),
    }
}
