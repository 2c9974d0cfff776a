//! Element-kind capability table
//!
//! Maps each element kind to the metadata both backends need: the host
//! runtime type, whether the kind is a container and how children are
//! attached to it, and the per-axis default content priorities the live
//! backend falls back to when an axis is not explicitly set.
//!
//! The built-in table is embedded as TOML; hosts can overlay entries from
//! their own table to adjust defaults or register extra kinds.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{ElementKind, PerAxis};

/// Errors that can occur when loading a catalog table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Capability entry for one element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct KindInfo {
    /// Host runtime type name, also the default initializer type.
    pub runtime_type: String,
    /// Whether the kind may carry children.
    pub is_container: bool,
    /// Host method used to attach a child to an instance of this kind.
    pub attach_method: String,
    /// Default content compression resistance per axis.
    pub default_compression: PerAxis<f64>,
    /// Default content hugging per axis.
    pub default_hugging: PerAxis<f64>,
}

#[derive(Deserialize)]
struct TomlCatalog {
    kinds: HashMap<String, TomlKindInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TomlKindInfo {
    runtime_type: String,
    #[serde(default)]
    container: bool,
    #[serde(default = "default_attach_method")]
    attach_method: String,
    /// `[horizontal, vertical]`
    compression: [f64; 2],
    /// `[horizontal, vertical]`
    hugging: [f64; 2],
}

fn default_attach_method() -> String {
    "addSubview".to_string()
}

impl From<TomlKindInfo> for KindInfo {
    fn from(raw: TomlKindInfo) -> Self {
        KindInfo {
            runtime_type: raw.runtime_type,
            is_container: raw.container,
            attach_method: raw.attach_method,
            default_compression: PerAxis::new(raw.compression[0], raw.compression[1]),
            default_hugging: PerAxis::new(raw.hugging[0], raw.hugging[1]),
        }
    }
}

/// Built-in capability table.
const BUILTIN_KINDS: &str = r#"
[kinds.View]
runtime-type = "UIView"
container = true
compression = [750.0, 750.0]
hugging = [250.0, 250.0]

[kinds.Label]
runtime-type = "UILabel"
compression = [760.0, 760.0]
hugging = [251.0, 251.0]

[kinds.Button]
runtime-type = "UIButton"
compression = [750.0, 750.0]
hugging = [250.0, 250.0]

[kinds.TextField]
runtime-type = "UITextField"
compression = [760.0, 760.0]
hugging = [250.0, 250.0]

[kinds.ImageView]
runtime-type = "UIImageView"
compression = [750.0, 750.0]
hugging = [251.0, 251.0]

[kinds.ScrollView]
runtime-type = "UIScrollView"
container = true
compression = [750.0, 750.0]
hugging = [250.0, 250.0]

[kinds.StackView]
runtime-type = "UIStackView"
container = true
attach-method = "addArrangedSubview"
compression = [750.0, 750.0]
hugging = [250.0, 250.0]

[kinds.Component]
runtime-type = "UIView"
container = true
compression = [750.0, 750.0]
hugging = [250.0, 250.0]
"#;

/// The capability table consulted by both backends.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
    kinds: HashMap<String, KindInfo>,
}

impl ElementCatalog {
    /// Load a catalog from a TOML file, overlaying the built-in table.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string, overlaying the built-in table.
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        let mut catalog = Self::default();
        for (tag, raw) in parsed.kinds {
            catalog.kinds.insert(tag, raw.into());
        }
        Ok(catalog)
    }

    /// Capability entry for a kind; unknown tags fall back to the plain
    /// view entry.
    pub fn info(&self, kind: &ElementKind) -> &KindInfo {
        self.kinds
            .get(kind.tag())
            .unwrap_or_else(|| &self.kinds["View"])
    }

    /// Source initializer expression for a kind.
    ///
    /// Component references instantiate by their declared type name; every
    /// other kind instantiates its catalog runtime type.
    pub fn initializer(&self, kind: &ElementKind) -> String {
        match kind {
            ElementKind::Component { type_name } => format!("{}()", type_name),
            other => format!("{}()", self.info(other).runtime_type),
        }
    }
}

impl Default for ElementCatalog {
    fn default() -> Self {
        let parsed: TomlCatalog =
            toml::from_str(BUILTIN_KINDS).expect("built-in kind table should be valid TOML");
        Self {
            kinds: parsed
                .kinds
                .into_iter()
                .map(|(tag, raw)| (tag, raw.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutAxis;

    #[test]
    fn test_builtin_table_loads() {
        let catalog = ElementCatalog::default();
        let view = catalog.info(&ElementKind::View);
        assert_eq!(view.runtime_type, "UIView");
        assert!(view.is_container);
        assert_eq!(view.attach_method, "addSubview");
    }

    #[test]
    fn test_label_defaults_differ_from_view() {
        let catalog = ElementCatalog::default();
        let label = catalog.info(&ElementKind::Label);
        assert_eq!(*label.default_compression.get(LayoutAxis::Horizontal), 760.0);
        assert_eq!(*label.default_hugging.get(LayoutAxis::Vertical), 251.0);
        assert!(!label.is_container);
    }

    #[test]
    fn test_stack_view_attach_method() {
        let catalog = ElementCatalog::default();
        let stack = catalog.info(&ElementKind::StackView);
        assert_eq!(stack.attach_method, "addArrangedSubview");
    }

    #[test]
    fn test_component_initializer_uses_declared_type() {
        let catalog = ElementCatalog::default();
        let kind = ElementKind::Component {
            type_name: "ProfileCard".into(),
        };
        assert_eq!(catalog.initializer(&kind), "ProfileCard()");
        assert_eq!(catalog.initializer(&ElementKind::Label), "UILabel()");
    }

    #[test]
    fn test_overlay_replaces_entry() {
        let catalog = ElementCatalog::from_str(
            r#"
[kinds.Label]
runtime-type = "MyLabel"
compression = [700.0, 700.0]
hugging = [200.0, 200.0]
"#,
        )
        .expect("overlay should parse");
        assert_eq!(catalog.info(&ElementKind::Label).runtime_type, "MyLabel");
        // Untouched entries keep their built-in values.
        assert_eq!(catalog.info(&ElementKind::Button).runtime_type, "UIButton");
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(ElementCatalog::from_str("not toml {{{{").is_err());
    }
}
