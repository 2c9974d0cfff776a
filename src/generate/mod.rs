//! Source Emitter backend
//!
//! Walks the component tree twice and emits the imperative source that
//! rebuilds it on the host: a construction pass (bindings, style and
//! property applications, attachment) and a constraint pass (axis
//! priorities and one constraint block per node). Identity resolution is
//! recomputed in the second pass with a fresh allocator; the emitted code
//! replays the same allocation order at its own run time.
//!
//! The emitter never fails. Authoring mistakes degrade to diagnostic
//! comments or to dangling textual references that surface when the
//! generated source is compiled downstream.

pub mod writer;

pub use writer::SourceWriter;

use crate::catalog::ElementCatalog;
use crate::model::{
    format_number, group_type_name, ComponentDefinition, ElementNode, RectEdge, TargetRef,
};
use crate::resolve::{
    resolve_constraint, NameAllocator, NodeIdentity, ResolvedTarget, StyleReference,
};

/// Options for one emission.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Path of the markup source, embedded for the live-reload manager.
    pub source_path: String,
    /// Gate the generated unit for live reload in simulator builds.
    pub live_enabled: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            live_enabled: false,
        }
    }
}

const SIMULATOR_GUARD: &str = "#if (arch(i386) || arch(x86_64)) && os(iOS)";

/// Emits the generated source unit for one component definition.
pub struct SourceEmitter<'a> {
    definition: &'a ComponentDefinition,
    catalog: &'a ElementCatalog,
    options: EmitOptions,
}

impl<'a> SourceEmitter<'a> {
    pub fn new(
        definition: &'a ComponentDefinition,
        catalog: &'a ElementCatalog,
        options: EmitOptions,
    ) -> Self {
        Self {
            definition,
            catalog,
            options,
        }
    }

    /// Emit the full source unit.
    pub fn emit(&self) -> String {
        let mut w = SourceWriter::new();
        let root = self.definition;

        if root.is_anonymous {
            w.block(
                format!("final class {}: ViewBase<Void, Void>", root.type_name),
                |_| {},
            );
        }

        let constraint_fields = root.constraint_fields();
        let conformance = if root.is_root_view {
            format!("extension {}: DeclarativeUI, RootView", root.type_name)
        } else {
            format!("extension {}: DeclarativeUI", root.type_name)
        };

        w.block(conformance, |w| {
            if root.is_root_view {
                self.emit_extended_edges(w);
            }
            w.blank();
            w.block(format!("var ui: {}.UIContainer", root.type_name), |w| {
                w.block(
                    format!(
                        "return ViewForge.associatedObject(self, key: &{}.UIContainer.associatedObjectKey)",
                        root.type_name
                    ),
                    |w| {
                        w.line(format!("return {}.UIContainer(target: self)", root.type_name));
                    },
                );
            });
            w.blank();
            w.block("var __ui: ViewForge.DeclarativeUIContainer", |w| {
                w.line("return ui");
            });
            w.blank();
            self.emit_container(w, &constraint_fields);
            w.blank();
            w.block("final class LayoutContainer", |w| {
                for field in &constraint_fields {
                    w.line(format!("fileprivate(set) var {}: SnapKit.Constraint?", field));
                }
            });
            self.emit_styles(w);
        });

        w.into_string()
    }

    fn emit_extended_edges(&self, w: &mut SourceWriter) {
        w.block("var edgesForExtendedLayout: UIRectEdge", |w| {
            if self.options.live_enabled {
                w.line(SIMULATOR_GUARD);
                w.line("return LiveUIManager.shared.extendedEdges(of: self)");
                w.line("#else");
            }
            w.line(format!(
                "return {}",
                RectEdge::render_set(&self.definition.extended_edges)
            ));
            if self.options.live_enabled {
                w.line("#endif");
            }
        });
    }

    fn emit_container(&self, w: &mut SourceWriter, constraint_fields: &[String]) {
        let root = self.definition;
        w.block(
            "final class UIContainer: ViewForge.DeclarativeUIContainer",
            |w| {
                w.line("fileprivate static var associatedObjectKey = 0 as UInt8");
                w.blank();
                w.block("var sourcePath: String", |w| {
                    w.line(format!("return \"{}\"", self.options.source_path));
                });
                w.blank();
                w.block("var typeName: String", |w| {
                    w.line(format!("return \"{}\"", root.type_name));
                });
                w.blank();
                w.line(format!("let constraints = {}.LayoutContainer()", root.type_name));
                w.blank();
                w.line(format!("private weak var target: {}?", root.type_name));
                w.blank();
                w.block(format!("fileprivate init(target: {})", root.type_name), |w| {
                    w.line("self.target = target");
                });
                w.blank();
                w.block("func setupUI()", |w| {
                    w.line("guard let target = self.target else { return }");
                    if self.options.live_enabled {
                        w.line(SIMULATOR_GUARD);
                        self.emit_live_registration(w, constraint_fields);
                        w.line("#else");
                    }
                    self.emit_tree(w);
                    if self.options.live_enabled {
                        w.line("#endif");
                    }
                });
                w.blank();
                w.block("static func destroyUI(target: UIView)", |w| {
                    if self.options.live_enabled {
                        w.line(SIMULATOR_GUARD);
                        w.line(format!(
                            "guard let knownTarget = target as? {} else {{ return }}",
                            root.type_name
                        ));
                        w.line("LiveUIManager.shared.unregister(knownTarget)");
                        w.line("#endif");
                    }
                });
            },
        );
    }

    fn emit_live_registration(&self, w: &mut SourceWriter, constraint_fields: &[String]) {
        w.block("LiveUIManager.shared.register(target)", |w| {
            if constraint_fields.is_empty() {
                w.line("_ in");
                w.line("return false");
            } else {
                w.line("[constraints] field, constraint -> Bool in");
                w.block("switch field", |w| {
                    for field in constraint_fields {
                        w.line(format!("case \"{}\":", field));
                        w.line(format!("    constraints.{} = constraint", field));
                        w.line("    return true");
                    }
                    w.line("default:");
                    w.line("    return false");
                });
            }
        });
    }

    /// Both walks over the root's children, each with a fresh allocator.
    fn emit_tree(&self, w: &mut SourceWriter) {
        let mut allocator = NameAllocator::new();
        for child in &self.definition.children {
            self.emit_element(w, &mut allocator, child, "target", "addSubview");
        }
        let mut allocator = NameAllocator::new();
        for child in &self.definition.children {
            self.emit_constraints(w, &mut allocator, child, "target");
        }
    }

    /// Construction pass for one node.
    fn emit_element(
        &self,
        w: &mut SourceWriter,
        allocator: &mut NameAllocator,
        node: &ElementNode,
        parent_name: &str,
        attach_method: &str,
    ) {
        let identity = allocator.allocate(node);
        let name = self.render_name(&identity);

        // Field-bound views already exist on the host instance.
        if !identity.is_field() {
            w.line(format!(
                "let {} = {}",
                identity.key(),
                self.catalog.initializer(&node.kind)
            ));
        }

        for raw in &node.styles {
            match StyleReference::parse(raw) {
                Ok(StyleReference::Local(style)) => {
                    w.line(format!(
                        "{}.apply(style: {}.{})",
                        name, self.definition.styles_name, style
                    ));
                }
                Ok(StyleReference::Global { group, name: style }) => {
                    w.line(format!(
                        "{}.apply(style: {}.{})",
                        name,
                        group_type_name(&group),
                        style
                    ));
                }
                Err(_) => {
                    w.line(format!("// style reference `{}` has wrong format", raw));
                }
            }
        }

        for property in &node.properties {
            w.line(format!(
                "{}.{} = {}",
                name,
                property.name,
                property.value.literal()
            ));
        }
        w.line(format!("{}.{}({})", parent_name, attach_method, name));
        w.blank();

        let info = self.catalog.info(&node.kind);
        for child in &node.children {
            self.emit_element(w, allocator, child, &name, &info.attach_method);
        }
    }

    /// Constraint pass for one node.
    fn emit_constraints(
        &self,
        w: &mut SourceWriter,
        allocator: &mut NameAllocator,
        node: &ElementNode,
        parent_name: &str,
    ) {
        let identity = allocator.allocate(node);
        let name = self.render_name(&identity);

        // Axis priorities are emitted only when explicitly set; the
        // toolkit default covers the rest.
        if let Some(priority) = node.layout.compression.horizontal {
            w.line(format!(
                "{}.setContentCompressionResistancePriority({}, for: .horizontal)",
                name,
                format_number(priority.numeric())
            ));
        }
        if let Some(priority) = node.layout.compression.vertical {
            w.line(format!(
                "{}.setContentCompressionResistancePriority({}, for: .vertical)",
                name,
                format_number(priority.numeric())
            ));
        }
        if let Some(priority) = node.layout.hugging.horizontal {
            w.line(format!(
                "{}.setContentHuggingPriority({}, for: .horizontal)",
                name,
                format_number(priority.numeric())
            ));
        }
        if let Some(priority) = node.layout.hugging.vertical {
            w.line(format!(
                "{}.setContentHuggingPriority({}, for: .vertical)",
                name,
                format_number(priority.numeric())
            ));
        }

        w.block(format!("{}.snp.makeConstraints", name), |w| {
            w.line("make in");
            for constraint in &node.layout.constraints {
                let resolved = resolve_constraint(
                    constraint,
                    |target| -> Result<String, std::convert::Infallible> {
                        Ok(match target {
                            TargetRef::Field(field) => format!("target.{}", field),
                            TargetRef::LayoutId(id) => {
                                crate::resolve::naming::layout_id_key(id)
                            }
                            // Parent and This are resolved by the resolver.
                            TargetRef::Parent | TargetRef::This => unreachable!(),
                        })
                    },
                    &name,
                    parent_name,
                )
                .unwrap_or_else(|never| match never {});

                let target = match &resolved.target {
                    ResolvedTarget::Constant(value) => format_number(*value),
                    ResolvedTarget::Anchored { name, anchor: None } => name.clone(),
                    ResolvedTarget::Anchored {
                        name,
                        anchor: Some(anchor),
                    } => format!("{}.snp.{}", name, anchor.token()),
                };

                let mut statement = format!(
                    "make.{}.{}({})",
                    resolved.anchor.token(),
                    resolved.relation.token(),
                    target
                );
                if let Some(offset) = resolved.offset {
                    statement.push_str(&format!(".offset({})", format_number(offset)));
                }
                if let Some(multiplier) = resolved.multiplier {
                    statement.push_str(&format!(".multipliedBy({})", format_number(multiplier)));
                }
                if let Some(priority) = resolved.priority {
                    statement.push_str(&format!(".priority({})", format_number(priority)));
                }
                if let Some(field) = &resolved.field {
                    statement = format!("constraints.{} = {}.constraint", field, statement);
                }
                w.line(statement);
            }
        });

        for child in &node.children {
            self.emit_constraints(w, allocator, child, &name);
        }
    }

    fn emit_styles(&self, w: &mut SourceWriter) {
        let root = self.definition;
        w.block(format!("struct {}", root.styles_name), |w| {
            for style in &root.styles {
                let parameter_type = style
                    .target
                    .as_ref()
                    .map(|kind| self.catalog.info(kind).runtime_type.clone())
                    .unwrap_or_else(|| "UIView".to_string());
                w.block(
                    format!("static func {}(_ view: {})", style.name, parameter_type),
                    |w| {
                        for extended in &style.extends {
                            w.line(format!("{}.{}(view)", root.styles_name, extended));
                        }
                        for property in &style.properties {
                            w.line(format!(
                                "view.{} = {}",
                                property.name,
                                property.value.literal()
                            ));
                        }
                    },
                );
            }
        });
    }

    fn render_name(&self, identity: &NodeIdentity) -> String {
        match identity {
            NodeIdentity::Field(field) => format!("target.{}", field),
            other => other.key(),
        }
    }
}

/// Emit the generated source for a component with the built-in catalog.
pub fn emit_component(definition: &ComponentDefinition, options: EmitOptions) -> String {
    let catalog = ElementCatalog::default();
    SourceEmitter::new(definition, &catalog, options).emit()
}
