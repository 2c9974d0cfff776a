//! The live apply walk: construction, then constraints

use log::debug;

use crate::catalog::ElementCatalog;
use crate::error::LiveApplyError;
use crate::model::{
    ComponentDefinition, ElementNode, LayoutAxis, StyleGroup, TargetRef,
};
use crate::resolve::naming::layout_id_key;
use crate::resolve::{
    resolve_constraint, resolve_element_styles, NameAllocator, NodeIdentity, ResolvedTarget,
    StyleScope,
};

use super::toolkit::{InstalledConstraint, InstalledTarget, Toolkit};

/// Name used for the root instance in parent-target resolution. The root
/// never appears in the association list.
const ROOT_NAME: &str = "target";

/// Host-registered table of field identities to live instances.
///
/// Replaces runtime introspection: the host registers every addressable
/// slot up front. Hosts with fully dynamic attribute storage (anonymous
/// components) set the `dynamic` flag instead, and missing fields are
/// instantiated and bound on first use.
#[derive(Debug, Clone)]
pub struct FieldBindings<V> {
    views: std::collections::HashMap<String, V>,
    dynamic: bool,
}

impl<V> FieldBindings<V> {
    /// An empty table for a host with fixed fields.
    pub fn new() -> Self {
        Self {
            views: std::collections::HashMap::new(),
            dynamic: false,
        }
    }

    /// An empty table for a host with dynamic attribute storage.
    pub fn dynamic() -> Self {
        Self {
            views: std::collections::HashMap::new(),
            dynamic: true,
        }
    }

    /// Register one field accessor.
    pub fn register(mut self, field: impl Into<String>, view: V) -> Self {
        self.views.insert(field.into(), view);
        self
    }

    /// Look up a registered field.
    pub fn get(&self, field: &str) -> Option<&V> {
        self.views.get(field)
    }
}

impl<V> Default for FieldBindings<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a component definition to a live instance.
///
/// The applier owns a transient association list from identity to
/// instance, rebuilt from scratch on every [`apply`](Self::apply) call.
/// Callers must guarantee exclusive access to the target instance for the
/// duration of one call.
pub struct LiveApplier<'a, T: Toolkit, F>
where
    F: FnMut(&str, &T::Handle) -> bool,
{
    definition: &'a ComponentDefinition,
    globals: &'a [StyleGroup],
    catalog: &'a ElementCatalog,
    toolkit: &'a mut T,
    instance: T::View,
    bindings: FieldBindings<T::View>,
    /// Called for every constraint with a result field; returning `false`
    /// rejects the handle and fails the apply call.
    set_constraint: F,
}

impl<'a, T: Toolkit, F> LiveApplier<'a, T, F>
where
    F: FnMut(&str, &T::Handle) -> bool,
{
    pub fn new(
        definition: &'a ComponentDefinition,
        globals: &'a [StyleGroup],
        catalog: &'a ElementCatalog,
        toolkit: &'a mut T,
        instance: T::View,
        bindings: FieldBindings<T::View>,
        set_constraint: F,
    ) -> Self {
        Self {
            definition,
            globals,
            catalog,
            toolkit,
            instance,
            bindings,
            set_constraint,
        }
    }

    /// Tear down and rebuild the instance's children and constraints.
    pub fn apply(&mut self) -> Result<(), LiveApplyError> {
        debug!(
            "applying component `{}` ({} root children)",
            self.definition.type_name,
            self.definition.children.len()
        );
        self.toolkit.remove_children(&self.instance);

        let mut views: Vec<(String, T::View)> = Vec::new();
        let mut allocator = NameAllocator::new();
        let root = self.instance.clone();
        for child in &self.definition.children {
            self.construct(child, &root, "addSubview", &mut allocator, &mut views)?;
        }

        debug!("construction pass done, {} views recorded", views.len());

        // The counter restarts for synthesized-name parity with the first
        // pass; the association list stays authoritative for lookups.
        let mut allocator = NameAllocator::new();
        for child in &self.definition.children {
            self.apply_constraints(child, &root, ROOT_NAME, &mut allocator, &views)?;
        }
        Ok(())
    }

    /// Construction pass: resolve the instance, apply styles and
    /// properties, attach, record the association, recurse.
    fn construct(
        &mut self,
        node: &ElementNode,
        parent: &T::View,
        attach_method: &str,
        allocator: &mut NameAllocator,
        views: &mut Vec<(String, T::View)>,
    ) -> Result<(), LiveApplyError> {
        let identity = allocator.allocate(node);
        let key = identity.key();

        let view = match &identity {
            NodeIdentity::Field(field) => {
                if let Some(existing) = self.bindings.get(field) {
                    existing.clone()
                } else if self.bindings.dynamic {
                    let created = self.toolkit.instantiate(&node.kind)?;
                    self.bindings.views.insert(field.clone(), created.clone());
                    created
                } else {
                    return Err(LiveApplyError::undefined_field(field));
                }
            }
            _ => self.toolkit.instantiate(&node.kind)?,
        };

        let definition = self.definition;
        let scope = StyleScope::new(&definition.styles, self.globals);
        for property in resolve_element_styles(&scope, node)? {
            self.toolkit.apply_property(&view, &property)?;
        }

        self.toolkit.attach(parent, &view, attach_method);
        views.push((key, view.clone()));

        let child_attach = self.catalog.info(&node.kind).attach_method.clone();
        for child in &node.children {
            self.construct(child, &view, &child_attach, allocator, views)?;
        }
        Ok(())
    }

    /// Constraint pass: look the instance up by identity, set both axis
    /// priorities, atomically replace the constraint set, recurse.
    fn apply_constraints(
        &mut self,
        node: &ElementNode,
        parent: &T::View,
        parent_name: &str,
        allocator: &mut NameAllocator,
        views: &[(String, T::View)],
    ) -> Result<(), LiveApplyError> {
        let identity = allocator.allocate(node);
        let name = identity.key();
        let view = find_view(views, &name)
            .ok_or_else(|| LiveApplyError::missing_target_view(&name))?
            .clone();

        self.set_axis_priorities(node, &view);

        let mut installed = Vec::new();
        let mut field_slots: Vec<(usize, String)> = Vec::new();
        let mut first_error = None;

        for constraint in &node.layout.constraints {
            let resolved = resolve_constraint(
                constraint,
                |target| match target {
                    TargetRef::Field(field) => find_view(views, field)
                        .map(|_| field.clone())
                        .ok_or_else(|| LiveApplyError::missing_target_view(field)),
                    TargetRef::LayoutId(id) => {
                        let key = layout_id_key(id);
                        find_view(views, &key)
                            .map(|_| key.clone())
                            .ok_or_else(|| LiveApplyError::missing_target_view(&key))
                    }
                    // Parent and This are resolved by the resolver.
                    TargetRef::Parent | TargetRef::This => unreachable!(),
                },
                &name,
                parent_name,
            );
            let resolved = match resolved {
                Ok(resolved) => resolved,
                Err(error) => {
                    // Fail fast for this node: the remaining constraints
                    // are skipped, the resolved prefix is still installed.
                    first_error = Some(error);
                    break;
                }
            };

            let target = match resolved.target {
                ResolvedTarget::Constant(value) => InstalledTarget::Constant(value),
                ResolvedTarget::Anchored {
                    name: target_name,
                    anchor,
                } => {
                    let target_view = if target_name == name {
                        view.clone()
                    } else if target_name == parent_name {
                        parent.clone()
                    } else {
                        find_view(views, &target_name)
                            .ok_or_else(|| LiveApplyError::missing_target_view(&target_name))?
                            .clone()
                    };
                    InstalledTarget::Anchor {
                        view: target_view,
                        anchor: anchor.unwrap_or(resolved.anchor),
                    }
                }
            };

            if let Some(field) = &resolved.field {
                field_slots.push((installed.len(), field.clone()));
            }
            installed.push(InstalledConstraint {
                anchor: resolved.anchor,
                relation: resolved.relation,
                target,
                offset: resolved.offset.unwrap_or(0.0),
                multiplier: resolved.multiplier.unwrap_or(1.0),
                priority: resolved.priority.unwrap_or(1000.0),
            });
        }

        let handles = self.toolkit.replace_constraints(&view, installed)?;
        for (index, field) in &field_slots {
            if !(self.set_constraint)(field, &handles[*index]) {
                first_error.get_or_insert_with(|| LiveApplyError::field_rejected(field));
                break;
            }
        }
        if let Some(error) = first_error {
            return Err(error);
        }

        for child in &node.children {
            self.apply_constraints(child, &view, &name, allocator, views)?;
        }
        Ok(())
    }

    /// Both axes are always set: the explicit value when present,
    /// otherwise the element kind's catalog default.
    fn set_axis_priorities(&mut self, node: &ElementNode, view: &T::View) {
        let info = self.catalog.info(&node.kind).clone();
        for axis in [LayoutAxis::Horizontal, LayoutAxis::Vertical] {
            let compression = node
                .layout
                .compression
                .get(axis)
                .map(|p| p.numeric())
                .unwrap_or(*info.default_compression.get(axis));
            self.toolkit
                .set_compression_resistance(view, axis, compression);

            let hugging = node
                .layout
                .hugging
                .get(axis)
                .map(|p| p.numeric())
                .unwrap_or(*info.default_hugging.get(axis));
            self.toolkit.set_hugging(view, axis, hugging);
        }
    }
}

/// Linear lookup in the per-invocation association list.
fn find_view<'v, V>(views: &'v [(String, V)], name: &str) -> Option<&'v V> {
    views
        .iter()
        .find(|(candidate, _)| candidate == name)
        .map(|(_, view)| view)
}
