//! Per-render ambient context.
//!
//! One [`RenderContext`] is created per top-level render invocation and
//! passed by shared reference into every child-content closure evaluated
//! during that invocation. It carries the injected capabilities, the render
//! options, and the shadowing stacks of slot/group registries that composite
//! roots open for their descendants. The context is deliberately neither
//! `Send` nor `Sync`: a render pass is single-threaded and children evaluate
//! strictly in document order.

use std::cell::RefCell;

use tracing::debug;

use crate::capabilities::{
    FieldMetadata, FieldSource, IconSource, RouteRef, UrlSynthesizer, ValidationSource,
};
use crate::options::RenderOptions;
use crate::registry::{GroupEntry, GroupRegistry, SlotRegistry};

/// Ambient scope for one top-level render invocation.
pub struct RenderContext<'a> {
    options: RenderOptions,
    urls: Option<&'a dyn UrlSynthesizer>,
    fields: Option<&'a dyn FieldSource>,
    validation: Option<&'a dyn ValidationSource>,
    icons: Option<&'a dyn IconSource>,
    slots: RefCell<Vec<SlotRegistry>>,
    groups: RefCell<Vec<GroupRegistry>>,
}

impl<'a> Default for RenderContext<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            urls: None,
            fields: None,
            validation: None,
            icons: None,
            slots: RefCell::new(Vec::new()),
            groups: RefCell::new(Vec::new()),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_urls(mut self, urls: &'a dyn UrlSynthesizer) -> Self {
        self.urls = Some(urls);
        self
    }

    pub fn with_fields(mut self, fields: &'a dyn FieldSource) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_validation(mut self, validation: &'a dyn ValidationSource) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_icons(mut self, icons: &'a dyn IconSource) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Capability access
    // ------------------------------------------------------------------

    /// Synthesize a URL from a symbolic route reference.
    ///
    /// Returns `None` when the reference carries no symbolic identifier,
    /// when no synthesizer is installed, or when the synthesizer cannot
    /// resolve the route. Callers omit the affected attribute in every one
    /// of those cases.
    pub fn synthesize_url(&self, route: &RouteRef) -> Option<String> {
        if !route.has_identifiers() {
            return None;
        }
        let Some(urls) = self.urls else {
            debug!("no URL synthesizer installed, omitting directive");
            return None;
        };
        let url = urls.synthesize(route);
        if url.is_none() {
            debug!(?route, "URL synthesis failed, omitting directive");
        }
        url
    }

    /// Metadata for a bound field name, when a field source is installed
    /// and knows the name.
    pub fn field_metadata(&self, field: &str) -> Option<FieldMetadata> {
        self.fields.and_then(|source| source.lookup(field))
    }

    /// First validation message for a field name, when any exist.
    pub fn first_error(&self, field: &str) -> Option<String> {
        if field.is_empty() {
            return None;
        }
        self.validation
            .and_then(|source| source.errors_for(field).into_iter().next())
    }

    /// SVG fragment for an icon name.
    pub fn icon_svg(&self, name: &str) -> Option<String> {
        self.icons.and_then(|source| source.svg_for(name))
    }

    // ------------------------------------------------------------------
    // Slot scopes
    // ------------------------------------------------------------------

    /// Open a fresh slot registry for a composite subtree, shadowing any
    /// enclosing one until the matching [`RenderContext::pop_slot_scope`].
    pub fn push_slot_scope(&self) {
        self.slots.borrow_mut().push(SlotRegistry::default());
    }

    /// Close the innermost slot scope and hand its registry to the
    /// composite root for assembly. Unbalanced calls yield an empty
    /// registry rather than a fault.
    pub fn pop_slot_scope(&self) -> SlotRegistry {
        self.slots.borrow_mut().pop().unwrap_or_else(|| {
            debug!("pop_slot_scope without matching push, returning empty registry");
            SlotRegistry::default()
        })
    }

    /// Store a fragment in the innermost slot registry. Returns false when
    /// no composite opened a scope — the child was used outside its
    /// expected parent and its content is dropped.
    pub fn fill_slot(&self, name: &str, fragment: impl Into<String>) -> bool {
        match self.slots.borrow_mut().last_mut() {
            Some(registry) => {
                registry.set(name, fragment);
                true
            }
            None => {
                debug!(slot = name, "slot fill outside a composite, dropping fragment");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Group scopes
    // ------------------------------------------------------------------

    /// Open a fresh group registry for a group subtree.
    pub fn push_group_scope(&self, scope: impl Into<String>, selected: Option<String>) {
        self.groups
            .borrow_mut()
            .push(GroupRegistry::new(scope, selected));
    }

    /// Close the innermost group scope. Unbalanced calls yield an empty
    /// registry.
    pub fn pop_group_scope(&self) -> GroupRegistry {
        self.groups.borrow_mut().pop().unwrap_or_else(|| {
            debug!("pop_group_scope without matching push, returning empty registry");
            GroupRegistry::default()
        })
    }

    /// Append an entry to the innermost group registry, returning its
    /// 1-based index. A child used outside its expected group parent gets
    /// the safe default index 1.
    pub fn register_in_group(&self, entry: GroupEntry) -> usize {
        match self.groups.borrow_mut().last_mut() {
            Some(registry) => registry.append(entry),
            None => {
                debug!("group registration outside a group, defaulting to index 1");
                1
            }
        }
    }

    /// Shared scope name and selected value of the innermost group, for
    /// children that derive their own attributes from group state. `None`
    /// when used outside a group.
    pub fn group_state(&self) -> Option<(String, Option<String>)> {
        self.groups
            .borrow()
            .last()
            .map(|registry| (registry.scope.clone(), registry.selected.clone()))
    }
}
