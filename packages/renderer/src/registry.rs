//! Slot and group registries.
//!
//! Both registries exist for exactly one composite subtree within one render
//! pass. They are created by the composite/group root before its child
//! content is evaluated, populated by the children (in document order, one
//! at a time), and read by the root afterwards. Neither is reachable except
//! through the ambient [`crate::context::RenderContext`].

use std::collections::HashMap;

/// Named-fragment registry for composite components (panel header/footer,
/// carousel controls, image regions).
///
/// Slot names are ASCII case-insensitive. One fragment per name: a second
/// `set` for the same name overwrites the first, so the last fill wins.
/// Absence of a name means "not populated"; the composite renders a
/// fallback or omits the region.
#[derive(Debug, Default)]
pub struct SlotRegistry {
    fragments: HashMap<String, String>,
}

impl SlotRegistry {
    /// Store a fragment under a name, replacing any previous fragment for
    /// that name.
    pub fn set(&mut self, name: &str, fragment: impl Into<String>) {
        self.fragments
            .insert(name.to_ascii_lowercase(), fragment.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.fragments.contains_key(&name.to_ascii_lowercase())
    }

    /// Fragment for a name, or `None` when the slot was never populated.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fragments
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// One sibling's registration in a [`GroupRegistry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupEntry {
    /// Display label (tab caption, breadcrumb text, radio label).
    pub label: String,
    /// Link target for entries that render as anchors.
    pub link: Option<String>,
    /// Pre-rendered fragment contributed by the child, when the parent
    /// assembles entries itself.
    pub fragment: Option<String>,
    /// Whether this entry holds the group's shared selection.
    pub selected: bool,
}

/// Ordered, append-only membership list for group components (radio groups,
/// tab strips, carousels, breadcrumbs, option lists).
///
/// Registration order defines each entry's 1-based index and the total
/// count. The registry also carries the group's shared identity and
/// selection so children can derive their own attributes from it.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    /// Shared scope name, e.g. the `name` attribute of a radio group or the
    /// id prefix of a tab strip.
    pub scope: String,
    /// Shared selected value, compared by each child against its own value.
    pub selected: Option<String>,
    entries: Vec<GroupEntry>,
}

impl GroupRegistry {
    pub fn new(scope: impl Into<String>, selected: Option<String>) -> Self {
        Self {
            scope: scope.into(),
            selected,
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning its 1-based index.
    pub fn append(&mut self, entry: GroupEntry) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }
}
