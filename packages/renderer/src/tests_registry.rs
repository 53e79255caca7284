//! Registry scoping through the ambient render context.

use crate::context::RenderContext;
use crate::registry::GroupEntry;

#[test]
fn test_slot_fill_then_read_round_trip() {
    let ctx = RenderContext::new();
    ctx.push_slot_scope();
    assert!(ctx.fill_slot("header", "<h2>Title</h2>"));
    let slots = ctx.pop_slot_scope();
    assert_eq!(slots.get("header"), Some("<h2>Title</h2>"));
    assert_eq!(slots.get("footer"), None);
}

#[test]
fn test_fill_outside_any_scope_is_dropped() {
    let ctx = RenderContext::new();
    assert!(!ctx.fill_slot("header", "<h2>orphan</h2>"));
    // A later scope must not see the dropped fragment.
    ctx.push_slot_scope();
    let slots = ctx.pop_slot_scope();
    assert!(!slots.has("header"));
}

#[test]
fn test_nested_scope_shadows_the_outer_one() {
    let ctx = RenderContext::new();
    ctx.push_slot_scope();
    ctx.fill_slot("header", "outer");

    ctx.push_slot_scope();
    ctx.fill_slot("header", "inner");
    let inner = ctx.pop_slot_scope();
    assert_eq!(inner.get("header"), Some("inner"));

    // Fills inside the nested scope never leak outward.
    let outer = ctx.pop_slot_scope();
    assert_eq!(outer.get("header"), Some("outer"));
}

#[test]
fn test_group_indices_and_shared_state() {
    let ctx = RenderContext::new();
    ctx.push_group_scope("shipping-method", Some("express".to_string()));

    let (scope, selected) = ctx.group_state().unwrap();
    assert_eq!(scope, "shipping-method");
    assert_eq!(selected.as_deref(), Some("express"));

    let first = ctx.register_in_group(GroupEntry {
        label: "Standard".to_string(),
        ..Default::default()
    });
    let second = ctx.register_in_group(GroupEntry {
        label: "Express".to_string(),
        selected: true,
        ..Default::default()
    });
    assert_eq!((first, second), (1, 2));

    let group = ctx.pop_group_scope();
    assert_eq!(group.count(), 2);
    assert!(group.entries()[1].selected);
}

#[test]
fn test_orphan_group_child_degrades_to_index_one() {
    let ctx = RenderContext::new();
    assert_eq!(ctx.group_state(), None);
    let index = ctx.register_in_group(GroupEntry::default());
    assert_eq!(index, 1);
}

#[test]
fn test_registries_are_independent_across_renders() {
    // Two top-level renders, two contexts: nothing carries over.
    let first = RenderContext::new();
    first.push_group_scope("tabs", None);
    first.register_in_group(GroupEntry::default());
    assert_eq!(first.pop_group_scope().count(), 1);

    let second = RenderContext::new();
    second.push_group_scope("tabs", None);
    assert_eq!(second.pop_group_scope().count(), 0);
}

#[test]
fn test_unbalanced_pops_yield_empty_registries() {
    let ctx = RenderContext::new();
    assert_eq!(ctx.pop_slot_scope().get("anything"), None);
    assert_eq!(ctx.pop_group_scope().count(), 0);
}

#[test]
fn test_nested_group_scopes_shadow_like_slots() {
    let ctx = RenderContext::new();
    ctx.push_group_scope("outer", None);
    ctx.register_in_group(GroupEntry::default());

    ctx.push_group_scope("inner", None);
    assert_eq!(ctx.group_state().unwrap().0, "inner");
    assert_eq!(
        ctx.register_in_group(GroupEntry::default()),
        1,
        "inner group starts its own index sequence"
    );
    ctx.pop_group_scope();

    // Outer group resumes where it left off.
    assert_eq!(ctx.register_in_group(GroupEntry::default()), 2);
    ctx.pop_group_scope();
}
