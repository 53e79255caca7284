//! # Trellis Renderer
//!
//! The cross-cutting engines every Trellis component is built from:
//!
//! - [`context::RenderContext`] — the per-render ambient scope carrying
//!   injected capabilities and the shadowing slot/group registry stacks.
//! - [`directives::HxDirectives`] — the fixed partial-update directive set
//!   with its URL-synthesis fallback for empty verbs.
//! - [`resolver`] — explicit-over-inferred-over-default resolution of a
//!   component's identity, value, and state.
//! - [`field_adapter`] — input subtype, constraint, and option hints for
//!   bound fields.
//! - [`aria::AriaAttrs`] — the accessibility attribute set.
//! - [`geometry`] — series-to-points normalization for data visuals.
//!
//! Everything here is pure string composition over injected lookups: no
//! I/O, no shared mutable state across renders, children of one composite
//! evaluated strictly in document order.

pub mod aria;
pub mod capabilities;
pub mod context;
pub mod directives;
pub mod field_adapter;
pub mod geometry;
pub mod options;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod tests_directives;

#[cfg(test)]
mod tests_registry;

#[cfg(test)]
mod tests_resolution;

pub use aria::AriaAttrs;
pub use capabilities::{
    DataTypeTag, EnumVariantMeta, FieldConstraints, FieldMetadata, FieldSource, IconSource,
    RouteRef, UrlSynthesizer, ValidationSource, ValueType,
};
pub use context::RenderContext;
pub use directives::HxDirectives;
pub use field_adapter::{enum_options, input_subtype, push_constraint_attrs, InputSubtype, SelectOption};
pub use geometry::{map_series, Point};
pub use options::{Dialect, RenderOptions};
pub use registry::{GroupEntry, GroupRegistry, SlotRegistry};
pub use resolver::{resolve_field, FieldBinding, ResolvedField};
