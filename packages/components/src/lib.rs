//! # Trellis Components
//!
//! The component catalogue: declarative structs that expand into plain
//! HTML fragments through the engines in `trellis-renderer`. Every
//! component follows the same conventions:
//!
//! - classes are composed with the BEM builder under the configured block
//!   prefix (`ui-button`, `ui-panel__header`, `ui-input--invalid`);
//! - identity/value/state come from the shared resolver, so explicit
//!   inputs beat bound-field metadata beat defaults everywhere;
//! - partial-update behavior is declared through the fixed `hx-*`
//!   directive set and accessibility through the aria set;
//! - composites evaluate their children first, in document order, then
//!   assemble from the slot/group registries the children populated.
//!
//! Every user-supplied string is HTML-escaped on insertion. Fragments
//! registered through slots are inserted as-is: they were escaped when the
//! contributing child rendered them.

pub mod breadcrumb;
pub mod button;
pub mod carousel;
pub mod icon;
pub mod inputs;
pub mod panel;
pub mod radio;
pub mod sparkline;
pub mod tabs;

#[cfg(test)]
mod tests_catalogue;

pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use carousel::{Carousel, CarouselControl, CarouselSlide};
pub use icon::{Icon, IconSize};
pub use inputs::{Checkbox, Select, TextInput};
pub use panel::{Panel, PanelFooter, PanelHeader, PanelImage};
pub use radio::{RadioButton, RadioGroup};
pub use sparkline::Sparkline;
pub use tabs::{TabPanel, TabStrip};
