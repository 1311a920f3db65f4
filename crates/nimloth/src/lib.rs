#![forbid(unsafe_code)]

//! `nimloth` is a headless family-tree view.
//!
//! It re-exports the person model from `nimloth-core`, exposes the graph pipeline as
//! [`layout`], and adds the pieces an interactive front-end wires together:
//!
//! - [`view::FamilyTreeView`]: owns the roster and rebuilds the whole layout whenever a
//!   [`view::PersonEvent`] arrives,
//! - [`view::PersonEvents`]: a small publish/subscribe hub for those events,
//! - [`menu::RelativeMenu`]: the "add mother / father / child" context menu of a person node.

pub use nimloth_core::*;

pub mod layout {
    pub use nimloth_layout::*;
}

pub mod menu;
pub mod view;

pub use menu::{PointerEvent, RelativeMenu};
pub use view::{FamilyTreeView, PersonEvent, PersonEvents};
