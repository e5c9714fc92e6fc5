//! HTML vocabulary and fluent composition helpers.
//!
//! Each vocabulary function produces a correctly configured
//! [`wattle_dom::Node`] (tag name, capability, seeded attributes); the
//! wrap helpers chain child mutations while handing the receiver back
//! for further composition.

pub mod elements;
pub mod wrap;

pub use elements::{
    anchor, href, image, list_item, ordered_list, paragraph, set_href, set_src, src, table,
    table_cell, table_cell_text, table_row, unordered_list,
};
pub use wrap::{wrap, wrap_all, wrap_all_in, wrap_in, wrap_text};
