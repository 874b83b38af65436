//! Composites: part-whole trees where a group answers the same operations as
//! a single element by forwarding them to its children in order.
//!
//! Nodes live in an index arena ([`Tree`]), which keeps parent links cheap and
//! lets [`Tree::attach`] refuse cycles instead of making them unrepresentable.

pub mod form;
pub mod graphics;
pub mod tree;

pub use form::{product_form, FormElement, FormTree};
pub use graphics::{Graphic, Scene};
pub use tree::{Component, NodeId, Tree};
