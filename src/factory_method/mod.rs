//! Factory methods: a creator defers the choice of product to its implementors,
//! or to an exhaustive enum when the set of products is closed.

pub mod dialog;
pub mod shape_kind;

pub use dialog::{dialog_catalog, Dialog, DialogButton};
pub use shape_kind::ShapeKind;
