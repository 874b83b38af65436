//! Abstract factories: one kit per family, every product of a kit from that family.
//!
//! Callers pick a kit once from a catalog (see [`furniture_catalog`],
//! [`gui_catalog`], [`shape_factory`]) and then only talk to the product traits.

pub mod furniture;
pub mod gui;
pub mod shape_kits;

pub use furniture::{furniture_catalog, Chair, FurnitureFactory, Table};
pub use gui::{gui_catalog, Application, Button, Checkbox, GuiFactory};
pub use shape_kits::shape_factory;
