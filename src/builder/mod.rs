//! Builders and directors.
//!
//! [`car`] separates the construction recipe ([`car::Director`]) from the
//! representation being built; [`meal`] assembles orders from a menu resolver.

pub mod car;
pub mod meal;

pub use car::{BuildStep, Builder, Car, CarBuilder, Director, Engine, Manual, ManualBuilder, Recipe};
pub use meal::{Item, Meal, MealBuilder, MealPlan, Packing};
