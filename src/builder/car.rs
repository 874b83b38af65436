// Car builder: one recipe, two representations (the car itself and its manual).

use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::error::PatternError;
use crate::variant::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Eco,
    Sport,
}

impl Engine {
    pub fn engine_type(self) -> &'static str {
        match self {
            Engine::Eco => "eco",
            Engine::Sport => "sport",
        }
    }

    pub fn horsepower(self) -> u32 {
        match self {
            Engine::Eco => 105,
            Engine::Sport => 280,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub seats: Option<u8>,
    pub engine: Option<Engine>,
}

impl Car {
    pub fn describe(&self) -> String {
        let seats = self
            .seats
            .map_or_else(|| "no seats".to_string(), |n| format!("{n} seats"));
        let engine = self
            .engine
            .map_or("no", Engine::engine_type);
        format!("car with {seats} and {engine} engine")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manual {
    pub seat_manual: Option<String>,
    pub engine_manual: Option<String>,
}

impl Manual {
    pub fn describe(&self) -> String {
        [&self.seat_manual, &self.engine_manual]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A mutation call as the director issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Reset,
    SetSeats(u8),
    SetEngine(Engine),
}

pub trait Builder {
    type Product;

    /// Discards the product in progress and starts recording afresh.
    fn reset(&mut self);
    fn set_seats(&mut self, count: u8);
    fn set_engine(&mut self, engine: Engine);
    /// Hands over the product and leaves the builder as if newly created.
    fn get_product(&mut self) -> Self::Product;
    fn steps(&self) -> &[BuildStep];
}

// ============================================================================
// Concrete builders
// ============================================================================

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
    steps: Vec<BuildStep>,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for CarBuilder {
    type Product = Car;

    fn reset(&mut self) {
        self.car = Car::default();
        self.steps.clear();
        self.steps.push(BuildStep::Reset);
    }

    fn set_seats(&mut self, count: u8) {
        self.car.seats = Some(count);
        self.steps.push(BuildStep::SetSeats(count));
    }

    fn set_engine(&mut self, engine: Engine) {
        self.car.engine = Some(engine);
        self.steps.push(BuildStep::SetEngine(engine));
    }

    fn get_product(&mut self) -> Car {
        self.steps.clear();
        mem::take(&mut self.car)
    }

    fn steps(&self) -> &[BuildStep] {
        &self.steps
    }
}

#[derive(Debug, Default)]
pub struct ManualBuilder {
    manual: Manual,
    steps: Vec<BuildStep>,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for ManualBuilder {
    type Product = Manual;

    fn reset(&mut self) {
        self.manual = Manual::default();
        self.steps.clear();
        self.steps.push(BuildStep::Reset);
    }

    fn set_seats(&mut self, count: u8) {
        let noun = if count == 1 { "seat" } else { "seats" };
        self.manual.seat_manual = Some(format!("This car has {count} {noun}"));
        self.steps.push(BuildStep::SetSeats(count));
    }

    fn set_engine(&mut self, engine: Engine) {
        self.manual.engine_manual = Some(format!(
            "This car has a {} engine ({} hp)",
            engine.engine_type(),
            engine.horsepower()
        ));
        self.steps.push(BuildStep::SetEngine(engine));
    }

    fn get_product(&mut self) -> Manual {
        self.steps.clear();
        mem::take(&mut self.manual)
    }

    fn steps(&self) -> &[BuildStep] {
        &self.steps
    }
}

// ============================================================================
// Director
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Sport,
    Eco,
}

impl Recipe {
    pub const ALL: [Recipe; 2] = [Recipe::Sport, Recipe::Eco];

    pub fn name(self) -> &'static str {
        match self {
            Recipe::Sport => "sport",
            Recipe::Eco => "eco",
        }
    }

    fn seats(self) -> u8 {
        match self {
            Recipe::Sport => 2,
            Recipe::Eco => 5,
        }
    }

    fn engine(self) -> Engine {
        match self {
            Recipe::Sport => Engine::Sport,
            Recipe::Eco => Engine::Eco,
        }
    }
}

impl FromStr for Recipe {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|recipe| recipe.name() == key)
            .ok_or_else(|| PatternError::not_found("car recipes", s.trim()))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Holds no builder of its own; every call names the builder it drives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn construct<B: Builder + ?Sized>(&self, recipe: Recipe, builder: &mut B) {
        tracing::debug!(recipe = recipe.name(), "directing build");
        builder.reset();
        builder.set_seats(recipe.seats());
        builder.set_engine(recipe.engine());
    }

    pub fn construct_sport_car<B: Builder + ?Sized>(&self, builder: &mut B) {
        self.construct(Recipe::Sport, builder);
    }

    pub fn construct_eco_car<B: Builder + ?Sized>(&self, builder: &mut B) {
        self.construct(Recipe::Eco, builder);
    }
}
