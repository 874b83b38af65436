// Meal builder: orders assembled from menu items resolved by key.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{PatternError, Result};
use crate::variant::{normalize_key, Family, Resolver, Variant};

pub const BURGER: Family = Family::new("burger");
pub const COLD_DRINK: Family = Family::new("cold drink");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    Wrapper,
    Bottle,
}

impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packing::Wrapper => f.write_str("wrapper"),
            Packing::Bottle => f.write_str("bottle"),
        }
    }
}

pub trait Item: Variant {
    fn name(&self) -> &'static str;
    fn price(&self) -> u32;

    fn packing(&self) -> Packing {
        if self.family() == COLD_DRINK {
            Packing::Bottle
        } else {
            Packing::Wrapper
        }
    }
}

macro_rules! menu_item {
    ($ty:ident, $family:expr, $name:literal, $price:literal) => {
        pub struct $ty;

        impl Variant for $ty {
            fn family(&self) -> Family {
                $family
            }

            fn variant_name(&self) -> &'static str {
                stringify!($ty)
            }
        }

        impl Item for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn price(&self) -> u32 {
                $price
            }
        }
    };
}

menu_item!(VegBurger, BURGER, "Veg Burger", 25);
menu_item!(ChickenBurger, BURGER, "Chicken Burger", 50);
menu_item!(Coke, COLD_DRINK, "Coke", 30);
menu_item!(Pepsi, COLD_DRINK, "Pepsi", 35);

pub fn menu() -> Result<Resolver<Box<dyn Item>>> {
    let menu: Resolver<Box<dyn Item>> = Resolver::new("menu");
    menu.with_variant("veg-burger", || Box::new(VegBurger) as Box<dyn Item>)?
        .with_variant("chicken-burger", || Box::new(ChickenBurger) as Box<dyn Item>)?
        .with_variant("coke", || Box::new(Coke) as Box<dyn Item>)?
        .with_variant("pepsi", || Box::new(Pepsi) as Box<dyn Item>)
}

// ============================================================================
// Meal
// ============================================================================

#[derive(Default)]
pub struct Meal {
    items: Vec<Box<dyn Item>>,
}

impl Meal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn Item> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cost(&self) -> u32 {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// One line per item in order, then the total.
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| {
                format!(
                    "Item: {}, Packing: {}, Price: {}",
                    item.name(),
                    item.packing(),
                    item.price()
                )
            })
            .chain(std::iter::once(format!("Total cost: {}", self.cost())))
            .collect()
    }
}

impl fmt::Debug for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meal")
            .field("items", &self.items.iter().map(|item| item.name()).collect_vec())
            .field("cost", &self.cost())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealPlan {
    Veg,
    NonVeg,
}

impl MealPlan {
    pub const ALL: [MealPlan; 2] = [MealPlan::Veg, MealPlan::NonVeg];

    pub fn name(self) -> &'static str {
        match self {
            MealPlan::Veg => "veg",
            MealPlan::NonVeg => "non-veg",
        }
    }

    fn item_keys(self) -> [&'static str; 2] {
        match self {
            MealPlan::Veg => ["veg-burger", "coke"],
            MealPlan::NonVeg => ["chicken-burger", "pepsi"],
        }
    }
}

impl FromStr for MealPlan {
    type Err = PatternError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|plan| plan.name() == key)
            .ok_or_else(|| PatternError::not_found("meal plans", s.trim()))
    }
}

pub struct MealBuilder {
    menu: Resolver<Box<dyn Item>>,
}

impl MealBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self { menu: menu()? })
    }

    pub fn with_menu(menu: Resolver<Box<dyn Item>>) -> Self {
        Self { menu }
    }

    /// Fails on the first key the menu does not know; no partial meal is returned.
    pub fn from_menu<S: AsRef<str>>(&self, keys: &[S]) -> Result<Meal> {
        let mut meal = Meal::new();
        for key in keys {
            meal.add_item(self.menu.resolve(key.as_ref())?);
        }
        Ok(meal)
    }

    pub fn prepare(&self, plan: MealPlan) -> Result<Meal> {
        tracing::debug!(plan = plan.name(), "preparing meal");
        self.from_menu(&plan.item_keys())
    }

    pub fn prepare_veg_meal(&self) -> Result<Meal> {
        self.prepare(MealPlan::Veg)
    }

    pub fn prepare_non_veg_meal(&self) -> Result<Meal> {
        self.prepare(MealPlan::NonVeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veg_meal() {
        let builder = MealBuilder::new().unwrap();
        let meal = builder.prepare_veg_meal().unwrap();
        assert_eq!(meal.cost(), 55);
        assert_eq!(
            meal.lines(),
            vec![
                "Item: Veg Burger, Packing: wrapper, Price: 25",
                "Item: Coke, Packing: bottle, Price: 30",
                "Total cost: 55",
            ]
        );
    }

    #[test]
    fn test_non_veg_meal() {
        let builder = MealBuilder::new().unwrap();
        let meal = builder.prepare_non_veg_meal().unwrap();
        assert_eq!(meal.cost(), 85);
        let names: Vec<&str> = meal.items().map(|item| item.name()).collect();
        assert_eq!(names, vec!["Chicken Burger", "Pepsi"]);
    }

    #[test]
    fn test_drinks_are_bottled() {
        assert_eq!(Pepsi.packing(), Packing::Bottle);
        assert_eq!(ChickenBurger.packing(), Packing::Wrapper);
    }

    #[test]
    fn test_custom_order_keeps_sequence() {
        let builder = MealBuilder::new().unwrap();
        let meal = builder.from_menu(&["pepsi", "veg-burger", "pepsi"]).unwrap();
        assert_eq!(meal.len(), 3);
        assert_eq!(meal.cost(), 95);
        assert_eq!(meal.lines()[1], "Item: Veg Burger, Packing: wrapper, Price: 25");
    }

    #[test]
    fn test_unknown_item_fails_whole_order() {
        let builder = MealBuilder::new().unwrap();
        let err = builder.from_menu(&["coke", "fries"]).unwrap_err();
        assert_eq!(err, PatternError::not_found("menu", "fries"));
    }

    #[test]
    fn test_empty_meal() {
        let builder = MealBuilder::new().unwrap();
        let meal = builder.from_menu::<&str>(&[]).unwrap();
        assert!(meal.is_empty());
        assert_eq!(meal.lines(), vec!["Total cost: 0"]);
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!("Non-Veg".parse::<MealPlan>().unwrap(), MealPlan::NonVeg);
        assert!("vegan".parse::<MealPlan>().is_err());
    }
}
