// Plain and rounded shape kits, picked by the caller instead of a global producer.

use crate::error::Result;
use crate::shapes::{Rectangle, RoundedRectangle, RoundedSquare, Shape, Square, BASIC, ROUNDED};
use crate::variant::Resolver;

pub fn shape_factory(rounded: bool) -> Result<Resolver<Box<dyn Shape>>> {
    if rounded {
        let kit: Resolver<Box<dyn Shape>> = Resolver::for_family("rounded shapes", ROUNDED);
        kit
            .with_variant("rectangle", || Box::new(RoundedRectangle) as Box<dyn Shape>)?
            .with_variant("square", || Box::new(RoundedSquare) as Box<dyn Shape>)
    } else {
        let kit: Resolver<Box<dyn Shape>> = Resolver::for_family("shapes", BASIC);
        kit
            .with_variant("rectangle", || Box::new(Rectangle) as Box<dyn Shape>)?
            .with_variant("square", || Box::new(Square) as Box<dyn Shape>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_plain_kit() {
        let factory = shape_factory(false).unwrap();
        let drawn: Vec<String> = ["rectangle", "square"]
            .iter()
            .map(|key| factory.resolve(key).unwrap().draw())
            .collect();
        assert_eq!(drawn, vec!["rectangle", "square"]);
    }

    #[test]
    fn test_rounded_kit_stays_in_family() {
        let factory = shape_factory(true).unwrap();
        assert_eq!(factory.family(), Some(ROUNDED));
        for key in factory.keys() {
            assert_eq!(factory.resolve(key).unwrap().family(), ROUNDED);
        }
        assert_eq!(factory.resolve("square").unwrap().draw(), "rounded square");
    }

    #[test]
    fn test_circle_is_not_in_kits() {
        assert!(shape_factory(true).unwrap().resolve("circle").err().unwrap().is_not_found());
        assert!(shape_factory(false).unwrap().resolve("circle").err().unwrap().is_not_found());
    }
}
