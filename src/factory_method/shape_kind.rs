// Closed shape factory: an exhaustive match instead of a chain of string tests.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::shapes::{Circle, Rectangle, Shape, Square};
use crate::variant::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Square];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }

    pub fn build(self) -> Box<dyn Shape> {
        match self {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| PatternError::not_found("shape kinds", s.trim()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let drawn: Vec<String> = ["circle", "rectangle", "square"]
            .iter()
            .map(|s| s.parse::<ShapeKind>().unwrap().build().draw())
            .collect();
        assert_eq!(drawn, vec!["circle", "rectangle", "square"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Square ".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
    }

    #[test]
    fn test_empty_and_unknown_are_not_found() {
        assert_eq!(
            "".parse::<ShapeKind>().unwrap_err(),
            PatternError::not_found("shape kinds", "")
        );
        assert!("hexagon".parse::<ShapeKind>().unwrap_err().is_not_found());
    }

    #[test]
    fn test_display_round_trips_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }
}
