// Shape capability shared by the abstract factory and factory method catalogs.

use crate::variant::{Family, Variant};

pub const BASIC: Family = Family::new("basic");
pub const ROUNDED: Family = Family::new("rounded");

pub trait Shape: Variant {
    fn draw(&self) -> String;
}

macro_rules! shape_variant {
    ($ty:ident, $family:expr, $text:literal) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl Variant for $ty {
            fn family(&self) -> Family {
                $family
            }

            fn variant_name(&self) -> &'static str {
                stringify!($ty)
            }
        }

        impl Shape for $ty {
            fn draw(&self) -> String {
                $text.to_string()
            }
        }
    };
}

shape_variant!(Rectangle, BASIC, "rectangle");
shape_variant!(Square, BASIC, "square");
shape_variant!(Circle, BASIC, "circle");
shape_variant!(RoundedRectangle, ROUNDED, "rounded rectangle");
shape_variant!(RoundedSquare, ROUNDED, "rounded square");
