// Circles (abstraction) rendered through interchangeable colour APIs (implementation).

use crate::error::Result;
use crate::variant::{Family, Resolver, Variant};

pub const PALETTE: Family = Family::new("palette");

pub trait DrawApi: Variant {
    fn color(&self) -> &'static str;

    fn draw_circle(&self, radius: f64, x: f64, y: f64) -> String {
        format!(
            "circle[color: {}, radius: {radius}, x: {x}, y: {y}]",
            self.color()
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RedCircle;

impl Variant for RedCircle {
    fn family(&self) -> Family {
        PALETTE
    }

    fn variant_name(&self) -> &'static str {
        "RedCircle"
    }
}

impl DrawApi for RedCircle {
    fn color(&self) -> &'static str {
        "red"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreenCircle;

impl Variant for GreenCircle {
    fn family(&self) -> Family {
        PALETTE
    }

    fn variant_name(&self) -> &'static str {
        "GreenCircle"
    }
}

impl DrawApi for GreenCircle {
    fn color(&self) -> &'static str {
        "green"
    }
}

pub fn draw_api_catalog() -> Result<Resolver<Box<dyn DrawApi>>> {
    let catalog: Resolver<Box<dyn DrawApi>> = Resolver::for_family("draw apis", PALETTE);
    catalog
        .with_variant("red", || Box::new(RedCircle) as Box<dyn DrawApi>)?
        .with_variant("green", || Box::new(GreenCircle) as Box<dyn DrawApi>)
}

pub struct BridgedCircle {
    x: f64,
    y: f64,
    radius: f64,
    api: Box<dyn DrawApi>,
}

impl BridgedCircle {
    pub fn new(x: f64, y: f64, radius: f64, api: Box<dyn DrawApi>) -> Self {
        Self { x, y, radius, api }
    }

    pub fn draw(&self) -> String {
        self.api.draw_circle(self.radius, self.x, self.y)
    }
}
