use crate::error::Result;
use crate::variant::{Family, Resolver, Variant, VariantSet};

pub const VICTORIAN: Family = Family::new("victorian");
pub const MODERN: Family = Family::new("modern");

pub trait Chair: Variant {
    fn chair_type(&self) -> String;
}

pub trait Table: Variant {
    fn table_type(&self) -> String;

    /// Any chair type-checks here, but only a chair of the table's own family
    /// collaborates cleanly; a foreign one is reported as a mismatch.
    fn show_furniture_type(&self, collaborator: &dyn Chair) -> String {
        let mut line = format!(
            "{} collaborating with ({})",
            self.table_type(),
            collaborator.chair_type()
        );
        if collaborator.family() != self.family() {
            line.push_str(&format!(
                " [mismatched families: {} table, {} chair]",
                self.family(),
                collaborator.family()
            ));
        }
        line
    }
}

pub trait FurnitureFactory: VariantSet {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_table(&self) -> Box<dyn Table>;
}

// ============================================================================
// Victorian family
// ============================================================================

pub struct VictorianChair;

impl Variant for VictorianChair {
    fn family(&self) -> Family {
        VICTORIAN
    }

    fn variant_name(&self) -> &'static str {
        "VictorianChair"
    }
}

impl Chair for VictorianChair {
    fn chair_type(&self) -> String {
        "victorian chair".to_string()
    }
}

pub struct VictorianTable;

impl Variant for VictorianTable {
    fn family(&self) -> Family {
        VICTORIAN
    }

    fn variant_name(&self) -> &'static str {
        "VictorianTable"
    }
}

impl Table for VictorianTable {
    fn table_type(&self) -> String {
        "victorian table".to_string()
    }
}

pub struct VictorianFurnitureFactory;

impl Variant for VictorianFurnitureFactory {
    fn family(&self) -> Family {
        VICTORIAN
    }

    fn variant_name(&self) -> &'static str {
        "VictorianFurnitureFactory"
    }
}

impl VariantSet for VictorianFurnitureFactory {
    fn members(&self) -> Vec<Box<dyn Variant>> {
        vec![
            Box::new(self.create_chair()) as Box<dyn Variant>,
            Box::new(self.create_table()) as Box<dyn Variant>,
        ]
    }
}

impl FurnitureFactory for VictorianFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(VictorianTable)
    }
}

// ============================================================================
// Modern family
// ============================================================================

pub struct ModernChair;

impl Variant for ModernChair {
    fn family(&self) -> Family {
        MODERN
    }

    fn variant_name(&self) -> &'static str {
        "ModernChair"
    }
}

impl Chair for ModernChair {
    fn chair_type(&self) -> String {
        "modern chair".to_string()
    }
}

pub struct ModernTable;

impl Variant for ModernTable {
    fn family(&self) -> Family {
        MODERN
    }

    fn variant_name(&self) -> &'static str {
        "ModernTable"
    }
}

impl Table for ModernTable {
    fn table_type(&self) -> String {
        "modern table".to_string()
    }
}

pub struct ModernFurnitureFactory;

impl Variant for ModernFurnitureFactory {
    fn family(&self) -> Family {
        MODERN
    }

    fn variant_name(&self) -> &'static str {
        "ModernFurnitureFactory"
    }
}

impl VariantSet for ModernFurnitureFactory {
    fn members(&self) -> Vec<Box<dyn Variant>> {
        vec![
            Box::new(self.create_chair()) as Box<dyn Variant>,
            Box::new(self.create_table()) as Box<dyn Variant>,
        ]
    }
}

impl FurnitureFactory for ModernFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(ModernTable)
    }
}

// ============================================================================
// Catalog and client code
// ============================================================================

pub fn furniture_catalog() -> Result<Resolver<Box<dyn FurnitureFactory>>> {
    let catalog: Resolver<Box<dyn FurnitureFactory>> = Resolver::new("furniture");
    catalog
        .with_variant("victorian", || {
            Box::new(VictorianFurnitureFactory) as Box<dyn FurnitureFactory>
        })?
        .with_variant("modern", || {
            Box::new(ModernFurnitureFactory) as Box<dyn FurnitureFactory>
        })
}

/// Client code: knows only the kit and product traits.
pub fn furnish(factory: &dyn FurnitureFactory) -> Vec<String> {
    let chair = factory.create_chair();
    let table = factory.create_table();
    vec![table.table_type(), table.show_furniture_type(chair.as_ref())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys() {
        let catalog = furniture_catalog().unwrap();
        assert_eq!(catalog.keys(), vec!["modern", "victorian"]);
    }

    #[test]
    fn test_every_kit_is_consistent() {
        let catalog = furniture_catalog().unwrap();
        for key in catalog.keys() {
            let kit = catalog.resolve_set(key).unwrap();
            assert_eq!(kit.create_chair().family(), kit.family());
            assert_eq!(kit.create_table().family(), kit.family());
        }
    }

    #[test]
    fn test_furnish_same_family() {
        let catalog = furniture_catalog().unwrap();
        let kit = catalog.resolve("Victorian").unwrap();
        assert_eq!(
            furnish(kit.as_ref()),
            vec![
                "victorian table".to_string(),
                "victorian table collaborating with (victorian chair)".to_string(),
            ]
        );
    }

    #[test]
    fn test_cross_family_collaboration_is_degraded() {
        let table = ModernTable;
        let line = table.show_furniture_type(&VictorianChair);
        assert!(line.starts_with("modern table collaborating with (victorian chair)"));
        assert!(line.ends_with("[mismatched families: modern table, victorian chair]"));
    }

    #[test]
    fn test_unknown_style() {
        let catalog = furniture_catalog().unwrap();
        let err = catalog.resolve("baroque").err().unwrap();
        assert!(err.is_not_found());
    }
}
