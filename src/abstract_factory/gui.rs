use crate::error::Result;
use crate::variant::{Family, Resolver, Variant, VariantSet};

pub const WINDOWS: Family = Family::new("windows");
pub const MAC: Family = Family::new("mac");

pub trait Button: Variant {
    fn paint(&self) -> String;
}

pub trait Checkbox: Variant {
    fn paint(&self) -> String;
}

pub trait GuiFactory: VariantSet {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

macro_rules! widget {
    ($ty:ident: $contract:ident, $family:expr, $paint:literal) => {
        pub struct $ty;

        impl Variant for $ty {
            fn family(&self) -> Family {
                $family
            }

            fn variant_name(&self) -> &'static str {
                stringify!($ty)
            }
        }

        impl $contract for $ty {
            fn paint(&self) -> String {
                $paint.to_string()
            }
        }
    };
}

widget!(WinButton: Button, WINDOWS, "paint::WinButton");
widget!(WinCheckbox: Checkbox, WINDOWS, "paint::WinCheckbox");
widget!(MacButton: Button, MAC, "paint::MacButton");
widget!(MacCheckbox: Checkbox, MAC, "paint::MacCheckbox");

pub struct WinFactory;

impl Variant for WinFactory {
    fn family(&self) -> Family {
        WINDOWS
    }

    fn variant_name(&self) -> &'static str {
        "WinFactory"
    }
}

impl VariantSet for WinFactory {
    fn members(&self) -> Vec<Box<dyn Variant>> {
        vec![
            Box::new(self.create_button()) as Box<dyn Variant>,
            Box::new(self.create_checkbox()) as Box<dyn Variant>,
        ]
    }
}

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

pub struct MacFactory;

impl Variant for MacFactory {
    fn family(&self) -> Family {
        MAC
    }

    fn variant_name(&self) -> &'static str {
        "MacFactory"
    }
}

impl VariantSet for MacFactory {
    fn members(&self) -> Vec<Box<dyn Variant>> {
        vec![
            Box::new(self.create_button()) as Box<dyn Variant>,
            Box::new(self.create_checkbox()) as Box<dyn Variant>,
        ]
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

pub fn gui_catalog() -> Result<Resolver<Box<dyn GuiFactory>>> {
    let catalog: Resolver<Box<dyn GuiFactory>> = Resolver::new("gui toolkits");
    catalog
        .with_variant("windows", || Box::new(WinFactory) as Box<dyn GuiFactory>)?
        .with_variant("mac", || Box::new(MacFactory) as Box<dyn GuiFactory>)
}

/// Widgets are created up front, so an `Application` can always paint.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn paint(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.paint()]
    }

    pub fn family(&self) -> Family {
        self.button.family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_paints_selected_family() {
        let catalog = gui_catalog().unwrap();
        let factory = catalog.resolve_set("mac").unwrap();
        let app = Application::new(factory.as_ref());
        assert_eq!(app.paint(), vec!["paint::MacButton", "paint::MacCheckbox"]);
        assert_eq!(app.family(), MAC);
    }

    #[test]
    fn test_windows_kit() {
        let catalog = gui_catalog().unwrap();
        let app = Application::new(catalog.resolve("WINDOWS").unwrap().as_ref());
        assert_eq!(app.paint()[0], "paint::WinButton");
    }

    #[test]
    fn test_unknown_os() {
        let catalog = gui_catalog().unwrap();
        let err = catalog.resolve("beos").err().unwrap();
        assert_eq!(err.to_string(), "no variant registered under 'beos' in gui toolkits");
    }

    #[test]
    fn test_kits_are_consistent() {
        let catalog = gui_catalog().unwrap();
        for key in catalog.keys() {
            assert!(catalog.resolve_set(key).is_ok(), "kit {key} mixes families");
        }
    }
}
