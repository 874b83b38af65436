use crate::error::Result;
use crate::variant::{Family, Resolver, Variant};

pub const WINDOWS: Family = Family::new("windows");
pub const LINUX: Family = Family::new("linux");
pub const MACOS: Family = Family::new("macos");

pub trait DialogButton: Variant {
    fn render(&self) -> String {
        format!("{} button rendered", self.family())
    }

    /// Reports the click, then runs the handler and reports what it did.
    fn on_click(&self, handler: &dyn Fn() -> String) -> Vec<String> {
        vec![format!("{} button clicked", self.family()), handler()]
    }
}

/// Creator: `create_button` is the factory method, `render` the logic built on it.
pub trait Dialog: Variant {
    fn create_button(&self) -> Box<dyn DialogButton>;

    fn close(&self) -> String {
        tracing::debug!(dialog = self.variant_name(), "dialog closed");
        "dialog closed".to_string()
    }

    fn render(&self) -> Vec<String> {
        let ok_button = self.create_button();
        let mut events = ok_button.on_click(&|| self.close());
        events.push(ok_button.render());
        events
    }
}

macro_rules! platform {
    ($button:ident, $dialog:ident, $family:expr) => {
        pub struct $button;

        impl Variant for $button {
            fn family(&self) -> Family {
                $family
            }

            fn variant_name(&self) -> &'static str {
                stringify!($button)
            }
        }

        impl DialogButton for $button {}

        pub struct $dialog;

        impl Variant for $dialog {
            fn family(&self) -> Family {
                $family
            }

            fn variant_name(&self) -> &'static str {
                stringify!($dialog)
            }
        }

        impl Dialog for $dialog {
            fn create_button(&self) -> Box<dyn DialogButton> {
                Box::new($button)
            }
        }
    };
}

platform!(WindowsButton, WindowsDialog, WINDOWS);
platform!(LinuxButton, LinuxDialog, LINUX);
platform!(MacOsButton, MacOsDialog, MACOS);

pub fn dialog_catalog() -> Result<Resolver<Box<dyn Dialog>>> {
    let catalog: Resolver<Box<dyn Dialog>> = Resolver::new("dialogs");
    catalog
        .with_variant("windows", || Box::new(WindowsDialog) as Box<dyn Dialog>)?
        .with_variant("linux", || Box::new(LinuxDialog) as Box<dyn Dialog>)?
        .with_variant("macos", || Box::new(MacOsDialog) as Box<dyn Dialog>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sequence() {
        let lines = WindowsDialog.render();
        assert_eq!(
            lines,
            vec![
                "windows button clicked",
                "dialog closed",
                "windows button rendered"
            ]
        );
    }

    #[test]
    fn test_creator_picks_matching_button() {
        let catalog = dialog_catalog().unwrap();
        for key in catalog.keys() {
            let dialog = catalog.resolve(key).unwrap();
            assert_eq!(dialog.create_button().family(), dialog.family());
        }
    }

    #[test]
    fn test_linux_from_catalog() {
        let catalog = dialog_catalog().unwrap();
        let dialog = catalog.resolve("Linux").unwrap();
        assert_eq!(dialog.render().last().unwrap(), "linux button rendered");
    }

    #[test]
    fn test_unknown_platform() {
        let catalog = dialog_catalog().unwrap();
        assert!(catalog.resolve("haiku").err().unwrap().is_not_found());
    }
}
