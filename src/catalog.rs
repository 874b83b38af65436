// Every built-in resolver, assembled once and handed to whoever needs it.

use crate::abstract_factory::{furniture_catalog, gui_catalog, FurnitureFactory, GuiFactory};
use crate::bridge::{device_catalog, draw_api_catalog, Device, DrawApi};
use crate::error::Result;
use crate::factory_method::{dialog_catalog, Dialog};
use crate::variant::Resolver;

#[derive(Debug)]
pub struct Catalog {
    pub furniture: Resolver<Box<dyn FurnitureFactory>>,
    pub gui: Resolver<Box<dyn GuiFactory>>,
    pub dialogs: Resolver<Box<dyn Dialog>>,
    pub devices: Resolver<Box<dyn Device>>,
    pub draw_apis: Resolver<Box<dyn DrawApi>>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            furniture: furniture_catalog()?,
            gui: gui_catalog()?,
            dialogs: dialog_catalog()?,
            devices: device_catalog()?,
            draw_apis: draw_api_catalog()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_sizes() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.furniture.len(), 2);
        assert_eq!(catalog.gui.len(), 2);
        assert_eq!(catalog.dialogs.len(), 3);
        assert_eq!(catalog.devices.len(), 2);
        assert_eq!(catalog.draw_apis.len(), 2);
    }
}
