//! Bridges: an abstraction holds its implementation behind a trait object, so
//! either side can vary without touching the other.

pub mod draw;
pub mod remote;

pub use draw::{draw_api_catalog, BridgedCircle, DrawApi};
pub use remote::{device_catalog, AdvancedRemote, BasicRemote, Device, DeviceState, Remote};
