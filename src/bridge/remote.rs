// Remotes (abstraction) driving devices (implementation).

use crate::error::Result;
use crate::variant::{Family, Resolver, Variant};

pub const DEVICE: Family = Family::new("device");

pub const MAX_VOLUME: u8 = 100;
pub const MIN_CHANNEL: u32 = 1;

/// Power, volume and channel shared by every device through composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    enabled: bool,
    volume: u8,
    channel: u32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 30,
            channel: MIN_CHANNEL,
        }
    }
}

impl DeviceState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Clamped to `0..=MAX_VOLUME`.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, i32::from(MAX_VOLUME)) as u8;
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    /// Never below `MIN_CHANNEL`.
    pub fn set_channel(&mut self, channel: i64) {
        self.channel = channel.clamp(i64::from(MIN_CHANNEL), i64::from(u32::MAX)) as u32;
    }
}

pub trait Device: Variant {
    fn state(&self) -> &DeviceState;
    fn state_mut(&mut self) -> &mut DeviceState;

    fn is_enabled(&self) -> bool {
        self.state().is_enabled()
    }

    fn enable(&mut self) {
        self.state_mut().set_enabled(true);
    }

    fn disable(&mut self) {
        self.state_mut().set_enabled(false);
    }

    fn volume(&self) -> u8 {
        self.state().volume()
    }

    fn set_volume(&mut self, volume: i32) {
        self.state_mut().set_volume(volume);
    }

    fn channel(&self) -> u32 {
        self.state().channel()
    }

    fn set_channel(&mut self, channel: i64) {
        self.state_mut().set_channel(channel);
    }

    fn status(&self) -> String {
        let state = self.state();
        format!(
            "{}: {}, volume {}%, channel {}",
            self.variant_name(),
            if state.is_enabled() { "enabled" } else { "disabled" },
            state.volume(),
            state.channel()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tv {
    state: DeviceState,
}

impl Variant for Tv {
    fn family(&self) -> Family {
        DEVICE
    }

    fn variant_name(&self) -> &'static str {
        "tv"
    }
}

impl Device for Tv {
    fn state(&self) -> &DeviceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radio {
    state: DeviceState,
}

impl Variant for Radio {
    fn family(&self) -> Family {
        DEVICE
    }

    fn variant_name(&self) -> &'static str {
        "radio"
    }
}

impl Device for Radio {
    fn state(&self) -> &DeviceState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

pub fn device_catalog() -> Result<Resolver<Box<dyn Device>>> {
    let catalog: Resolver<Box<dyn Device>> = Resolver::for_family("devices", DEVICE);
    catalog
        .with_variant("tv", || Box::new(Tv::default()) as Box<dyn Device>)?
        .with_variant("radio", || Box::new(Radio::default()) as Box<dyn Device>)
}

// ============================================================================
// Remotes
// ============================================================================

pub trait Remote {
    fn power(&mut self);
    fn volume_down(&mut self);
    fn volume_up(&mut self);
    fn channel_down(&mut self);
    fn channel_up(&mut self);
}

pub struct BasicRemote<'a> {
    device: &'a mut dyn Device,
}

impl<'a> BasicRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &dyn Device {
        &*self.device
    }
}

impl Remote for BasicRemote<'_> {
    fn power(&mut self) {
        tracing::debug!(device = self.device.variant_name(), "remote: power toggle");
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    fn volume_down(&mut self) {
        tracing::debug!(device = self.device.variant_name(), "remote: volume down");
        let volume = i32::from(self.device.volume()) - 10;
        self.device.set_volume(volume);
    }

    fn volume_up(&mut self) {
        tracing::debug!(device = self.device.variant_name(), "remote: volume up");
        let volume = i32::from(self.device.volume()) + 10;
        self.device.set_volume(volume);
    }

    fn channel_down(&mut self) {
        tracing::debug!(device = self.device.variant_name(), "remote: channel down");
        let channel = i64::from(self.device.channel()) - 1;
        self.device.set_channel(channel);
    }

    fn channel_up(&mut self) {
        tracing::debug!(device = self.device.variant_name(), "remote: channel up");
        let channel = i64::from(self.device.channel()) + 1;
        self.device.set_channel(channel);
    }
}

/// Everything a basic remote does, plus mute.
pub struct AdvancedRemote<'a> {
    basic: BasicRemote<'a>,
}

impl<'a> AdvancedRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self {
            basic: BasicRemote::new(device),
        }
    }

    pub fn mute(&mut self) {
        tracing::debug!(device = self.basic.device.variant_name(), "remote: mute");
        self.basic.device.set_volume(0);
    }

    pub fn device(&self) -> &dyn Device {
        self.basic.device()
    }
}

impl Remote for AdvancedRemote<'_> {
    fn power(&mut self) {
        self.basic.power();
    }

    fn volume_down(&mut self) {
        self.basic.volume_down();
    }

    fn volume_up(&mut self) {
        self.basic.volume_up();
    }

    fn channel_down(&mut self) {
        self.basic.channel_down();
    }

    fn channel_up(&mut self) {
        self.basic.channel_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_toggle() {
        let mut tv = Tv::default();
        let mut remote = BasicRemote::new(&mut tv);
        remote.power();
        assert!(remote.device().is_enabled());
        remote.power();
        assert!(!remote.device().is_enabled());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut radio = Radio::default();
        {
            let mut remote = BasicRemote::new(&mut radio);
            for _ in 0..10 {
                remote.volume_up();
            }
        }
        assert_eq!(radio.volume(), MAX_VOLUME);

        let mut remote = BasicRemote::new(&mut radio);
        for _ in 0..20 {
            remote.volume_down();
        }
        assert_eq!(remote.device().volume(), 0);
    }

    #[test]
    fn test_channel_buttons_change_channel_not_volume() {
        let mut tv = Tv::default();
        let mut remote = BasicRemote::new(&mut tv);
        remote.channel_up();
        remote.channel_up();
        remote.channel_down();
        assert_eq!(remote.device().channel(), 2);
        assert_eq!(remote.device().volume(), 30);
    }

    #[test]
    fn test_channel_floor() {
        let mut tv = Tv::default();
        let mut remote = BasicRemote::new(&mut tv);
        remote.channel_down();
        assert_eq!(tv.channel(), MIN_CHANNEL);
    }

    #[test]
    fn test_advanced_remote_mutes() {
        let mut radio = Radio::default();
        let mut remote = AdvancedRemote::new(&mut radio);
        remote.power();
        remote.mute();
        assert_eq!(
            remote.device().status(),
            "radio: enabled, volume 0%, channel 1"
        );
    }

    #[test]
    fn test_remote_works_on_resolved_devices() {
        let catalog = device_catalog().unwrap();
        for key in catalog.keys() {
            let mut device = catalog.resolve(key).unwrap();
            let mut remote = AdvancedRemote::new(device.as_mut());
            remote.power();
            remote.volume_up();
            assert_eq!(remote.device().volume(), 40);
            assert_eq!(remote.device().variant_name(), key);
        }
    }

    #[test]
    fn test_status_of_fresh_tv() {
        assert_eq!(Tv::default().status(), "tv: disabled, volume 30%, channel 1");
    }
}
