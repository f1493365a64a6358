//! # Bridge
//!
//! The [`Device`] abstraction and the [`Charger`] implementation vary independently.
//! A device holds whichever charger is plugged in and forwards `charge` to it.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// The implementor side of the bridge.
pub trait Charger {
    fn kind(&self) -> &'static str;

    fn charge(&self, device: &str, speed: u32, out: &mut dyn Write) -> Result<()> {
        debug!(charger = self.kind(), device, speed, "Charging");
        writeln!(out, "Charging {device} at {speed}W.")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChargePhone;

impl Charger for ChargePhone {
    fn kind(&self) -> &'static str {
        "phone"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChargeTablet;

impl Charger for ChargeTablet {
    fn kind(&self) -> &'static str {
        "tablet"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChargeHeadphones;

impl Charger for ChargeHeadphones {
    fn kind(&self) -> &'static str {
        "headphones"
    }
}

/// The abstraction side of the bridge.
pub trait Device {
    fn charger(&self) -> Option<&dyn Charger>;

    fn set_charger(&mut self, charger: Box<dyn Charger>);

    /// Forwards to the plugged-in charger; does nothing without one.
    fn charge(&self, device: &str, speed: u32, out: &mut dyn Write) -> Result<()> {
        match self.charger() {
            Some(charger) => charger.charge(device, speed, out),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MyDevice {
    charger: Option<Box<dyn Charger>>,
}

impl MyDevice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for MyDevice {
    fn charger(&self) -> Option<&dyn Charger> {
        self.charger.as_deref()
    }

    fn set_charger(&mut self, charger: Box<dyn Charger>) {
        self.charger = Some(charger);
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut device = MyDevice::new();

    device.set_charger(Box::new(ChargePhone));
    device.charge("Phone", 30, out)?;

    device.set_charger(Box::new(ChargeTablet));
    device.charge("Tablet", 15, out)?;

    device.set_charger(Box::new(ChargeHeadphones));
    device.charge("Headphones", 5, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_charger_is_a_no_op() {
        let device = MyDevice::new();
        let mut out = Vec::new();
        device.charge("Phone", 30, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_latest_charger_wins() {
        let mut device = MyDevice::new();
        device.set_charger(Box::new(ChargePhone));
        device.set_charger(Box::new(ChargeHeadphones));
        assert_eq!(device.charger().map(|c| c.kind()), Some("headphones"));

        let mut out = Vec::new();
        device.charge("Earbuds", 2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Charging Earbuds at 2W.\n");
    }
}
