//! # Adapter
//!
//! Devices report their battery level in mAh. Callers want a percentage. [`Battery`]
//! wraps any [`MahBattery`] and converts its reading, so the device code stays as it is.

use std::io::Write;

use crate::error::Result;

/// Full-charge capacity used for the conversion.
pub const CAPACITY_MAH: u32 = 4000;

/// The adaptee's interface: remaining charge in mAh.
pub trait MahBattery {
    fn remaining_mah(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Laptop;

impl MahBattery for Laptop {
    fn remaining_mah(&self) -> u32 {
        2500
    }
}

/// The interface callers expect: remaining charge in percent.
pub trait PercentBattery {
    fn remaining_percent(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Battery<D = Laptop> {
    device: D,
}

impl<D: MahBattery> Battery<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }
}

impl<D: MahBattery> PercentBattery for Battery<D> {
    fn remaining_percent(&self) -> u32 {
        mah_to_percent(self.device.remaining_mah())
    }
}

// Integer division, truncating. Widened so any `u32` reading converts without overflow.
fn mah_to_percent(remaining: u32) -> u32 {
    let percent = u64::from(remaining) * 100 / u64::from(CAPACITY_MAH);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let laptop_adapter = Battery::new(Laptop);
    writeln!(out, "{}", laptop_adapter.remaining_percent())?;
    Ok(())
}
