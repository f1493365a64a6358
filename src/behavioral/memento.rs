//! # Memento
//!
//! The originator ([`Hardware`]) captures its state in a [`Memento`] and can later be
//! rolled back to it. The memento is opaque: it stores a JSON snapshot of the state, so
//! a caretaker ([`History`]) can keep mementos around without being able to read or
//! change what is inside.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareType {
    Cpu,
    Ram,
    Gpu,
    Ssd,
    Hdd,
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HardwareType::Cpu => "CPU",
            HardwareType::Ram => "RAM",
            HardwareType::Gpu => "GPU",
            HardwareType::Ssd => "SSD",
            HardwareType::Hdd => "HDD",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} - Y: {}", self.x, self.y)
    }
}

/// The state being saved and restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub kind: HardwareType,
    pub detail: String,
    pub location: Location,
}

impl HardwareInfo {
    pub fn new(kind: HardwareType, detail: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            detail: detail.into(),
            location,
        }
    }
}

impl Default for HardwareInfo {
    fn default() -> Self {
        Self::new(HardwareType::Cpu, "", Location::default())
    }
}

/// Snapshot of a [`HardwareInfo`]. Only [`Hardware`] can read it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    snapshot: String,
}

/// The originator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hardware {
    info: HardwareInfo,
}

impl Hardware {
    pub fn new(info: HardwareInfo) -> Self {
        Self { info }
    }

    pub fn info(&self) -> &HardwareInfo {
        &self.info
    }

    pub fn set_info(&mut self, info: HardwareInfo) {
        self.info = info;
    }

    pub fn create_memento(&self) -> Result<Memento> {
        let snapshot = serde_json::to_string(&self.info)?;
        debug!(kind = %self.info.kind, detail = %self.info.detail, location = %self.info.location, "Memento created");
        Ok(Memento { snapshot })
    }

    pub fn restore(&mut self, memento: &Memento) -> Result<()> {
        self.info = serde_json::from_str(&memento.snapshot)?;
        debug!(kind = %self.info.kind, detail = %self.info.detail, location = %self.info.location, "Memento restored");
        Ok(())
    }
}

impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HARDWARE INFO")?;
        writeln!(f, "Type: {}", self.info.kind)?;
        writeln!(f, "Detail: {}", self.info.detail)?;
        write!(f, "Location: {}, {}", self.info.location.x, self.info.location.y)
    }
}

/// The caretaker: a stack of mementos it never looks inside.
#[derive(Debug, Default)]
pub struct History {
    saved: Vec<Memento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, memento: Memento) {
        self.saved.push(memento);
    }

    pub fn pop(&mut self) -> Option<Memento> {
        self.saved.pop()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let gpu = HardwareInfo::new(HardwareType::Gpu, "RTX 3070", Location::new(45, 35));
    let mut originator = Hardware::new(gpu);
    writeln!(out, "{originator}")?;

    let mut history = History::new();
    history.save(originator.create_memento()?);

    writeln!(out, "-------------------------------")?;

    originator.set_info(HardwareInfo::new(
        HardwareType::Cpu,
        "Intel Core i7",
        Location::new(12, 22),
    ));
    writeln!(out, "{originator}")?;

    writeln!(out, "-------------------------------")?;

    if let Some(memento) = history.pop() {
        originator.restore(&memento)?;
    }
    writeln!(out, "{originator}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_info() {
        let info = HardwareInfo::default();
        assert_eq!(info.kind, HardwareType::Cpu);
        assert_eq!(info.detail, "");
        assert_eq!(info.location.to_string(), "X: 0 - Y: 0");
    }

    #[test]
    fn test_restore_rolls_back_every_field() {
        let original = HardwareInfo::new(HardwareType::Ssd, "990 Pro", Location::new(-3, 7));
        let mut hardware = Hardware::new(original.clone());
        let memento = hardware.create_memento().unwrap();

        hardware.set_info(HardwareInfo::new(HardwareType::Hdd, "Barracuda", Location::new(1, 1)));
        assert_ne!(hardware.info(), &original);

        hardware.restore(&memento).unwrap();
        assert_eq!(hardware.info(), &original);
    }

    #[test]
    fn test_memento_is_unaffected_by_later_changes() {
        let mut hardware = Hardware::new(HardwareInfo::default());
        let memento = hardware.create_memento().unwrap();
        hardware.set_info(HardwareInfo::new(HardwareType::Ram, "32GB", Location::new(2, 2)));
        let later = hardware.create_memento().unwrap();
        assert_ne!(memento, later);
    }

    #[test]
    fn test_history_keeps_mementos_in_stack_order() {
        let mut hardware = Hardware::new(HardwareInfo::default());
        let mut history = History::new();
        history.save(hardware.create_memento().unwrap());
        hardware.set_info(HardwareInfo::new(HardwareType::Gpu, "RTX 3070", Location::new(45, 35)));
        history.save(hardware.create_memento().unwrap());
        hardware.set_info(HardwareInfo::new(HardwareType::Ram, "16GB", Location::new(0, 1)));

        hardware.restore(&history.pop().unwrap()).unwrap();
        assert_eq!(hardware.info().detail, "RTX 3070");
        hardware.restore(&history.pop().unwrap()).unwrap();
        assert_eq!(hardware.info(), &HardwareInfo::default());
        assert!(history.is_empty());
    }

    #[test]
    fn test_location_renders_both_axes() {
        assert_eq!(Location::new(45, 35).to_string(), "X: 45 - Y: 35");
        assert_eq!(Location::new(-3, 7).to_string(), "X: -3 - Y: 7");
    }

    #[test]
    fn test_demo_restores_from_history() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        let divider = format!("{}\n", "-".repeat(31));
        let blocks: Vec<&str> = transcript.split(divider.as_str()).collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], blocks[2]);
        assert!(blocks[1].contains("Detail: Intel Core i7"));
    }

    #[test]
    fn test_display_block() {
        let hardware = Hardware::new(HardwareInfo::new(HardwareType::Gpu, "RTX 3070", Location::new(45, 35)));
        assert_eq!(
            hardware.to_string(),
            "HARDWARE INFO\nType: GPU\nDetail: RTX 3070\nLocation: 45, 35"
        );
    }
}
