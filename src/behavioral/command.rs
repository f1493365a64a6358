//! # Command
//!
//! Separates the object that *wants* an operation (the [`KeyPad`] invoker) from the
//! object that *performs* it (the [`Atm`] receiver). Each concrete command owns its
//! receiver, and the keypad only knows commands by name.

use std::collections::HashMap;
use std::io::Write;

use tracing::{debug, warn};

use crate::error::Result;

/// The receiver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Atm;

impl Atm {
    pub fn clear(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ATM::CLEAR")?;
        Ok(())
    }

    pub fn enter(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ATM::ENTER")?;
        Ok(())
    }

    pub fn delete(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ATM::DELETE")?;
        Ok(())
    }
}

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct ClearScreen {
    atm: Atm,
}

impl Command for ClearScreen {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.atm.clear(out)
    }
}

#[derive(Debug, Default)]
pub struct Enter {
    atm: Atm,
}

impl Command for Enter {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.atm.enter(out)
    }
}

#[derive(Debug, Default)]
pub struct Delete {
    atm: Atm,
}

impl Command for Delete {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.atm.delete(out)
    }
}

/// The invoker: a name-to-command registry.
pub struct KeyPad {
    commands: HashMap<String, Box<dyn Command>>,
}

impl KeyPad {
    pub fn new() -> Self {
        let mut keypad = Self {
            commands: HashMap::new(),
        };
        keypad.bind("Delete", Delete::default());
        keypad.bind("Enter", Enter::default());
        keypad.bind("Clear", ClearScreen::default());
        keypad
    }

    /// Binds `command` to `name`, replacing an existing binding.
    pub fn bind(&mut self, name: impl Into<String>, command: impl Command + 'static) {
        self.commands.insert(name.into(), Box::new(command));
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs the command bound to `name`. Returns `false` when nothing is bound.
    pub fn run_command(&self, name: &str, out: &mut dyn Write) -> Result<bool> {
        match self.commands.get(name) {
            Some(command) => {
                debug!(command = name, "Running command");
                command.execute(out)?;
                Ok(true)
            }
            None => {
                warn!(command = name, "No command bound");
                Ok(false)
            }
        }
    }
}

impl Default for KeyPad {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let keypad = KeyPad::new();
    for name in ["Enter", "Delete", "Clear"] {
        keypad.run_command(name, out)?;
    }
    Ok(())
}
