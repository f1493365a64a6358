//! # Observer
//!
//! A [`Stock`] subject pushes its current count to every registered [`Control`].
//! Controls are shared with the caller (`Rc<RefCell<_>>`) so the caller can read what
//! the subject last told them.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;

/// An observer that reacts to notifications.
pub trait Control {
    fn name(&self) -> &str;

    fn text(&self) -> &str;

    /// Called by the subject whenever it publishes a new value.
    fn on_action(&mut self, value: &str);
}

pub type SharedControl = Rc<RefCell<dyn Control>>;

/// The subject contract.
pub trait Observable {
    fn register(&mut self, control: SharedControl);

    /// Removes `control`. Returns `false` if it was never registered.
    fn unregister(&mut self, control: &SharedControl) -> bool;

    fn send_notification(&self);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Label {
    name: String,
    text: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
        }
    }
}

impl Control for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn on_action(&mut self, value: &str) {
        self.text = value.to_string();
    }
}

pub struct Stock {
    count: i32,
    controls: Vec<SharedControl>,
}

impl Stock {
    pub fn new() -> Self {
        Self {
            count: 10,
            controls: Vec::new(),
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Takes one element out of stock. Observers are not notified until `send_notification`.
    pub fn pull_element(&mut self) {
        self.count -= 1;
    }

    pub fn observer_count(&self) -> usize {
        self.controls.len()
    }
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for Stock {
    fn register(&mut self, control: SharedControl) {
        debug!(control = control.borrow().name(), "Registered");
        self.controls.push(control);
    }

    fn unregister(&mut self, control: &SharedControl) -> bool {
        let position = self
            .controls
            .iter()
            .position(|c| std::ptr::addr_eq(Rc::as_ptr(c), Rc::as_ptr(control)));
        match position {
            Some(index) => {
                let removed = self.controls.remove(index);
                debug!(control = removed.borrow().name(), "Unregistered");
                true
            }
            None => false,
        }
    }

    fn send_notification(&self) {
        let value = self.count.to_string();
        debug!(count = self.count, observers = self.controls.len(), "Notifying");
        for control in &self.controls {
            control.borrow_mut().on_action(&value);
        }
    }
}

pub fn display(control: &dyn Control, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}: {}", control.name(), control.text())?;
    Ok(())
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let l1 = Rc::new(RefCell::new(Label::new("l1")));
    let l2 = Rc::new(RefCell::new(Label::new("l2")));

    let mut stock = Stock::new();
    stock.register(l1.clone());
    stock.register(l2.clone());

    stock.send_notification();
    display(&*l1.borrow(), out)?;
    display(&*l2.borrow(), out)?;

    writeln!(out, "\n----------------\n")?;

    stock.pull_element();

    stock.send_notification();
    display(&*l1.borrow(), out)?;
    display(&*l2.borrow(), out)?;

    stock.pull_element();

    writeln!(out, "\n----------------\n")?;

    stock.send_notification();
    display(&*l1.borrow(), out)?;
    display(&*l2.borrow(), out)?;
    Ok(())
}
