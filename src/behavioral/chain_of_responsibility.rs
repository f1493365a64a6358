//! # Chain of Responsibility
//!
//! A caller hands a request to the head of a chain without knowing which link will
//! handle it. Each [`Operator`] either answers the call itself or forwards it to the
//! next operator it owns. The [`CallCenter`] owns the head of the chain and a
//! [`Client`] only ever talks to the call centre.
//!
//! The chain is an owned singly linked list (`Option<Box<Operator>>`), so a call walks
//! it front to back and ends with `Call is on hold...` when nobody is available.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// Handler in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    name: String,
    available: bool,
    next: Option<Box<Operator>>,
}

impl Operator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: false,
            next: None,
        }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn next_operator(&self) -> Option<&Operator> {
        self.next.as_deref()
    }

    /// Links `next` behind this operator, replacing any previous successor.
    pub fn set_next_operator(&mut self, next: Operator) {
        self.next = Some(Box::new(next));
    }

    /// Answers if available, otherwise forwards down the chain.
    pub fn answer_call(&self, out: &mut dyn Write) -> Result<()> {
        if self.available {
            writeln!(out, "{} answered call.", self.name)?;
        } else if let Some(next) = &self.next {
            debug!(operator = %self.name, next = %next.name, "Busy, forwarding call");
            next.answer_call(out)?;
        } else {
            debug!(operator = %self.name, "End of chain");
            writeln!(out, "Call is on hold...")?;
        }
        Ok(())
    }

    /// Returns the operator that would answer a call given to this link.
    pub fn find_available(&self) -> Option<&Operator> {
        let mut current = Some(self);
        while let Some(operator) = current {
            if operator.available {
                return Some(operator);
            }
            current = operator.next_operator();
        }
        None
    }
}

/// Owns the chain of operators; calls always start at the head.
#[derive(Debug, Clone, PartialEq)]
pub struct CallCenter {
    head: Option<Operator>,
}

impl CallCenter {
    /// Links `operators` in the given order.
    pub fn new(operators: Vec<Operator>) -> Self {
        let head = operators.into_iter().rev().fold(None, |next, mut operator| {
            if let Some(next) = next {
                operator.set_next_operator(next);
            }
            Some(operator)
        });
        Self { head }
    }

    pub fn head(&self) -> Option<&Operator> {
        self.head.as_ref()
    }

    pub fn receive_call(&self, out: &mut dyn Write) -> Result<()> {
        match &self.head {
            Some(head) => head.answer_call(out),
            None => {
                writeln!(out, "Call is on hold...")?;
                Ok(())
            }
        }
    }
}

impl Default for CallCenter {
    /// Trevor, Michael, Franklin and Jimmy, with only Franklin available.
    fn default() -> Self {
        Self::new(vec![
            Operator::new("Trevor"),
            Operator::new("Michael"),
            Operator::new("Franklin").with_availability(true),
            Operator::new("Jimmy"),
        ])
    }
}

/// Knows the call centre, never the operators.
#[derive(Debug)]
pub struct Client;

impl Client {
    pub fn open_call(call_center: &CallCenter, out: &mut dyn Write) -> Result<()> {
        call_center.receive_call(out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    Client::open_call(&CallCenter::default(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(call_center: &CallCenter) -> String {
        let mut out = Vec::new();
        call_center.receive_call(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_chain_is_linked_in_order() {
        let call_center = CallCenter::default();
        let names: Vec<&str> = std::iter::successors(call_center.head(), |op| op.next_operator())
            .map(Operator::name)
            .collect();
        assert_eq!(names, vec!["Trevor", "Michael", "Franklin", "Jimmy"]);
    }

    #[test]
    fn test_first_available_operator_answers() {
        assert_eq!(transcript(&CallCenter::default()), "Franklin answered call.\n");
    }

    #[test]
    fn test_head_answers_when_available() {
        let call_center = CallCenter::new(vec![
            Operator::new("Trevor").with_availability(true),
            Operator::new("Michael").with_availability(true),
        ]);
        assert_eq!(transcript(&call_center), "Trevor answered call.\n");
    }

    #[test]
    fn test_call_on_hold_when_nobody_available() {
        let call_center = CallCenter::new(vec![Operator::new("Trevor"), Operator::new("Jimmy")]);
        assert_eq!(transcript(&call_center), "Call is on hold...\n");
        assert!(call_center.head().unwrap().find_available().is_none());
    }

    #[test]
    fn test_empty_call_center_puts_call_on_hold() {
        assert_eq!(transcript(&CallCenter::new(Vec::new())), "Call is on hold...\n");
    }
}
