//! Behavioral patterns: how objects hand work to each other.
//!
//! Every submodule exposes a `demo` function that writes its fixed transcript to the
//! sink it is given. The types in each module can also be used on their own.

pub mod chain_of_responsibility;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;
