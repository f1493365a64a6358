//! # State
//!
//! A [`CarContext`] delegates every pedal and steering input to its current
//! [`CarState`]. Each state decides whether the input moves the car into another state
//! and what the driver sees. The context swaps the whole state object on transition.
//!
//! | state   | gas     | brake   | turn    |
//! |---------|---------|---------|---------|
//! | Stopped | Going   | stay    | stay    |
//! | Going   | stay    | Stopped | Turning |
//! | Turning | Going   | Stopped | stay    |
//!
//! Inputs that do not apply (turning a stopped car) only print a message.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// What a state decided for one input.
pub struct Transition {
    next: Option<Box<dyn CarState>>,
    message: &'static str,
}

impl Transition {
    fn to(next: impl CarState + 'static, message: &'static str) -> Self {
        Self {
            next: Some(Box::new(next)),
            message,
        }
    }

    fn stay(message: &'static str) -> Self {
        Self { next: None, message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn changes_state(&self) -> bool {
        self.next.is_some()
    }
}

pub trait CarState: fmt::Debug {
    fn name(&self) -> &'static str;

    fn gas(&self) -> Transition;

    fn brake(&self) -> Transition;

    fn turn(&self) -> Transition;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoppedState;

impl CarState for StoppedState {
    fn name(&self) -> &'static str {
        "Stopped"
    }

    fn gas(&self) -> Transition {
        Transition::to(GoingState, "Car starts moving.")
    }

    fn brake(&self) -> Transition {
        Transition::stay("Car stopped.")
    }

    fn turn(&self) -> Transition {
        Transition::stay("Car can't turn while not moving.")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoingState;

impl CarState for GoingState {
    fn name(&self) -> &'static str {
        "Going"
    }

    fn gas(&self) -> Transition {
        Transition::stay("Car is speeding.")
    }

    fn brake(&self) -> Transition {
        Transition::to(StoppedState, "Car slowing down.")
    }

    fn turn(&self) -> Transition {
        Transition::to(TurningState, "Car is changing direction.")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TurningState;

impl CarState for TurningState {
    fn name(&self) -> &'static str {
        "Turning"
    }

    fn gas(&self) -> Transition {
        Transition::to(GoingState, "Car started drifting!")
    }

    fn brake(&self) -> Transition {
        Transition::to(StoppedState, "Car slowing down.")
    }

    fn turn(&self) -> Transition {
        Transition::stay("Car going straight again.")
    }
}

#[derive(Debug)]
pub struct CarContext {
    state: Box<dyn CarState>,
}

impl CarContext {
    /// Starts the engine. The car begins in [`StoppedState`].
    pub fn start(out: &mut dyn Write) -> Result<Self> {
        writeln!(out, "Started car's engine...")?;
        Ok(Self {
            state: Box::new(StoppedState),
        })
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn accelerate(&mut self, out: &mut dyn Write) -> Result<()> {
        let transition = self.state.gas();
        self.apply(transition, out)
    }

    pub fn decelerate(&mut self, out: &mut dyn Write) -> Result<()> {
        let transition = self.state.brake();
        self.apply(transition, out)
    }

    pub fn steer(&mut self, out: &mut dyn Write) -> Result<()> {
        let transition = self.state.turn();
        self.apply(transition, out)
    }

    fn apply(&mut self, transition: Transition, out: &mut dyn Write) -> Result<()> {
        if let Some(next) = transition.next {
            debug!(from = self.state.name(), to = next.name(), "Transition");
            self.state = next;
        }
        writeln!(out, "{}", transition.message)?;
        Ok(())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut car = CarContext::start(out)?;
    car.accelerate(out)?;
    car.accelerate(out)?;
    car.steer(out)?;
    car.accelerate(out)?;
    car.decelerate(out)?;
    car.accelerate(out)?;
    car.decelerate(out)?;
    car.steer(out)?;
    car.decelerate(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    enum Input {
        Gas,
        Brake,
        Turn,
    }

    fn drive(inputs: &[Input]) -> (CarContext, String) {
        let mut out = Vec::new();
        let mut car = CarContext::start(&mut out).unwrap();
        for input in inputs {
            match input {
                Input::Gas => car.accelerate(&mut out).unwrap(),
                Input::Brake => car.decelerate(&mut out).unwrap(),
                Input::Turn => car.steer(&mut out).unwrap(),
            }
        }
        (car, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_car_starts_stopped() {
        let (car, transcript) = drive(&[]);
        assert_eq!(car.state_name(), "Stopped");
        assert_eq!(transcript, "Started car's engine...\n");
    }

    #[test]
    fn test_transition_table() {
        use Input::*;
        let cases = vec![
            (vec![Gas], "Going", "Car starts moving."),
            (vec![Brake], "Stopped", "Car stopped."),
            (vec![Turn], "Stopped", "Car can't turn while not moving."),
            (vec![Gas, Gas], "Going", "Car is speeding."),
            (vec![Gas, Brake], "Stopped", "Car slowing down."),
            (vec![Gas, Turn], "Turning", "Car is changing direction."),
            (vec![Gas, Turn, Gas], "Going", "Car started drifting!"),
            (vec![Gas, Turn, Brake], "Stopped", "Car slowing down."),
            (vec![Gas, Turn, Turn], "Turning", "Car going straight again."),
        ];
        for (inputs, state, last_line) in cases {
            let (car, transcript) = drive(&inputs);
            assert_eq!(car.state_name(), state);
            assert_eq!(transcript.lines().last(), Some(last_line));
        }
    }

    #[test]
    fn test_invalid_inputs_do_not_change_state() {
        assert!(!StoppedState.turn().changes_state());
        assert!(!StoppedState.brake().changes_state());
        assert!(!GoingState.gas().changes_state());
        assert!(!TurningState.turn().changes_state());
    }
}
