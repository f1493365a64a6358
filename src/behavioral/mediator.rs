//! # Mediator
//!
//! Participants never hold references to each other. They join a [`Room`] and the
//! room routes direct and broadcast messages between them.

use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;

/// A colleague that can receive messages through a room.
pub trait Participant {
    fn nickname(&self) -> &str;

    fn receive_message(&self, sender: &dyn Participant, message: &str, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicParticipant {
    nickname: String,
}

impl BasicParticipant {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

impl Participant for BasicParticipant {
    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn receive_message(&self, sender: &dyn Participant, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} -> {}: {}", sender.nickname(), self.nickname, message)?;
        Ok(())
    }
}

/// Same as a basic participant, but tags every received line with `(Admin)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    nickname: String,
}

impl Admin {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

impl Participant for Admin {
    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn receive_message(&self, sender: &dyn Participant, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "(Admin) {} -> {}: {}", sender.nickname(), self.nickname, message)?;
        Ok(())
    }
}

/// The mediator contract.
pub trait Room {
    /// Adds `participant` unless that same participant already joined. Returns whether it was added.
    fn add_participant(&mut self, participant: Rc<dyn Participant>) -> bool;

    fn send_message(
        &self,
        sender: &dyn Participant,
        receiver: &dyn Participant,
        message: &str,
        out: &mut dyn Write,
    ) -> Result<()>;

    /// Delivers `message` to every participant in join order, the sender included.
    fn send_broadcast_message(&self, sender: &dyn Participant, message: &str, out: &mut dyn Write) -> Result<()>;
}

#[derive(Default)]
pub struct MeetingRoom {
    participants: Vec<Rc<dyn Participant>>,
}

impl MeetingRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

// Identity, not value equality: two participants may share a nickname.
fn same_participant(a: &Rc<dyn Participant>, b: &Rc<dyn Participant>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl Room for MeetingRoom {
    fn add_participant(&mut self, participant: Rc<dyn Participant>) -> bool {
        if self.participants.iter().any(|p| same_participant(p, &participant)) {
            debug!(nickname = participant.nickname(), "Already in room");
            return false;
        }
        debug!(nickname = participant.nickname(), size = self.participants.len() + 1, "Joined room");
        self.participants.push(participant);
        true
    }

    fn send_message(
        &self,
        sender: &dyn Participant,
        receiver: &dyn Participant,
        message: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        receiver.receive_message(sender, message, out)
    }

    fn send_broadcast_message(&self, sender: &dyn Participant, message: &str, out: &mut dyn Write) -> Result<()> {
        for participant in &self.participants {
            participant.receive_message(sender, message, out)?;
        }
        Ok(())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let cal: Rc<dyn Participant> = Rc::new(Admin::new("Cal"));
    let cere: Rc<dyn Participant> = Rc::new(BasicParticipant::new("Cere"));
    let jaro: Rc<dyn Participant> = Rc::new(BasicParticipant::new("Jaro"));
    let greez: Rc<dyn Participant> = Rc::new(BasicParticipant::new("Greez"));
    let eno: Rc<dyn Participant> = Rc::new(BasicParticipant::new("Eno"));

    let mut room = MeetingRoom::new();
    for participant in [&cal, &cere, &jaro, &greez, &eno] {
        room.add_participant(Rc::clone(participant));
    }

    room.send_broadcast_message(cal.as_ref(), "Welcome to the meeting!", out)?;

    writeln!(out, "-------------------------------")?;

    room.send_message(eno.as_ref(), jaro.as_ref(), "Android is so cool.", out)?;
    room.send_message(jaro.as_ref(), eno.as_ref(), "Hmm ok...", out)?;

    writeln!(out, "-------------------------------")?;

    room.send_message(greez.as_ref(), cere.as_ref(), "Iphones are expensive.", out)?;
    room.send_message(cere.as_ref(), greez.as_ref(), "Definitely!", out)?;
    Ok(())
}
