//! # Composite
//!
//! A [`Soldier`] and a whole army are the same type: every soldier owns an ordered list
//! of subordinates, and operations work the same on a leaf or on a commander.
//! Ownership runs strictly from commander to subordinate, so a tree is assembled bottom
//! up and a removed subordinate is handed back to the caller.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

const DIVIDER: &str = "---------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soldier {
    name: String,
    rank: String,
    army: Vec<Soldier>,
}

impl Soldier {
    pub fn new(name: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            army: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    pub fn add(&mut self, soldier: Soldier) {
        debug!(commander = %self, soldier = %soldier, "Assigned");
        self.army.push(soldier);
    }

    /// Removes the first direct subordinate equal to `soldier`.
    pub fn remove(&mut self, soldier: &Soldier) -> Option<Soldier> {
        let index = self.army.iter().position(|s| s == soldier)?;
        debug!(commander = %self, soldier = %soldier, "Dismissed");
        Some(self.army.remove(index))
    }

    pub fn army(&self) -> &[Soldier] {
        &self.army
    }

    /// This soldier plus everyone under them.
    pub fn headcount(&self) -> usize {
        1 + self.army.iter().map(Soldier::headcount).sum::<usize>()
    }

    /// Depth-first, pre-order walk with each soldier's depth below `self`.
    pub fn walk(&self) -> Vec<(usize, &Soldier)> {
        let mut visited = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, soldier)) = stack.pop() {
            visited.push((depth, soldier));
            stack.extend(soldier.army.iter().rev().map(|s| (depth + 1, s)));
        }
        visited
    }
}

impl fmt::Display for Soldier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.name)
    }
}

/// General Jake Dunn's chain of command.
pub fn build_army() -> Soldier {
    let mut major1 = Soldier::new("Richard Morrison", "Major");
    major1.add(Soldier::new("Clearance Strictland", "Captain"));
    major1.add(Soldier::new("Edward Jones", "Captain"));

    let mut major2 = Soldier::new("Seaman Collins", "Major");
    major2.add(Soldier::new("David Rosenthal", "Captain"));
    major2.add(Soldier::new("Jacob Hargreave", "Captain"));

    let mut colonel = Soldier::new("Martin Hawker", "Colonel");
    colonel.add(major1);
    colonel.add(major2);

    let mut general = Soldier::new("Jake Dunn", "General");
    general.add(colonel);
    general
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let general = build_army();

    writeln!(out, "{general}")?;
    writeln!(out, "{DIVIDER}")?;

    for colonel in general.army() {
        writeln!(out, "{colonel}")?;
        writeln!(out, "{DIVIDER}")?;

        for major in colonel.army() {
            writeln!(out, "{major}")?;
            writeln!(out, "{DIVIDER}")?;

            // Every major reports the captains of the whole colonel's command.
            for captain in colonel.army().iter().flat_map(|m| m.army()) {
                writeln!(out, "{captain}")?;
            }

            writeln!(out, "{DIVIDER}")?;
        }
    }
    Ok(())
}
