//! # Singleton
//!
//! [`Sample::instance`] lazily creates the one process-wide `Sample` and hands out
//! `&'static` references to it. The data cell is atomic so that every handle can
//! mutate it and every other handle sees the change.

use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::OnceLock;

use tracing::debug;

use crate::error::Result;

#[derive(Debug)]
pub struct Sample {
    data: AtomicI32,
}

impl Sample {
    pub fn instance() -> &'static Sample {
        static INSTANCE: OnceLock<Sample> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("Sample created");
            Sample {
                data: AtomicI32::new(0),
            }
        })
    }

    pub fn data(&self) -> i32 {
        self.data.load(Ordering::SeqCst)
    }

    pub fn set_data(&self, value: i32) {
        self.data.store(value, Ordering::SeqCst);
    }
}

fn print_all(handles: [&Sample; 3], out: &mut dyn Write) -> Result<()> {
    for (index, handle) in handles.iter().enumerate() {
        writeln!(out, "object {} data: {}", index + 1, handle.data())?;
    }
    Ok(())
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let o1 = Sample::instance();
    let o2 = Sample::instance();
    let o3 = Sample::instance();

    o1.set_data(1234);
    print_all([o1, o2, o3], out)?;

    writeln!(out, "-------------------------")?;

    o2.set_data(4321);
    print_all([o1, o2, o3], out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_every_handle_is_the_same_instance() {
        assert!(std::ptr::eq(Sample::instance(), Sample::instance()));
    }

    #[test]
    #[serial(singleton)]
    fn test_mutation_is_visible_through_other_handles() {
        let first = Sample::instance();
        let second = Sample::instance();
        first.set_data(7);
        assert_eq!(second.data(), 7);
        second.set_data(-7);
        assert_eq!(first.data(), -7);
    }
}
