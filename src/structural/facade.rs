//! # Facade
//!
//! [`TvRemote`] is the single front for four subsystems. Callers press buttons on the
//! remote and never touch power, channel, menu or volume directly.

use std::io::Write;
use std::sync::OnceLock;

use crate::error::Result;

#[derive(Debug, Default)]
struct PowerSubsystem;

impl PowerSubsystem {
    fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Power::On")?;
        Ok(())
    }

    fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Power::Off")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ChannelSubsystem;

impl ChannelSubsystem {
    fn next(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Channel::Next")?;
        Ok(())
    }

    fn previous(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Channel::Previous")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MenuSubsystem;

impl MenuSubsystem {
    fn open(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Menu::Open")?;
        Ok(())
    }

    fn close(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Menu::Close")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct VolumeSubsystem;

impl VolumeSubsystem {
    fn up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Volume::Up")?;
        Ok(())
    }

    fn down(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Volume::Down")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TvRemote {
    power: PowerSubsystem,
    channel: ChannelSubsystem,
    menu: MenuSubsystem,
    volume: VolumeSubsystem,
}

impl TvRemote {
    /// The shared remote.
    pub fn current() -> &'static TvRemote {
        static REMOTE: OnceLock<TvRemote> = OnceLock::new();
        REMOTE.get_or_init(TvRemote::default)
    }

    pub fn start_tv(&self, out: &mut dyn Write) -> Result<()> {
        self.power.on(out)
    }

    pub fn close_tv(&self, out: &mut dyn Write) -> Result<()> {
        self.power.off(out)
    }

    pub fn next_channel(&self, out: &mut dyn Write) -> Result<()> {
        self.channel.next(out)
    }

    pub fn previous_channel(&self, out: &mut dyn Write) -> Result<()> {
        self.channel.previous(out)
    }

    pub fn open_menu(&self, out: &mut dyn Write) -> Result<()> {
        self.menu.open(out)
    }

    pub fn close_menu(&self, out: &mut dyn Write) -> Result<()> {
        self.menu.close(out)
    }

    pub fn volume_up(&self, out: &mut dyn Write) -> Result<()> {
        self.volume.up(out)
    }

    pub fn volume_down(&self, out: &mut dyn Write) -> Result<()> {
        self.volume.down(out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    TvRemote::current().start_tv(out)?;
    TvRemote::current().open_menu(out)?;
    TvRemote::current().next_channel(out)?;
    TvRemote::current().next_channel(out)?;
    TvRemote::current().close_menu(out)?;
    TvRemote::current().volume_down(out)?;
    TvRemote::current().volume_down(out)?;
    TvRemote::current().volume_down(out)?;
    TvRemote::current().close_tv(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_shared() {
        assert!(std::ptr::eq(TvRemote::current(), TvRemote::current()));
    }

    #[test]
    fn test_buttons_reach_subsystems() {
        let remote = TvRemote::default();
        let mut out = Vec::new();
        remote.previous_channel(&mut out).unwrap();
        remote.volume_up(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Channel::Previous\nVolume::Up\n");
    }
}
