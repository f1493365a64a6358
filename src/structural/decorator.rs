//! # Decorator
//!
//! Decorators wrap any [`Tab`] (including another decorator) and add behaviour
//! around it without changing the wrapped type. Wrapping also retitles the tab.

use std::io::Write;

use crate::error::Result;

const DIVIDER: &str = "---------------------------------";

pub trait Tab {
    fn title(&self) -> &str;

    fn set_title(&mut self, title: String);

    fn apply(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginTab {
    title: String,
}

impl LoginTab {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Tab for LoginTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} titled login lab clicked.", self.title)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreTab {
    title: String,
}

impl ExploreTab {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Tab for ExploreTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} titled explore tab clicked.", self.title)?;
        Ok(())
    }
}

/// Adds scroll animations.
#[derive(Debug, Clone)]
pub struct AnimationsDecorator<T> {
    tab: T,
}

impl<T: Tab> AnimationsDecorator<T> {
    pub fn new(mut tab: T, title: impl Into<String>) -> Self {
        tab.set_title(title.into());
        Self { tab }
    }

    pub fn into_inner(self) -> T {
        self.tab
    }

    pub fn scroll_by(&self, animation: &str, out: &mut dyn Write) -> Result<()> {
        self.apply(out)?;
        writeln!(out, "{} titled tab now has {} animation.", self.tab.title(), animation)?;
        writeln!(out, "{DIVIDER}")?;
        Ok(())
    }
}

impl<T: Tab> Tab for AnimationsDecorator<T> {
    fn title(&self) -> &str {
        self.tab.title()
    }

    fn set_title(&mut self, title: String) {
        self.tab.set_title(title);
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        self.tab.apply(out)
    }
}

/// Adds themes.
#[derive(Debug, Clone)]
pub struct ThemeDecorator<T> {
    tab: T,
}

impl<T: Tab> ThemeDecorator<T> {
    pub fn new(mut tab: T, title: impl Into<String>) -> Self {
        tab.set_title(title.into());
        Self { tab }
    }

    pub fn into_inner(self) -> T {
        self.tab
    }

    pub fn set_theme(&self, theme: &str, out: &mut dyn Write) -> Result<()> {
        self.apply(out)?;
        writeln!(out, "{} theme applied to {} titled tab.", theme, self.tab.title())?;
        writeln!(out, "{DIVIDER}")?;
        Ok(())
    }
}

impl<T: Tab> Tab for ThemeDecorator<T> {
    fn title(&self) -> &str {
        self.tab.title()
    }

    fn set_title(&mut self, title: String) {
        self.tab.set_title(title);
    }

    fn apply(&self, out: &mut dyn Write) -> Result<()> {
        self.tab.apply(out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let email = LoginTab::new("Email");
    let inbox = ExploreTab::new("Inbox");
    let spam = ExploreTab::new("Spam");

    let animated_inbox = AnimationsDecorator::new(inbox, "Inbox");
    animated_inbox.scroll_by("Fading", out)?;

    ThemeDecorator::new(email, "Email").set_theme("Dark", out)?;
    ThemeDecorator::new(spam, "Spam").set_theme("Light", out)?;

    // The inbox keeps its animations and gains a theme on top.
    ThemeDecorator::new(animated_inbox, "Inbox").set_theme("Default", out)?;
    Ok(())
}
