//! # Demo Catalog
//!
//! The registry that knows every demo by name and runs them.
//!
//! ## Key Types
//!
//! - [`Category`]: the Gang-of-Four grouping (behavioral, creational, structural).
//! - [`DemoEntry`]: one demo's catalogue name, display title, category and entry point.
//! - [`Catalog`]: ordered collection of entries with lookup and run helpers.
//!
//! Every demo shares the same entry point signature, [`DemoFn`]. A demo writes its
//! transcript to the sink it is handed and owns no state once it returns, so running
//! a demo twice prints the same thing twice.
//!
//! ## Running
//!
//! [`Catalog::run`] runs one demo by name. [`Catalog::run_all`] runs a list of entries and
//! frames each transcript with a banner:
//!
//! ```text
//! == Chain of Responsibility (behavioral) ==
//! Franklin answered call.
//!
//! ```
//!
//! Each run happens inside a `demo` tracing span carrying the `demo` and `category`
//! fields, so pattern-level `debug!` events are attributed to the demo that emitted them.

use std::fmt;
use std::io::Write;

use tracing::{info, info_span, warn};

use crate::error::{CatalogError, Result};
use crate::{behavioral, creational, structural};

/// Signature shared by every demo entry point.
pub type DemoFn = fn(&mut dyn Write) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy)]
pub struct DemoEntry {
    name: &'static str,
    title: &'static str,
    category: Category,
    run: DemoFn,
}

impl DemoEntry {
    pub const fn new(name: &'static str, title: &'static str, category: Category, run: DemoFn) -> Self {
        Self {
            name,
            title,
            category,
            run,
        }
    }

    /// Kebab-case catalogue name, e.g. `chain-of-responsibility`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Writes this demo's transcript to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        let span = info_span!("demo", demo = self.name, category = %self.category);
        let _guard = span.enter();
        info!("Demo started");
        (self.run)(out)?;
        info!("Demo finished");
        Ok(())
    }
}

impl fmt::Debug for DemoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoEntry")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

const ENTRIES: [DemoEntry; 20] = [
    DemoEntry::new(
        "chain-of-responsibility",
        "Chain of Responsibility",
        Category::Behavioral,
        behavioral::chain_of_responsibility::demo,
    ),
    DemoEntry::new("command", "Command", Category::Behavioral, behavioral::command::demo),
    DemoEntry::new("iterator", "Iterator", Category::Behavioral, behavioral::iterator::demo),
    DemoEntry::new("mediator", "Mediator", Category::Behavioral, behavioral::mediator::demo),
    DemoEntry::new("memento", "Memento", Category::Behavioral, behavioral::memento::demo),
    DemoEntry::new("observer", "Observer", Category::Behavioral, behavioral::observer::demo),
    DemoEntry::new("state", "State", Category::Behavioral, behavioral::state::demo),
    DemoEntry::new("strategy", "Strategy", Category::Behavioral, behavioral::strategy::demo),
    DemoEntry::new("template", "Template Method", Category::Behavioral, behavioral::template::demo),
    DemoEntry::new("visitor", "Visitor", Category::Behavioral, behavioral::visitor::demo),
    DemoEntry::new(
        "abstract-factory",
        "Abstract Factory",
        Category::Creational,
        creational::abstract_factory::demo,
    ),
    DemoEntry::new("builder", "Builder", Category::Creational, creational::builder::demo),
    DemoEntry::new(
        "factory-method",
        "Factory Method",
        Category::Creational,
        creational::factory_method::demo,
    ),
    DemoEntry::new("prototype", "Prototype", Category::Creational, creational::prototype::demo),
    DemoEntry::new("singleton", "Singleton", Category::Creational, creational::singleton::demo),
    DemoEntry::new("adapter", "Adapter", Category::Structural, structural::adapter::demo),
    DemoEntry::new("bridge", "Bridge", Category::Structural, structural::bridge::demo),
    DemoEntry::new("composite", "Composite", Category::Structural, structural::composite::demo),
    DemoEntry::new("decorator", "Decorator", Category::Structural, structural::decorator::demo),
    DemoEntry::new("facade", "Facade", Category::Structural, structural::facade::demo),
];

/// Every demo, in catalogue order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<DemoEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[DemoEntry] {
        &self.entries
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &DemoEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.category == category)
    }

    /// Case-insensitive lookup by catalogue name.
    ///
    /// # Errors
    /// [`CatalogError::UnknownDemo`] when no entry matches.
    pub fn find(&self, name: &str) -> Result<&DemoEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                warn!(demo = name, "Unknown demo");
                CatalogError::UnknownDemo(name.to_string())
            })
    }

    /// Resolves a CLI-style selection: the named demos in the order given (every demo when
    /// `names` is empty), then narrowed to `category` if one is set.
    ///
    /// # Errors
    /// [`CatalogError::UnknownDemo`] for the first name that matches nothing.
    pub fn select<S: AsRef<str>>(&self, names: &[S], category: Option<Category>) -> Result<Vec<&DemoEntry>> {
        let named: Vec<&DemoEntry> = if names.is_empty() {
            self.entries.iter().collect()
        } else {
            names
                .iter()
                .map(|name| self.find(name.as_ref()))
                .collect::<Result<_>>()?
        };
        Ok(named
            .into_iter()
            .filter(|entry| match category {
                Some(category) => entry.category == category,
                None => true,
            })
            .collect())
    }

    /// Writes `<name>\t<category>` for each entry.
    pub fn write_list<'a>(entries: impl IntoIterator<Item = &'a DemoEntry>, out: &mut dyn Write) -> Result<()> {
        for entry in entries {
            writeln!(out, "{}\t{}", entry.name, entry.category)?;
        }
        Ok(())
    }

    /// Runs a single demo without a banner.
    pub fn run(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        self.find(name)?.run(out)
    }

    /// Runs `entries` in order, each framed by a banner and a trailing blank line.
    pub fn run_all<'a>(entries: impl IntoIterator<Item = &'a DemoEntry>, out: &mut dyn Write) -> Result<()> {
        for entry in entries {
            writeln!(out, "== {} ({}) ==", entry.title, entry.category)?;
            entry.run(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_holds_every_pattern_once() {
        let catalog = Catalog::new();
        let names: HashSet<&str> = catalog.entries().iter().map(DemoEntry::name).collect();
        assert_eq!(names.len(), 20);
        assert_eq!(catalog.in_category(Category::Behavioral).count(), 10);
        assert_eq!(catalog.in_category(Category::Creational).count(), 5);
        assert_eq!(catalog.in_category(Category::Structural).count(), 5);
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = Catalog::new();
        assert_eq!(catalog.find("Abstract-Factory").unwrap().title(), "Abstract Factory");
    }

    #[test]
    fn test_find_unknown_demo() {
        let err = Catalog::new().find("flyweight").unwrap_err();
        assert!(matches!(&err, CatalogError::UnknownDemo(name) if name == "flyweight"));
        assert_eq!(err.to_string(), "Unknown demo: flyweight");
    }

    #[test]
    fn test_select_everything_by_default() {
        let catalog = Catalog::new();
        let selected = catalog.select::<&str>(&[], None).unwrap();
        assert_eq!(selected.len(), 20);
        assert_eq!(selected[0].name(), "chain-of-responsibility");
    }

    #[test]
    fn test_select_keeps_given_order_then_filters_by_category() {
        let catalog = Catalog::new();
        let names: Vec<&str> = catalog
            .select(&["Facade", "state", "builder", "adapter"], Some(Category::Structural))
            .unwrap()
            .into_iter()
            .map(DemoEntry::name)
            .collect();
        assert_eq!(names, vec!["facade", "adapter"]);
    }

    #[test]
    fn test_select_fails_on_unknown_name() {
        let err = Catalog::new().select(&["state", "flyweight"], None).unwrap_err();
        assert!(matches!(&err, CatalogError::UnknownDemo(name) if name == "flyweight"));
    }

    #[test]
    fn test_write_list_is_tab_separated() {
        let catalog = Catalog::new();
        let mut out = Vec::new();
        Catalog::write_list(catalog.in_category(Category::Creational), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "abstract-factory\tcreational\nbuilder\tcreational\nfactory-method\tcreational\n\
             prototype\tcreational\nsingleton\tcreational\n"
        );
    }

    #[test]
    fn test_run_writes_bare_transcript() {
        let mut out = Vec::new();
        Catalog::new().run("adapter", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "62\n");
    }

    #[test]
    fn test_run_all_frames_each_demo() {
        let catalog = Catalog::new();
        let selected = [catalog.find("adapter").unwrap(), catalog.find("factory-method").unwrap()];
        let mut out = Vec::new();
        Catalog::run_all(selected, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "== Adapter (structural) ==\n62\n\n== Factory Method (creational) ==\n1000USD\n\n"
        );
    }

    #[test]
    #[serial(singleton)]
    fn test_every_demo_runs() {
        let catalog = Catalog::new();
        let mut out = Vec::new();
        Catalog::run_all(catalog.entries(), &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        for entry in catalog.entries() {
            assert!(transcript.contains(&format!("== {} ({}) ==", entry.title(), entry.category())));
        }
    }
}
