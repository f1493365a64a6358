//! # Prototype
//!
//! New databases start as copies of a prototype that already carries the system
//! tables. `Clone` is the copy operation. A clone owns its own name and table list, so
//! customising it never touches the prototype.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub const SYSTEM_TABLES: [&str; 3] = ["sysusers", "sysindexes", "sysfiles"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    name: String,
    tables: Vec<String>,
}

impl Database {
    /// The prototype: named `Model`, holding the system tables.
    pub fn model() -> Self {
        Self {
            name: "Model".to_string(),
            tables: SYSTEM_TABLES.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn add_table(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(database = %self.name, table = %name, "Table added");
        self.tables.push(name);
    }

    pub fn list_tables(&self, out: &mut dyn Write) -> Result<()> {
        for table in &self.tables {
            writeln!(out, "{table}")?;
        }
        Ok(())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::model()
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let prototype = Database::model();

    let mut stock_trace = prototype.clone();
    stock_trace.set_name("StockTrace");
    stock_trace.add_table("Stocks");
    writeln!(out, "{}", stock_trace.name())?;
    stock_trace.list_tables(out)?;

    writeln!(out, "-----------------")?;

    let mut crm = prototype.clone();
    crm.set_name("CRM");
    crm.add_table("Customers");
    writeln!(out, "{}", crm.name())?;
    crm.list_tables(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_starts_equal_to_prototype() {
        let prototype = Database::model();
        assert_eq!(prototype.clone(), prototype);
        assert_eq!(prototype.name(), "Model");
        assert_eq!(prototype.tables(), SYSTEM_TABLES);
    }

    #[test]
    fn test_customising_clone_leaves_prototype_untouched() {
        let prototype = Database::model();
        let mut copy = prototype.clone();
        copy.set_name("CRM");
        copy.add_table("Customers");

        assert_eq!(prototype, Database::model());
        assert_eq!(copy.tables().len(), 4);
    }

    #[test]
    fn test_clones_are_independent_of_each_other() {
        let prototype = Database::model();
        let mut first = prototype.clone();
        let second = prototype.clone();
        first.add_table("Stocks");
        assert_eq!(second.tables().len(), 3);
    }
}
