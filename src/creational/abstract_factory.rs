//! # Abstract Factory
//!
//! Callers ask [`get_factory`] for a database family by name and then only talk to the
//! abstract products ([`Connection`], [`Command`]). They never learn which concrete
//! family produced them.
//!
//! The three families share the same shape, so they are stamped out by
//! `database_family!`. Each invocation declares `<Prefix>Factory`,
//! `<Prefix>Connection` and `<Prefix>Command`.

use std::io::Write;

use paste::paste;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Database names accepted by [`get_factory`].
pub const DATABASES: [&str; 3] = ["SQLite", "Firebase", "Room"];

pub trait DatabaseFactory {
    fn name(&self) -> &'static str;

    fn create_connection(&self) -> Box<dyn Connection>;

    fn create_command(&self) -> Box<dyn Command>;
}

pub trait Connection {
    fn connect(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Command {
    fn query(&self) -> &str;

    fn set_query(&mut self, query: &str);

    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

macro_rules! database_family {
    ($prefix:ident, $label:literal) => {
        paste! {
            #[doc = concat!("Creates the ", $label, " product family.")]
            #[derive(Debug, Default, Clone, Copy)]
            pub struct [<$prefix Factory>];

            #[derive(Debug, Default, Clone, Copy)]
            pub struct [<$prefix Connection>];

            #[derive(Debug, Default, Clone)]
            pub struct [<$prefix Command>] {
                query: String,
            }

            impl DatabaseFactory for [<$prefix Factory>] {
                fn name(&self) -> &'static str {
                    $label
                }

                fn create_connection(&self) -> Box<dyn Connection> {
                    Box::new([<$prefix Connection>])
                }

                fn create_command(&self) -> Box<dyn Command> {
                    Box::new([<$prefix Command>]::default())
                }
            }

            impl Connection for [<$prefix Connection>] {
                fn connect(&self, out: &mut dyn Write) -> Result<()> {
                    writeln!(out, concat!("Connected to ", $label, "!"))?;
                    Ok(())
                }
            }

            impl Command for [<$prefix Command>] {
                fn query(&self) -> &str {
                    &self.query
                }

                fn set_query(&mut self, query: &str) {
                    self.query = query.to_string();
                }

                fn execute(&self, out: &mut dyn Write) -> Result<()> {
                    debug!(database = $label, query = %self.query, "Execute");
                    writeln!(out, concat!($label, " ran."))?;
                    Ok(())
                }
            }
        }
    };
}

database_family!(Sqlite, "SQLite");
database_family!(Firebase, "Firebase");
database_family!(Room, "Room");

/// Looks up a factory by its exact database name.
///
/// # Errors
/// [`CatalogError::UnknownDatabase`] for any name outside [`DATABASES`].
pub fn get_factory(database_name: &str) -> Result<Box<dyn DatabaseFactory>> {
    let factory: Box<dyn DatabaseFactory> = match database_name {
        "SQLite" => Box::new(SqliteFactory),
        "Firebase" => Box::new(FirebaseFactory),
        "Room" => Box::new(RoomFactory),
        _ => {
            warn!(database = database_name, "Unknown database");
            return Err(CatalogError::UnknownDatabase(database_name.to_string()));
        }
    };
    debug!(database = factory.name(), "Factory selected");
    Ok(factory)
}

/// Connects and runs one query on each named database, separated by a divider.
/// Stops at the first unknown name.
pub fn run_session(database_names: &[&str], out: &mut dyn Write) -> Result<()> {
    for (index, name) in database_names.iter().enumerate() {
        if index > 0 {
            writeln!(out, "\n--------------------\n")?;
        }
        let factory = get_factory(name)?;

        let connection = factory.create_connection();
        connection.connect(out)?;

        let mut command = factory.create_command();
        command.set_query("Select * from table");
        command.execute(out)?;
    }
    Ok(())
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    match run_session(&DATABASES, out) {
        Err(err @ CatalogError::UnknownDatabase(_)) => {
            writeln!(out, "{err}")?;
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_name_selects_its_family() {
        for name in DATABASES {
            assert_eq!(get_factory(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(matches!(
            get_factory("sqlite"),
            Err(CatalogError::UnknownDatabase(name)) if name == "sqlite"
        ));
    }

    #[test]
    fn test_unknown_database_message() {
        let err = get_factory("Oracle").err().unwrap();
        assert_eq!(err.to_string(), "ERROR! Database name not recognized.");
    }

    #[test]
    fn test_command_keeps_its_query() {
        let mut command = get_factory("Room").unwrap().create_command();
        assert_eq!(command.query(), "");
        command.set_query("Select 1");
        assert_eq!(command.query(), "Select 1");
    }

    #[test]
    fn test_session_stops_at_unknown_database() {
        let mut out = Vec::new();
        let result = run_session(&["SQLite", "Oracle", "Room"], &mut out);
        assert!(matches!(result, Err(CatalogError::UnknownDatabase(_))));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Connected to SQLite!\nSQLite ran.\n\n--------------------\n\n"
        );
    }
}
