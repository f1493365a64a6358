//! # Iterator
//!
//! Two departments keep their employees in different containers: HR in a fixed-size
//! array, PR in a growable `Vec`. Each exposes its own cursor type through the shared
//! [`Iterable`] trait, so the printing code never learns how the data is stored.

use std::fmt;
use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    title: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.title)
    }
}

/// A collection that hands out its own iterator type.
pub trait Iterable {
    type Iter<'a>: Iterator<Item = &'a Employee>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;
}

/// Cursor over a fixed-size array.
#[derive(Debug)]
pub struct ArrayIterator<'a, const N: usize> {
    employees: &'a [Employee; N],
    position: usize,
}

impl<'a, const N: usize> Iterator for ArrayIterator<'a, N> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let employee = self.employees.get(self.position)?;
        self.position += 1;
        Some(employee)
    }
}

/// Cursor over a growable list.
#[derive(Debug)]
pub struct ListIterator<'a> {
    employees: &'a Vec<Employee>,
    position: usize,
}

impl<'a> Iterator for ListIterator<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let employee = self.employees.get(self.position)?;
        self.position += 1;
        Some(employee)
    }
}

/// Human Resources: three employees stored in an array.
#[derive(Debug, Clone)]
pub struct HrDepartment {
    employees: [Employee; 3],
}

impl HrDepartment {
    pub fn new() -> Self {
        Self {
            employees: [
                Employee::new("John Doe", "Instructor"),
                Employee::new("Jack Miller", "Director"),
                Employee::new("Ellie Williams", "Recruiter"),
            ],
        }
    }
}

impl Default for HrDepartment {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterable for HrDepartment {
    type Iter<'a> = ArrayIterator<'a, 3>;

    fn iter(&self) -> Self::Iter<'_> {
        ArrayIterator {
            employees: &self.employees,
            position: 0,
        }
    }
}

/// Public Relations: employees stored in a list that can grow.
#[derive(Debug, Clone)]
pub struct PrDepartment {
    employees: Vec<Employee>,
}

impl PrDepartment {
    pub fn new() -> Self {
        let mut department = Self {
            employees: Vec::new(),
        };
        department.hire(Employee::new("Delsin Rowe", "Intern"));
        department.hire(Employee::new("Abigail Walker", "Copywriter"));
        department.hire(Employee::new("Eugene Sims", "Social Media Specialist"));
        department
    }

    pub fn hire(&mut self, employee: Employee) {
        self.employees.push(employee);
    }
}

impl Default for PrDepartment {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterable for PrDepartment {
    type Iter<'a> = ListIterator<'a>;

    fn iter(&self) -> Self::Iter<'_> {
        ListIterator {
            employees: &self.employees,
            position: 0,
        }
    }
}

/// Prints one line per employee, whatever the department's storage.
pub fn print_employees(department: &impl Iterable, out: &mut dyn Write) -> Result<()> {
    for employee in department.iter() {
        writeln!(out, "{employee}")?;
    }
    Ok(())
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    print_employees(&HrDepartment::new(), out)?;
    writeln!(out, "\n----------------------\n")?;
    print_employees(&PrDepartment::new(), out)
}
