//! # Visitor
//!
//! Credit checks are added as visitors instead of methods on the customer types.
//! Double dispatch replaces runtime type tests: a customer's `accept` calls the
//! visitor method for its own concrete type.

use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalCustomer {
    pub name: String,
    pub surname: String,
}

impl PersonalCustomer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseCustomer {
    pub name: String,
    pub surname: String,
    pub company: String,
}

impl EnterpriseCustomer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            company: company.into(),
        }
    }
}

pub trait Visitor {
    fn visit_personal(&self, customer: &PersonalCustomer, out: &mut dyn Write) -> Result<()>;

    fn visit_enterprise(&self, customer: &EnterpriseCustomer, out: &mut dyn Write) -> Result<()>;
}

pub trait Customer {
    fn accept(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()>;
}

impl Customer for PersonalCustomer {
    fn accept(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_personal(self, out)
    }
}

impl Customer for EnterpriseCustomer {
    fn accept(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_enterprise(self, out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MortgageVisitor;

impl Visitor for MortgageVisitor {
    fn visit_personal(&self, c: &PersonalCustomer, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Personal customer: {} {} can do mortgage.", c.name, c.surname)?;
        Ok(())
    }

    fn visit_enterprise(&self, c: &EnterpriseCustomer, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Enterprise customer: {} {} from {} cannot do mortgage.",
            c.name, c.surname, c.company
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeasingVisitor;

impl Visitor for LeasingVisitor {
    fn visit_personal(&self, c: &PersonalCustomer, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Personal customer: {} {} cannot use leasing.", c.name, c.surname)?;
        Ok(())
    }

    fn visit_enterprise(&self, c: &EnterpriseCustomer, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Enterprise customer: {} {} from {} can use leasing.",
            c.name, c.surname, c.company
        )?;
        Ok(())
    }
}

/// Entry point for credit checks.
#[derive(Debug)]
pub struct UseCredit;

impl UseCredit {
    pub fn mortgage(customer: &dyn Customer, out: &mut dyn Write) -> Result<()> {
        customer.accept(&MortgageVisitor, out)
    }

    pub fn leasing(customer: &dyn Customer, out: &mut dyn Write) -> Result<()> {
        customer.accept(&LeasingVisitor, out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let personal = PersonalCustomer::new("Laurence", "Barnes");
    let enterprise = EnterpriseCustomer::new("Michael", "Sykes", "Raptor inc.");

    UseCredit::leasing(&personal, out)?;
    UseCredit::leasing(&enterprise, out)?;

    UseCredit::mortgage(&personal, out)?;
    UseCredit::mortgage(&enterprise, out)?;
    Ok(())
}
