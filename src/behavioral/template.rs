//! # Template Method
//!
//! [`PaymentHelper::create_invoice`] fixes the invoice steps: scan the barcode, then
//! take payment. Implementors only override the `pay` step.

use std::io::Write;

use crate::error::Result;

pub trait PaymentHelper {
    /// The template method.
    fn create_invoice(&self, out: &mut dyn Write) -> Result<()> {
        scan_barcode(out)?;
        self.pay(out)
    }

    /// The primitive step. Does nothing unless overridden.
    fn pay(&self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}

fn scan_barcode(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Scanned barcode of the product.")?;
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Cash;

impl PaymentHelper for Cash {
    fn pay(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid with cash.")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCard;

impl PaymentHelper for CreditCard {
    fn pay(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid with credit card.")?;
        Ok(())
    }
}

pub fn invoice(helper: &dyn PaymentHelper, out: &mut dyn Write) -> Result<()> {
    helper.create_invoice(out)
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    invoice(&Cash, out)?;
    writeln!(out, "-----------------------------------")?;
    invoice(&CreditCard, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unpaid;

    impl PaymentHelper for Unpaid {}

    #[test]
    fn test_default_pay_step_only_scans() {
        let mut out = Vec::new();
        invoice(&Unpaid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Scanned barcode of the product.\n");
    }

    #[test]
    fn test_scan_always_precedes_payment() {
        let mut out = Vec::new();
        invoice(&CreditCard, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Scanned barcode of the product.\nPaid with credit card.\n"
        );
    }
}
