//! # Factory Method
//!
//! Money can only be issued by a bank. [`UsDollar`] has no public constructor, so the
//! only way to get one is a [`Bank::print_money`] call on a bank whose associated
//! `Currency` is `UsDollar`.

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub trait Money: fmt::Debug {
    fn amount(&self) -> u32;

    fn currency_code(&self) -> &'static str;

    /// Amount followed by the currency code, e.g. `1000USD`.
    fn nominal_value(&self) -> String {
        format!("{}{}", self.amount(), self.currency_code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsDollar {
    nominal_value: u32,
}

impl Money for UsDollar {
    fn amount(&self) -> u32 {
        self.nominal_value
    }

    fn currency_code(&self) -> &'static str {
        "USD"
    }
}

impl fmt::Display for UsDollar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nominal_value())
    }
}

/// The creator. Each bank decides which currency its factory method produces.
pub trait Bank {
    type Currency: Money;

    fn print_money(&self, nominal_value: u32) -> Self::Currency;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UsCentralBank;

impl Bank for UsCentralBank {
    type Currency = UsDollar;

    fn print_money(&self, nominal_value: u32) -> UsDollar {
        debug!(nominal_value, "Printing USD");
        UsDollar { nominal_value }
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let bank = UsCentralBank;
    let usd = bank.print_money(1000);
    writeln!(out, "{}", usd.nominal_value())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue<B: Bank>(bank: &B, value: u32) -> String {
        bank.print_money(value).nominal_value()
    }

    #[test]
    fn test_bank_issues_its_own_currency() {
        let usd = UsCentralBank.print_money(20);
        assert_eq!(usd.amount(), 20);
        assert_eq!(usd.to_string(), "20USD");
    }

    #[test]
    fn test_callers_can_stay_generic_over_banks() {
        assert_eq!(issue(&UsCentralBank, 0), "0USD");
    }
}
