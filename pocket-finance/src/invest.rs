//! Investment piggy bank: spare change from rounding each payment up.

use anyhow::{Result, bail};
use pocket_core::money::zero;
use pocket_core::round_money;
use pocket_core::time::month_key;
use pocket_core::Transaction;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Rounding denomination for the piggy bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundUpStep {
    Ten,
    Fifty,
    Hundred,
}

impl RoundUpStep {
    pub fn amount(&self) -> Decimal {
        match self {
            RoundUpStep::Ten => Decimal::from(10),
            RoundUpStep::Fifty => Decimal::from(50),
            RoundUpStep::Hundred => Decimal::from(100),
        }
    }
}

impl TryFrom<u32> for RoundUpStep {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            10 => Ok(RoundUpStep::Ten),
            50 => Ok(RoundUpStep::Fifty),
            100 => Ok(RoundUpStep::Hundred),
            other => bail!("unsupported rounding step {other}; expected 10, 50 or 100"),
        }
    }
}

impl FromStr for RoundUpStep {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid rounding step '{s}'"))?;
        Self::try_from(value)
    }
}

/// Next multiple of `step` strictly above `amount`: an exact multiple still
/// moves up a full step. `None` when the result does not fit a `Decimal`.
pub fn round_up_to_step(amount: Decimal, step: RoundUpStep) -> Option<Decimal> {
    let step = step.amount();
    (amount / step)
        .floor()
        .checked_add(Decimal::ONE)?
        .checked_mul(step)
}

/// Sum of `round_up_to_step(payment) - payment` over the transactions of
/// `month` (`YYYY-MM`), as a two-decimal total. Payments whose round-up
/// overflows are logged and left out.
pub fn investment_bank(txns: &[Transaction], month: &str, step: RoundUpStep) -> Decimal {
    let month = month.trim();
    let mut total = zero();
    for txn in txns
        .iter()
        .filter(|t| t.operation_date.is_some_and(|d| month_key(d) == month))
    {
        let next = round_up_to_step(txn.payment_amount, step)
            .and_then(|up| up.checked_sub(txn.payment_amount))
            .and_then(|delta| total.checked_add(delta));
        match next {
            Some(next) => total = next,
            None => log::warn!("skipping payment that overflows the round-up: {}", txn.payment_amount),
        }
    }
    round_money(total)
}
