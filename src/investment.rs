//! Investment instruments and their maturity projections.
//!
//! Two instrument categories exist: recurring-contribution plans (principal
//! plus fixed monthly additions, 9.6% nominal annual rate compounded
//! monthly) and fixed deposits (lump sum, 7.1% compounded annually). The
//! compounding asymmetry between the two is deliberate and preserved.

use crate::money::Money;
use rust_decimal::{Decimal, MathematicalOps};

/// Investment category with category-specific data.
#[derive(Debug, Clone)]
pub enum InvestmentKind {
    /// Initial principal plus a fixed monthly contribution.
    RecurringContribution {
        /// Amount added every month over the full duration. Non-negative.
        monthly_contribution: Money,
    },

    /// Lump-sum deposit held for the full duration.
    FixedDeposit,
}

impl InvestmentKind {
    /// Label used in report tables and projections.
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentKind::RecurringContribution { .. } => "Recurring Plan",
            InvestmentKind::FixedDeposit => "Fixed Deposit",
        }
    }
}

/// A committed investment.
///
/// Immutable once created. Owned exclusively by the ledger, which keeps
/// investments in insertion order and never removes them. The maturity
/// value is derived on demand, never stored.
#[derive(Debug, Clone)]
pub struct Investment {
    /// Category and category-specific fields.
    pub kind: InvestmentKind,

    /// Initial amount committed. Non-negative.
    pub principal: Money,

    /// Whole years the investment runs for.
    pub duration_years: u32,
}

impl Investment {
    /// Creates a recurring-contribution plan.
    pub fn recurring(principal: Money, duration_years: u32, monthly_contribution: Money) -> Self {
        Investment {
            kind: InvestmentKind::RecurringContribution {
                monthly_contribution,
            },
            principal,
            duration_years,
        }
    }

    /// Creates a fixed deposit.
    pub fn fixed_deposit(principal: Money, duration_years: u32) -> Self {
        Investment {
            kind: InvestmentKind::FixedDeposit,
            principal,
            duration_years,
        }
    }

    /// Nominal annual rate for recurring-contribution plans (9.6%).
    fn recurring_annual_rate() -> Decimal {
        Decimal::new(96, 3)
    }

    /// Annual rate for fixed deposits (7.1%).
    fn fixed_deposit_rate() -> Decimal {
        Decimal::new(71, 3)
    }

    /// Computes the value this investment grows to over its full duration.
    ///
    /// Fixed deposits compound annually:
    /// `principal * (1 + 0.071)^years`.
    ///
    /// Recurring plans compound monthly at rate `i = 0.096 / 12`, over
    /// `n = years * 12` months: the principal grows to
    /// `principal * (1 + i)^n`, and the contributions accrue the ordinary
    /// annuity future value `monthly * ((1 + i)^n - 1) / i`.
    ///
    /// Durations are unbounded user input; when the compounded value
    /// exceeds the decimal range the result saturates at [`Money::MAX`]
    /// rather than aborting mid-projection.
    pub fn maturity_value(&self) -> Money {
        let principal = self.principal.to_decimal();

        match &self.kind {
            InvestmentKind::FixedDeposit => {
                let base = Decimal::ONE + Self::fixed_deposit_rate();
                base.checked_powi(i64::from(self.duration_years))
                    .and_then(|factor| principal.checked_mul(factor))
                    .map(Money::new)
                    .unwrap_or(Money::MAX)
            }
            InvestmentKind::RecurringContribution {
                monthly_contribution,
            } => {
                let monthly_rate = Self::recurring_annual_rate() / Decimal::from(12u32);
                let months = u64::from(self.duration_years) * 12;
                let factor = match (Decimal::ONE + monthly_rate).checked_powi(months as i64) {
                    Some(factor) => factor,
                    None => return Money::MAX,
                };

                let growth = principal.checked_mul(factor);
                let contributions = if monthly_rate.is_zero() {
                    // Annuity formula divides by the rate; with a zero rate
                    // the contributions simply sum up.
                    monthly_contribution.to_decimal().checked_mul(Decimal::from(months))
                } else {
                    monthly_contribution
                        .to_decimal()
                        .checked_mul((factor - Decimal::ONE) / monthly_rate)
                };

                match (growth, contributions) {
                    (Some(growth), Some(contributions)) => growth
                        .checked_add(contributions)
                        .map(Money::new)
                        .unwrap_or(Money::MAX),
                    _ => Money::MAX,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn inr(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_deposit_maturity() {
        // 1000 * 1.071^5 = 1409.1179... -> 1409.12
        let fd = Investment::fixed_deposit(inr("1000"), 5);
        assert_eq!(fd.maturity_value().to_string(), "1409.12");
    }

    #[test]
    fn test_fixed_deposit_two_years() {
        // 3000 * 1.071^2 = 3000 * 1.147041 = 3441.123 -> 3441.12
        let fd = Investment::fixed_deposit(inr("3000"), 2);
        assert_eq!(fd.maturity_value().to_string(), "3441.12");
    }

    #[test]
    fn test_fixed_deposit_zero_duration() {
        let fd = Investment::fixed_deposit(inr("1000"), 0);
        assert_eq!(fd.maturity_value().to_string(), "1000.00");
    }

    #[test]
    fn test_recurring_pure_annuity() {
        // Zero principal leaves only the contribution term:
        // 1000 * ((1.008)^12 - 1) / 0.008 = 12542.3367... -> 12542.34
        let plan = Investment::recurring(inr("0"), 1, inr("1000"));
        assert_eq!(plan.maturity_value().to_string(), "12542.34");
    }

    #[test]
    fn test_recurring_principal_only() {
        // Zero monthly contribution leaves only principal growth:
        // 1000 * (1.008)^12 = 1100.3386... -> 1100.34
        let plan = Investment::recurring(inr("1000"), 1, inr("0"));
        assert_eq!(plan.maturity_value().to_string(), "1100.34");
    }

    #[test]
    fn test_recurring_combines_growth_and_contributions() {
        let combined = Investment::recurring(inr("1000"), 1, inr("1000"));
        let growth_only = Investment::recurring(inr("1000"), 1, inr("0"));
        let annuity_only = Investment::recurring(inr("0"), 1, inr("1000"));

        assert_eq!(
            combined.maturity_value(),
            growth_only.maturity_value() + annuity_only.maturity_value()
        );
    }

    #[test]
    fn test_extreme_duration_saturates_instead_of_overflowing() {
        // 1.071^2000 is far past the decimal range; the projection must
        // saturate, not abort.
        let fd = Investment::fixed_deposit(inr("1000"), 2000);
        assert_eq!(fd.maturity_value(), Money::MAX);

        let plan = Investment::recurring(inr("1000"), 100_000, inr("100"));
        assert_eq!(plan.maturity_value(), Money::MAX);
    }

    #[test]
    fn test_long_but_representable_duration() {
        // 500 years of monthly compounding still fits.
        let plan = Investment::recurring(inr("1000"), 500, inr("100"));
        assert!(plan.maturity_value() > Money::ZERO);
        assert!(plan.maturity_value() < Money::MAX);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Investment::recurring(inr("1"), 1, inr("1")).kind.label(),
            "Recurring Plan"
        );
        assert_eq!(
            Investment::fixed_deposit(inr("1"), 1).kind.label(),
            "Fixed Deposit"
        );
    }
}
