//! Currency amounts and tax rates.
//!
//! Amounts are integer kobo (1/100 naira) so that totals never accumulate floating-point
//! error; tax is rounded half-up to the nearest kobo. Arithmetic saturates at `u64::MAX`
//! kobo instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An amount of money in kobo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_kobo(kobo: u64) -> Self {
        Self(kobo)
    }

    pub const fn from_naira(naira: u64) -> Self {
        Self(naira.saturating_mul(100))
    }

    pub const fn kobo(self) -> u64 {
        self.0
    }

    /// Whole naira, truncating any kobo.
    pub const fn naira(self) -> u64 {
        self.0 / 100
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Formats as `₦7,310` or `₦7,310.50`.
impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.naira().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        match self.0 % 100 {
            0 => write!(f, "₦{}", grouped),
            kobo => write!(f, "₦{}.{:02}", grouped, kobo),
        }
    }
}

/// A tax rate in basis points (1/100 of a percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    basis_points: u32,
}

impl TaxRate {
    /// Nigerian VAT, 7.5%.
    pub const VAT: TaxRate = TaxRate { basis_points: 750 };

    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self { basis_points }
    }

    pub const fn basis_points(self) -> u32 {
        self.basis_points
    }

    /// Tax owed on `amount`, rounded half-up to the nearest kobo.
    pub fn apply(self, amount: Money) -> Money {
        let scaled = u128::from(amount.kobo()) * u128::from(self.basis_points);
        let kobo = (scaled + 5_000) / 10_000;
        Money(u64::try_from(kobo).unwrap_or(u64::MAX))
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::VAT
    }
}

/// Subtotal, tax and total of a set of priced lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    /// `subtotal = Σ(unit_price × quantity)`, `tax = subtotal × rate`, `total = subtotal + tax`.
    pub fn compute(lines: impl IntoIterator<Item = (Money, u32)>, rate: TaxRate) -> Self {
        let subtotal: Money = lines
            .into_iter()
            .map(|(unit_price, quantity)| unit_price * quantity)
            .sum();
        let tax = rate.apply(subtotal);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cart_totals() {
        let lines = [(Money::from_naira(2500), 2), (Money::from_naira(1800), 1)];
        let totals = Totals::compute(lines, TaxRate::VAT);

        assert_eq!(totals.subtotal, Money::from_naira(6800));
        assert_eq!(totals.tax, Money::from_naira(510));
        assert_eq!(totals.total, Money::from_naira(7310));
    }

    #[test]
    fn test_tax_rounds_half_up_to_kobo() {
        // 0.075 * 1 kobo = 0.075 kobo -> 0; 0.075 * 7 kobo = 0.525 kobo -> 1
        assert_eq!(TaxRate::VAT.apply(Money::from_kobo(1)), Money::ZERO);
        assert_eq!(TaxRate::VAT.apply(Money::from_kobo(7)), Money::from_kobo(1));
        // ₦3,100 * 7.5% = ₦232.50 exactly
        assert_eq!(TaxRate::VAT.apply(Money::from_naira(3100)), Money::from_kobo(23_250));
    }

    #[test]
    fn test_empty_lines_total_zero() {
        let totals = Totals::compute(Vec::new(), TaxRate::VAT);
        assert_eq!(totals.total, Money::ZERO);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_kobo(u64::MAX - 1);
        assert_eq!(huge + Money::from_kobo(5), Money::from_kobo(u64::MAX));
        assert_eq!(huge * u32::MAX, Money::from_kobo(u64::MAX));
        assert_eq!(Money::from_naira(u64::MAX), Money::from_kobo(u64::MAX));

        let totals = Totals::compute([(huge, 2), (huge, 3)], TaxRate::VAT);
        assert_eq!(totals.subtotal, Money::from_kobo(u64::MAX));
        assert_eq!(totals.total, Money::from_kobo(u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_naira(7310).to_string(), "₦7,310");
        assert_eq!(Money::from_naira(1_234_567).to_string(), "₦1,234,567");
        assert_eq!(Money::from_kobo(23_250).to_string(), "₦232.50");
        assert_eq!(Money::from_naira(500).to_string(), "₦500");
    }
}
