//! Integer building blocks for mean-based reports.
//!
//! Means are never computed by the database. Repositories return `SUM` and
//! `COUNT` pairs and the service divides, so an empty group is visible as a
//! zero count instead of a backend-specific `NULL` or `NUMERIC`.

use payment_reports_sdk::User;

/// `SUM(amount)` and `COUNT(*)` over a set of payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentTotals {
    pub payment_count: i64,
    pub amount_sum: i64,
}

impl PaymentTotals {
    #[must_use]
    pub fn new(payment_count: i64, amount_sum: i64) -> Self {
        Self {
            payment_count,
            amount_sum,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payment_count == 0
    }

    /// Arithmetic mean, or `None` for an empty set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.amount_sum as f64 / self.payment_count as f64)
    }
}

/// Payment totals of one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyPaymentTotals {
    pub company_name: String,
    pub totals: PaymentTotals,
}

/// Payment totals of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaymentTotals {
    pub user: User,
    pub totals: PaymentTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_set_is_none() {
        assert_eq!(PaymentTotals::default().mean(), None);
    }

    #[test]
    fn mean_divides_sum_by_count() {
        assert_eq!(PaymentTotals::new(3, 900).mean(), Some(300.0));
        assert_eq!(PaymentTotals::new(2, 700).mean(), Some(350.0));
    }
}
