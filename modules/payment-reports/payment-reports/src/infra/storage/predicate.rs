//! Optional-equality predicates for filtered reports.
//!
//! A filter is a set of independent optional fields. Each present field
//! becomes one `column = value` term and all terms are ANDed together. A
//! filter with no present field yields an empty `Condition::all()`, which
//! matches every row.

use payment_reports_sdk::CompanyFilter;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Value};

use crate::infra::storage::entity::company;

#[derive(Debug, Default)]
pub struct PredicateBuilder {
    terms: Vec<SimpleExpr>,
}

impl PredicateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column = value` when `value` is present.
    #[must_use]
    pub fn eq_if_present<C, V>(mut self, column: C, value: Option<V>) -> Self
    where
        C: ColumnTrait,
        V: Into<Value>,
    {
        if let Some(value) = value {
            self.terms.push(column.eq(value));
        }
        self
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.terms.len()
    }

    /// Fold the collected terms with `AND`.
    #[must_use]
    pub fn build(self) -> Condition {
        self.terms
            .into_iter()
            .fold(Condition::all(), |cond, term| cond.add(term))
    }
}

/// Predicate over `companies` for a [`CompanyFilter`].
#[must_use]
pub fn company_filter_condition(filter: &CompanyFilter) -> Condition {
    PredicateBuilder::new()
        .eq_if_present(company::Column::Name, filter.name())
        .build()
}
