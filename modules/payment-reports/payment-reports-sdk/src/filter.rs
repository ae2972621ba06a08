//! Optional-field filters accepted by filtered reports.

use serde::{Deserialize, Serialize};

/// Filter for company-scoped reports.
///
/// Every field is independent and optional. A field that is `None` (or an
/// empty string) contributes no predicate, so the default filter matches
/// every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFilter {
    /// Exact company name.
    #[serde(default)]
    pub name: Option<String>,
}

impl CompanyFilter {
    #[must_use]
    pub fn builder() -> CompanyFilterBuilder {
        CompanyFilterBuilder::default()
    }

    /// Company name if it is set to a non-empty value.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// `true` when no field would produce a predicate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name().is_none()
    }
}

/// Builder for [`CompanyFilter`].
#[derive(Debug, Clone, Default)]
pub struct CompanyFilterBuilder {
    name: Option<String>,
}

impl CompanyFilterBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CompanyFilter {
        CompanyFilter { name: self.name }
    }
}
