//! Public models for the `payment-reports` module.
//!
//! Every report returns one of these flat projections. Nothing here carries
//! lazy relations: a `User` holds its personal info and company inline, and a
//! `Payment` carries only the receiver fields its ordering depends on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company a user may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
}

/// Personal details stored one-to-one with a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub firstname: String,
    pub lastname: String,
    pub birth_date: NaiveDate,
}

/// A user with its personal info and (optional) company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub personal_info: PersonalInfo,
    pub company: Option<Company>,
}

impl User {
    /// `"<firstname> <lastname>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.personal_info.firstname, self.personal_info.lastname
        )
    }

    /// Name of the user's company, if any.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}

/// A single payment received by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i32,
    pub receiver_id: i32,
    pub receiver_username: String,
    pub amount: i32,
}

/// Birth date projection produced by filtered birthday queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Birthday {
    pub birth_date: NaiveDate,
}

impl From<NaiveDate> for Birthday {
    fn from(birth_date: NaiveDate) -> Self {
        Self { birth_date }
    }
}

/// Mean payment amount across all users of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAverage {
    pub company_name: String,
    pub average_amount: f64,
}

/// A user together with the mean of their own payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayerAverage {
    pub user: User,
    pub average_amount: f64,
}

/// Largest and smallest payment among users sharing a last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastNamePaymentRange {
    pub lastname: String,
    pub max_amount: i32,
    pub min_amount: i32,
}

/// Number of users employed by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUserCount {
    pub user_count: i64,
    pub company_name: String,
}

/// Total of all payments received by users of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPaymentSum {
    pub company_name: String,
    pub total_amount: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bill() -> User {
        User {
            id: 1,
            username: "BillGates".to_owned(),
            personal_info: PersonalInfo {
                firstname: "Bill".to_owned(),
                lastname: "Gates".to_owned(),
                birth_date: NaiveDate::from_ymd_opt(1955, 10, 28).unwrap(),
            },
            company: Some(Company {
                id: 1,
                name: "Microsoft".to_owned(),
            }),
        }
    }

    #[test]
    fn full_name_joins_first_and_last_name_with_a_space() {
        assert_eq!(bill().full_name(), "Bill Gates");
    }

    #[test]
    fn company_name_is_none_for_unemployed_user() {
        let mut user = bill();
        assert_eq!(user.company_name(), Some("Microsoft"));
        user.company = None;
        assert_eq!(user.company_name(), None);
    }

    #[test]
    fn birth_date_serializes_as_iso_date() {
        let json = serde_json::to_value(bill()).unwrap();
        assert_eq!(json["personal_info"]["birth_date"], "1955-10-28");
        assert_eq!(json["company"]["name"], "Microsoft");
    }
}
