//! Flat projection rows read by the report queries and their conversion
//! into SDK models.
//!
//! Column aliases used by the queries must match the field names here.

use payment_reports_sdk::{
    Company, CompanyUserCount, LastNamePaymentRange, Payment, PersonalInfo, User,
};
use sea_orm::prelude::Date;
use sea_orm::FromQueryResult;

use crate::domain::aggregates::{CompanyPaymentTotals, PaymentTotals, UserPaymentTotals};

/// users JOIN personal_info LEFT JOIN companies
#[derive(Debug, Clone, FromQueryResult)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub birth_date: Date,
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let company = match (row.company_id, row.company_name) {
            (Some(id), Some(name)) => Some(Company { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            username: row.username,
            personal_info: PersonalInfo {
                firstname: row.firstname,
                lastname: row.lastname,
                birth_date: row.birth_date,
            },
            company,
        }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct PaymentRow {
    pub id: i32,
    pub receiver_id: i32,
    pub receiver_username: String,
    pub amount: i32,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: row.id,
            receiver_id: row.receiver_id,
            receiver_username: row.receiver_username,
            amount: row.amount,
        }
    }
}

/// `COUNT`/`SUM` over an ungrouped payment set. `SUM` of nothing is `NULL`.
#[derive(Debug, Clone, Copy, FromQueryResult)]
pub struct TotalsRow {
    pub payment_count: i64,
    pub amount_sum: Option<i64>,
}

impl From<TotalsRow> for PaymentTotals {
    fn from(row: TotalsRow) -> Self {
        PaymentTotals::new(row.payment_count, row.amount_sum.unwrap_or_default())
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CompanyTotalsRow {
    pub company_name: String,
    pub payment_count: i64,
    pub amount_sum: i64,
}

impl From<CompanyTotalsRow> for CompanyPaymentTotals {
    fn from(row: CompanyTotalsRow) -> Self {
        Self {
            company_name: row.company_name,
            totals: PaymentTotals::new(row.payment_count, row.amount_sum),
        }
    }
}

/// [`UserRow`] columns plus the user's own payment totals.
#[derive(Debug, Clone, FromQueryResult)]
pub struct UserTotalsRow {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub birth_date: Date,
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
    pub payment_count: i64,
    pub amount_sum: i64,
}

impl From<UserTotalsRow> for UserPaymentTotals {
    fn from(row: UserTotalsRow) -> Self {
        let totals = PaymentTotals::new(row.payment_count, row.amount_sum);
        let user = UserRow {
            id: row.id,
            username: row.username,
            firstname: row.firstname,
            lastname: row.lastname,
            birth_date: row.birth_date,
            company_id: row.company_id,
            company_name: row.company_name,
        };
        Self {
            user: user.into(),
            totals,
        }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct PaymentRangeRow {
    pub lastname: String,
    pub max_amount: i32,
    pub min_amount: i32,
}

impl From<PaymentRangeRow> for LastNamePaymentRange {
    fn from(row: PaymentRangeRow) -> Self {
        Self {
            lastname: row.lastname,
            max_amount: row.max_amount,
            min_amount: row.min_amount,
        }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct UserCountRow {
    pub company_name: String,
    pub user_count: i64,
}

impl From<UserCountRow> for CompanyUserCount {
    fn from(row: UserCountRow) -> Self {
        Self {
            user_count: row.user_count,
            company_name: row.company_name,
        }
    }
}
