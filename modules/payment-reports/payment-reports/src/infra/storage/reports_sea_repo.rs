use async_trait::async_trait;
use payment_reports_sdk::{
    Birthday, CompanyFilter, CompanyUserCount, LastNamePaymentRange, Payment, User,
};
use sea_orm::prelude::Date;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

use crate::domain::aggregates::{CompanyPaymentTotals, PaymentTotals, UserPaymentTotals};
use crate::domain::error::DomainError;
use crate::domain::repos::ReportsRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{company, payment, personal_info, user};
use crate::infra::storage::mapper::{
    CompanyTotalsRow, PaymentRangeRow, PaymentRow, TotalsRow, UserCountRow, UserRow,
    UserTotalsRow,
};
use crate::infra::storage::predicate::company_filter_condition;

/// Query-builder implementation of [`ReportsRepository`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OrmReportsRepository;

impl OrmReportsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn payment_count() -> SimpleExpr {
    Expr::col((payment::Entity, payment::Column::Id)).count()
}

fn amount_sum() -> SimpleExpr {
    Expr::col((payment::Entity, payment::Column::Amount)).sum()
}

/// Users with personal info and optional company, projected onto [`UserRow`].
fn user_projection() -> Select<user::Entity> {
    user::Entity::find()
        .select_only()
        .column(user::Column::Id)
        .column(user::Column::Username)
        .column(personal_info::Column::Firstname)
        .column(personal_info::Column::Lastname)
        .column(personal_info::Column::BirthDate)
        .column_as(company::Column::Id, "company_id")
        .column_as(company::Column::Name, "company_name")
        .join(JoinType::InnerJoin, user::Relation::PersonalInfo.def())
        .join(JoinType::LeftJoin, user::Relation::Company.def())
}

/// Payments joined to their receiver and the receiver's personal info.
fn payments_with_receiver() -> Select<payment::Entity> {
    payment::Entity::find()
        .select_only()
        .join(JoinType::InnerJoin, payment::Relation::Receiver.def())
        .join(JoinType::InnerJoin, user::Relation::PersonalInfo.def())
}

async fn fetch_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    query: Select<user::Entity>,
    operation: &'static str,
) -> Result<Vec<User>, DomainError> {
    let rows = query
        .into_model::<UserRow>()
        .all(conn)
        .await
        .map_err(db_err(operation))?;
    Ok(rows.into_iter().map(Into::into).collect())
}

#[async_trait]
impl ReportsRepository for OrmReportsRepository {
    async fn all_users<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError> {
        let query = user_projection().order_by_asc(user::Column::Id);
        fetch_users(conn, query, "all_users").await
    }

    async fn users_by_first_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
    ) -> Result<Vec<User>, DomainError> {
        let query = user_projection()
            .filter(personal_info::Column::Firstname.eq(first_name))
            .order_by_asc(user::Column::Id);
        fetch_users(conn, query, "users_by_first_name").await
    }

    async fn users_ordered_by_birthday<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        limit: u64,
    ) -> Result<Vec<User>, DomainError> {
        let query = user_projection()
            .order_by_asc(personal_info::Column::BirthDate)
            .order_by_asc(user::Column::Id)
            .limit(limit);
        fetch_users(conn, query, "users_ordered_by_birthday").await
    }

    async fn users_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<User>, DomainError> {
        let query = user_projection()
            .filter(company::Column::Name.eq(company_name))
            .order_by_asc(user::Column::Id);
        fetch_users(conn, query, "users_by_company_name").await
    }

    async fn payments_by_company_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        company_name: &str,
    ) -> Result<Vec<Payment>, DomainError> {
        let rows = payment::Entity::find()
            .select_only()
            .column(payment::Column::Id)
            .column(payment::Column::ReceiverId)
            .column_as(user::Column::Username, "receiver_username")
            .column(payment::Column::Amount)
            .join(JoinType::InnerJoin, payment::Relation::Receiver.def())
            .join(JoinType::InnerJoin, user::Relation::Company.def())
            .filter(company::Column::Name.eq(company_name))
            .order_by_asc(user::Column::Username)
            .order_by_asc(payment::Column::Amount)
            .order_by_asc(payment::Column::Id)
            .into_model::<PaymentRow>()
            .all(conn)
            .await
            .map_err(db_err("payments_by_company_name"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn payment_totals<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<PaymentTotals, DomainError> {
        let row = payment::Entity::find()
            .select_only()
            .column_as(payment_count(), "payment_count")
            .column_as(amount_sum(), "amount_sum")
            .into_model::<TotalsRow>()
            .one(conn)
            .await
            .map_err(db_err("payment_totals"))?;
        Ok(row.map(Into::into).unwrap_or_default())
    }

    async fn payment_totals_by_full_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        first_name: &str,
        last_name: &str,
    ) -> Result<PaymentTotals, DomainError> {
        let row = payments_with_receiver()
            .column_as(payment_count(), "payment_count")
            .column_as(amount_sum(), "amount_sum")
            .filter(personal_info::Column::Firstname.eq(first_name))
            .filter(personal_info::Column::Lastname.eq(last_name))
            .into_model::<TotalsRow>()
            .one(conn)
            .await
            .map_err(db_err("payment_totals_by_full_name"))?;
        Ok(row.map(Into::into).unwrap_or_default())
    }

    async fn company_payment_totals<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyPaymentTotals>, DomainError> {
        let rows = company::Entity::find()
            .select_only()
            .column_as(company::Column::Name, "company_name")
            .column_as(payment_count(), "payment_count")
            .column_as(amount_sum(), "amount_sum")
            .join(JoinType::InnerJoin, company::Relation::Users.def())
            .join(JoinType::InnerJoin, user::Relation::Payments.def())
            .group_by(company::Column::Name)
            .order_by_asc(company::Column::Name)
            .into_model::<CompanyTotalsRow>()
            .all(conn)
            .await
            .map_err(db_err("company_payment_totals"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn users_with_mean_above<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        threshold: PaymentTotals,
    ) -> Result<Vec<UserPaymentTotals>, DomainError> {
        // sum_u / count_u > sum_all / count_all, cross-multiplied
        let above = Expr::expr(Expr::expr(amount_sum()).mul(threshold.payment_count))
            .gt(Expr::expr(payment_count()).mul(threshold.amount_sum));

        let rows = user_projection()
            .column_as(payment_count(), "payment_count")
            .column_as(amount_sum(), "amount_sum")
            .join(JoinType::InnerJoin, user::Relation::Payments.def())
            .group_by(user::Column::Id)
            .group_by(user::Column::Username)
            .group_by(personal_info::Column::Firstname)
            .group_by(personal_info::Column::Lastname)
            .group_by(personal_info::Column::BirthDate)
            .group_by(company::Column::Id)
            .group_by(company::Column::Name)
            .having(above)
            .order_by_asc(user::Column::Username)
            .into_model::<UserTotalsRow>()
            .all(conn)
            .await
            .map_err(db_err("users_with_mean_above"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn payment_range_by_last_name<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<LastNamePaymentRange>, DomainError> {
        let amount = || Expr::col((payment::Entity, payment::Column::Amount));
        let rows = payments_with_receiver()
            .column_as(personal_info::Column::Lastname, "lastname")
            .column_as(amount().max(), "max_amount")
            .column_as(amount().min(), "min_amount")
            .group_by(personal_info::Column::Lastname)
            .order_by_asc(personal_info::Column::Lastname)
            .into_model::<PaymentRangeRow>()
            .all(conn)
            .await
            .map_err(db_err("payment_range_by_last_name"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn max_full_name_length<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Option<i32>, DomainError> {
        let name_length = Expr::expr(Func::char_length(Expr::col((
            personal_info::Entity,
            personal_info::Column::Lastname,
        ))))
        .add(Func::char_length(Expr::col((
            personal_info::Entity,
            personal_info::Column::Firstname,
        ))));

        let max = user::Entity::find()
            .select_only()
            .column_as(Expr::expr(name_length).max(), "max_length")
            .join(JoinType::InnerJoin, user::Relation::PersonalInfo.def())
            .into_tuple::<Option<i32>>()
            .one(conn)
            .await
            .map_err(db_err("max_full_name_length"))?;
        Ok(max.flatten())
    }

    async fn birthdays<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &CompanyFilter,
    ) -> Result<Vec<Birthday>, DomainError> {
        let dates = user::Entity::find()
            .select_only()
            .column(personal_info::Column::BirthDate)
            .join(JoinType::InnerJoin, user::Relation::PersonalInfo.def())
            .join(JoinType::LeftJoin, user::Relation::Company.def())
            .filter(company_filter_condition(filter))
            .order_by_asc(user::Column::Id)
            .into_tuple::<Date>()
            .all(conn)
            .await
            .map_err(db_err("birthdays"))?;
        Ok(dates.into_iter().map(Birthday::from).collect())
    }

    async fn user_count_by_company<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<CompanyUserCount>, DomainError> {
        let rows = user::Entity::find()
            .select_only()
            .column_as(company::Column::Name, "company_name")
            .column_as(Expr::col((user::Entity, user::Column::Id)).count(), "user_count")
            .join(JoinType::InnerJoin, user::Relation::Company.def())
            .group_by(company::Column::Name)
            .order_by_asc(company::Column::Name)
            .into_model::<UserCountRow>()
            .all(conn)
            .await
            .map_err(db_err("user_count_by_company"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn user_projection_joins_company_optionally() {
        let sql = user_projection().build(DbBackend::Sqlite).to_string();
        assert!(sql.contains(r#"INNER JOIN "personal_info""#), "{sql}");
        assert!(sql.contains(r#"LEFT JOIN "companies""#), "{sql}");
        assert!(sql.contains(r#""companies"."name" AS "company_name""#), "{sql}");
    }

    #[test]
    fn full_name_length_uses_backend_length_function() {
        let name_length = Expr::expr(Func::char_length(Expr::col((
            personal_info::Entity,
            personal_info::Column::Lastname,
        ))));
        let query = personal_info::Entity::find()
            .select_only()
            .column_as(name_length, "len");
        let sqlite = query.clone().build(DbBackend::Sqlite).to_string();
        let postgres = query.build(DbBackend::Postgres).to_string();
        assert!(sqlite.contains("LENGTH("), "{sqlite}");
        assert!(postgres.contains("CHAR_LENGTH("), "{postgres}");
    }
}
