#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `payment_reports` integration tests.
//!
//! Provides a fresh in-memory database per test, schema creation from the
//! SeaORM entities and the reference dataset.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;

use chrono::NaiveDate;
use payment_reports::domain::service::{ReportsService, ServiceConfig};
use payment_reports::infra::storage::entity::{company, payment, personal_info, user};
use payment_reports::infra::storage::OrmReportsRepository;
use payment_reports::PaymentReportsLocalClient;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, Set,
};

/// Empty in-memory database with all report tables.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    create_schema(&db).await;
    db
}

/// In-memory database loaded with [`seed_dataset`].
pub async fn seeded_db() -> DatabaseConnection {
    let db = inmem_db().await;
    seed_dataset(&db).await;
    db
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let backend = db.get_database_backend();
    let stmt = backend.build(&Schema::new(backend).create_table_from_entity(entity));
    db.execute(stmt).await.expect("Failed to create table");
}

pub async fn create_schema(db: &DatabaseConnection) {
    create_table(db, company::Entity).await;
    create_table(db, user::Entity).await;
    create_table(db, personal_info::Entity).await;
    create_table(db, payment::Entity).await;
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_company<C: ConnectionTrait>(db: &C, name: &str) -> company::Model {
    company::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed company")
}

/// Insert a user named `firstname + lastname` with personal info and one
/// payment per entry of `amounts`.
pub async fn seed_user<C: ConnectionTrait>(
    db: &C,
    firstname: &str,
    lastname: &str,
    birth_date: NaiveDate,
    company: Option<&company::Model>,
    amounts: &[i32],
) -> user::Model {
    let user = user::ActiveModel {
        username: Set(format!("{firstname}{lastname}")),
        company_id: Set(company.map(|c| c.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed user");

    personal_info::ActiveModel {
        user_id: Set(user.id),
        firstname: Set(firstname.to_owned()),
        lastname: Set(lastname.to_owned()),
        birth_date: Set(birth_date),
    }
    .insert(db)
    .await
    .expect("Failed to seed personal info");

    for amount in amounts {
        seed_payment(db, &user, *amount).await;
    }
    user
}

pub async fn seed_payment<C: ConnectionTrait>(db: &C, receiver: &user::Model, amount: i32) {
    payment::ActiveModel {
        receiver_id: Set(receiver.id),
        amount: Set(amount),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed payment");
}

/// Three companies, five users, fourteen payments.
///
/// | user         | company   | born       | payments        |
/// |--------------|-----------|------------|-----------------|
/// | Bill Gates   | Microsoft | 1955-10-28 | 100, 300, 500   |
/// | Steve Jobs   | Apple     | 1955-02-24 | 250, 600, 500   |
/// | Sergey Brin  | Google    | 1973-08-21 | 500, 500, 500   |
/// | Tim Cook     | Apple     | 1960-11-01 | 400, 300        |
/// | Diane Greene | Google    | 1955-01-01 | 300, 300, 300   |
pub async fn seed_dataset<C: ConnectionTrait>(db: &C) {
    let microsoft = seed_company(db, "Microsoft").await;
    let apple = seed_company(db, "Apple").await;
    let google = seed_company(db, "Google").await;

    seed_user(db, "Bill", "Gates", date(1955, 10, 28), Some(&microsoft), &[100, 300, 500]).await;
    seed_user(db, "Steve", "Jobs", date(1955, 2, 24), Some(&apple), &[250, 600, 500]).await;
    seed_user(db, "Sergey", "Brin", date(1973, 8, 21), Some(&google), &[500, 500, 500]).await;
    seed_user(db, "Tim", "Cook", date(1960, 11, 1), Some(&apple), &[400, 300]).await;
    seed_user(db, "Diane", "Greene", date(1955, 1, 1), Some(&google), &[300, 300, 300]).await;
}

pub fn service(config: ServiceConfig) -> ReportsService<OrmReportsRepository> {
    ReportsService::new(Arc::new(OrmReportsRepository::new()), config)
}

pub fn client(db: DatabaseConnection) -> PaymentReportsLocalClient {
    PaymentReportsLocalClient::new(db, service(ServiceConfig::default()))
}
