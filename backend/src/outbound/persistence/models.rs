//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::companies;

/// Row struct for reading from the companies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub location: Option<String>,
    pub headcount: Option<i32>,
    pub salary_base: Option<i64>,
    pub salary_bonus: Option<i64>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for seeding company records.
///
/// Timestamps are omitted so the database defaults apply.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub(crate) struct NewCompanyRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub location: Option<String>,
    pub headcount: Option<i32>,
    pub salary_base: Option<i64>,
    pub salary_bonus: Option<i64>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
}
