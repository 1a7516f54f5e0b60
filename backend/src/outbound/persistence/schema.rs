//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// The companies collection.
    ///
    /// Analytics records imported out-of-band. Every column apart from the
    /// primary key is optional data: scalar fields are nullable and the
    /// array fields default to empty, both meaning "unspecified".
    companies (id) {
        /// Primary key: UUID identifier.
        id -> Uuid,
        /// Display name.
        name -> Nullable<Varchar>,
        /// Free-form location text, e.g. "Bangalore" or "Pune, India".
        location -> Nullable<Varchar>,
        /// Number of employees; never negative.
        headcount -> Nullable<Int4>,
        /// Base salary in whole rupees; the top-paid ranking sorts on this.
        salary_base -> Nullable<Int8>,
        /// Optional bonus component in whole rupees. A bonus without a base
        /// is rejected by a table constraint.
        salary_bonus -> Nullable<Int8>,
        /// Offered benefits; empty array when unspecified.
        benefits -> Array<Text>,
        /// Hiring criteria skills; empty array when unspecified.
        skills -> Array<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
