//! Generated company seed types.
//!
//! This module defines the output types from company generation. These types
//! are independent of backend domain types to avoid circular dependencies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example company record.
///
/// This type contains all the fields needed to create a company in the
/// backend. Apart from the identifier every field is optional; generation
/// deliberately omits some so downstream fallback rendering gets exercised.
/// A bonus is only ever emitted alongside a base salary.
///
/// # Example
///
/// ```
/// use example_data::CompanySeed;
/// use uuid::Uuid;
///
/// let company = CompanySeed {
///     id: Uuid::new_v4(),
///     name: Some("Acme Systems".to_owned()),
///     location: Some("Bangalore".to_owned()),
///     headcount: Some(1200),
///     salary_base: Some(2_400_000),
///     salary_bonus: None,
///     benefits: vec!["Health Insurance".to_owned()],
///     skills: vec!["Rust".to_owned()],
/// };
///
/// assert_eq!(company.name.as_deref(), Some("Acme Systems"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySeed {
    /// Unique identifier for the company.
    pub id: Uuid,
    /// Display name.
    pub name: Option<String>,
    /// Free-form location text.
    pub location: Option<String>,
    /// Number of employees.
    pub headcount: Option<u32>,
    /// Fixed salary component in whole rupees.
    pub salary_base: Option<i64>,
    /// Variable salary component in whole rupees.
    pub salary_bonus: Option<i64>,
    /// Offered benefits; empty means unspecified.
    pub benefits: Vec<String>,
    /// Hiring criteria skills; empty means unspecified.
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_seed_serializes_to_camel_case() {
        let company = CompanySeed {
            id: Uuid::nil(),
            name: None,
            location: None,
            headcount: None,
            salary_base: Some(900_000),
            salary_bonus: Some(50_000),
            benefits: vec![],
            skills: vec![],
        };
        let json = serde_json::to_string(&company).expect("serialize");
        assert!(json.contains("salaryBase"));
        assert!(json.contains("salaryBonus"));
    }
}
