//! Wire-format mirrors of the companies API payloads.
//!
//! Every field the contract marks optional defaults when absent, so the
//! console keeps rendering payloads from sparser datasets instead of
//! failing the whole screen over one missing key.

use serde::Deserialize;

/// Salary band attached to a company, in rupees per year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SalaryBandDto {
    /// Base salary. Guaranteed by the contract when the band is present,
    /// but tolerated as absent anyway.
    #[serde(default)]
    pub base: Option<i64>,
    /// Bonus on top of the base. Omitted from the wire when unset.
    #[serde(default)]
    pub bonus: Option<i64>,
}

/// Hiring requirements attached to a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HiringCriteriaDto {
    /// Skills the company hires for.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One company record as served by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    /// Stable identifier. The only field the contract guarantees.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub headcount: Option<u32>,
    #[serde(default)]
    pub salary_band: Option<SalaryBandDto>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub hiring_criteria: Option<HiringCriteriaDto>,
}

impl CompanyDto {
    /// Base salary when the band carries one.
    #[must_use]
    pub fn base_salary(&self) -> Option<i64> {
        self.salary_band.as_ref().and_then(|band| band.base)
    }

    /// Bonus when the band carries one.
    #[must_use]
    pub fn bonus(&self) -> Option<i64> {
        self.salary_band.as_ref().and_then(|band| band.bonus)
    }

    /// Skills listed under the hiring criteria, empty when absent.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        self.hiring_criteria
            .as_ref()
            .map_or(&[], |criteria| criteria.skills.as_slice())
    }
}

/// The `{"items": [...]}` envelope wrapping every list response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemsDto {
    /// Companies in response order. An absent key reads as empty.
    #[serde(default)]
    pub items: Vec<CompanyDto>,
}

/// The `{"total": N}` payload of the count endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CountDto {
    /// Number of stored companies.
    #[serde(default)]
    pub total: u64,
}

/// The `{"error": msg}` body carried by failure responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDto {
    /// Human-readable failure description.
    pub error: String,
}
