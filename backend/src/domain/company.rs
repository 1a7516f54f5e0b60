//! Company data model.
//!
//! A company record is sparse by design: apart from the identifier every
//! field is optional, and absence means "unspecified" rather than invalid.
//! Consumers render fallbacks for missing fields; they never treat them as
//! errors.

use std::fmt;

use uuid::Uuid;

/// Validation errors returned when constructing company values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyValidationError {
    EmptyId,
    InvalidId,
    NegativeHeadcount { value: i64 },
    HeadcountTooLarge { value: i64 },
}

impl fmt::Display for CompanyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "company id must not be empty"),
            Self::InvalidId => write!(f, "company id must be a valid UUID"),
            Self::NegativeHeadcount { value } => {
                write!(f, "headcount must not be negative (got {value})")
            }
            Self::HeadcountTooLarge { value } => {
                write!(f, "headcount {value} exceeds the supported maximum")
            }
        }
    }
}

impl std::error::Error for CompanyValidationError {}

/// Stable company identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(Uuid);

impl CompanyId {
    /// Validate and construct a [`CompanyId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CompanyValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(CompanyValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| CompanyValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`CompanyId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of employees. Always non-negative; zero is a valid, if unusual,
/// value for a freshly registered shell company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Headcount(u32);

impl Headcount {
    /// Validate and construct a [`Headcount`] from a wider integer.
    pub fn new(value: i64) -> Result<Self, CompanyValidationError> {
        if value < 0 {
            return Err(CompanyValidationError::NegativeHeadcount { value });
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| CompanyValidationError::HeadcountTooLarge { value })
    }

    /// The raw employee count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Advertised salary band in whole rupees.
///
/// `base` is the figure the top-paid ranking sorts on; `bonus` is an optional
/// variable component and plays no part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    base: i64,
    bonus: Option<i64>,
}

impl SalaryBand {
    /// Construct a salary band from its components.
    #[must_use]
    pub const fn new(base: i64, bonus: Option<i64>) -> Self {
        Self { base, bonus }
    }

    /// Fixed base component.
    #[must_use]
    pub const fn base(&self) -> i64 {
        self.base
    }

    /// Variable bonus component, when advertised.
    #[must_use]
    pub const fn bonus(&self) -> Option<i64> {
        self.bonus
    }
}

/// Unvalidated field bundle used to assemble a [`Company`].
///
/// Adapters perform per-field validation (for example converting a stored
/// integer into a [`Headcount`]) and then hand the draft over wholesale.
#[derive(Debug, Clone, Default)]
pub struct CompanyDraft {
    pub name: Option<String>,
    pub location: Option<String>,
    pub headcount: Option<Headcount>,
    pub salary_band: Option<SalaryBand>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
}

/// A single record in the companies collection.
///
/// Only the identifier is guaranteed. Empty `benefits` or `skills` lists are
/// equivalent to the field being unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    id: CompanyId,
    name: Option<String>,
    location: Option<String>,
    headcount: Option<Headcount>,
    salary_band: Option<SalaryBand>,
    benefits: Vec<String>,
    skills: Vec<String>,
}

impl Company {
    /// Assemble a company from its identifier and a draft of optional fields.
    #[must_use]
    pub fn new(id: CompanyId, draft: CompanyDraft) -> Self {
        let CompanyDraft {
            name,
            location,
            headcount,
            salary_band,
            benefits,
            skills,
        } = draft;
        Self {
            id,
            name,
            location,
            headcount,
            salary_band,
            benefits,
            skills,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> CompanyId {
        self.id
    }

    /// Display name, when specified.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-form location text, when specified.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Employee count, when specified.
    #[must_use]
    pub const fn headcount(&self) -> Option<Headcount> {
        self.headcount
    }

    /// Advertised salary band, when specified.
    #[must_use]
    pub const fn salary_band(&self) -> Option<SalaryBand> {
        self.salary_band
    }

    /// Offered benefits; empty when unspecified.
    #[must_use]
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    /// Skills listed in the hiring criteria; empty when unspecified.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}
