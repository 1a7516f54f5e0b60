//! Terminal rendering for the console views.
//!
//! Mirrors the web UI's copy: the same headings, fallback literals, and
//! empty-state sentences, with ANSI colour standing in for the theme. All
//! functions return plain strings so tests can assert on the output.

use std::fmt::Write as _;

use crate::dto::{CompanyDto, CountDto, ItemsDto};
use crate::view::ViewState;

/// How many skills or benefits a card lists before folding into `+N more`.
const CARD_LIST_LIMIT: usize = 3;

/// Colour palette selection, matching the UI's light and dark themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Darker accents for light terminal backgrounds.
    Light,
    /// Brighter accents for dark terminal backgrounds.
    Dark,
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    heading: &'static str,
    accent: &'static str,
    dim: &'static str,
    error: &'static str,
    reset: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    heading: "\x1b[1;34m",
    accent: "\x1b[32m",
    dim: "\x1b[2m",
    error: "\x1b[1;31m",
    reset: "\x1b[0m",
};

const DARK_PALETTE: Palette = Palette {
    heading: "\x1b[1;96m",
    accent: "\x1b[92m",
    dim: "\x1b[90m",
    error: "\x1b[1;91m",
    reset: "\x1b[0m",
};

impl ColorMode {
    const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

/// Company size bands shown next to the headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// Fewer than 1000 employees.
    Small,
    /// 1000 to 4999 employees.
    Medium,
    /// 5000 employees or more.
    Large,
}

impl SizeTier {
    /// Band for a known headcount.
    #[must_use]
    pub const fn from_headcount(headcount: u32) -> Self {
        if headcount < 1_000 {
            Self::Small
        } else if headcount < 5_000 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Chip text for the band.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Tier label for an optional headcount. A company without one reads
/// `Size not specified` instead of defaulting into a band.
#[must_use]
pub fn size_tier_label(headcount: Option<u32>) -> &'static str {
    headcount.map_or("Size not specified", |count| {
        SizeTier::from_headcount(count).label()
    })
}

/// Formats rupees with Indian digit grouping, e.g. `₹24,00,000`.
#[must_use]
pub fn format_inr(amount: i64) -> String {
    let grouped = group_indian(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats a count with the same digit grouping the salaries use.
#[must_use]
pub fn format_count(value: u64) -> String {
    group_indian(&value.to_string())
}

/// Indian grouping: the last three digits form one group, the rest pair up.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    groups.join(",")
}

/// Joins up to [`CARD_LIST_LIMIT`] entries, folding the rest into `+N more`.
fn list_preview(entries: &[String]) -> String {
    let shown = entries
        .iter()
        .take(CARD_LIST_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let hidden = entries.len().saturating_sub(CARD_LIST_LIMIT);
    if hidden == 0 {
        shown
    } else {
        format!("{shown} +{hidden} more")
    }
}

/// Extra decoration applied to a company card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Name, headcount, location, salary, skills, and benefits.
    Standard,
    /// Adds the size tier next to the headcount.
    SizeTiered,
    /// Adds the position and any bonus; used by the top-paid view.
    Ranked(usize),
}

/// Renders one company as an indented card.
#[must_use]
pub fn render_company_card(company: &CompanyDto, variant: CardVariant, mode: ColorMode) -> String {
    let palette = mode.palette();
    let mut out = String::new();

    let name = company.name.as_deref().unwrap_or("Unknown Company");
    let _ = writeln!(out, "{}{name}{}", palette.heading, palette.reset);

    if let CardVariant::Ranked(rank) = variant {
        let _ = writeln!(out, "  {}Rank #{rank}{}", palette.accent, palette.reset);
    }

    let employees = company.headcount.map_or_else(
        || "Not specified".to_owned(),
        |count| format_count(u64::from(count)),
    );
    if matches!(variant, CardVariant::SizeTiered) {
        let tier = size_tier_label(company.headcount);
        let _ = writeln!(out, "  Employees: {employees} · {tier}");
    } else {
        let _ = writeln!(out, "  Employees: {employees}");
    }

    let location = company.location.as_deref().unwrap_or("Location not specified");
    let _ = writeln!(out, "  {}{location}{}", palette.dim, palette.reset);

    let salary = company
        .base_salary()
        .map_or_else(|| "Not specified".to_owned(), format_inr);
    let _ = writeln!(out, "  Salary: {salary}");

    if matches!(variant, CardVariant::Ranked(_)) {
        if let Some(bonus) = company.bonus() {
            let _ = writeln!(
                out,
                "  {}Bonus: {}{}",
                palette.accent,
                format_inr(bonus),
                palette.reset
            );
        }
    }

    if !company.skills().is_empty() {
        let _ = writeln!(out, "  Skills: {}", list_preview(company.skills()));
    }
    if !company.benefits.is_empty() {
        let _ = writeln!(out, "  Benefits: {}", list_preview(&company.benefits));
    }

    out
}

fn push_cards(
    out: &mut String,
    items: &[CompanyDto],
    variant_for: impl Fn(usize) -> CardVariant,
    mode: ColorMode,
) {
    for (index, company) in items.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_company_card(company, variant_for(index), mode));
    }
}

/// Renders the shared idle/loading/error/success skeleton of a list view.
fn push_list_outcome(
    out: &mut String,
    state: &ViewState<ItemsDto>,
    mode: ColorMode,
    error_prefix: &str,
    empty_copy: &str,
    found_copy: impl FnOnce(usize) -> Option<String>,
    variant_for: impl Fn(usize) -> CardVariant,
) {
    let palette = mode.palette();
    match state {
        ViewState::Idle => {
            let _ = writeln!(out, "No request issued yet.");
        }
        ViewState::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        ViewState::Error(message) => {
            let _ = writeln!(
                out,
                "{}{error_prefix}{message}{}",
                palette.error, palette.reset
            );
        }
        ViewState::Success(payload) if payload.items.is_empty() => {
            let _ = writeln!(out, "{empty_copy}");
        }
        ViewState::Success(payload) => {
            if let Some(line) = found_copy(payload.items.len()) {
                let _ = writeln!(out, "{line}");
            }
            push_cards(out, &payload.items, variant_for, mode);
        }
    }
}

/// Which term query produced a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// Case-insensitive substring match on the location.
    Location,
    /// Exact match against the hiring skills.
    Skill,
    /// Exact match against the offered benefits.
    Benefit,
}

impl TermKind {
    const fn title(self) -> &'static str {
        match self {
            Self::Location => "Companies by Location",
            Self::Skill => "Companies by Skill",
            Self::Benefit => "Companies by Benefits",
        }
    }

    const fn chip_label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Skill => "Skill",
            Self::Benefit => "Benefit",
        }
    }

    fn empty_copy(self, term: &str) -> String {
        match self {
            Self::Location => format!("No companies found in \"{term}\"."),
            Self::Skill => format!("No companies found requiring the skill \"{term}\"."),
            Self::Benefit => format!("No companies found offering \"{term}\" benefit."),
        }
    }

    fn found_copy(self, count: usize, term: &str) -> String {
        match self {
            Self::Location => format!("Found {count} companies in \"{term}\""),
            Self::Skill => format!("Found {count} companies requiring \"{term}\""),
            Self::Benefit => format!("Found {count} companies offering \"{term}\""),
        }
    }
}

/// Renders the total-count view.
#[must_use]
pub fn render_count(state: &ViewState<CountDto>, mode: ColorMode) -> String {
    let palette = mode.palette();
    let mut out = String::new();
    let _ = writeln!(out, "{}Total Companies{}", palette.heading, palette.reset);
    match state {
        ViewState::Idle => {
            let _ = writeln!(out, "No request issued yet.");
        }
        ViewState::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        ViewState::Error(message) => {
            let _ = writeln!(
                out,
                "{}Failed to load companies count: {message}{}",
                palette.error, palette.reset
            );
        }
        ViewState::Success(count) => {
            let _ = writeln!(
                out,
                "{}{}{}",
                palette.accent,
                format_count(count.total),
                palette.reset
            );
            let _ = writeln!(out, "{}Companies in our database{}", palette.dim, palette.reset);
        }
    }
    out
}

/// Renders the top-paid view; cards are ranked from 1 in response order.
#[must_use]
pub fn render_top_paid(state: &ViewState<ItemsDto>, mode: ColorMode) -> String {
    let palette = mode.palette();
    let mut out = String::new();
    let _ = writeln!(out, "{}Top Paid Companies{}", palette.heading, palette.reset);
    let _ = writeln!(
        out,
        "{}Companies offering the highest base salaries{}",
        palette.dim, palette.reset
    );
    push_list_outcome(
        &mut out,
        state,
        mode,
        "Failed to load top paid companies: ",
        "No companies found in the database.",
        |_| None,
        |index| CardVariant::Ranked(index + 1),
    );
    out
}

/// Renders the headcount-range view with the queried bounds echoed back.
#[must_use]
pub fn render_headcount_range(
    state: &ViewState<ItemsDto>,
    min: Option<i64>,
    max: Option<i64>,
    mode: ColorMode,
) -> String {
    let palette = mode.palette();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Companies by Headcount Range{}",
        palette.heading, palette.reset
    );
    let _ = writeln!(out, "{}{}{}", palette.accent, range_chip(min, max), palette.reset);
    push_list_outcome(
        &mut out,
        state,
        mode,
        "Failed to load companies: ",
        "No companies found with headcount in the specified range.",
        |count| Some(format!("Found {count} companies in the specified headcount range")),
        |_| CardVariant::SizeTiered,
    );
    out
}

/// Renders a location, skill, or benefit view for `term`.
#[must_use]
pub fn render_term_view(
    kind: TermKind,
    term: &str,
    state: &ViewState<ItemsDto>,
    mode: ColorMode,
) -> String {
    let palette = mode.palette();
    let mut out = String::new();
    let _ = writeln!(out, "{}{}{}", palette.heading, kind.title(), palette.reset);
    let _ = writeln!(
        out,
        "{}{}: {term}{}",
        palette.accent,
        kind.chip_label(),
        palette.reset
    );
    push_list_outcome(
        &mut out,
        state,
        mode,
        "Failed to load companies: ",
        &kind.empty_copy(term),
        |count| Some(kind.found_copy(count, term)),
        |_| CardVariant::Standard,
    );
    out
}

fn range_chip(min: Option<i64>, max: Option<i64>) -> String {
    let floor = min.unwrap_or(0);
    match max {
        Some(ceiling) => format!("Headcount: {floor} - {ceiling} employees"),
        None => format!("Headcount: {floor}+ employees"),
    }
}
