//! Password strength rules for the signup form.
//!
//! DESIGN
//! ======
//! Two checks coexist and are intentionally not unified:
//!
//! - the itemized evaluator ([`evaluate_strength`]) scores five independent
//!   rules; it drives live per-rule feedback and gates submission.
//! - the combined pattern ([`STRONG_PASSWORD_PATTERN`]) is a single-shot
//!   check kept for callers that want one boolean. It additionally rejects
//!   line terminators, so a password can pass the itemized rules and still
//!   fail the pattern.
//!
//! Lengths are counted in UTF-16 code units so results agree with browser
//! `String.length` for the same input.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: &str = "@$!%*?&";

/// Combined strength pattern in browser regex syntax.
///
/// Evaluated by [`matches_strong_pattern`]; the `regex` crate has no
/// lookaround, so the lookaheads are checked as separate scans.
pub const STRONG_PASSWORD_PATTERN: &str = r"^(?=[^A-Z]*[A-Z])(?=[^a-z]*[a-z])(?=\D*\d)(?=.*[@$!%*?&]).{8,}$";

static UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]").expect("upper regex is valid"));
static LOWER: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]").expect("lower regex is valid"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]").expect("digit regex is valid"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@$!%*?&]").expect("special regex is valid"));
// `.` in the browser pattern stops at these four terminators.
static SINGLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[^\n\r\u{2028}\u{2029}]*$").expect("single-line regex is valid"));

/// One of the five independent password rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    MinLength,
    HasUpper,
    HasLower,
    HasNumber,
    HasSpecial,
}

impl Requirement {
    /// All rules in display order.
    pub const ALL: [Self; 5] = [
        Self::MinLength,
        Self::HasUpper,
        Self::HasLower,
        Self::HasNumber,
        Self::HasSpecial,
    ];

    /// Checklist label shown next to the rule.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MinLength => "Mínimo de 8 caracteres",
            Self::HasUpper => "Uma letra maiúscula",
            Self::HasLower => "Uma letra minúscula",
            Self::HasNumber => "Um número",
            Self::HasSpecial => "Um caractere especial (@$!%*?&)",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five boolean facts about one password, always computed together.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordRequirements {
    /// Whether a single rule holds.
    #[must_use]
    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::MinLength => self.min_length,
            Requirement::HasUpper => self.has_upper,
            Requirement::HasLower => self.has_lower,
            Requirement::HasNumber => self.has_number,
            Requirement::HasSpecial => self.has_special,
        }
    }

    /// True iff every rule holds.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        Requirement::ALL.iter().all(|r| self.is_met(*r))
    }

    /// Each rule paired with its current state, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::ALL.into_iter().map(move |r| (r, self.is_met(r)))
    }

    /// Rules that do not hold yet.
    #[must_use]
    pub fn unmet(&self) -> Vec<Requirement> {
        self.iter().filter(|(_, met)| !met).map(|(r, _)| r).collect()
    }
}

/// Score `password` against all five rules.
///
/// Total and deterministic: every rule is computed on every call.
#[must_use]
pub fn evaluate_strength(password: &str) -> PasswordRequirements {
    PasswordRequirements {
        min_length: utf16_len(password) >= MIN_PASSWORD_LEN,
        has_upper: UPPER.is_match(password),
        has_lower: LOWER.is_match(password),
        has_number: DIGIT.is_match(password),
        has_special: SPECIAL.is_match(password),
    }
}

/// Like [`evaluate_strength`], treating an absent value as empty.
#[must_use]
pub fn evaluate_optional(password: Option<&str>) -> PasswordRequirements {
    evaluate_strength(password.unwrap_or_default())
}

/// True iff `password` satisfies all five rules.
#[must_use]
pub fn is_strong(password: &str) -> bool {
    evaluate_strength(password).is_satisfied()
}

/// Exact, case-sensitive comparison. No trimming.
#[must_use]
pub fn passwords_match(password: &str, password_confirm: &str) -> bool {
    password == password_confirm
}

/// Single-shot check equivalent to [`STRONG_PASSWORD_PATTERN`].
#[must_use]
pub fn matches_strong_pattern(password: &str) -> bool {
    SINGLE_LINE.is_match(password)
        && utf16_len(password) >= MIN_PASSWORD_LEN
        && UPPER.is_match(password)
        && LOWER.is_match(password)
        && DIGIT.is_match(password)
        && SPECIAL.is_match(password)
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Holds the most recent [`PasswordRequirements`] for live UI feedback.
///
/// Every [`PasswordMeter::evaluate`] recomputes from its input; the stored
/// value is only a snapshot for readers and is never consulted as a cache.
#[derive(Clone, Debug, Default)]
pub struct PasswordMeter {
    last: Option<PasswordRequirements>,
}

impl PasswordMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `password`, record the result, and return it.
    pub fn evaluate(&mut self, password: &str) -> PasswordRequirements {
        let requirements = evaluate_strength(password);
        self.last = Some(requirements);
        requirements
    }

    /// Requirements from the latest evaluation, if any.
    #[must_use]
    pub fn last(&self) -> Option<PasswordRequirements> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
