//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{IssuerScheme, Verdict};
use crate::core::services::CardValidator;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Why a card number ended up valid or invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    /// Scheme matched and checksum passed
    Valid,
    /// Scheme matched but checksum failed
    BadChecksum,
    /// No scheme matched
    Unrecognized,
}

impl From<Verdict> for CardStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid(_) => Self::Valid,
            Verdict::Invalid { matched: Some(_) } => Self::BadChecksum,
            Verdict::Invalid { matched: None } | Verdict::NotEvaluated => Self::Unrecognized,
        }
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::BadChecksum => write!(f, "bad checksum"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Validation report for one card number
#[derive(Debug, Serialize)]
pub struct CardReport {
    /// The number as displayed (masked unless revealed)
    pub number: String,
    /// Whether the number is valid
    pub valid: bool,
    /// Issuer name, empty when invalid
    pub issuer: String,
    /// Scheme whose pattern matched, even if the checksum failed
    pub matched_scheme: Option<String>,
    /// Outcome category
    pub status: CardStatus,
}

impl CardReport {
    /// Build a report from a validator, validating if needed
    #[must_use]
    pub fn from_validator(card: &CardValidator, mask: bool) -> Self {
        let result = card.result();
        let number = if mask {
            card.number().masked()
        } else {
            card.number().as_str().to_string()
        };

        Self {
            number,
            valid: result.valid,
            issuer: result.issuer_name().to_string(),
            matched_scheme: result.scheme.map(|s| s.name().to_string()),
            status: card.verdict().into(),
        }
    }
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every number was valid
    pub passed: bool,
    /// Number of card numbers checked
    pub checked: usize,
    /// Number of invalid card numbers
    pub invalid: usize,
    /// Per-number reports, in input order
    pub cards: Vec<CardReport>,
}

impl ValidateResult {
    /// Summarize a list of reports
    #[must_use]
    pub fn new(cards: Vec<CardReport>) -> Self {
        let invalid = cards.iter().filter(|c| !c.valid).count();
        Self {
            passed: invalid == 0,
            checked: cards.len(),
            invalid,
            cards,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.cards.is_empty() {
            println!("No card numbers given.");
            return;
        }

        for card in &self.cards {
            if card.valid {
                println!("  VALID    {}  {}", card.number, card.issuer);
            } else {
                match &card.matched_scheme {
                    Some(scheme) => {
                        println!("  INVALID  {}  ({}, looks like {scheme})", card.number, card.status);
                    },
                    None => println!("  INVALID  {}  ({})", card.number, card.status),
                }
            }
        }

        println!();
        if self.passed {
            println!("All {} card number(s) valid.", self.checked);
        } else {
            println!("{} of {} card number(s) invalid.", self.invalid, self.checked);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of an issuer lookup
#[derive(Debug, Serialize)]
pub struct IssuerResult {
    /// The number as displayed (masked unless revealed)
    pub number: String,
    /// Issuer name, empty when the number is invalid
    pub issuer: String,
}

impl IssuerResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.issuer),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Information about one issuer scheme
#[derive(Debug, Serialize)]
pub struct SchemeInfo {
    /// Scheme name
    pub name: String,
    /// Anchored pattern the normalized number must match
    pub pattern: String,
    /// Prefix/length rule in words
    pub description: String,
}

impl From<IssuerScheme> for SchemeInfo {
    fn from(scheme: IssuerScheme) -> Self {
        Self {
            name: scheme.name().to_string(),
            pattern: scheme.pattern().to_string(),
            description: scheme.description().to_string(),
        }
    }
}

/// Result of a scheme listing, in precedence order
#[derive(Debug, Serialize)]
pub struct SchemeListResult {
    /// Schemes in the order they are tried
    pub schemes: Vec<SchemeInfo>,
}

impl SchemeListResult {
    /// List every known scheme
    #[must_use]
    pub fn all() -> Self {
        Self {
            schemes: IssuerScheme::ALL.into_iter().map(SchemeInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Issuer schemes (first match wins):\n");
        for (i, s) in self.schemes.iter().enumerate() {
            println!("  {}. {:<10} {}", i + 1, s.name, s.description);
            println!("     {}\n", s.pattern);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
