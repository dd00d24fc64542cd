//! Alias resolution: nickname or raw number → enrollment number.
//!
//! The alias table is parsed once from a JSON object (`{"JOHN": 75000123}`) and injected into
//! [`AliasResolver`]. A missing or malformed table is kept as an [`AliasState`] instead of failing
//! startup; resolution then only accepts numeric input.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::ResolveError;

/// Enrollment number as used by the portal.
pub type EnrollmentNumber = u64;

/// Uppercase nickname → enrollment number. Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, EnrollmentNumber>,
}

impl AliasTable {
    /// Parses a JSON object of string keys to non-negative integers. Keys are uppercased.
    /// Any other shape (array, string values, negative numbers, trailing garbage) fails the whole table.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: BTreeMap<String, EnrollmentNumber> = serde_json::from_str(raw)?;
        Ok(parsed.into_iter().collect())
    }

    /// Looks up an alias; `alias` is uppercased first.
    pub fn get(&self, alias: &str) -> Option<EnrollmentNumber> {
        self.entries.get(&alias.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, EnrollmentNumber)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, EnrollmentNumber)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_uppercase(), v))
                .collect(),
        }
    }
}

/// Outcome of loading the alias configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasState {
    Loaded(AliasTable),
    /// No alias configuration was provided.
    Missing,
    /// Configuration was present but did not parse; holds the reason.
    Invalid(String),
}

impl AliasState {
    /// Builds the state from the raw configuration value (e.g. `ENROLLMENT_ALIASES`).
    pub fn from_config_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => AliasState::Missing,
            Some(raw) => match AliasTable::from_json(raw) {
                Ok(table) => {
                    if table.is_empty() {
                        warn!("Alias table is empty; only numeric input will resolve");
                    } else {
                        debug!(aliases = table.len(), "Alias table loaded");
                    }
                    AliasState::Loaded(table)
                }
                Err(e) => {
                    warn!(error = %e, "Alias table is malformed; only numeric input will resolve");
                    AliasState::Invalid(e.to_string())
                }
            },
        }
    }

    fn unavailable_reason(&self) -> Option<String> {
        match self {
            AliasState::Loaded(_) => None,
            AliasState::Missing => Some("no alias table configured".to_string()),
            AliasState::Invalid(reason) => Some(format!("malformed alias table: {}", reason)),
        }
    }
}

/// Maps user input to an enrollment number: alias lookup (case-insensitive) first, then integer parse.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    aliases: AliasState,
}

impl AliasResolver {
    pub fn new(aliases: AliasState) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasState {
        &self.aliases
    }

    /// Resolves trimmed `input`. Unknown non-numeric input yields [`ResolveError::Unrecognized`]
    /// when the table is loaded and [`ResolveError::Config`] when it is missing or malformed.
    pub fn resolve(&self, input: &str) -> Result<EnrollmentNumber, ResolveError> {
        let input = input.trim();

        if let AliasState::Loaded(table) = &self.aliases {
            if let Some(number) = table.get(input) {
                debug!(alias = %input, enrollment = number, "Resolved alias");
                return Ok(number);
            }
        }

        if let Ok(number) = input.parse::<EnrollmentNumber>() {
            return Ok(number);
        }

        match self.aliases.unavailable_reason() {
            Some(reason) => Err(ResolveError::Config {
                input: input.to_string(),
                reason,
            }),
            None => Err(ResolveError::Unrecognized {
                input: input.to_string(),
            }),
        }
    }
}
