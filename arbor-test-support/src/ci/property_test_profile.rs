//! Environment-driven tuning for proptest suites.
//!
//! `ARBOR_PBT_CASES` sets the number of cases per property and
//! `ARBOR_PBT_FORK` runs each case in a forked subprocess. Invalid values
//! are logged and replaced by the suite's defaults.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const ARBOR_PBT_CASES_ENV_KEY: &str = "ARBOR_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Why an override was ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverrideError {
    /// The case count is not a base-10 `u32`.
    #[error("case count `{raw}` is not an unsigned integer")]
    NotANumber {
        /// The trimmed override.
        raw: String,
    },
    /// A case count of zero would skip the property entirely.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag is not one of the accepted spellings.
    #[error("fork flag `{raw}` is not one of true/false/1/0/yes/no/on/off")]
    NotABool {
        /// The trimmed override.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile through `lookup`, which maps a variable name to its
    /// value when set.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "ARBOR_PBT_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(&lookup, ARBOR_PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, ARBOR_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, OverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

/// Parses a strictly positive case count.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: trimmed.to_owned(),
        }),
    }
}

/// Parses a case-insensitive boolean flag.
pub fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: trimmed.to_owned(),
        }),
    }
}
