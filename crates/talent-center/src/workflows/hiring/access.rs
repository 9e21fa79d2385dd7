use rand::Rng;
use serde::Serialize;

pub const ACCESS_CODE_PREFIX: &str = "GCC";
pub const ACCESS_CODE_SUFFIX_LEN: usize = 5;

// Uppercase letters and digits without 0/O, 1/I/L.
const ACCESS_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

pub const ACCESS_CONFIRMED_MESSAGE: &str = "Access confirmed. Taking you to your dashboard...";
pub const ACCESS_MISMATCH_MESSAGE: &str =
    "That code doesn't match. Please check and try again, or use the code from your completion screen.";
pub const ACCESS_NO_CODE_MESSAGE: &str =
    "Please complete the hiring request flow first to receive your access code. Start from the homepage.";

/// Produces a fresh `GCC-XXXXX` code on every call.
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ACCESS_CODE_SUFFIX_LEN)
        .map(|_| {
            let index = rng.random_range(0..ACCESS_CODE_ALPHABET.len());
            ACCESS_CODE_ALPHABET[index] as char
        })
        .collect();
    format!("{ACCESS_CODE_PREFIX}-{suffix}")
}

/// Uppercases and strips every whitespace character.
pub fn normalize_access_code(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    NoCodeYet,
    AwaitingEntry,
    Verified,
}

/// Result of a single code submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Input was blank after normalization; nothing was checked.
    Ignored,
    Verified { message: &'static str },
    Rejected { message: &'static str },
    NoCodeYet { message: &'static str },
}

impl AccessDecision {
    pub fn is_verified(&self) -> bool {
        matches!(self, AccessDecision::Verified { .. })
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Ignored => None,
            AccessDecision::Verified { message }
            | AccessDecision::Rejected { message }
            | AccessDecision::NoCodeYet { message } => Some(*message),
        }
    }
}

/// Gate in front of the dashboard.
///
/// A mismatch is reported through [`AccessDecision::Rejected`] and returns the gate to
/// `AwaitingEntry`; retries are unlimited.
#[derive(Debug, Clone)]
pub struct AccessGate {
    stored_code: Option<String>,
    state: AccessState,
}

impl AccessGate {
    pub fn new(stored_code: Option<&str>) -> Self {
        let stored_code = stored_code
            .map(normalize_access_code)
            .filter(|code| !code.is_empty());
        let state = if stored_code.is_some() {
            AccessState::AwaitingEntry
        } else {
            AccessState::NoCodeYet
        };
        Self { stored_code, state }
    }

    pub fn state(&self) -> AccessState {
        self.state
    }

    pub fn submit(&mut self, input: &str) -> AccessDecision {
        let candidate = normalize_access_code(input);
        if candidate.is_empty() {
            return AccessDecision::Ignored;
        }

        match &self.stored_code {
            None => AccessDecision::NoCodeYet {
                message: ACCESS_NO_CODE_MESSAGE,
            },
            Some(stored) if *stored == candidate => {
                self.state = AccessState::Verified;
                AccessDecision::Verified {
                    message: ACCESS_CONFIRMED_MESSAGE,
                }
            }
            Some(_) => {
                self.state = AccessState::AwaitingEntry;
                AccessDecision::Rejected {
                    message: ACCESS_MISMATCH_MESSAGE,
                }
            }
        }
    }
}

/// One-shot verification against a stored code.
pub fn verify_access_code(stored_code: Option<&str>, input: &str) -> AccessDecision {
    AccessGate::new(stored_code).submit(input)
}
