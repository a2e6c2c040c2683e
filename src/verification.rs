//! Verification gate: keeps the commit control disabled until the user types
//! the required literal or something matching the required pattern.

use regex::{Regex, RegexBuilder};

/// What the verification input must contain
#[derive(Debug, Clone)]
pub enum Requirement {
    /// Exact string equality with the literal
    Literal { text: String, strip_alpha: bool },
    /// Successful search of the pattern in the input. `None` when the pattern
    /// did not compile; such a gate never opens.
    Pattern(Option<Regex>),
}

impl Requirement {
    pub fn literal(text: impl Into<String>) -> Self {
        Requirement::Literal {
            text: text.into(),
            strip_alpha: false,
        }
    }

    /// Literal compared against the input with everything but word characters
    /// and whitespace removed
    pub fn stripped_literal(text: impl Into<String>) -> Self {
        Requirement::Literal {
            text: text.into(),
            strip_alpha: true,
        }
    }

    pub fn pattern(source: &str, case_insensitive: bool) -> Self {
        match RegexBuilder::new(source).case_insensitive(case_insensitive).build() {
            Ok(regex) => Requirement::Pattern(Some(regex)),
            Err(e) => {
                log::warn!("Verification pattern '{}' does not compile, commit stays disabled: {}", source, e);
                Requirement::Pattern(None)
            }
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            Requirement::Literal { text, strip_alpha: false } => text == input,
            Requirement::Literal { text, strip_alpha: true } => *text == strip_non_word(input),
            Requirement::Pattern(Some(regex)) => regex.is_match(input),
            Requirement::Pattern(None) => false,
        }
    }
}

fn strip_non_word(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Live state of a verification input
#[derive(Debug, Clone)]
pub struct VerificationGate {
    requirement: Requirement,
    input: String,
    commit_enabled: bool,
}

impl VerificationGate {
    /// Gates start closed, even for a requirement the empty input satisfies
    pub fn new(requirement: Requirement) -> Self {
        Self {
            requirement,
            input: String::new(),
            commit_enabled: false,
        }
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn commit_enabled(&self) -> bool {
        self.commit_enabled
    }

    /// Replace the input value and recompute; returns the new commit state
    pub fn update(&mut self, input: &str) -> bool {
        self.input = input.to_string();
        self.commit_enabled = self.requirement.matches(&self.input);
        self.commit_enabled
    }

    /// Clear the input and close the gate
    pub fn reset(&mut self) {
        self.input.clear();
        self.commit_enabled = false;
    }
}
