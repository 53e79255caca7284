//! BEM class composition.
//!
//! [`ClassList`] is an ordered list of CSS class tokens with fluent append
//! rules. Tokens are never deduplicated or reordered — components assert
//! exact class-string equality in tests, so insertion order is part of the
//! contract. Empty and whitespace-only tokens are rejected at insertion
//! time, which keeps `build()` a plain single-space join.

use std::fmt;

/// Mapping from a closed variant enum to its CSS token.
///
/// Implementations return the lowercase token for each case explicitly
/// rather than stringifying the variant name, so the full set of emitted
/// class names is visible in one `match`.
pub trait ClassToken {
    fn token(&self) -> &'static str;
}

/// Ordered, append-only CSS class builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create a builder seeded with an initial token. The initial token goes
    /// through the same filter as [`ClassList::add`].
    pub fn new(initial: &str) -> Self {
        let mut list = Self::default();
        list.add(initial);
        list
    }

    /// Append a token iff it is non-empty after trimming.
    pub fn add(&mut self, token: &str) -> &mut Self {
        let token = token.trim();
        if !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Append an optional token; `None` leaves the builder unchanged.
    pub fn add_opt(&mut self, token: Option<&str>) -> &mut Self {
        if let Some(token) = token {
            self.add(token);
        }
        self
    }

    /// Apply [`ClassList::add`] to each token in order.
    pub fn add_all<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
        self
    }

    /// Append a token iff the condition holds.
    pub fn add_if(&mut self, token: &str, condition: bool) -> &mut Self {
        if condition {
            self.add(token);
        }
        self
    }

    /// Append exactly one of two tokens based on the condition.
    pub fn add_choice(&mut self, condition: bool, when_true: &str, when_false: &str) -> &mut Self {
        self.add(if condition { when_true } else { when_false })
    }

    /// Append the BEM modifier `"{block}--{variant}"` iff a non-empty
    /// variant is present. Variant case is preserved as given.
    pub fn add_variant(&mut self, block: &str, variant: Option<&str>) -> &mut Self {
        if let Some(variant) = variant {
            if !variant.trim().is_empty() {
                self.tokens.push(format!("{}--{}", block, variant));
            }
        }
        self
    }

    /// Same shape as [`ClassList::add_variant`], kept separate because size
    /// is a distinct modifier axis on every component that has one.
    pub fn add_size(&mut self, block: &str, size: Option<&str>) -> &mut Self {
        self.add_variant(block, size)
    }

    /// Append `"{prefix}{token}"` for a closed variant enum value.
    pub fn add_enum<T: ClassToken>(&mut self, prefix: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.tokens.push(format!("{}{}", prefix, value.token()));
        }
        self
    }

    /// Tokens joined by single spaces, in insertion order; `""` when empty.
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build())
    }
}
