//! Company-name to ticker-symbol resolution.
//!
//! Lookup is an exact, case-insensitive match on the full input. Anything that
//! is not a known alias is assumed to already be a ticker and is returned as-is.

use std::collections::BTreeSet;
use std::sync::LazyLock;

const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("AAPL", &["apple", "apple inc."]),
    ("GOOGL", &["google", "alphabet inc. class a"]),
    ("AMZN", &["amazon", "amazon.com, inc."]),
    ("MSFT", &["microsoft", "microsoft corporation"]),
];

static DEFAULT_RESOLVER: LazyLock<TickerResolver> = LazyLock::new(TickerResolver::default);

/// One group of accepted names for a canonical symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerAlias {
    aliases: BTreeSet<String>,
    canonical_symbol: String,
}

impl TickerAlias {
    pub fn new<I, S>(canonical_symbol: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|alias| alias.as_ref().to_lowercase())
                .collect(),
            canonical_symbol: canonical_symbol.into(),
        }
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    pub fn canonical_symbol(&self) -> &str {
        &self.canonical_symbol
    }

    fn matches(&self, lowered: &str) -> bool {
        self.aliases.contains(lowered)
    }
}

/// Immutable alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerResolver {
    table: Vec<TickerAlias>,
}

impl Default for TickerResolver {
    fn default() -> Self {
        Self::new(
            BUILTIN_ALIASES
                .iter()
                .map(|(symbol, names)| TickerAlias::new(*symbol, names.iter())),
        )
    }
}

impl TickerResolver {
    /// Builds a resolver over a custom table.
    ///
    /// Resolution is a single lookup. If a canonical symbol of one group is
    /// also an alias of another group, resolving the result again moves on to
    /// that second symbol, so such tables are not idempotent.
    pub fn new(table: impl IntoIterator<Item = TickerAlias>) -> Self {
        Self {
            table: table.into_iter().collect(),
        }
    }

    pub fn aliases(&self) -> &[TickerAlias] {
        &self.table
    }

    /// Canonical symbol for `name` when it is a known alias.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        self.table
            .iter()
            .find(|entry| entry.matches(&lowered))
            .map(TickerAlias::canonical_symbol)
    }

    /// Returns the canonical symbol for a known alias, or `name` unchanged.
    pub fn resolve(&self, name: &str) -> String {
        match self.lookup(name) {
            Some(symbol) => {
                log::trace!("resolved '{name}' to {symbol}");
                symbol.to_owned()
            }
            None => name.to_owned(),
        }
    }
}

/// Resolves `name` against the built-in alias table.
pub fn resolve(name: &str) -> String {
    DEFAULT_RESOLVER.resolve(name)
}
