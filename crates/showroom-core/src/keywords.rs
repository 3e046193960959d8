//! Catalog name → ordered match keywords.
//!
//! The rule table is configuration data. Rules are evaluated top to bottom
//! and the first rule with a trigger contained in the (lowercased) name wins,
//! so trim-specific rules must sit above the model line they belong to.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// `(triggers, keywords)` in evaluation order.
const BUILTIN_RULES: &[(&[&str], &[&str])] = &[
    (
        &["civic type r"],
        &["civic type r", "type r", "civic sport"],
    ),
    (&["civic rs"], &["civic rs", "civic sedan rs", "all new civic rs"]),
    (
        &["city hatchback rs"],
        &["city hatchback rs", "city hb rs", "honda city hatchback"],
    ),
    (
        &["accord rs e:hev"],
        &["accord rs e:hev", "accord hybrid", "all new accord"],
    ),
    (
        &["cr-v rs e:hev"],
        &["cr-v rs e:hev", "crv rs hybrid", "all new cr-v hybrid"],
    ),
    (&["brio"], &["brio", "brio rs", "brio satya"]),
    (&["hr-v", "hrv"], &["hr-v", "hrv", "all new hr-v"]),
    (&["cr-v", "crv"], &["cr-v", "crv", "all new cr-v"]),
    (&["civic"], &["civic"]),
    (&["accord"], &["accord"]),
    (&["wr-v", "wrv"], &["wr-v", "wrv", "honda wr-v"]),
    (&["br-v", "brv"], &["br-v", "brv", "all new br-v"]),
    (&["city hatchback"], &["city hatchback", "city hb"]),
    (&["city"], &["city", "honda city sedan"]),
];

const BUILTIN_FILLER_WORDS: &[&str] = &["honda", "all", "new"];

/// Name tokens shorter than this are dropped by the fallback tokenizer.
const DEFAULT_MIN_TOKEN_LEN: usize = 3;

fn default_min_token_len() -> usize {
    DEFAULT_MIN_TOKEN_LEN
}

/// Ordered, lowercase match keywords for one catalog item, most specific
/// first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Builds a set from explicit keywords. Returns `None` when `keywords`
    /// is empty.
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Option<Self> {
        if keywords.is_empty() {
            None
        } else {
            Some(Self(keywords.into_iter().map(|k| k.to_lowercase()).collect()))
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// The most specific keyword.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.0[0]
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One `(triggers, keywords)` row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Case-insensitive substrings of the item name that select this rule.
    pub triggers: Vec<String>,
    pub keywords: Vec<String>,
}

/// Rule table as it appears in a keyword rules YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRules {
    pub rules: Vec<KeywordRule>,
    /// Generic words dropped by the fallback tokenizer (brand name, "new").
    #[serde(default)]
    pub filler_words: Vec<String>,
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            rules: BUILTIN_RULES
                .iter()
                .map(|(triggers, keywords)| KeywordRule {
                    triggers: to_strings(triggers),
                    keywords: to_strings(keywords),
                })
                .collect(),
            filler_words: to_strings(BUILTIN_FILLER_WORDS),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

/// Maps catalog item names to [`KeywordSet`]s using a rule table.
#[derive(Debug, Clone)]
pub struct KeywordResolver {
    rules: Vec<KeywordRule>,
    filler_words: HashSet<String>,
    min_token_len: usize,
}

impl Default for KeywordResolver {
    fn default() -> Self {
        // The built-in table is lowercase and non-empty by construction.
        Self::from_validated(KeywordRules::default())
    }
}

impl KeywordResolver {
    /// Builds a resolver from a rule table, lowercasing triggers and
    /// keywords.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a rule has no triggers, no
    /// keywords, or contains a blank entry.
    pub fn new(rules: KeywordRules) -> Result<Self, ConfigError> {
        for (idx, rule) in rules.rules.iter().enumerate() {
            if rule.triggers.is_empty() || rule.keywords.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keyword rule #{} must have at least one trigger and one keyword",
                    idx + 1
                )));
            }
            let blank = rule
                .triggers
                .iter()
                .chain(&rule.keywords)
                .any(|s| s.trim().is_empty());
            if blank {
                return Err(ConfigError::Validation(format!(
                    "keyword rule #{} contains a blank trigger or keyword",
                    idx + 1
                )));
            }
        }

        if rules.min_token_len == 0 {
            return Err(ConfigError::Validation(
                "min_token_len must be at least 1".to_string(),
            ));
        }

        Ok(Self::from_validated(rules))
    }

    /// Load a rule table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_yaml_named(&content, &path.display().to_string())
    }

    /// Parse a rule table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text cannot be parsed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_named(yaml, "<inline keyword rules>")
    }

    fn from_yaml_named(yaml: &str, name: &str) -> Result<Self, ConfigError> {
        let rules: KeywordRules =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::FileParse {
                path: name.to_string(),
                source: e,
            })?;

        Self::new(rules)
    }

    fn from_validated(rules: KeywordRules) -> Self {
        let lower_all = |items: Vec<String>| -> Vec<String> {
            items.into_iter().map(|s| s.trim().to_lowercase()).collect()
        };

        Self {
            rules: rules
                .rules
                .into_iter()
                .map(|rule| KeywordRule {
                    triggers: lower_all(rule.triggers),
                    keywords: lower_all(rule.keywords),
                })
                .collect(),
            filler_words: rules
                .filler_words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .collect(),
            min_token_len: rules.min_token_len,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Resolves `name` to its match keywords.
    ///
    /// Returns the keywords of the first rule with a trigger contained in
    /// the lowercased name. Without a matching rule, falls back to the
    /// name's whitespace-separated tokens minus short and filler words, and
    /// finally to the whole trimmed, lowercased name. A blank name yields a
    /// single empty keyword, which the matchers never match.
    #[must_use]
    pub fn resolve(&self, name: &str) -> KeywordSet {
        let lower = name.trim().to_lowercase();

        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| lower.contains(t.as_str())))
        {
            return KeywordSet(rule.keywords.clone());
        }

        let tokens: Vec<String> = lower
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_token_len)
            .filter(|word| !self.filler_words.contains(*word))
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            KeywordSet(vec![lower])
        } else {
            KeywordSet(tokens)
        }
    }
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
