/*!
 * Rule engine: ordered (pattern, replacement) tables applied to event text.
 *
 * Patterns use `fancy_regex`, so tables can rely on lookahead, lookbehind,
 * back-references and non-greedy or counted quantifiers. A replacement is
 * either a literal template (`$1`, `${name}`) or a plain function over the
 * captures, used for character-class conversions.
 */

use fancy_regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::RuleError;
use crate::subtitle_processor::SubtitleEntry;

/// Callback replacer: receives the captures of one match
pub type ReplaceFn = fn(&Captures<'_>) -> String;

/// What a matched span is replaced with.
#[derive(Clone)]
pub enum Replacement {
    /// Template with back-references
    Literal(String),
    /// Computed from the captures
    Callback(ReplaceFn),
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// A compiled pattern paired with its replacement.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    /// Compile a rule with a literal replacement template.
    pub fn literal(table: &str, pattern: &str, replacement: &str) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: compile(table, pattern)?,
            replacement: Replacement::Literal(replacement.to_string()),
        })
    }

    /// Compile a rule whose replacement is computed by `replacer`.
    pub fn callback(table: &str, pattern: &str, replacer: ReplaceFn) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: compile(table, pattern)?,
            replacement: Replacement::Callback(replacer),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Replace every non-overlapping match in `text`.
    pub fn apply(&self, text: &str) -> Result<String, RuleError> {
        let replaced = match &self.replacement {
            Replacement::Literal(template) => self.pattern.try_replacen(text, 0, template.as_str()),
            Replacement::Callback(replacer) => {
                self.pattern.try_replacen(text, 0, |caps: &Captures<'_>| replacer(caps))
            }
        };

        replaced
            .map(|cow| cow.into_owned())
            .map_err(|e| RuleError::Matching {
                pattern: self.pattern.as_str().to_string(),
                message: e.to_string(),
            })
    }
}

fn compile(table: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        table: table.to_string(),
        pattern: pattern.to_string(),
        source: Box::new(source),
    })
}

/// Serializable rule, as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// A named, ordered list of rules. Later rules see the output of earlier ones.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Compile a table of literal rules. The first bad pattern aborts.
    pub fn compile(name: &str, specs: &[(&str, &str)]) -> Result<Self, RuleError> {
        let rules = specs
            .iter()
            .map(|(pattern, replacement)| Rule::literal(name, pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    /// Compile a one-to-one character table; both sides are taken verbatim.
    pub fn compile_literal_map(name: &str, pairs: &[(&str, &str)]) -> Result<Self, RuleError> {
        let rules = pairs
            .iter()
            .map(|(from, to)| Rule::literal(name, &fancy_regex::escape(from), &to.replace('$', "$$")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    /// Compile user supplied rules
    pub fn from_specs(name: &str, specs: &[RuleSpec]) -> Result<Self, RuleError> {
        let rules = specs
            .iter()
            .map(|spec| Rule::literal(name, &spec.pattern, &spec.replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            rules,
        })
    }

    pub fn from_rules(name: &str, rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            rules,
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append the rules of `other` after this table's rules
    pub fn extend(&mut self, other: RuleTable) {
        self.rules.extend(other.rules);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule, in order, over one string.
    pub fn apply_to_text(&self, text: &str) -> Result<String, RuleError> {
        let mut current = text.to_string();
        for rule in &self.rules {
            current = rule.apply(&current)?;
        }
        Ok(current)
    }

    /// Run the table over every dialogue entry's text, in place.
    /// Returns how many entries changed.
    pub fn apply(&self, entries: &mut [SubtitleEntry]) -> Result<usize, RuleError> {
        let mut changed = 0;
        for entry in entries.iter_mut().filter(|e| e.is_dialogue()) {
            let rewritten = self.apply_to_text(&entry.text)?;
            if rewritten != entry.text {
                entry.text = rewritten;
                changed += 1;
            }
        }
        Ok(changed)
    }
}
