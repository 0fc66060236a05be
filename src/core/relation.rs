//! Package relations (provides, requires, conflicts)
//!
//! A relation is written as `name [OP version]`, for example `bash`,
//! `glibc >= 2.28` or `openssl=3.0.7`.

use crate::error::{AssemblerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Version comparison of a relation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Comparator {
    /// No version constraint
    Any,
    Less,
    LessEq,
    Equal,
    GreaterEq,
    Greater,
}

impl Comparator {
    fn from_operator(op: &str) -> Option<Self> {
        match op {
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEq),
            "=" | "==" => Some(Self::Equal),
            ">=" => Some(Self::GreaterEq),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    /// Operator as written in a relation string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Equal => "=",
            Self::GreaterEq => ">=",
            Self::Greater => ">",
        }
    }
}

/// A parsed provides/requires/conflicts entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    pub name: String,
    pub comparator: Comparator,
    /// Empty when `comparator` is `Any`
    pub version: String,
}

impl Relation {
    /// Relation on any version of `name`
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comparator: Comparator::Any,
            version: String::new(),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.comparator {
            Comparator::Any => write!(f, "{}", self.name),
            op => write!(f, "{} {} {}", self.name, op.as_str(), self.version),
        }
    }
}

/// Reasons a relation string can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationParseError {
    #[error("relation is empty")]
    Empty,
    #[error("relation has no package name")]
    MissingName,
    #[error("operator '{0}' is not followed by a version")]
    MissingVersion(String),
    #[error("unexpected text in relation: '{0}'")]
    Malformed(String),
}

/// Capability to turn a raw relation string into a [`Relation`]
pub trait RelationParser {
    fn parse_relation(&self, raw: &str) -> std::result::Result<Relation, RelationParseError>;
}

/// Default relation parser
#[derive(Debug)]
pub struct RegexRelationParser {
    re_relation: Regex,
}

impl RegexRelationParser {
    /// Create a new relation parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_relation: Regex::new(r"^([^<>=\s]*)\s*(<=|>=|==|<|>|=)?\s*(.*)$")
                .map_err(|e| AssemblerError::config(format!("Failed to compile regex: {e}")))?,
        })
    }
}

impl RelationParser for RegexRelationParser {
    fn parse_relation(&self, raw: &str) -> std::result::Result<Relation, RelationParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RelationParseError::Empty);
        }

        let cap = self
            .re_relation
            .captures(raw)
            .ok_or_else(|| RelationParseError::Malformed(raw.to_string()))?;
        let name = cap.get(1).map_or("", |m| m.as_str());
        let op = cap.get(2).map(|m| m.as_str());
        let version = cap.get(3).map_or("", |m| m.as_str().trim());

        if name.is_empty() {
            return Err(RelationParseError::MissingName);
        }

        match op.and_then(Comparator::from_operator) {
            None if version.is_empty() => Ok(Relation::any(name)),
            // A name followed by more text without an operator
            None => Err(RelationParseError::Malformed(version.to_string())),
            Some(comparator) => {
                if version.is_empty() {
                    return Err(RelationParseError::MissingVersion(
                        comparator.as_str().to_string(),
                    ));
                }
                if version.chars().any(|c| c.is_whitespace() || "<>=".contains(c)) {
                    return Err(RelationParseError::Malformed(version.to_string()));
                }
                Ok(Relation {
                    name: name.to_string(),
                    comparator,
                    version: version.to_string(),
                })
            }
        }
    }
}

/// Parse every raw relation of one category, in order
///
/// Stops at the first entry the parser rejects.
pub fn collect_relations<P, S>(
    parser: &P,
    category: &'static str,
    raws: &[S],
) -> Result<Vec<Relation>>
where
    P: RelationParser + ?Sized,
    S: AsRef<str>,
{
    let mut relations = Vec::with_capacity(raws.len());
    for raw in raws {
        let raw = raw.as_ref();
        let relation = parser
            .parse_relation(raw)
            .map_err(|e| AssemblerError::invalid_relation(category, raw, e))?;
        debug!("Parsed {} relation: {}", category, relation);
        relations.push(relation);
    }
    Ok(relations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> RegexRelationParser {
        RegexRelationParser::new().unwrap()
    }

    #[test]
    fn test_parse_bare_name() {
        let rel = parser().parse_relation("bash").unwrap();
        assert_eq!(rel, Relation::any("bash"));
    }

    #[test]
    fn test_parse_with_operators() {
        let p = parser();
        let cases = [
            ("glibc >= 2.28", Comparator::GreaterEq, "2.28"),
            ("openssl=3.0.7", Comparator::Equal, "3.0.7"),
            ("python3 < 3.13", Comparator::Less, "3.13"),
            ("zlib<=1.3", Comparator::LessEq, "1.3"),
            ("kernel > 5.14", Comparator::Greater, "5.14"),
        ];
        for (raw, comparator, version) in cases {
            let rel = p.parse_relation(raw).unwrap();
            assert_eq!(rel.comparator, comparator, "{raw}");
            assert_eq!(rel.version, version, "{raw}");
        }
    }

    #[test]
    fn test_parse_errors() {
        let p = parser();
        assert_eq!(p.parse_relation("  "), Err(RelationParseError::Empty));
        assert_eq!(p.parse_relation(">= 1.0"), Err(RelationParseError::MissingName));
        assert!(matches!(
            p.parse_relation("foo >="),
            Err(RelationParseError::MissingVersion(_))
        ));
        assert!(matches!(
            p.parse_relation("foo bar"),
            Err(RelationParseError::Malformed(_))
        ));
        assert!(matches!(
            p.parse_relation("foo >= 1 2"),
            Err(RelationParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_display() {
        let rel = parser().parse_relation("glibc>=2.28").unwrap();
        assert_eq!(rel.to_string(), "glibc >= 2.28");
    }

    #[test]
    fn test_collect_preserves_order_and_duplicates() {
        let raws = ["b", "a >= 1", "b"];
        let relations = collect_relations(&parser(), "requires", &raws).unwrap();
        let names: Vec<_> = relations.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "b"]);
    }

    #[test]
    fn test_collect_empty() {
        let raws: [&str; 0] = [];
        let relations = collect_relations(&parser(), "requires", &raws).unwrap();
        assert!(relations.is_empty());
    }

    #[test]
    fn test_collect_reports_failing_entry() {
        let raws = vec!["ok".to_string(), "bad >=".to_string(), "never bad".to_string()];
        let err = collect_relations(&parser(), "conflicts", &raws).unwrap_err();
        match err {
            AssemblerError::InvalidRelation { category, raw, .. } => {
                assert_eq!(category, "conflicts");
                assert_eq!(raw, "bad >=");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
