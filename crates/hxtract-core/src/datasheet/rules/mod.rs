//! Rule-based field extraction primitives.
//!
//! A field is described by an ordered chain of [`Rule`]s; the first rule
//! that structurally matches and survives post-processing wins. Keeping the
//! chain as data (instead of branching code) keeps the priority order
//! auditable and lets new drawing templates be added by appending rules.

mod catalog;
pub mod patterns;

pub use catalog::{Catalog, PLATE_MATERIALS};

use regex::Regex;

use crate::models::record::FieldId;
use patterns::{ANNOTATION, COMPANY_TOKEN};

/// How many values a rule captures, and what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One capture group.
    Single,
    /// Two capture groups: group 1 is the hot-side/process-1 stream,
    /// group 2 the cold-side/process-2 stream.
    Dual,
}

/// The matching strategy of a rule.
pub enum Matcher {
    /// Pattern applied to the whole text.
    Text(&'static Regex),
    /// Pattern applied line by line; every guard word must co-occur on a
    /// line before the pattern is tried there. This is what keeps a bare
    /// "操作压力" remark from populating a design field.
    Line {
        guards: &'static [&'static str],
        pattern: &'static Regex,
    },
    /// Ordered literal tokens; the first one present anywhere in the text
    /// wins. List order is the priority order, so longer codes must precede
    /// their substrings ("316L" before "316").
    Token(&'static [&'static str]),
}

/// One extraction rule: a matcher plus capture semantics.
pub struct Rule {
    matcher: Matcher,
    arity: Arity,
}

impl Rule {
    /// Rule matching against the whole text.
    pub fn text(pattern: &'static Regex, arity: Arity) -> Self {
        Self {
            matcher: Matcher::Text(pattern),
            arity,
        }
    }

    /// Guarded line-by-line rule.
    pub fn line(
        guards: &'static [&'static str],
        pattern: &'static Regex,
        arity: Arity,
    ) -> Self {
        Self {
            matcher: Matcher::Line { guards, pattern },
            arity,
        }
    }

    /// Token-priority rule.
    pub fn token(tokens: &'static [&'static str]) -> Self {
        Self {
            matcher: Matcher::Token(tokens),
            arity: Arity::Single,
        }
    }

    /// Try the rule against the text.
    pub fn apply(&self, text: &str) -> Option<Captured> {
        match &self.matcher {
            Matcher::Text(pattern) => capture(pattern, text, self.arity),
            Matcher::Line { guards, pattern } => text
                .lines()
                .filter(|line| guards.iter().all(|guard| line.contains(guard)))
                .find_map(|line| capture(pattern, line, self.arity)),
            Matcher::Token(tokens) => tokens
                .iter()
                .find(|token| text.contains(*token))
                .map(|token| Captured::Single((*token).to_string())),
        }
    }
}

fn capture(pattern: &Regex, text: &str, arity: Arity) -> Option<Captured> {
    let caps = pattern.captures(text)?;
    let first = caps.get(1)?.as_str().trim().to_string();

    match arity {
        Arity::Single => Some(Captured::Single(first)),
        Arity::Dual => {
            let second = caps.get(2)?.as_str().trim().to_string();
            Some(Captured::Dual(first, second))
        }
    }
}

/// Values captured by one rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    /// A single value.
    Single(String),
    /// A hot-side/cold-side pair, in stream order.
    Dual(String, String),
}

/// Post-processing steps applied to each captured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Post {
    /// Remove parenthesized footnote markers like "(注6)".
    StripAnnotations,
    /// Append a unit suffix.
    AppendUnit(&'static str),
    /// Narrow a captured line to the company-name token when one is present.
    CompanyName,
    /// Reject captures shorter than the given character count; rejection
    /// continues the rule chain.
    MinLen(usize),
}

/// Run a captured value through the post-processing steps.
///
/// `None` means the value was rejected (or emptied); the caller moves on to
/// the next rule in the chain.
pub fn apply_post(value: String, steps: &[Post]) -> Option<String> {
    let mut value = value.trim().to_string();
    if value.is_empty() {
        return None;
    }

    for step in steps {
        value = match step {
            Post::StripAnnotations => ANNOTATION.replace_all(&value, "").trim().to_string(),
            Post::AppendUnit(unit) => format!("{value}{unit}"),
            Post::CompanyName => match COMPANY_TOKEN.captures(&value) {
                Some(caps) => caps[1].to_string(),
                None => value,
            },
            Post::MinLen(min) => {
                if value.chars().count() >= *min {
                    value
                } else {
                    return None;
                }
            }
        };

        if value.is_empty() {
            return None;
        }
    }

    Some(value)
}

/// Declarative definition of one output field.
pub struct FieldSpec {
    /// The record field this spec populates.
    pub field: FieldId,
    /// Candidate rules in priority order.
    pub rules: Vec<Rule>,
    /// Post-processing applied to every captured value.
    pub post: Vec<Post>,
    /// Value assigned when no rule matches.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(field: FieldId, rules: Vec<Rule>) -> Self {
        Self {
            field,
            rules,
            post: Vec::new(),
            default: None,
        }
    }

    pub fn with_post(mut self, step: Post) -> Self {
        self.post.push(step);
        self
    }

    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_annotations() {
        let value = apply_post("碳酸钾溶液及蒸气(注6)".to_string(), &[Post::StripAnnotations]);
        assert_eq!(value.as_deref(), Some("碳酸钾溶液及蒸气"));
    }

    #[test]
    fn test_strip_annotations_fullwidth() {
        let value = apply_post("玻璃棉（注1）".to_string(), &[Post::StripAnnotations]);
        assert_eq!(value.as_deref(), Some("玻璃棉"));
    }

    #[test]
    fn test_min_len_rejects_short_capture() {
        assert_eq!(apply_post("LTB2".to_string(), &[Post::MinLen(6)]), None);
        assert_eq!(
            apply_post("LTB2-500A".to_string(), &[Post::MinLen(6)]).as_deref(),
            Some("LTB2-500A")
        );
    }

    #[test]
    fn test_company_name_narrows_labeled_line() {
        let value = apply_post(
            "CLIENT 伊泰伊犁能源有限公司 PROJECT".to_string(),
            &[Post::CompanyName],
        );
        assert_eq!(value.as_deref(), Some("伊泰伊犁能源有限公司"));
    }

    #[test]
    fn test_company_name_keeps_line_without_company_token() {
        let value = apply_post("某业主单位".to_string(), &[Post::CompanyName]);
        assert_eq!(value.as_deref(), Some("某业主单位"));
    }

    #[test]
    fn test_token_rule_priority_order() {
        let rule = Rule::token(&PLATE_MATERIALS);
        let captured = rule.apply("板片 316L 侧板 S31603");
        assert_eq!(captured, Some(Captured::Single("316L".to_string())));
    }

    #[test]
    fn test_line_rule_requires_all_guards() {
        let rule = Rule::line(
            &["压力", "设计"],
            &patterns::DESIGN_SINGLE_DECIMAL,
            Arity::Single,
        );
        assert_eq!(rule.apply("操作压力 0.5"), None);
        assert_eq!(
            rule.apply("压力 MPa(G) 设计 0.8"),
            Some(Captured::Single("0.8".to_string()))
        );
    }
}
