//! Shell-style wildcard patterns for schema and table identifiers.
//!
//! Supported syntax: `*` (any run of characters, including none), `?` (any one
//! character), `[seq]` (one character from the class) and `[!seq]` (one
//! character outside it). Classes accept `a-z` style ranges, and a `]`
//! immediately after the opening bracket is taken literally. Matching is
//! case-sensitive and always anchored at both ends.

use crate::errors::DepCheckError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Single(char),
    Range(char, char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyRun,
    Class { negated: bool, items: Vec<ClassItem> },
}

impl Token {
    fn matches_char(&self, c: char) -> bool {
        match self {
            Token::Literal(l) => *l == c,
            Token::AnyOne => true,
            Token::AnyRun => false,
            Token::Class { negated, items } => {
                let hit = items.iter().any(|item| match item {
                    ClassItem::Single(s) => *s == c,
                    ClassItem::Range(lo, hi) => *lo <= c && c <= *hi,
                });
                hit != *negated
            }
        }
    }
}

/// A compiled wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    tokens: Vec<Token>,
}

impl WildcardPattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// `InvalidPattern` when a `[` class is never closed.
    pub fn compile(pattern: &str) -> Result<WildcardPattern, DepCheckError> {
        Self::build(pattern, true)
    }

    /// Compile a pattern, reading an unterminated `[` as a literal bracket
    ///
    /// Used for identifiers that come from backend data rather than the
    /// manifest, where a stray bracket must not abort a check.
    pub fn compile_lenient(pattern: &str) -> WildcardPattern {
        match Self::build(pattern, false) {
            Ok(compiled) => compiled,
            // build only fails in strict mode
            Err(_) => WildcardPattern {
                source: pattern.to_string(),
                tokens: pattern.chars().map(Token::Literal).collect(),
            },
        }
    }

    fn build(pattern: &str, strict: bool) -> Result<WildcardPattern, DepCheckError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '*' => {
                    // Consecutive stars are equivalent to one
                    if tokens.last() != Some(&Token::AnyRun) {
                        tokens.push(Token::AnyRun);
                    }
                    i += 1;
                }
                '?' => {
                    tokens.push(Token::AnyOne);
                    i += 1;
                }
                '[' => match parse_class(&chars, i) {
                    Some((token, next)) => {
                        tokens.push(token);
                        i = next;
                    }
                    None if strict => {
                        return Err(DepCheckError::InvalidPattern {
                            pattern: pattern.to_string(),
                            reason: format!("unterminated character class at offset {}", i),
                        })
                    }
                    None => {
                        tokens.push(Token::Literal('['));
                        i += 1;
                    }
                },
                c => {
                    tokens.push(Token::Literal(c));
                    i += 1;
                }
            }
        }

        Ok(WildcardPattern {
            source: pattern.to_string(),
            tokens,
        })
    }

    /// The pattern text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the pattern uses any wildcard syntax
    pub fn has_wildcards(&self) -> bool {
        self.tokens.iter().any(|t| !matches!(t, Token::Literal(_)))
    }

    /// Whole-string match of `value` against the pattern
    pub fn matches(&self, value: &str) -> bool {
        let value: Vec<char> = value.chars().collect();
        let tokens = &self.tokens;

        let mut ti = 0;
        let mut vi = 0;
        // Backtrack point: token index after the last `*`, and the value index it resumes from
        let mut star: Option<(usize, usize)> = None;

        while vi < value.len() {
            if ti < tokens.len() && tokens[ti] == Token::AnyRun {
                star = Some((ti + 1, vi));
                ti += 1;
            } else if ti < tokens.len() && tokens[ti].matches_char(value[vi]) {
                ti += 1;
                vi += 1;
            } else if let Some((resume_ti, resume_vi)) = star {
                ti = resume_ti;
                vi = resume_vi + 1;
                star = Some((resume_ti, resume_vi + 1));
            } else {
                return false;
            }
        }

        tokens[ti..].iter().all(|t| *t == Token::AnyRun)
    }
}

/// Parse a `[...]` class starting at `start`; returns the token and the index after `]`
fn parse_class(chars: &[char], start: usize) -> Option<(Token, usize)> {
    let mut i = start + 1;
    let negated = chars.get(i) == Some(&'!');
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    let mut first = true;
    loop {
        let c = *chars.get(i)?;
        if c == ']' && !first {
            return Some((Token::Class { negated, items }, i + 1));
        }
        first = false;

        match (chars.get(i + 1), chars.get(i + 2)) {
            (Some('-'), Some(&hi)) if hi != ']' => {
                items.push(ClassItem::Range(c, hi));
                i += 3;
            }
            _ => {
                items.push(ClassItem::Single(c));
                i += 1;
            }
        }
    }
}

/// Compile `pattern` and match it against `value`
///
/// # Errors
///
/// `InvalidPattern` when the pattern does not compile.
pub fn wildcard_match(pattern: &str, value: &str) -> Result<bool, DepCheckError> {
    Ok(WildcardPattern::compile(pattern)?.matches(value))
}
