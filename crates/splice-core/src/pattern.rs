//! Whitespace-tolerant pattern rules.
//!
//! A pattern rule is written as a verbatim copy of the text it should find.
//! Compilation turns that template into a matcher where:
//!
//! - every non-whitespace character must match literally,
//! - every run of whitespace matches any run of whitespace, line breaks
//!   included,
//! - a whitespace run between two word characters (letters, digits, `_`) must match
//!   at least one whitespace character, so `WhatsApp Enviado` never matches
//!   `WhatsAppEnviado`; anywhere else it may match none.
//!
//! Leading and trailing whitespace in the template is ignored, so the matched
//! region always starts and ends on a token.

use std::ops::Range;

use regex::Regex;

use crate::error::SpliceError;

/// A compiled, named pattern rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    matcher: Regex,
}

impl PatternRule {
    /// Compiles a template into a pattern rule.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::InvalidPattern`] if the template contains no
    /// tokens, or if the derived expression cannot be built.
    pub fn compile(name: impl Into<String>, template: &str) -> Result<Self, SpliceError> {
        let rule_name = name.into();
        let expression = template_to_expression(template);
        if expression.is_empty() {
            return Err(SpliceError::invalid_pattern(
                rule_name,
                "pattern template contains no tokens",
            ));
        }

        let matcher = Regex::new(&expression)
            .map_err(|err| SpliceError::invalid_pattern(rule_name.clone(), err.to_string()))?;

        Ok(Self {
            name: rule_name,
            matcher,
        })
    }

    /// Returns the rule name used in reports and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether any region of `buffer` matches.
    #[must_use]
    pub fn is_match(&self, buffer: &str) -> bool {
        self.matcher.is_match(buffer)
    }

    /// Returns the byte ranges of every non-overlapping match, in order.
    #[must_use]
    pub fn find_all(&self, buffer: &str) -> Vec<Range<usize>> {
        self.matcher.find_iter(buffer).map(|m| m.range()).collect()
    }

    /// Returns the byte range of the single matching region, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::AmbiguousMatch`] when more than one region
    /// matches.
    pub fn find_unique(&self, buffer: &str) -> Result<Option<Range<usize>>, SpliceError> {
        let mut matches = self.find_all(buffer);
        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            count => Err(SpliceError::ambiguous_match(self.name.clone(), count)),
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Converts a literal template into a regular expression.
///
/// Returns an empty string for templates without tokens.
fn template_to_expression(template: &str) -> String {
    let mut expression = String::with_capacity(template.len().saturating_mul(2));
    let mut previous: Option<char> = None;
    let mut pending_gap = false;
    let mut utf8 = [0_u8; 4];

    for ch in template.trim().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }

        if pending_gap {
            let joins_words = previous.is_some_and(is_word_char) && is_word_char(ch);
            expression.push_str(if joins_words { r"\s+" } else { r"\s*" });
            pending_gap = false;
        }

        expression.push_str(&regex::escape(ch.encode_utf8(&mut utf8)));
        previous = Some(ch);
    }

    expression
}
