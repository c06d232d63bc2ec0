//! printf-style rendering of URL components.
//!
//! A template is a flat run of literal text and `%<c>` directives, e.g.
//! `"%s://%d%p"`. Templates are compiled once per invocation and rendered per
//! URL.

mod directive;
mod extension;

pub use directive::{Directive, AUTHORITY};
pub use extension::file_extension;

use crate::url_model::ParsedUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Directive(Directive),
}

/// Compiled format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
    empty: bool,
}

impl Default for Template {
    fn default() -> Self {
        Self::compile("")
    }
}

impl Template {
    /// Scan `source` left to right.
    ///
    /// `%` starts an escape and the next character picks the directive; a
    /// trailing lone `%` is dropped. Unrecognised directives are kept and
    /// render as `%` plus the character.
    pub fn compile(source: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut escape_pending = false;

        for c in source.chars() {
            if escape_pending {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Directive(Directive::from_char(c)));
                escape_pending = false;
            } else if c == '%' {
                escape_pending = true;
            } else {
                literal.push(c);
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            tokens,
            empty: source.is_empty(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True only for the empty format string.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Render against `url` into a single string.
    pub fn render_to_string(&self, url: &ParsedUrl) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Directive(d) => d.render_into(url, &mut out),
            }
        }
        out
    }

    /// Render against `url`.
    ///
    /// Always one element, except for the empty template which yields none.
    pub fn render(&self, url: &ParsedUrl) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![self.render_to_string(url)]
    }
}

/// Compile and render in one step.
pub fn format(url: &ParsedUrl, template: &str) -> Vec<String> {
    Template::compile(template).render(url)
}
