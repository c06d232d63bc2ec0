//! Single-character directives selected by a `%` escape.

use crate::url_model::ParsedUrl;

use super::extension::file_extension;

/// What a `%<c>` pair expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%%`
    Percent,
    /// `%s`
    Scheme,
    /// `%u`
    UserInfo,
    /// `%d`
    Host,
    /// `%S`
    Subdomain,
    /// `%r`
    SecondLevel,
    /// `%t`
    TopLevel,
    /// `%P`
    Port,
    /// `%p`
    Path,
    /// `%e`
    Extension,
    /// `%q`
    RawQuery,
    /// `%f`
    Fragment,
    /// `%@`: `@` only if user info is present.
    AtIfUserInfo,
    /// `%:`: `:` only if a port is present.
    ColonIfPort,
    /// `%?`: `?` only if a query is present.
    QuestionIfQuery,
    /// `%#`: `#` only if a fragment is present.
    HashIfFragment,
    /// `%a`: authority, the fixed expansion of [`AUTHORITY`].
    Authority,
    /// Anything else renders back as `%` followed by the character.
    Unknown(char),
}

/// Sub-template behind `%a`. It contains no `%a`, so expansion stops after one level.
pub const AUTHORITY: &str = "%u%@%d%:%P";

const AUTHORITY_PARTS: [Directive; 5] = [
    Directive::UserInfo,
    Directive::AtIfUserInfo,
    Directive::Host,
    Directive::ColonIfPort,
    Directive::Port,
];

impl Directive {
    pub fn from_char(c: char) -> Self {
        match c {
            '%' => Directive::Percent,
            's' => Directive::Scheme,
            'u' => Directive::UserInfo,
            'd' => Directive::Host,
            'S' => Directive::Subdomain,
            'r' => Directive::SecondLevel,
            't' => Directive::TopLevel,
            'P' => Directive::Port,
            'p' => Directive::Path,
            'e' => Directive::Extension,
            'q' => Directive::RawQuery,
            'f' => Directive::Fragment,
            '@' => Directive::AtIfUserInfo,
            ':' => Directive::ColonIfPort,
            '?' => Directive::QuestionIfQuery,
            '#' => Directive::HashIfFragment,
            'a' => Directive::Authority,
            other => Directive::Unknown(other),
        }
    }

    /// Append this directive's expansion for `url` to `out`.
    pub fn render_into(self, url: &ParsedUrl, out: &mut String) {
        match self {
            Directive::Percent => out.push('%'),
            Directive::Scheme => out.push_str(&url.scheme),
            Directive::UserInfo => {
                if let Some(user_info) = &url.user_info {
                    out.push_str(user_info);
                }
            }
            Directive::Host => out.push_str(&url.host),
            Directive::Subdomain => out.push_str(&url.domain.subdomain),
            Directive::SecondLevel => out.push_str(&url.domain.second_level),
            Directive::TopLevel => out.push_str(&url.domain.top_level),
            Directive::Port => out.push_str(&url.port),
            Directive::Path => out.push_str(&url.path),
            Directive::Extension => out.push_str(file_extension(&url.path)),
            Directive::RawQuery => out.push_str(&url.raw_query),
            Directive::Fragment => out.push_str(&url.fragment),
            Directive::AtIfUserInfo => {
                if url.user_info.is_some() {
                    out.push('@');
                }
            }
            Directive::ColonIfPort => {
                if !url.port.is_empty() {
                    out.push(':');
                }
            }
            Directive::QuestionIfQuery => {
                if !url.raw_query.is_empty() {
                    out.push('?');
                }
            }
            Directive::HashIfFragment => {
                if !url.fragment.is_empty() {
                    out.push('#');
                }
            }
            Directive::Authority => {
                for part in AUTHORITY_PARTS {
                    part.render_into(url, out);
                }
            }
            Directive::Unknown(c) => {
                out.push('%');
                out.push(c);
            }
        }
    }
}
