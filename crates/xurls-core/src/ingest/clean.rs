//! Per-line rewriting applied before a line enters the queue.

/// JSON-style escape for `/`.
const ESCAPED_SLASH: &str = concat!("\\", "u002f");
/// JSON-style escape for `&`.
const ESCAPED_AMPERSAND: &str = concat!("\\", "u0026");

/// How raw lines are turned into queue items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCleaner {
    /// Trim surrounding whitespace; drop blank lines.
    #[default]
    Plain,
    /// Like `Plain`, after stripping `*` and decoding the escaped forms of
    /// `/` and `&` found in scraped JS/JSON bodies.
    Discovery,
}

impl LineCleaner {
    /// Cleaned line, or `None` if nothing is left.
    pub fn clean(self, line: &str) -> Option<String> {
        let line = match self {
            LineCleaner::Plain => line.trim().to_string(),
            LineCleaner::Discovery => rewrite_escapes(line).trim().to_string(),
        };
        (!line.is_empty()).then_some(line)
    }
}

/// Single left-to-right pass, so a replacement never creates a new match.
fn rewrite_escapes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if c == '*' {
            rest = &rest[1..];
        } else if let Some(tail) = rest.strip_prefix(ESCAPED_SLASH) {
            out.push('/');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(ESCAPED_AMPERSAND) {
            out.push('&');
            rest = tail;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_trims_and_drops_blank() {
        assert_eq!(
            LineCleaner::Plain.clean("  http://x.com/a \r"),
            Some("http://x.com/a".into())
        );
        assert_eq!(LineCleaner::Plain.clean(""), None);
        assert_eq!(LineCleaner::Plain.clean(" \t "), None);
    }

    #[test]
    fn plain_keeps_escapes() {
        let line = "http:\\u002f\\u002fx.com";
        assert_eq!(LineCleaner::Plain.clean(line), Some(line.to_string()));
    }

    #[test]
    fn discovery_decodes_escapes() {
        assert_eq!(
            LineCleaner::Discovery.clean("{\"u\":\"https:\\u002f\\u002fx.com\\u002fa?b=1\\u0026c=2\"}"),
            Some("{\"u\":\"https://x.com/a?b=1&c=2\"}".into())
        );
    }

    #[test]
    fn discovery_strips_stars() {
        assert_eq!(
            LineCleaner::Discovery.clean("*.example.com/**"),
            Some(".example.com/".into())
        );
        assert_eq!(LineCleaner::Discovery.clean("***"), None);
    }

    #[test]
    fn discovery_is_single_pass() {
        assert_eq!(rewrite_escapes("\\u00*2f"), "\\u002f");
    }
}
