//! Regex source for URL discovery.

const SCHEME: &str = r"[a-zA-Z][a-zA-Z0-9+.\-]*";
const USERINFO: &str = r"(?:[a-zA-Z0-9\-._~%!$&'*+,;=:]+@)?";
const DNS_HOST: &str = r"(?:[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z][a-zA-Z0-9\-]{1,62}";
const IPV4_HOST: &str = r"(?:\d{1,3}\.){3}\d{1,3}";
const IPV6_HOST: &str = r"\[[0-9a-fA-F:.]+\]";
/// Single dotless label such as `localhost` or `intranet`; schemed URLs only.
const LABEL_HOST: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?";
const PORT: &str = r"(?::\d{1,5})?";
const URL_CHARS: &str = r#"[^\s"'<>`{}|\\^\[\]]*"#;

/// Pieces a discovery regex is assembled from.
#[derive(Debug, Clone, Default)]
pub(super) struct PatternParts<'a> {
    pub require_scheme: bool,
    pub scheme: Option<&'a str>,
    pub require_host: bool,
    pub host: Option<&'a str>,
}

impl PatternParts<'_> {
    /// Full pattern: schemed alternative first so it wins at a shared start.
    ///
    /// The schemeless alternative captures its host as `bare` for the
    /// public-suffix check.
    pub fn build(&self) -> String {
        let rest = format!("(?:[/?#]{URL_CHARS})?");
        let scheme = self
            .scheme
            .map(|p| format!("(?:{p})"))
            .unwrap_or_else(|| SCHEME.to_string());
        let schemed_host = self
            .host
            .map(|p| format!("(?:{p})"))
            .unwrap_or_else(|| format!("(?:{DNS_HOST}|{IPV4_HOST}|{IPV6_HOST}|{LABEL_HOST})"));
        let bare_host = self
            .host
            .map(|p| format!("(?:{p})"))
            .unwrap_or_else(|| format!("(?:{DNS_HOST}|{IPV4_HOST})"));

        // Without a required host, `scheme:///path` is accepted, but a bare
        // `scheme://` with neither host nor path never matches.
        let authority = format!("{USERINFO}{schemed_host}{PORT}{rest}");
        let after_scheme = if self.require_host || self.host.is_some() {
            authority
        } else {
            format!("(?:{authority}|/{URL_CHARS})")
        };
        let schemed = format!("{scheme}://{after_scheme}");

        if self.require_scheme || self.scheme.is_some() {
            schemed
        } else {
            format!("{schemed}|(?P<bare>{bare_host}){PORT}{rest}")
        }
    }
}
