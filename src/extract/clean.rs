//! Body text cleanup.
//!
//! Posts end with a fixed posting-station footer and often embed the
//! sender's IP address and quoted replies. None of that is linguistic
//! content, so it is stripped before the body is stored.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Posting-station notice, article-URL notice and edit notice lines.
    static ref FOOTER: Regex = Regex::new(r"※ 發信站.*|※ 文章網址.*|※ 編輯.*").unwrap();
    /// Quote header plus `: `-prefixed quoted lines.
    static ref QUOTE: Regex = Regex::new(r"※ 引述.*|\n: .*").unwrap();
    /// Dotted-quad IP addresses left by the posting station.
    static ref IP: Regex = Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap();
}

/// Removes footer lines and IP addresses, then trims the body margins.
pub fn strip_boilerplate(body: &str) -> String {
    let body = FOOTER.replace_all(body, "");
    let body = IP.replace_all(&body, "");
    body.trim_matches(|c| c == '\r' || c == '\n' || c == '-')
        .to_string()
}

/// Removes quoted-reply text (`※ 引述` header and `: ` lines).
pub fn strip_quotes(body: &str) -> String {
    QUOTE.replace_all(body, "").trim_matches(['\n', ' ']).to_string()
}
