const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Result of splitting the URL text box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUrls {
    /// Accepted URLs, in input order. Duplicates are kept.
    pub urls: Vec<String>,
    /// Non-blank lines dropped for lacking an accepted scheme.
    pub rejected: Vec<String>,
}

pub fn parse_url_list(raw: &str) -> ParsedUrls {
    let mut parsed = ParsedUrls::default();
    for line in raw.split('\n').map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if ACCEPTED_SCHEMES
            .iter()
            .any(|scheme| line.starts_with(scheme))
        {
            parsed.urls.push(line.to_owned());
        } else {
            parsed.rejected.push(line.to_owned());
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_check_is_case_sensitive() {
        let parsed = parse_url_list("HTTPS://A.COM\nhttps://a.com");
        assert_eq!(parsed.urls, vec!["https://a.com"]);
        assert_eq!(parsed.rejected, vec!["HTTPS://A.COM"]);
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let parsed = parse_url_list("https://a.com\r\nhttp://b.com\r\n");
        assert_eq!(parsed.urls, vec!["https://a.com", "http://b.com"]);
        assert!(parsed.rejected.is_empty());
    }
}
