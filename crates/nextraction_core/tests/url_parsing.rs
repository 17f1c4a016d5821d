use chrono::NaiveTime;
use nextraction_core::admin::{self, AdminEffect, AdminMsg, AdminState};
use nextraction_core::{parse_url_list, ActivityLevel, ApiCall};

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

#[test]
fn mixed_input_keeps_only_http_urls() {
    let parsed = parse_url_list("foo\nhttp://a.com\n \nhttps://b.com");

    assert_eq!(parsed.urls, vec!["http://a.com", "https://b.com"]);
    assert_eq!(parsed.rejected, vec!["foo"]);
}

#[test]
fn output_never_contains_blank_or_schemeless_entries() {
    let inputs = [
        "",
        "\n\n\n",
        "   \t  \n",
        "ftp://x.org\nmailto:a@b.c\nhttps://ok.org",
        "  http://padded.org  \nhttps://\n",
        "https://dup.org\nhttps://dup.org\n",
    ];
    for input in inputs {
        let parsed = parse_url_list(input);
        for url in &parsed.urls {
            assert!(!url.trim().is_empty(), "blank url from {input:?}");
            assert!(
                url.starts_with("http://") || url.starts_with("https://"),
                "bad scheme {url:?} from {input:?}"
            );
        }
    }
}

#[test]
fn duplicates_are_not_removed() {
    let parsed = parse_url_list("https://dup.org\nhttps://dup.org/\nhttps://dup.org");
    assert_eq!(parsed.urls.len(), 3);
}

#[test]
fn rejected_lines_are_logged_as_warnings_once_each() {
    let (state, _) = admin::update(
        AdminState::default(),
        AdminMsg::InputChanged("foo\nhttp://a.com\n \nhttps://b.com".to_string()),
        noon(),
    );
    let (state, effects) = admin::update(state, AdminMsg::VerifyClicked, noon());

    assert_eq!(state.log().count(ActivityLevel::Warning), 1);
    assert!(state.log().entries()[0].message.ends_with("foo"));
    assert_eq!(
        effects,
        vec![AdminEffect::Call(ApiCall::VerifyUrls(vec![
            "http://a.com".to_string(),
            "https://b.com".to_string(),
        ]))]
    );
}

#[test]
fn empty_input_alerts_without_network_call() {
    let (state, _) = admin::update(
        AdminState::default(),
        AdminMsg::InputChanged("not-a-url\n\n".to_string()),
        noon(),
    );
    let (state, effects) = admin::update(state, AdminMsg::IngestClicked, noon());

    assert_eq!(
        effects,
        vec![AdminEffect::Alert("Please enter at least one URL.".to_string())]
    );
    assert!(state.in_flight().is_none());
    assert!(state.view().ingest_enabled);
}
