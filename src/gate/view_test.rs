use super::*;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// =============================================================
// Markup
// =============================================================

#[test]
fn default_markup_matches_stock_form() {
    assert_eq!(
        GateView::default().markup(),
        concat!(
            r#"<div><form id="signin-form">"#,
            r#"<input id="email" type="text" placeholder="email" required />"#,
            r#"<input id="password" type="password" placeholder="password" required />"#,
            r#"<button type="submit">sign in</button>"#,
            "</form></div>",
        )
    );
}

#[test]
fn markup_has_one_form_two_inputs_one_submit() {
    let html = GateView::default().markup();
    assert_eq!(count(&html, "<form"), 1);
    assert_eq!(count(&html, "<input"), 2);
    assert_eq!(count(&html, r#"id="email""#), 1);
    assert_eq!(count(&html, r#"type="password""#), 1);
    assert_eq!(count(&html, r#"<button type="submit">"#), 1);
}

#[test]
fn both_inputs_are_required() {
    let html = GateView::default().markup();
    assert_eq!(count(&html, "required"), 2);
}

#[test]
fn markup_is_stable_across_calls() {
    let view = GateView::default();
    assert_eq!(view.markup(), view.markup());
}

#[test]
fn markup_uses_configured_ids_and_text() {
    let config = GateConfig {
        form_id: "login".to_owned(),
        email_input_id: "user-email".to_owned(),
        submit_label: "Continue".to_owned(),
        ..GateConfig::default()
    };
    let html = GateView::from_config(&config).markup();
    assert!(html.contains(r#"<form id="login">"#));
    assert!(html.contains(r#"<input id="user-email" type="text""#));
    assert!(html.contains(">Continue</button>"));
}

#[test]
fn markup_escapes_text() {
    let view = GateView {
        submit_label: "<b>go</b>".to_owned(),
        email_placeholder: "\"you\"".to_owned(),
        ..GateView::default()
    };
    let html = view.markup();
    assert!(html.contains(">&lt;b&gt;go&lt;/b&gt;</button>"));
    assert!(html.contains(r#"placeholder="&quot;you&quot;""#));
    assert!(!html.contains("<b>"));
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_replaces_special_characters() {
    assert_eq!(escape_html(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&#39;");
}

#[test]
fn escape_html_leaves_plain_text() {
    assert_eq!(escape_html("sign in"), "sign in");
}
