//! Tests for external asset reference scanning

use component_extract::{ReferenceScanner, ScannedReferences};
use component_protocol::MarkupSample;
use pretty_assertions::assert_eq;

#[test]
fn test_link_and_script_references() {
    let scanner = ReferenceScanner::new();
    let samples = vec![MarkupSample::new(
        "html",
        r#"<link rel="stylesheet" href="x.css">
<div class="modal"></div>
<script src="y.js"></script>"#,
    )];

    let refs = scanner.scan(&samples);

    assert_eq!(
        refs,
        ScannedReferences {
            stylesheets: vec!["x.css".to_string()],
            scripts: vec!["y.js".to_string()],
        }
    );
}

#[test]
fn test_discovery_order_is_kept_and_duplicates_removed() {
    let scanner = ReferenceScanner::new();
    let samples = vec![
        MarkupSample::new(
            "html",
            r#"<link href="b.css" rel="stylesheet"><link rel='stylesheet' href='a.css'>"#,
        ),
        MarkupSample::new(
            "HTML",
            r#"<LINK REL="stylesheet" HREF="b.css"><script defer src="z.js"></script><script src="z.js"></script>"#,
        ),
    ];

    let refs = scanner.scan(&samples);

    assert_eq!(refs.stylesheets, vec!["b.css", "a.css"]);
    assert_eq!(refs.scripts, vec!["z.js"]);
}

#[test]
fn test_non_stylesheet_links_and_inline_scripts_are_ignored() {
    let scanner = ReferenceScanner::new();
    let samples = vec![MarkupSample::new(
        "html",
        r#"<link rel="icon" href="favicon.ico">
<script>document.querySelector('.alert').remove();</script>"#,
    )];

    assert!(scanner.scan(&samples).is_empty());
}

#[test]
fn test_non_markup_samples_are_not_scanned() {
    let scanner = ReferenceScanner::new();
    let samples = vec![
        MarkupSample::new("js", r#"const html = '<script src="in-js.js"></script>';"#),
        MarkupSample::new("css", r#"/* <link rel="stylesheet" href="in-css.css"> */"#),
    ];

    assert!(scanner.scan(&samples).is_empty());
}

#[test]
fn test_script_samples_signal_scripting() {
    let scanner = ReferenceScanner::new();

    assert!(scanner.has_script_samples(&[MarkupSample::new("javascript", "init();")]));
    assert!(!scanner.has_script_samples(&[MarkupSample::new("html", "<div></div>")]));
    assert!(!scanner.has_script_samples(&[]));
}
