use super::*;
use serde_json::json;

fn config(value: serde_json::Value) -> ProductConfig {
    serde_json::from_value(value).unwrap()
}

fn ids(entries: &[NavEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn keeps_authored_order_of_enabled_non_intro_items() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "intro", "label": "Top", "enabled": true},
            {"id": "specs", "label": "Specs", "enabled": true},
            {"id": "demo", "label": "Demo", "enabled": false},
            {"id": "concept", "label": "Concept", "enabled": true},
            {"id": "faq", "label": "FAQ", "enabled": true}
        ]
    }));
    let nav = derive_navigation(&cfg);
    assert_eq!(ids(&nav), vec!["specs", "concept", "faq"]);
    assert!(nav.iter().all(NavEntry::is_scroll_target));
}

#[test]
fn manual_becomes_download_entry() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "faq", "label": "FAQ", "enabled": true},
            {"id": "manual", "label": "Manual", "enabled": true, "isDownload": true}
        ],
        "modules": {"manual": {"enabled": true, "url": "https://example.com/tp.pdf"}}
    }));
    let nav = derive_navigation(&cfg);
    assert_eq!(ids(&nav), vec!["faq", "manual"]);
    assert!(!nav[1].is_scroll_target());
    assert_eq!(
        nav[1].download_action(),
        Some(&DownloadAction::Manual {
            brand: "Acme".to_string(),
            product: "Tube Pre".to_string(),
            url: Some("https://example.com/tp.pdf".to_string()),
        })
    );
}

#[test]
fn manual_is_retained_without_manual_module() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [{"id": "manual", "label": "Manual", "enabled": true}]
    }));
    let nav = derive_navigation(&cfg);
    assert_eq!(nav.len(), 1);
    assert_eq!(nav[0].download_action().and_then(DownloadAction::href), None);
}

#[test]
fn download_items_need_a_url() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "driver", "label": "Driver", "enabled": true, "isDownload": true},
            {"id": "editor", "label": "Editor", "enabled": true, "isDownload": true,
             "downloadUrl": "https://example.com/editor.zip"}
        ]
    }));
    let nav = derive_navigation(&cfg);
    assert_eq!(ids(&nav), vec!["editor"]);
    assert_eq!(
        nav[0].target,
        NavTarget::Download(DownloadAction::Open {
            url: "https://example.com/editor.zip".to_string()
        })
    );
}

#[test]
fn disabled_modules_are_not_filtered_out() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [{"id": "demo", "label": "Demo", "enabled": true}],
        "modules": {"demo": {"enabled": false}}
    }));
    assert_eq!(ids(&derive_navigation(&cfg)), vec!["demo"]);
}

#[test]
fn entries_serialize_with_target_kind() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [{"id": "faq", "label": "FAQ", "enabled": true}]
    }));
    let json = serde_json::to_value(derive_navigation(&cfg)).unwrap();
    assert_eq!(
        json,
        json!([{"id": "faq", "label": "FAQ", "target": {"kind": "scroll"}}])
    );
}
