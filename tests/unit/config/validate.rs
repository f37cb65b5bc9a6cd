use super::*;
use serde_json::json;

fn config(value: serde_json::Value) -> ProductConfig {
    serde_json::from_value(value).unwrap()
}

fn messages(cfg: &ProductConfig) -> Vec<String> {
    match validate_config(cfg) {
        Ok(()) => Vec::new(),
        Err(e) => e.issues.iter().map(|i| i.to_string()).collect(),
    }
}

#[test]
fn consistent_config_passes() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "intro", "label": "Top", "enabled": true},
            {"id": "concept", "label": "Concept", "enabled": true},
            {"id": "faq", "label": "FAQ", "enabled": true},
            {"id": "manual", "label": "Manual", "enabled": true, "isDownload": true}
        ],
        "modules": {
            "concept": {"enabled": true, "sections": [{"content": "x"}]},
            "faq": {"enabled": true, "items": [{"question": "q", "answer": "a"}]},
            "manual": {"enabled": true}
        }
    }));
    assert_eq!(messages(&cfg), Vec::<String>::new());
}

#[test]
fn duplicate_ids_are_reported_with_path() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "faq", "label": "FAQ", "enabled": true},
            {"id": "faq", "label": "FAQ again", "enabled": false}
        ],
        "modules": {"faq": {"enabled": true, "items": [{"question": "q", "answer": "a"}]}}
    }));
    let m = messages(&cfg);
    assert_eq!(m.len(), 1);
    assert!(m[0].starts_with("$.navigation[1].id: duplicate"));
}

#[test]
fn enabled_entry_for_empty_module_is_reported() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [{"id": "demo", "label": "Demo", "enabled": true}],
        "modules": {"demo": {"enabled": true, "videos": []}}
    }));
    let m = messages(&cfg);
    assert_eq!(m.len(), 1);
    assert!(m[0].contains("renders no section"));
}

#[test]
fn unknown_ids_and_keys_are_reported() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [{"id": "gallery", "label": "Gallery", "enabled": false}],
        "modules": {"gallery": {"enabled": true}}
    }));
    let m = messages(&cfg);
    assert!(m.iter().any(|s| s == "$.modules.gallery: unknown module kind"));
    assert!(m.iter().any(|s| s.contains("names no module")));
}

#[test]
fn download_without_action_is_reported() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "manual", "label": "Manual", "enabled": true},
            {"id": "driver", "label": "Driver", "enabled": true, "isDownload": true},
            {"id": "firmware", "label": "Firmware", "enabled": true, "isDownload": true,
             "downloadUrl": "https://example.com/fw.zip"}
        ]
    }));
    let m = messages(&cfg);
    assert_eq!(
        m,
        vec!["$.navigation[1].id: download entry 'driver' has no resolvable download action"]
    );
}

#[test]
fn accepted_download_entries_are_exactly_the_derived_ones() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Pre"},
        "navigation": [
            {"id": "manual", "label": "Manual", "enabled": true},
            {"id": "driver", "label": "Driver", "enabled": true, "isDownload": true},
            {"id": "editor", "label": "Editor", "enabled": true, "isDownload": true,
             "downloadUrl": "  "},
            {"id": "firmware", "label": "Firmware", "enabled": true, "isDownload": true,
             "downloadUrl": "https://example.com/fw.zip"}
        ]
    }));
    let derived: Vec<String> = crate::nav::derive::derive_navigation(&cfg)
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(derived, vec!["manual", "firmware"]);

    let rejected: Vec<String> = validate_config(&cfg)
        .unwrap_err()
        .issues
        .into_iter()
        .map(|i| i.message)
        .collect();
    for item in &cfg.navigation {
        let reported = rejected.iter().any(|m| m.contains(&format!("'{}'", item.id)));
        assert_eq!(reported, !derived.contains(&item.id), "{}", item.id);
    }
}

#[test]
fn bare_manual_entry_is_valid() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Pre"},
        "navigation": [{"id": "manual", "label": "Manual", "enabled": true}]
    }));
    assert_eq!(messages(&cfg), Vec::<String>::new());
}

#[test]
fn nav_order_must_follow_page_order() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "navigation": [
            {"id": "specs", "label": "Specs", "enabled": true},
            {"id": "concept", "label": "Concept", "enabled": true}
        ],
        "modules": {
            "concept": {"enabled": true, "sections": [{"content": "x"}]},
            "specs": {"enabled": true, "groups": [{"rows": [{"label": "Weight", "value": "2kg"}]}]}
        }
    }));
    let m = messages(&cfg);
    assert_eq!(m.len(), 1);
    assert!(m[0].starts_with("$.navigation[1].id:"));
    assert!(m[0].contains("'concept' is listed after 'specs'"));
}

#[test]
fn malformed_payload_is_reported() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "modules": {"faq": {"enabled": true, "items": "oops"}}
    }));
    let m = messages(&cfg);
    assert_eq!(m.len(), 1);
    assert!(m[0].starts_with("$.modules.faq: malformed payload"));
}

#[test]
fn issues_display_one_per_line() {
    let cfg = config(json!({"product": {"brand": " ", "name": ""}}));
    let err = validate_config(&cfg).unwrap_err();
    assert_eq!(
        err.to_string(),
        "$.product.brand: brand must be non-empty\n$.product.name: name must be non-empty"
    );
}
