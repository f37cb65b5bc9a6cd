use super::*;
use serde_json::json;

fn config(value: serde_json::Value) -> ProductConfig {
    serde_json::from_value(value).unwrap()
}

#[test]
fn malformed_module_is_treated_as_absent() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "modules": {
            "demo": {"enabled": true, "videos": 42},
            "faq": {"enabled": true, "items": [{"question": "Q", "answer": "A"}]}
        }
    }));
    assert!(cfg.module(ModuleKind::Demo).is_none());
    assert!(matches!(cfg.parse_module(ModuleKind::Demo), Some(Err(_))));
    assert!(cfg.module_is_renderable(ModuleKind::Faq));
}

#[test]
fn null_module_is_absent() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "modules": {"specs": null}
    }));
    assert!(cfg.raw_module(ModuleKind::Specs).is_none());
    assert!(cfg.parse_module(ModuleKind::Specs).is_none());
}

#[test]
fn malformed_intro_is_dropped_not_fatal() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "intro": {"enabled": "yes"}
    }));
    assert!(cfg.intro.is_none());
}

#[test]
fn intro_parses_when_well_formed() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "intro": {"enabled": true, "content": "Hello"}
    }));
    let intro = cfg.intro.unwrap();
    assert!(intro.enabled && intro.has_content());
}

#[test]
fn unknown_keys_are_reported() {
    let cfg = config(json!({
        "product": {"brand": "Acme", "name": "Tube Pre"},
        "modules": {"faq": {}, "gallery": {}, "hero": {}}
    }));
    let unknown: Vec<_> = cfg.unknown_module_keys().collect();
    assert_eq!(unknown, vec!["gallery", "hero"]);
}

#[test]
fn navigation_item_defaults() {
    let item: NavigationItem =
        serde_json::from_value(json!({"id": "faq", "label": "FAQ", "enabled": true})).unwrap();
    assert!(!item.is_download);
    assert!(item.download_url.is_none());
}
