use serde_json::json;

use super::*;
use crate::render::rich_text::RichText;

fn config(modules: serde_json::Value) -> ProductConfig {
    serde_json::from_value(json!({
        "product": {"brand": "Acme", "name": "Tube Pre", "heroImage": "hero.jpg"},
        "navigation": [
            {"id": "intro", "label": "Intro", "enabled": true},
            {"id": "concept", "label": "Concept", "enabled": true},
            {"id": "demo", "label": "Demo", "enabled": true},
            {"id": "faq", "label": "FAQ", "enabled": true},
            {"id": "manual", "label": "Manual", "enabled": true}
        ],
        "intro": {"enabled": true, "content": "Meet the Tube Pre."},
        "modules": modules
    }))
    .unwrap()
}

#[test]
fn fixed_order_hero_nav_intro_modules() {
    // Authored in reverse page order on purpose.
    let cfg = config(json!({
        "faq": {"enabled": true, "items": [{"question": "q", "answer": "a"}]},
        "demo": {"enabled": true, "videos": [{"src": "https://youtu.be/abc"}]},
        "concept": {"enabled": true, "sections": [{"content": "Warm."}]},
        "manual": {"enabled": true}
    }));
    let page = SectionComposer::default().compose(&cfg);
    let kinds: Vec<SectionKind> = page.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Hero,
            SectionKind::Navigation,
            SectionKind::Intro,
            SectionKind::Module(ModuleKind::Concept),
            SectionKind::Module(ModuleKind::Demo),
            SectionKind::Module(ModuleKind::Faq),
        ]
    );
    assert_eq!(
        page.anchor_ids().collect::<Vec<_>>(),
        vec!["concept", "demo", "faq"]
    );
    let ids: Vec<&str> = page.navigation.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["concept", "demo", "faq", "manual"]);
}

#[test]
fn empty_disabled_and_malformed_modules_are_skipped() {
    let cfg = config(json!({
        "concept": {"enabled": true, "sections": [{"content": "Warm."}]},
        "demo": {"enabled": true, "videos": []},
        "faq": {"enabled": true, "items": "not a list"},
        "specs": {"enabled": false, "groups": [{"rows": [{"label": "W", "value": "1"}]}]}
    }));
    let page = SectionComposer::default().compose(&cfg);
    assert_eq!(page.module_kinds(), vec![ModuleKind::Concept]);
    assert_eq!(page.anchor_ids().collect::<Vec<_>>(), vec!["concept"]);
}

#[test]
fn module_sections_are_wrapped_with_anchor() {
    let cfg = config(json!({
        "concept": {"enabled": true, "sections": [{"content": "Warm."}]}
    }));
    let page = SectionComposer::default().compose(&cfg);
    let html = page
        .section(SectionKind::Module(ModuleKind::Concept))
        .unwrap()
        .markup
        .clone()
        .into_string();
    assert!(html.starts_with(r#"<section id="concept" class="module module-concept">"#));
}

#[test]
fn missing_hero_image_drops_hero() {
    let mut cfg = config(json!({}));
    cfg.product.hero_image = None;
    let page = SectionComposer::default().compose(&cfg);
    assert!(page.section(SectionKind::Hero).is_none());
    assert_eq!(page.sections[0].kind, SectionKind::Navigation);
}

#[test]
fn settings_flow_into_media_paths() {
    let settings = EngineSettings {
        asset_base: "static".to_string(),
        ..EngineSettings::default()
    };
    let page = SectionComposer::new(settings).compose(&config(json!({})));
    let hero = page.section(SectionKind::Hero).unwrap().markup.clone().into_string();
    assert!(hero.contains(r#"src="/static/hero.jpg""#));
}

struct Upper;

impl RichText for Upper {
    fn render(&self, content: &str, class: &str) -> Markup {
        html! { div class=(class) { (content.to_uppercase()) } }
    }
}

#[test]
fn rich_text_renderer_is_pluggable() {
    let page = SectionComposer::default()
        .with_rich_text(Box::new(Upper))
        .compose(&config(json!({})));
    let intro = page.section(SectionKind::Intro).unwrap().markup.clone().into_string();
    assert!(intro.contains("MEET THE TUBE PRE."));
}

#[test]
fn session_starts_from_page_navigation() {
    let page = SectionComposer::default().compose(&config(json!({})));
    let session = page.session(&EngineSettings::default());
    assert_eq!(session.navigation().len(), page.navigation.len());
    assert_eq!(session.state().active_section_id(), None);
}

#[test]
fn nav_markup_reflects_session_active_id() {
    use crate::scroll::{session::PageEvent, viewport::StaticViewport};

    let cfg = config(json!({
        "concept": {"enabled": true, "sections": [{"content": "Warm."}]},
        "demo": {"enabled": true, "videos": [{"src": "https://youtu.be/abc"}]},
        "faq": {"enabled": true, "items": [{"question": "q", "answer": "a"}]}
    }));
    let page = SectionComposer::default().compose(&cfg);
    let settings = EngineSettings::default();
    let layout: Vec<(&str, f64)> = page.anchor_ids().map(|id| (id, 400.0)).collect();
    let mut vp = StaticViewport::stacked(600.0, &layout).with_header(80.0);
    let mut session = page.session(&settings);
    session.mount(&vp);

    let idle = page.nav_markup(session.state().active_section_id()).into_string();
    assert!(!idle.contains("nav-link active"));

    // probe = 900 + 80 + 100 = 1080, inside demo [1000, 1400).
    vp.set_scroll_y(900.0);
    session.handle(PageEvent::Scroll, &vp);
    assert_eq!(session.state().active_section_id(), Some("demo"));
    let html = page.nav_markup(session.state().active_section_id()).into_string();
    assert!(html.contains(r##"<a class="nav-link active" href="#demo""##));
    assert!(html.contains(r##"<a class="nav-link" href="#concept""##));
}
