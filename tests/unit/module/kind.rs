use super::*;

#[test]
fn keys_round_trip_for_every_kind() {
    for kind in ModuleKind::ALL {
        assert_eq!(ModuleKind::from_key(kind.key()), Some(kind));
    }
    assert_eq!(ModuleKind::from_key("hero"), None);
    assert_eq!(ModuleKind::from_key("intro"), None);
}

#[test]
fn all_is_in_page_order() {
    for (idx, kind) in ModuleKind::ALL.iter().enumerate() {
        assert_eq!(kind.page_index(), idx);
    }
    assert_eq!(ModuleKind::ALL.first(), Some(&ModuleKind::Concept));
    assert_eq!(ModuleKind::ALL.last(), Some(&ModuleKind::Manual));
}

#[test]
fn only_manual_skips_section() {
    let skipping: Vec<_> = ModuleKind::ALL
        .into_iter()
        .filter(|k| !k.renders_section())
        .collect();
    assert_eq!(skipping, vec![ModuleKind::Manual]);
}

#[test]
fn serde_uses_config_keys() {
    let json = serde_json::to_string(&ModuleKind::BlockDiagram).unwrap();
    assert_eq!(json, "\"blockDiagram\"");
}
