use super::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl DownloadHandler for Recorder {
    fn download_manual(&mut self, brand: &str, product: &str, url: Option<&str>) {
        self.calls
            .push(format!("manual:{brand}:{product}:{}", url.unwrap_or("-")));
    }

    fn open(&mut self, url: &str) {
        self.calls.push(format!("open:{url}"));
    }
}

#[test]
fn dispatch_routes_to_handler() {
    let mut rec = Recorder::default();
    DownloadAction::Manual {
        brand: "Acme".to_string(),
        product: "Tube Pre".to_string(),
        url: None,
    }
    .dispatch(&mut rec);
    DownloadAction::Open {
        url: "https://example.com/app.dmg".to_string(),
    }
    .dispatch(&mut rec);
    assert_eq!(
        rec.calls,
        vec![
            "manual:Acme:Tube Pre:-".to_string(),
            "open:https://example.com/app.dmg".to_string()
        ]
    );
}

#[test]
fn serializes_with_action_tag() {
    let json = serde_json::to_value(DownloadAction::Open {
        url: "u".to_string(),
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({"action": "open", "url": "u"}));
}

#[test]
fn name_matches_serialized_tag() {
    let open = DownloadAction::Open {
        url: "https://example.com/a.zip".to_string(),
    };
    let json = serde_json::to_value(&open).unwrap();
    assert_eq!(json["action"], open.name());
    assert_eq!(
        DownloadAction::Manual {
            brand: "b".to_string(),
            product: "p".to_string(),
            url: None
        }
        .name(),
        "manual"
    );
}
