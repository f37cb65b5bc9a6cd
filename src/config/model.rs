use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    media::resolver::MediaReference,
    module::{
        kind::ModuleKind,
        payload::{IntroModule, LinkButton, ModulePayload},
    },
};

/// Navigation id that never becomes a navigation entry.
pub const INTRO_NAV_ID: &str = "intro";
/// Navigation id whose entry triggers the manual download.
pub const MANUAL_NAV_ID: &str = "manual";

/// Root configuration of one product page.
///
/// Treated as immutable for the lifetime of a page view. Module payloads are kept as raw JSON
/// and typed on access, so a malformed payload only disables its own module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfig {
    /// Brand, hero image and floating info panel.
    pub product: ProductInfo,
    /// Navigation entries in on-screen order.
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    /// Intro slot rendered right after the navigation bar.
    #[serde(
        default,
        deserialize_with = "lenient_intro",
        skip_serializing_if = "Option::is_none"
    )]
    pub intro: Option<IntroModule>,
    /// Raw module payloads keyed by [`ModuleKind::key`].
    #[serde(default)]
    pub modules: BTreeMap<String, serde_json::Value>,
}

/// Product block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Brand name.
    pub brand: String,
    /// Product name.
    pub name: String,
    /// One-line claim shown in the hero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Hero image; without it there is no hero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<MediaReference>,
    /// Floating info panel over the hero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoPanel>,
}

/// Floating info panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPanel {
    /// Panel heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Bullet lines.
    #[serde(default)]
    pub lines: Vec<String>,
    /// Price label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Buttons that open external URLs.
    #[serde(default)]
    pub buttons: Vec<LinkButton>,
}

/// One authored navigation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    /// Anchor id of the target section, or a reserved id (`intro`, `manual`).
    pub id: String,
    /// Caption.
    pub label: String,
    /// Whether the entry shows up in the navigation bar.
    pub enabled: bool,
    /// Entry triggers a download instead of scrolling.
    #[serde(default)]
    pub is_download: bool,
    /// File opened by a download entry other than the manual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl ProductConfig {
    /// Raw payload for `kind`, if present and not `null`.
    pub fn raw_module(&self, kind: ModuleKind) -> Option<&serde_json::Value> {
        self.modules.get(kind.key()).filter(|v| !v.is_null())
    }

    /// Typed payload for `kind` without logging; `None` when absent.
    pub fn parse_module(&self, kind: ModuleKind) -> Option<serde_json::Result<ModulePayload>> {
        self.raw_module(kind)
            .map(|raw| ModulePayload::parse(kind, raw))
    }

    /// Typed payload for `kind`. A malformed payload is logged and treated as absent.
    pub fn module(&self, kind: ModuleKind) -> Option<ModulePayload> {
        match self.parse_module(kind)? {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!(module = kind.key(), error = %e, "malformed module payload, treating as disabled");
                None
            }
        }
    }

    /// Whether `kind` would produce a section (or, for the manual, an action).
    pub fn module_is_renderable(&self, kind: ModuleKind) -> bool {
        self.module(kind).is_some_and(|p| p.is_renderable())
    }

    /// Keys under `modules` that name no known module kind.
    pub fn unknown_module_keys(&self) -> impl Iterator<Item = &str> {
        self.modules
            .keys()
            .map(String::as_str)
            .filter(|k| ModuleKind::from_key(k).is_none())
    }
}

fn lenient_intro<'de, D>(deserializer: D) -> Result<Option<IntroModule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(None);
    };
    match IntroModule::deserialize(&raw) {
        Ok(intro) => Ok(Some(intro)),
        Err(e) => {
            tracing::warn!(error = %e, "malformed intro payload, treating as disabled");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
