use crate::{
    config::model::{INTRO_NAV_ID, MANUAL_NAV_ID, NavigationItem, ProductConfig},
    module::{kind::ModuleKind, payload::ModulePayload},
    nav::action::DownloadAction,
};

/// One entry of the rendered navigation bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavEntry {
    /// Anchor id (scroll entries) or reserved id (download entries).
    pub id: String,
    /// Caption.
    pub label: String,
    /// What activating the entry does.
    pub target: NavTarget,
}

/// Activation behavior of a [`NavEntry`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavTarget {
    /// Smooth-scroll to the section whose anchor id equals the entry id.
    Scroll,
    /// Run a download action; never a scroll target.
    Download(DownloadAction),
}

impl NavEntry {
    /// Whether the entry scrolls to a section.
    pub fn is_scroll_target(&self) -> bool {
        matches!(self.target, NavTarget::Scroll)
    }

    /// The download action, for download entries.
    pub fn download_action(&self) -> Option<&DownloadAction> {
        match &self.target {
            NavTarget::Scroll => None,
            NavTarget::Download(action) => Some(action),
        }
    }
}

/// Filter the authored navigation to the entries shown in the navigation bar.
///
/// Keeps enabled items except `intro`, in authored order. `manual` and `isDownload` items become
/// download entries. Order is not corrected against page order; that is an authoring error
/// reported by [`crate::validate_config`].
pub fn derive_navigation(cfg: &ProductConfig) -> Vec<NavEntry> {
    cfg.navigation
        .iter()
        .filter(|item| item.enabled && item.id != INTRO_NAV_ID)
        .filter_map(|item| {
            let target = nav_target(cfg, item)?;
            Some(NavEntry {
                id: item.id.clone(),
                label: item.label.clone(),
                target,
            })
        })
        .collect()
}

fn nav_target(cfg: &ProductConfig, item: &NavigationItem) -> Option<NavTarget> {
    if item.id != MANUAL_NAV_ID && !item.is_download {
        return Some(NavTarget::Scroll);
    }
    match download_action(cfg, item) {
        Some(action) => Some(NavTarget::Download(action)),
        None => {
            tracing::warn!(id = %item.id, "download entry without download action, dropping");
            None
        }
    }
}

/// Download action of a `manual` or `isDownload` navigation item.
///
/// The manual always resolves: brand and product identify it, the file URL is optional and comes
/// from the manual module first, then from the item's `downloadUrl`. Other download items need a
/// non-blank `downloadUrl`.
pub(crate) fn download_action(
    cfg: &ProductConfig,
    item: &NavigationItem,
) -> Option<DownloadAction> {
    let download_url = item
        .download_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    if item.id == MANUAL_NAV_ID {
        let manual_url = match cfg.module(ModuleKind::Manual) {
            Some(ModulePayload::Manual(m)) => m.url,
            _ => None,
        };
        return Some(DownloadAction::Manual {
            brand: cfg.product.brand.clone(),
            product: cfg.product.name.clone(),
            url: manual_url.or_else(|| download_url.map(str::to_string)),
        });
    }

    download_url.map(|url| DownloadAction::Open {
        url: url.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/nav/derive.rs"]
mod tests;
