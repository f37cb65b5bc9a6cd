/// Side effect bound to a download navigation entry or a software button.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum DownloadAction {
    /// Fetch the owner's manual of `brand` / `product`.
    Manual {
        /// Brand name.
        brand: String,
        /// Product name.
        product: String,
        /// Direct file URL, when the configuration names one.
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// Open a URL.
    Open {
        /// Target URL.
        url: String,
    },
}

/// External collaborator that performs downloads. The engine only invokes it.
pub trait DownloadHandler {
    /// Download the manual of `product` by `brand`; `url` is set when the page names the file.
    fn download_manual(&mut self, brand: &str, product: &str, url: Option<&str>);

    /// Open `url` (new tab, file download, ...).
    fn open(&mut self, url: &str);
}

impl DownloadAction {
    /// Invoke the matching handler method.
    pub fn dispatch(&self, handler: &mut dyn DownloadHandler) {
        match self {
            DownloadAction::Manual {
                brand,
                product,
                url,
            } => handler.download_manual(brand, product, url.as_deref()),
            DownloadAction::Open { url } => handler.open(url),
        }
    }

    /// Stable action name, as emitted in `data-download` / `data-action` attributes.
    pub fn name(&self) -> &'static str {
        match self {
            DownloadAction::Manual { .. } => "manual",
            DownloadAction::Open { .. } => "open",
        }
    }

    /// URL for markup `href`s; manual downloads without a file URL have none.
    pub fn href(&self) -> Option<&str> {
        match self {
            DownloadAction::Manual { url, .. } => url.as_deref(),
            DownloadAction::Open { url } => Some(url),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/action.rs"]
mod tests;
