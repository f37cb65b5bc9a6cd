//! Media reference classification.
//!
//! Every media string in a product configuration goes through [`MediaResolver::resolve`]. The
//! classification is total: any string maps to exactly one [`RenderStrategy`], with a muted,
//! looping local video as the fall-through.

use crate::config::settings::EngineSettings;

const DATA_IMAGE_PREFIX: &str = "data:image/";
const DATA_URI_PREFIX: &str = "data:";
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];
const SHORT_LINK_HOST: &str = "youtu.be/";
const VIDEO_HOST_MARKERS: [&str; 3] = ["youtube.com", "youtube-nocookie.com", "youtu.be"];

/// Media reference as authored: a bare path/URL or a typed object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MediaReference {
    /// Path or URL whose rendering strategy is inferred from its shape.
    Bare(String),
    /// Typed reference; `type` wins over any inference from `src`.
    Structured(StructuredMedia),
}

impl MediaReference {
    /// Raw `src` as authored.
    pub fn src(&self) -> &str {
        match self {
            MediaReference::Bare(s) => s,
            MediaReference::Structured(m) => &m.src,
        }
    }
}

impl From<&str> for MediaReference {
    fn from(s: &str) -> Self {
        MediaReference::Bare(s.to_string())
    }
}

/// Typed media reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredMedia {
    /// Declared media type.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Path or URL.
    pub src: String,
    /// Alternative text for images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Render without the default backdrop.
    #[serde(default)]
    pub transparent_background: bool,
    /// Video standing in for an animated GIF: always rendered as a decorative video, whatever
    /// `type` says. Inline `data:` sources are left as images.
    #[serde(default)]
    pub as_animated_gif: bool,
}

/// Declared type of a [`StructuredMedia`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video (local file or video-platform link).
    Video,
}

/// How a media reference is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum RenderStrategy {
    /// `data:image/...` URI rendered as `<img>`.
    EmbeddedImage,
    /// Image file rendered as `<img>`.
    LocalImage,
    /// Muted, looping, auto-playing video without transport controls.
    LocalDecorativeVideo,
    /// Video-platform link rendered through an embeddable player URL.
    RemoteEmbed,
}

/// A media reference after classification and URL/path normalization.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ResolvedMedia {
    /// Inline image data.
    EmbeddedImage {
        /// The data URI, untouched.
        data_uri: String,
        /// Alternative text.
        alt: Option<String>,
    },
    /// Image file.
    LocalImage {
        /// Normalized path or absolute URL.
        src: String,
        /// Alternative text.
        alt: Option<String>,
        /// Render without backdrop.
        transparent_background: bool,
    },
    /// Decorative looping video.
    LocalDecorativeVideo {
        /// Normalized path or absolute URL.
        src: String,
        /// Render without backdrop.
        transparent_background: bool,
    },
    /// Video-platform player.
    RemoteEmbed {
        /// Canonical embed URL (or the original URL for unrecognized shapes).
        embed_url: String,
        /// Accessible title for the player frame.
        title: Option<String>,
    },
}

impl ResolvedMedia {
    /// Strategy tag of this resolution.
    pub fn strategy(&self) -> RenderStrategy {
        match self {
            ResolvedMedia::EmbeddedImage { .. } => RenderStrategy::EmbeddedImage,
            ResolvedMedia::LocalImage { .. } => RenderStrategy::LocalImage,
            ResolvedMedia::LocalDecorativeVideo { .. } => RenderStrategy::LocalDecorativeVideo,
            ResolvedMedia::RemoteEmbed { .. } => RenderStrategy::RemoteEmbed,
        }
    }

    /// The URL the renderer will emit.
    pub fn url(&self) -> &str {
        match self {
            ResolvedMedia::EmbeddedImage { data_uri, .. } => data_uri,
            ResolvedMedia::LocalImage { src, .. } => src,
            ResolvedMedia::LocalDecorativeVideo { src, .. } => src,
            ResolvedMedia::RemoteEmbed { embed_url, .. } => embed_url,
        }
    }
}

/// Site-wide media classification policy.
#[derive(Clone, Debug)]
pub struct MediaResolver {
    asset_base: String,
    embed_base_url: String,
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl MediaResolver {
    /// Build a resolver. `asset_base` is the fixed leading segment of local paths.
    pub fn new(asset_base: impl Into<String>, embed_base_url: impl Into<String>) -> Self {
        let asset_base = asset_base.into();
        let mut embed_base_url = embed_base_url.into();
        if !embed_base_url.ends_with('/') {
            embed_base_url.push('/');
        }
        Self {
            asset_base: asset_base.trim_matches('/').to_string(),
            embed_base_url,
        }
    }

    /// Build a resolver from engine settings.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            settings.asset_base.clone(),
            settings.embed_base_url.clone(),
        )
    }

    /// Classify a bare string. First match wins:
    /// data image URI, image extension, video-platform host, otherwise decorative video.
    pub fn classify(&self, src: &str) -> RenderStrategy {
        let strategy = if src.starts_with(DATA_IMAGE_PREFIX) {
            RenderStrategy::EmbeddedImage
        } else if has_image_extension(src) {
            RenderStrategy::LocalImage
        } else if is_video_platform_url(src) {
            RenderStrategy::RemoteEmbed
        } else {
            RenderStrategy::LocalDecorativeVideo
        };
        tracing::trace!(src, ?strategy, "classified media reference");
        strategy
    }

    /// Resolve a reference into a render-ready [`ResolvedMedia`].
    pub fn resolve(&self, media: &MediaReference) -> ResolvedMedia {
        match media {
            MediaReference::Bare(src) => {
                let strategy = self.classify(src);
                self.build(strategy, src, None, false)
            }
            MediaReference::Structured(m) => {
                let strategy = match m.kind {
                    _ if m.as_animated_gif && !m.src.starts_with(DATA_URI_PREFIX) => {
                        RenderStrategy::LocalDecorativeVideo
                    }
                    MediaKind::Image if m.src.starts_with(DATA_URI_PREFIX) => {
                        RenderStrategy::EmbeddedImage
                    }
                    MediaKind::Image => RenderStrategy::LocalImage,
                    MediaKind::Video if is_video_platform_url(&m.src) => {
                        RenderStrategy::RemoteEmbed
                    }
                    MediaKind::Video => RenderStrategy::LocalDecorativeVideo,
                };
                self.build(strategy, &m.src, m.alt.clone(), m.transparent_background)
            }
        }
    }

    fn build(
        &self,
        strategy: RenderStrategy,
        src: &str,
        alt: Option<String>,
        transparent_background: bool,
    ) -> ResolvedMedia {
        match strategy {
            RenderStrategy::EmbeddedImage => ResolvedMedia::EmbeddedImage {
                data_uri: src.to_string(),
                alt,
            },
            RenderStrategy::LocalImage => ResolvedMedia::LocalImage {
                src: self.normalize_path(src),
                alt,
                transparent_background,
            },
            RenderStrategy::LocalDecorativeVideo => ResolvedMedia::LocalDecorativeVideo {
                src: self.normalize_path(src),
                transparent_background,
            },
            RenderStrategy::RemoteEmbed => ResolvedMedia::RemoteEmbed {
                embed_url: self.embed_url(src),
                title: alt,
            },
        }
    }

    /// Rewrite a local reference to an absolute site path under the asset base.
    ///
    /// References starting with `/`, `http` or `data:` are returned unchanged, which makes the
    /// operation idempotent.
    pub fn normalize_path(&self, src: &str) -> String {
        if src.starts_with('/') || src.starts_with("http") || src.starts_with(DATA_URI_PREFIX) {
            return src.to_string();
        }

        let s = src.replace('\\', "/");
        let mut rel = s.as_str();
        while let Some(rest) = rel.strip_prefix("./") {
            rel = rest;
        }
        let rel = rel.trim_start_matches('/');

        if self.asset_base.is_empty() {
            return format!("/{rel}");
        }
        let already_based = rel
            .strip_prefix(self.asset_base.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if already_based {
            format!("/{rel}")
        } else {
            format!("/{}/{rel}", self.asset_base)
        }
    }

    /// Canonical embed URL for the two known video-platform URL shapes.
    ///
    /// `https://youtu.be/<id>?...` and `...youtube.com/watch?v=<id>&...` both become
    /// `<embed base><id>`; anything else is returned unchanged.
    pub fn embed_url(&self, url: &str) -> String {
        if let Some(idx) = url.find(SHORT_LINK_HOST) {
            let id = take_id(&url[idx + SHORT_LINK_HOST.len()..]);
            if !id.is_empty() {
                return format!("{}{id}", self.embed_base_url);
            }
        }
        if url.contains("youtube.com")
            && let Some(id) = query_param(url, "v")
            && !id.is_empty()
        {
            return format!("{}{id}", self.embed_base_url);
        }
        url.to_string()
    }
}

fn strip_query(s: &str) -> &str {
    let end = s.find(['?', '#']).unwrap_or(s.len());
    &s[..end]
}

fn has_image_extension(src: &str) -> bool {
    let path = strip_query(src);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

fn is_video_platform_url(src: &str) -> bool {
    VIDEO_HOST_MARKERS.iter().any(|m| src.contains(m))
}

fn take_id(rest: &str) -> &str {
    let end = rest.find(['?', '&', '#', '/']).unwrap_or(rest.len());
    &rest[..end]
}

fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == name).then_some(v)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/media/resolver.rs"]
mod tests;
