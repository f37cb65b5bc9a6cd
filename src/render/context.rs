use maud::{Markup, html};

use crate::{
    media::resolver::{MediaReference, MediaResolver},
    module::{kind::ModuleKind, payload::ContentBlock},
    render::{media::media_markup, rich_text::RichText},
};

/// Shared collaborators handed to every renderer.
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    /// Classifies and normalizes media references.
    pub media: &'a MediaResolver,
    /// Renders authored rich-text fields.
    pub rich_text: &'a dyn RichText,
}

impl<'a> RenderCtx<'a> {
    /// Bundle the two collaborators.
    pub fn new(media: &'a MediaResolver, rich_text: &'a dyn RichText) -> Self {
        Self { media, rich_text }
    }

    /// Section heading: the authored title, or the kind's default when blank.
    pub fn heading(&self, kind: ModuleKind, title: Option<&str>) -> Markup {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(kind.default_title());
        html! { h2 class="module-title" { (title) } }
    }

    /// Resolve and render a media reference.
    pub fn media(&self, media: &MediaReference, class: &str) -> Markup {
        media_markup(&self.media.resolve(media), class)
    }

    /// Rich-text body with the shared `rich-text` class.
    pub fn rich(&self, content: &str) -> Markup {
        self.rich_text.render(content, "rich-text")
    }

    /// Local asset path (audio files and the like), normalized like media paths.
    pub fn asset(&self, src: &str) -> String {
        self.media.normalize_path(src)
    }

    /// Title, body and optional media of a [`ContentBlock`].
    pub fn block(&self, block: &ContentBlock, class: &str) -> Markup {
        html! {
            article class=(class) {
                @if let Some(media) = &block.media {
                    div class="block-media" { (self.media(media, "media")) }
                }
                div class="block-body" {
                    @if let Some(title) = &block.title {
                        h3 { (title) }
                    }
                    (self.rich(&block.content))
                }
            }
        }
    }
}

impl std::fmt::Debug for RenderCtx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCtx")
            .field("media", self.media)
            .finish_non_exhaustive()
    }
}
