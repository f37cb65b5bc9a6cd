use maud::{Markup, html};

use crate::media::resolver::ResolvedMedia;

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Markup for a resolved media reference.
///
/// Decorative videos are muted, looping and auto-playing, with no transport controls.
pub fn media_markup(media: &ResolvedMedia, class: &str) -> Markup {
    match media {
        ResolvedMedia::EmbeddedImage { data_uri, alt } => html! {
            img class=(class) src=(data_uri) alt=(alt.as_deref().unwrap_or(""));
        },
        ResolvedMedia::LocalImage {
            src,
            alt,
            transparent_background,
        } => html! {
            img class=(media_class(class, *transparent_background))
                src=(src)
                alt=(alt.as_deref().unwrap_or(""))
                loading="lazy";
        },
        ResolvedMedia::LocalDecorativeVideo {
            src,
            transparent_background,
        } => html! {
            video class=(media_class(class, *transparent_background))
                src=(src)
                autoplay muted loop playsinline
                aria-hidden="true" {}
        },
        ResolvedMedia::RemoteEmbed { embed_url, title } => html! {
            div class="media-embed" {
                iframe class=(class)
                    src=(embed_url)
                    title=(title.as_deref().unwrap_or("Video"))
                    allow=(EMBED_ALLOW)
                    allowfullscreen
                    loading="lazy" {}
            }
        },
    }
}

fn media_class(class: &str, transparent_background: bool) -> String {
    if transparent_background {
        format!("{class} media-transparent")
    } else {
        class.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/media.rs"]
mod tests;
