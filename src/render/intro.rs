use maud::{Markup, html};

use crate::{module::payload::IntroModule, render::context::RenderCtx};

/// Intro block. Not an anchor target, so it carries no id.
pub fn render_intro(intro: &IntroModule, ctx: &RenderCtx<'_>) -> Option<Markup> {
    if !intro.enabled || !intro.has_content() {
        return None;
    }
    Some(html! {
        div class="intro" {
            @if let Some(title) = &intro.title { h2 { (title) } }
            (ctx.rich(&intro.content))
            @if let Some(media) = &intro.media {
                (ctx.media(media, "intro-media"))
            }
        }
    })
}
