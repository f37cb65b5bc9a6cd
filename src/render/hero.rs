use maud::{Markup, html};

use crate::{config::model::ProductInfo, render::context::RenderCtx};

/// Hero block with the floating info panel. `None` without a hero image.
pub fn render_hero(product: &ProductInfo, ctx: &RenderCtx<'_>) -> Option<Markup> {
    let image = product.hero_image.as_ref()?;
    Some(html! {
        div class="hero" {
            (ctx.media(image, "hero-media"))
            div class="hero-caption" {
                p class="brand" { (product.brand) }
                h1 { (product.name) }
                @if let Some(tagline) = &product.tagline {
                    p class="tagline" { (tagline) }
                }
            }
            @if let Some(info) = &product.info {
                aside class="info-panel" {
                    @if let Some(title) = &info.title { h2 { (title) } }
                    @if !info.lines.is_empty() {
                        ul { @for line in &info.lines { li { (line) } } }
                    }
                    @if let Some(price) = &info.price {
                        p class="price" { (price) }
                    }
                    @for b in &info.buttons {
                        a class="button" href=(b.url) data-action="open" data-url=(b.url)
                            target="_blank" rel="noopener" { (b.label) }
                    }
                }
            }
        }
    })
}
