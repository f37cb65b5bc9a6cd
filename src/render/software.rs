use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::SoftwareModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &SoftwareModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Software, m.title.as_deref()))
        div class="software-list" {
            @for item in &m.items {
                article class="software" {
                    @if let Some(image) = &item.image {
                        (ctx.media(image, "software-image"))
                    }
                    h3 { (item.name) }
                    @if let Some(d) = &item.description {
                        (ctx.rich(d))
                    }
                    @if !item.buttons.is_empty() {
                        div class="buttons" {
                            @for b in &item.buttons {
                                a class="button" href=(b.url) data-action="open" data-url=(b.url)
                                    target="_blank" rel="noopener" { (b.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
