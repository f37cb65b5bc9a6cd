use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::LineupModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &LineupModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Lineup, m.title.as_deref()))
        ul class="lineup" {
            @for p in &m.products {
                li.lineup-card.current[p.current] {
                    @if let Some(image) = &p.image {
                        (ctx.media(image, "lineup-image"))
                    }
                    h3 {
                        @if let Some(link) = p.link.as_deref().filter(|_| !p.current) {
                            a href=(link) { (p.name) }
                        } @else {
                            (p.name)
                        }
                    }
                    @if let Some(d) = &p.description {
                        p { (d) }
                    }
                }
            }
        }
    }
}
