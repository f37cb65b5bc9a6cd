use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::HandlesoftModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &HandlesoftModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Handlesoft, m.title.as_deref()))
        @if let Some(d) = &m.description {
            (ctx.rich(d))
        }
        ul class="bundles" {
            @for b in &m.bundles {
                li class="bundle" {
                    @if let Some(image) = &b.image {
                        (ctx.media(image, "bundle-image"))
                    }
                    h3 {
                        @if let Some(link) = &b.link {
                            a href=(link) target="_blank" rel="noopener" { (b.name) }
                        } @else {
                            (b.name)
                        }
                    }
                    p { (b.description) }
                }
            }
        }
    }
}
