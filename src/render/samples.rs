use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::SamplesModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &SamplesModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Samples, m.title.as_deref()))
        ul class="samples" {
            @for s in &m.samples {
                li {
                    h3 { (s.title) }
                    @if let Some(d) = &s.description { p { (d) } }
                    audio controls preload="none" src=(ctx.asset(&s.src)) {}
                }
            }
        }
    }
}
