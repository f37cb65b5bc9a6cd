use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::BlockDiagramModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &BlockDiagramModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::BlockDiagram, m.title.as_deref()))
        @for d in &m.diagrams {
            figure class="diagram" {
                @if let Some(t) = &d.title { h3 { (t) } }
                (ctx.media(&d.image, "diagram-image"))
                @if let Some(c) = &d.caption { figcaption { (c) } }
            }
        }
    }
}
