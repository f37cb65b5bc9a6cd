use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::ConnectionsModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &ConnectionsModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Connections, m.title.as_deref()))
        @if let Some(image) = &m.image {
            (ctx.media(image, "panel-image"))
        }
        dl class="ports" {
            @for p in &m.ports {
                dt { (p.name) }
                dd { (p.description) }
            }
        }
    }
}
