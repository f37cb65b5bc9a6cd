use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::UsageModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &UsageModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Usage, m.title.as_deref()))
        div class="usage-grid" {
            @for item in &m.items {
                (ctx.block(item, "usage-item"))
            }
        }
    }
}
