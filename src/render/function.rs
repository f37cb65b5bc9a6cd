use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::FunctionModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &FunctionModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Function, m.title.as_deref()))
        div class="feature-list" {
            @for f in &m.features {
                (ctx.block(f, "feature"))
            }
        }
    }
}
