use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::OperationModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &OperationModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Operation, m.title.as_deref()))
        ol class="steps" {
            @for step in &m.steps {
                li { (ctx.block(step, "step")) }
            }
        }
    }
}
