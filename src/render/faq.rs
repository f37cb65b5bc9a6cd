use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::FaqModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &FaqModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Faq, m.title.as_deref()))
        div class="faq" {
            @for item in &m.items {
                details {
                    summary { (item.question) }
                    (ctx.rich(&item.answer))
                }
            }
        }
    }
}
