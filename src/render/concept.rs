use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::ConceptModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &ConceptModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Concept, m.title.as_deref()))
        @for (i, section) in m.sections.iter().enumerate() {
            // Alternate media left/right.
            (ctx.block(section, if i % 2 == 0 { "concept-block" } else { "concept-block reversed" }))
        }
    }
}
