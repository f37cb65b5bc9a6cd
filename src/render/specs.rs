use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::SpecsModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &SpecsModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Specs, m.title.as_deref()))
        // Groups without rows are dropped.
        @for g in m.groups.iter().filter(|g| !g.rows.is_empty()) {
            div class="spec-group" {
                @if let Some(t) = &g.title { h3 { (t) } }
                table class="specs" {
                    tbody {
                        @for row in &g.rows {
                            tr {
                                th scope="row" { (row.label) }
                                td { (row.value) }
                            }
                        }
                    }
                }
            }
        }
    }
}
