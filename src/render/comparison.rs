use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::ComparisonModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &ComparisonModule, ctx: &RenderCtx<'_>) -> Markup {
    let width = m.columns.len();
    html! {
        (ctx.heading(ModuleKind::Comparison, m.title.as_deref()))
        div class="table-scroll" {
            table class="comparison" {
                thead {
                    tr {
                        th {}
                        @for c in &m.columns { th scope="col" { (c) } }
                    }
                }
                tbody {
                    @for row in &m.rows {
                        tr {
                            th scope="row" { (row.label) }
                            // Short rows are padded so every row spans all columns.
                            @for i in 0..width {
                                td { (row.values.get(i).map(String::as_str).unwrap_or("")) }
                            }
                        }
                    }
                }
            }
        }
        @if let Some(note) = &m.note {
            p class="note" { (note) }
        }
    }
}
