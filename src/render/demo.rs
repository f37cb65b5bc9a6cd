use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::DemoModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &DemoModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Demo, m.title.as_deref()))
        @if let Some(d) = &m.description {
            (ctx.rich(d))
        }
        div class="demo-grid" {
            @for v in &m.videos {
                figure class="demo-video" {
                    (ctx.media(&v.src, "demo-player"))
                    @if v.title.is_some() || v.description.is_some() {
                        figcaption {
                            @if let Some(t) = &v.title { strong { (t) } }
                            @if let Some(d) = &v.description { span { (d) } }
                        }
                    }
                }
            }
        }
    }
}
