use maud::{Markup, html};

use crate::{
    module::{kind::ModuleKind, payload::ControlsModule},
    render::context::RenderCtx,
};

pub(crate) fn render(m: &ControlsModule, ctx: &RenderCtx<'_>) -> Markup {
    html! {
        (ctx.heading(ModuleKind::Controls, m.title.as_deref()))
        @if let Some(image) = &m.image {
            (ctx.media(image, "panel-image"))
        }
        ol class="controls" {
            @for (i, c) in m.controls.iter().enumerate() {
                li {
                    span class="control-number" {
                        @if let Some(n) = &c.number { (n) } @else { (i + 1) }
                    }
                    h3 { (c.name) }
                    (ctx.rich(&c.description))
                }
            }
        }
    }
}
