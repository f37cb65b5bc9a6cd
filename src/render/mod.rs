use maud::Markup;

use crate::{module::payload::ModulePayload, render::context::RenderCtx};

pub(crate) mod block_diagram;
pub(crate) mod comparison;
pub(crate) mod concept;
pub(crate) mod connections;
pub(crate) mod context;
pub(crate) mod controls;
pub(crate) mod demo;
pub(crate) mod faq;
pub(crate) mod function;
pub(crate) mod handlesoft;
pub(crate) mod hero;
pub(crate) mod intro;
pub(crate) mod lineup;
pub(crate) mod media;
pub(crate) mod nav_bar;
pub(crate) mod operation;
pub(crate) mod rich_text;
pub(crate) mod samples;
pub(crate) mod software;
pub(crate) mod specs;
pub(crate) mod usage;

/// Body markup of one module section, without the enclosing `<section>`.
///
/// Returns `None` unless the module is enabled and has content. The manual never renders.
pub fn render_module(payload: &ModulePayload, ctx: &RenderCtx<'_>) -> Option<Markup> {
    if !payload.is_renderable() {
        return None;
    }
    let markup = match payload {
        ModulePayload::Concept(m) => concept::render(m, ctx),
        ModulePayload::Lineup(m) => lineup::render(m, ctx),
        ModulePayload::Comparison(m) => comparison::render(m, ctx),
        ModulePayload::Demo(m) => demo::render(m, ctx),
        ModulePayload::Samples(m) => samples::render(m, ctx),
        ModulePayload::Usage(m) => usage::render(m, ctx),
        ModulePayload::Function(m) => function::render(m, ctx),
        ModulePayload::Controls(m) => controls::render(m, ctx),
        ModulePayload::BlockDiagram(m) => block_diagram::render(m, ctx),
        ModulePayload::Connections(m) => connections::render(m, ctx),
        ModulePayload::Operation(m) => operation::render(m, ctx),
        ModulePayload::Software(m) => software::render(m, ctx),
        ModulePayload::Handlesoft(m) => handlesoft::render(m, ctx),
        ModulePayload::Faq(m) => faq::render(m, ctx),
        ModulePayload::Specs(m) => specs::render(m, ctx),
        ModulePayload::Manual(_) => return None,
    };
    Some(markup)
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
