use maud::{Markup, html};

use crate::{
    config::{model::ProductConfig, settings::EngineSettings},
    media::resolver::MediaResolver,
    module::kind::ModuleKind,
    nav::derive::{NavEntry, derive_navigation},
    render::{
        context::RenderCtx,
        hero::render_hero,
        intro::render_intro,
        nav_bar::render_nav_bar,
        render_module,
        rich_text::{PlainRichText, RichText},
    },
    scroll::session::PageSession,
};

/// What a [`Section`] of the composed page is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    /// Hero image with the info panel.
    Hero,
    /// Sticky navigation bar.
    Navigation,
    /// Intro block right after the navigation bar.
    Intro,
    /// One content module.
    Module(ModuleKind),
}

/// One rendered block of the page, in page order.
#[derive(Clone, Debug)]
pub struct Section {
    /// What produced this section.
    pub kind: SectionKind,
    /// Anchor id; only module sections have one.
    pub anchor_id: Option<String>,
    /// Rendered HTML fragment.
    pub markup: Markup,
}

/// Result of composing a [`ProductConfig`].
#[derive(Clone, Debug)]
pub struct ComposedPage {
    /// Brand name, used in the document title.
    pub brand: String,
    /// Product name, used in the document title.
    pub product_name: String,
    /// Derived navigation, in authored order.
    pub navigation: Vec<NavEntry>,
    /// Rendered sections, top to bottom.
    pub sections: Vec<Section>,
}

impl ComposedPage {
    /// Anchor ids of the rendered module sections, top to bottom.
    pub fn anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| s.anchor_id.as_deref())
    }

    /// Module kinds that produced a section, in page order.
    pub fn module_kinds(&self) -> Vec<ModuleKind> {
        self.sections
            .iter()
            .filter_map(|s| match s.kind {
                SectionKind::Module(kind) => Some(kind),
                _ => None,
            })
            .collect()
    }

    /// First section of the given kind, if it was rendered.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Navigation bar markup with `active_id` highlighted.
    ///
    /// Pass `session.state().active_section_id()` to reflect the scroll-spy result.
    pub fn nav_markup(&self, active_id: Option<&str>) -> Markup {
        render_nav_bar(&self.navigation, active_id)
    }

    /// Fresh scroll session over this page's navigation.
    pub fn session(&self, settings: &EngineSettings) -> PageSession {
        PageSession::new(self.navigation.clone(), settings)
    }
}

/// Assembles a product page: hero, navigation bar, intro, then module sections in the fixed
/// page order.
pub struct SectionComposer {
    settings: EngineSettings,
    media: MediaResolver,
    rich_text: Box<dyn RichText>,
}

impl Default for SectionComposer {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl SectionComposer {
    /// Composer with the plain rich text renderer.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            media: MediaResolver::from_settings(&settings),
            settings,
            rich_text: Box::new(PlainRichText),
        }
    }

    /// Replace the rich text renderer.
    pub fn with_rich_text(mut self, rich_text: Box<dyn RichText>) -> Self {
        self.rich_text = rich_text;
        self
    }

    /// Engine constants in use.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Media resolver built from the settings.
    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    /// Compose the page. Never fails: absent, disabled, empty and malformed modules are skipped.
    #[tracing::instrument(skip(self, cfg), fields(product = %cfg.product.name))]
    pub fn compose(&self, cfg: &ProductConfig) -> ComposedPage {
        let ctx = RenderCtx::new(&self.media, self.rich_text.as_ref());
        let navigation = derive_navigation(cfg);
        let mut sections = Vec::new();

        if let Some(markup) = render_hero(&cfg.product, &ctx) {
            sections.push(Section {
                kind: SectionKind::Hero,
                anchor_id: None,
                markup,
            });
        } else {
            tracing::debug!("no hero image, skipping hero");
        }

        sections.push(Section {
            kind: SectionKind::Navigation,
            anchor_id: None,
            markup: render_nav_bar(&navigation, None),
        });

        if let Some(markup) = cfg.intro.as_ref().and_then(|i| render_intro(i, &ctx)) {
            sections.push(Section {
                kind: SectionKind::Intro,
                anchor_id: None,
                markup,
            });
        }

        for kind in ModuleKind::ALL.into_iter().filter(|k| k.renders_section()) {
            let Some(payload) = cfg.module(kind) else {
                tracing::debug!(module = kind.key(), "module absent");
                continue;
            };
            if !payload.enabled() {
                tracing::debug!(module = kind.key(), "module disabled");
                continue;
            }
            let Some(body) = render_module(&payload, &ctx) else {
                tracing::debug!(module = kind.key(), "module enabled but empty");
                continue;
            };
            let anchor = kind.anchor_id();
            sections.push(Section {
                kind: SectionKind::Module(kind),
                anchor_id: Some(anchor.to_string()),
                markup: html! {
                    section id=(anchor) class={ "module module-" (kind.key()) } { (body) }
                },
            });
        }

        tracing::debug!(
            sections = sections.len(),
            nav_entries = navigation.len(),
            "composed page"
        );
        ComposedPage {
            brand: cfg.product.brand.clone(),
            product_name: cfg.product.name.clone(),
            navigation,
            sections,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
