//! Productpage composes configuration-driven product pages.
//!
//! A single [`ProductConfig`] value describes a product: brand and hero, an authored navigation
//! list, and a fixed, closed set of optional content modules. The crate turns it into:
//!
//! 1. **Sections**: [`SectionComposer`] renders hero, navigation bar, intro and every enabled,
//!    non-empty module in a fixed page order (HTML via `maud`).
//! 2. **Navigation**: [`derive_navigation`] filters the authored entries; download entries
//!    (the manual, `isDownload` items) carry a [`DownloadAction`] instead of a scroll target.
//! 3. **Scroll-spy**: [`PageSession`] owns the [`ScrollState`] of one page instance and keeps the
//!    active section in sync with a [`Viewport`].
//! 4. **Media**: [`MediaResolver`] classifies every media reference into exactly one
//!    [`RenderStrategy`].
//!
//! Rendering never fails on bad content: malformed or empty modules are skipped and logged.
//! Authoring mistakes are reported separately by [`validate_config`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod config;
mod foundation;
mod media;
mod module;
mod nav;
mod render;
mod scroll;

pub use compose::composer::{ComposedPage, Section, SectionComposer, SectionKind};
pub use compose::document::{render_document, write_document};
pub use config::model::{
    INTRO_NAV_ID, InfoPanel, MANUAL_NAV_ID, NavigationItem, ProductConfig, ProductInfo,
};
pub use config::settings::EngineSettings;
pub use config::validate::{ConfigIssue, ConfigIssues, PathElem, validate_config};
pub use foundation::core::{SectionRect, stack_rects};
pub use foundation::error::{PageError, PageResult};
pub use media::resolver::{
    MediaKind, MediaReference, MediaResolver, RenderStrategy, ResolvedMedia, StructuredMedia,
};
pub use module::kind::ModuleKind;
pub use module::payload::{
    AudioSample, BlockDiagramModule, Bundle, ComparisonModule, ComparisonRow, ConceptModule,
    ContentBlock, ControlItem, ControlsModule, DemoModule, DemoVideo, Diagram, FaqItem, FaqModule,
    FunctionModule, HandlesoftModule, IntroModule, LineupModule, LineupProduct, LinkButton,
    ManualModule, ModulePayload, OperationModule, Port, SamplesModule, SoftwareItem,
    SoftwareModule, SpecGroup, SpecRow, SpecsModule, UsageModule,
};
pub use nav::action::{DownloadAction, DownloadHandler};
pub use nav::derive::{NavEntry, NavTarget, derive_navigation};
pub use render::context::RenderCtx;
pub use render::hero::render_hero;
pub use render::intro::render_intro;
pub use render::media::media_markup;
pub use render::nav_bar::render_nav_bar;
pub use render::render_module;
pub use render::rich_text::{PlainRichText, RichText};
pub use scroll::header::HeaderHeightTracker;
pub use scroll::session::{Activation, PageEvent, PageSession, ScrollState};
pub use scroll::spy::{ScanStrategy, ScrollSpy};
pub use scroll::viewport::{StaticViewport, Viewport};
