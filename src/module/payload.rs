use serde::{Deserialize, Serialize};

use crate::{media::resolver::MediaReference, module::kind::ModuleKind};

/// Titled block of rich text with optional illustration.
///
/// Shared by concept sections, usage items, function features and operation steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Optional block heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text body, handed to the rich text renderer.
    #[serde(default)]
    pub content: String,
    /// Optional image or video next to the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaReference>,
}

/// Button that opens an external URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkButton {
    /// Button caption.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// Intro slot rendered immediately after the navigation bar. Never a navigation target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text body.
    #[serde(default)]
    pub content: String,
    /// Optional illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaReference>,
}

impl IntroModule {
    /// Intro needs a non-blank body.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Design story told in a list of sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Story sections, media alternating left and right.
    #[serde(default)]
    pub sections: Vec<ContentBlock>,
}

/// Products of the same range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Cards in display order.
    #[serde(default)]
    pub products: Vec<LineupProduct>,
}

/// One lineup card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupProduct {
    /// Product name.
    pub name: String,
    /// Short blurb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Card image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    /// Product page of a sibling; ignored on the current product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Marks the product this page is about.
    #[serde(default)]
    pub current: bool,
}

/// Feature comparison table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers (one per compared product).
    #[serde(default)]
    pub columns: Vec<String>,
    /// Table rows.
    #[serde(default)]
    pub rows: Vec<ComparisonRow>,
    /// Footnote under the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One comparison row; `values` align with the module's `columns`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Row header.
    pub label: String,
    /// Cells; missing trailing cells render empty.
    #[serde(default)]
    pub values: Vec<String>,
}

/// Demo videos.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text lead-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Videos in display order.
    #[serde(default)]
    pub videos: Vec<DemoVideo>,
}

/// One demo video; usually a video-platform link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoVideo {
    /// Caption heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The video itself.
    pub src: MediaReference,
    /// Caption text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Audio samples with native player controls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplesModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Clips in display order.
    #[serde(default)]
    pub samples: Vec<AudioSample>,
}

/// One audio clip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSample {
    /// Clip name.
    pub title: String,
    /// Local audio file; normalized like any other local media path.
    pub src: String,
    /// What the clip demonstrates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Usage scenarios.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One block per scenario.
    #[serde(default)]
    pub items: Vec<ContentBlock>,
}

/// Functional highlights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One block per feature.
    #[serde(default)]
    pub features: Vec<ContentBlock>,
}

/// Panel controls keyed to numbers on a panel image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Panel picture the numbers refer to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    /// Controls in panel order.
    #[serde(default)]
    pub controls: Vec<ControlItem>,
}

/// One numbered control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlItem {
    /// Callout label on the panel image; defaults to the 1-based position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Control name.
    pub name: String,
    /// Rich-text explanation.
    #[serde(default)]
    pub description: String,
}

/// Signal-flow diagrams.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDiagramModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Diagrams in display order.
    #[serde(default)]
    pub diagrams: Vec<Diagram>,
}

/// One diagram image with caption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Diagram heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Diagram image.
    pub image: MediaReference,
    /// Caption under the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// I/O ports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rear panel picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    /// Connectors in panel order.
    #[serde(default)]
    pub ports: Vec<Port>,
}

/// One connector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Connector name.
    pub name: String,
    /// Signal and level.
    #[serde(default)]
    pub description: String,
}

/// Step-by-step operation guide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Steps in order.
    #[serde(default)]
    pub steps: Vec<ContentBlock>,
}

/// Companion software with download buttons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Packages in display order.
    #[serde(default)]
    pub items: Vec<SoftwareItem>,
}

/// One software package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoftwareItem {
    /// Package name.
    pub name: String,
    /// Rich-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Screenshot or logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    /// Download buttons, one per platform.
    #[serde(default)]
    pub buttons: Vec<LinkButton>,
}

/// Third-party software bundled with the product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlesoftModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text lead-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bundled titles.
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

/// One bundled title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Title name.
    pub name: String,
    /// Short blurb.
    #[serde(default)]
    pub description: String,
    /// Box art or logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    /// Vendor page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Question/answer list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// One FAQ entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question, shown collapsed.
    pub question: String,
    /// Rich-text answer.
    pub answer: String,
}

/// Grouped specification tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecsModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Heading override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tables; groups without rows are not rendered.
    #[serde(default)]
    pub groups: Vec<SpecGroup>,
}

/// One specification table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecGroup {
    /// Table heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Label/value rows.
    #[serde(default)]
    pub rows: Vec<SpecRow>,
}

/// One specification line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    /// Parameter name.
    pub label: String,
    /// Parameter value, units included.
    pub value: String,
}

/// Owner's manual download. Contributes a navigation entry, never a section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualModule {
    /// Enablement flag.
    #[serde(default)]
    pub enabled: bool,
    /// Direct file URL; when absent the download handler resolves it from brand and product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Typed payload of one module slot; one variant per [`ModuleKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum ModulePayload {
    /// See [`ConceptModule`].
    Concept(ConceptModule),
    /// See [`LineupModule`].
    Lineup(LineupModule),
    /// See [`ComparisonModule`].
    Comparison(ComparisonModule),
    /// See [`DemoModule`].
    Demo(DemoModule),
    /// See [`SamplesModule`].
    Samples(SamplesModule),
    /// See [`UsageModule`].
    Usage(UsageModule),
    /// See [`FunctionModule`].
    Function(FunctionModule),
    /// See [`ControlsModule`].
    Controls(ControlsModule),
    /// See [`BlockDiagramModule`].
    BlockDiagram(BlockDiagramModule),
    /// See [`ConnectionsModule`].
    Connections(ConnectionsModule),
    /// See [`OperationModule`].
    Operation(OperationModule),
    /// See [`SoftwareModule`].
    Software(SoftwareModule),
    /// See [`HandlesoftModule`].
    Handlesoft(HandlesoftModule),
    /// See [`FaqModule`].
    Faq(FaqModule),
    /// See [`SpecsModule`].
    Specs(SpecsModule),
    /// See [`ManualModule`].
    Manual(ManualModule),
}

impl ModulePayload {
    /// Parse the raw JSON payload stored under `kind`'s key.
    pub fn parse(kind: ModuleKind, value: &serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            ModuleKind::Concept => Self::Concept(ConceptModule::deserialize(value)?),
            ModuleKind::Lineup => Self::Lineup(LineupModule::deserialize(value)?),
            ModuleKind::Comparison => Self::Comparison(ComparisonModule::deserialize(value)?),
            ModuleKind::Demo => Self::Demo(DemoModule::deserialize(value)?),
            ModuleKind::Samples => Self::Samples(SamplesModule::deserialize(value)?),
            ModuleKind::Usage => Self::Usage(UsageModule::deserialize(value)?),
            ModuleKind::Function => Self::Function(FunctionModule::deserialize(value)?),
            ModuleKind::Controls => Self::Controls(ControlsModule::deserialize(value)?),
            ModuleKind::BlockDiagram => {
                Self::BlockDiagram(BlockDiagramModule::deserialize(value)?)
            }
            ModuleKind::Connections => Self::Connections(ConnectionsModule::deserialize(value)?),
            ModuleKind::Operation => Self::Operation(OperationModule::deserialize(value)?),
            ModuleKind::Software => Self::Software(SoftwareModule::deserialize(value)?),
            ModuleKind::Handlesoft => Self::Handlesoft(HandlesoftModule::deserialize(value)?),
            ModuleKind::Faq => Self::Faq(FaqModule::deserialize(value)?),
            ModuleKind::Specs => Self::Specs(SpecsModule::deserialize(value)?),
            ModuleKind::Manual => Self::Manual(ManualModule::deserialize(value)?),
        })
    }

    /// Kind of this payload.
    pub fn kind(&self) -> ModuleKind {
        match self {
            Self::Concept(_) => ModuleKind::Concept,
            Self::Lineup(_) => ModuleKind::Lineup,
            Self::Comparison(_) => ModuleKind::Comparison,
            Self::Demo(_) => ModuleKind::Demo,
            Self::Samples(_) => ModuleKind::Samples,
            Self::Usage(_) => ModuleKind::Usage,
            Self::Function(_) => ModuleKind::Function,
            Self::Controls(_) => ModuleKind::Controls,
            Self::BlockDiagram(_) => ModuleKind::BlockDiagram,
            Self::Connections(_) => ModuleKind::Connections,
            Self::Operation(_) => ModuleKind::Operation,
            Self::Software(_) => ModuleKind::Software,
            Self::Handlesoft(_) => ModuleKind::Handlesoft,
            Self::Faq(_) => ModuleKind::Faq,
            Self::Specs(_) => ModuleKind::Specs,
            Self::Manual(_) => ModuleKind::Manual,
        }
    }

    /// The payload's `enabled` flag.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Concept(m) => m.enabled,
            Self::Lineup(m) => m.enabled,
            Self::Comparison(m) => m.enabled,
            Self::Demo(m) => m.enabled,
            Self::Samples(m) => m.enabled,
            Self::Usage(m) => m.enabled,
            Self::Function(m) => m.enabled,
            Self::Controls(m) => m.enabled,
            Self::BlockDiagram(m) => m.enabled,
            Self::Connections(m) => m.enabled,
            Self::Operation(m) => m.enabled,
            Self::Software(m) => m.enabled,
            Self::Handlesoft(m) => m.enabled,
            Self::Faq(m) => m.enabled,
            Self::Specs(m) => m.enabled,
            Self::Manual(m) => m.enabled,
        }
    }

    /// Kind-specific "has content" predicate; an enabled module without content renders nothing.
    pub fn has_content(&self) -> bool {
        match self {
            Self::Concept(m) => !m.sections.is_empty(),
            Self::Lineup(m) => !m.products.is_empty(),
            Self::Comparison(m) => !m.columns.is_empty() && !m.rows.is_empty(),
            Self::Demo(m) => !m.videos.is_empty(),
            Self::Samples(m) => !m.samples.is_empty(),
            Self::Usage(m) => !m.items.is_empty(),
            Self::Function(m) => !m.features.is_empty(),
            Self::Controls(m) => !m.controls.is_empty(),
            Self::BlockDiagram(m) => !m.diagrams.is_empty(),
            Self::Connections(m) => !m.ports.is_empty(),
            Self::Operation(m) => !m.steps.is_empty(),
            Self::Software(m) => !m.items.is_empty(),
            Self::Handlesoft(m) => !m.bundles.is_empty(),
            Self::Faq(m) => !m.items.is_empty(),
            Self::Specs(m) => m.groups.iter().any(|g| !g.rows.is_empty()),
            // The download action is derivable from the product block alone.
            Self::Manual(_) => true,
        }
    }

    /// `enabled && has_content`.
    pub fn is_renderable(&self) -> bool {
        self.enabled() && self.has_content()
    }

    /// Author-supplied section heading, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Concept(m) => m.title.as_deref(),
            Self::Lineup(m) => m.title.as_deref(),
            Self::Comparison(m) => m.title.as_deref(),
            Self::Demo(m) => m.title.as_deref(),
            Self::Samples(m) => m.title.as_deref(),
            Self::Usage(m) => m.title.as_deref(),
            Self::Function(m) => m.title.as_deref(),
            Self::Controls(m) => m.title.as_deref(),
            Self::BlockDiagram(m) => m.title.as_deref(),
            Self::Connections(m) => m.title.as_deref(),
            Self::Operation(m) => m.title.as_deref(),
            Self::Software(m) => m.title.as_deref(),
            Self::Handlesoft(m) => m.title.as_deref(),
            Self::Faq(m) => m.title.as_deref(),
            Self::Specs(m) => m.title.as_deref(),
            Self::Manual(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/module/payload.rs"]
mod tests;
