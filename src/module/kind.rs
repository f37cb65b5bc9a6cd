/// Closed set of optional content modules a product page can carry.
///
/// Variant order is the top-to-bottom order sections appear on the page. The hero and the intro
/// are not modules: the hero is implied by the product block and the intro is a separate slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ModuleKind {
    /// Product concept / design story.
    Concept,
    /// Sibling products of the same range.
    Lineup,
    /// Feature comparison table.
    Comparison,
    /// Demo videos.
    Demo,
    /// Audio samples.
    Samples,
    /// Usage scenarios.
    Usage,
    /// Functional highlights.
    Function,
    /// Front/rear panel controls.
    Controls,
    /// Signal-flow diagrams.
    BlockDiagram,
    /// I/O ports.
    Connections,
    /// Operating steps.
    Operation,
    /// Companion software downloads.
    Software,
    /// Bundled third-party software.
    Handlesoft,
    /// Frequently asked questions.
    Faq,
    /// Specification tables.
    Specs,
    /// Owner's manual; contributes a download entry but never a section.
    Manual,
}

impl ModuleKind {
    /// Every kind, in page order.
    pub const ALL: [ModuleKind; 16] = [
        ModuleKind::Concept,
        ModuleKind::Lineup,
        ModuleKind::Comparison,
        ModuleKind::Demo,
        ModuleKind::Samples,
        ModuleKind::Usage,
        ModuleKind::Function,
        ModuleKind::Controls,
        ModuleKind::BlockDiagram,
        ModuleKind::Connections,
        ModuleKind::Operation,
        ModuleKind::Software,
        ModuleKind::Handlesoft,
        ModuleKind::Faq,
        ModuleKind::Specs,
        ModuleKind::Manual,
    ];

    /// Key under `modules` in a product configuration.
    pub fn key(self) -> &'static str {
        match self {
            ModuleKind::Concept => "concept",
            ModuleKind::Lineup => "lineup",
            ModuleKind::Comparison => "comparison",
            ModuleKind::Demo => "demo",
            ModuleKind::Samples => "samples",
            ModuleKind::Usage => "usage",
            ModuleKind::Function => "function",
            ModuleKind::Controls => "controls",
            ModuleKind::BlockDiagram => "blockDiagram",
            ModuleKind::Connections => "connections",
            ModuleKind::Operation => "operation",
            ModuleKind::Software => "software",
            ModuleKind::Handlesoft => "handlesoft",
            ModuleKind::Faq => "faq",
            ModuleKind::Specs => "specs",
            ModuleKind::Manual => "manual",
        }
    }

    /// Inverse of [`ModuleKind::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Scroll anchor of the rendered section; equal to the navigation id that targets it.
    pub fn anchor_id(self) -> &'static str {
        self.key()
    }

    /// Whether this kind ever produces a page section.
    pub fn renders_section(self) -> bool {
        self != ModuleKind::Manual
    }

    /// Position in page order.
    pub fn page_index(self) -> usize {
        self as usize
    }

    /// Heading used when the payload does not carry its own title.
    pub fn default_title(self) -> &'static str {
        match self {
            ModuleKind::Concept => "Concept",
            ModuleKind::Lineup => "Lineup",
            ModuleKind::Comparison => "Comparison",
            ModuleKind::Demo => "Demo",
            ModuleKind::Samples => "Sound Samples",
            ModuleKind::Usage => "Usage",
            ModuleKind::Function => "Functions",
            ModuleKind::Controls => "Controls",
            ModuleKind::BlockDiagram => "Block Diagram",
            ModuleKind::Connections => "Connections",
            ModuleKind::Operation => "Operation",
            ModuleKind::Software => "Software",
            ModuleKind::Handlesoft => "Bundled Software",
            ModuleKind::Faq => "FAQ",
            ModuleKind::Specs => "Specifications",
            ModuleKind::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/module/kind.rs"]
mod tests;
