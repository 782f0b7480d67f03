use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The eight-section strategy produced by one successful request.
///
/// Every field is required on the wire; a body missing any of them does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDocument {
    pub niche_analysis: String,
    pub video_blueprint: String,
    pub script: String,
    pub seo: String,
    pub thumbnails: String,
    pub shorts: String,
    pub upload_strategy: String,
    pub monetization: String,
}

impl StrategyDocument {
    /// Raw markdown-subset text of one section.
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Analysis => &self.niche_analysis,
            Section::Blueprint => &self.video_blueprint,
            Section::Script => &self.script,
            Section::Seo => &self.seo,
            Section::Thumbnails => &self.thumbnails,
            Section::Shorts => &self.shorts,
            Section::Strategy => &self.upload_strategy,
            Section::Monetization => &self.monetization,
        }
    }

    /// Sections paired with their text, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::all().iter().map(|s| (*s, self.section(*s)))
    }
}

/// One panel of the strategy, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Analysis,
    Blueprint,
    Script,
    Seo,
    Thumbnails,
    Shorts,
    Strategy,
    Monetization,
}

impl Section {
    /// Returns all sections in display order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Analysis,
            Section::Blueprint,
            Section::Script,
            Section::Seo,
            Section::Thumbnails,
            Section::Shorts,
            Section::Strategy,
            Section::Monetization,
        ]
    }

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Analysis => "analysis",
            Section::Blueprint => "blueprint",
            Section::Script => "script",
            Section::Seo => "seo",
            Section::Thumbnails => "thumbnails",
            Section::Shorts => "shorts",
            Section::Strategy => "strategy",
            Section::Monetization => "monetization",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Analysis => "Niche Analysis",
            Section::Blueprint => "Video Blueprint",
            Section::Script => "Scriptwriting",
            Section::Seo => "SEO Metadata",
            Section::Thumbnails => "Thumbnails",
            Section::Shorts => "Shorts Content",
            Section::Strategy => "Upload Strategy",
            Section::Monetization => "Monetization",
        }
    }

    /// JSON property name in the model response.
    pub fn field_name(&self) -> &'static str {
        match self {
            Section::Analysis => "nicheAnalysis",
            Section::Blueprint => "videoBlueprint",
            Section::Script => "script",
            Section::Seo => "seo",
            Section::Thumbnails => "thumbnails",
            Section::Shorts => "shorts",
            Section::Strategy => "uploadStrategy",
            Section::Monetization => "monetization",
        }
    }

    /// Property description sent in the response schema.
    pub fn schema_description(&self) -> &'static str {
        match self {
            Section::Analysis => {
                "Markdown formatted niche analysis with clickable YouTube Search URLs"
            }
            Section::Blueprint => "Markdown formatted video blueprint",
            Section::Script => "Markdown formatted full script",
            Section::Seo => "Markdown formatted SEO details including Keywords and Hashtags",
            Section::Thumbnails => "Markdown formatted thumbnail ideas",
            Section::Shorts => "Markdown formatted shorts scripts",
            Section::Strategy => "Markdown formatted upload strategy",
            Section::Monetization => "Markdown formatted monetization strategy",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Section::all()
            .iter()
            .copied()
            .find(|s| {
                s.id().eq_ignore_ascii_case(wanted) || s.field_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let ids: Vec<&str> = Section::all().iter().map(Section::id).collect();
                format!("Unknown section: {wanted} (expected one of {})", ids.join(", "))
            })
    }
}
