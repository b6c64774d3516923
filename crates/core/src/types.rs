use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoType {
    #[default]
    Tutorial,
    Review,
    Entertainment,
    Educational,
    Gaming,
    Vlog,
    HowTo,
    Unboxing,
    Reaction,
    Other,
}

impl VideoType {
    pub fn label(&self) -> &'static str {
        match self {
            VideoType::Tutorial => "Tutorial",
            VideoType::Review => "Review",
            VideoType::Entertainment => "Entertainment",
            VideoType::Educational => "Educational",
            VideoType::Gaming => "Gaming",
            VideoType::Vlog => "Vlog",
            VideoType::HowTo => "How-to",
            VideoType::Unboxing => "Unboxing",
            VideoType::Reaction => "Reaction",
            VideoType::Other => "Other",
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Energetic,
    Educational,
    Funny,
    Serious,
    Inspirational,
    Conversational,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Energetic => "Energetic",
            Tone::Educational => "Educational",
            Tone::Funny => "Funny",
            Tone::Serious => "Serious",
            Tone::Inspirational => "Inspirational",
            Tone::Conversational => "Conversational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoLength {
    #[default]
    UnderFive,
    FiveToTen,
    TenToTwenty,
    TwentyToThirty,
    OverThirty,
}

impl VideoLength {
    pub fn label(&self) -> &'static str {
        match self {
            VideoLength::UnderFive => "Under 5 minutes",
            VideoLength::FiveToTen => "5-10 minutes",
            VideoLength::TenToTwenty => "10-20 minutes",
            VideoLength::TwentyToThirty => "20-30 minutes",
            VideoLength::OverThirty => "30+ minutes",
        }
    }
}

impl fmt::Display for VideoLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub script: String,
    pub video_type: VideoType,
    pub audience: String,
    pub tone: Tone,
    pub keywords: Vec<String>,

    #[serde(default)]
    pub style_preferences: String,
    #[serde(default)]
    pub channel_info: String,
    #[serde(default)]
    pub competitor_keywords: String,
    #[serde(default)]
    pub video_length: VideoLength,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Titles,
    Description,
    Tags,
    Thumbnails,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Titles,
        Section::Description,
        Section::Tags,
        Section::Thumbnails,
    ];

    /// Heading the model is asked to open the section with.
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Titles => "TITLES",
            Section::Description => "DESCRIPTION",
            Section::Tags => "TAGS",
            Section::Thumbnails => "THUMBNAIL IDEAS",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Titles => "Generated Titles",
            Section::Description => "Generated Description",
            Section::Tags => "Generated Tags",
            Section::Thumbnails => "Thumbnail Concepts",
        }
    }
}

/// Which sections a submission asks the model for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub titles: bool,
    pub description: bool,
    pub tags: bool,
    pub thumbnails: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            titles: true,
            description: true,
            tags: true,
            thumbnails: true,
        }
    }
}

impl Sections {
    pub fn contains(&self, section: Section) -> bool {
        match section {
            Section::Titles => self.titles,
            Section::Description => self.description,
            Section::Tags => self.tags,
            Section::Thumbnails => self.thumbnails,
        }
    }

    pub fn without(mut self, section: Section) -> Self {
        match section {
            Section::Titles => self.titles = false,
            Section::Description => self.description = false,
            Section::Tags => self.tags = false,
            Section::Thumbnails => self.thumbnails = false,
        }
        self
    }

    pub fn enabled(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(move |s| self.contains(*s))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

pub const MIN_TITLES: usize = 3;
pub const MAX_TITLES: usize = 10;
pub const DEFAULT_TITLES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_titles: usize,
    pub sections: Sections,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_titles: DEFAULT_TITLES,
            sections: Sections::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub trending: Vec<String>,
    pub all: Vec<String>,
}

impl TagSet {
    pub fn is_categorized(&self) -> bool {
        !(self.primary.is_empty() && self.secondary.is_empty() && self.trending.is_empty())
    }
}

/// What came back for one submission.
///
/// `raw` is the model output verbatim. The other fields are a best-effort
/// split of it and may be empty when the model ignored the requested layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub titles: Vec<String>,
    pub description: String,
    pub tags: TagSet,
    pub thumbnail_ideas: Vec<String>,
    pub raw: String,
    pub sections: Sections,
}

/// One display panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub section: Section,
    pub heading: &'static str,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: usize,
    pub char_count: usize,
    pub reading_time_minutes: usize,
    pub top_keywords: Vec<(String, usize)>,
}
