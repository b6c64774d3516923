use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tubeseo_core::{Provider, Section, Tone, VideoLength, VideoType};

/// CLI wrapper for VideoType (needed for clap ValueEnum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliVideoType {
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

impl From<CliVideoType> for VideoType {
    fn from(cli: CliVideoType) -> Self {
        match cli {
            CliVideoType::Tutorial => VideoType::Tutorial,
            CliVideoType::Review => VideoType::Review,
            CliVideoType::Entertainment => VideoType::Entertainment,
            CliVideoType::Educational => VideoType::Educational,
            CliVideoType::Gaming => VideoType::Gaming,
            CliVideoType::Vlog => VideoType::Vlog,
            CliVideoType::HowTo => VideoType::HowTo,
            CliVideoType::Unboxing => VideoType::Unboxing,
            CliVideoType::Reaction => VideoType::Reaction,
            CliVideoType::Other => VideoType::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliTone {
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

impl From<CliTone> for Tone {
    fn from(cli: CliTone) -> Self {
        match cli {
            CliTone::Professional => Tone::Professional,
            CliTone::Casual => Tone::Casual,
            CliTone::Energetic => Tone::Energetic,
            CliTone::Educational => Tone::Educational,
            CliTone::Funny => Tone::Funny,
            CliTone::Serious => Tone::Serious,
            CliTone::Inspirational => Tone::Inspirational,
            CliTone::Conversational => Tone::Conversational,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliVideoLength {
    #[default]
    #[value(name = "under-5")]
    UnderFive,
    #[value(name = "5-10")]
    FiveToTen,
    #[value(name = "10-20")]
    TenToTwenty,
    #[value(name = "20-30")]
    TwentyToThirty,
    #[value(name = "30-plus")]
    OverThirty,
}

impl From<CliVideoLength> for VideoLength {
    fn from(cli: CliVideoLength) -> Self {
        match cli {
            CliVideoLength::UnderFive => VideoLength::UnderFive,
            CliVideoLength::FiveToTen => VideoLength::FiveToTen,
            CliVideoLength::TenToTwenty => VideoLength::TenToTwenty,
            CliVideoLength::TwentyToThirty => VideoLength::TwentyToThirty,
            CliVideoLength::OverThirty => VideoLength::OverThirty,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliSection {
    Titles,
    Description,
    Tags,
    Thumbnails,
}

impl From<CliSection> for Section {
    fn from(cli: CliSection) -> Self {
        match cli {
            CliSection::Titles => Section::Titles,
            CliSection::Description => Section::Description,
            CliSection::Tags => Section::Tags,
            CliSection::Thumbnails => Section::Thumbnails,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliProvider {
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled panels
    #[default]
    Text,
    Json,
    Csv,
    /// Plain-text panels
    Txt,
    /// Markdown document
    Markdown,
}

#[derive(Parser)]
#[command(name = "tubeseo")]
#[command(
    about = "Generate YouTube titles, an SEO description, tags and thumbnail ideas with AI"
)]
pub struct Cli {
    /// Video script or summary
    #[arg(
        short,
        long,
        conflicts_with = "script_file",
        required_unless_present = "script_file"
    )]
    pub script: Option<String>,

    /// Read the script from a file ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub script_file: Option<PathBuf>,

    /// Video type
    #[arg(short = 't', long, value_enum, default_value_t)]
    pub video_type: CliVideoType,

    /// Target audience (e.g. General, Beginners, Professionals, Students)
    #[arg(short, long, default_value = "General")]
    pub audience: String,

    /// Content tone
    #[arg(long, value_enum, default_value_t)]
    pub tone: CliTone,

    /// Primary keywords, comma-separated
    #[arg(short, long, default_value = "")]
    pub keywords: String,

    /// Style preferences for titles (e.g. "Use numbers", "Avoid caps")
    #[arg(long, default_value = "")]
    pub style: String,

    /// Brief description of the channel
    #[arg(long, default_value = "")]
    pub channel_info: String,

    /// Keywords competitors are using
    #[arg(long, default_value = "")]
    pub competitor_keywords: String,

    /// Estimated video length
    #[arg(long, value_enum, default_value_t)]
    pub video_length: CliVideoLength,

    /// Number of titles to generate
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(3..=10))]
    pub max_titles: u8,

    /// Section to leave out (repeatable)
    #[arg(long, value_enum)]
    pub skip: Vec<CliSection>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Don't compute content analytics for the script
    #[arg(long)]
    pub no_analytics: bool,

    /// AI provider (defaults to the secrets file setting, then Gemini)
    #[arg(short, long, value_enum)]
    pub provider: Option<CliProvider>,

    /// Model name override
    #[arg(long)]
    pub model: Option<String>,

    /// Path to secrets.toml
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
