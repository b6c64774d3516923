use crate::{
    error::FormError,
    types::{
        GenerationOptions, GenerationRequest, MAX_TITLES, MIN_TITLES, Sections, Tone, VideoLength,
        VideoType,
    },
};

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub script: String,
    pub video_type: VideoType,
    pub audience: String,
    pub tone: Tone,
    /// Comma-separated
    pub keywords: String,
    pub style_preferences: String,
    pub channel_info: String,
    pub competitor_keywords: String,
    pub video_length: VideoLength,
    pub max_titles: usize,
    pub sections: Sections,
}

/// Split comma-separated keyword text, keeping order and dropping blanks.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

impl FormInput {
    /// Validate the form and produce a submission.
    pub fn collect(self) -> Result<(GenerationRequest, GenerationOptions), FormError> {
        if self.script.trim().is_empty() {
            return Err(FormError::MissingScript);
        }
        if self.sections.is_empty() {
            return Err(FormError::NoSections);
        }
        if !(MIN_TITLES..=MAX_TITLES).contains(&self.max_titles) {
            return Err(FormError::TitleCountOutOfRange {
                value: self.max_titles,
                min: MIN_TITLES,
                max: MAX_TITLES,
            });
        }

        let request = GenerationRequest {
            script: self.script,
            video_type: self.video_type,
            audience: self.audience.trim().to_string(),
            tone: self.tone,
            keywords: parse_keywords(&self.keywords),
            style_preferences: self.style_preferences,
            channel_info: self.channel_info,
            competitor_keywords: self.competitor_keywords,
            video_length: self.video_length,
        };
        let options = GenerationOptions {
            max_titles: self.max_titles,
            sections: self.sections,
        };

        Ok((request, options))
    }
}
