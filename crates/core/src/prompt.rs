use crate::types::{GenerationOptions, GenerationRequest, Section};

static PROMPT_PREAMBLE: &str = r#"You are a YouTube SEO expert. Using the video details below, produce publishing
material for the video. Start every requested section with its heading on a line of
its own, exactly as written (for example ## TITLES), and do not add other headings."#;

fn title_instructions(request: &GenerationRequest, max_titles: usize) -> String {
    format!(
        r#"Generate {max_titles} compelling, click-worthy titles for a {video_type} video targeting {audience}.
- Tone: {tone}
- Follow the style preferences above
- Character count: 40-70 characters
- Include power words and emotional triggers
- Ensure SEO optimization
- Avoid clickbait but maintain curiosity
- Include numbers where relevant
- Consider trending formats
Provide exactly {max_titles} titles, numbered 1-{max_titles}, one per line. A brief explanation of why
each title works may follow the title in parentheses."#,
        video_type = request.video_type,
        audience = request.audience,
        tone = request.tone,
    )
}

fn description_instructions(request: &GenerationRequest) -> String {
    format!(
        r#"Write a comprehensive, SEO-optimized description for a {video_type} video targeting {audience}.
Fit the channel information and estimated video length above.
Structure the description with:
1. Hook (first 125 characters - crucial for search results)
2. Detailed video overview (200-300 words)
3. Key timestamps (create realistic placeholders)
4. Call-to-action section
5. Social media links placeholder
6. 5-8 relevant hashtags
7. Additional resources/links section
Focus on SEO keyword integration, an engaging first paragraph, a clear value proposition,
community engagement elements and accessibility."#,
        video_type = request.video_type,
        audience = request.audience,
    )
}

fn tag_instructions(request: &GenerationRequest) -> String {
    format!(
        r#"Generate 20 strategic YouTube tags for a {video_type} video to maximize discoverability.
Use the competitor keywords above as insight.
Provide tags in three categories, each on its own labeled line:
Primary tags: 5-7 main topic keywords
Secondary tags: 8-10 related and long-tail keywords
Trending tags: 5-7 current trending topics in the niche
Format each category as a comma-separated list after its label."#,
        video_type = request.video_type,
    )
}

fn thumbnail_instructions(request: &GenerationRequest) -> String {
    format!(
        r#"Suggest 5 effective thumbnail concepts for a {video_type} video targeting {audience}.
For each concept, numbered 1-5 and separated by a blank line, provide:
1. Visual elements description
2. Text overlay suggestions (max 6 words)
3. Color scheme recommendations
4. Emotional appeal strategy
5. A/B testing variations
Focus on high contrast and readability, emotional expressions if featuring people,
clear visual hierarchy, mobile optimization and brand consistency."#,
        video_type = request.video_type,
        audience = request.audience,
    )
}

/// Build the single prompt sent for one submission.
///
/// Every field is interpolated as-is; empty fields become empty strings.
pub fn build_prompt(request: &GenerationRequest, options: &GenerationOptions) -> String {
    let mut prompt = String::new();
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str("\n\n");

    prompt.push_str("VIDEO DETAILS\n");
    prompt.push_str(&format!("Video Type: {}\n", request.video_type));
    prompt.push_str(&format!("Target Audience: {}\n", request.audience));
    prompt.push_str(&format!("Tone: {}\n", request.tone));
    prompt.push_str(&format!(
        "Primary Keywords: {}\n",
        request.keywords.join(", ")
    ));
    prompt.push_str(&format!(
        "Style Preferences: {}\n",
        request.style_preferences
    ));
    prompt.push_str(&format!("Channel Information: {}\n", request.channel_info));
    prompt.push_str(&format!(
        "Competitor Keywords: {}\n",
        request.competitor_keywords
    ));
    prompt.push_str(&format!("Estimated Video Length: {}\n", request.video_length));
    prompt.push_str(&format!("Content Summary:\n{}\n\n", request.script));

    prompt.push_str(&format!(
        "Produce the following {} section(s), in this order:\n\n",
        options.sections.enabled().count()
    ));

    for section in options.sections.enabled() {
        let instructions = match section {
            Section::Titles => title_instructions(request, options.max_titles),
            Section::Description => description_instructions(request),
            Section::Tags => tag_instructions(request),
            Section::Thumbnails => thumbnail_instructions(request),
        };
        prompt.push_str(&format!("## {}\n{}\n\n", section.marker(), instructions));
    }

    prompt.trim_end().to_string()
}
