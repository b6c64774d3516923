use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::{ContentMetrics, GenerationRequest, GenerationResult, Panel, Section, TagSet};

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tags_body(tags: &TagSet) -> String {
    if tags.is_categorized() {
        format!(
            "All: {}\nPrimary: {}\nSecondary: {}\nTrending: {}",
            tags.all.join(", "),
            tags.primary.join(", "),
            tags.secondary.join(", "),
            tags.trending.join(", "),
        )
    } else {
        tags.all.join(", ")
    }
}

impl GenerationResult {
    /// Display panels for the requested sections, in fixed order.
    ///
    /// A section the response did not yield falls back to the raw text.
    pub fn panels(&self) -> Vec<Panel> {
        self.sections
            .enabled()
            .map(|section| {
                let body = match section {
                    Section::Titles => numbered(&self.titles),
                    Section::Description => self.description.clone(),
                    Section::Tags => tags_body(&self.tags),
                    Section::Thumbnails => self.thumbnail_ideas.join("\n\n"),
                };
                let body = if body.trim().is_empty() {
                    self.raw.clone()
                } else {
                    body
                };
                Panel {
                    section,
                    heading: section.heading(),
                    body,
                }
            })
            .collect()
    }
}

/// Format content metrics as a single summary line
pub fn format_metrics(metrics: &ContentMetrics) -> String {
    let keywords = metrics
        .top_keywords
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "**Words:** {} | **Characters:** {} | **Reading time:** {} min\n**Top keywords:** {}",
        metrics.word_count, metrics.char_count, metrics.reading_time_minutes, keywords
    )
}

/// Format a result as human-readable markdown
pub fn format_result_readable(result: &GenerationResult, metrics: Option<&ContentMetrics>) -> String {
    let mut output = String::new();

    if let Some(metrics) = metrics {
        output.push_str("## Content Analysis\n\n");
        output.push_str(&format_metrics(metrics));
        output.push_str("\n\n");
    }

    for panel in result.panels() {
        output.push_str(&format!("## {}\n\n", panel.heading));
        output.push_str(&panel.body);
        output.push_str("\n\n");
    }

    output.trim_end().to_string() + "\n"
}

/// Everything an export carries.
#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub video_type: String,
    pub keywords: &'a [String],
    pub titles: &'a [String],
    pub description: &'a str,
    pub tags: &'a TagSet,
    pub thumbnail_ideas: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'a ContentMetrics>,
    pub raw: &'a str,
}

impl<'a> ExportRecord<'a> {
    pub fn new(
        request: &'a GenerationRequest,
        result: &'a GenerationResult,
        metrics: Option<&'a ContentMetrics>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            video_type: request.video_type.to_string(),
            keywords: &request.keywords,
            titles: &result.titles,
            description: &result.description,
            tags: &result.tags,
            thumbnail_ideas: &result.thumbnail_ideas,
            metrics,
            raw: &result.raw,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// `section,index,value` rows.
    pub fn to_csv(&self) -> String {
        let mut rows = vec!["section,index,value".to_string()];
        let mut push = |section: &str, values: &[String]| {
            for (i, value) in values.iter().enumerate() {
                rows.push(format!("{},{},{}", section, i + 1, csv_field(value)));
            }
        };

        push("title", self.titles);
        if !self.description.is_empty() {
            push("description", &[self.description.to_string()]);
        }
        push("tag", &self.tags.all);
        push("thumbnail", self.thumbnail_ideas);

        rows.join("\n") + "\n"
    }

    pub fn to_txt(&self, result: &GenerationResult) -> String {
        let mut output = format!(
            "YouTube content generated {}\nVideo type: {}\nKeywords: {}\n\n",
            self.timestamp.to_rfc3339(),
            self.video_type,
            self.keywords.join(", ")
        );
        for panel in result.panels() {
            output.push_str(&panel.heading.to_uppercase());
            output.push('\n');
            output.push_str(&"-".repeat(panel.heading.len()));
            output.push('\n');
            output.push_str(&panel.body);
            output.push_str("\n\n");
        }
        output.trim_end().to_string() + "\n"
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sections;

    fn result() -> GenerationResult {
        GenerationResult {
            titles: vec!["First".to_string(), "Second, with comma".to_string()],
            description: "Line one\nLine \"two\"".to_string(),
            tags: TagSet {
                all: vec!["python".to_string(), "coding".to_string()],
                ..Default::default()
            },
            thumbnail_ideas: vec!["Big text".to_string()],
            raw: "raw text".to_string(),
            sections: Sections::default(),
        }
    }

    #[test]
    fn panels_follow_fixed_order() {
        let panels = result().panels();
        let sections: Vec<Section> = panels.iter().map(|p| p.section).collect();

        assert_eq!(sections, Section::ALL.to_vec());
        assert_eq!(panels[0].body, "1. First\n2. Second, with comma");
        assert_eq!(panels[2].body, "python, coding");
    }

    #[test]
    fn empty_section_falls_back_to_raw() {
        let mut result = result();
        result.thumbnail_ideas.clear();

        assert_eq!(result.panels()[3].body, "raw text");
    }

    #[test]
    fn skipped_sections_have_no_panel() {
        let mut result = result();
        result.sections = Sections::default().without(Section::Tags);

        assert!(result.panels().iter().all(|p| p.section != Section::Tags));
    }

    #[test]
    fn csv_quotes_awkward_values() {
        let request = GenerationRequest::default();
        let result = result();
        let csv = ExportRecord::new(&request, &result, None).to_csv();

        assert!(csv.starts_with("section,index,value\n"));
        assert!(csv.contains("title,2,\"Second, with comma\"\n"));
        assert!(csv.contains("description,1,\"Line one\nLine \"\"two\"\"\"\n"));
        assert!(csv.contains("tag,2,coding\n"));
    }

    #[test]
    fn json_export_carries_raw_and_skips_missing_metrics() {
        let request = GenerationRequest::default();
        let result = result();
        let json = ExportRecord::new(&request, &result, None).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["raw"], "raw text");
        assert_eq!(value["video_type"], "Tutorial");
        assert!(value.get("metrics").is_none());
    }

    #[test]
    fn readable_output_lists_panels_and_metrics() {
        let metrics = ContentMetrics {
            word_count: 9,
            char_count: 43,
            reading_time_minutes: 1,
            top_keywords: vec![("python".to_string(), 1)],
        };
        let text = format_result_readable(&result(), Some(&metrics));

        assert!(text.starts_with("## Content Analysis"));
        assert!(text.contains("python (1)"));
        assert!(text.contains("## Generated Titles\n\n1. First"));
        assert!(text.contains("## Thumbnail Concepts\n\nBig text"));
    }
}
