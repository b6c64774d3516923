//! Best-effort split of a model response into the four sections.
//!
//! Model output is free-form. Nothing here fails: text that does not match
//! the requested layout simply leaves the corresponding field empty, and the
//! raw response is always kept alongside.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::types::{GenerationOptions, GenerationResult, Section, TagSet};

const MAX_PRIMARY_TAGS: usize = 7;
const MAX_SECONDARY_TAGS: usize = 10;
const MAX_TRENDING_TAGS: usize = 7;
const MAX_TAGS: usize = 20;

static MARKER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*##\s*(titles|description|tags|thumbnail ideas)\s*:?\s*$")
        .expect("marker heading pattern is valid")
});

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:#+\s*)?(?:\*\*\s*)?(?:\d+[.)]\s*)?(titles|description|tags|thumbnail ideas|thumbnail concepts|thumbnails)\s*(?:\*\*)?\s*:?\s*(?:\*\*)?\s*$",
    )
    .expect("heading pattern is valid")
});

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s*(.+)$").expect("numbered pattern is valid"));

static TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)$").expect("paren pattern is valid"));

static TAG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|]+").expect("separator pattern is valid"));

static TAG_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[-*]?\s*(?:\*\*)?(primary|secondary|trending) tags(?:\s*\([^)]*\))?(?:\*\*)?\s*:(?:\*\*)?(.*)$")
        .expect("tag label pattern is valid")
});

fn section_for(label: &str) -> Section {
    match label.to_lowercase().as_str() {
        "titles" => Section::Titles,
        "description" => Section::Description,
        "tags" => Section::Tags,
        _ => Section::Thumbnails,
    }
}

/// Split a response on its section headings. Text before the first heading
/// belongs to no section.
///
/// When the response uses the `## MARKER` headings, only those start a
/// section, so a bare `Tags:` line stays in the body it appears in.
pub fn split_sections(response: &str) -> HashMap<Section, String> {
    let heading: &Regex = if response.lines().any(|line| MARKER_HEADING.is_match(line)) {
        &*MARKER_HEADING
    } else {
        &*HEADING
    };

    let mut sections: HashMap<Section, String> = HashMap::new();
    let mut current: Option<Section> = None;

    for line in response.lines() {
        if let Some(caps) = heading.captures(line) {
            current = Some(section_for(&caps[1]));
            continue;
        }
        if let Some(section) = current {
            let body = sections.entry(section).or_default();
            body.push_str(line);
            body.push('\n');
        }
    }

    for body in sections.values_mut() {
        *body = body.trim().to_string();
    }
    sections.retain(|_, body| !body.is_empty());
    sections
}

fn clean_item(item: &str) -> String {
    item.trim()
        .trim_matches('*')
        .trim()
        .trim_matches('"')
        .trim()
        .to_string()
}

/// Numbered lines, with any trailing parenthetical explanation removed.
pub fn extract_titles(text: &str, max_titles: usize) -> Vec<String> {
    text.lines()
        .filter_map(|line| NUMBERED.captures(line.trim()))
        .map(|caps| clean_item(&TRAILING_PAREN.replace(caps[1].trim(), "")))
        .filter(|title| !title.is_empty())
        .take(max_titles)
        .collect()
}

fn split_tags(text: &str) -> Vec<String> {
    TAG_SEPARATORS
        .split(text)
        .map(|tag| clean_item(tag.trim_start_matches(['-', '•'])))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Categorized tags when the response is labeled, a flat list otherwise.
pub fn extract_tags(text: &str) -> TagSet {
    let labeled = text.lines().any(|line| TAG_LABEL.is_match(line));

    if labeled {
        // primary, secondary, trending
        let mut buckets: [Vec<String>; 3] = Default::default();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            if let Some(caps) = TAG_LABEL.captures(line) {
                let index = match caps[1].to_lowercase().as_str() {
                    "primary" => 0,
                    "secondary" => 1,
                    _ => 2,
                };
                buckets[index].extend(split_tags(&caps[2]));
                current = Some(index);
            } else if let Some(index) = current {
                if !line.trim().is_empty() {
                    buckets[index].extend(split_tags(line));
                }
            }
        }

        let [mut primary, mut secondary, mut trending] = buckets;
        let all = primary
            .iter()
            .chain(&secondary)
            .chain(&trending)
            .take(MAX_TAGS)
            .cloned()
            .collect();

        primary.truncate(MAX_PRIMARY_TAGS);
        secondary.truncate(MAX_SECONDARY_TAGS);
        trending.truncate(MAX_TRENDING_TAGS);

        TagSet {
            primary,
            secondary,
            trending,
            all,
        }
    } else {
        let all = text
            .lines()
            .flat_map(split_tags)
            .filter(|tag| (3..30).contains(&tag.chars().count()))
            .take(MAX_TAGS)
            .collect();
        TagSet {
            all,
            ..Default::default()
        }
    }
}

/// One idea per blank-line separated block.
pub fn extract_thumbnail_ideas(text: &str) -> Vec<String> {
    let mut ideas = Vec::new();
    let mut block = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !block.trim().is_empty() {
                ideas.push(block.trim().to_string());
            }
            block.clear();
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    if !block.trim().is_empty() {
        ideas.push(block.trim().to_string());
    }

    ideas
}

/// Build a result from raw model output.
pub fn parse_response(raw: &str, options: &GenerationOptions) -> GenerationResult {
    let sections = split_sections(raw);
    let requested = options.sections;
    let body = |section: Section| {
        requested
            .contains(section)
            .then(|| sections.get(&section))
            .flatten()
    };

    GenerationResult {
        titles: body(Section::Titles)
            .map(|text| extract_titles(text, options.max_titles))
            .unwrap_or_default(),
        description: body(Section::Description).cloned().unwrap_or_default(),
        tags: body(Section::Tags).map(|text| extract_tags(text)).unwrap_or_default(),
        thumbnail_ideas: body(Section::Thumbnails)
            .map(|text| extract_thumbnail_ideas(text))
            .unwrap_or_default(),
        raw: raw.to_string(),
        sections: requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sections;

    const STRUCTURED: &str = "Sure! Here you go.

## TITLES
1. Learn Python in 30 Days: The Complete Beginner Roadmap (uses a number and a promise)
2. **Python From Zero to Hero in One Month**
3) \"30 Days of Python\"

## DESCRIPTION
Want to learn Python from scratch?
This video walks you through a 30 day plan.

## TAGS
Primary tags: python, learn python, python tutorial
Secondary tags: python for beginners; coding | programming basics
Trending tags: ai with python

## THUMBNAIL IDEAS
1. Calendar with 30 days crossed out
Text: 30 DAYS TO PYTHON

2. Shocked face next to the Python logo
Text: I LEARNED PYTHON
";

    #[test]
    fn splits_headings_in_varied_markdown() {
        let text = "**Titles:**\n1. A\n### 2. Description\nBody\nTAGS:\nx, y\n# Thumbnail Concepts\nIdea";
        let sections = split_sections(text);

        assert_eq!(sections[&Section::Titles], "1. A");
        assert_eq!(sections[&Section::Description], "Body");
        assert_eq!(sections[&Section::Tags], "x, y");
        assert_eq!(sections[&Section::Thumbnails], "Idea");
    }

    #[test]
    fn titles_drop_explanations_and_markup() {
        let sections = split_sections(STRUCTURED);
        let titles = extract_titles(&sections[&Section::Titles], 8);

        assert_eq!(
            titles,
            vec![
                "Learn Python in 30 Days: The Complete Beginner Roadmap",
                "Python From Zero to Hero in One Month",
                "30 Days of Python",
            ]
        );
    }

    #[test]
    fn titles_are_capped() {
        let text = (1..=12)
            .map(|i| format!("{i}. Title number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_titles(&text, 8).len(), 8);
        assert_eq!(extract_titles(&text, 3).len(), 3);
    }

    #[test]
    fn labeled_tags_are_categorized() {
        let tags = extract_tags(
            "Primary tags: python, learn python\nSecondary tags:\ncoding; basics | loops\nTrending tags: ai",
        );

        assert_eq!(tags.primary, vec!["python", "learn python"]);
        assert_eq!(tags.secondary, vec!["coding", "basics", "loops"]);
        assert_eq!(tags.trending, vec!["ai"]);
        assert_eq!(tags.all.len(), 6);
        assert!(tags.is_categorized());
    }

    #[test]
    fn tag_labels_may_carry_a_count_hint() {
        let tags = extract_tags(
            "Primary tags (5-7): python, learn python\n**Secondary tags (8-10):** coding, loops\nTrending Tags (5-7): ai",
        );

        assert_eq!(tags.primary, vec!["python", "learn python"]);
        assert_eq!(tags.secondary, vec!["coding", "loops"]);
        assert_eq!(tags.trending, vec!["ai"]);
        assert!(tags.all.iter().all(|tag| !tag.contains("tags")));
    }

    #[test]
    fn bare_labels_inside_marked_sections_stay_in_the_body() {
        let text = "## DESCRIPTION\nIntro line\nTags:\n#python #coding\n\n## TAGS\npython, coding";
        let sections = split_sections(text);

        assert_eq!(sections[&Section::Description], "Intro line\nTags:\n#python #coding");
        assert_eq!(sections[&Section::Tags], "python, coding");
    }

    #[test]
    fn unlabeled_tags_fall_back_to_flat_list() {
        let tags = extract_tags("python, a, learn python fast, this tag is far too long to be useful");

        assert_eq!(tags.all, vec!["python", "learn python fast"]);
        assert!(!tags.is_categorized());
    }

    #[test]
    fn flat_tags_are_capped_at_twenty() {
        let text = (0..30).map(|i| format!("tag{i:02}")).collect::<Vec<_>>().join(", ");
        assert_eq!(extract_tags(&text).all.len(), 20);
    }

    #[test]
    fn thumbnail_blocks_split_on_blank_lines() {
        let sections = split_sections(STRUCTURED);
        let ideas = extract_thumbnail_ideas(&sections[&Section::Thumbnails]);

        assert_eq!(ideas.len(), 2);
        assert!(ideas[0].starts_with("1. Calendar"));
        assert!(ideas[1].ends_with("I LEARNED PYTHON"));
    }

    #[test]
    fn parse_keeps_raw_and_fills_sections() {
        let result = parse_response(STRUCTURED, &GenerationOptions::default());

        assert_eq!(result.raw, STRUCTURED);
        assert_eq!(result.titles.len(), 3);
        assert!(result.description.starts_with("Want to learn Python"));
        assert_eq!(result.tags.primary.len(), 3);
        assert_eq!(result.thumbnail_ideas.len(), 2);
    }

    #[test]
    fn unstructured_response_leaves_sections_empty() {
        let raw = "I can't help with that right now.";
        let result = parse_response(raw, &GenerationOptions::default());

        assert!(result.titles.is_empty());
        assert!(result.description.is_empty());
        assert!(result.tags.all.is_empty());
        assert_eq!(result.raw, raw);
    }

    #[test]
    fn unrequested_sections_are_ignored() {
        let options = GenerationOptions {
            sections: Sections::default().without(Section::Description),
            ..Default::default()
        };
        let result = parse_response(STRUCTURED, &options);

        assert!(result.description.is_empty());
        assert!(!result.sections.description);
        assert_eq!(result.titles.len(), 3);
    }
}
