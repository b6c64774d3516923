use std::collections::HashMap;

use crate::types::ContentMetrics;

const WORDS_PER_MINUTE: usize = 200;
const TOP_KEYWORDS: usize = 10;

/// Word counts and keyword density for a script. Computed locally.
pub fn analyze_content(script: &str) -> ContentMetrics {
    let words: Vec<String> = script.split_whitespace().map(str::to_lowercase).collect();

    // count, first position
    let mut frequency: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in words.iter().enumerate() {
        if word.chars().count() > 3 {
            frequency.entry(word.as_str()).or_insert((0, position)).0 += 1;
        }
    }

    let mut ranked: Vec<(&str, (usize, usize))> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));

    ContentMetrics {
        word_count: words.len(),
        char_count: script.chars().count(),
        reading_time_minutes: (words.len() / WORDS_PER_MINUTE).max(1),
        top_keywords: ranked
            .into_iter()
            .take(TOP_KEYWORDS)
            .map(|(word, (count, _))| (word.to_string(), count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_and_characters() {
        let metrics = analyze_content("How to learn Python from scratch in 30 days");

        assert_eq!(metrics.word_count, 9);
        assert_eq!(metrics.char_count, 43);
        assert_eq!(metrics.reading_time_minutes, 1);
    }

    #[test]
    fn reading_time_scales_with_length() {
        let script = "word ".repeat(650);
        assert_eq!(analyze_content(&script).reading_time_minutes, 3);
    }

    #[test]
    fn keywords_ignore_short_words_and_case() {
        let metrics = analyze_content("Python is fun. python is fast and PYTHON is everywhere fast");

        assert_eq!(metrics.top_keywords[0], ("python".to_string(), 3));
        assert_eq!(metrics.top_keywords[1], ("fast".to_string(), 2));
        assert!(metrics.top_keywords.iter().all(|(w, _)| w.len() > 3));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let metrics = analyze_content("zeta alpha zeta alpha");
        let words: Vec<&str> = metrics.top_keywords.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_script_still_reports_one_minute() {
        let metrics = analyze_content("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.reading_time_minutes, 1);
        assert!(metrics.top_keywords.is_empty());
    }
}
