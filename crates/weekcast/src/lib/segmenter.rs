//! # Segmenter
//!
//! Splits a translated programme text into episodes using its recurring
//! `Week X Day Y` markers.

use std::sync::LazyLock;

use regex::Regex;

static WEEK_DAY_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bweek\s*\d+\s*[:,.\-–]?\s*day\s*\d+").unwrap()
});

/// A labeled chunk of text, starting at its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The marker text as it appears in the source, e.g. `Week 2 Day 3`
    pub label: String,
    /// Everything from the marker (inclusive) up to the next marker
    pub content: String,
}

impl Segment {
    /// The label made safe to use as a file name.
    ///
    /// Spaces and colons become `_`. A marker broken over a line carries other
    /// whitespace, which is replaced the same way.
    pub fn file_stem(&self) -> String {
        self.label
            .chars()
            .map(|c| if c.is_whitespace() || c == ':' { '_' } else { c })
            .collect()
    }

    pub fn audio_file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.file_stem())
    }
}

/// Partitions `text` into segments, one per marker, in the order the markers appear.
///
/// Text before the first marker is discarded. Returns an empty vector when the
/// text has no markers at all. Marker numbers are not validated, so repeated or
/// out-of-order markers each yield their own segment.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Vec<Segment> {
    let markers = WEEK_DAY_MARKER_RE.find_iter(text).collect::<Vec<_>>();

    let segments = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());

            Segment {
                label: marker.as_str().trim().to_string(),
                content: text[marker.start()..end].trim().to_string(),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(count = segments.len(), "Segmented text");

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_markers_split_text() {
        let segments = segment("Week 1 Day 1\nHello.\nWeek 1 Day 2\nWorld.");

        assert_eq!(
            segments,
            vec![
                Segment {
                    label: "Week 1 Day 1".into(),
                    content: "Week 1 Day 1\nHello.".into(),
                },
                Segment {
                    label: "Week 1 Day 2".into(),
                    content: "Week 1 Day 2\nWorld.".into(),
                },
            ]
        );
    }

    #[test]
    fn test_no_markers_yields_empty() {
        assert!(segment("Just an introduction with no days in it.").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_preamble_before_first_marker_is_dropped() {
        let segments = segment("Intro paragraph.\n\nWeek 3 Day 1 Morning talk.");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "Week 3 Day 1 Morning talk.");
    }

    #[test]
    fn test_markers_mid_line_and_irregular_whitespace() {
        let text = "Notes: Week  2   Day\t4 first part, then week 2 day 5 second part";
        let segments = segment(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Week  2   Day\t4");
        assert_eq!(segments[0].content, "Week  2   Day\t4 first part, then");
        assert_eq!(segments[1].label, "week 2 day 5");
        assert_eq!(segments[1].content, "week 2 day 5 second part");
    }

    #[test]
    fn test_marker_followed_by_word_characters() {
        let text = "Week 1 Day 1st talk. Week 1 Day 2nd talk.\nWeek 1 Day 3Closing.";
        let segments = segment(text);

        let labels = segments.iter().map(|s| s.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Week 1 Day 1", "Week 1 Day 2", "Week 1 Day 3"]);
        assert_eq!(segments[1].content, "Week 1 Day 2nd talk.");
    }

    #[test]
    fn test_colon_separated_marker() {
        let segments = segment("Week 1: Day 2\nText");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "Week 1: Day 2");
    }

    #[test]
    fn test_duplicate_and_out_of_order_markers_are_kept() {
        let text = "Week 2 Day 1 a\nWeek 1 Day 7 b\nWeek 2 Day 1 c";
        let labels = segment(text)
            .into_iter()
            .map(|s| s.label)
            .collect::<Vec<_>>();

        assert_eq!(labels, vec!["Week 2 Day 1", "Week 1 Day 7", "Week 2 Day 1"]);
    }

    #[test]
    fn test_segments_cover_text_from_first_marker() {
        let text = "preface Week 1 Day 1 alpha Week 1 Day 2 beta Week 1 Day 3 gamma";
        let segments = segment(text);

        assert_eq!(segments.len(), 3);

        let first = text.find("Week 1 Day 1").unwrap();
        let joined = segments
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, &text[first..]);
    }

    #[test]
    fn test_word_embedded_in_other_word_is_not_a_marker() {
        assert!(segment("midweek 3 day 4 recap").is_empty());
    }

    #[test]
    fn test_file_stem_replaces_spaces_and_colons() {
        let segment = Segment {
            label: "Week 1: Day 2".into(),
            content: String::new(),
        };

        assert_eq!(segment.file_stem(), "Week_1__Day_2");
        assert_eq!(segment.audio_file_name("mp3"), "Week_1__Day_2.mp3");
    }

    #[test]
    fn test_file_stem_for_marker_across_lines() {
        let segments = segment("Week 4\nDay 6 content");

        assert_eq!(segments[0].file_stem(), "Week_4_Day_6");
    }
}
