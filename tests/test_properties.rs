//! Property tests for name sanitization, classification and topical assembly.

use pastpaper::memory::{MemoryDocument, MemoryWriter};
use pastpaper::{
    sanitize_topic_name, topical_filename, KeywordIndex, NoProgress, TopicClassifier,
    TopicalDocumentBuilder,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

const PAIRS: &[(&str, &str)] = &[
    ("vector", "Vectors"),
    ("plane", "Vectors"),
    ("matrix", "Matrices"),
    ("Eigenvalue", "Matrices"),
    ("induction", "Mathematical Induction"),
    ("circular", "Circular Motion"),
    ("circular motion", "Circular Motion "),
];

const WORDS: &[&str] = &[
    "vector", "PLANE", "matrix", "eigenvalue", "induction", "circular", "motion", "the", "find",
    "show", "that", "  ", "\n", "Matrix", "planet",
];

fn index() -> KeywordIndex {
    KeywordIndex::from_pairs("9231", PAIRS.iter().copied())
}

fn page_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|words| words.join(" "))
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(page_text(), 0..12)
}

/// Topics whose keyword occurs in `text`, case-insensitively.
fn expected_topics(text: &str) -> BTreeSet<String> {
    if text.trim().is_empty() {
        return BTreeSet::new();
    }
    let text = text.to_lowercase();
    PAIRS
        .iter()
        .filter(|(keyword, _)| text.contains(&keyword.to_lowercase()))
        .map(|(_, topic)| topic.to_string())
        .collect()
}

mod sanitize_props {
    use super::*;

    proptest! {
        /// Property: sanitized names are non-empty and file-name safe
        #[test]
        fn test_sanitize_is_safe(topic in any::<String>()) {
            let name = sanitize_topic_name(&topic);
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains("__"));
            prop_assert!(name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
        }

        /// Property: sanitizing twice changes nothing
        #[test]
        fn test_sanitize_is_idempotent(topic in any::<String>()) {
            let once = sanitize_topic_name(&topic);
            prop_assert_eq!(sanitize_topic_name(&once), once);
        }

        /// Property: topical file names follow the naming convention
        #[test]
        fn test_topical_filename_shape(topic in "[ -~]{0,40}") {
            let name = topical_filename("9231", &topic);
            prop_assert!(name.starts_with("Topical_9231_"));
            prop_assert!(name.ends_with(".pdf"));
        }
    }
}

mod classification_props {
    use super::*;

    proptest! {
        /// Property: a page lands in exactly the topics whose keywords it contains
        #[test]
        fn test_classification_matches_keywords(pages in document()) {
            let doc = MemoryDocument::from_texts(pages.clone());
            let index = index();
            let (classification, _) = TopicClassifier::new(&index).classify(&doc, &mut NoProgress);

            for (page_index, text) in pages.iter().enumerate() {
                let found: BTreeSet<String> = classification
                    .iter()
                    .filter(|(_, set)| set.contains(&page_index))
                    .map(|(topic, _)| topic.to_string())
                    .collect();
                prop_assert_eq!(found, expected_topics(text));
            }
        }

        /// Property: page indices are in range and topics come from the index
        #[test]
        fn test_classification_bounds(pages in document()) {
            let doc = MemoryDocument::from_texts(pages.clone());
            let index = index();
            let (classification, _) = TopicClassifier::new(&index).classify(&doc, &mut NoProgress);

            let known = index.topics();
            for (topic, set) in classification.iter() {
                prop_assert!(known.contains(topic));
                prop_assert!(!set.is_empty());
                prop_assert!(set.iter().all(|&i| i < pages.len()));
            }
        }

        /// Property: classifying the same document twice gives the same result
        #[test]
        fn test_classification_is_deterministic(pages in document()) {
            let doc = MemoryDocument::from_texts(pages);
            let index = index();
            let classifier = TopicClassifier::new(&index);
            let (first, first_errors) = classifier.classify(&doc, &mut NoProgress);
            let (second, second_errors) = classifier.classify(&doc, &mut NoProgress);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_errors, second_errors);
        }
    }
}

mod builder_props {
    use super::*;

    proptest! {
        /// Property: outputs are in topic order, pages ascending, names unique
        #[test]
        fn test_outputs_are_ordered(pages in document()) {
            let doc = MemoryDocument::from_texts(pages);
            let index = index();
            let (classification, _) = TopicClassifier::new(&index).classify(&doc, &mut NoProgress);

            let mut writer = MemoryWriter::new();
            let builder = TopicalDocumentBuilder::new("9231", Path::new("out"));
            let (outputs, errors) = builder.build(&doc, &classification, &mut writer, &mut NoProgress);

            prop_assert!(errors.is_empty());
            prop_assert_eq!(outputs.len(), classification.topic_count());

            let topics: Vec<_> = outputs.iter().map(|o| o.topic.clone()).collect();
            let mut sorted = topics.clone();
            sorted.sort();
            prop_assert_eq!(topics, sorted);

            let mut names = HashSet::new();
            for output in &outputs {
                prop_assert!(output.pages.windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(output.page_count, output.pages.len());
                prop_assert!(names.insert(output.filename.clone()));
            }
        }
    }
}
