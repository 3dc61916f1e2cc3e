use async_trait::async_trait;

use super::{SummarizeError, Summarizer, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS};

/// Lead-sentence summarizer. Fast, deterministic, no network call.
///
/// Algorithm:
/// 1. Split the chunk into sentences (a word ending in `.`, `!` or `?` closes one).
/// 2. Take sentences in order until at least `min_words` words are collected.
/// 3. Never exceed `max_words`: a sentence that would overflow is cut at the limit.
pub struct ExtractiveSummarizer {
    min_words: usize,
    max_words: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new(MIN_SUMMARY_WORDS, MAX_SUMMARY_WORDS)
    }
}

impl ExtractiveSummarizer {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        let max_words = max_words.max(1);
        Self {
            min_words: min_words.min(max_words),
            max_words,
        }
    }

    fn summarize_sync(&self, chunk: &str) -> String {
        let mut picked: Vec<String> = Vec::new();
        let mut count = 0;

        for sentence in split_sentences(chunk) {
            if count >= self.min_words {
                break;
            }
            let words: Vec<&str> = sentence.split(' ').collect();
            if count + words.len() > self.max_words {
                let remaining = self.max_words - count;
                if remaining > 0 {
                    picked.push(words[..remaining].join(" "));
                }
                break;
            }
            count += words.len();
            picked.push(sentence);
        }

        picked.join(" ")
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let summary = self.summarize_sync(chunk);
        if summary.is_empty() {
            return Err(SummarizeError::Empty);
        }
        Ok(summary)
    }

    fn backend(&self) -> &'static str {
        "extractive"
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        if word.ends_with(|c: char| matches!(c, '.' | '!' | '?')) {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, tag: &str) -> String {
        (0..n).map(|i| format!("{tag}{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Built APIs. Led a team!  Shipped v2? trailing words"),
            vec!["Built APIs.", "Led a team!", "Shipped v2?", "trailing words"]
        );
    }

    #[test]
    fn test_short_text_returned_whole() {
        let s = ExtractiveSummarizer::default();
        assert_eq!(
            s.summarize_sync("Experienced engineer. Likes Rust."),
            "Experienced engineer. Likes Rust."
        );
    }

    #[test]
    fn test_stops_once_min_words_reached() {
        let s = ExtractiveSummarizer::new(5, 130);
        let text = format!("{}. {}. {}.", words(3, "a"), words(3, "b"), words(3, "c"));
        let summary = s.summarize_sync(&text);
        // 3 words < 5 → take the second sentence too; 6 ≥ 5 → stop.
        assert_eq!(summary, format!("{}. {}.", words(3, "a"), words(3, "b")));
    }

    #[test]
    fn test_long_sentence_is_cut_at_max() {
        let s = ExtractiveSummarizer::new(30, 130);
        let text = words(400, "w");
        let summary = s.summarize_sync(&text);
        assert_eq!(summary.split(' ').count(), 130);
        assert!(summary.starts_with("w0 w1 w2"));
    }

    #[test]
    fn test_never_exceeds_max_words() {
        let s = ExtractiveSummarizer::default();
        let text = format!("{}. {}.", words(20, "a"), words(200, "b"));
        let summary = s.summarize_sync(&text);
        assert_eq!(summary.split(' ').count(), 130);
    }

    #[tokio::test]
    async fn test_empty_chunk_is_an_error() {
        let s = ExtractiveSummarizer::default();
        assert!(matches!(
            s.summarize_chunk("   ").await,
            Err(SummarizeError::Empty)
        ));
    }
}
