//! Composes the rhyming sentence: random base word, rhyme lookup,
//! uniform pick among candidates.

use anyhow::{Context, Result, bail};
use rand::RngExt;
use std::sync::Arc;

use crate::publisher::GeneratedPost;
use crate::rhyme::RhymeSource;
use crate::words;

/// Produces one-line rhyming sentences of the form
/// `"<base> rhymes with <rhyme>"`.
pub struct SentenceGenerator {
    rhymes: Arc<dyn RhymeSource>,
}

impl SentenceGenerator {
    pub fn new(rhymes: Arc<dyn RhymeSource>) -> Self {
        Self { rhymes }
    }

    /// Generate a post around a freshly drawn random base word.
    pub async fn generate(&self) -> Result<GeneratedPost> {
        self.generate_for(words::random_word()).await
    }

    /// Generate a post around the given base word.
    /// Fails when the rhyme service errors or knows no rhyme for it.
    pub async fn generate_for(&self, base: &str) -> Result<GeneratedPost> {
        let candidates = self
            .rhymes
            .rhymes(base)
            .await
            .with_context(|| format!("rhyme lookup for '{}' failed", base))?;

        if candidates.is_empty() {
            bail!("no rhymes found for '{}'", base);
        }

        let mut rng = rand::rng();
        let pick = &candidates[rng.random_range(0..candidates.len())];
        Ok(GeneratedPost::text(format!(
            "{} rhymes with {}",
            base, pick.word
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhyme::mock::MockRhymes;

    fn generator(rhymes: Arc<MockRhymes>) -> SentenceGenerator {
        SentenceGenerator::new(rhymes)
    }

    #[tokio::test]
    async fn message_combines_base_and_candidate() {
        let rhymes = Arc::new(MockRhymes::with_words(&["cat", "hat", "bat"]));
        let post = generator(rhymes.clone()).generate_for("mat").await.unwrap();

        let expected = [
            "mat rhymes with cat",
            "mat rhymes with hat",
            "mat rhymes with bat",
        ];
        assert!(
            expected.contains(&post.message.as_str()),
            "unexpected message {:?}",
            post.message
        );
        assert_eq!(post.kind, "text");
        assert_eq!(rhymes.lookups(), 1);
    }

    #[tokio::test]
    async fn single_candidate_is_always_picked() {
        let rhymes = Arc::new(MockRhymes::with_words(&["chat"]));
        let generator = generator(rhymes);
        for _ in 0..10 {
            let post = generator.generate_for("hat").await.unwrap();
            assert_eq!(post.message, "hat rhymes with chat");
        }
    }

    #[tokio::test]
    async fn empty_candidate_list_is_an_error() {
        let rhymes = Arc::new(MockRhymes::empty());
        let err = generator(rhymes).generate_for("orange").await.unwrap_err();
        assert!(err.to_string().contains("no rhymes found for 'orange'"));
    }

    #[tokio::test]
    async fn rhyme_service_failure_propagates() {
        let rhymes = Arc::new(MockRhymes::failing("connection refused"));
        let err = generator(rhymes).generate_for("mat").await.unwrap_err();
        assert!(err.to_string().contains("rhyme lookup for 'mat' failed"));
    }

    #[tokio::test]
    async fn random_base_word_produces_well_formed_message() {
        let rhymes = Arc::new(MockRhymes::with_words(&["thing"]));
        let post = generator(rhymes).generate().await.unwrap();
        let (base, rest) = post.message.split_once(" rhymes with ").unwrap();
        assert!(!base.is_empty());
        assert_eq!(rest, "thing");
    }
}
