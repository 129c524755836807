//! Best-effort AI enrichment.
//!
//! Two independent model calls: tag classification and summary generation.
//! Each call sits inside its own fault boundary - a failure in one must not
//! affect the other, and neither may abort the pipeline. Enrichment is
//! best-effort; ingestion is not.

use std::collections::BTreeSet;

use tracing::warn;

use crate::pipeline::prompts::{format_summary_prompt, format_tag_prompt};
use crate::taxonomy::parse_tag_list;
use crate::traits::model::TextModel;
use crate::types::{EnrichmentResult, ExtractedMetadata};

/// Enrich extracted metadata with tags and a summary.
///
/// Never fails: any model error is logged and converted into that call's
/// default output (empty tag set, empty summary).
pub async fn enrich<M: TextModel>(
    metadata: &ExtractedMetadata,
    url: &str,
    model: &M,
) -> EnrichmentResult {
    let tags = match model
        .generate(&format_tag_prompt(
            &metadata.title,
            &metadata.description,
            url,
        ))
        .await
    {
        Ok(response) => parse_tag_list(&response),
        Err(error) => {
            warn!(url = %url, error = %error, "tag classification failed");
            BTreeSet::new()
        }
    };

    let summary = match model
        .generate(&format_summary_prompt(&metadata.title, &metadata.description))
        .await
    {
        Ok(response) => response,
        Err(error) => {
            warn!(url = %url, error = %error, "summary generation failed");
            String::new()
        }
    };

    EnrichmentResult { tags, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Tag;
    use crate::testing::MockModel;

    fn metadata() -> ExtractedMetadata {
        ExtractedMetadata {
            title: "Hello".to_string(),
            description: "World".to_string(),
            image_url: String::new(),
            domain: "example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn happy_path_populates_both_halves() {
        let model = MockModel::new()
            .with_response("News, Blog")
            .with_response("A short summary.");

        let result = enrich(&metadata(), "https://example.com/a", &model).await;

        assert_eq!(result.tags, BTreeSet::from([Tag::News, Tag::Blog]));
        assert_eq!(result.summary, "A short summary.");
    }

    #[tokio::test]
    async fn unknown_tags_are_filtered() {
        let model = MockModel::new()
            .with_response("Image, Foo, Video")
            .with_response("Summary.");

        let result = enrich(&metadata(), "https://example.com/a", &model).await;

        assert_eq!(result.tags, BTreeSet::from([Tag::Image, Tag::Video]));
    }

    #[tokio::test]
    async fn tag_failure_does_not_affect_summary() {
        let model = MockModel::new()
            .with_failure("quota exceeded")
            .with_response("Still summarized.");

        let result = enrich(&metadata(), "https://example.com/a", &model).await;

        assert!(result.tags.is_empty());
        assert_eq!(result.summary, "Still summarized.");
    }

    #[tokio::test]
    async fn summary_failure_does_not_affect_tags() {
        let model = MockModel::new()
            .with_response("Music")
            .with_failure("timeout");

        let result = enrich(&metadata(), "https://example.com/a", &model).await;

        assert_eq!(result.tags, BTreeSet::from([Tag::Music]));
        assert_eq!(result.summary, "");
    }

    #[tokio::test]
    async fn both_failures_yield_empty_result() {
        let model = MockModel::new()
            .with_failure("down")
            .with_failure("down");

        let result = enrich(&metadata(), "https://example.com/a", &model).await;

        assert_eq!(result, EnrichmentResult::empty());
    }

    #[tokio::test]
    async fn issues_tag_prompt_then_summary_prompt() {
        let model = MockModel::new()
            .with_response("News")
            .with_response("Summary.");

        enrich(&metadata(), "https://example.com/a", &model).await;

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("comma-separated list"));
        assert!(prompts[1].contains("2-3 sentence summary"));
    }
}
