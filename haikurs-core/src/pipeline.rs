//! End-to-end pipeline: detection followed by moderation

use std::sync::Arc;

use crate::config::{Config, OverrideSource};
use crate::detector::{Haiku, HaikuDetector, Haikus};
use crate::error::Result;
use crate::moderation::{
    ArticleMeta, ContentModerator, RejectReason, SensitiveLexicon, Sensitivity, Verdict,
};
use crate::segment::RuleSegmenter;
use crate::syllables::{HeuristicCounter, SyllableCounter, SyllableOverrideTable};

/// Outcome of running one article through the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleReport {
    /// Set when the article was skipped entirely
    pub screened: Option<Sensitivity>,
    pub accepted: Vec<Haiku>,
    pub rejected: Vec<(Haiku, RejectReason)>,
}

/// Detector and moderator built from one [`Config`]
#[derive(Debug, Clone)]
pub struct HaikuPipeline {
    detector: HaikuDetector,
    moderator: ContentModerator,
    config: Config,
}

impl HaikuPipeline {
    /// Pipeline over the embedded resources
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Pipeline with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let overrides = match &config.overrides {
            OverrideSource::Embedded => SyllableOverrideTable::embedded()?,
            OverrideSource::File(path) => SyllableOverrideTable::from_path(path)?,
            OverrideSource::Disabled => SyllableOverrideTable::empty(),
        };
        let base = Arc::new(HeuristicCounter::embedded()?);
        let counter = SyllableCounter::new(base, Arc::new(overrides))
            .with_special_tokens(config.special_tokens.clone())
            .with_max_depth(config.max_depth);
        let detector = HaikuDetector::new(counter, Arc::new(RuleSegmenter::english()?));

        let lexicon = SensitiveLexicon::load(&config.lexicons)?;
        let moderator = ContentModerator::new(Arc::new(lexicon))?;

        Ok(Self {
            detector,
            moderator,
            config,
        })
    }

    pub fn detector(&self) -> &HaikuDetector {
        &self.detector
    }

    pub fn moderator(&self) -> &ContentModerator {
        &self.moderator
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Unmoderated candidates of `body`
    pub fn find_haikus<'p, 't>(&'p self, body: impl Into<Option<&'t str>>) -> Haikus<'p, 't> {
        self.detector.find_haikus(body)
    }

    /// Candidates of `body` that pass review
    pub fn publishable<'a>(&'a self, body: &'a str) -> impl Iterator<Item = Haiku> + 'a {
        self.find_haikus(body)
            .filter(|haiku| self.moderator.review(haiku).is_accept())
    }

    /// Screen the article, then detect and review every candidate
    pub fn process_article(&self, meta: &ArticleMeta, body: &str) -> ArticleReport {
        if let Some(reason) = self.moderator.screen_article(meta) {
            log::debug!("skipping article: {reason}");
            return ArticleReport {
                screened: Some(reason),
                ..Default::default()
            };
        }

        let mut report = ArticleReport::default();
        for haiku in self.find_haikus(body) {
            match self.moderator.review(&haiku) {
                Verdict::Accept => report.accepted.push(haiku),
                Verdict::Reject(reason) => report.rejected.push((haiku, reason)),
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};

    #[test]
    fn test_default_pipeline() {
        let pipeline = HaikuPipeline::new().unwrap();
        assert_eq!(pipeline.find_haikus("").count(), 0);
        assert_eq!(pipeline.find_haikus(None::<&str>).count(), 0);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = Config {
            max_depth: 0,
            ..Config::default()
        };
        assert!(matches!(
            HaikuPipeline::with_config(config),
            Err(Error::Config(ConfigError::ZeroDepth))
        ));
    }

    #[test]
    fn test_missing_override_file_is_fatal() {
        let config = Config::builder()
            .overrides_file("/nonexistent/overrides.csv")
            .build()
            .unwrap();
        assert!(matches!(
            HaikuPipeline::with_config(config),
            Err(Error::Resource(_))
        ));
    }

    #[test]
    fn test_publishable_filters_rejections() {
        let pipeline = HaikuPipeline::new().unwrap();
        let pond = "An old silent pond sees a frog jump into it with a splash of sound.";
        let murder = "An old silent pond sees a frog murdered by it with a splash of sound.";
        let body = format!("{murder} {pond}");

        assert_eq!(pipeline.find_haikus(body.as_str()).count(), 2);
        let published: Vec<_> = pipeline.publishable(&body).collect();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].source_sentence, pond);

        let report = pipeline.process_article(&ArticleMeta::default(), &body);
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(
            report.rejected.first().map(|(_, reason)| *reason),
            Some(RejectReason::SensitiveTerm)
        );
    }

    #[test]
    fn test_screened_article_yields_nothing() {
        let pipeline = HaikuPipeline::new().unwrap();
        let meta = ArticleMeta {
            tags: vec!["Looting".to_string()],
            ..Default::default()
        };
        let report = pipeline.process_article(&meta, "An old silent pond.");
        assert!(report.screened.is_some());
        assert!(report.accepted.is_empty());
    }
}
