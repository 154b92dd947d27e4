use std::sync::{Arc, OnceLock};

use crate::classifier::{Classifier, Masker};
use crate::config::EngineConfig;
use crate::decision::ClassificationResult;
use crate::error::Result;
use crate::identifier::{IdentifierValidationResult, IdentifierValidator};
use crate::lexicon::{Lexicon, LEXICON};
use crate::normalize::NormalizePipeline;
use crate::script::ScriptTag;

/// Everything needed to classify text and validate nicknames, built once.
///
/// All state is read-only after construction, so one engine can be shared
/// across threads.
pub struct Engine {
    lexicon: Arc<Lexicon>,
    normalizer: Arc<NormalizePipeline>,
    classifier: Classifier,
    validator: IdentifierValidator,
}

impl Engine {
    /// Build an engine and its own lexicon from config.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let normalizer = Arc::new(NormalizePipeline::with_filter(config.normalize.symbol_filter));
        let lexicon = Arc::new(Lexicon::build(
            &normalizer,
            &config.lexicon.custom_words,
            &config.lexicon.allow_list,
        ));
        Self::assemble(lexicon, normalizer, config)
    }

    /// Build around an existing lexicon. The lexicon's terms must have been
    /// normalized with the same symbol filter as `config.normalize`.
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: &EngineConfig) -> Result<Self> {
        let normalizer = Arc::new(NormalizePipeline::with_filter(config.normalize.symbol_filter));
        Self::assemble(lexicon, normalizer, config)
    }

    fn assemble(
        lexicon: Arc<Lexicon>,
        normalizer: Arc<NormalizePipeline>,
        config: &EngineConfig,
    ) -> Result<Self> {
        let masker = Masker::new(Arc::clone(&normalizer), config.masking.placeholder)?;
        let classifier = Classifier::new(&lexicon, Arc::clone(&normalizer), masker)?;
        let validator = IdentifierValidator::new(&config.identifier)?;

        tracing::debug!(
            fingerprint = %lexicon.fingerprint(),
            block = lexicon.block().len(),
            mask = lexicon.mask().len(),
            "engine ready"
        );

        Ok(Self {
            lexicon,
            normalizer,
            classifier,
            validator,
        })
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Mask `hits` in `text` without classifying.
    pub fn mask(&self, text: &str, hits: &[String]) -> String {
        self.classifier.masker().mask(text, hits)
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn detect_script(&self, identifier: &str) -> ScriptTag {
        self.validator.detector().detect(identifier)
    }

    pub fn validate_identifier_format(&self, identifier: &str) -> IdentifierValidationResult {
        self.validator.validate_format(identifier)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn validator(&self) -> &IdentifierValidator {
        &self.validator
    }
}

static GLOBAL: OnceLock<Engine> = OnceLock::new();

/// Initialize the process-wide engine. Only the first call builds; later
/// calls return the same engine and ignore their lists.
pub fn initialize(custom_words: &[String], allow_list: &[String]) -> &'static Engine {
    if let Some(engine) = GLOBAL.get() {
        if !custom_words.is_empty() || !allow_list.is_empty() {
            tracing::debug!("engine already initialized; ignoring custom and allow lists");
        }
        return engine;
    }
    GLOBAL.get_or_init(|| {
        let lexicon = LEXICON.initialize(custom_words, allow_list);
        Engine::with_lexicon(lexicon, &EngineConfig::default())
            .expect("default engine configuration should be valid")
    })
}

/// The process-wide engine, initialized with no custom lists if needed.
pub fn global() -> &'static Engine {
    initialize(&[], &[])
}
