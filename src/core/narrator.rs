use tracing::info;

use crate::core::i18n::Language;

/// Spoken feedback for user actions.
pub trait Narrator {
    fn speak(&self, language: Language, text: &str);
}

/// Emits every utterance as a log event on the `narrator` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn speak(&self, language: Language, text: &str) {
        info!(target: "narrator", locale = language.speech_locale(), "{text}");
    }
}
