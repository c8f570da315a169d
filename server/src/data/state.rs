use crate::config::TelemetryConfig;
use crate::telemetry::entropy::{self, EntropyFactory, EntropySource};

/// Shared, read-only state handed to every worker.
pub struct HttpState {
    entropy: EntropyFactory,
}

impl HttpState {
    pub fn new(config: &TelemetryConfig) -> HttpState {
        let entropy = match config.seed {
            Some(seed) => entropy::seeded(seed),
            None => entropy::thread_local(),
        };

        return HttpState::with_entropy(entropy);
    }

    pub fn with_entropy(entropy: EntropyFactory) -> HttpState {
        return HttpState { entropy };
    }

    pub fn entropy(&self) -> Box<dyn EntropySource> {
        return (self.entropy)();
    }
}
