use crate::i18n::Language;
use crate::lookup::recommend::{Recommendation, RecommendationClient};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub plant_name: String,
    pub language: Language,
}

#[derive(Debug)]
pub struct LookupCompletion {
    pub plant_name: String,
    pub recommendation: Recommendation,
}

/// Runs recommendation lookups on background threads and hands completions
/// back to the event loop through a channel drained on tick.
pub struct LookupExecutor {
    client: Arc<RecommendationClient>,
    completion_tx: Sender<LookupCompletion>,
    completion_rx: Receiver<LookupCompletion>,
}

impl LookupExecutor {
    pub fn new(client: RecommendationClient) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<LookupCompletion>();
        Self {
            client: Arc::new(client),
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, request: LookupRequest) {
        let client = Arc::clone(&self.client);
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let recommendation = client.lookup(&request.plant_name, request.language);
            let _ = completion_tx.send(LookupCompletion {
                plant_name: request.plant_name,
                recommendation,
            });
        });
    }

    pub fn drain_ready(&self) -> Vec<LookupCompletion> {
        let mut out = Vec::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn spawned_lookup_completes_through_the_channel() {
        // No API key, so the lookup resolves offline from the mock table.
        let executor =
            LookupExecutor::new(RecommendationClient::new(None, Duration::from_secs(1)));
        executor.spawn(LookupRequest {
            plant_name: "Peace Lily".to_string(),
            language: Language::En,
        });

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            let completions = executor.drain_ready();
            if !completions.is_empty() {
                assert_eq!(completions[0].plant_name, "Peace Lily");
                assert!(completions[0].recommendation.is_fallback());
                break;
            }
            assert!(std::time::Instant::now() < deadline, "lookup never completed");
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}
