//! Fact Application Service (Use Case)
//!
//! The witty-fact orchestrator. One request walks
//! FetchFact -> SelectStyle -> Rewrite -> Sanitize -> PersistState -> Respond,
//! strictly in sequence and with no backward transitions. Failures before
//! the rewrite step are terminal; everything after it is absorbed.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Uuid;

use kumo::domain::{DomainError, Fact, RewriteState};
use kumo::ports::{FactRepository, HistoryRepository, StyleRewriter};

use crate::services::sanitize::Sanitizer;
use crate::services::style::choose_style;

/// Served with a success status when the pool holds no facts at all.
pub const EMPTY_STORE_MESSAGE: &str = "No cloud facts available yet.";

/// Application service for fact operations
pub struct FactService {
    facts: Arc<dyn FactRepository>,
    history: Arc<dyn HistoryRepository>,
    rewriter: Arc<dyn StyleRewriter>,
    sanitizer: Sanitizer,
}

impl FactService {
    pub fn new(
        facts: Arc<dyn FactRepository>,
        history: Arc<dyn HistoryRepository>,
        rewriter: Arc<dyn StyleRewriter>,
        sanitizer: Sanitizer,
    ) -> Self {
        Self {
            facts,
            history,
            rewriter,
            sanitizer,
        }
    }

    /// Serve one witty fact.
    pub async fn witty_fact(&self) -> Result<String, DomainError> {
        self.witty_fact_with_rng(&mut StdRng::from_entropy()).await
    }

    /// Same as [`witty_fact`](Self::witty_fact) with an injected RNG so
    /// tests can force the random draws.
    pub async fn witty_fact_with_rng(
        &self,
        rng: &mut (impl Rng + Send),
    ) -> Result<String, DomainError> {
        let facts = self.facts.list_all().await?;
        if facts.is_empty() {
            tracing::info!("fact pool is empty, serving placeholder");
            return Ok(EMPTY_STORE_MESSAGE.to_string());
        }

        let fact = &facts[rng.gen_range(0..facts.len())];
        if fact.text.trim().is_empty() {
            return Err(DomainError::InvalidItem(format!(
                "fact {} has no text",
                fact.id
            )));
        }

        let history = match self.history.read().await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("history read failed ({}), treating as no history", err);
                RewriteState::default()
            }
        };

        let style = choose_style(&history, rng);
        let witty = self.rewriter.rewrite(&fact.text, style).await;
        let clean = self.sanitizer.sanitize(&witty);

        let fingerprint = fact.fingerprint();
        tracing::info!("served fact {} in {} style", fingerprint, style);

        // Fire-and-forget: neither failure nor latency of the write-back
        // may delay or alter the response.
        let history_repo = Arc::clone(&self.history);
        tokio::spawn(async move {
            if let Err(err) = history_repo.write(&fingerprint, style).await {
                tracing::warn!("failed to record rewrite state (non-fatal): {}", err);
            }
        });

        Ok(clean)
    }

    /// List the fact pool
    pub async fn list_facts(&self) -> Result<Vec<Fact>, DomainError> {
        self.facts.list_all().await
    }

    /// Add a fact to the pool
    pub async fn add_fact(&self, text: String) -> Result<Fact, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation(
                "fact text must not be empty".to_string(),
            ));
        }

        let fact = Fact::new(text.trim());
        let saved = self.facts.save(&fact).await?;
        tracing::info!("added fact {} ({})", saved.fingerprint(), saved.id);
        Ok(saved)
    }

    /// Remove a fact from the pool
    pub async fn remove_fact(&self, id: Uuid) -> Result<(), DomainError> {
        if self.facts.delete(id).await? {
            tracing::info!("removed fact {}", id);
            Ok(())
        } else {
            Err(DomainError::not_found("Fact", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use kumo::domain::{FactId, Style};

    use crate::services::fallback::TemplateRewriter;

    struct FakeFactRepo {
        facts: Vec<Fact>,
    }

    #[async_trait]
    impl FactRepository for FakeFactRepo {
        async fn list_all(&self) -> Result<Vec<Fact>, DomainError> {
            Ok(self.facts.clone())
        }

        async fn save(&self, fact: &Fact) -> Result<Fact, DomainError> {
            Ok(fact.clone())
        }

        async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    struct FailingFactRepo;

    #[async_trait]
    impl FactRepository for FailingFactRepo {
        async fn list_all(&self) -> Result<Vec<Fact>, DomainError> {
            Err(DomainError::StoreUnavailable("connection refused".into()))
        }

        async fn save(&self, _fact: &Fact) -> Result<Fact, DomainError> {
            Err(DomainError::StoreUnavailable("connection refused".into()))
        }

        async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
            Err(DomainError::StoreUnavailable("connection refused".into()))
        }
    }

    struct FakeHistoryRepo {
        state: Mutex<RewriteState>,
        fail_read: bool,
        fail_write: bool,
    }

    impl FakeHistoryRepo {
        fn empty() -> Self {
            Self {
                state: Mutex::new(RewriteState::default()),
                fail_read: false,
                fail_write: false,
            }
        }

        fn with_last_style(style: Style) -> Self {
            Self {
                state: Mutex::new(RewriteState::new(None, Some(style))),
                fail_read: false,
                fail_write: false,
            }
        }
    }

    #[async_trait]
    impl HistoryRepository for FakeHistoryRepo {
        async fn read(&self) -> Result<RewriteState, DomainError> {
            if self.fail_read {
                return Err(DomainError::HistoryUnavailable("no table".into()));
            }
            Ok(self.state.lock().unwrap().clone())
        }

        async fn write(&self, fact_id: &FactId, style: Style) -> Result<(), DomainError> {
            if self.fail_write {
                return Err(DomainError::HistoryUnavailable("no table".into()));
            }
            *self.state.lock().unwrap() =
                RewriteState::new(Some(fact_id.clone()), Some(style));
            Ok(())
        }
    }

    /// Echoes the fact and records whether it was consulted at all.
    struct EchoRewriter {
        called: AtomicBool,
    }

    impl EchoRewriter {
        fn new() -> Self {
            Self {
                called: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl StyleRewriter for EchoRewriter {
        async fn rewrite(&self, fact: &str, _style: Style) -> String {
            self.called.store(true, Ordering::SeqCst);
            fact.to_string()
        }
    }

    fn service_with(
        facts: Arc<dyn FactRepository>,
        history: Arc<dyn HistoryRepository>,
        rewriter: Arc<dyn StyleRewriter>,
    ) -> FactService {
        FactService::new(facts, history, rewriter, Sanitizer::new())
    }

    #[tokio::test]
    async fn test_empty_store_serves_placeholder_without_rewrite() {
        let rewriter = Arc::new(EchoRewriter::new());
        let service = service_with(
            Arc::new(FakeFactRepo { facts: vec![] }),
            Arc::new(FakeHistoryRepo::empty()),
            rewriter.clone(),
        );

        let out = service.witty_fact().await.unwrap();
        assert_eq!(out, EMPTY_STORE_MESSAGE);
        assert!(!rewriter.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let service = service_with(
            Arc::new(FailingFactRepo),
            Arc::new(FakeHistoryRepo::empty()),
            Arc::new(EchoRewriter::new()),
        );

        let err = service.witty_fact().await.unwrap_err();
        assert!(matches!(err, DomainError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_blank_fact_text_is_invalid_item() {
        let service = service_with(
            Arc::new(FakeFactRepo {
                facts: vec![Fact::new("   ")],
            }),
            Arc::new(FakeHistoryRepo::empty()),
            Arc::new(EchoRewriter::new()),
        );

        let err = service.witty_fact().await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidItem(_)));
    }

    #[tokio::test]
    async fn test_no_credential_server_fact_is_templated_ascii() {
        let service = service_with(
            Arc::new(FakeFactRepo {
                facts: vec![Fact::new("Servers love electricity.")],
            }),
            Arc::new(FakeHistoryRepo::empty()),
            Arc::new(TemplateRewriter),
        );

        let out = service.witty_fact().await.unwrap();
        assert_eq!(
            out,
            "Servers love electricity. - servers: where the clouds do their heavy lifting."
        );
        assert!(out.is_ascii());
        assert!(out.chars().count() <= 200);
    }

    #[tokio::test]
    async fn test_prior_style_never_reused() {
        let service = service_with(
            Arc::new(FakeFactRepo {
                facts: vec![Fact::new("The cloud never sleeps.")],
            }),
            Arc::new(FakeHistoryRepo::with_last_style(Style::Dry)),
            Arc::new(EchoRewriter::new()),
        );

        for seed in 0..100 {
            let history = FakeHistoryRepo::with_last_style(Style::Dry);
            let picked = choose_style(&history.read().await.unwrap(), &mut StdRng::seed_from_u64(seed));
            assert_ne!(picked, Style::Dry);
        }

        // And the full pipeline still serves successfully with history present.
        let out = service.witty_fact().await.unwrap();
        assert_eq!(out, "The cloud never sleeps.");
    }

    #[tokio::test]
    async fn test_history_read_failure_treated_as_no_history() {
        let history = Arc::new(FakeHistoryRepo {
            state: Mutex::new(RewriteState::default()),
            fail_read: true,
            fail_write: false,
        });
        let service = service_with(
            Arc::new(FakeFactRepo {
                facts: vec![Fact::new("The cloud never sleeps.")],
            }),
            history,
            Arc::new(EchoRewriter::new()),
        );

        let out = service.witty_fact().await.unwrap();
        assert_eq!(out, "The cloud never sleeps.");
    }

    #[tokio::test]
    async fn test_history_write_failure_never_affects_response() {
        let history = Arc::new(FakeHistoryRepo {
            state: Mutex::new(RewriteState::default()),
            fail_read: false,
            fail_write: true,
        });
        let service = service_with(
            Arc::new(FakeFactRepo {
                facts: vec![Fact::new("The cloud never sleeps.")],
            }),
            history,
            Arc::new(EchoRewriter::new()),
        );

        let out = service.witty_fact().await.unwrap();
        assert_eq!(out, "The cloud never sleeps.");
    }

    #[tokio::test]
    async fn test_add_fact_rejects_blank_text() {
        let service = service_with(
            Arc::new(FakeFactRepo { facts: vec![] }),
            Arc::new(FakeHistoryRepo::empty()),
            Arc::new(EchoRewriter::new()),
        );

        let err = service.add_fact("  ".to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_unknown_fact_is_not_found() {
        let service = service_with(
            Arc::new(FakeFactRepo { facts: vec![] }),
            Arc::new(FakeHistoryRepo::empty()),
            Arc::new(EchoRewriter::new()),
        );

        let err = service.remove_fact(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
