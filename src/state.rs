use std::sync::Arc;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::agent::{StatelessLLMFactory, StatelessLLMInterface};
use crate::config::Config;
use crate::translate::{ResultStore, Translator};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<Translator>,
    pub sessions: Arc<DashMap<String, Arc<Mutex<SessionContext>>>>, // session_uid -> context
}

/// Everything one browser session owns. Handlers hold the mutex for a whole
/// submission, so a session never has two requests in flight.
pub struct SessionContext {
    pub session_uid: String,
    pub store: ResultStore,
    pub last_active: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(session_uid: String) -> Self {
        Self {
            session_uid,
            store: ResultStore::new(),
            last_active: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator_config = &config.translator_config;
        let llm_config = translator_config
            .llm_configs
            .get(&translator_config.llm_provider)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No configuration for LLM provider: {}",
                    translator_config.llm_provider
                )
            })?;
        let llm = StatelessLLMFactory::create_llm(&translator_config.llm_provider, llm_config)?;

        Ok(Self::with_llm(config, llm))
    }

    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            config,
            translator: Arc::new(Translator::new(llm)),
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_session_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Look up an existing session without creating one.
    pub fn existing_session(&self, session_uid: Option<&str>) -> Option<Arc<Mutex<SessionContext>>> {
        session_uid.and_then(|uid| self.sessions.get(uid).map(|ctx| ctx.value().clone()))
    }

    /// Look up the caller's session, or start a new one when the id is missing or
    /// unknown. The flag is true when a session was created.
    pub fn session(&self, session_uid: Option<&str>) -> (Arc<Mutex<SessionContext>>, bool) {
        if let Some(ctx) = self.existing_session(session_uid) {
            return (ctx, false);
        }

        let uid = self.generate_session_uid();
        let ctx = Arc::new(Mutex::new(SessionContext::new(uid.clone())));
        self.sessions.insert(uid, ctx.clone());
        (ctx, true)
    }

    /// Drop sessions idle for longer than `max_idle`. Sessions a handler has
    /// looked up (an outstanding `Arc`) or is busy with are kept. Returns how
    /// many were removed.
    pub fn sweep_idle_sessions(&self, max_idle: chrono::Duration) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, ctx| {
            // Lookups clone under the same shard lock, so this count is stable here
            if Arc::strong_count(ctx) > 1 {
                return true;
            }
            match ctx.try_lock() {
                Ok(ctx) => now - ctx.last_active <= max_idle,
                Err(_) => true,
            }
        });
        before.saturating_sub(self.sessions.len())
    }
}
