//! Per-visit analytics, owned by the chat surface. The responder never
//! reads or writes this; the caller classifies each utterance and records
//! the result here.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Intent;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub session_id: String,
    pub started_at: DateTime<Local>,
    pub messages: u32,
    pub fallbacks: u32,
    pub intents_seen: BTreeSet<Intent>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng(rng: &mut impl Rng) -> Self {
        let started_at = Local::now();
        let session_id = format!(
            "session_{}_{:08x}",
            started_at.timestamp_millis(),
            rng.gen::<u32>()
        );
        Self {
            session_id,
            started_at,
            messages: 0,
            fallbacks: 0,
            intents_seen: BTreeSet::new(),
        }
    }

    /// Books one submitted message. `None` means the fallback pool answered.
    pub fn record(&mut self, intent: Option<Intent>) {
        self.messages += 1;
        match intent {
            Some(intent) => {
                self.intents_seen.insert(intent);
            }
            None => self.fallbacks += 1,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let ended_at = Local::now();
        SessionSummary {
            session_id: self.session_id.clone(),
            started_at: self.started_at,
            ended_at,
            duration_secs: (ended_at - self.started_at).num_seconds(),
            messages: self.messages,
            fallbacks: self.fallbacks,
            intents_seen: self.intents_seen.iter().copied().collect(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot written to the sessions dir when the chat ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub duration_secs: i64,
    pub messages: u32,
    pub fallbacks: u32,
    pub intents_seen: Vec<Intent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_separates_matches_from_fallbacks() {
        let mut session = SessionState::new();
        session.record(Some(Intent::Greeting));
        session.record(Some(Intent::Greeting));
        session.record(None);
        assert_eq!(session.messages, 3);
        assert_eq!(session.fallbacks, 1);
        assert_eq!(session.intents_seen.len(), 1);
    }

    #[test]
    fn summary_carries_all_counters() {
        let mut session = SessionState::new();
        session.record(Some(Intent::Contact));
        session.record(None);
        let summary = session.summary();
        assert_eq!(summary.session_id, session.session_id);
        assert_eq!(summary.messages, 2);
        assert_eq!(summary.fallbacks, 1);
        assert_eq!(summary.intents_seen, vec![Intent::Contact]);
        assert!(summary.duration_secs >= 0);
    }
}
