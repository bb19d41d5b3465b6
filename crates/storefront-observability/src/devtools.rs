//! Action history for external store inspection.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Action name recorded for the initial (hydrated) state.
pub const INIT_ACTION: &str = "@@INIT";

/// Default number of actions kept before the oldest are dropped.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// One recorded store action and the state it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Monotonic sequence number, starting at 0 for `@@INIT`.
    pub seq: u64,
    /// Action name (e.g. `cart/add`).
    pub action: String,
    /// State after the action was applied.
    pub state: serde_json::Value,
    /// Time since the recorder was created (microseconds).
    pub elapsed_us: u64,
}

/// An exported action history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Recording format version.
    pub version: u32,
    /// Devtools label of the store that produced it.
    pub name: String,
    /// RFC 3339 export time.
    pub timestamp: String,
    /// Number of actions dropped from the front of the history.
    pub dropped: u64,
    /// Recorded actions, oldest first.
    pub actions: Vec<ActionRecord>,
}

impl Recording {
    /// Current recording format version.
    pub const VERSION: u32 = 1;

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Records store actions for inspection tooling.
///
/// Recording never feeds back into the store; a state that fails to
/// serialize is recorded as `null`.
#[derive(Debug)]
pub struct DevtoolsRecorder {
    name: String,
    max_history: usize,
    actions: VecDeque<ActionRecord>,
    next_seq: u64,
    dropped: u64,
    start_time: std::time::Instant,
}

impl DevtoolsRecorder {
    /// Create a recorder with the given devtools label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_history: DEFAULT_MAX_HISTORY,
            actions: VecDeque::new(),
            next_seq: 0,
            dropped: 0,
            start_time: std::time::Instant::now(),
        }
    }

    /// Bound the history length. A limit of 0 is treated as 1.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history.max(1);
        self.trim();
        self
    }

    /// The devtools label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record an action and the state it produced.
    pub fn record<S: Serialize + ?Sized>(&mut self, action: &str, state: &S) {
        let state = serde_json::to_value(state).unwrap_or_else(|e| {
            tracing::warn!(devtools = %self.name, action, error = %e, "failed to serialize state for devtools");
            serde_json::Value::Null
        });

        self.actions.push_back(ActionRecord {
            seq: self.next_seq,
            action: action.to_string(),
            state,
            elapsed_us: self.start_time.elapsed().as_micros() as u64,
        });
        self.next_seq += 1;
        self.trim();
    }

    /// Number of actions currently held.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Recorded actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> {
        self.actions.iter()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&ActionRecord> {
        self.actions.back()
    }

    /// Export the current history.
    pub fn recording(&self) -> Recording {
        Recording {
            version: Recording::VERSION,
            name: self.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            dropped: self.dropped,
            actions: self.actions.iter().cloned().collect(),
        }
    }

    fn trim(&mut self) {
        while self.actions.len() > self.max_history {
            self.actions.pop_front();
            self.dropped += 1;
        }
    }
}

/// Read-side queries over a recording.
#[derive(Debug)]
pub struct DevtoolsPlayer {
    recording: Recording,
}

impl DevtoolsPlayer {
    /// Load a recording.
    pub fn new(recording: Recording) -> Self {
        Self { recording }
    }

    /// Load from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(Recording::from_json(json)?))
    }

    /// Get the underlying recording.
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Action names in order.
    pub fn actions(&self) -> Vec<&str> {
        self.recording
            .actions
            .iter()
            .map(|a| a.action.as_str())
            .collect()
    }

    /// State right after action `seq`, if it is still in the history.
    pub fn state_at(&self, seq: u64) -> Option<&serde_json::Value> {
        self.recording
            .actions
            .iter()
            .find(|a| a.seq == seq)
            .map(|a| &a.state)
    }

    /// State after the last recorded action.
    pub fn last_state(&self) -> Option<&serde_json::Value> {
        self.recording.actions.last().map(|a| &a.state)
    }
}
