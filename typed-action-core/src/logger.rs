//! Action logging with tag filtering and an in-memory history
//!
//! Tags are matched against glob patterns, which pairs well with
//! slash-namespaced tags such as `todo/add` or `todo/toggle`.
//!
//! # Example
//!
//! ```
//! use typed_action_core::logger::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};
//! use typed_action_core::{action, Middleware};
//!
//! let config = ActionLogConfig::new(50, ActionLoggerConfig::new(Some("todo/*"), None));
//! let mut middleware = ActionLoggerMiddleware::with_log(config);
//!
//! let add = action("todo/add").create();
//! middleware.before(&add);
//! middleware.after(&add, true);
//!
//! let log = middleware.log().unwrap();
//! assert_eq!(log.recent(1).next().unwrap().summary, "todo/add({})");
//! ```

use crate::action::ActionSummary;
use crate::store::Middleware;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Include/exclude filter over action tags
///
/// Patterns support `*` (any run of characters) and `?` (one character).
/// An empty include list accepts every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLoggerConfig {
    /// If non-empty, only tags matching one of these are logged
    pub include_patterns: Vec<String>,
    /// Tags matching any of these are dropped, even if included
    pub exclude_patterns: Vec<String>,
}

impl ActionLoggerConfig {
    /// Build a filter from comma-separated pattern lists
    ///
    /// ```
    /// use typed_action_core::logger::ActionLoggerConfig;
    ///
    /// let config = ActionLoggerConfig::new(Some("todo/*, user/login"), Some("*/tick"));
    /// assert!(config.should_log("todo/add"));
    /// assert!(config.should_log("user/login"));
    /// assert!(!config.should_log("todo/tick"));
    /// assert!(!config.should_log("user/logout"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include_patterns: include.map(split_patterns).unwrap_or_default(),
            exclude_patterns: exclude.map(split_patterns).unwrap_or_default(),
        }
    }

    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// Whether an action with this tag passes the filter
    pub fn should_log(&self, tag: &str) -> bool {
        let included = self.include_patterns.is_empty()
            || self.include_patterns.iter().any(|p| glob_match(p, tag));

        included && !self.exclude_patterns.iter().any(|p| glob_match(p, tag))
    }
}

fn split_patterns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// One recorded action
#[derive(Debug, Clone)]
pub struct ActionLogEntry {
    /// The action tag
    pub name: &'static str,
    /// `ActionSummary::summary()` at the time of dispatch
    pub summary: String,
    pub timestamp: Instant,
    /// Monotonic position in the log, starting at 0
    pub sequence: u64,
    /// Filled in once the reducer has run
    pub state_changed: Option<bool>,
}

impl ActionLogEntry {
    pub fn new(name: &'static str, summary: String, sequence: u64) -> Self {
        Self {
            name,
            summary,
            timestamp: Instant::now(),
            sequence,
            state_changed: None,
        }
    }

    /// Time since this entry was recorded
    pub fn elapsed(&self) -> Duration {
        self.timestamp.elapsed()
    }
}

/// Capacity and filter for an [`ActionLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLogConfig {
    /// Maximum number of entries kept
    pub capacity: usize,
    pub filter: ActionLoggerConfig,
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            filter: ActionLoggerConfig::default(),
        }
    }
}

impl ActionLogConfig {
    pub fn new(capacity: usize, filter: ActionLoggerConfig) -> Self {
        Self { capacity, filter }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }
}

/// Bounded history of dispatched actions, oldest evicted first
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    config: ActionLogConfig,
    next_sequence: u64,
}

impl ActionLog {
    pub fn new(config: ActionLogConfig) -> Self {
        Self {
            entries: VecDeque::with_capacity(config.capacity),
            config,
            next_sequence: 0,
        }
    }

    /// Record an action if its tag passes the filter
    ///
    /// Returns the new entry, or `None` if the action was filtered out.
    pub fn record<A: ActionSummary>(&mut self, action: &A) -> Option<&ActionLogEntry> {
        let name = action.name();
        if self.config.capacity == 0 || !self.config.filter.should_log(name) {
            return None;
        }

        let entry = ActionLogEntry::new(name, action.summary(), self.next_sequence);
        self.next_sequence += 1;

        while self.entries.len() >= self.config.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.entries.back()
    }

    /// Set `state_changed` on the newest entry
    pub fn mark_last(&mut self, state_changed: bool) {
        if let Some(entry) = self.entries.back_mut() {
            entry.state_changed = Some(state_changed);
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// The newest `count` entries, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn config(&self) -> &ActionLogConfig {
        &self.config
    }
}

/// Middleware that traces accepted actions and optionally keeps an [`ActionLog`]
///
/// Each accepted dispatch emits two `debug` events: `dispatching` with the
/// `action` tag before the reducer runs, and `dispatched` with `action` and
/// `state_changed` after it.
#[derive(Debug, Clone)]
pub struct ActionLoggerMiddleware {
    filter: ActionLoggerConfig,
    log: Option<ActionLog>,
    // Set in `before` for the dispatch in flight
    accepted: bool,
    recorded: bool,
    active: bool,
}

impl Default for ActionLoggerMiddleware {
    fn default() -> Self {
        Self::new(ActionLoggerConfig::default())
    }
}

impl ActionLoggerMiddleware {
    /// Trace only, no history
    pub fn new(filter: ActionLoggerConfig) -> Self {
        Self {
            filter,
            log: None,
            accepted: false,
            recorded: false,
            active: true,
        }
    }

    /// Trace and keep a history
    pub fn with_log(config: ActionLogConfig) -> Self {
        Self {
            filter: config.filter.clone(),
            log: Some(ActionLog::new(config)),
            accepted: false,
            recorded: false,
            active: true,
        }
    }

    /// Enable or disable the middleware; inactive middleware does nothing
    ///
    /// ```
    /// use typed_action_core::logger::ActionLoggerMiddleware;
    ///
    /// let verbose = false;
    /// let middleware = ActionLoggerMiddleware::default().active(verbose);
    /// assert!(!middleware.is_active());
    /// ```
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn log(&self) -> Option<&ActionLog> {
        self.log.as_ref()
    }

    pub fn log_mut(&mut self) -> Option<&mut ActionLog> {
        self.log.as_mut()
    }

    pub fn filter(&self) -> &ActionLoggerConfig {
        &self.filter
    }
}

impl<A: ActionSummary> Middleware<A> for ActionLoggerMiddleware {
    fn before(&mut self, action: &A) {
        if !self.active {
            return;
        }

        let name = action.name();
        self.accepted = self.filter.should_log(name);
        if self.accepted {
            tracing::debug!(action = %name, "dispatching");
        }

        self.recorded = match self.log.as_mut() {
            Some(log) => log.record(action).is_some(),
            None => false,
        };
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if !self.active {
            return;
        }
        if self.accepted {
            tracing::debug!(action = %action.name(), state_changed, "dispatched");
        }
        if self.recorded {
            if let Some(log) = self.log.as_mut() {
                log.mark_last(state_changed);
            }
        }
    }
}

/// Glob matching with `*` (zero or more characters) and `?` (exactly one)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it was tried at
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, from)) => {
                    p = star + 1;
                    t = from + 1;
                    backtrack = Some((star, from + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Middleware;
    use crate::{action, action_with_payload, payload};

    #[test]
    fn test_glob_match_exact() {
        assert!(glob_match("todo/add", "todo/add"));
        assert!(!glob_match("todo/add", "todo/remove"));
        assert!(!glob_match("todo/add", "todo/add_all"));
    }

    #[test]
    fn test_glob_match_star() {
        assert!(glob_match("todo/*", "todo/add"));
        assert!(glob_match("todo/*", "todo/"));
        assert!(!glob_match("todo/*", "user/todo/add"));
        assert!(glob_match("*/add", "todo/add"));
        assert!(glob_match("*load*", "user/load_started"));
        assert!(glob_match("*", ""));
    }

    #[test]
    fn test_glob_match_question() {
        assert!(glob_match("step?", "step1"));
        assert!(!glob_match("step?", "step"));
        assert!(!glob_match("step?", "step12"));
    }

    #[test]
    fn test_glob_match_backtracks() {
        assert!(glob_match("*a*b", "xaxab"));
        assert!(glob_match("user/*/done", "user/fetch/retry/done"));
        assert!(!glob_match("user/*/done", "user/fetch/failed"));
    }

    #[test]
    fn test_config_default_logs_everything() {
        let config = ActionLoggerConfig::default();
        assert!(config.should_log("anything"));
        assert!(config.should_log(""));
    }

    #[test]
    fn test_config_include_and_exclude() {
        let config = ActionLoggerConfig::new(Some("user/*"), Some("user/*_failed"));
        assert!(config.should_log("user/login"));
        assert!(!config.should_log("user/login_failed"));
        assert!(!config.should_log("todo/add"));
    }

    #[test]
    fn test_config_ignores_blank_patterns() {
        let config = ActionLoggerConfig::new(Some(" , "), Some(""));
        assert!(config.include_patterns.is_empty());
        assert!(config.exclude_patterns.is_empty());
    }

    #[test]
    fn test_log_records_summary() {
        let select = action_with_payload("list/select", payload::<usize>());
        let mut log = ActionLog::default();

        log.record(&select.create(2));

        let entry = log.entries().next().unwrap();
        assert_eq!(entry.name, "list/select");
        assert_eq!(entry.summary, "list/select(2)");
        assert_eq!(entry.sequence, 0);
        assert_eq!(entry.state_changed, None);
    }

    #[test]
    fn test_log_filtering() {
        let config = ActionLogConfig::new(10, ActionLoggerConfig::new(None, Some("clock/*")));
        let mut log = ActionLog::new(config);

        assert!(log.record(&action("clock/tick").create()).is_none());
        assert!(log.record(&action("todo/add").create()).is_some());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_log_capacity() {
        let mut log = ActionLog::new(ActionLogConfig::with_capacity(3));
        let add = action("todo/add");

        for _ in 0..4 {
            log.record(&add.create());
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().next().unwrap().sequence, 1);

        let recent: Vec<_> = log.recent(2).map(|e| e.sequence).collect();
        assert_eq!(recent, vec![3, 2]);
    }

    #[test]
    fn test_log_zero_capacity() {
        let mut log = ActionLog::new(ActionLogConfig::with_capacity(0));
        assert!(log.record(&action("todo/add").create()).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_middleware_filtered_action_keeps_previous_state_changed() {
        let config = ActionLogConfig::new(10, ActionLoggerConfig::new(None, Some("clock/*")));
        let mut middleware = ActionLoggerMiddleware::with_log(config);

        let add = action("todo/add").create();
        middleware.before(&add);
        middleware.after(&add, true);

        let tick = action("clock/tick").create();
        middleware.before(&tick);
        middleware.after(&tick, false);

        let log = middleware.log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().next().unwrap().state_changed, Some(true));
    }

    #[test]
    fn test_inactive_middleware_records_nothing() {
        let mut middleware =
            ActionLoggerMiddleware::with_log(ActionLogConfig::default()).active(false);

        let add = action("todo/add").create();
        middleware.before(&add);
        middleware.after(&add, true);

        assert!(middleware.log().unwrap().is_empty());
    }

    mod events {
        use super::*;
        use std::fmt;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        type Fields = Vec<(String, String)>;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<Fields>>>);

        struct FieldCollector(Fields);

        impl Visit for FieldCollector {
            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                self.0.push((field.name().to_string(), format!("{value:?}")));
            }
        }

        impl<S: tracing::Subscriber> Layer<S> for Captured {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut fields = FieldCollector(Vec::new());
                event.record(&mut fields);
                self.0.lock().unwrap().push(fields.0);
            }
        }

        fn capture(f: impl FnOnce()) -> Vec<Fields> {
            let captured = Captured::default();
            let subscriber = tracing_subscriber::registry().with(captured.clone());
            tracing::subscriber::with_default(subscriber, f);
            let events = captured.0.lock().unwrap().clone();
            events
        }

        fn field<'a>(event: &'a Fields, name: &str) -> Option<&'a str> {
            event
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }

        #[test]
        fn test_accepted_action_emits_structured_events() {
            let events = capture(|| {
                let mut middleware = ActionLoggerMiddleware::new(ActionLoggerConfig::new(
                    None,
                    Some("clock/*"),
                ));
                let add = action("todo/add").create();
                middleware.before(&add);
                middleware.after(&add, true);
            });

            assert_eq!(events.len(), 2);
            assert_eq!(field(&events[0], "message"), Some("dispatching"));
            assert_eq!(field(&events[0], "action"), Some("todo/add"));
            assert_eq!(field(&events[1], "message"), Some("dispatched"));
            assert_eq!(field(&events[1], "action"), Some("todo/add"));
            assert_eq!(field(&events[1], "state_changed"), Some("true"));
        }

        #[test]
        fn test_filtered_action_emits_nothing() {
            let events = capture(|| {
                let mut middleware = ActionLoggerMiddleware::new(ActionLoggerConfig::new(
                    None,
                    Some("clock/*"),
                ));
                let tick = action("clock/tick").create();
                middleware.before(&tick);
                middleware.after(&tick, false);
            });

            assert!(events.is_empty());
        }

        #[test]
        fn test_inactive_middleware_emits_nothing() {
            let events = capture(|| {
                let mut middleware = ActionLoggerMiddleware::default().active(false);
                let add = action("todo/add").create();
                middleware.before(&add);
                middleware.after(&add, true);
            });

            assert!(events.is_empty());
        }
    }
}
