//! Optimistic proxy mirror of a remotely persisted value.
//!
//! A sub-widget edits the mirror as if it were local state; the edit is
//! visible immediately and committed to the gateway once the debounce
//! window elapses. The authoritative snapshot always wins: when the
//! external value changes, the mirror is replaced wholesale and any
//! uncommitted local edit is dropped.
//!
//! ```text
//!            update(f)               take_due(now)
//!   Synced ────────────▶ Pending ─────────────────▶ Synced (known = committed)
//!      ▲                    │
//!      └────── sync(external != known) / reset ─────┘
//! ```
//!
//! Known race: an edit issued just before an unrelated external change is
//! discarded by that change. There is no locking and no retry; if a commit
//! never comes back the mirror stays diverged.

use std::time::{Duration, Instant};

/// Default debounce window between the last edit and its commit.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit<V> {
    value: V,
    due: Instant,
}

/// Mirror state: what the widget shows, what the server last told us, and
/// the commit waiting for its debounce window.
#[derive(Debug, Clone)]
pub struct ProxyState<V> {
    current: V,
    known: V,
    pending: Option<PendingCommit<V>>,
    debounce: Duration,
}

impl<V: Clone + PartialEq> ProxyState<V> {
    /// Start mirroring `value`.
    pub fn new(value: V, debounce: Duration) -> Self {
        Self {
            current: value.clone(),
            known: value,
            pending: None,
            debounce,
        }
    }

    /// The mirrored value, including uncommitted local edits.
    pub fn get(&self) -> &V {
        &self.current
    }

    /// Apply a local edit.
    ///
    /// The mirror changes immediately. The commit is (re)scheduled at
    /// `now + debounce`, so a burst of edits produces a single commit
    /// carrying the latest value.
    pub fn update<F>(&mut self, f: F, now: Instant)
    where
        F: FnOnce(&V) -> V,
    {
        self.current = f(&self.current);
        self.pending = Some(PendingCommit {
            value: self.current.clone(),
            due: now + self.debounce,
        });
    }

    /// Take the pending commit if its debounce window has elapsed.
    ///
    /// The returned value becomes the last known value, so the echo of the
    /// commit does not reset the mirror.
    pub fn take_due(&mut self, now: Instant) -> Option<V> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.take_pending(),
            _ => None,
        }
    }

    /// Take the pending commit regardless of its due time.
    pub fn take_pending(&mut self) -> Option<V> {
        let pending = self.pending.take()?;
        self.known = pending.value.clone();
        Some(pending.value)
    }

    /// Reconcile with an authoritative value.
    ///
    /// When `external` differs from the last known value, the mirror is
    /// replaced by it and the pending commit is dropped. Returns whether
    /// that reset happened.
    pub fn sync(&mut self, external: V) -> bool {
        if external == self.known {
            return false;
        }
        self.reset(external);
        true
    }

    /// Replace the mirror with `external` and drop the pending commit,
    /// whether or not the value changed.
    pub fn reset(&mut self, external: V) {
        self.current = external.clone();
        self.known = external;
        self.pending = None;
    }

    /// The last value confirmed by the server or committed by this mirror.
    pub fn known(&self) -> &V {
        &self.known
    }

    /// Whether the mirror shows something the server has not confirmed.
    pub fn is_diverged(&self) -> bool {
        self.current != self.known
    }

    /// Whether a commit is waiting for its debounce window.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending commit becomes due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}
