//! Run tokens for discarding superseded simulations.
//!
//! A consumer that replays traces over time (animating a diagram while the
//! user keeps typing) takes a token per run and checks it before every
//! externally visible effect. Starting a newer run invalidates older tokens.
//! The simulator itself never cancels anything.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::core::{Context, State, Step, Trace};

/// Identifies one run handed out by a [`RunCounter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunToken(u64);

impl RunToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic source of run tokens. Shareable across threads.
#[derive(Debug, Default)]
pub struct RunCounter {
    current: AtomicU64,
}

impl RunCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, superseding every earlier token.
    pub fn begin(&self) -> RunToken {
        RunToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` belongs to the most recent run.
    pub fn is_current(&self, token: RunToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }

    /// Replay `trace` for as long as `token` stays current.
    pub fn playback<'a, S: State, C: Context>(
        &'a self,
        token: RunToken,
        trace: &'a Trace<S, C>,
    ) -> Playback<'a, S, C> {
        Playback {
            steps: trace.iter(),
            counter: self,
            token,
            superseded: false,
        }
    }
}

/// Iterator over a trace that stops once its run is superseded.
pub struct Playback<'a, S: State, C: Context> {
    steps: std::slice::Iter<'a, Step<S, C>>,
    counter: &'a RunCounter,
    token: RunToken,
    superseded: bool,
}

impl<S: State, C: Context> Playback<'_, S, C> {
    /// Whether playback ended because a newer run started.
    pub fn is_superseded(&self) -> bool {
        self.superseded
    }
}

impl<'a, S: State, C: Context> Iterator for Playback<'a, S, C> {
    type Item = &'a Step<S, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.superseded {
            return None;
        }
        if !self.counter.is_current(self.token) {
            debug!(token = self.token.value(), "Playback superseded");
            self.superseded = true;
            return None;
        }
        self.steps.next()
    }
}
