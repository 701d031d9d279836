//! Typing animation
//!
//! A target string revealed one character at a time. [`Typewriter`] is the
//! pure state machine; [`TypingAnimation`] drives it from a tokio interval
//! and streams [`TypingEvent`]s to the screen that owns the returned
//! [`TypingHandle`]. Dropping the handle stops the timer.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One advance of the typewriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// Text visible after this tick
    pub prefix: String,
    /// True only on the tick that reveals the full target
    pub finished: bool,
}

/// Character-by-character reveal of a fixed target
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: Vec<char>,
    revealed: usize,
    done: bool,
}

impl Typewriter {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            revealed: 0,
            done: false,
        }
    }

    /// Reveal one more character.
    ///
    /// Returns `None` once the full target has been reported, so the
    /// `finished` step is produced exactly once. An empty target finishes
    /// on its first tick.
    pub fn tick(&mut self) -> Option<TypingStep> {
        if self.done {
            return None;
        }
        if self.revealed < self.target.len() {
            self.revealed += 1;
        }
        self.done = self.revealed == self.target.len();
        Some(TypingStep {
            prefix: self.displayed(),
            finished: self.done,
        })
    }

    /// Back to an empty display
    pub fn restart(&mut self) {
        self.revealed = 0;
        self.done = false;
    }

    pub fn displayed(&self) -> String {
        self.target[..self.revealed].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.done
    }

    /// Number of ticks needed to reach completion
    pub fn total_ticks(&self) -> usize {
        self.target.len().max(1)
    }
}

/// Events streamed by a running animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    Prefix(String),
    Complete,
}

/// Timer-driven typewriter
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    target: String,
    delay: Duration,
}

impl TypingAnimation {
    pub fn new(target: impl Into<String>, delay: Duration) -> Self {
        Self {
            target: target.into(),
            delay,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a fresh run. Each call restarts from an empty display.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self) -> TypingHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut typewriter = Typewriter::new(&self.target);
        let delay = self.delay;

        let task = tokio::spawn(async move {
            // First character appears one delay after mount, not immediately
            let mut ticker = interval_at(Instant::now() + delay, delay);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let Some(step) = typewriter.tick() else {
                    break;
                };
                // An empty target only reports completion
                if !step.prefix.is_empty() && tx.send(TypingEvent::Prefix(step.prefix)).is_err() {
                    break;
                }
                if step.finished {
                    let _ = tx.send(TypingEvent::Complete);
                    break;
                }
            }
        });

        tracing::debug!(chars = self.target.chars().count(), ?delay, "typing animation started");

        TypingHandle {
            task: Some(task),
            rx,
        }
    }
}

/// Owner side of a running animation
#[derive(Debug)]
pub struct TypingHandle {
    task: Option<JoinHandle<()>>,
    rx: mpsc::UnboundedReceiver<TypingEvent>,
}

impl TypingHandle {
    /// Next event already delivered, without waiting
    pub fn try_next(&mut self) -> Option<TypingEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event. `None` once the animation has ended or
    /// been cancelled.
    pub async fn next(&mut self) -> Option<TypingEvent> {
        self.rx.recv().await
    }

    /// Stop the timer. Events not yet consumed are discarded.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
