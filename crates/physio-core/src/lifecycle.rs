//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Where a streamed response is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Nothing written yet.
    Start,
    /// Shell flushed, no section yet.
    ShellSent,
    /// The named section was the last one written.
    SectionSent(String),
    /// Body closed.
    Completion,
}

/// Timing of one written section, relative to the request start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTiming {
    pub name: String,
    /// Request start to the section being handed to the sink.
    pub sent: Duration,
    /// Time spent writing the section.
    pub duration: Duration,
}

/// Clock for one request.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    shell_sent: Option<Duration>,
    completed: Option<Duration>,
    sections: Vec<SectionTiming>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            shell_sent: None,
            completed: None,
            sections: Vec::new(),
        }
    }

    pub fn mark_shell_sent(&mut self) {
        self.shell_sent = Some(self.start.elapsed());
    }

    /// Record a section whose write began at `started`.
    pub fn record_section(&mut self, name: &str, started: Instant) {
        let now = Instant::now();
        self.sections.push(SectionTiming {
            name: name.to_string(),
            sent: now.duration_since(self.start),
            duration: now.duration_since(started),
        });
    }

    pub fn mark_complete(&mut self) {
        self.completed = Some(self.start.elapsed());
    }

    /// Time to first byte of the document.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.shell_sent
    }

    /// Request start to body close.
    pub fn total(&self) -> Option<Duration> {
        self.completed
    }

    pub fn section_timing(&self, name: &str) -> Option<&SectionTiming> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[SectionTiming] {
        &self.sections
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
