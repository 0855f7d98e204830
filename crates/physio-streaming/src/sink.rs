//! Streaming sink that enforces the shell-first pattern.

use std::fmt::Display;
use std::time::Instant;

use futures::{Sink, SinkExt};
use physio_core::{LifecyclePhase, TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent, sections may follow.
    ShellSent,
    Completed,
}

/// Streaming sink that writes the shell first, then named sections.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.write(html).await?;
        self.timing.mark_shell_sent();
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => return Err(WorkloadError::ShellNotSent),
            SinkState::Completed => {
                return Err(WorkloadError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        let started = Instant::now();
        self.write(html).await?;
        self.timing.record_section(name, started);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Flush and close the underlying sink.
    pub async fn complete(&mut self) -> Result<(), WorkloadError> {
        if self.state == SinkState::Completed {
            return Ok(());
        }
        self.inner
            .close()
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark_complete();
        Ok(())
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn collect(rx: mpsc::UnboundedReceiver<Vec<u8>>) -> Vec<String> {
        block_on(rx.map(|chunk| String::from_utf8(chunk).unwrap()).collect())
    }

    #[test]
    fn test_shell_then_sections() {
        let (tx, rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("hero", "<section>hero</section>").await.unwrap();
            sink.send_section("faq", "<section>faq</section>").await.unwrap();
            sink.complete().await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["hero", "faq"]);
        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().section_timing("faq").is_some());
        assert!(sink.timing().total().is_some());
        assert_eq!(
            collect(rx),
            vec!["<html>", "<section>hero</section>", "<section>faq</section>"]
        );
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let result = block_on(sink.send_section("hero", "<section>"));
        assert!(matches!(result, Err(WorkloadError::ShellNotSent)));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_twice_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(sink.send_shell("<html>")).unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
        assert!(matches!(
            block_on(sink.send_shell("<html>")),
            Err(WorkloadError::StreamError(_))
        ));
    }

    #[test]
    fn test_send_after_complete_is_rejected() {
        let (tx, _rx) = mpsc::unbounded();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.complete().await.unwrap();
        });
        assert!(matches!(
            block_on(sink.send_section("late", "x")),
            Err(WorkloadError::StreamError(_))
        ));
    }

    #[test]
    fn test_closed_receiver_surfaces_stream_error() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        drop(rx);
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        assert!(matches!(
            block_on(sink.send_shell("<html>")),
            Err(WorkloadError::StreamError(_))
        ));
    }
}
