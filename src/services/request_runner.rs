//! Background request runner
//!
//! Runs blocking API calls on worker threads so the UI loop keeps drawing.
//! Completions come back over a channel and are drained on each tick, in
//! arrival order. Requests are never queued, merged or cancelled.

use crate::error::RequestError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Instant;

/// Result of one finished request
#[derive(Debug)]
pub struct Completion<T> {
    /// Short description used in logs, e.g. `refresh words`
    pub label: String,
    pub result: Result<T, RequestError>,
}

/// Runner for requests producing `T`
pub struct RequestRunner<T> {
    sender: Sender<Completion<T>>,
    receiver: Receiver<Completion<T>>,
    /// Requests spawned but not yet drained
    pending: usize,
}

impl<T: Send + 'static> Default for RequestRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> RequestRunner<T> {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Run `work` on a new thread
    pub fn spawn<F>(&mut self, label: impl Into<String>, work: F)
    where
        F: FnOnce() -> Result<T, RequestError> + Send + 'static,
    {
        let label = label.into();
        let tx = self.sender.clone();
        self.pending += 1;
        tracing::debug!(request = %label, pending = self.pending, "request started");

        thread::spawn(move || {
            let started = Instant::now();
            let result = work();
            tracing::debug!(
                request = %label,
                ok = result.is_ok(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request finished"
            );
            let _ = tx.send(Completion { label, result });
        });
    }

    /// Drain every completion that has arrived so far
    pub fn poll(&mut self) -> Vec<Completion<T>> {
        let mut done = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(completion) => {
                    self.pending = self.pending.saturating_sub(1);
                    done.push(completion);
                }
                // The runner holds its own sender, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        done
    }

    /// Block until the next completion or the timeout
    #[cfg(test)]
    pub fn wait(&mut self, timeout: std::time::Duration) -> Option<Completion<T>> {
        let completion = self.receiver.recv_timeout(timeout).ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_completions_are_delivered() {
        let mut runner: RequestRunner<u32> = RequestRunner::new();
        runner.spawn("one", || Ok(1));
        runner.spawn("two", || Err(RequestError::Transport("down".to_string())));
        assert_eq!(runner.pending(), 2);

        let mut results = Vec::new();
        while runner.is_busy() {
            let completion = runner.wait(Duration::from_secs(5)).expect("request hung");
            results.push((completion.label, completion.result));
        }
        results.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(results[0].0, "one");
        assert_eq!(results[0].1, Ok(1));
        assert_eq!(results[1].1, Err(RequestError::Transport("down".to_string())));
    }

    #[test]
    fn test_poll_without_requests_is_empty() {
        let mut runner: RequestRunner<()> = RequestRunner::new();
        assert!(runner.poll().is_empty());
        assert!(!runner.is_busy());
    }

    #[test]
    fn test_poll_drains_finished_requests() {
        let mut runner: RequestRunner<&'static str> = RequestRunner::new();
        runner.spawn("ping", || Ok("pong"));

        let mut drained = Vec::new();
        for _ in 0..500 {
            drained.extend(runner.poll());
            if !drained.is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(drained.len(), 1);
        assert_eq!(runner.pending(), 0);
    }
}
