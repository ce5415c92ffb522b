use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::AppError;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    /// SIGINT delivered from outside the terminal.
    Interrupt,
}

/// Where the main loop reads its input from.
pub trait EventSource {
    /// Waits up to `timeout` for one event. `Ok(None)` means nothing arrived.
    fn next_within(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Option<Event>, AppError>>;
}

/// SIGINT future whose OS handler is already installed when this returns.
///
/// `tokio::signal::ctrl_c` only registers on first poll, so it is polled once
/// here. Must be called inside a runtime with the signal driver enabled.
pub fn interrupt_signal() -> LocalBoxFuture<'static, io::Result<()>> {
    let mut interrupt = tokio::signal::ctrl_c().boxed_local();
    match interrupt.as_mut().now_or_never() {
        None => interrupt,
        Some(result) => futures::future::ready(result).boxed_local(),
    }
}

/// Bounded-wait reader over the terminal's input stream. Runs on the caller's
/// task; nothing is spawned.
pub struct EventHandler {
    reader: EventStream,
    interrupt: LocalBoxFuture<'static, io::Result<()>>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            reader: EventStream::new(),
            interrupt: interrupt_signal(),
        }
    }
}

impl EventSource for EventHandler {
    async fn next_within(&mut self, timeout: Duration) -> Result<Option<Event>, AppError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            tokio::select! {
                maybe_event = self.reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Some(Event::Key(key))),
                        Some(Ok(CrosstermEvent::Resize(_, _))) => return Ok(Some(Event::Resize)),
                        Some(Ok(_)) => continue,
                        Some(Err(err)) => return Err(err.into()),
                        None => {
                            return Err(AppError::Io(io::Error::new(
                                io::ErrorKind::UnexpectedEof,
                                "terminal input stream closed",
                            )));
                        }
                    }
                }
                result = &mut self.interrupt => {
                    result?;
                    return Ok(Some(Event::Interrupt));
                }
                _ = tokio::time::sleep_until(deadline) => return Ok(None),
            }
        }
    }
}
