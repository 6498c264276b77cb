// Background input listener: key press quits, resize asks for a sync.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::error::Error;

/// What the listener tells the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A key was pressed. Sent at most once, always last.
    Quit,
    /// The terminal now has this many columns and rows.
    Resize(u16, u16),
}

/// Forward terminal events as [`Signal`]s until a key is pressed.
///
/// Returns after sending `Quit`, when the stream ends or errors, or when
/// the receiver is gone. Returning drops `tx`, which the main loop also
/// treats as a request to exit.
pub async fn listen<S>(events: S, tx: UnboundedSender<Signal>)
where
    S: Stream<Item = io::Result<Event>>,
{
    let mut events = std::pin::pin!(events);
    while let Some(event) = events.next().await {
        match event {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                debug!(?key, "key pressed, quitting");
                let _ = tx.send(Signal::Quit);
                return;
            }
            Ok(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
                if tx.send(Signal::Resize(width, height)).is_err() {
                    return;
                }
            }
            Ok(_) => {}
            Err(err) => {
                debug!(%err, "event stream failed");
                return;
            }
        }
    }
}

/// Run [`listen`] over the real terminal on its own thread.
///
/// The thread drives a current-thread tokio runtime; crossterm's
/// `EventStream` needs no reactor of its own.
pub fn spawn(tx: UnboundedSender<Signal>) -> Result<JoinHandle<()>, Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(Error::Runtime)?;
    thread::Builder::new()
        .name("input-listener".into())
        .spawn(move || runtime.block_on(listen(EventStream::new(), tx)))
        .map_err(Error::Runtime)
}
