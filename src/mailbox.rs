//! Sends that never block.
//!
//! A bounded channel makes a sender wait while the queue is full. When the
//! sender must not wait, `try_send` either enqueues or hands the message
//! back, and we drop it on the floor.

use crossbeam::channel::{Receiver, Sender, TrySendError};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Queue was full; the message is lost.
    Dropped(String),
    /// Nobody is listening any more.
    Closed(String),
}

pub fn offer(tx: &Sender<String>, message: impl Into<String>) -> Delivery {
    match tx.try_send(message.into()) {
        Ok(()) => Delivery::Sent,
        Err(TrySendError::Full(message)) => {
            debug!(%message, "queue full, dropping message");
            Delivery::Dropped(message)
        }
        Err(TrySendError::Disconnected(message)) => Delivery::Closed(message),
    }
}

/// Offers every message in order and returns the ones that did not make it.
pub fn offer_all<I, S>(tx: &Sender<String>, messages: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    messages
        .into_iter()
        .filter_map(|message| match offer(tx, message) {
            Delivery::Sent => None,
            Delivery::Dropped(message) | Delivery::Closed(message) => Some(message),
        })
        .collect()
}

/// Prints every message until all senders are gone. Returns how many it printed.
pub fn spawn_printer(rx: Receiver<String>) -> JoinHandle<usize> {
    thread::spawn(move || {
        let mut printed = 0;
        for message in rx.iter() {
            println!("{message}");
            printed += 1;
        }
        warn!(printed = printed, "message channel closed");
        printed
    })
}
