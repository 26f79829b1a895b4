//! Stock ticker fan-out/fan-in.
//!
//! Spammers push random ticker symbols onto one bounded queue. One worker per
//! [`StockTag`] drains that shared queue, counts the symbols matching its tag
//! and prints an emoji for each, until it reaches the cap. The driver waits
//! for either every worker to report done or the deadline to fire, then
//! broadcasts a stop and joins every thread.

use crossbeam::channel::{bounded, select, tick, Receiver, Sender};
use rand::seq::SliceRandom;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{PipelineConfig, StockTag};
use crate::error::{LessonError, Result};

/// Where workers put their emojis.
pub trait EmojiSink: Send + Sync {
    fn emit(&self, icon: &str);
}

pub struct StdoutSink;

impl EmojiSink for StdoutSink {
    fn emit(&self, icon: &str) {
        if let Err(err) = write_icon(&mut io::stdout().lock(), icon) {
            debug!(%err, "could not write emoji to stdout");
        }
    }
}

/// Stdout is line-buffered and icons carry no newline, so flush each one.
fn write_icon<W: Write>(out: &mut W, icon: &str) -> io::Result<()> {
    out.write_all(icon.as_bytes())?;
    out.flush()
}

pub struct NullSink;

impl EmojiSink for NullSink {
    fn emit(&self, _icon: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    AllWorkersDone,
    TimedOut,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub shutdown: Shutdown,
    /// `(symbol, matches counted)` in the order the tags were configured.
    pub tallies: Vec<(String, usize)>,
    pub elapsed: Duration,
}

impl PipelineReport {
    pub fn exit_message(&self) -> &'static str {
        match self.shutdown {
            Shutdown::AllWorkersDone => "heard from all the workers",
            Shutdown::TimedOut => "got a timeout message",
        }
    }

    pub fn total(&self) -> usize {
        self.tallies.iter().map(|(_, count)| count).sum()
    }
}

/// Sends random symbols until the queue disconnects or `stop` closes.
///
/// Returns how many symbols were sent.
pub fn spam_symbols(symbols: &[String], stocks: &Sender<String>, stop: &Receiver<()>) -> usize {
    let mut rng = rand::thread_rng();
    let mut sent = 0;

    loop {
        let Some(symbol) = symbols.choose(&mut rng) else {
            return sent;
        };

        // Blocks while the queue is full, unless told to stop.
        select! {
            send(stocks, symbol.clone()) -> res => {
                if res.is_err() {
                    return sent;
                }
                sent += 1;
            }
            recv(stop) -> _ => return sent,
        }
    }
}

/// Counts symbols matching `tag` until `max_emojis` is reached.
///
/// Reports on `done` exactly once, and only when the cap is reached. A stop
/// or a disconnected queue ends the worker without reporting.
pub fn emoji_worker(
    tag: &StockTag,
    stocks: &Receiver<String>,
    done: &Sender<String>,
    stop: &Receiver<()>,
    max_emojis: usize,
    sink: &dyn EmojiSink,
) -> usize {
    let mut count = 0;

    while count < max_emojis {
        select! {
            recv(stocks) -> msg => match msg {
                Ok(symbol) => {
                    if symbol == tag.symbol {
                        count += 1;
                        sink.emit(&tag.icon);
                    }
                }
                Err(_) => {
                    warn!(symbol = %tag.symbol, "stock queue closed before the cap was reached");
                    return count;
                }
            },
            recv(stop) -> _ => return count,
        }
    }

    // The done queue has a slot per worker, so this never blocks.
    if done.send(tag.symbol.clone()).is_err() {
        debug!(symbol = %tag.symbol, "driver left before the done report");
    }
    count
}

fn spawn_named<T, F>(name: String, body: F) -> Result<JoinHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    Ok(thread::Builder::new().name(name).spawn(body)?)
}

fn join_named<T>(handle: JoinHandle<T>) -> Result<T> {
    let name = handle.thread().name().unwrap_or("unnamed").to_string();
    handle.join().map_err(|_| LessonError::WorkerPanicked(name))
}

pub fn run_pipeline(config: &PipelineConfig, sink: Arc<dyn EmojiSink>) -> Result<PipelineReport> {
    config.validate()?;
    let started = Instant::now();
    let workers = config.workers();

    let (stock_tx, stock_rx) = bounded::<String>(config.queue_capacity);
    let (done_tx, done_rx) = bounded::<String>(workers);
    // Never sent on: dropping `stop_tx` wakes every thread at once.
    let (stop_tx, stop_rx) = bounded::<()>(0);
    let deadline = tick(config.timeout());

    let mut worker_handles = Vec::with_capacity(workers);
    for tag in config.tags.iter().cloned() {
        let stocks = stock_rx.clone();
        let done = done_tx.clone();
        let stop = stop_rx.clone();
        let sink = Arc::clone(&sink);
        let max_emojis = config.max_emojis;

        worker_handles.push(spawn_named(format!("worker-{}", tag.symbol), move || {
            emoji_worker(&tag, &stocks, &done, &stop, max_emojis, sink.as_ref())
        })?);
    }
    drop(done_tx);
    drop(stock_rx);

    let mut spammer_handles = Vec::with_capacity(config.spammers);
    for id in 0..config.spammers {
        let symbols = config.symbols.clone();
        let stocks = stock_tx.clone();
        let stop = stop_rx.clone();

        spammer_handles.push(spawn_named(format!("spammer-{id}"), move || {
            spam_symbols(&symbols, &stocks, &stop)
        })?);
    }
    drop(stock_tx);

    info!(
        workers = workers,
        spammers = config.spammers,
        timeout_ms = config.timeout_ms,
        "pipeline running"
    );

    let mut finished = 0;
    let outcome = loop {
        select! {
            recv(deadline) -> _ => break Some(Shutdown::TimedOut),
            recv(done_rx) -> msg => match msg {
                Ok(symbol) => {
                    finished += 1;
                    debug!(%symbol, finished = finished, "worker done");
                    if finished == workers {
                        break Some(Shutdown::AllWorkersDone);
                    }
                }
                Err(_) => break None,
            },
        }
    };

    drop(stop_tx);

    let mut tallies = Vec::with_capacity(workers);
    for (tag, handle) in config.tags.iter().zip(worker_handles) {
        tallies.push((tag.symbol.clone(), join_named(handle)?));
    }
    let mut sent = 0;
    for handle in spammer_handles {
        sent += join_named(handle)?;
    }

    let shutdown = outcome.ok_or(LessonError::ChannelClosed("worker done"))?;
    let report = PipelineReport {
        shutdown,
        tallies,
        elapsed: started.elapsed(),
    };
    info!(
        ?shutdown,
        sent = sent,
        counted = report.total(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "pipeline stopped"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<HashMap<String, usize>>,
    }

    impl RecordingSink {
        fn count(&self, icon: &str) -> usize {
            self.seen.lock().unwrap().get(icon).copied().unwrap_or(0)
        }
    }

    impl EmojiSink for RecordingSink {
        fn emit(&self, icon: &str) {
            *self.seen.lock().unwrap().entry(icon.to_string()).or_insert(0) += 1;
        }
    }

    #[derive(Default)]
    struct FlushCounter {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_each_icon_is_flushed() {
        let mut out = FlushCounter::default();
        write_icon(&mut out, "🍎").unwrap();
        write_icon(&mut out, "📦").unwrap();

        assert_eq!(String::from_utf8(out.bytes).unwrap(), "🍎📦");
        assert_eq!(out.flushes, 2);
    }

    fn small_config(max_emojis: usize, timeout_ms: u64) -> PipelineConfig {
        PipelineConfig {
            max_emojis,
            timeout_ms,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_all_workers_reach_cap() {
        let sink = Arc::new(RecordingSink::default());
        let report = run_pipeline(&small_config(50, 30_000), sink.clone()).unwrap();

        assert_eq!(report.shutdown, Shutdown::AllWorkersDone);
        assert_eq!(report.exit_message(), "heard from all the workers");
        assert_eq!(report.tallies.len(), 4);
        for (_, count) in &report.tallies {
            assert_eq!(*count, 50);
        }
        for icon in ["🍎", "🤓", "🤢", "📦"] {
            assert_eq!(sink.count(icon), 50, "icon {icon}");
        }
        assert_eq!(report.total(), 200);
    }

    #[test]
    fn test_zero_cap_finishes_immediately() {
        let report = run_pipeline(&small_config(0, 30_000), Arc::new(NullSink)).unwrap();

        assert_eq!(report.shutdown, Shutdown::AllWorkersDone);
        assert!(report.tallies.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_unproduced_symbol_times_out() {
        let config = PipelineConfig {
            symbols: vec!["AAPL".to_string()],
            tags: vec![StockTag::new("AAPL", "A"), StockTag::new("TSLA", "T")],
            queue_capacity: 4,
            spammers: 1,
            max_emojis: 10,
            timeout_ms: 200,
        };
        let report = run_pipeline(&config, Arc::new(NullSink)).unwrap();

        assert_eq!(report.shutdown, Shutdown::TimedOut);
        assert_eq!(report.exit_message(), "got a timeout message");
        assert_eq!(report.tallies[0], ("AAPL".to_string(), 10));
        assert_eq!(report.tallies[1], ("TSLA".to_string(), 0));
        assert!(report.elapsed >= Duration::from_millis(200));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig {
            queue_capacity: 0,
            ..PipelineConfig::default()
        };
        let err = run_pipeline(&config, Arc::new(NullSink)).unwrap_err();
        assert!(matches!(err, LessonError::InvalidConfig(_)));
    }

    #[test]
    fn test_worker_stops_at_cap_and_reports_once() {
        let (tx, rx) = bounded(10);
        let (done_tx, done_rx) = bounded(1);
        let (_stop_tx, stop_rx) = bounded::<()>(0);
        for symbol in ["FB", "GOOG", "FB", "FB", "FB"] {
            tx.send(symbol.to_string()).unwrap();
        }

        let sink = RecordingSink::default();
        let tag = StockTag::new("FB", "F");
        let count = emoji_worker(&tag, &rx, &done_tx, &stop_rx, 2, &sink);

        assert_eq!(count, 2);
        assert_eq!(sink.count("F"), 2);
        assert_eq!(done_rx.try_recv().unwrap(), "FB");
        assert!(done_rx.try_recv().is_err());
        // The cap was hit on the third message; the rest stay queued.
        assert_eq!(rx.len(), 2);
    }

    #[test]
    fn test_worker_without_cap_does_not_report() {
        let (tx, rx) = bounded(4);
        let (done_tx, done_rx) = bounded(1);
        let (_stop_tx, stop_rx) = bounded::<()>(0);
        tx.send("AMZN".to_string()).unwrap();
        drop(tx);

        let tag = StockTag::new("AMZN", "P");
        let count = emoji_worker(&tag, &rx, &done_tx, &stop_rx, 5, &NullSink);

        assert_eq!(count, 1);
        assert!(done_rx.try_recv().is_err());
    }

    #[test]
    fn test_spammer_sends_known_symbols_until_stopped() {
        let symbols: Vec<String> = vec!["AAPL".into(), "GOOG".into()];
        let (tx, rx) = bounded(2);
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let handle = thread::spawn(move || spam_symbols(&symbols, &tx, &stop_rx));
        for _ in 0..20 {
            let symbol = rx.recv().unwrap();
            assert!(symbol == "AAPL" || symbol == "GOOG");
        }
        drop(stop_tx);

        let sent = handle.join().unwrap();
        assert!(sent >= 20);
    }

    #[test]
    fn test_spammer_exits_when_queue_disconnects() {
        let symbols: Vec<String> = vec!["FB".into()];
        let (tx, rx) = bounded::<String>(1);
        let (_stop_tx, stop_rx) = bounded::<()>(0);
        drop(rx);

        assert_eq!(spam_symbols(&symbols, &tx, &stop_rx), 0);
    }
}
