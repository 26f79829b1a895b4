//! Lesson 3: Threads and Channels
//! Spawning, waiting, bounded queues, drop-on-full sends and select!
//!
//! Run with: cargo run --bin lesson_03_threads
//!
//! Set RAMP_UP_CONFIG to a TOML file to change the pipeline numbers, e.g.
//!
//! ```toml
//! [pipeline]
//! max_emojis = 500
//! timeout_ms = 2000
//! ```

use crossbeam::channel::bounded;
use ramp_up::config::LessonSettings;
use ramp_up::console::{key_points, section};
use ramp_up::logger::init_logger;
use ramp_up::mailbox;
use ramp_up::pipeline::{run_pipeline, StdoutSink};
use std::process;
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

// ============================================================================
// Spawning without waiting
// ============================================================================

fn print_foo() {
    println!("foo");
}

fn fire_and_forget() {
    section("Fire and forget");

    // Nobody joins these handles. If main finishes first they never print.
    thread::spawn(print_foo);
    thread::spawn(|| {
        println!("I'm concurrent! but might not happen, because nothing waits on me :(");
    });
}

// ============================================================================
// Waiting on a channel
// ============================================================================

fn wait_on_channel() {
    section("Waiting on a channel");

    // Room for one value; a second send would block until the first is taken.
    let (done_tx, done_rx) = bounded::<bool>(1);
    thread::spawn(move || {
        println!("I'm concurrent, and someone will wait on me :D");
        let _ = done_tx.send(true);
    });

    // recv() blocks until a value arrives or every sender is gone.
    if let Ok(true) = done_rx.recv() {
        println!("Finished waiting for that thread");
    }
}

// ============================================================================
// Sends that drop instead of block
// ============================================================================

fn drop_when_full(capacity: usize) {
    section("Drop when full");

    let (tx, rx) = bounded::<String>(capacity);
    let words = ["foo", "bar", "bazz", "wham", "whack", "bang", "pop", "zow"];

    // Offer everything before the printer starts so the drops are visible.
    for word in mailbox::offer_all(&tx, words) {
        println!("message channel full, dropping message: {word}");
    }

    let printer = mailbox::spawn_printer(rx);
    // Dropping the last sender is how the printer learns to stop.
    drop(tx);
    match printer.join() {
        Ok(printed) => println!("printer saw {printed} messages"),
        Err(_) => error!("printer thread panicked"),
    }
}

// ============================================================================
// Fan-out / fan-in with a deadline
// ============================================================================

fn stock_emojis(settings: &LessonSettings) {
    section("Stock emojis");

    // Two spammers feed one bounded queue; one worker per tag drains it.
    // The driver select!s over "a worker finished" and "the ticker fired".
    // The ticker stops when its receiver is dropped at the end of the run.
    match run_pipeline(&settings.pipeline, Arc::new(StdoutSink)) {
        Ok(report) => {
            println!("\n\n{}", report.exit_message());
            for (symbol, count) in &report.tallies {
                println!("  {symbol}: {count}");
            }
            info!(elapsed_ms = report.elapsed.as_millis() as u64, "stock emojis finished");
        }
        Err(err) => {
            error!(%err, "stock emoji pipeline failed");
            process::exit(1);
        }
    }
}

fn main() {
    init_logger(false);

    let settings = LessonSettings::from_env().unwrap_or_else(|err| {
        error!(%err, "could not load lesson settings");
        process::exit(1);
    });

    fire_and_forget();
    wait_on_channel();
    drop_when_full(settings.mailbox.capacity);
    stock_emojis(&settings);

    key_points(&[
        "thread::spawn returns a JoinHandle; unjoined threads die with main",
        "Bounded channels give back-pressure: send blocks while full",
        "try_send never blocks; a full queue hands the message back",
        "select! waits on several channel operations and runs the first ready one",
        "Dropping every sender closes the channel for receivers",
    ]);
}
