//! Lesson 2: Functions, Closures and Cleanup
//! Free functions, closures, copying vs mutating methods, and Drop guards
//!
//! Run with: cargo run --bin lesson_02_funcs
//!
//! The last section connects to a placeholder database. Nothing lives at that
//! path, so the lesson logs the failure and exits with status 1.

use ramp_up::cleanup::db::{self, DbSettings};
use ramp_up::cleanup::defer;
use ramp_up::config::LessonSettings;
use ramp_up::console::{key_points, section};
use ramp_up::logger::init_logger;
use ramp_up::receivers::{make_greeter, Person, User};
use std::process;
use tracing::{error, info};

// ============================================================================
// 1. Functions
// ============================================================================

/// `pub fn` items at module level can be imported elsewhere; `main` in a
/// `src/bin/*.rs` file is the entry point of that binary.
pub fn shout(word: &str) -> String {
    format!("{}!", word.to_uppercase())
}

fn functions() {
    section("1. Functions");
    println!("{}", shout("whizzbang"));
}

// ============================================================================
// 2-4. Closures
// ============================================================================

fn closures() {
    section("2. Closures");

    let mut whizz_bang = String::from("whizzbang!");

    // Borrows whizz_bang; no mutation allowed while the closure is alive.
    let foo = |bar: &str| -> String { format!("{bar}bazz{whizz_bang}") };
    println!("{}", foo("bang"));

    // After the last use of `foo` the borrow ends and we may mutate again.
    whizz_bang.push_str(" more stuff ");

    // `move` takes a copy of what it captures, detached from later changes.
    let greet = make_greeter(whizz_bang.clone());
    whizz_bang.clear();
    println!("{}", greet("bang"));

    section("3. Immediately invoked closures");
    (|message: &str| println!("{message}"))("ran right away");

    let doubled = (|x: i32| x * 2)(21);
    println!("doubled = {doubled}");
}

// ============================================================================
// 5-6. Copying vs mutating methods
// ============================================================================

fn receivers() {
    section("5. Methods that return a new value");
    let first_user = User::default();
    let first_user = first_user.with_name("alice");
    println!("{}", first_user.first_name);

    section("6. Methods that mutate in place");
    let mut first_person = Person::default();
    first_person.rename("jordan");
    println!("{}", first_person.first_name);
}

// ============================================================================
// 7. Deferred cleanup
// ============================================================================

fn deferred_cleanup(settings: &DbSettings) {
    section("7. Deferred cleanup");

    // Guards run when this function returns, last declared first.
    let _printed_second = defer(|| println!("I print after deferred_cleanup returns (second)."));
    let _printed_first = defer(|| println!("I print after deferred_cleanup returns (first)."));

    let conn = match db::connect(settings) {
        Ok(conn) => conn,
        Err(err) => {
            error!(%err, path = %settings.path.display(), "Killing program, couldn't reach the db for a connection.");
            // exit() skips every pending Drop, including the guards above.
            process::exit(1);
        }
    };
    info!("connected");

    // Dropping a Connection closes it; the guard just makes the close visible.
    let _close = defer(move || match db::close(conn) {
        Ok(()) => info!("connection closed"),
        Err(err) => error!(%err, "close failed"),
    });

    println!("doing work with the database");
}

fn main() {
    init_logger(false);

    let settings = LessonSettings::from_env().unwrap_or_else(|err| {
        error!(%err, "Killing program, check the settings file for syntax errors.");
        process::exit(1);
    });

    functions();
    closures();
    receivers();

    key_points(&[
        "Closures borrow by default; `move` makes them own what they capture",
        "self consumes, &self reads, &mut self mutates in place",
        "Drop guards run at scope exit in reverse order",
        "process::exit skips pending Drop guards",
    ]);

    deferred_cleanup(&settings.database);
}
