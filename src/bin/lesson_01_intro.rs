//! Lesson 1: Quick Ramp-Up
//! Printing, variables, collections, control flow, strings and time
//!
//! Run with: cargo run --bin lesson_01_intro

use chrono::Utc;
use crossbeam::channel::bounded;
use ramp_up::clock;
use ramp_up::collections::{self, Account, Student};
use ramp_up::console::{key_points, section};
use ramp_up::logger::init_logger;
use ramp_up::mailbox::{self, Delivery};
use ramp_up::text;
use std::collections::HashMap;
use tracing::{debug, info, warn};

// ============================================================================
// Printing and logging
// ============================================================================

fn printing() {
    section("Printing");

    println!("Hello World!");
    println!("Hello {}", "from println");
    println!("Print anything with {:?}", vec!["foo"]);

    // Logs carry a level; debug and trace are usually off in production.
    info!("a message at info");
    warn!("a message at warn");
    debug!("hidden unless RUST_LOG=debug");
}

// ============================================================================
// Variables
// ============================================================================

fn variables() {
    section("Variables");

    let mut word = "a string";
    println!("word = {word}");
    word = "updated!";
    println!("word = {word}");

    let num = 42; // i32 unless told otherwise
    let num_float = 42.4; // f64
    let (i, j, k) = (1, 2, 3);
    println!("num = {num}, num_float = {num_float}, i/j/k = {i}/{j}/{k}");

    // No implicit zero values: ask for the default explicitly.
    let empty_int = i32::default();
    let empty_string = String::default();
    let empty_list: Vec<String> = Vec::new();
    let fixed: [String; 4] = Default::default();
    println!(
        "defaults: {empty_int} {:?} {:?} {:?}",
        empty_string, empty_list, fixed
    );

    // A value that may be absent is an Option, not a null.
    let maybe_name: Option<&str> = None;
    println!("maybe_name = {:?}", maybe_name);
}

// ============================================================================
// Collections
// ============================================================================

fn collections_tour() {
    section("Vectors and arrays");

    let words = vec!["foo", "bar", "bazz"];
    if !words.is_empty() {
        println!("first word: {}", words[0]);
    }
    // Indexing past the end panics; get() returns None instead.
    println!("words.get(10) = {:?}", words.get(10));

    let mut letters = vec!["a", "b", "c"];
    let mut more_letters = vec!["g", "e", "f"];
    letters.push("d");
    letters.extend(more_letters.iter().copied());
    more_letters.sort();
    println!("letters = {:?}, sorted more = {:?}", letters, more_letters);

    let mut numbers = vec![2, 3, 5, 7, 11, 13];
    let mut fixed_numbers = [2, 3, 5, 7, 11, 13];
    numbers[0] = 1;
    fixed_numbers[0] = 1;
    println!("numbers[1..4] = {:?}", &numbers[1..4]);
    println!("numbers[..4] = {:?}", &numbers[..4]);
    println!("fixed[2..] = {:?}", &fixed_numbers[2..]);
    println!("window(4, 9) = {:?}", collections::window(&numbers, 4, 9));

    let mut students = vec![
        Student { year: 2, name: "bob".into() },
        Student { year: 5, name: "cindy".into() },
        Student { year: 3, name: "alice".into() },
    ];
    collections::sort_by_year(&mut students);
    println!("students by year: {:?}", students);

    section("Maps");

    let mut name_to_age: HashMap<String, u32> = HashMap::new();
    name_to_age.insert("Bob".to_string(), 42);
    name_to_age.insert("Alice".to_string(), 33);

    match name_to_age.get("Bob") {
        Some(age) => println!("Bob is {age}"),
        None => println!("no Bob"),
    }
    println!("Zed is {}", collections::age_or_default(&name_to_age, "Zed"));

    name_to_age.insert("Bob".to_string(), 34);
    for (name, age) in collections::drain_ages(&mut name_to_age) {
        println!("key[{name}] value[{age}]");
    }
    println!("map empty after drain: {}", name_to_age.is_empty());

    let accounts = vec![
        Account::new("Alice", "Gopher123"),
        Account::new("Bob", "Gopher456"),
        Account::new("Cindy", "Gopher789"),
    ];
    let buddies = collections::buddy_map(&accounts);
    if let Some(buddy) = collections::buddy_of(&buddies, &accounts[0]) {
        println!("Alice's buddy: {:?}", buddy);
    }
}

// ============================================================================
// Control flow
// ============================================================================

fn control_flow() {
    section("Control flow");

    let empty = "";
    if empty.is_empty() {
        println!("true");
    } else if empty == "foo" {
        println!("else if true");
    } else {
        println!("else here");
    }

    let words = ["foo", "bar"];
    for (i, value) in words.iter().enumerate() {
        println!("{i} {value}");
    }
    for i in 0..3 {
        println!("counting {i}");
    }

    let mut num = 0;
    while num < 10 {
        num += 4;
    }
    println!("while loop ended at {num}");

    let mut spins = 0;
    let spun = loop {
        spins += 1;
        if spins == 3 {
            break spins;
        }
    };
    println!("loop broke out with {spun}");

    // match must cover every case; `_` is the fallback arm.
    for candidate in ["foo", "bar", "baz"] {
        match candidate {
            "foo" => println!("got foo"),
            "bar" => println!("got bar, no fall through"),
            _ => println!("did not match above, guess i'll go then"),
        }
    }
}

// ============================================================================
// Channels, briefly
// ============================================================================

fn channel_teaser() {
    section("Channels, briefly");

    let (tx, rx) = bounded::<String>(2);
    for word in ["foo", "bar", "bazz"] {
        match mailbox::offer(&tx, word) {
            Delivery::Sent => println!("sent {word}"),
            Delivery::Dropped(word) => println!("channel is full! dropped {word}"),
            Delivery::Closed(word) => println!("channel closed, lost {word}"),
        }
    }
    drop(tx);
    for message in rx {
        println!("received {message}");
    }
}

// ============================================================================
// Strings
// ============================================================================

fn strings() {
    section("Strings");

    println!("contains 'word': {}", text::contains("some words", "word"));

    let words = text::split_csv("one,two,three,four ");
    println!("split: {:?}", words);
    println!("joined: {:?}", text::join_words(&words, " "));

    println!("first letter: {:?}", text::first_letter("abcd"));
    println!("first byte: {:?}", text::first_byte("abcd"));
    for letter in text::letters("abcd") {
        print!("{letter} ");
    }
    println!();

    let sentence = "Add ".to_string() + "words " + "together";
    println!("{sentence}");
    println!("Digits {} yay", 42);
    println!("{}", text::describe("hello", 42, 42.42));

    match text::parse_id("234") {
        Ok(id) => println!("parsed id {id}"),
        Err(err) => warn!(%err, "bad id"),
    }
    if let Err(err) = text::parse_id64("two hundred") {
        println!("expected failure: {err}");
    }
    println!("bool as string: {}", true);
}

// ============================================================================
// Time
// ============================================================================

fn time() -> ramp_up::Result<()> {
    section("Time");

    let now = Utc::now();
    println!("now: {}", clock::format_stamp(&now));
    println!("now in New York: {}", now.with_timezone(&clock::new_york()));
    println!("now in millis: {}", clock::unix_millis(&now));

    let parsed = clock::parse_timestamp("2021-01-03 00:00:00")?;
    println!("parsed: {parsed}");

    println!("1630357720 in New York: {}", clock::in_new_york(1_630_357_720)?);
    println!("1630357720 in UTC: {}", clock::in_utc(1_630_357_720)?);
    Ok(())
}

fn main() {
    init_logger(false);

    printing();
    variables();
    collections_tour();
    control_flow();
    channel_teaser();
    strings();
    if let Err(err) = time() {
        tracing::error!(%err, "time section failed");
    }

    key_points(&[
        "let binds, let mut allows reassignment",
        "Vec grows, arrays are fixed, slices borrow a range of either",
        "HashMap::get returns Option; a default on a miss has to be asked for",
        "match is exhaustive, no fall through",
        "String is UTF-8; chars() walks letters, bytes() walks bytes",
    ]);
}
