//! Lesson 4: Structs and Traits
//! Methods on copies vs methods on the original, and traits as interfaces
//!
//! Run with: cargo run --bin lesson_04_structs_traits

use ramp_up::console::{key_points, section};
use ramp_up::logger::init_logger;
use ramp_up::senders::{send_email, send_email_with, MessageSender, SenderA, SenderB};

fn run_senders(sender_a: &mut SenderA, sender_b: &mut SenderB) {
    section("Methods");

    // SenderA works on a copy: every line reads the same and the count stays 0.
    for message in ["message one", "message two", "message three"] {
        println!("{}", sender_a.send(message));
    }
    println!("SenderA count after three sends: {}", sender_a.message_count);

    // SenderB updates itself.
    for message in ["message one", "message two", "message three"] {
        println!("{}", sender_b.send(message));
    }
    println!("SenderB count after three sends: {}", sender_b.message_count);
}

fn run_senders_trait(sender_a: &mut SenderA, sender_b: &mut SenderB) {
    section("Traits");

    // A trait object: send_email doesn't know or care which sender it got.
    send_email(sender_a, "message four");
    send_email(sender_b, "message four");

    // Generic version: one copy of the function per sender type.
    send_email_with(sender_b, "message five");

    // Both fit in one list once boxed behind the trait.
    let mut senders: Vec<Box<dyn MessageSender>> = vec![
        Box::new(SenderA::new("boxed A")),
        Box::new(SenderB::new("boxed B")),
    ];
    for sender in senders.iter_mut() {
        send_email(sender.as_mut(), "hello from the list");
    }
}

fn main() {
    init_logger(false);

    let mut sender_a = SenderA::new("A");
    let mut sender_b = SenderB::new("B");

    run_senders(&mut sender_a, &mut sender_b);
    run_senders_trait(&mut sender_a, &mut sender_b);

    key_points(&[
        "Structs hold data, impl blocks hold methods",
        "A type implements a trait explicitly with impl Trait for Type",
        "&mut dyn Trait dispatches at runtime, generics at compile time",
        "Box<dyn Trait> lets different types share one Vec",
    ]);
}
