//! Structs with methods, and a trait to send through any of them.

/// Works on a copy of itself, so its count never moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderA {
    pub first_name: String,
    pub message_count: u32,
}

impl SenderA {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            message_count: 0,
        }
    }
}

/// Updates its own count on every send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderB {
    pub first_name: String,
    pub message_count: u32,
}

impl SenderB {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            message_count: 0,
        }
    }
}

pub trait MessageSender {
    /// Sends `message` and returns the line that was printed.
    fn send(&mut self, message: &str) -> String;
}

impl MessageSender for SenderA {
    fn send(&mut self, message: &str) -> String {
        let mut copy = self.clone();
        copy.message_count += 1;
        copy.first_name = "what will happen????".to_string();
        tracing::debug!(copy = ?copy, original = ?self, "only the copy changed");
        format!("Send from {}: {}", self.first_name, message)
    }
}

impl MessageSender for SenderB {
    fn send(&mut self, message: &str) -> String {
        self.message_count += 1;
        format!(
            "Send {} from {}: {}",
            self.message_count, self.first_name, message
        )
    }
}

/// Dynamic dispatch: any sender behind a trait object.
pub fn send_email(sender: &mut dyn MessageSender, message: &str) -> String {
    let line = sender.send(message);
    println!("{line}");
    line
}

/// Static dispatch: monomorphized per sender type.
pub fn send_email_with<S: MessageSender>(sender: &mut S, message: &str) -> String {
    let line = sender.send(message);
    println!("{line}");
    line
}
