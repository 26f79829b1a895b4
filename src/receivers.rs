//! Methods that copy vs methods that mutate.

/// Updated through a consuming method that hands back a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
}

impl User {
    pub fn with_name(mut self, new_name: impl Into<String>) -> User {
        self.first_name = new_name.into();
        self
    }
}

/// Updated in place through `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
}

impl Person {
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.first_name = new_name.into();
    }
}

/// Builds a greeter that captures `suffix` by value.
///
/// Later changes to the caller's string don't reach the closure.
pub fn make_greeter(suffix: String) -> impl Fn(&str) -> String {
    move |name| format!("{name}bazz{suffix}")
}
