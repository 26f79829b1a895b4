//! String helpers used by the intro lesson.

use crate::error::{LessonError, Result};

/// Substring match: `"sword"` contains `"word"`.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Splits on commas, keeping empty and whitespace-padded pieces as-is.
pub fn split_csv(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

pub fn join_words(words: &[&str], separator: &str) -> String {
    words.join(separator)
}

/// First character, not first byte: `"é"` gives `'é'`.
pub fn first_letter(s: &str) -> Option<char> {
    s.chars().next()
}

/// First raw byte, which is only a whole letter for ASCII.
pub fn first_byte(s: &str) -> Option<u8> {
    s.bytes().next()
}

pub fn letters(s: &str) -> Vec<String> {
    s.chars().map(String::from).collect()
}

pub fn parse_id(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|err| LessonError::parse(input, err))
}

pub fn parse_id64(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|err| LessonError::parse(input, err))
}

pub fn describe(word: &str, int: i64, float: f64) -> String {
    format!("A word here: {word}, an int here: {int}, a float here: {float:.2}")
}
