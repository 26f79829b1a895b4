//! Lesson output helpers.

use colored::Colorize;

pub fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

pub fn key_points(points: &[&str]) {
    println!("\n{}", "=== Key Points ===".bold().green());
    for line in numbered(points) {
        println!("{line}");
    }
}

fn numbered(points: &[&str]) -> Vec<String> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect()
}
