//! Vectors, arrays and maps from the intro lesson.

use std::collections::HashMap;

/// Usable as a map key because it derives `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    pub name: String,
    pub password: String,
}

impl Account {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub year: u32,
    pub name: String,
}

/// Pairs each account with the next one, wrapping around.
pub fn buddy_map(accounts: &[Account]) -> HashMap<Account, Account> {
    accounts
        .iter()
        .zip(accounts.iter().cycle().skip(1))
        .map(|(account, buddy)| (account.clone(), buddy.clone()))
        .collect()
}

pub fn buddy_of<'a>(buddies: &'a HashMap<Account, Account>, who: &Account) -> Option<&'a Account> {
    buddies.get(who)
}

/// A missing name reads as zero.
pub fn age_or_default(ages: &HashMap<String, u32>, name: &str) -> u32 {
    ages.get(name).copied().unwrap_or_default()
}

/// Empties the map, returning its entries sorted by name.
pub fn drain_ages(ages: &mut HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut drained: Vec<(String, u32)> = ages.drain().collect();
    drained.sort();
    drained
}

pub fn sort_by_year(students: &mut [Student]) {
    students.sort_by_key(|student| student.year);
}

/// Bounds-checked `nums[start..end]`.
pub fn window(nums: &[i32], start: usize, end: usize) -> Option<&[i32]> {
    nums.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Vec<Account> {
        vec![
            Account::new("Alice", "Gopher123"),
            Account::new("Bob", "Gopher456"),
            Account::new("Cindy", "Gopher789"),
        ]
    }

    #[test]
    fn test_struct_keys() {
        let accounts = trio();
        let buddies = buddy_map(&accounts);

        assert_eq!(buddy_of(&buddies, &accounts[0]), Some(&accounts[1]));
        assert_eq!(buddy_of(&buddies, &accounts[2]), Some(&accounts[0]));
        assert_eq!(buddy_of(&buddies, &Account::new("Alice", "wrong")), None);
    }

    #[test]
    fn test_missing_key_reads_zero() {
        let mut ages = HashMap::from([("Bob".to_string(), 42), ("Alice".to_string(), 33)]);
        assert_eq!(age_or_default(&ages, "Bob"), 42);

        ages.remove("Bob");
        ages.remove("Bob");
        assert_eq!(age_or_default(&ages, "Bob"), 0);
    }

    #[test]
    fn test_miss_is_none_until_a_default_is_asked_for() {
        let ages: HashMap<String, u32> = HashMap::new();
        assert_eq!(ages.get("Zed"), None);
        assert_eq!(age_or_default(&ages, "Zed"), 0);
    }

    #[test]
    fn test_drain_empties_map() {
        let mut ages = HashMap::from([("Bob".to_string(), 34), ("Alice".to_string(), 33)]);
        let drained = drain_ages(&mut ages);

        assert_eq!(
            drained,
            vec![("Alice".to_string(), 33), ("Bob".to_string(), 34)]
        );
        assert!(ages.is_empty());
    }

    #[test]
    fn test_sort_by_year() {
        let mut students = vec![
            Student { year: 5, name: "cindy".into() },
            Student { year: 2, name: "bob".into() },
            Student { year: 3, name: "alice".into() },
        ];
        sort_by_year(&mut students);

        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice", "cindy"]);
    }

    #[test]
    fn test_window() {
        let nums = [2, 3, 5, 7, 11, 13];
        assert_eq!(window(&nums, 1, 4), Some(&[3, 5, 7][..]));
        assert_eq!(window(&nums, 2, 6), Some(&nums[2..]));
        assert_eq!(window(&nums, 4, 9), None);
        assert_eq!(window(&nums, 4, 2), None);
    }
}
