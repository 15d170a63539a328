//! Name validation.
//!
//! Rules are checked in order and the first failure is returned.

use crate::error::{ListError, NameSubject};
use crate::types::List;

/// Shortest accepted name, in Unicode scalar values.
pub const MIN_NAME_LEN: usize = 1;

/// Longest accepted name, in Unicode scalar values.
pub const MAX_NAME_LEN: usize = 100;

fn check_length(name: &str, subject: NameSubject) -> Result<(), ListError> {
    let len = name.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ListError::InvalidLength {
            subject,
            len,
            min: MIN_NAME_LEN,
            max: MAX_NAME_LEN,
        })
    }
}

/// Validates a candidate list name against the lists already in a store.
///
/// `current_name` is the name of the list being renamed, if any; a candidate
/// equal to it never counts as a duplicate. Comparison is exact and
/// case-sensitive.
///
/// # Errors
///
/// - [`ListError::InvalidLength`] when the name is empty or longer than 100 characters
/// - [`ListError::DuplicateName`] when another list already uses the name
pub fn validate_list_name(
    name: &str,
    existing: &[List],
    current_name: Option<&str>,
) -> Result<(), ListError> {
    check_length(name, NameSubject::List)?;

    let collides = existing
        .iter()
        .any(|list| list.name == name && current_name != Some(name));
    if collides {
        return Err(ListError::DuplicateName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validates a candidate item name.
///
/// # Errors
///
/// [`ListError::InvalidLength`] when the name is empty or longer than 100 characters.
pub fn validate_item_name(name: &str) -> Result<(), ListError> {
    check_length(name, NameSubject::Item)
}
