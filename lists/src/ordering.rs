//! Display ordering: active entities first, completed ones last.
//!
//! This is a stable partition, not a sort. Entities keep their relative order
//! inside each group, and each is paired with its index in the untouched
//! input so callers can target the real backing position.

use crate::completion::Completable;

/// Yields `(entity, original_index)` with every incomplete entity before
/// every complete one, preserving input order within both groups.
///
/// The input is never reordered or mutated; the iterator is lazy and walks
/// the slice twice.
///
/// # Example
///
/// ```
/// use session_lists::{partition_by_completion, Item, ItemId};
///
/// let mut items: Vec<Item> = ["A", "B", "C", "D"]
///     .into_iter()
///     .zip(1..)
///     .map(|(name, id)| Item::new(ItemId::new(id), name))
///     .collect();
/// items[1].completed = true;
/// items[3].completed = true;
///
/// let order: Vec<(&str, usize)> = partition_by_completion(&items)
///     .map(|(item, index)| (item.name.as_str(), index))
///     .collect();
/// assert_eq!(order, [("A", 0), ("C", 2), ("B", 1), ("D", 3)]);
/// ```
pub fn partition_by_completion<T: Completable>(
    entities: &[T],
) -> impl Iterator<Item = (&T, usize)> + '_ {
    let active = entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| !entity.is_complete());
    let complete = entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| entity.is_complete());

    active
        .chain(complete)
        .map(|(index, entity)| (entity, index))
}
