//! Session-scoped lists of todos.
//!
//! A session owns one [`ListStore`]. The store owns named [`List`]s and each
//! list owns its [`Item`]s. Everything here is synchronous and in-memory; the
//! caller hands a store in, runs one operation, and keeps the result.
//!
//! - [`ids`]: id newtypes and max-plus-one allocation
//! - [`validation`]: name length and uniqueness rules
//! - [`completion`]: whether items and lists are done
//! - [`ordering`]: stable active-before-complete display order
//! - [`store`]: the checked create/rename/delete/complete operations
//! - [`reducer`]: the same operations as commands and events
//!
//! # Quick Start
//!
//! ```
//! use session_lists::{partition_by_completion, ListError, ListStore};
//!
//! let mut store = ListStore::new();
//! let work = store.add_list("Work")?.id;
//! let report = store.add_item(work, "Write report")?.id;
//! store.add_item(work, "Book travel")?;
//! store.set_item_completed(work, report, true)?;
//!
//! let list = store.list(work).ok_or(ListError::NotFound(session_lists::Target::List(work)))?;
//! let display: Vec<&str> = partition_by_completion(&list.items)
//!     .map(|(item, _)| item.name.as_str())
//!     .collect();
//! assert_eq!(display, ["Book travel", "Write report"]);
//! # Ok::<(), ListError>(())
//! ```

pub mod completion;
pub mod error;
pub mod ids;
pub mod ordering;
pub mod reducer;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use completion::{is_item_complete, is_list_complete, remaining_count, total_count, Completable};
pub use error::{ListError, NameSubject, Target};
pub use ids::{next_id, Identified, ItemId, ListId};
pub use ordering::partition_by_completion;
pub use reducer::{ListsCommand, ListsEvent, ListsReducer};
pub use types::{Item, List, ListStore};
pub use validation::{validate_item_name, validate_list_name, MAX_NAME_LEN, MIN_NAME_LEN};
