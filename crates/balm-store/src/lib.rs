//! Local journal persistence.
//!
//! Entries live under the XDG state directory as append-only JSONL files,
//! one serialized entry per line:
//!
//! ```text
//! ~/.local/state/balm/journal/
//! ├── .lock                (flock for concurrent write protection)
//! ├── moods.jsonl
//! └── reflections.jsonl
//! ```
//!
//! Reads tolerate corrupt lines (warn and skip) so a torn write never takes
//! the whole journal down. Rewrites go through temp-file + rename.

mod store;

pub use store::{JournalStore, MoodFilter, default_journal_base_dir};
