//! Parser for compilation database fragments
//!
//! # Error Handling Strategy
//!
//! - **Malformed fragments**: A fragment that lacks its trailing `,\n`, does not hold valid
//!   JSON, or has no string `file` key is reported on stderr and skipped. One bad fragment
//!   never breaks the whole database.
//!
//! - **I/O failures**: A fragment that was listed but cannot be opened or read is a hard
//!   error, propagated with context via `anyhow::Result`.

pub mod fragment;

pub use fragment::{FRAGMENT_SEPARATOR, decode_fragment, parse_fragment};
