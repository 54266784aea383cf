//! Merging fragments into `compile_commands.json`
//!
//! # Pipeline
//!
//! [`generate_database`] runs the steps in a fixed order so that a failure early on never
//! deletes fragments or leaves a half-written database behind:
//!
//! 1. Optional build ([`crate::build::run_build`])
//! 2. Fragment discovery ([`crate::discovery::list_fragments`])
//! 3. Parsing and grouping by source file ([`group_fragments`])
//! 4. Newest-first selection and optional purge ([`select_newest`], [`purge_superseded`])
//! 5. Writing the aggregate database ([`write_database`])

pub mod grouping;
pub mod pipeline;
pub mod purge;
pub mod writer;

pub use grouping::{GroupedFragments, group_fragments, select_newest};
pub use pipeline::generate_database;
pub use purge::purge_superseded;
pub use writer::write_database;
