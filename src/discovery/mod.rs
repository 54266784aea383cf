//! Discovery of fragment files under `<build_dir>/CompilationDatabase/`
//!
//! Listing failures here are fatal: nothing downstream (purge, output writing) runs if the
//! fragment directory is missing, empty, or holds anything other than `.json` fragments.

pub mod fragment_listing;

pub use fragment_listing::list_fragments;
