use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single compilation database entry as emitted by `-gen-cdb-fragment-path`.
///
/// Only `file` is required since it is the grouping key. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    pub file: String,
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
    #[serde(default)]
    pub output: Option<String>,
}
