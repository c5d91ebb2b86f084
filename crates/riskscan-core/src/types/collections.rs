//! Hash collections used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
