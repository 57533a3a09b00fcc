//! Built-in technique seed data.
//!
//! Scores and niche tags are fixed design constants. Entries appear in the
//! declaration order of their type enum, which is also the tie-break order
//! used by the recommendation engine.

mod hooks;
mod patterns;
mod structures;

pub use hooks::builtin_hooks;
pub use patterns::builtin_patterns;
pub use structures::builtin_structures;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
