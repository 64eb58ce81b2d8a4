//! Git integration layer.
//!
//! This module wraps the actual backend implementation
//! (`git2_backend`) and re-exports only the stable public API
//! (`clone_upstream`), so a different backend could be swapped in
//! without touching the generation flows.

mod git2_backend;

/// Make sure the upstream source tree is available locally.
///
/// This is the only public API exported from the `git` module.
pub use git2_backend::clone_upstream;
