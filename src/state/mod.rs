/// State management module
///
/// This module handles all widget state, including:
/// - The demo gallery's category filter (gallery.rs)
/// - The modal viewer's phase machine and hosted player (modal.rs)
/// - One-shot scroll-reveal tracking per section (reveal.rs)
///
/// Everything here is plain data with pure queries, so the render logic
/// in `ui/` stays a function of state and its properties are testable
/// without a renderer.
pub mod gallery;
pub mod modal;
pub mod reveal;
