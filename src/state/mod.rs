/// State management module
///
/// This module handles all application state, including:
/// - The selected image and its preview resource (selection.rs)
/// - The analysis request state machine (analysis.rs)
/// - The active navigation section (section.rs)
/// - The workspace composing the three (detector.rs)

pub mod analysis;
pub mod detector;
pub mod section;
pub mod selection;
