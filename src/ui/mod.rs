/// User interface module
///
/// View-layer widgets for the detector. These functions only read the
/// detector's render state and emit messages; state transitions live in
/// the update loop.
/// - Navigation bar (navbar.rs)
/// - Home section with upload/result cards (detector.rs)
/// - Static informational sections (info.rs)
/// - Footer (footer.rs)

pub mod detector;
pub mod footer;
pub mod info;
pub mod navbar;
