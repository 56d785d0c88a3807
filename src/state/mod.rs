/// State management module
///
/// This module holds the viewing session: the chosen directory, the array
/// files found in it and the current position (session.rs).

pub mod session;

pub use session::Session;
