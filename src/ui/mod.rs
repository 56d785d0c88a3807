/// User interface widgets
///
/// - `canvas.rs` - the image region that displays rendered arrays

pub mod canvas;

pub use canvas::ArrayCanvas;
