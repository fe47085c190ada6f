//! Drawing onto off-screen surfaces

/// Art canvas assembly
pub mod canvas;
/// Sketched block outlines
pub mod hand_drawn;
/// Framed wall scene and responsive layout
pub mod scene;
