/// Statement walking, import resolution and output assembly.
pub mod core;

/// Rendering of semantic nodes as Python expressions.
pub mod render;
