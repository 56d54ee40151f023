use std::fmt;

/// Errors raised by the reference rasterizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// A colour target needs at least one pixel.
    EmptyTarget { width: u32, height: u32 },
    /// An index referenced a vertex past the end of the vertex slice.
    IndexOutOfRange { index: u32, vertex_count: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTarget { width, height } => {
                write!(f, "colour target has zero area ({width}x{height})")
            }
            Self::IndexOutOfRange { index, vertex_count } => {
                write!(f, "index {index} out of range for {vertex_count} vertices")
            }
        }
    }
}

impl std::error::Error for RasterError {}
