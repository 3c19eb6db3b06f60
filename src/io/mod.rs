//! Wireframe export.

#[cfg(feature = "dxf-io")]
mod dxf;

mod obj;

#[cfg(feature = "dxf-io")]
pub use self::dxf::to_dxf;
pub use obj::to_obj;

/// Generic I/O and format‑conversion errors.
///
/// Some formats are behind cargo feature‑flags. When a feature is disabled
/// the corresponding variant does not exist.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    #[error("DXF error: {0}")]
    Dxf(#[from] ::dxf::DxfError),
}
