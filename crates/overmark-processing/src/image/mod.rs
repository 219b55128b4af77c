//! Image processing module
//!
//! - Decode/encode with source-format pass-through (codec)
//! - Width-fit resizing with filter selection (resize)
//! - Logo overlay computation and compositing (overlay)

pub mod codec;
pub mod overlay;
pub mod resize;

pub use codec::DecodedImage;
pub use overlay::{LogoOverlay, LogoPosition, LogoSize, OverlayConfig, Placement};
