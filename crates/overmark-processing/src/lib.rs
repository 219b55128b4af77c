//! Overmark image processing library
//!
//! Pure, stateless image computation for the overlay service: logo sizing and
//! placement, opacity masking, and decode/resize/encode helpers on top of the
//! `image` crate. Nothing here touches the network or holds state between
//! calls, so every operation is unit-testable with plain inputs and outputs.

pub mod image;

pub use crate::image::{
    codec::{self, DecodedImage},
    overlay::{LogoOverlay, LogoPosition, LogoSize, OverlayConfig, Placement},
    resize,
};
