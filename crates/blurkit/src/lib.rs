#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Re-exports the image container, the filters and the image codecs under
//! one crate.

#[doc(inline)]
pub use blurkit_image as image;

#[doc(inline)]
pub use blurkit_imgproc as imgproc;

#[doc(inline)]
pub use blurkit_io as io;
