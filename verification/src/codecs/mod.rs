//! Codec Adapters
//!
//! Bind the codec traits to the concrete libraries. Each adapter is only
//! compiled when its feature is enabled.

#[cfg(feature = "brotli")]
mod brotli;
#[cfg(feature = "igbinary")]
mod igbinary;
#[cfg(feature = "ssdeep")]
mod ssdeep;
#[cfg(feature = "zstd")]
mod zstd;

#[cfg(feature = "brotli")]
pub use self::brotli::Brotli;
#[cfg(feature = "igbinary")]
pub use self::igbinary::Igbinary;
#[cfg(feature = "ssdeep")]
pub use self::ssdeep::Ssdeep;
#[cfg(feature = "zstd")]
pub use self::zstd::Zstd;
