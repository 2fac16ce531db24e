//! Watchcover-Common: Shared playback types and error handling.
//!
//! This crate provides common functionality used across watchcover:
//!
//! - **Playback Types**: Telemetry samples and half-open position intervals
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use watchcover_common::{Interval, PlaybackSample, Error, Result};
//!
//! let sample = PlaybackSample::new(12.5, 3.0);
//! assert_eq!(sample.position, 12.5);
//!
//! let watched = Interval::new(0.0, 12.5);
//! assert_eq!(watched.len(), 12.5);
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("negative position"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
