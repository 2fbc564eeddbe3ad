//! A hash-based streaming byte codec: the Chameleon kernel (primary) and the
//! Swift kernel (smaller dictionary, faster warm-up, lower ratio), sharing
//! one stream format and one suspend/resume streaming contract.
//!
//! The public entry points are [`Compressor`] and [`Decompressor`]: push
//! input through `process`, draining `out` and refilling `direct` on every
//! [`Status::StallOnInput`] / [`Status::StallOnOutput`], until
//! [`Status::Finished`].

pub mod dictionary;
pub mod error;
pub mod hash;
pub mod kernel;
pub mod signature;
pub mod status;
pub mod stream;
pub mod teleport;

pub use error::MalformedStreamError;
pub use status::Status;
pub use stream::types::{Algorithm, Parameters};
pub use stream::{Compressor, Decompressor};
