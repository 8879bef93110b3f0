//! Public envelope models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation lives. The `core` module is an
//! implementation detail and is **not** exposed as part of the public API;
//! the public types are thin, validated surfaces over that core.

pub mod envelope;
