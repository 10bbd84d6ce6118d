//! Architecture-specific SIMD reductions over `f64`.
//!
//! This module contains unsafe SIMD code for different CPU architectures.
//! The safe API in [`crate::dense`] handles dispatch and fallback.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;
