//! In-place patching of generated source files.
//!
//! Covers license header normalization for protoc/gRPC generated files and
//! removal of deprecated methods by signature. All transforms read the whole
//! file, rewrite it in memory, and write it back; mutation is not
//! transactional.

pub mod headers;
pub mod java;
pub mod license;
pub mod methods;
pub mod traits;
