//! Package registry version resolution.
//!
//! Parses Maven-style `maven-metadata.xml` documents and fetches them from a
//! registry over HTTP to answer "what is the latest published version of this
//! artifact".

pub mod maven;
pub mod metadata;
