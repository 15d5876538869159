use log::*;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Which generated-code marker a header fix should anchor on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Message classes emitted by protoc.
    Proto,
    /// Service stubs emitted by the gRPC codegen plugin.
    Grpc,
}

/// Immutable configuration for a [`HeaderFixer`].
///
/// The canonical license text and the marker regexes are per-language
/// constants owned by that language's patcher, not globals baked into the
/// fixer itself.
pub struct HeaderConfig {
    pub license: String,
    pub proto_marker: Regex,
    pub grpc_marker: Regex,
}

/// Rewrites boilerplate license headers in generated source files.
pub struct HeaderFixer {
    config: HeaderConfig,
}

impl HeaderFixer {
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }

    fn marker(&self, kind: HeaderKind) -> &Regex {
        match kind {
            HeaderKind::Proto => &self.config.proto_marker,
            HeaderKind::Grpc => &self.config.grpc_marker,
        }
    }

    /// Normalize the license header of the file at `path`, in place.
    ///
    /// Idempotent: a file whose header is already canonical is left
    /// untouched. A file without the marker for `kind` is also left
    /// untouched; this is a best-effort transform, not a validator.
    pub fn fix(&self, path: &Path, kind: HeaderKind) -> Result<()> {
        let content = fs::read_to_string(path)?;

        match self.fix_content(&content, kind) {
            Some(fixed) if fixed != content => {
                info!("normalizing license header: {}", path.display());
                fs::write(path, fixed)?;
            }
            _ => {
                debug!("nothing to fix: {}", path.display());
            }
        }

        Ok(())
    }

    /// Returns the fixed content, or None when there is nothing to do.
    fn fix_content(&self, content: &str, kind: HeaderKind) -> Option<String> {
        let marker = self.marker(kind);
        let lines: Vec<&str> = content.lines().collect();

        // First marker line from the top anchors the header.
        let marker_idx = lines.iter().position(|l| marker.is_match(l))?;

        // Walk back over blank lines, then over one comment block. If that
        // block reads like a license it becomes the replacement region;
        // anything else above the marker is preserved as-is.
        let mut region_start = marker_idx;
        let mut below_blanks = marker_idx;
        while below_blanks > 0 && lines[below_blanks - 1].trim().is_empty() {
            below_blanks -= 1;
        }

        if below_blanks > 0
            && lines[below_blanks - 1].trim_end().ends_with("*/")
        {
            let mut j = below_blanks - 1;
            let open_idx = loop {
                if lines[j].trim_start().starts_with("/*") {
                    break Some(j);
                }
                if j == 0 {
                    break None;
                }
                j -= 1;
            };

            if let Some(open_idx) = open_idx {
                let block = lines[open_idx..below_blanks].join("\n");
                if block == self.config.license
                    && below_blanks == marker_idx
                {
                    // Header is already canonical.
                    return None;
                }
                if block.contains("Copyright") || block.contains("License") {
                    region_start = open_idx;
                }
            }
        }

        let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 16);
        out.extend_from_slice(&lines[..region_start]);
        out.extend(self.config.license.lines());
        out.extend_from_slice(&lines[marker_idx..]);

        let mut fixed = out.join("\n");
        if content.ends_with('\n') {
            fixed.push('\n');
        }

        Some(fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patcher::license::{GRPC_MARKER, LICENSE_HEADER, PROTO_MARKER};
    use std::fs;
    use tempfile::TempDir;

    const FOO_PROTO: &str = "\
// Generated by the protocol buffer compiler.  DO NOT EDIT!
// source: google/example/foo.proto

package com.google.example;

public final class FooProto {
  private FooProto() {}
}
";

    const FOO_GRPC: &str = "\
/*
 * Copyright 2018 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the \"License\"); you may not use this file except
 * in compliance with the License. You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 */

// Generated by gRPC proto compiler.  DO NOT EDIT!
// source: google/example/foo.proto

package com.google.example;

public final class FooGrpc {
  private FooGrpc() {}
}
";

    fn fixer() -> HeaderFixer {
        HeaderFixer::new(HeaderConfig {
            license: LICENSE_HEADER.to_string(),
            proto_marker: PROTO_MARKER.clone(),
            grpc_marker: GRPC_MARKER.clone(),
        })
    }

    fn write_temp(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_fix_proto_header() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "FooProto.java", FOO_PROTO);

        fixer().fix(&path, HeaderKind::Proto).unwrap();

        let fixed = fs::read_to_string(&path).unwrap();
        let expected = format!("{}\n{}", LICENSE_HEADER, FOO_PROTO);
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_fix_proto_header_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "FooProto.java", FOO_PROTO);

        let fixer = fixer();
        fixer.fix(&path, HeaderKind::Proto).unwrap();
        let once = fs::read_to_string(&path).unwrap();

        fixer.fix(&path, HeaderKind::Proto).unwrap();
        let twice = fs::read_to_string(&path).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_fix_grpc_header_replaces_stale_license() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "FooGrpc.java", FOO_GRPC);

        fixer().fix(&path, HeaderKind::Grpc).unwrap();

        let fixed = fs::read_to_string(&path).unwrap();
        assert!(fixed.starts_with(LICENSE_HEADER));
        assert!(!fixed.contains("Copyright 2018"));
        // Marker line sits directly below the canonical header.
        let marker_pos = fixed.find("// Generated by gRPC").unwrap();
        assert_eq!(marker_pos, LICENSE_HEADER.len() + 1);
        // Everything below the marker is untouched.
        assert!(fixed.contains("public final class FooGrpc {"));
    }

    #[test]
    fn test_fix_grpc_header_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "FooGrpc.java", FOO_GRPC);

        let fixer = fixer();
        fixer.fix(&path, HeaderKind::Grpc).unwrap();
        let once = fs::read_to_string(&path).unwrap();

        fixer.fix(&path, HeaderKind::Grpc).unwrap();
        let twice = fs::read_to_string(&path).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_marker_absent_is_noop() {
        let dir = TempDir::new().unwrap();
        let content = "package com.google.example;\n\npublic class Plain {}\n";
        let path = write_temp(&dir, "Plain.java", content);

        fixer().fix(&path, HeaderKind::Proto).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_kind_mismatch_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "FooProto.java", FOO_PROTO);

        // The gRPC marker never matches a protoc-generated file.
        fixer().fix(&path, HeaderKind::Grpc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), FOO_PROTO);
    }
}
