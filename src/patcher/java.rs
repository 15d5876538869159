use log::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::patcher::headers::{HeaderConfig, HeaderFixer, HeaderKind};
use crate::patcher::license::{GRPC_MARKER, LICENSE_HEADER, PROTO_MARKER};
use crate::patcher::methods;
use crate::patcher::traits::LanguagePatcher;

/// Patcher for generated Java client-library sources.
pub struct JavaPatcher {
    fixer: HeaderFixer,
}

impl JavaPatcher {
    pub fn new() -> Self {
        Self {
            fixer: HeaderFixer::new(HeaderConfig {
                license: LICENSE_HEADER.to_string(),
                proto_marker: PROTO_MARKER.clone(),
                grpc_marker: GRPC_MARKER.clone(),
            }),
        }
    }

    /// Fix license headers of all protoc-generated `.java` files under `root`.
    pub fn fix_proto_headers(&self, root: &Path) -> Result<()> {
        self.fix_headers_under(root, HeaderKind::Proto)
    }

    /// Fix license headers of all gRPC-generated `.java` files under `root`.
    pub fn fix_grpc_headers(&self, root: &Path) -> Result<()> {
        self.fix_headers_under(root, HeaderKind::Grpc)
    }

    fn fix_headers_under(&self, root: &Path, kind: HeaderKind) -> Result<()> {
        let mut files = Vec::new();
        collect_java_files(root, &mut files)?;

        debug!(
            "scanning {} java files under {}",
            files.len(),
            root.display()
        );

        for file in files {
            self.fixer.fix(&file, kind)?;
        }

        Ok(())
    }
}

impl Default for JavaPatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePatcher for JavaPatcher {
    fn name(&self) -> &str {
        "java"
    }

    fn fix_license_header(&self, path: &Path, kind: HeaderKind) -> Result<()> {
        self.fixer.fix(path, kind)
    }

    fn remove_method(&self, path: &Path, signature: &str) -> Result<()> {
        methods::remove_method(path, signature)
    }
}

fn collect_java_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_java_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            files.push(path);
        }
    }

    Ok(())
}
