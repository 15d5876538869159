use std::path::Path;

use crate::error::Result;
use crate::patcher::headers::HeaderKind;
use crate::patcher::java::JavaPatcher;
use crate::patcher::traits::LanguagePatcher;

/// Normalize license headers for a single file or a whole source tree.
pub fn execute(path: &Path, kind: HeaderKind) -> Result<()> {
    let patcher = JavaPatcher::new();

    if path.is_file() {
        return patcher.fix_license_header(path, kind);
    }

    match kind {
        HeaderKind::Proto => patcher.fix_proto_headers(path),
        HeaderKind::Grpc => patcher.fix_grpc_headers(path),
    }
}
