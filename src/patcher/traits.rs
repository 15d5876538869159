use std::path::Path;

use crate::error::Result;
use crate::patcher::headers::HeaderKind;

/// Per-language source patching operations.
///
/// One implementation exists per source language that needs header
/// normalization; orchestration code dispatches through this trait without
/// knowing which language it is patching.
pub trait LanguagePatcher {
    fn name(&self) -> &str;

    /// Normalize the license header of a single generated file.
    fn fix_license_header(&self, path: &Path, kind: HeaderKind) -> Result<()>;

    /// Delete a method identified by a literal signature substring.
    fn remove_method(&self, path: &Path, signature: &str) -> Result<()>;
}
