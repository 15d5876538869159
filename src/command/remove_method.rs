use std::path::Path;

use crate::error::Result;
use crate::patcher::java::JavaPatcher;
use crate::patcher::traits::LanguagePatcher;

/// Delete a method by literal signature from a source file.
pub fn execute(file: &Path, signature: &str) -> Result<()> {
    let patcher = JavaPatcher::new();
    patcher.remove_method(file, signature)
}
