use std::path::Path;
use tera::Context;

use crate::error::Result;
use crate::templates;

/// Render the shared template tree into a project directory.
pub fn execute(template_path: &Path, target: &Path) -> Result<()> {
    templates::render_templates(template_path, target, &Context::new())?;
    Ok(())
}
