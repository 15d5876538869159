//! Shared boilerplate template rendering.
//!
//! Copies a tree of starter files (dependency-bot configs, CI manifests,
//! readme fragments) into a project, rendering each file through tera on the
//! way. Files already present in the target that are not part of the template
//! set are never touched; templated files are overwritten.

use log::*;
use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::error::{Result, SynthfixError};

/// Render every file under `template_root` into `target_dir`, preserving
/// relative paths. Returns the list of files written.
pub fn render_templates(
    template_root: &Path,
    target_dir: &Path,
    context: &Context,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    render_dir(template_root, template_root, target_dir, context, &mut written)?;

    info!(
        "rendered {} template files into {}",
        written.len(),
        target_dir.display()
    );

    Ok(written)
}

fn render_dir(
    root: &Path,
    dir: &Path,
    target_dir: &Path,
    context: &Context,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            render_dir(root, &path, target_dir, context, written)?;
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .map_err(|e| SynthfixError::InvalidArgs(e.to_string()))?;
        let destination = target_dir.join(relative);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        let template = fs::read_to_string(&path)?;
        let rendered = Tera::one_off(&template, context, false)?;

        debug!("rendering template: {}", relative.display());
        fs::write(&destination, rendered)?;
        written.push(destination);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_templates_copies_tree() {
        let templates = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        fs::write(
            templates.path().join("renovate.json"),
            "{\n  \"extends\": [\"config:base\"]\n}\n",
        )
        .unwrap();

        let nested = templates.path().join(".github/workflows");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("ci.yaml"), "name: {{ name }}-ci\n").unwrap();

        let mut context = Context::new();
        context.insert("name", "libraries-bom");

        let written =
            render_templates(templates.path(), project.path(), &context)
                .unwrap();
        assert_eq!(written.len(), 2);

        let renovate =
            fs::read_to_string(project.path().join("renovate.json")).unwrap();
        assert_eq!(renovate, "{\n  \"extends\": [\"config:base\"]\n}\n");

        let ci = fs::read_to_string(
            project.path().join(".github/workflows/ci.yaml"),
        )
        .unwrap();
        assert_eq!(ci, "name: libraries-bom-ci\n");
    }

    #[test]
    fn test_render_templates_leaves_project_files_alone() {
        let templates = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        fs::write(templates.path().join("renovate.json"), "{}\n").unwrap();
        fs::write(project.path().join("pom.xml"), "<project/>\n").unwrap();

        render_templates(templates.path(), project.path(), &Context::new())
            .unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("pom.xml")).unwrap(),
            "<project/>\n"
        );
        assert!(project.path().join("renovate.json").is_file());
    }
}
