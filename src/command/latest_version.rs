use crate::error::Result;
use crate::registry::maven::MavenRegistry;

/// Resolve and print the latest published version of an artifact.
pub fn execute(
    group_id: &str,
    artifact_id: &str,
    registry_url: &str,
) -> Result<()> {
    let registry = MavenRegistry::new(registry_url.to_string());
    let version = registry.latest_version(group_id, artifact_id)?;

    println!("{version}");

    Ok(())
}
