//! CLI argument parsing for source patching and registry lookups.
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::patcher::headers::HeaderKind;
use crate::registry::maven::DEFAULT_REGISTRY_URL;

/// Global CLI arguments for source post-processing and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Generated-code marker selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MarkerKind {
    /// Files emitted by protoc.
    Proto,
    /// Files emitted by the gRPC codegen plugin.
    Grpc,
}

impl From<MarkerKind> for HeaderKind {
    fn from(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Proto => HeaderKind::Proto,
            MarkerKind::Grpc => HeaderKind::Grpc,
        }
    }
}

/// Post-processing subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize license headers of generated Java sources.
    FixHeaders {
        /// File to fix, or directory to scan recursively for .java files.
        path: PathBuf,

        /// Which generated-code marker to anchor on.
        #[arg(long, value_enum)]
        kind: MarkerKind,
    },

    /// Remove a method from a source file by literal signature.
    RemoveMethod {
        /// Source file to rewrite in place.
        file: PathBuf,

        /// Literal signature, e.g. "public static void foo()".
        signature: String,
    },

    /// Look up the latest published version of a Maven artifact.
    LatestVersion {
        /// Dot-separated group id, e.g. com.google.cloud.
        group_id: String,

        /// Artifact id, e.g. libraries-bom.
        artifact_id: String,

        #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
        /// Registry root URL.
        registry_url: String,
    },

    /// Render shared boilerplate templates into a project directory.
    RenderTemplates {
        /// Directory holding the template tree.
        template_path: PathBuf,

        #[arg(long, default_value = ".")]
        /// Project directory to render into.
        target: PathBuf,
    },
}
