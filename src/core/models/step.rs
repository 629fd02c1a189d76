//! Pipeline steps

use serde::Serialize;

/// A stage of the publish pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Bring the output repository onto its remote publish branch
    SyncOutputRef,
    /// Remove every generated file from the output directory
    CleanOutput,
    /// Run the external site generator
    Generate,
    /// Copy the custom-domain marker into the output directory
    CopyCname,
    /// Stage, commit and push the output repository
    PublishOutput,
    /// Stage, commit and push the sources repository
    PublishSources,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SyncOutputRef => "sync output repository",
            Self::CleanOutput => "clean output",
            Self::Generate => "generate",
            Self::CopyCname => "copy custom domain",
            Self::PublishOutput => "publish output repository",
            Self::PublishSources => "publish sources repository",
        };
        f.write_str(name)
    }
}
