//! Static site generator port

use std::path::Path;

use crate::error::Result;

/// The external static site generator, treated as a black box
///
/// Contract: reads the source tree under `project_root`, writes a complete
/// output tree, and fails with [`Error::Generator`](crate::Error::Generator)
/// on any non-zero exit.
pub trait SiteGenerator {
    /// Regenerate the site
    fn generate(&self, project_root: &Path) -> Result<()>;
}
