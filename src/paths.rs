//! Centralized path definitions for sitepub
//!
//! ## Layout
//!
//! ```text
//! blog/                       # Sources repository (working directory)
//! ├── .sitepub.toml           # Publish configuration (optional)
//! ├── CNAME                   # Custom-domain marker (optional)
//! ├── source/ ...             # Authorial content, read by the generator
//! └── public/                 # Output repository (nested, own remote)
//!     ├── .git                # Survives every clean
//!     └── index.html ...      # Regenerated on every run
//! ```

use std::path::{Path, PathBuf};

/// Configuration filename, looked up in the source root
pub const CONFIG_FILE: &str = ".sitepub.toml";

/// Default output directory, relative to the source root
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Git metadata entry inside a working tree (directory or `gitdir:` file)
pub const GIT_ENTRY: &str = ".git";

/// Get path to the configuration file under `source_root`
#[must_use]
pub fn config_file(source_root: &Path) -> PathBuf {
    source_root.join(CONFIG_FILE)
}

/// Whether `dir` holds its own git metadata
#[must_use]
pub fn has_git_entry(dir: &Path) -> bool {
    dir.join(GIT_ENTRY).exists()
}
