//! Tests for publish configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use sitepub::Error;
use sitepub::config::{PublishConfig, default_toml};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = PublishConfig::new("/srv/blog");
    assert_eq!(config.generator.command, "hexo");
    assert_eq!(config.generator.args, vec!["generate"]);
    assert_eq!(config.output.dir, PathBuf::from("public"));
    assert_eq!(config.output.remote, "origin");
    assert_eq!(config.output.branch, "master");
    assert!(config.output.sync);
    assert_eq!(config.output.cname, None);
    assert_eq!(config.sources.remote, "origin");
}

#[test]
fn test_output_root_and_cname_resolve_against_source_root() {
    let mut config = PublishConfig::new("/srv/blog");
    assert_eq!(config.output_root(), Path::new("/srv/blog/public"));
    assert_eq!(config.cname_source(), None);

    config.output.cname = Some(PathBuf::from("CNAME"));
    assert_eq!(config.cname_source(), Some(PathBuf::from("/srv/blog/CNAME")));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = PublishConfig::load(temp.path()).unwrap();
    assert_eq!(config, PublishConfig::new(temp.path()));
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".sitepub.toml"),
        r#"
[generator]
command = "hugo"
args = []

[output]
branch = "gh-pages"
cname = "CNAME"
"#,
    )
    .unwrap();

    let config = PublishConfig::load(temp.path()).unwrap();
    assert_eq!(config.source_root, temp.path());
    assert_eq!(config.generator.command, "hugo");
    assert!(config.generator.args.is_empty());
    assert_eq!(config.output.branch, "gh-pages");
    assert_eq!(config.output.dir, PathBuf::from("public"));
    assert_eq!(config.output.cname, Some(PathBuf::from("CNAME")));
    assert!(config.output.sync);
}

#[test]
fn test_load_from_explicit_path() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("publish.toml");
    fs::write(&file, "[output]\ndir = \"site\"\nsync = false\n").unwrap();

    let config = PublishConfig::load_from(&file, Path::new("/srv/blog")).unwrap();
    assert_eq!(config.output_root(), Path::new("/srv/blog/site"));
    assert!(!config.output.sync);
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitepub.toml"), "[output\nbranch = ").unwrap();

    let err = PublishConfig::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_output_dir_must_be_a_subdirectory() {
    let temp = TempDir::new().unwrap();
    for dir in [".", "", "/var/www"] {
        fs::write(temp.path().join(".sitepub.toml"), format!("[output]\ndir = \"{dir}\"\n")).unwrap();
        let err = PublishConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "dir {dir:?} should be rejected");
    }
}

#[test]
fn test_empty_generator_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitepub.toml"), "[generator]\ncommand = \" \"\n").unwrap();

    let err = PublishConfig::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("generator.command"));
}

// =============================================================================
// SAVING
// =============================================================================

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let mut config = PublishConfig::new(temp.path());
    config.generator.command = "sh".to_string();
    config.generator.args = vec!["-c".to_string(), "echo \"hi\" > 'public/x'".to_string()];
    config.output.cname = Some(PathBuf::from("CNAME"));

    let path = temp.path().join(".sitepub.toml");
    config.save(&path).unwrap();

    assert_eq!(PublishConfig::load(temp.path()).unwrap(), config);
}

#[test]
fn test_template_is_loadable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitepub.toml"), default_toml()).unwrap();

    let config = PublishConfig::load(temp.path()).unwrap();
    assert_eq!(config, PublishConfig::new(temp.path()));
}

// =============================================================================
// WORKING DIRECTORY
// =============================================================================

#[test]
#[serial]
fn test_relative_source_root_resolves_against_cwd() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".sitepub.toml"), "[output]\nbranch = \"gh-pages\"\n").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let loaded = PublishConfig::load(Path::new("."));
    std::env::set_current_dir(original).unwrap();

    let config = loaded.unwrap();
    assert_eq!(config.output.branch, "gh-pages");
    assert_eq!(config.output_root(), Path::new("./public"));
}
