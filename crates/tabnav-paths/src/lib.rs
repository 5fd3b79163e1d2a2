use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set the $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.tabnav/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct TabnavPaths {
    tabnav_dir: PathBuf,
}

impl TabnavPaths {
    /// Resolve paths from the user's home directory (`~/.tabnav`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            tabnav_dir: home.join(".tabnav"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(tabnav_dir: PathBuf) -> Self {
        Self { tabnav_dir }
    }

    /// The base `~/.tabnav` directory.
    pub fn tabnav_dir(&self) -> &Path {
        &self.tabnav_dir
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.tabnav_dir.join("scripts")
    }

    pub fn user_config(&self) -> PathBuf {
        self.tabnav_dir.join("config.toml")
    }

    /// Saved navigation script: `~/.tabnav/scripts/<name>.json`.
    pub fn script_file(&self, name: &str) -> PathBuf {
        let safe_name = name.replace(['/', '\\'], "_");
        self.scripts_dir().join(format!("{safe_name}.json"))
    }

    /// Project-level config: `<project_root>/.tabnav/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".tabnav").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths() -> TabnavPaths {
        TabnavPaths::from_dir(PathBuf::from("/home/user/.tabnav"))
    }

    #[test]
    fn test_resolve_returns_ok_when_home_set() {
        // HOME is set in CI and dev environments
        let result = TabnavPaths::resolve();
        assert!(result.is_ok());
        let paths = result.unwrap();
        assert!(paths.tabnav_dir().to_string_lossy().contains(".tabnav"));
    }

    #[test]
    fn test_from_dir() {
        let paths = TabnavPaths::from_dir(PathBuf::from("/tmp/test-tabnav"));
        assert_eq!(paths.tabnav_dir(), Path::new("/tmp/test-tabnav"));
    }

    #[test]
    fn test_user_config() {
        assert_eq!(
            test_paths().user_config(),
            PathBuf::from("/home/user/.tabnav/config.toml")
        );
    }

    #[test]
    fn test_script_file() {
        assert_eq!(
            test_paths().script_file("finish-onboarding"),
            PathBuf::from("/home/user/.tabnav/scripts/finish-onboarding.json")
        );
    }

    #[test]
    fn test_script_file_sanitizes_separators() {
        assert_eq!(
            test_paths().script_file("qa/logout"),
            PathBuf::from("/home/user/.tabnav/scripts/qa_logout.json")
        );
    }

    #[test]
    fn test_project_config() {
        assert_eq!(
            TabnavPaths::project_config(Path::new("/work/app")),
            PathBuf::from("/work/app/.tabnav/config.toml")
        );
    }
}
