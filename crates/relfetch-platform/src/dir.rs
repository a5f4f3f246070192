use std::env;
use std::path::{Path, PathBuf};

pub fn user_temp() -> PathBuf {
    env::temp_dir()
}

/// Directory dedicated to one project's installers inside `parent`.
pub fn cache_dir_in(parent: &Path, project: &str) -> PathBuf {
    parent.join(format!("{project}-installer-cache"))
}

pub fn default_cache_dir(project: &str) -> PathBuf {
    cache_dir_in(&user_temp(), project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_temp_is_absolute() {
        let temp = user_temp();
        assert!(temp.is_absolute());
    }

    #[test]
    fn test_cache_dir_in_appends_dedicated_dir() {
        let dir = cache_dir_in(Path::new("/home/user"), "kitty");
        assert_eq!(dir, PathBuf::from("/home/user/kitty-installer-cache"));
    }

    #[test]
    fn test_default_cache_dir_lives_in_temp() {
        let dir = default_cache_dir("kitty");
        assert!(dir.starts_with(user_temp()));
        assert!(dir.ends_with("kitty-installer-cache"));
    }
}
