use super::*;
use std::path::Path;

#[test]
fn test_log_dir_is_under_app_dir() {
    if let Some(dir) = get_log_dir() {
        assert!(dir.ends_with("zpad/logs"));
    }
}

#[test]
fn test_relative_path_resolves_against_cwd() {
    let cwd = Path::new("/work/project");
    assert_eq!(
        resolve_user_path("notes/todo.txt", cwd),
        PathBuf::from("/work/project/notes/todo.txt")
    );
}

#[test]
fn test_absolute_path_is_kept() {
    let cwd = Path::new("/work/project");
    assert_eq!(
        resolve_user_path("/tmp/a.txt", cwd),
        PathBuf::from("/tmp/a.txt")
    );
}

#[test]
fn test_surrounding_spaces_are_part_of_the_name() {
    let cwd = Path::new("/work/project");
    assert_eq!(
        resolve_user_path(" a.txt", cwd),
        PathBuf::from("/work/project/ a.txt")
    );
    assert_eq!(
        resolve_user_path("b.txt ", cwd),
        PathBuf::from("/work/project/b.txt ")
    );
}

#[test]
fn test_tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let cwd = Path::new("/work");
    assert_eq!(
        resolve_user_path("~/a.txt", cwd),
        PathBuf::from(home).join("a.txt")
    );
}
