use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+shift+s"),
        Some(Key::ctrl_shift(KeyCode::Char('s')))
    );
    assert_eq!(parse_keybinding("Ctrl + T"), Some(Key::ctrl_shift(KeyCode::Char('t'))));
    assert_eq!(parse_keybinding("ctrl+pagedown"), Some(Key::ctrl(KeyCode::PageDown)));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn default_settings_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();

    assert_eq!(loaded, Settings::default());
}

#[test]
fn existing_settings_file_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "editor": { "tab_size": 8 } }"#).unwrap();

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();

    assert_eq!(loaded.editor.tab_size, 8);
    assert!(loaded.keybindings.is_empty());
}

#[test]
fn malformed_settings_yield_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
    assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
}
