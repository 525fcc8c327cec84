use super::*;

#[test]
fn empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn partial_editor_section_keeps_other_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{ "editor": { "tab_size": 2 } }"#).unwrap();

    assert_eq!(settings.editor.tab_size, 2);
    assert!(settings.editor.show_line_numbers);
    assert!(!settings.editor.confirm_close_unsaved);
    assert_eq!(settings.terminal, TerminalConfig::default());
}

#[test]
fn keybinding_context_is_optional() {
    let json = r#"{
        "keybindings": [
            { "key": "ctrl+e", "command": "openTerminal" },
            { "key": "esc", "command": "escape", "context": "dialog" }
        ]
    }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("dialog"));
}

#[test]
fn serialized_rule_omits_missing_context() {
    let rule = KeybindingRule {
        key: "ctrl+e".to_string(),
        command: "openTerminal".to_string(),
        context: None,
    };
    let json = serde_json::to_string(&rule).unwrap();
    assert!(!json.contains("context"));
}
