use super::*;

#[test]
fn editor_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
}

#[test]
fn file_commands_use_ctrl_shortcuts() {
    let service = KeybindingService::new();
    let cases = [
        ('n', Command::NewTab),
        ('o', Command::OpenFile),
        ('s', Command::Save),
        ('w', Command::CloseTab),
        ('t', Command::OpenTerminal),
        ('q', Command::Quit),
    ];
    for (ch, command) in cases {
        assert_eq!(
            service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char(ch))),
            Some(&command)
        );
    }
    assert_eq!(
        service.resolve(
            KeybindingContext::Global,
            &Key::ctrl_shift(KeyCode::Char('s'))
        ),
        Some(&Command::SaveAs)
    );
}

#[test]
fn global_commands_fall_through_in_editor() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('s'))),
        Some(&Command::Save)
    );
}

#[test]
fn dialog_does_not_fall_through_to_global() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::ctrl(KeyCode::Char('s'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Dialog, &Key::simple(KeyCode::Esc)),
        Some(&Command::Escape)
    );
}

#[test]
fn user_rules_bind_and_unbind() {
    let rules = vec![
        KeybindingRule {
            key: "f5".to_string(),
            command: "openTerminal".to_string(),
            context: None,
        },
        KeybindingRule {
            key: "ctrl+t".to_string(),
            command: String::new(),
            context: Some("global".to_string()),
        },
        KeybindingRule {
            key: "ctrl+e".to_string(),
            command: "cursorLineEnd".to_string(),
            context: Some("editor".to_string()),
        },
        KeybindingRule {
            key: "ctrl+k".to_string(),
            command: "noSuchCommand".to_string(),
            context: None,
        },
    ];
    let service = KeybindingService::with_rules(&rules);

    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::F(5))),
        Some(&Command::OpenTerminal)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('t'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('e'))),
        Some(&Command::CursorLineEnd)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('k'))),
        None
    );
}

#[test]
fn context_parse() {
    assert_eq!(KeybindingContext::parse(" Editor "), Some(KeybindingContext::Editor));
    assert_eq!(KeybindingContext::parse("prompt"), Some(KeybindingContext::Dialog));
    assert_eq!(KeybindingContext::parse("sidebar"), None);
}
