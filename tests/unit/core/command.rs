use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::CursorLeft.name(), "cursorLeft");
    assert_eq!(Command::InsertChar('a').name(), "insertChar");
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::OpenTerminal.name(), "openTerminal");
}

#[test]
fn test_from_name_inverts_name() {
    let all = [
        Command::NewTab,
        Command::OpenFile,
        Command::Save,
        Command::SaveAs,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::OpenTerminal,
        Command::Quit,
        Command::CursorFileEnd,
        Command::DeleteForward,
    ];
    for cmd in all {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd.clone()));
    }
}

#[test]
fn test_from_name_rejects_unknown_and_parametrized() {
    assert_eq!(Command::from_name("formatDocument"), None);
    assert_eq!(Command::from_name("insertChar"), None);
    assert_eq!(Command::from_name("  save "), Some(Command::Save));
}

#[test]
fn test_is_edit_command() {
    assert!(Command::InsertChar('a').is_edit_command());
    assert!(Command::DeleteBackward.is_edit_command());
    assert!(!Command::CursorLeft.is_edit_command());
    assert!(!Command::Save.is_edit_command());
}

#[test]
fn test_is_cursor_command() {
    assert!(Command::CursorLeft.is_cursor_command());
    assert!(Command::PageDown.is_cursor_command());
    assert!(!Command::InsertChar('a').is_cursor_command());
}
