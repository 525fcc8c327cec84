use super::*;

#[test]
fn test_default_settings_give_default_editor() {
    let service = ConfigService::from_settings(&Settings::default());
    assert_eq!(service.editor().tab_size, 4);
    assert!(!service.editor().confirm_close_unsaved);
}

#[test]
fn test_from_settings_copies_sections() {
    let mut settings = Settings::default();
    settings.editor.show_line_numbers = false;
    settings.terminal.program = "alacritty".to_string();

    let service = ConfigService::from_settings(&settings);
    assert!(!service.editor().show_line_numbers);
    assert_eq!(service.terminal().program, "alacritty");
}
