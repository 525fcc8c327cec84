use super::*;
use crate::kernel::services::ports::{EditorConfig, FileError, FileProvider, FileResult};
use crate::kernel::{FocusTarget, NotificationKind};
use tempfile::tempdir;

fn new_store(cwd: &Path) -> Store {
    Store::new(
        AppState::new(cwd.to_path_buf(), EditorConfig::default()),
        FileService::new(),
    )
}

fn confirming_store(cwd: &Path) -> Store {
    let config = EditorConfig {
        confirm_close_unsaved: true,
        ..EditorConfig::default()
    };
    Store::new(AppState::new(cwd.to_path_buf(), config), FileService::new())
}

fn run(store: &mut Store, cmd: Command) -> DispatchResult {
    store.dispatch(Action::RunCommand(cmd))
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        run(store, Command::InsertChar(ch));
    }
}

fn set_dialog_value(store: &mut Store, value: &str) {
    let dialog = &mut store.state.ui.input_dialog;
    dialog.value = value.to_string();
    dialog.cursor = dialog.value.len();
}

struct FullDisk;

impl FileProvider for FullDisk {
    fn read_file(&self, path: &Path) -> FileResult<String> {
        Err(FileError::NotFound(path.to_path_buf()))
    }

    fn write_file(&self, _path: &Path, _content: &str) -> FileResult<()> {
        Err(FileError::Io(std::io::Error::other("no space left on device")))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }

    fn is_file(&self, _path: &Path) -> bool {
        false
    }
}

#[test]
fn new_tab_appends_and_selects() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());

    let result = run(&mut store, Command::NewTab);

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state.session.len(), 2);
    assert_eq!(store.state.session.current_index(), 1);
}

#[test]
fn typing_edits_current_buffer() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());

    type_text(&mut store, "hi");
    run(&mut store, Command::InsertNewline);
    run(&mut store, Command::InsertTab);
    run(&mut store, Command::DeleteBackward);

    assert_eq!(store.state.session.current().text().text(), "hi\n   ");
}

#[test]
fn save_without_path_opens_save_as_prompt_then_writes() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "hello");

    run(&mut store, Command::Save);
    assert_eq!(store.state.ui.focus(), FocusTarget::InputDialog);
    assert_eq!(
        store.state.ui.input_dialog.kind,
        Some(InputDialogKind::SaveAs)
    );

    set_dialog_value(&mut store, "a.txt");
    let result = store.dispatch(Action::InputDialogAccept);

    assert!(result.state_changed);
    let path = dir.path().join("a.txt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    let buffer = store.state.session.current();
    assert!(buffer.is_saved());
    assert_eq!(buffer.path(), Some(path.as_path()));
    assert!(!store.state.ui.input_dialog.visible);
    assert_eq!(
        store.state.ui.notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Info)
    );
}

#[test]
fn save_with_path_writes_directly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "hello").unwrap();
    let mut store = new_store(dir.path());
    store.dispatch(Action::OpenPath(path.clone()));

    run(&mut store, Command::CursorFileEnd);
    type_text(&mut store, " world");
    assert!(!store.state.session.current().is_saved());

    run(&mut store, Command::Save);

    assert!(!store.state.ui.input_dialog.visible);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello world");
    assert!(store.state.session.current().is_saved());
}

#[test]
fn open_prompt_prefills_current_directory() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());

    run(&mut store, Command::OpenFile);

    let dialog = &store.state.ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.kind, Some(InputDialogKind::OpenFile));
    assert!(dialog.value.starts_with(&dir.path().display().to_string()));
    assert_eq!(dialog.cursor, dialog.value.len());
}

#[test]
fn open_prompt_rejects_empty_and_directory() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    run(&mut store, Command::OpenFile);

    set_dialog_value(&mut store, "   ");
    assert!(store.dispatch(Action::InputDialogAccept).state_changed);
    assert_eq!(
        store.state.ui.input_dialog.error.as_deref(),
        Some("Path required")
    );
    assert!(!store.dispatch(Action::InputDialogAccept).state_changed);

    set_dialog_value(&mut store, &dir.path().display().to_string());
    store.dispatch(Action::InputDialogAccept);
    assert_eq!(
        store.state.ui.input_dialog.error.as_deref(),
        Some("Is a directory")
    );
    assert!(store.state.ui.input_dialog.visible);
}

#[test]
fn open_missing_file_reports_error_and_keeps_state() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "draft");

    store.dispatch(Action::OpenPath(dir.path().join("missing.txt")));

    let notification = store.state.ui.notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(store.state.session.len(), 1);
    assert_eq!(store.state.session.current().text().text(), "draft");
}

#[test]
fn failed_save_reports_error_and_keeps_state() {
    let dir = tempdir().unwrap();
    let mut store = Store::new(
        AppState::new(dir.path().to_path_buf(), EditorConfig::default()),
        FileService::with_provider(Box::new(FullDisk)),
    );
    type_text(&mut store, "text");

    store.dispatch(Action::SaveAsPath(dir.path().join("out.txt")));

    let buffer = store.state.session.current();
    assert!(buffer.path().is_none());
    assert_eq!(buffer.last_saved(), "");
    assert!(!buffer.is_saved());
    assert_eq!(
        store.state.ui.notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn next_command_clears_notification() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    store.dispatch(Action::OpenPath(dir.path().join("missing.txt")));
    assert!(store.state.ui.notification.is_some());

    let result = run(&mut store, Command::CursorLeft);

    assert!(result.state_changed);
    assert!(store.state.ui.notification.is_none());
}

#[test]
fn save_as_over_existing_file_asks_first() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("taken.txt");
    std::fs::write(&path, "old").unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "new");

    store.dispatch(Action::SaveAsPath(path.clone()));
    assert_eq!(store.state.ui.focus(), FocusTarget::ConfirmDialog);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

    store.dispatch(Action::ConfirmDialogAccept);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    assert!(store.state.session.current().is_saved());
}

#[test]
fn save_as_overwrite_cancel_keeps_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("taken.txt");
    std::fs::write(&path, "old").unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "new");

    store.dispatch(Action::SaveAsPath(path.clone()));
    store.dispatch(Action::ConfirmDialogCancel);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    assert!(store.state.session.current().path().is_none());
    assert_eq!(store.state.ui.focus(), FocusTarget::Editor);
}

#[test]
fn save_as_own_path_does_not_ask() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mine.txt");
    std::fs::write(&path, "v1").unwrap();
    let mut store = new_store(dir.path());
    store.dispatch(Action::OpenPath(path.clone()));
    run(&mut store, Command::CursorFileEnd);
    type_text(&mut store, "+");

    store.dispatch(Action::SaveAsPath(path.clone()));

    assert!(!store.state.ui.confirm_dialog.visible);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "v1+");
}

#[test]
fn close_discards_unsaved_by_default() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "unsaved");
    run(&mut store, Command::NewTab);
    run(&mut store, Command::PrevTab);

    run(&mut store, Command::CloseTab);

    assert_eq!(store.state.session.len(), 1);
    assert!(store.state.session.current().text().is_empty());
    assert!(!store.state.ui.confirm_dialog.visible);
}

#[test]
fn close_with_confirmation_enabled_asks_for_dirty_tab() {
    let dir = tempdir().unwrap();
    let mut store = confirming_store(dir.path());
    run(&mut store, Command::NewTab);
    type_text(&mut store, "unsaved");

    run(&mut store, Command::CloseTab);
    assert_eq!(store.state.ui.focus(), FocusTarget::ConfirmDialog);
    assert_eq!(store.state.session.len(), 2);

    run(&mut store, Command::Escape);
    assert_eq!(store.state.session.len(), 2);

    run(&mut store, Command::CloseTab);
    store.dispatch(Action::ConfirmDialogAccept);
    assert_eq!(store.state.session.len(), 1);
}

#[test]
fn close_pristine_tab_never_asks() {
    let dir = tempdir().unwrap();
    let mut store = confirming_store(dir.path());
    run(&mut store, Command::NewTab);

    run(&mut store, Command::CloseTab);

    assert!(!store.state.ui.confirm_dialog.visible);
    assert_eq!(store.state.session.len(), 1);
}

#[test]
fn quit_sets_flag_or_asks() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "x");
    run(&mut store, Command::Quit);
    assert!(store.state.ui.should_quit);

    let mut store = confirming_store(dir.path());
    type_text(&mut store, "x");
    run(&mut store, Command::Quit);
    assert!(!store.state.ui.should_quit);
    store.dispatch(Action::ConfirmDialogAccept);
    assert!(store.state.ui.should_quit);
}

#[test]
fn open_terminal_uses_file_directory() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    let path = sub.join("a.txt");
    std::fs::write(&path, "x").unwrap();
    let mut store = new_store(dir.path());

    let result = run(&mut store, Command::OpenTerminal);
    assert_eq!(
        result.effects,
        vec![Effect::SpawnTerminal {
            dir: dir.path().to_path_buf()
        }]
    );

    store.dispatch(Action::OpenPath(path));
    let result = run(&mut store, Command::OpenTerminal);
    assert_eq!(result.effects, vec![Effect::SpawnTerminal { dir: sub }]);
}

#[test]
fn escape_closes_input_dialog() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    run(&mut store, Command::SaveAs);

    assert!(run(&mut store, Command::Escape).state_changed);
    assert!(!store.state.ui.input_dialog.visible);
    assert!(!run(&mut store, Command::Escape).state_changed);
}

#[test]
fn input_dialog_editing_is_char_aware() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    run(&mut store, Command::OpenFile);
    set_dialog_value(&mut store, "é");

    store.dispatch(Action::InputDialogCursorLeft);
    assert_eq!(store.state.ui.input_dialog.cursor, 0);
    store.dispatch(Action::InputDialogAppend('x'));
    assert_eq!(store.state.ui.input_dialog.value, "xé");
    store.dispatch(Action::InputDialogCursorRight);
    store.dispatch(Action::InputDialogBackspace);
    assert_eq!(store.state.ui.input_dialog.value, "x");
}

#[test]
fn paste_goes_to_dialog_when_visible() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    run(&mut store, Command::OpenFile);
    set_dialog_value(&mut store, "");

    store.dispatch(Action::InsertText("a.txt\n".to_string()));

    assert_eq!(store.state.ui.input_dialog.value, "a.txt");
    assert!(store.state.session.current().text().is_empty());
}

#[test]
fn paste_normalizes_line_endings() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());

    store.dispatch(Action::InsertText("a\r\nb\rc".to_string()));

    assert_eq!(store.state.session.current().text().text(), "a\nb\nc");
}

#[test]
fn page_down_moves_by_text_area_height() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    store.dispatch(Action::InsertText("x\n".repeat(40)));
    run(&mut store, Command::CursorFileStart);
    store.dispatch(Action::SetTextAreaSize {
        width: 20,
        height: 10,
    });

    run(&mut store, Command::PageDown);

    assert_eq!(store.state.session.current().text().cursor().0, 10);
}

#[test]
fn select_tab_switches_current() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    run(&mut store, Command::NewTab);

    assert!(store.dispatch(Action::SelectTab(0)).state_changed);
    assert_eq!(store.state.session.current_index(), 0);
    assert!(!store.dispatch(Action::SelectTab(7)).state_changed);
}

#[test]
fn retyping_saved_content_clears_marker() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "ab").unwrap();
    let mut store = new_store(dir.path());
    store.dispatch(Action::OpenPath(path));
    run(&mut store, Command::CursorLineEnd);

    run(&mut store, Command::DeleteBackward);
    assert!(store.state.session.current().shows_unsaved());
    type_text(&mut store, "b");
    assert!(!store.state.session.current().shows_unsaved());
}

#[test]
fn paste_is_ignored_while_confirm_dialog_is_open() {
    let dir = tempdir().unwrap();
    let mut store = confirming_store(dir.path());
    type_text(&mut store, "draft");
    run(&mut store, Command::CloseTab);
    assert_eq!(store.state.ui.focus(), FocusTarget::ConfirmDialog);

    let result = store.dispatch(Action::InsertText("pasted".to_string()));

    assert!(!result.state_changed);
    assert_eq!(store.state.session.current().text().text(), "draft");
    assert!(store.state.ui.confirm_dialog.visible);
}

#[test]
fn paste_during_overwrite_prompt_does_not_reach_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "old").unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "new");
    store.dispatch(Action::SaveAsPath(path.clone()));

    store.dispatch(Action::InsertText("junk".to_string()));
    store.dispatch(Action::ConfirmDialogAccept);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn save_as_into_missing_directory_fails_without_creating_it() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "hello");
    let target = dir.path().join("no").join("such").join("dir").join("a.txt");

    store.dispatch(Action::SaveAsPath(target.clone()));

    assert!(!target.exists());
    assert!(!dir.path().join("no").exists());
    let buffer = store.state.session.current();
    assert_eq!(buffer.path(), None);
    assert!(!buffer.is_saved());
    assert_eq!(
        store.state.ui.notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn save_as_prompt_keeps_surrounding_spaces_in_name() {
    let dir = tempdir().unwrap();
    let mut store = new_store(dir.path());
    type_text(&mut store, "x");
    run(&mut store, Command::SaveAs);

    set_dialog_value(&mut store, " a.txt ");
    store.dispatch(Action::InputDialogAccept);

    let path = dir.path().join(" a.txt ");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x");
    assert!(!dir.path().join("a.txt").exists());
}
