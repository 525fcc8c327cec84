//! Headless application core (state/action/effect).

pub mod action;
pub mod buffer;
pub mod effect;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use buffer::{Buffer, CursorMotion, SaveOutcome, Viewport};
pub use effect::Effect;
pub use session::Session;
pub use state::{
    AppState, ConfirmDialogState, FocusTarget, InputDialogKind, InputDialogState, Notification,
    NotificationKind, PendingAction, TextAreaSize, UiState,
};
pub use store::{DispatchResult, Store};
