//! Application state and handlers
//!
//! All storage interaction lives here so the screen logic can be
//! exercised against the in-memory store without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use keyhold_core::{CredentialKey, CredentialStore};

/// Label text shown when nothing is stored
pub const PLACEHOLDER: &str = "Keychain";

/// A blocking modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    /// The one user-visible error: saving an empty password
    fn empty_password() -> Self {
        Self {
            title: "Error".to_string(),
            message: "Empty Password".to_string(),
        }
    }
}

/// Application state
pub struct App {
    /// Storage backend, constructed by the caller
    store: Box<dyn CredentialStore>,
    /// The one credential this screen manages
    key: CredentialKey,
    /// Current contents of the password input field
    pub input: String,
    /// Label reflecting the stored credential
    pub label: String,
    /// Open modal dialog, if any
    pub dialog: Option<Dialog>,
}

impl App {
    /// Create the app over a storage backend and show the stored state
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        let mut app = Self {
            store,
            key: CredentialKey::default(),
            input: String::new(),
            label: String::new(),
            dialog: None,
        };
        app.refresh_label();
        app
    }

    /// Name of the active storage backend, for display
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Handle a key press. Returns `false` when the app should exit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        // The dialog is modal: it swallows everything but its dismiss keys
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return true;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => false,
                KeyCode::Char('d') => {
                    self.delete();
                    true
                }
                _ => true,
            };
        }

        match key.code {
            KeyCode::Esc => false,
            KeyCode::Enter => {
                self.save();
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            _ => true,
        }
    }

    /// Save the current input, or raise the empty-password dialog
    pub fn save(&mut self) {
        if self.input.is_empty() {
            self.dialog = Some(Dialog::empty_password());
            return;
        }

        if let Err(e) = self.store.save(&self.key, self.input.as_bytes()) {
            warn!("Failed to save credential: {}", e);
        }
        self.refresh_label();
    }

    /// Delete the stored credential; deleting nothing is a no-op
    pub fn delete(&mut self) {
        if let Err(e) = self.store.delete(&self.key) {
            warn!("Failed to delete credential: {}", e);
        }
        self.refresh_label();
    }

    /// Re-read the stored credential into the label
    pub fn refresh_label(&mut self) {
        let secret = match self.store.read(&self.key) {
            Ok(Some(secret)) => secret,
            Ok(None) => {
                self.label = PLACEHOLDER.to_string();
                return;
            }
            Err(e) => {
                warn!("Failed to read credential: {}", e);
                self.label = PLACEHOLDER.to_string();
                return;
            }
        };

        match secret.into_string() {
            Ok(text) => self.label = text,
            Err(_) => {
                warn!("Stored credential is not valid UTF-8");
                self.label = PLACEHOLDER.to_string();
            }
        }
    }
}
