//! User Prompts
//!
//! Blocking notifications and confirmations.

/// Blocking user interaction used by the controllers
pub trait Prompter {
    /// Show a message and wait until it is dismissed
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `false` means the user declined
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub use scripted::ScriptedPrompter;

#[cfg(test)]
mod scripted {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Prompter;

    /// Records every prompt; confirms unless told to decline
    #[derive(Clone, Default)]
    pub struct ScriptedPrompter {
        alerts: Rc<RefCell<Vec<String>>>,
        questions: Rc<RefCell<Vec<String>>>,
        decline: Rc<Cell<bool>>,
    }

    impl ScriptedPrompter {
        pub fn declining() -> Self {
            let p = Self::default();
            p.decline.set(true);
            p
        }

        pub fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }

        pub fn questions(&self) -> Vec<String> {
            self.questions.borrow().clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.questions.borrow_mut().push(message.to_string());
            !self.decline.get()
        }
    }
}
