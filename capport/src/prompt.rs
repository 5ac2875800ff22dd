//! Credential capture.
//!
//! Both prompts are plain edit buffers that commit nothing on their own:
//! typing only mutates the buffer, and the typed values cross the boundary
//! only when [`confirm`](PasswordPrompt::confirm) is called for an explicit
//! confirm gesture (the original UI's ENTER keystroke). Nothing is validated
//! here; an empty password or essid is forwarded as typed.

/// Which field of the hidden-network prompt has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Essid,
    Password,
}

/// Password prompt for a listed protected network (the essid is known).
#[derive(Debug, Default)]
pub struct PasswordPrompt {
    password: String,
}

impl PasswordPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer with the field's current text.
    pub fn input(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    /// The confirm gesture: yields the password as typed. The buffer is
    /// retained, so confirming again forwards the same value.
    pub fn confirm(&self) -> String {
        self.password.clone()
    }
}

/// Dual-field prompt for joining a hidden network.
///
/// The essid field starts focused. A confirm gesture fired from either field
/// forwards the current values of both.
#[derive(Debug)]
pub struct HiddenNetworkPrompt {
    essid: String,
    password: String,
    focus: Field,
}

impl Default for HiddenNetworkPrompt {
    fn default() -> Self {
        Self {
            essid: String::new(),
            password: String::new(),
            focus: Field::Essid,
        }
    }
}

impl HiddenNetworkPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focused(&self) -> Field {
        self.focus
    }

    /// Replaces the focused field's buffer with its current text.
    pub fn input(&mut self, text: impl Into<String>) {
        match self.focus {
            Field::Essid => self.essid = text.into(),
            Field::Password => self.password = text.into(),
        }
    }

    /// The confirm gesture, from whichever field fired it: yields both
    /// current values. Buffers are retained across repeated confirms.
    pub fn confirm(&self) -> (String, String) {
        (self.essid.clone(), self.password.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_prompt_forwards_exactly_what_was_typed() {
        let mut prompt = PasswordPrompt::new();
        prompt.input("hunter2");
        assert_eq!(prompt.confirm(), "hunter2");
    }

    #[test]
    fn password_prompt_forwards_empty_password() {
        let prompt = PasswordPrompt::new();
        assert_eq!(prompt.confirm(), "");
    }

    #[test]
    fn hidden_prompt_starts_focused_on_essid() {
        let prompt = HiddenNetworkPrompt::new();
        assert_eq!(prompt.focused(), Field::Essid);
    }

    #[test]
    fn hidden_prompt_confirm_carries_both_fields() {
        let mut prompt = HiddenNetworkPrompt::new();
        prompt.input("backoffice");
        prompt.focus(Field::Password);
        prompt.input("s3cret");
        // Confirm fired from the password field still carries the essid.
        assert_eq!(prompt.confirm(), ("backoffice".into(), "s3cret".into()));
    }

    #[test]
    fn hidden_prompt_forwards_empty_essid_unchanged() {
        let mut prompt = HiddenNetworkPrompt::new();
        prompt.focus(Field::Password);
        prompt.input("s3cret");
        assert_eq!(prompt.confirm(), ("".into(), "s3cret".into()));
    }

    #[test]
    fn hidden_prompt_retains_values_across_confirms() {
        let mut prompt = HiddenNetworkPrompt::new();
        prompt.input("backoffice");
        let first = prompt.confirm();
        let second = prompt.confirm();
        assert_eq!(first, second);
    }
}
