//! Editable single-page forms: field lists, focus and per-field errors.

use std::fmt;

use crate::error::FieldErrors;

/// A form the terminal can edit field by field.
///
/// Text fields hand out their buffer through `text_mut`. Choice and toggle
/// fields return `None` there and change through `cycle` instead.
pub trait Form {
    type Field: Copy + PartialEq + fmt::Debug;

    /// The fields currently shown, in focus order.
    fn fields(&self) -> Vec<Self::Field>;

    /// Stable key used to look the field up in [`FieldErrors`].
    fn key(&self, field: Self::Field) -> &'static str;

    fn label(&self, field: Self::Field) -> &'static str;

    fn is_choice(&self, field: Self::Field) -> bool;

    fn value(&self, field: Self::Field) -> String;

    fn text_mut(&mut self, field: Self::Field) -> Option<&mut String>;

    fn cycle(&mut self, field: Self::Field, forward: bool);
}

/// A form plus the terminal state around it.
#[derive(Debug, Clone)]
pub struct FormState<F> {
    pub form: F,
    pub focus: usize,
    pub errors: FieldErrors,
}

impl<F: Form> FormState<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            focus: 0,
            errors: FieldErrors::new(),
        }
    }

    pub fn focused_field(&self) -> Option<F::Field> {
        self.form.fields().get(self.focus).copied()
    }

    /// Error message for `field` from the last failed submit.
    pub fn error(&self, field: F::Field) -> Option<&str> {
        self.errors.get(self.form.key(field))
    }

    /// Moves focus to the first field that failed, if any.
    pub fn focus_first_error(&mut self) {
        let fields = self.form.fields();
        if let Some(index) = fields
            .iter()
            .position(|field| self.errors.get(self.form.key(*field)).is_some())
        {
            self.focus = index;
        }
    }
}

/// Keyboard editing of whichever form is on screen.
pub trait FormInput {
    fn input(&mut self, c: char);
    fn backspace(&mut self);
    fn cycle(&mut self, forward: bool);
    fn focus_next(&mut self);
    fn focus_previous(&mut self);
}

impl<F: Form> FormInput for FormState<F> {
    fn input(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            match self.form.text_mut(field) {
                Some(text) => text.push(c),
                // Space flips toggles and steps through choices.
                None if c == ' ' => self.form.cycle(field, true),
                None => {}
            }
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            if let Some(text) = self.form.text_mut(field) {
                text.pop();
            }
        }
    }

    fn cycle(&mut self, forward: bool) {
        if let Some(field) = self.focused_field() {
            self.form.cycle(field, forward);
        }
    }

    fn focus_next(&mut self) {
        let count = self.form.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    fn focus_previous(&mut self) {
        let count = self.form.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }
}

pub(crate) fn step_index(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    }
}

/// Next entry of `options` after `current`, wrapping around.
pub(crate) fn cycle_str(
    current: Option<&'static str>,
    options: &[&'static str],
    forward: bool,
) -> Option<&'static str> {
    let position = current.and_then(|value| options.iter().position(|o| *o == value));
    Some(options[step_index(position, options.len(), forward)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[derive(Debug, Default)]
    struct Contact {
        name: String,
        urgent: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ContactField {
        Name,
        Urgent,
    }

    impl Form for Contact {
        type Field = ContactField;

        fn fields(&self) -> Vec<ContactField> {
            vec![ContactField::Name, ContactField::Urgent]
        }

        fn key(&self, field: ContactField) -> &'static str {
            match field {
                ContactField::Name => "name",
                ContactField::Urgent => "urgent",
            }
        }

        fn label(&self, field: ContactField) -> &'static str {
            self.key(field)
        }

        fn is_choice(&self, field: ContactField) -> bool {
            field == ContactField::Urgent
        }

        fn value(&self, field: ContactField) -> String {
            match field {
                ContactField::Name => self.name.clone(),
                ContactField::Urgent => self.urgent.to_string(),
            }
        }

        fn text_mut(&mut self, field: ContactField) -> Option<&mut String> {
            match field {
                ContactField::Name => Some(&mut self.name),
                ContactField::Urgent => None,
            }
        }

        fn cycle(&mut self, field: ContactField, _forward: bool) {
            if field == ContactField::Urgent {
                self.urgent = !self.urgent;
            }
        }
    }

    #[test]
    fn typing_goes_to_the_focused_text_field() {
        let mut state = FormState::new(Contact::default());
        state.input('A');
        state.input('l');
        state.backspace();
        assert_eq!(state.form.name, "A");

        state.focus_next();
        state.input('x');
        assert_eq!(state.form.name, "A");
        state.input(' ');
        assert!(state.form.urgent);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut state = FormState::new(Contact::default());
        state.focus_previous();
        assert_eq!(state.focused_field(), Some(ContactField::Urgent));
        state.focus_next();
        assert_eq!(state.focused_field(), Some(ContactField::Name));
    }

    #[test]
    fn focus_jumps_to_first_error() {
        let mut state = FormState::new(Contact::default());
        state.errors.push(FieldError::new("urgent", "pick one"));
        state.focus_first_error();
        assert_eq!(state.focus, 1);
        assert_eq!(state.error(ContactField::Urgent), Some("pick one"));
    }

    #[test]
    fn cycling_strings_wraps() {
        let options = ["a", "b", "c"];
        assert_eq!(cycle_str(None, &options, true), Some("a"));
        assert_eq!(cycle_str(None, &options, false), Some("c"));
        assert_eq!(cycle_str(Some("c"), &options, true), Some("a"));
    }
}
