use super::print::print_error;
use contacts::error::{ContactsError, Result};
use contacts::model::Contact;
use contacts::validation::{validate_email, validate_name, validate_phone, ValidationError};
use std::io::{BufRead, Write};

/// Prompt texts for one pass over the three contact fields.
pub(super) struct FieldPrompts {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub(super) const ADD_PROMPTS: FieldPrompts = FieldPrompts {
    name: "Enter name: ",
    email: "Enter email: ",
    phone: "Enter phone (10 digits or XXX-XXX-XXXX): ",
};

pub(super) const EDIT_PROMPTS: FieldPrompts = FieldPrompts {
    name: "Enter new name: ",
    email: "Enter new email: ",
    phone: "Enter new phone (10 digits or XXX-XXX-XXXX): ",
};

/// Line-oriented terminal: writes a prompt, reads one trimmed line back.
pub(super) struct Console<R, W> {
    input: R,
    pub(super) output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// End of input is reported as [`ContactsError::Interrupted`].
    pub(super) fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ContactsError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Asks for name, email and phone until all three are valid. A bad field
    /// is reported right away and the whole sequence starts over from the name.
    pub(super) fn read_contact(&mut self, prompts: &FieldPrompts) -> Result<Contact> {
        loop {
            let name = self.read_line(prompts.name)?;
            if !validate_name(&name) {
                print_error(&mut self.output, &ValidationError::EmptyName)?;
                continue;
            }

            let email = self.read_line(prompts.email)?;
            if !validate_email(&email) {
                print_error(&mut self.output, &ValidationError::InvalidEmail)?;
                continue;
            }

            let phone = self.read_line(prompts.phone)?;
            if !validate_phone(&phone) {
                print_error(&mut self.output, &ValidationError::InvalidPhone)?;
                continue;
            }

            return Ok(Contact::new(name, email, phone));
        }
    }
}
