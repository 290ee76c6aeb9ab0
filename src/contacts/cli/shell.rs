use super::print::{print_contacts, print_error, print_menu, print_messages};
use super::prompt::{Console, ADD_PROMPTS, EDIT_PROMPTS};
use super::INTERRUPTED_MESSAGE;
use contacts::api::{parse_index, CmdMessage, ContactsApi};
use contacts::error::{ContactsError, Result};
use contacts::index::DisplayIndex;
use contacts::store::DataStore;
use std::io::{BufRead, Write};
use std::str::FromStr;

const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Edit,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "list" | "display" => Ok(MenuChoice::Display),
            "2" | "add" => Ok(MenuChoice::Add),
            "3" | "edit" => Ok(MenuChoice::Edit),
            "4" | "delete" => Ok(MenuChoice::Delete),
            "5" | "exit" | "quit" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu choice: {}", other)),
        }
    }
}

/// How a session ended. Both are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    Interrupted,
}

/// The menu loop. Every operation re-reads the store, so nothing is cached
/// between iterations.
pub struct Shell<S: DataStore, R, W> {
    api: ContactsApi<S>,
    console: Console<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: ContactsApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            console: Console::new(input, output),
        }
    }

    /// Initializes the store, then serves the menu until the user exits or
    /// input ends. Only unrecoverable errors are returned.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let init = self.api.init()?;
        print_messages(&mut self.console.output, &init.messages)?;

        loop {
            match self.step() {
                Ok(Some(end)) => return Ok(end),
                Ok(None) => {}
                Err(ContactsError::Interrupted) => {
                    writeln!(self.console.output, "\n{}", INTERRUPTED_MESSAGE)?;
                    return Ok(SessionEnd::Interrupted);
                }
                Err(e) if e.is_recoverable() => print_error(&mut self.console.output, &e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Option<SessionEnd>> {
        print_menu(&mut self.console.output)?;
        let input = self.console.read_line(CHOICE_PROMPT)?;

        match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Display) => self.display()?,
            Ok(MenuChoice::Add) => self.add()?,
            Ok(MenuChoice::Edit) => self.edit()?,
            Ok(MenuChoice::Delete) => self.delete()?,
            Ok(MenuChoice::Exit) => {
                writeln!(self.console.output, "Goodbye!")?;
                return Ok(Some(SessionEnd::Exited));
            }
            Err(_) => print_error(&mut self.console.output, &INVALID_CHOICE)?,
        }
        Ok(None)
    }

    fn display(&mut self) -> Result<()> {
        let result = self.api.list_contacts()?;
        if !result.listed_contacts.is_empty() {
            print_contacts(&mut self.console.output, &result.listed_contacts)?;
        }
        print_messages(&mut self.console.output, &result.messages)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let contact = self.console.read_contact(&ADD_PROMPTS)?;
        let result = self.api.add_contact(contact)?;
        print_messages(&mut self.console.output, &result.messages)?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let Some(index) = self.select("edit")? else {
            return Ok(());
        };
        let contact = self.console.read_contact(&EDIT_PROMPTS)?;
        let result = self.api.edit_contact(index, contact)?;
        print_messages(&mut self.console.output, &result.messages)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(index) = self.select("delete")? else {
            return Ok(());
        };
        let result = self.api.delete_contact(index)?;
        print_messages(&mut self.console.output, &result.messages)?;
        Ok(())
    }

    /// Shows the listing and asks which entry to `verb`. `None` means there
    /// was nothing to pick from. Bad input is an error and is not re-asked.
    fn select(&mut self, verb: &str) -> Result<Option<DisplayIndex>> {
        let listed = self.api.list_contacts()?.listed_contacts;
        if listed.is_empty() {
            let message = CmdMessage::warning(format!("No contacts to {}.", verb));
            print_messages(&mut self.console.output, &[message])?;
            return Ok(None);
        }
        print_contacts(&mut self.console.output, &listed)?;

        let input = self
            .console
            .read_line(&format!("Enter the contact number to {}: ", verb))?;
        let index = parse_index(&input)?;
        index.resolve(listed.len())?;
        Ok(Some(index))
    }

    #[cfg(test)]
    fn api(&self) -> &ContactsApi<S> {
        &self.api
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.console.output
    }
}
