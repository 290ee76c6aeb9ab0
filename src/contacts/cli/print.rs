use colored::Colorize;
use contacts::api::{CmdMessage, MessageLevel};
use contacts::index::DisplayContact;
use std::fmt::Display;
use std::io::{self, Write};

const MENU: &str = "\n=== Contact Manager ===
1. Display contacts
2. Add a contact
3. Edit a contact
4. Delete a contact
5. Exit";

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", MENU.bold())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(format!("Error: {}", err))])
}

/// Rows are left uncolored so they read the same piped or on a terminal.
pub(super) fn print_contacts<W: Write>(out: &mut W, contacts: &[DisplayContact]) -> io::Result<()> {
    writeln!(out, "\nContact List:")?;
    for dc in contacts {
        writeln!(out, "{}. {}", dc.index, dc.contact)?;
    }
    Ok(())
}
