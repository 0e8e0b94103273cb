//! Line-oriented operator shell: numbered menu, prompts and rendering.
//!
//! The shell owns the session's [`ParcelStore`] and talks to the operator
//! through any `BufRead`/`Write` pair, so tests can drive it with a
//! `Cursor` and a `Vec<u8>`. Store errors are always printed and the loop
//! continues; only I/O failures end the session early.

pub mod render;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::{Config, DisplayConfig, OutputFormat};
use crate::error::ParcelError;
use crate::i18n;
use crate::model::parcel::Parcel;
use crate::model::status::Status;
use crate::store::{ParcelStore, SortField};

/// Menu entries, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    UpdateStatus,
    Search,
    Sort,
    Pop,
    Display,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::UpdateStatus,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::Pop,
        MenuChoice::Display,
        MenuChoice::Exit,
    ];

    /// Parse a menu selection such as `"3"`. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Add => i18n::menu_add(),
            Self::Delete => i18n::menu_delete(),
            Self::UpdateStatus => i18n::menu_update(),
            Self::Search => i18n::menu_search(),
            Self::Sort => i18n::menu_sort(),
            Self::Pop => i18n::menu_pop(),
            Self::Display => i18n::menu_display(),
            Self::Exit => i18n::menu_exit(),
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Presentation settings for a session.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Status applied when the operator leaves the status prompt empty.
    pub default_status: Status,
    /// Listing format.
    pub output: OutputFormat,
    /// Table column widths.
    pub layout: DisplayConfig,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            default_status: Status::Pending,
            output: OutputFormat::Table,
            layout: DisplayConfig::default(),
        }
    }
}

impl ShellOptions {
    /// Derive options from the loaded configuration.
    ///
    /// An invalid `shell.default_status` is logged and replaced by Pending.
    pub fn from_config(config: &Config) -> Self {
        let default_status = config
            .shell
            .default_status
            .parse::<Status>()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Bad default_status in config, using Pending");
                Status::Pending
            });
        Self {
            default_status,
            output: config.shell.output,
            layout: config.display.clone(),
        }
    }
}

/// Interactive session over one [`ParcelStore`].
pub struct Shell<R, W> {
    store: ParcelStore,
    input: R,
    output: W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: ParcelStore, input: R, output: W, options: ShellOptions) -> Self {
        Self {
            store,
            input,
            output,
            options,
        }
    }

    pub fn store(&self) -> &ParcelStore {
        &self.store
    }

    /// End the session, handing back the store and the output sink.
    pub fn into_parts(self) -> (ParcelStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until Exit is chosen or the input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line(i18n::prompt_choice())? else {
                break;
            };
            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "{}", i18n::msg_invalid_option())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "{}", i18n::msg_exiting())?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::Add => self.cmd_add(),
            MenuChoice::Delete => self.cmd_delete(),
            MenuChoice::UpdateStatus => self.cmd_update_status(),
            MenuChoice::Search => self.cmd_search(),
            MenuChoice::Sort => self.cmd_sort(),
            MenuChoice::Pop => self.cmd_pop(),
            MenuChoice::Display => self.cmd_display(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", i18n::menu_title())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    // ── Commands ─────────────────────────────────────────────────

    fn cmd_add(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.read_line(i18n::prompt_parcel_id())? else {
            return Ok(Flow::Exit);
        };
        let Some(sender) = self.read_line(i18n::prompt_sender())? else {
            return Ok(Flow::Exit);
        };
        let Some(receiver) = self.read_line(i18n::prompt_receiver())? else {
            return Ok(Flow::Exit);
        };
        let Some(status) = self.read_status()? else {
            return Ok(Flow::Exit);
        };

        let parcel = Parcel::with_status(id, sender, receiver, status);
        let id = parcel.id().to_string();
        match self.store.insert(parcel) {
            Ok(()) => writeln!(self.output, "{}: {id}", i18n::msg_parcel_added())?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_delete(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.read_line(i18n::prompt_delete_id())? else {
            return Ok(Flow::Exit);
        };
        match self.store.delete(&id) {
            Ok(removed) => writeln!(
                self.output,
                "{}: {}",
                i18n::msg_parcel_removed(),
                removed.id()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_update_status(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.read_line(i18n::prompt_update_id())? else {
            return Ok(Flow::Exit);
        };
        let Some(status) = self.read_line(i18n::prompt_new_status())? else {
            return Ok(Flow::Exit);
        };
        match self.store.update_status(&id, &status) {
            Ok(()) => writeln!(self.output, "{}: {id}", i18n::msg_status_updated())?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_search(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.read_line(i18n::prompt_search_id())? else {
            return Ok(Flow::Exit);
        };
        match self.store.search(&id) {
            Ok(parcel) => render::write_found(&mut self.output, parcel, self.options.output)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_sort(&mut self) -> anyhow::Result<Flow> {
        let Some(criterion) = self.read_line(i18n::prompt_sort_criteria())? else {
            return Ok(Flow::Exit);
        };
        match self.store.sort_by_name(&criterion) {
            Ok(Some(sorted)) => {
                if self.options.output == OutputFormat::Table {
                    writeln!(
                        self.output,
                        "{} {}:",
                        i18n::msg_sorted_by(),
                        criterion.trim().to_lowercase()
                    )?;
                }
                render::write_parcels(
                    &mut self.output,
                    sorted,
                    self.options.output,
                    &self.options.layout,
                )?;
            }
            Ok(None) => writeln!(self.output, "{}", i18n::msg_no_sorting())?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_pop(&mut self) -> anyhow::Result<Flow> {
        match self.store.pop() {
            Ok(parcel) => writeln!(
                self.output,
                "{}: {}",
                i18n::msg_last_removed(),
                parcel.id()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cmd_display(&mut self) -> anyhow::Result<Flow> {
        match self.store.list_all() {
            Ok(parcels) => render::write_parcels(
                &mut self.output,
                parcels,
                self.options.output,
                &self.options.layout,
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    // ── Input / output helpers ───────────────────────────────────

    /// Prompt and read one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Ask for a status until a valid one is typed.
    ///
    /// An empty answer selects the configured default.
    fn read_status(&mut self) -> anyhow::Result<Option<Status>> {
        let prompt = format!(
            "{} [{}]: ",
            i18n::prompt_status(),
            self.options.default_status
        );
        let mut answer = self.read_line(&prompt)?;
        loop {
            let Some(text) = answer else {
                return Ok(None);
            };
            if text.is_empty() {
                return Ok(Some(self.options.default_status));
            }
            match text.parse::<Status>() {
                Ok(status) => return Ok(Some(status)),
                Err(e) => self.report(&e)?,
            }
            answer = self.read_line(i18n::prompt_valid_status())?;
        }
    }

    /// Print a store error as an operator-facing message.
    fn report(&mut self, err: &ParcelError) -> anyhow::Result<()> {
        debug!(error = %err, "Operation failed");
        match err {
            ParcelError::InvalidStatus(_) => {
                writeln!(
                    self.output,
                    "{}: {}.",
                    i18n::err_invalid_status(),
                    Status::allowed_list()
                )?
            }
            ParcelError::NotFound(id) => {
                writeln!(self.output, "{}: {id}", i18n::err_not_found())?
            }
            ParcelError::EmptyStore => writeln!(self.output, "{}", i18n::err_list_empty())?,
            ParcelError::InvalidCriterion(_) => {
                writeln!(
                    self.output,
                    "{}: {}.",
                    i18n::err_invalid_criteria(),
                    SortField::options_list()
                )?
            }
            ParcelError::DuplicateId(id) => {
                writeln!(self.output, "{}: {id}", i18n::err_duplicate_id())?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(store: ParcelStore, script: &str) -> (ParcelStore, String) {
        let mut shell = Shell::new(
            store,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            ShellOptions::default(),
        );
        shell.run().unwrap();
        let (store, out) = shell.into_parts();
        (store, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_numbers_are_one_based() {
        assert_eq!(MenuChoice::Add.number(), 1);
        assert_eq!(MenuChoice::Pop.number(), 6);
        assert_eq!(MenuChoice::Exit.number(), 8);
    }

    #[test]
    fn test_exit_immediately() {
        let (store, out) = run_script(ParcelStore::with_examples(), "8\n");
        assert_eq!(store.len(), 3);
        assert!(out.contains("Courier Parcel Management System"));
        assert!(out.contains("6. Pop from Stack"));
        assert!(out.trim_end().ends_with("Exiting system."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = run_script(ParcelStore::new(), "");
        assert!(out.trim_end().ends_with("Exiting system."));
    }

    #[test]
    fn test_invalid_option() {
        let (_, out) = run_script(ParcelStore::new(), "42\nabc\n8\n");
        assert_eq!(out.matches("Invalid option. Try again.").count(), 2);
    }

    #[test]
    fn test_add_reprompts_invalid_status() {
        let (store, out) = run_script(ParcelStore::new(), "1\nP9\nSam\nKim\nLost\nDelivered\n8\n");
        assert!(out.contains("Invalid status. Allowed statuses"));
        assert!(out.contains("Enter a valid status: "));
        assert!(out.contains("Parcel added: P9"));
        assert_eq!(store.search("P9").unwrap().status(), Status::Delivered);
    }

    #[test]
    fn test_add_empty_status_uses_default() {
        let (store, out) = run_script(ParcelStore::new(), "1\nP9\nSam\nKim\n\n8\n");
        assert!(out.contains("Enter status [Pending]: "));
        assert_eq!(store.search("P9").unwrap().status(), Status::Pending);
    }

    #[test]
    fn test_add_duplicate_reports() {
        let (store, out) = run_script(ParcelStore::with_examples(), "1\nP001\nX\nY\n\n8\n");
        assert!(out.contains("Parcel already exists: P001"));
        assert_eq!(store.search("P001").unwrap().sender(), "Alice");
    }

    #[test]
    fn test_eof_mid_command_exits() {
        let (store, out) = run_script(ParcelStore::new(), "1\nP9\n");
        assert!(store.is_empty());
        assert!(out.trim_end().ends_with("Exiting system."));
    }
}
