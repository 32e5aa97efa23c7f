use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::common::{CdInvError, Result};
use crate::inventory::{Inventory, Record};
use crate::storage::InventoryFile;

use super::MenuCommand;

const MENU: &str = "\
Menu

[l] load Inventory from file
[a] Add CD
[i] Display Current Inventory
[d] delete CD from Inventory
[s] Save Inventory to file
[x] exit
";

/// Whether the menu loop keeps going after a command.
///
/// `Quit` covers both the exit command and input running out partway
/// through a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive menu session driving an inventory against its data file.
///
/// Input and output are generic so tests can run a whole session from a
/// byte slice and inspect everything it printed; `main` plugs in locked
/// stdin and stdout.
///
/// The session owns the in-memory inventory. Mutations stay in memory
/// until the user explicitly saves; the data file is only touched by the
/// load and save commands and by the initial load when the session starts.
pub struct Session<R, W> {
    input: R,
    output: W,
    file: InventoryFile,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty inventory over the given data file.
    pub fn new(input: R, output: W, file: InventoryFile) -> Self {
        Self {
            input,
            output,
            file,
            inventory: Inventory::new(),
        }
    }

    /// Read-only view of the session's in-memory inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// The saved inventory is loaded first so the session starts from the
    /// last persisted state.
    pub fn run(&mut self) -> Result<()> {
        self.reload()?;
        loop {
            write!(self.output, "{}", MENU)?;
            let command = match self.prompt_command()? {
                Some(command) => command,
                None => return Ok(()),
            };
            let flow = match command {
                MenuCommand::Exit => Flow::Quit,
                MenuCommand::Load => self.cmd_load()?,
                MenuCommand::Add => self.cmd_add()?,
                MenuCommand::List => {
                    self.show_inventory()?;
                    Flow::Continue
                }
                MenuCommand::Delete => self.cmd_delete()?,
                MenuCommand::Save => self.cmd_save()?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Replaces the in-memory inventory with the data file contents.
    ///
    /// A missing file means a fresh start; any other load failure is
    /// reported and leaves the inventory empty. Neither ends the session.
    fn reload(&mut self) -> Result<()> {
        self.inventory.clear();
        match self.file.load() {
            Ok(inventory) => self.inventory = inventory,
            Err(CdInvError::FileNotFound(path)) => {
                writeln!(
                    self.output,
                    "No inventory file at {}; starting with an empty inventory.",
                    path.display()
                )?;
            }
            Err(e) => {
                warn!("failed to load {}: {}", self.file.path().display(), e);
                writeln!(self.output, "Could not read the inventory file: {}", e)?;
                writeln!(self.output, "Continuing with an empty inventory.")?;
            }
        }
        Ok(())
    }

    /// Asks for confirmation, then reloads the inventory from the file.
    fn cmd_load(&mut self) -> Result<Flow> {
        writeln!(
            self.output,
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
        )?;
        let answer = match self
            .prompt("Type 'yes' to continue and reload from file, anything else to cancel: ")?
        {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        };
        if answer.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "Reloading...")?;
            self.reload()?;
        } else {
            writeln!(self.output, "Canceling... Inventory data NOT reloaded.")?;
        }
        self.show_inventory()?;
        Ok(Flow::Continue)
    }

    /// Gathers the three record fields and appends the new record.
    fn cmd_add(&mut self) -> Result<Flow> {
        writeln!(self.output, "Please enter a new CD ID, Title and Artist")?;
        let id = match self.prompt_id("Enter ID: ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        let title = match self.prompt("What is the CD's title? ")? {
            Some(title) => title,
            None => return Ok(Flow::Quit),
        };
        let artist = match self.prompt("What is the Artist's name? ")? {
            Some(artist) => artist,
            None => return Ok(Flow::Quit),
        };

        self.inventory.add(Record::new(id, title, artist));
        debug!("added record {}", id);
        self.show_inventory()?;
        Ok(Flow::Continue)
    }

    /// Asks which ID to delete and removes the first match.
    fn cmd_delete(&mut self) -> Result<Flow> {
        self.show_inventory()?;
        let id = match self.prompt_id("Which ID would you like to delete? ")? {
            Some(id) => id,
            None => return Ok(Flow::Quit),
        };
        match self.inventory.delete(id) {
            Some(_) => {
                debug!("deleted record {}", id);
                writeln!(self.output, "The CD was removed")?;
            }
            None => writeln!(self.output, "Could not find this CD!")?,
        }
        self.show_inventory()?;
        Ok(Flow::Continue)
    }

    /// Asks for confirmation, then writes the inventory to the data file.
    ///
    /// A failed write is reported to the user and the session carries on;
    /// the in-memory inventory is unaffected either way.
    fn cmd_save(&mut self) -> Result<Flow> {
        self.show_inventory()?;
        let answer = match self.prompt("Save this inventory to file? [y/n] ")? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        };
        if answer.eq_ignore_ascii_case("y") {
            match self.file.save(&self.inventory) {
                Ok(()) => {
                    writeln!(
                        self.output,
                        "Inventory saved to {}.",
                        self.file.path().display()
                    )?;
                }
                Err(e) => {
                    warn!("failed to save {}: {}", self.file.path().display(), e);
                    writeln!(self.output, "Could not save the inventory: {}", e)?;
                }
            }
        } else {
            writeln!(self.output, "The inventory was NOT saved to file.")?;
        }
        Ok(Flow::Continue)
    }

    /// Prints the inventory table between its banner lines.
    fn show_inventory(&mut self) -> Result<()> {
        writeln!(self.output, "======= The Current Inventory: =======")?;
        writeln!(self.output, "ID\tCD Title (by: Artist)")?;
        for record in self.inventory.records() {
            writeln!(self.output, "{}", record)?;
        }
        writeln!(self.output, "======================================")?;
        Ok(())
    }

    /// Re-prompts until the user types one of the six menu letters, then
    /// echoes a blank line for layout. `None` means input ended.
    fn prompt_command(&mut self) -> Result<Option<MenuCommand>> {
        loop {
            let line = match self
                .prompt("Which operation would you like to perform? [l, a, i, d, s or x]: ")?
            {
                Some(line) => line,
                None => return Ok(None),
            };
            if let Some(command) = MenuCommand::parse(&line) {
                writeln!(self.output)?;
                return Ok(Some(command));
            }
        }
    }

    /// Re-prompts until the user supplies a whole number. `None` means
    /// input ended.
    fn prompt_id(&mut self, text: &str) -> Result<Option<u32>> {
        loop {
            let line = match self.prompt(text)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<u32>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => {
                    writeln!(self.output, "That is not an integer. Please input an integer...")?;
                }
            }
        }
    }

    /// Writes a prompt, flushes it, and reads one trimmed input line.
    /// `None` means input ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
