// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line surface over the wall store.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use pinwall::format::{document_schema, export_file_name, note_to_json, wall_to_json};
use pinwall::interaction::next_note_position;
use pinwall::model::{ConnectionId, Note, NoteId, NotePatch, Point, Size, WallId, WallPatch};
use pinwall::query::{add_note_for_date, agenda, notes_by_date, notes_in_month, AGENDA_DAYS};
use pinwall::query::{search_notes, SearchMode};
use pinwall::store::{ConnectOutcome, FileStorage, LinkClick, WallStore, WriteDurability};

/// Pinwall - sticky-note walls kept in a single JSON document
#[derive(Debug, Parser)]
#[command(name = "pinwall")]
#[command(about = "Manage walls of sticky notes and the connections between them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Document holding every wall
    #[arg(long, global = true, env = "PINWALL_DATA", default_value = "pinwall.json")]
    pub data: PathBuf,

    /// Wall to operate on (defaults to the active wall)
    #[arg(long, global = true)]
    pub wall: Option<String>,

    /// fsync the document and its directory after every write
    #[arg(long, global = true)]
    pub durable_writes: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum SearchModeChoice {
    #[default]
    Substring,
    Regex,
    Fuzzy,
}

impl From<SearchModeChoice> for SearchMode {
    fn from(value: SearchModeChoice) -> Self {
        match value {
            SearchModeChoice::Substring => SearchMode::Substring,
            SearchModeChoice::Regex => SearchMode::Regex,
            SearchModeChoice::Fuzzy => SearchMode::Fuzzy,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List walls; the active one is marked with `*`
    Walls {
        #[arg(long)]
        json: bool,
    },
    /// Create a wall and make it active
    NewWall { name: Option<String> },
    /// Rename a wall
    RenameWall {
        #[arg(value_name = "WALL")]
        id: String,
        name: String,
    },
    /// Delete a wall and everything on it
    DeleteWall {
        #[arg(value_name = "WALL")]
        id: String,
    },
    /// Make a wall the active one
    Use {
        #[arg(value_name = "WALL")]
        id: String,
    },
    /// List the notes of a wall
    Notes {
        #[arg(long)]
        json: bool,
    },
    /// Add a note; without coordinates it goes left of the leftmost note
    AddNote {
        #[arg(long, requires = "y")]
        x: Option<f64>,
        #[arg(long, requires = "x")]
        y: Option<f64>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Change a note's text, color or date
    EditNote {
        note: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, conflicts_with = "clear_date")]
        date: Option<String>,
        #[arg(long)]
        clear_date: bool,
    },
    /// Move a note to an absolute wall position
    MoveNote {
        note: String,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Resize a note (clamped to 120..400 x 80..400)
    ResizeNote { note: String, width: f64, height: f64 },
    /// Delete a note and its connections
    DeleteNote { note: String },
    /// Copy a note next to the original
    DuplicateNote { note: String },
    /// Toggle a note's pin
    Pin { note: String },
    /// Toggle a note's checkbox
    Check { note: String },
    /// Connect two notes
    Connect { from: String, to: String },
    /// Remove a connection
    Disconnect { connection: String },
    /// Click link controls in order, as on the board
    Link {
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// Search the notes of a wall
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = SearchModeChoice::Substring)]
        mode: SearchModeChoice,
    },
    /// Dated notes: everything, one month, a 14-day agenda, or add a note for a day
    Calendar {
        /// YYYY-MM
        #[arg(long, conflicts_with_all = ["agenda", "add"])]
        month: Option<String>,
        /// Start day (YYYY-MM-DD)
        #[arg(long, conflicts_with = "add")]
        agenda: Option<String>,
        /// Add an empty note for this day (YYYY-MM-DD)
        #[arg(long)]
        add: Option<String>,
    },
    /// Write a wall as pretty JSON (`-` for stdout)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add a wall from an exported file (`-` for stdin)
    Import { input: PathBuf },
    /// Print the JSON Schema of the document
    Schema,
}

/// Main CLI application
pub struct PinwallApp {
    store: WallStore,
    wall: Option<String>,
}

impl PinwallApp {
    pub fn open(cli: &Cli) -> Self {
        let durability = if cli.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };
        let storage = FileStorage::new(cli.data.clone()).with_durability(durability);
        tracing::debug!(data = %cli.data.display(), ?durability, "opening document");
        Self {
            store: WallStore::open(storage),
            wall: cli.wall.clone(),
        }
    }

    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Walls { json } => self.walls_command(json),
            Commands::NewWall { name } => {
                let wall = self.store.create_wall(name.as_deref(), None);
                println!("{}", wall.wall_id());
                Ok(())
            }
            Commands::RenameWall { id, name } => {
                let wall_id = self.known_wall(&id)?;
                let patch = WallPatch {
                    name: Some(name),
                    theme: None,
                };
                self.store.update_wall(&wall_id, patch);
                Ok(())
            }
            Commands::DeleteWall { id } => {
                let wall_id = self.known_wall(&id)?;
                self.store.delete_wall(&wall_id);
                match self.store.active_wall_id() {
                    Some(active) => println!("active: {active}"),
                    None => println!("no walls left"),
                }
                Ok(())
            }
            Commands::Use { id } => {
                let wall_id = self.known_wall(&id)?;
                self.store.set_active_wall(Some(&wall_id));
                Ok(())
            }
            Commands::Notes { json } => self.notes_command(json),
            Commands::AddNote {
                x,
                y,
                content,
                color,
                date,
            } => self.add_note_command(x.zip(y), content, color, date),
            Commands::EditNote {
                note,
                content,
                color,
                date,
                clear_date,
            } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                let patch = NotePatch {
                    content,
                    color,
                    date: if clear_date { Some(None) } else { date.map(Some) },
                    ..NotePatch::default()
                };
                if patch.is_empty() {
                    bail!("nothing to change");
                }
                self.store.update_note(&wall_id, &note_id, patch);
                Ok(())
            }
            Commands::MoveNote { note, x, y } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                self.store.move_note(&wall_id, &note_id, Point::new(x, y));
                Ok(())
            }
            Commands::ResizeNote {
                note,
                width,
                height,
            } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                self.store
                    .resize_note(&wall_id, &note_id, Size::new(width, height));
                Ok(())
            }
            Commands::DeleteNote { note } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                self.store.delete_note(&wall_id, &note_id);
                Ok(())
            }
            Commands::DuplicateNote { note } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                let copy = self
                    .store
                    .duplicate_note(&wall_id, &note_id)
                    .ok_or_else(|| anyhow!("unknown note {note_id}"))?;
                println!("{}", copy.note_id());
                Ok(())
            }
            Commands::Pin { note } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                self.store.toggle_pin_note(&wall_id, &note_id);
                Ok(())
            }
            Commands::Check { note } => {
                let (wall_id, note_id) = self.known_note(&note)?;
                self.store.toggle_check_note(&wall_id, &note_id);
                Ok(())
            }
            Commands::Connect { from, to } => {
                let wall_id = self.target_wall()?;
                let outcome = self
                    .store
                    .add_connection(&wall_id, &NoteId::new(from)?, &NoteId::new(to)?);
                report_connect(&outcome);
                match outcome {
                    ConnectOutcome::Added(_) | ConnectOutcome::Duplicate | ConnectOutcome::SelfLoop => Ok(()),
                    ConnectOutcome::MissingWall | ConnectOutcome::MissingNote => {
                        bail!("both notes must be on wall {wall_id}")
                    }
                }
            }
            Commands::Disconnect { connection } => {
                let wall_id = self.target_wall()?;
                let connection_id = ConnectionId::new(connection)?;
                if !self.store.remove_connection(&wall_id, &connection_id) {
                    bail!("unknown connection {connection_id}");
                }
                Ok(())
            }
            Commands::Link { notes } => {
                let wall_id = self.target_wall()?;
                for raw in notes {
                    let note_id = NoteId::new(raw)?;
                    match self.store.click_link(&wall_id, &note_id) {
                        LinkClick::Pending(source) => println!("pending {source}"),
                        LinkClick::Cancelled => println!("cancelled"),
                        LinkClick::Attempted(outcome) => report_connect(&outcome),
                    }
                }
                Ok(())
            }
            Commands::Search { query, mode } => {
                let wall_id = self.target_wall()?;
                let wall = self
                    .store
                    .wall(&wall_id)
                    .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;
                for note in search_notes(wall.notes(), &query, mode.into())? {
                    print_note(note);
                }
                Ok(())
            }
            Commands::Calendar { month, agenda, add } => {
                self.calendar_command(month.as_deref(), agenda.as_deref(), add.as_deref())
            }
            Commands::Export { output } => self.export_command(output),
            Commands::Import { input } => self.import_command(&input),
            Commands::Schema => {
                println!("{}", serde_json::to_string_pretty(&document_schema())?);
                Ok(())
            }
        }
    }

    fn walls_command(&self, json: bool) -> Result<()> {
        if json {
            let walls: Vec<_> = self.store.walls().iter().map(wall_to_json).collect();
            println!("{}", serde_json::to_string_pretty(&walls)?);
            return Ok(());
        }
        let active = self.store.active_wall_id();
        for wall in self.store.walls() {
            let marker = if Some(wall.wall_id()) == active { '*' } else { ' ' };
            println!(
                "{marker} {}\t{}\t{} notes\t{} connections",
                wall.wall_id(),
                wall.name(),
                wall.notes().len(),
                wall.connections().len()
            );
        }
        Ok(())
    }

    fn notes_command(&self, json: bool) -> Result<()> {
        let wall_id = self.target_wall()?;
        let wall = self
            .store
            .wall(&wall_id)
            .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;
        if json {
            let notes: Vec<_> = wall.notes().iter().map(note_to_json).collect();
            println!("{}", serde_json::to_string_pretty(&notes)?);
            return Ok(());
        }
        for note in wall.notes() {
            print_note(note);
        }
        for conn in wall.connections() {
            println!(
                "{}\t{} -> {}",
                conn.connection_id(),
                conn.from_note_id(),
                conn.to_note_id()
            );
        }
        Ok(())
    }

    fn add_note_command(
        &mut self,
        at: Option<(f64, f64)>,
        content: Option<String>,
        color: Option<String>,
        date: Option<String>,
    ) -> Result<()> {
        let wall_id = self.target_wall()?;
        let position = match at {
            Some((x, y)) => Point::new(x, y),
            None => self
                .store
                .wall(&wall_id)
                .map(next_note_position)
                .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?,
        };
        let note = self
            .store
            .add_note(&wall_id, position, color.as_deref(), date.as_deref())
            .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;
        if let Some(content) = content {
            let patch = NotePatch {
                content: Some(content),
                ..NotePatch::default()
            };
            self.store.update_note(&wall_id, note.note_id(), patch);
        }
        println!("{}", note.note_id());
        Ok(())
    }

    fn calendar_command(&mut self, month: Option<&str>, start: Option<&str>, add: Option<&str>) -> Result<()> {
        let wall_id = self.target_wall()?;

        if let Some(raw) = add {
            let day = parse_day(raw)?;
            let note = add_note_for_date(&mut self.store, &wall_id, day)
                .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;
            println!("{}", note.note_id());
            return Ok(());
        }

        let wall = self
            .store
            .wall(&wall_id)
            .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;

        if let Some(raw) = start {
            for day in agenda(wall.notes(), parse_day(raw)?, AGENDA_DAYS) {
                println!("{}", day.date.format("%Y-%m-%d %a"));
                for note in day.notes {
                    println!("  {}\t{}", note.note_id(), first_line(note.content()));
                }
            }
            return Ok(());
        }

        let grouped = match month {
            Some(raw) => {
                let first = parse_day(&format!("{}-01", raw.trim()))
                    .with_context(|| format!("invalid month {raw:?}, expected YYYY-MM"))?;
                notes_in_month(wall.notes(), first.year(), first.month())
            }
            None => notes_by_date(wall.notes()),
        };
        for (day, notes) in grouped {
            println!("{day}");
            for note in notes {
                println!("  {}\t{}", note.note_id(), first_line(note.content()));
            }
        }
        Ok(())
    }

    fn export_command(&self, output: Option<PathBuf>) -> Result<()> {
        let wall_id = self.target_wall()?;
        let wall = self
            .store
            .wall(&wall_id)
            .ok_or_else(|| anyhow!("unknown wall {wall_id}"))?;
        let json = self.store.export_wall_as_json(&wall_id);
        if json.is_empty() {
            bail!("cannot export wall {wall_id}");
        }

        let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(wall.name())));
        if path.as_os_str() == "-" {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
            return Ok(());
        }
        fs::write(&path, format!("{json}\n"))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("{}", path.display());
        Ok(())
    }

    fn import_command(&mut self, input: &Path) -> Result<()> {
        let json = if input.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?
        };

        match self.store.try_import_wall(&json) {
            Ok(wall) => {
                println!("{}\t{}", wall.wall_id(), wall.name());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, input = %input.display(), "import rejected");
                Err(anyhow!(err.user_message()))
            }
        }
    }

    fn target_wall(&self) -> Result<WallId> {
        match &self.wall {
            Some(raw) => self.known_wall(raw),
            None => self
                .store
                .active_wall_id()
                .cloned()
                .ok_or_else(|| anyhow!("no active wall; create one with `pinwall new-wall`")),
        }
    }

    fn known_wall(&self, raw: &str) -> Result<WallId> {
        let wall_id = WallId::new(raw)?;
        if self.store.wall(&wall_id).is_none() {
            bail!("unknown wall {wall_id}");
        }
        Ok(wall_id)
    }

    fn known_note(&self, raw: &str) -> Result<(WallId, NoteId)> {
        let wall_id = self.target_wall()?;
        let note_id = NoteId::new(raw)?;
        if self.store.note(&wall_id, &note_id).is_none() {
            bail!("unknown note {note_id} on wall {wall_id}");
        }
        Ok((wall_id, note_id))
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))
}

fn report_connect(outcome: &ConnectOutcome) {
    match outcome {
        ConnectOutcome::Added(id) => println!("connected {id}"),
        ConnectOutcome::SelfLoop => println!("not connected: a note cannot link to itself"),
        ConnectOutcome::Duplicate => println!("not connected: already connected"),
        ConnectOutcome::MissingWall => println!("not connected: unknown wall"),
        ConnectOutcome::MissingNote => println!("not connected: unknown note"),
    }
}

fn print_note(note: &Note) {
    let mut flags = Vec::new();
    if note.is_pinned() {
        flags.push("pinned".to_owned());
    }
    if note.is_checked() {
        flags.push("checked".to_owned());
    }
    if let Some(date) = note.date() {
        flags.push(date.to_string());
    }
    println!(
        "{}\t({}, {})\t{}x{}\t{}\t{}\t{}",
        note.note_id(),
        note.x(),
        note.y(),
        note.size().width,
        note.size().height,
        note.color(),
        flags.join(","),
        first_line(note.content())
    );
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or_default()
}
