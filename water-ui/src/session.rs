//! Interactive what-if session.
//!
//! Reads one command per line and re-renders the whole report after every
//! change, the way the dashboard recomputed on each widget interaction.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};
use water_core::trend::DemoTrendGenerator;
use water_core::{CropType, InvalidInput, IrrigationMethod, SoilType};

use crate::cli::OutputFormat;
use crate::logging;
use crate::report::Report;
use crate::state::FarmForm;
use crate::utils::{ParseNumberError, parse_number};

pub const HELP: &str = "\
Commands:
  crop <corn|wheat|soybeans|rice|cotton>
  area <acres>            (1 - 2500)
  hectares <hectares>
  method <drip|sprinkler|flood>
  soil <sandy|loamy|clay>
  price <dollars per cubic meter>   (0.1 - 10.0)
  log <filter>            change the log level (e.g. debug, water_ui=trace)
  show                    re-render the report
  help                    this text
  quit                    leave the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Crop(CropType),
    Area(f64),
    Hectares(f64),
    Method(IrrigationMethod),
    Soil(SoilType),
    Price(f64),
    LogLevel(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingValue(&'static str),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error(transparent)]
    InvalidNumber(#[from] ParseNumberError),

    #[error("cannot change log level: {0}")]
    LogLevel(String),
}

fn require<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, CommandError> {
    value.ok_or(CommandError::MissingValue(name))
}

/// Parses a single input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, value) = match line.split_once(char::is_whitespace) {
        Some((name, value)) => (name, Some(value.trim())),
        None => (line, None),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "crop" => Command::Crop(require("crop", value)?.parse()?),
        "area" => Command::Area(parse_number(require("area", value)?)?),
        "hectares" => Command::Hectares(parse_number(require("hectares", value)?)?),
        "method" => Command::Method(require("method", value)?.parse()?),
        "soil" => Command::Soil(require("soil", value)?.parse()?),
        "price" => Command::Price(parse_number(require("price", value)?)?),
        "log" => Command::LogLevel(require("log", value)?.to_string()),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// State of a running interactive session.
pub struct Session {
    form: FarmForm,
    trend: DemoTrendGenerator,
    today: NaiveDate,
    format: OutputFormat,
}

impl Session {
    pub fn new(
        form: FarmForm,
        trend: DemoTrendGenerator,
        today: NaiveDate,
        format: OutputFormat,
    ) -> Self {
        Self {
            form,
            trend,
            today,
            format,
        }
    }

    pub fn form(&self) -> &FarmForm {
        &self.form
    }

    /// Applies a command. Returns `Ok(false)` when the session should end.
    pub fn apply(
        &mut self,
        command: &Command,
    ) -> Result<bool, CommandError> {
        match command {
            Command::Crop(crop) => self.form.set_crop(*crop),
            Command::Area(acres) => {
                self.form.set_area_acres(*acres);
            }
            Command::Hectares(hectares) => {
                self.form.set_area_hectares(*hectares);
            }
            Command::Method(method) => self.form.set_method(*method),
            Command::Soil(soil) => self.form.set_soil(*soil),
            Command::Price(price) => {
                self.form.set_water_cost(*price);
            }
            Command::LogLevel(filter) => logging::set_log_level(filter)
                .map_err(|e| CommandError::LogLevel(e.to_string()))?,
            Command::Show | Command::Help => {}
            Command::Quit => return Ok(false),
        }
        debug!(?command, input = ?self.form.input(), "applied command");
        Ok(true)
    }

    fn render(
        &mut self,
        out: &mut impl Write,
    ) -> std::io::Result<()> {
        let report = Report::build(&self.form.input(), &mut self.trend, self.today);
        match self.format {
            OutputFormat::Text => writeln!(out, "{report}"),
            OutputFormat::Json => writeln!(out, "{}", report.to_json()?),
        }
    }

    /// Runs the read-apply-render loop until `quit` or end of input.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut out: impl Write,
    ) -> std::io::Result<()> {
        info!("starting interactive session");
        self.render(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
                Ok(Some(command)) => match self.apply(&command) {
                    Ok(true) => self.render(&mut out)?,
                    Ok(false) => break,
                    Err(e) => writeln!(out, "error: {e}")?,
                },
                Err(e) => writeln!(out, "error: {e}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        info!(input = ?self.form().input(), "session ended");
        Ok(())
    }
}
