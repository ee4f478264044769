//! Menu-driven conversion session
//!
//! Reads choices line by line and re-prompts on anything invalid. The
//! session ends on the Exit option or end of input.

use std::io::{BufRead, Write};
use convertor_units::{check_physical_limits, Category, UnitDefinition, UnitRegistry};
use tracing::{debug, info};
use crate::error::CliError;
use crate::render::{self, Painter};

const NOT_A_NUMBER: &str = "[ERROR] PLEASE ENTER A NUMBER";
const NOT_AN_OPTION: &str = "[ERROR] PLEASE ENTER A VALID NUMBER";

/// What the main menu asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Convert(Category),
    Exit,
}

pub struct Session<'a, R, W> {
    registry: &'a UnitRegistry,
    input: R,
    output: W,
    painter: Painter,
    precision: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a UnitRegistry, input: R, output: W, painter: Painter, precision: usize) -> Self {
        Self { registry, input, output, painter, precision }
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> Result<(), CliError> {
        let welcome = self.painter.title("Welcome to the CLI Unit Convertor");
        writeln!(self.output, "{}", welcome)?;

        loop {
            self.show_menu()?;
            match self.read_menu_choice()? {
                Some(MenuChoice::Convert(category)) => {
                    if !self.convert_in(category)? {
                        break;
                    }
                }
                Some(MenuChoice::Exit) => {
                    let bye = self.painter.warning("Exiting the program...");
                    writeln!(self.output, "{}", bye)?;
                    break;
                }
                None => break,
            }
        }

        info!("interactive session finished");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), CliError> {
        let header = self.painter.prompt("Main Menu");
        writeln!(self.output)?;
        writeln!(self.output, "{}", header)?;
        for line in render::menu_lines(self.registry) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn read_menu_choice(&mut self) -> Result<Option<MenuChoice>, CliError> {
        let exit_option = Category::ALL.len() + 1;
        let choice = self.read_choice("Enter the number for the selected option: ", exit_option)?;
        Ok(choice.map(|n| match Category::from_menu_option(n) {
            Some(category) => MenuChoice::Convert(category),
            None => MenuChoice::Exit,
        }))
    }

    /// One conversion in `category`. Returns false if input ran out.
    fn convert_in(&mut self, category: Category) -> Result<bool, CliError> {
        let registry = self.registry;
        let units = registry.units_by_category(category);
        if units.is_empty() {
            let msg = self.painter.error(&format!("[ERROR] No {} units are registered", category));
            writeln!(self.output, "{}", msg)?;
            return Ok(true);
        }

        writeln!(self.output)?;
        let title = self.painter.title(&format!("--- {} Converter selected ---", category));
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "Available units below")?;
        for line in render::unit_choice_lines(&units) {
            writeln!(self.output, "{}", line)?;
        }

        let Some(source) = self.read_choice("Enter the origin unit number: ", units.len())? else {
            return Ok(false);
        };
        let Some(target) = self.read_choice("Enter the converted unit number: ", units.len())? else {
            return Ok(false);
        };
        let Some(value) = self.read_value("Enter the number to be converted: ")? else {
            return Ok(false);
        };

        let source: &UnitDefinition = units[source - 1];
        let target: &UnitDefinition = units[target - 1];
        debug!(category = %category, from = source.key(), to = target.key(), value, "menu conversion");

        let result = registry.convert(value, source.key(), target.key())?;
        if let Some(warning) = check_physical_limits(registry, value, source.key())? {
            let line = render::warning_line(&self.painter, &warning);
            writeln!(self.output, "{}", line)?;
        }
        let line = render::result_line(&self.painter, result, target, self.precision);
        writeln!(self.output, "{}", line)?;
        Ok(true)
    }

    /// Prompt until a number in 1..=max is entered. None on end of input.
    fn read_choice(&mut self, prompt: &str, max: usize) -> Result<Option<usize>, CliError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => self.complain(NOT_AN_OPTION)?,
                Err(_) => self.complain(NOT_A_NUMBER)?,
            }
        }
    }

    /// Prompt until a number is entered. None on end of input.
    fn read_value(&mut self, prompt: &str) -> Result<Option<f64>, CliError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.complain(NOT_A_NUMBER)?,
            }
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let prompt = self.painter.prompt(prompt);
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn complain(&mut self, message: &str) -> Result<(), CliError> {
        let message = self.painter.error(message);
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
