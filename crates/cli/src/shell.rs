//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use dealership_core::CarId;
use dealership_infra::InventoryStore;
use dealership_inventory::CarRegistry;

use crate::input;
use crate::menu::{MENU_TEXT, MenuOption};
use crate::render;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub autosave: bool,
    pub clear_screen: bool,
}

/// Menu-driven front end over a registry and its store.
///
/// Generic over input/output and the store so tests can script a session
/// against an in-memory snapshot.
pub struct Shell<R, W, S> {
    input: R,
    output: W,
    store: S,
    registry: CarRegistry,
    options: ShellOptions,
}

impl<R: BufRead, W: Write, S: InventoryStore> Shell<R, W, S> {
    pub fn new(input: R, output: W, store: S, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            store,
            registry: CarRegistry::new(),
            options,
        }
    }

    pub fn registry(&self) -> &CarRegistry {
        &self.registry
    }

    /// Load the inventory, then serve menu choices until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.load()?;

        loop {
            if self.options.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            write!(self.output, "{MENU_TEXT}")?;
            self.prompt("Enter your choice: ")?;

            let option = match self.read_value()? {
                Some(line) => MenuOption::parse(&line),
                None => MenuOption::Exit,
            };

            match option {
                MenuOption::ShowAvailable => self.show_available()?,
                MenuOption::DailyReport => self.daily_report()?,
                MenuOption::Load => self.load()?,
                MenuOption::Save => self.save()?,
                MenuOption::Sell => self.sell()?,
                MenuOption::Add => self.add()?,
                MenuOption::Exit => break,
                MenuOption::Invalid => writeln!(
                    self.output,
                    "Invalid choice. Please select a valid option from the menu."
                )?,
            }

            self.prompt("\nPress Enter to continue...")?;
            if self.read_raw_line()?.is_none() {
                break;
            }
        }

        if self.options.autosave {
            writeln!(self.output, "Saving inventory before exiting...")?;
            self.save()?;
        }
        writeln!(self.output, "Exiting Car Dealership System. Goodbye!")?;
        self.output.flush()
    }

    fn load(&mut self) -> io::Result<()> {
        match self.store.load_into(&mut self.registry) {
            Ok(report) => render::loaded(&mut self.output, &self.store.location(), &report),
            Err(err) => render::store_error(&mut self.output, &err),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.store.save(&self.registry) {
            Ok(report) => render::saved(&mut self.output, &self.store.location(), &report),
            Err(err) => render::store_error(&mut self.output, &err),
        }
    }

    fn show_available(&mut self) -> io::Result<()> {
        if self.registry.is_empty() {
            return render::empty_inventory(&mut self.output);
        }
        render::available(&mut self.output, &self.registry.available(chrono::Utc::now()))
    }

    fn daily_report(&mut self) -> io::Result<()> {
        if self.registry.is_empty() {
            return render::empty_inventory(&mut self.output);
        }
        render::daily_report(&mut self.output, &self.registry.daily_report(chrono::Utc::now()))
    }

    fn sell(&mut self) -> io::Result<()> {
        self.show_available()?;
        writeln!(self.output, "Enter the ID of the car you want to sell:")?;
        self.prompt("ID -> ")?;

        let Some(raw) = self.read_value()? else {
            return Ok(());
        };
        let id = match raw.parse::<CarId>() {
            Ok(id) => id,
            Err(err) => return writeln!(self.output, "Input Error: {err}"),
        };

        match self.registry.sell_car_now(id) {
            Ok(sold) => render::car_sold(&mut self.output, &sold),
            Err(err) => render::sell_error(&mut self.output, &err),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        writeln!(self.output, "Enter car details...")?;

        self.prompt("Model: ")?;
        let Some(model) = self.read_value()? else {
            return Ok(());
        };
        self.prompt("Register Year: ")?;
        let Some(year) = self.read_value()? else {
            return Ok(());
        };
        self.prompt("Initial Price: ")?;
        let Some(price) = self.read_value()? else {
            return Ok(());
        };

        let parsed = input::parse_model(&model).and_then(|model| {
            let year = input::parse_register_year(&year)?;
            let price = input::parse_price(&price)?;
            Ok((model, year, price))
        });

        let (model, year, price) = match parsed {
            Ok(values) => values,
            Err(err) => return writeln!(self.output, "Input Error: {err}"),
        };

        match self.registry.add_car_now(model, year, price) {
            Ok(added) => render::car_added(&mut self.output, &added),
            Err(err) => render::add_error(&mut self.output, &err),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Next line with content, skipping blank ones. `None` at end of input.
    fn read_value(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.read_raw_line()? {
                Some(line) if line.trim().is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    fn read_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
