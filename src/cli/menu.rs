//! Numbered menu loop driving a [`CityMap`] from line-oriented input.

use std::io::{BufRead, Write};

use crate::cli::commands;
use crate::graph::CityMap;
use crate::types::{MapError, MapResult, DEFAULT_WEIGHT};

/// Menu entries, in the order they are numbered.
pub const MENU_ITEMS: &[&str] = &[
    "Add Intersection",
    "Add Road",
    "Remove Intersection",
    "Remove Road",
    "Display Map",
    "Check Path Existence",
    "List Reachable Intersections",
    "Exit",
];

/// Parse a distance typed at the prompt. Blank input means the default weight.
pub fn parse_weight(input: &str) -> MapResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_WEIGHT);
    }
    input
        .parse()
        .map_err(|_| MapError::InvalidWeight(input.to_string()))
}

/// Interactive session over any reader/writer pair.
pub struct Menu<R, W> {
    map: CityMap,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session editing `map`. `json` switches query output to JSON.
    pub fn new(map: CityMap, input: R, output: W, json: bool) -> Self {
        Self {
            map,
            input,
            output,
            json,
        }
    }

    /// The map being edited.
    pub fn map(&self) -> &CityMap {
        &self.map
    }

    /// End the session, returning the edited map.
    pub fn into_map(self) -> CityMap {
        self.map
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> MapResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };
            if self.execute(&choice)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Execute one menu choice. Returns `true` if the session should end.
    pub fn execute(&mut self, choice: &str) -> MapResult<bool> {
        match choice {
            "1" => self.cmd_add_intersection()?,
            "2" => self.cmd_add_road()?,
            "3" => self.cmd_remove_intersection()?,
            "4" => self.cmd_remove_road()?,
            "5" => {
                let text = commands::render_map(&self.map, self.json);
                self.say(&format!("\n{text}"))?;
            }
            "6" => self.cmd_check_path()?,
            "7" => self.cmd_list_reachable()?,
            "8" => {
                self.say("Exiting program.")?;
                return Ok(true);
            }
            other => {
                log::warn!("invalid menu choice {other:?}");
                self.say("Invalid choice. Try again.")?;
            }
        }
        Ok(false)
    }

    fn print_menu(&mut self) -> MapResult<()> {
        writeln!(self.output, "\nMenu:")?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> MapResult<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> MapResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn cmd_add_intersection(&mut self) -> MapResult<()> {
        let Some(name) = self.prompt("Enter intersection name: ")? else {
            return Ok(());
        };
        let outcome = self.map.add_intersection(&name);
        self.say(&commands::render_insertion(&name, outcome))
    }

    fn cmd_add_road(&mut self) -> MapResult<()> {
        let Some(src) = self.prompt("Enter source intersection: ")? else {
            return Ok(());
        };
        let Some(dest) = self.prompt("Enter destination intersection: ")? else {
            return Ok(());
        };
        let Some(raw) = self.prompt(&format!("Enter distance (default={DEFAULT_WEIGHT}): "))?
        else {
            return Ok(());
        };

        let weight = match parse_weight(&raw) {
            Ok(w) => w,
            Err(e) => {
                log::warn!("{e}");
                return self.say(&format!("Invalid distance '{raw}'. Road not added."));
            }
        };
        let result = self.map.add_road(&src, &dest, weight);
        self.say(&commands::render_add_road(&src, &dest, weight, &result))
    }

    fn cmd_remove_intersection(&mut self) -> MapResult<()> {
        let Some(name) = self.prompt("Enter intersection name to remove: ")? else {
            return Ok(());
        };
        let outcome = self.map.remove_intersection(&name);
        self.say(&commands::render_removal(&name, outcome))
    }

    fn cmd_remove_road(&mut self) -> MapResult<()> {
        let Some(src) = self.prompt("Enter source intersection: ")? else {
            return Ok(());
        };
        let Some(dest) = self.prompt("Enter destination intersection: ")? else {
            return Ok(());
        };
        self.map.remove_road(&src, &dest);
        self.say(&commands::render_remove_road(&src, &dest))
    }

    fn cmd_check_path(&mut self) -> MapResult<()> {
        let Some(start) = self.prompt("Enter starting intersection: ")? else {
            return Ok(());
        };
        let Some(end) = self.prompt("Enter destination intersection: ")? else {
            return Ok(());
        };
        let exists = self.map.path_exists(&start, &end);
        self.say(&commands::render_path(&start, &end, exists, self.json))
    }

    fn cmd_list_reachable(&mut self) -> MapResult<()> {
        let Some(start) = self.prompt("Enter intersection to check reachability from: ")? else {
            return Ok(());
        };
        let reachable = self.map.reachable_set(&start);
        self.say(&commands::render_reachable(&start, &reachable, self.json))
    }
}
