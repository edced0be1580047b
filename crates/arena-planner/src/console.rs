//! The interactive planner shell.
//!
//! [`Console`] reads one command per line, runs it against a
//! [`QueryEngine`] and a [`GameList`], and writes the responses. Input and
//! output are generic so sessions can be scripted.

use std::io::{self, BufRead, Write};

use arena_seeker::{Games, QueryEngine};

use crate::config::PlannerConfig;
use crate::game_list::GameList;

const WELCOME: &str = "******* Welcome to the BoardGame Arena Planner! *******";
const GOODBYE: &str = "Thank you for using the BoardGame Arena Planner!";
const PROMPT: &str = "> ";
const INVALID: &str = "Invalid command. Type 'help' for available commands.";
const NO_FILTER: &str = "No filter given, showing all games.";
const FILTER_CLEARED: &str = "Filter cleared.";
const NO_GAMES_LIST: &str = "Your game list is empty.";

const HELP: &str = "\
Commands:
  help [filter|list]   show help, optionally for one command (also: ?)
  filter [text]        filter the catalog, e.g. filter minPlayers>=2,rating>7
  filter clear         clear the current filter
  list [subcommand]    manage your game list, see 'help list'
  exit                 leave the planner (an empty line does the same)";

const FILTER_HELP: &str = "\
filter <clause>[,<clause>...]

  A clause is <attribute><operator><value>; all clauses must match.
  Attributes: name, id, rating, difficulty, rank, minPlayers, maxPlayers,
              minPlayTime, maxPlayTime, year
  Operators:  ==  !=  >  <  >=  <=  ~= (contains)
  Text is compared ignoring case.

  Add sort:<attribute>[:asc|:desc] to order the results, e.g.
    filter name~=catan, sort:rating:desc

  filter        show every game
  filter clear  clear the current filter
  filter ?      show this help";

const LIST_HELP: &str = "\
list [subcommand]

  list, list show      show your game list
  list add <games>     add games from the current filter results
  list remove <games>  remove games from your list
  list clear           empty your list
  list save [file]     save your list, one name per line

  <games> is 'all', a game name, a number (3) or a range (2-5).
  Numbers refer to the last filter results for add and to your list for
  remove.";

/// Writes filter results as a numbered list.
///
/// Each line shows the game's name plus the value it was sorted on.
pub fn write_results<W: Write>(mut out: W, games: Games<'_>) -> io::Result<()> {
    let attribute = games.sort_key().attribute();
    for (i, game) in games.enumerate() {
        writeln!(out, "{}: {}", i + 1, game.describe(attribute))?;
    }
    Ok(())
}

/// A line-oriented planner session.
pub struct Console<R, W> {
    engine: QueryEngine,
    list: GameList,
    config: PlannerConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(engine: QueryEngine, config: PlannerConfig, input: R, output: W) -> Self {
        Console {
            engine,
            list: GameList::new(),
            config,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn list(&self) -> &GameList {
        &self.list
    }

    /// Runs until `exit`, an empty line, or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{WELCOME}")?;
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let (command, rest) = split_word(&line);
            if command.is_empty() {
                break;
            }
            log::debug!("command '{command}' with '{rest}'");
            match command.to_ascii_lowercase().as_str() {
                "exit" => break,
                "help" | "?" => self.help(rest)?,
                "filter" => self.filter(rest)?,
                "list" => self.list_command(rest)?,
                _ => writeln!(self.output, "{INVALID}")?,
            }
        }
        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()
    }

    fn help(&mut self, topic: &str) -> io::Result<()> {
        let (topic, _) = split_word(topic);
        let text = match topic.to_ascii_lowercase().as_str() {
            "filter" => FILTER_HELP,
            "list" => LIST_HELP,
            _ => HELP,
        };
        writeln!(self.output, "{text}")
    }

    fn filter(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            writeln!(self.output, "{NO_FILTER}")?;
        } else if text == "?" {
            return writeln!(self.output, "{FILTER_HELP}");
        } else if text.eq_ignore_ascii_case("clear") {
            self.engine.reset();
            return writeln!(self.output, "{FILTER_CLEARED}");
        }
        let games = self.engine.filter(text);
        write_results(&mut self.output, games)
    }

    fn list_command(&mut self, args: &str) -> io::Result<()> {
        let (sub, rest) = split_word(args);
        match sub.to_ascii_lowercase().as_str() {
            "" | "show" => self.show_list(),
            "clear" => {
                self.list.clear();
                Ok(())
            }
            "add" => {
                if rest.is_empty() {
                    return Ok(());
                }
                match self.list.add(rest, self.engine.current()) {
                    Ok(added) => {
                        log::info!("added {added} game(s) to the list");
                        Ok(())
                    }
                    Err(e) => writeln!(self.output, "Could not add '{rest}': {e}"),
                }
            }
            "remove" => {
                if rest.is_empty() {
                    return Ok(());
                }
                match self.list.remove(rest) {
                    Ok(removed) => {
                        log::info!("removed {removed} game(s) from the list");
                        Ok(())
                    }
                    Err(e) => writeln!(self.output, "Could not remove '{rest}': {e}"),
                }
            }
            "save" => {
                let path = if rest.is_empty() {
                    self.config.list_file.clone()
                } else {
                    rest.into()
                };
                match self.list.save(&path) {
                    Ok(()) => writeln!(self.output, "Game list saved to {}", path.display()),
                    Err(e) => writeln!(self.output, "Error saving game list: {e}"),
                }
            }
            "help" | "?" => writeln!(self.output, "{LIST_HELP}"),
            _ => {
                writeln!(self.output, "{INVALID}")?;
                writeln!(self.output, "{LIST_HELP}")
            }
        }
    }

    fn show_list(&mut self) -> io::Result<()> {
        if self.list.is_empty() {
            return writeln!(self.output, "{NO_GAMES_LIST}");
        }
        for (i, name) in self.list.names().into_iter().enumerate() {
            writeln!(self.output, "{}: {name}", i + 1)?;
        }
        Ok(())
    }
}

/// Splits off the first whitespace-delimited word; both parts are trimmed.
fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}
