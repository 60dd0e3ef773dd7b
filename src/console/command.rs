use crate::{parse_coords, ConsoleError, Coord};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Presets,
    Load(String),
    New(Vec<Coord>),
    Random(Option<u64>),
    Add(Vec<Coord>),
    Step(u64),
    Run(u64),
    Show,
    Clear,
    Quit,
}

impl Command {
    /// Largest count `step` and `run` accept in one command.
    pub const MAX_GENERATIONS: u64 = 1_000_000;

    pub const HELP: &'static str = "\
commands:
  help              this list
  presets           list the preset patterns
  load <n|name>     start from a preset
  new <x y ...>     start from typed coordinates
  random [seed]     start from a random soup
  add <x y ...>     add cells to the current game
  step [n]          advance n generations (empty line: one, at most 1'000'000)
  run <n>           advance n generations, showing each (at most 1'000'000)
  show              show the current generation
  clear             empty the board
  quit              leave";
}

fn count_arg(command: &'static str, arg: &str, default: u64) -> Result<u64, ConsoleError> {
    if arg.is_empty() {
        return Ok(default);
    }
    match arg.parse() {
        Ok(count) if count <= Command::MAX_GENERATIONS => Ok(count),
        Ok(_) => Err(ConsoleError::BadArgument {
            command,
            expected: "at most 1'000'000 generations",
            value: arg.to_string(),
        }),
        Err(_) => Err(ConsoleError::BadArgument {
            command,
            expected: "a generation count",
            value: arg.to_string(),
        }),
    }
}

fn coords_arg(command: &'static str, arg: &str) -> Result<Vec<Coord>, ConsoleError> {
    let coords = parse_coords(arg);
    if coords.is_empty() {
        return Err(ConsoleError::NoCoordinates(command));
    }
    Ok(coords)
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, a)| (w, a.trim()));
        Ok(match word.to_ascii_lowercase().as_str() {
            "" => Self::Step(1),
            "help" | "?" => Self::Help,
            "presets" | "list" => Self::Presets,
            "load" if arg.is_empty() => {
                return Err(ConsoleError::BadArgument {
                    command: "load",
                    expected: "a preset number or name",
                    value: String::new(),
                })
            }
            "load" => Self::Load(arg.to_string()),
            "new" => Self::New(coords_arg("new", arg)?),
            "random" if arg.is_empty() => Self::Random(None),
            "random" => Self::Random(Some(arg.parse().map_err(|_| {
                ConsoleError::BadArgument {
                    command: "random",
                    expected: "a numeric seed",
                    value: arg.to_string(),
                }
            })?)),
            "add" => Self::Add(coords_arg("add", arg)?),
            "step" | "s" => Self::Step(count_arg("step", arg, 1)?),
            "run" => Self::Run(count_arg("run", arg, 1)?),
            "show" => Self::Show,
            "clear" => Self::Clear,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ConsoleError::UnknownCommand(word.to_string())),
        })
    }
}
