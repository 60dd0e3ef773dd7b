use super::{Command, Config};
use crate::{find_pattern, ConsoleError, FpsLimiter, Game, NiceInt, SparseGrid, PATTERNS};
use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};

/// Interactive session: owns the running game and talks over any reader/writer pair.
pub struct App<R, W> {
    input: R,
    output: W,
    config: Config,
    game: Game,
    fps_limiter: FpsLimiter,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            fps_limiter: FpsLimiter::new(config.max_fps),
            config,
            game: Game::default(),
        }
    }

    /// Starts the session from `game` instead of an empty board.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Conway's Game of Life")?;
        self.print_presets()?;
        writeln!(self.output, "type `help` for commands")?;
        if self.game.population() > 0 {
            self.show()?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            match line.parse::<Command>().and_then(|command| self.execute(command)) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(ConsoleError::Io(e)) => return Err(e.into()),
                Err(e) => writeln!(self.output, "error: {e}")?,
            }
        }
        tracing::info!(
            generation = self.game.generation(),
            population = self.game.population(),
            "session finished"
        );
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<ControlFlow<()>, ConsoleError> {
        match command {
            Command::Help => writeln!(self.output, "{}", Command::HELP)?,
            Command::Presets => self.print_presets()?,
            Command::Load(query) => {
                let pattern =
                    find_pattern(&query).ok_or_else(|| ConsoleError::UnknownPreset(query))?;
                let grid = pattern.grid().unwrap_or_else(|e| {
                    tracing::warn!(preset = pattern.name, "{e}, starting with a blank board");
                    SparseGrid::new()
                });
                tracing::info!(preset = pattern.name, "new game");
                self.start(Game::new(grid))?;
            }
            Command::New(coords) => self.start(Game::from_coords(coords))?,
            Command::Random(seed) => {
                let seed = seed.or(self.config.seed);
                let grid = SparseGrid::random(self.config.random_side, self.config.fill_rate, seed);
                tracing::info!(?seed, population = grid.len(), "new random game");
                self.start(Game::new(grid))?;
            }
            Command::Add(coords) => {
                let added = self.game.add_cells(coords);
                writeln!(self.output, "added {} cells", NiceInt::from(added))?;
                self.show()?;
            }
            Command::Step(n) => {
                self.game.evolve_by(n);
                self.show()?;
            }
            Command::Run(n) => {
                for _ in 0..n {
                    self.game.evolve();
                    self.show()?;
                    self.fps_limiter.delay();
                }
            }
            Command::Show => self.show()?,
            Command::Clear => self.start(Game::default())?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn start(&mut self, game: Game) -> std::io::Result<()> {
        self.game = game;
        self.show()
    }

    fn print_presets(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "presets:")?;
        for (i, pattern) in PATTERNS.iter().enumerate() {
            writeln!(self.output, "  {:>2}. {}", i + 1, pattern.name)?;
        }
        Ok(())
    }

    fn show(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "Generation {} (population {})",
            NiceInt::from(self.game.generation()),
            NiceInt::from(self.game.population()),
        )?;
        let view = self.game.viewport().bounds;
        if view.area() > self.config.max_view_cells {
            return writeln!(
                self.output,
                "board too large to display ({} x {})",
                NiceInt::from(view.width()),
                NiceInt::from(view.height()),
            );
        }
        for row in self.game.render() {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }
}
