use serde::Serialize;
use std::io::{BufRead, Write};
use sweeper_core::{BoardUpdate, GameConfig, RevealOutcome, Session};

use crate::command::{Command, HELP};
use crate::render::BoardView;

/// One line of `--json` output.
#[derive(Serialize, Debug)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    NewGame { config: GameConfig },
    Update(&'a BoardUpdate),
    Error { message: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front end: feeds commands into the current session and prints what changed.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    seed: Option<u64>,
    games_started: u64,
    session: Session,
    json: bool,
}

impl Game {
    /// `seed` fixes the first board; later boards use the following seeds.
    pub fn new(config: GameConfig, seed: Option<u64>, json: bool) -> sweeper_core::Result<Self> {
        let first_seed = seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            seed,
            games_started: 1,
            session: Session::new_game(config, first_seed)?,
            json,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn next_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed.wrapping_add(self.games_started),
            None => rand::random(),
        }
    }

    fn start_new_game(&mut self) -> sweeper_core::Result<()> {
        self.session = Session::new_game(self.config, self.next_seed())?;
        self.games_started += 1;
        Ok(())
    }

    fn emit(&self, out: &mut impl Write, event: &Event) -> anyhow::Result<()> {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
        Ok(())
    }

    fn announce_new_game(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.json {
            self.emit(out, &Event::NewGame { config: self.config })
        } else {
            write!(out, "{}", BoardView(&self.session))?;
            Ok(())
        }
    }

    fn report_error(&self, out: &mut impl Write, message: String) -> anyhow::Result<()> {
        log::debug!("Rejected input: {}", message);
        if self.json {
            self.emit(out, &Event::Error { message })
        } else {
            writeln!(out, "error: {message}")?;
            Ok(())
        }
    }

    fn report_update(
        &self,
        out: &mut impl Write,
        update: &BoardUpdate,
        changed: bool,
    ) -> anyhow::Result<()> {
        if self.json {
            return self.emit(out, &Event::Update(update));
        }

        write!(out, "{}", BoardView(&self.session))?;
        if !changed && !self.session.is_finished() {
            writeln!(out, "(nothing changed)")?;
        }
        if update.phase.is_finished() {
            writeln!(out, "Type `n` for a new game or `q` to quit.")?;
        }
        Ok(())
    }

    /// Applies one command, writing the result to `out`.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        let update = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::New => {
                match self.start_new_game() {
                    Ok(()) => self.announce_new_game(out)?,
                    Err(err) => self.report_error(out, err.to_string())?,
                }
                return Ok(Flow::Continue);
            }
            Command::Reveal(coords) => self.session.reveal(coords).map(|update| {
                let outcome = update.reveal_outcome();
                if matches!(outcome, RevealOutcome::HitMine | RevealOutcome::Won) {
                    log::info!("Game finished: {:?}", outcome);
                }
                (outcome.has_update(), update)
            }),
            Command::Flag(coords) => self
                .session
                .toggle_flag(coords)
                .map(|update| (update.mark_outcome().has_update(), update)),
        };

        match update {
            Ok((changed, update)) => self.report_update(out, &update, changed)?,
            Err(err) => self.report_error(out, err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        self.announce_new_game(&mut out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command, &mut out)?,
                Err(err) => {
                    self.report_error(&mut out, err.to_string())?;
                    Flow::Continue
                }
            };
            out.flush()?;

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}
