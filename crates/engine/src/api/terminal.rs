//! Line-oriented terminal front end.
//!
//! Reads one command per line. Plain text is a guess: an exact canonical name
//! is submitted straight away, anything else lists autocomplete rows that can
//! be picked with `#N`. Slash commands control the session.

use std::io::{self, BufRead, Write};

use skeledle_domain::common::normalize;
use skeledle_domain::{AnatomicalPart, GameMode, PartId, ProximityHint, RoundState, RoundStatus};

use crate::app::App;

const HELP: &str = "\
Commands:
  <text>   search by medical name (2+ letters); an exact name is guessed
  #N       guess suggestion N from the last search
  /skip    new part (endless mode only)
  /new     start another round
  /save    print the round as JSON
  /help    show this help
  /quit    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Pick(usize),
    Skip,
    New,
    Save,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(rest) = line.strip_prefix('#') {
        if let Ok(n) = rest.trim().parse::<usize>() {
            return Some(Command::Pick(n));
        }
    }
    let command = match line.to_lowercase().as_str() {
        "/skip" => Command::Skip,
        "/new" => Command::New,
        "/save" => Command::Save,
        "/help" | "?" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Guess(line.to_string()),
    };
    Some(command)
}

/// One interactive play session.
pub struct TerminalSession<'a> {
    app: &'a App,
    mode: GameMode,
    state: RoundState,
    suggestions: Vec<PartId>,
}

impl<'a> TerminalSession<'a> {
    pub fn new(app: &'a App, mode: GameMode) -> Self {
        let state = app.use_cases.round.new_round(mode);
        Self {
            app,
            mode,
            state,
            suggestions: Vec::new(),
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Drive the session until `/quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "Skeledle ({} mode). Type /help for commands.", self.mode)?;
        self.render_round(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = parse_command(&line) else {
                continue;
            };
            if command == Command::Quit {
                break;
            }
            self.handle(command, &mut out)?;
        }
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Guess(text) => self.guess_text(&text, out),
            Command::Pick(n) => {
                let picked = n
                    .checked_sub(1)
                    .and_then(|i| self.suggestions.get(i))
                    .cloned();
                match picked {
                    Some(id) => self.guess_id(&id, out),
                    None => writeln!(out, "No suggestion #{n}."),
                }
            }
            Command::Skip => {
                if self.mode != GameMode::Endless {
                    return writeln!(out, "Daily rounds cannot be skipped.");
                }
                if self.state.is_over() {
                    return writeln!(out, "This round is over. Type /new to play again.");
                }
                writeln!(
                    out,
                    "Skipped. It was {}.",
                    self.state.target().name()
                )?;
                self.state = self.app.use_cases.round.skip(&self.state);
                self.suggestions.clear();
                self.render_round(out)
            }
            Command::New => {
                self.state = self.app.use_cases.round.new_round(self.mode);
                self.suggestions.clear();
                self.render_round(out)
            }
            Command::Save => {
                let json = serde_json::to_string_pretty(&self.state.snapshot())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")
            }
            Command::Help => writeln!(out, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn guess_text<W: Write>(&mut self, text: &str, out: &mut W) -> io::Result<()> {
        if self.state.is_over() {
            return writeln!(out, "This round is over. Type /new to play again.");
        }

        let app = self.app;
        let round = &app.use_cases.round;
        let matches = round.suggestions(text);
        let wanted = normalize(text);
        if let Some(exact) = matches.iter().find(|p| p.name().normalized() == wanted) {
            let id = exact.id().clone();
            return self.guess_id(&id, out);
        }

        self.suggestions = matches
            .iter()
            .take(app.config.max_suggestions)
            .map(|p| p.id().clone())
            .collect();

        if self.suggestions.is_empty() {
            return writeln!(
                out,
                "No medical names start with '{}'. Type at least 2 letters.",
                text.trim()
            );
        }
        for (i, part) in matches.iter().take(self.suggestions.len()).enumerate() {
            let seen = if round.has_been_guessed(&self.state, part) {
                "  (already guessed)"
            } else {
                ""
            };
            writeln!(out, "  #{} {}{}", i + 1, part.name(), seen)?;
        }
        Ok(())
    }

    fn guess_id<W: Write>(&mut self, id: &PartId, out: &mut W) -> io::Result<()> {
        let app = self.app;
        let round = &app.use_cases.round;
        let Some(part) = round.get_part(id.as_str()) else {
            return writeln!(out, "Unknown part.");
        };
        if round.has_been_guessed(&self.state, part) {
            writeln!(out, "You already guessed {}; it still costs an attempt.", part.name())?;
        }

        self.state = round.submit_guess(&self.state, part);
        self.suggestions.clear();
        if let Some(guess) = self.state.guesses().last() {
            render_guess(out, self.state.guess_count(), guess.part(), guess.hint())?;
        }

        match self.state.status() {
            RoundStatus::Playing => writeln!(
                out,
                "Guesses remaining: {}",
                round.remaining_guesses(&self.state)
            ),
            RoundStatus::Won => writeln!(
                out,
                "Congratulations! You correctly identified the {}!",
                self.state.target().name()
            ),
            RoundStatus::Lost => {
                let target = self.state.target();
                writeln!(out, "Game over. The correct answer was: {}", target.name())?;
                if !target.common_name().is_empty() {
                    writeln!(out, "  ({})", target.common_name())?;
                }
                Ok(())
            }
        }
    }

    fn render_round<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let diagram = self.state.target().diagram();
        writeln!(out)?;
        let regions = diagram.elements().len();
        writeln!(
            out,
            "What is this part? {} highlighted {} on '{}'.",
            regions,
            if regions == 1 { "region" } else { "regions" },
            diagram.label()
        )?;
        writeln!(
            out,
            "Guesses remaining: {}",
            self.app.use_cases.round.remaining_guesses(&self.state)
        )
    }
}

fn render_guess<W: Write>(
    out: &mut W,
    number: usize,
    part: &AnatomicalPart,
    hint: ProximityHint,
) -> io::Result<()> {
    write!(out, "{number}. {}", part.name())?;
    if !part.common_name().is_empty() {
        write!(out, " ({})", part.common_name())?;
    }
    writeln!(
        out,
        "  System: {}  Region: {}",
        ProximityHint::mark(hint.system_match),
        ProximityHint::mark(hint.region_match)
    )
}
