use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{BotController, GameState, Mark, Outcome, SessionRng, log};

pub enum Seat {
    Human(String),
    Bot(BotController),
}

impl Seat {
    fn label(&self) -> String {
        match self {
            Seat::Human(name) => name.clone(),
            Seat::Bot(bot) => format!("AI ({})", bot.difficulty()),
        }
    }
}

/// Parses `row col` (0-based), separated by whitespace or a comma.
pub fn parse_move(input: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    if parts.len() != 2 {
        return Err("Enter a move as: row col".to_string());
    }

    let row = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid row '{}'", parts[0]))?;
    let col = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("Invalid column '{}'", parts[1]))?;
    Ok((row, col))
}

pub struct ConsoleRound<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    x_seat: &'a Seat,
    o_seat: &'a Seat,
    ai_delay: Duration,
}

impl<'a, R: BufRead, W: Write> ConsoleRound<'a, R, W> {
    pub fn new(input: R, output: W, x_seat: &'a Seat, o_seat: &'a Seat) -> Self {
        Self {
            input,
            output,
            x_seat,
            o_seat,
            ai_delay: Duration::ZERO,
        }
    }

    /// Pause before an AI move is revealed.
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn play(&mut self, state: &mut GameState, rng: &mut SessionRng) -> io::Result<Outcome> {
        while !state.is_over() {
            write!(self.output, "\n{}", state.board)?;

            let seat = match state.current_mark {
                Mark::X => self.x_seat,
                Mark::O => self.o_seat,
            };

            match seat {
                Seat::Human(name) => self.human_turn(name, state)?,
                Seat::Bot(bot) => self.bot_turn(bot, state, rng)?,
            }
        }

        write!(self.output, "\n{}", state.board)?;
        match state.status {
            Outcome::Won(mark) => {
                let winner = match mark {
                    Mark::X => self.x_seat.label(),
                    Mark::O => self.o_seat.label(),
                };
                writeln!(self.output, "{} ({}) wins!", winner, mark)?;
            }
            _ => writeln!(self.output, "It's a draw!")?,
        }

        Ok(state.status)
    }

    fn human_turn(&mut self, name: &str, state: &mut GameState) -> io::Result<()> {
        loop {
            write!(self.output, "{} ({}) move: ", name, state.current_mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the round ended",
                ));
            }

            let placed = parse_move(&line)
                .and_then(|(row, col)| state.place_mark(row, col).map_err(|e| e.to_string()));

            match placed {
                Ok(_) => return Ok(()),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn bot_turn(
        &mut self,
        bot: &BotController,
        state: &mut GameState,
        rng: &mut SessionRng,
    ) -> io::Result<()> {
        let opponent = bot.ai_mark().opponent();
        let position = bot
            .choose_move(&state.board, opponent, rng)
            .map_err(io::Error::other)?;

        if !self.ai_delay.is_zero() {
            thread::sleep(self.ai_delay);
        }

        state
            .place_mark(position.row, position.col)
            .map_err(io::Error::other)?;
        log!("{} plays {}", self.seat_label(bot.ai_mark()), position);
        writeln!(self.output, "AI plays {} {}", position.row, position.col)?;
        Ok(())
    }

    fn seat_label(&self, mark: Mark) -> String {
        match mark {
            Mark::X => self.x_seat.label(),
            Mark::O => self.o_seat.label(),
        }
    }
}
