use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::{GameState, GameStatus, Player};

/// Line-oriented game loop: reads column numbers, prints the board, and offers
/// a rematch when a game ends.
pub struct App<R, W> {
    config: GameConfig,
    input: R,
    output: W,
    games_played: usize,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        App {
            config,
            input,
            output,
            games_played: 0,
        }
    }

    /// Number of games started so far, rematches included
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Main application loop. Returns once the players decline a rematch or
    /// the input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let mut game = GameState::new(&self.config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            self.games_played += 1;
            info!(
                game = self.games_played,
                width = self.config.width,
                height = self.config.height,
                n = self.config.n,
                "starting game"
            );

            if !self.play_game(&mut game)? || !self.ask_rematch()? {
                break;
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        info!(games = self.games_played, "session finished");
        Ok(())
    }

    /// Play one game to its end. Returns `false` if the input closed first.
    fn play_game(&mut self, game: &mut GameState) -> io::Result<bool> {
        writeln!(self.output, "{}", game.board())?;

        loop {
            let player = game.current_player();
            let Some(line) = self.prompt(&format!(
                "What column do you want to put your cell in, Player {player}? "
            ))?
            else {
                return Ok(false);
            };

            let Ok(column) = line.trim().parse::<usize>() else {
                debug!(input = line.trim(), "unparseable column");
                writeln!(self.output, "Write a valid input please!")?;
                continue;
            };

            match game.apply_move(column) {
                Err(err) => {
                    debug!(legal = ?game.board().legal_columns(), %err, "move rejected");
                    writeln!(self.output, "You can't place that there! ({err})")?;
                }
                Ok(status) => {
                    writeln!(self.output, "{}", game.board())?;
                    match status {
                        GameStatus::InProgress => {}
                        GameStatus::Won(winner) => {
                            self.announce_winner(winner)?;
                            return Ok(true);
                        }
                        GameStatus::Tied => {
                            writeln!(self.output, "The game is a tie.")?;
                            return Ok(true);
                        }
                    }
                }
            }
        }
    }

    fn announce_winner(&mut self, winner: Player) -> io::Result<()> {
        writeln!(self.output, "Player {winner} won! Congratulate them!")
    }

    fn ask_rematch(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Do you want to play again? (Write yes if so) ")?;
        Ok(answer.is_some_and(|a| a.trim().to_lowercase().starts_with('y')))
    }

    /// Print `text` and read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
