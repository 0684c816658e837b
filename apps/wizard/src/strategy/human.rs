//! Interactive player reading decisions from a text stream.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::warn;

use super::trait_def::{SeatView, Strategy, StrategyError};
use crate::domain::{Board, Card, CardRegistry, Hand, PlayerId, Suit};

const SEPARATOR: &str = "==============================";

/// Prompts on `output` and parses answers from `input`, re-prompting until
/// it gets a usable prediction or a legal card.
pub struct HumanStrategy<R, W> {
    registry: CardRegistry,
    input: R,
    output: W,
}

/// A human seated at the process terminal.
pub type TerminalHuman = HumanStrategy<StdinLock<'static>, Stdout>;

impl TerminalHuman {
    pub const NAME: &'static str = "human";
    pub const VERSION: &'static str = "1.0.0";

    /// Attach to the process terminal.
    pub fn stdio(registry: CardRegistry) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(registry, stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(registry: CardRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, StrategyError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StrategyError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, message: &str) -> Result<(), StrategyError> {
        warn!(reason = message, "rejected input");
        writeln!(self.output, "[Error] {message}")?;
        Ok(())
    }

    fn print_hand(
        &mut self,
        player: Option<PlayerId>,
        trump: Option<Suit>,
        hand: &Hand,
    ) -> io::Result<()> {
        let out = &mut self.output;
        if let Some(player) = player {
            writeln!(out, "Player {player}")?;
            writeln!(out)?;
        }
        match trump {
            Some(trump) => writeln!(out, "Trump: {trump}")?,
            None => writeln!(out, "Trump: None")?,
        }
        writeln!(out)?;
        writeln!(out, "Your hand:")?;
        if trump.is_some() {
            writeln!(out, "(T after a suit means the suit is the trump)")?;
        }
        writeln!(out)?;

        let mut specials: Vec<String> = hand
            .iter()
            .filter(|c| c.is_special())
            .map(ToString::to_string)
            .collect();
        specials.sort();
        write_row(out, "Special", &specials)?;

        for suit in Suit::ALL {
            let mut ranks: Vec<_> = hand
                .iter()
                .filter_map(|c| match c {
                    Card::Suit(sc) if sc.suit == suit => Some(sc),
                    _ => None,
                })
                .map(|c| c.rank)
                .collect();
            ranks.sort();
            let label = if Some(suit) == trump {
                format!("{suit}(T)")
            } else {
                suit.to_string()
            };
            let tokens: Vec<String> = ranks.iter().map(|r| r.token().to_string()).collect();
            write_row(out, &label, &tokens)?;
        }
        Ok(())
    }
}

fn write_row<W: Write>(out: &mut W, label: &str, items: &[String]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "{label:<15} None")
    } else {
        writeln!(out, "{label:<15} {}", items.join(" "))
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn prediction(&mut self, seat: &SeatView<'_>) -> Result<i32, StrategyError> {
        writeln!(self.output, "{SEPARATOR}")?;
        self.print_hand(Some(seat.player), seat.trump, seat.hand)?;
        writeln!(self.output, "{SEPARATOR}")?;

        loop {
            let answer = self.ask("Enter your prediction: ")?;
            match answer.parse::<i32>() {
                Err(_) => self.reject("Not an integer")?,
                Ok(n) if n < 0 => self.reject("Please enter a non-negative integer")?,
                Ok(n) => return Ok(n),
            }
        }
    }

    fn play(&mut self, board: &Board, hand: &Hand) -> Result<Card, StrategyError> {
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "{board}")?;
        writeln!(self.output)?;
        self.print_hand(board.cur_player(), board.trump(), hand)?;
        writeln!(self.output, "{SEPARATOR}")?;

        loop {
            let answer = self.ask("Enter the card to play: ")?;
            let card = match self.registry.lookup(&answer) {
                Ok(card) => card,
                Err(err) => {
                    self.reject(err.detail())?;
                    continue;
                }
            };
            if !hand.contains(&card) {
                self.reject("Not in your hand")?;
            } else if !board.can_play_suit(card.suit(), hand) {
                let leading = board
                    .cur_leading_suit()
                    .map_or_else(|| "leading".to_string(), |s| s.to_string());
                self.reject(&format!("You should play a {leading} card"))?;
            } else {
                return Ok(card);
            }
        }
    }
}
