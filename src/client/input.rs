use std::{io::BufRead, str::FromStr};

use color_eyre::{eyre::WrapErr, Result};
use log::{debug, warn};

use crate::engine::prelude::*;

/// Where a line of card counts belongs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLocation {
    Hand,
    Draw,
    Discard,
    PlayedCards,
    Automated,
    OpponentCards,
    OpponentAutomated,
}

impl FromStr for CardLocation {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use CardLocation::*;
        match s {
            "HAND" => Ok(Hand),
            "DRAW" => Ok(Draw),
            "DISCARD" => Ok(Discard),
            "PLAYED_CARDS" => Ok(PlayedCards),
            "AUTOMATED" => Ok(Automated),
            "OPPONENT_CARDS" => Ok(OpponentCards),
            "OPPONENT_AUTOMATED" => Ok(OpponentAutomated),
            other => Err(DecisionError::UnknownCardLocation(other.into())),
        }
    }
}

/// Reads the referee's line based turn input.
pub struct SnapshotReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Reads one turn. `None` means the input ended cleanly between turns.
    pub fn read_snapshot(&mut self) -> Result<Option<GameStateSnapshot>> {
        let phase = match self.next_line()? {
            None => return Ok(None),
            Some(line) => line.parse::<Phase>().wrap_err("reading game phase")?,
        };

        let applications = self.read_applications().wrap_err("reading applications")?;
        let player = Player::new(self.read_standing().wrap_err("reading player")?);
        let opponent = Opponent::new(self.read_standing().wrap_err("reading opponent")?);

        let mut snapshot = GameStateSnapshot::new(phase, player, opponent);
        snapshot.applications = applications;
        self.read_cards(&mut snapshot).wrap_err("reading card locations")?;
        snapshot.legal_actions = self.read_legal_actions().wrap_err("reading possible moves")?;

        debug!(
            "input: {} phase, player at {:?} with {} cards in hand, opponent at {:?}",
            snapshot.phase,
            snapshot.player.desk(),
            snapshot.player.hand.len(),
            snapshot.opponent.desk()
        );
        Ok(Some(snapshot))
    }

    fn read_applications(&mut self) -> Result<Vec<Application>> {
        let count = self.read_count("applications count")?;
        (0..count)
            .map(|_| -> Result<Application> {
                let tokens = self.tokens("application")?;
                let [kind, id, costs @ ..] = tokens.as_slice() else {
                    return Err(DecisionError::Malformed { what: "application", token: tokens.join(" ") }.into());
                };
                let amounts: [u32; DESK_COUNT] = costs
                    .iter()
                    .map(|token| parse(token, "application cost"))
                    .collect::<Result<Vec<u32>, _>>()?
                    .try_into()
                    .map_err(|_| DecisionError::Malformed { what: "application costs", token: costs.join(" ") })?;
                Ok(Application::new(kind.clone(), parse(id, "application id")?, ManaCost::from_amounts(amounts)))
            })
            .collect()
    }

    fn read_standing(&mut self) -> Result<Standing> {
        let tokens = self.tokens("player")?;
        let [desk, score, daily_routine, architecture_study] = tokens.as_slice() else {
            return Err(DecisionError::Malformed { what: "player", token: tokens.join(" ") }.into());
        };
        Ok(Standing {
            desk: parse_desk(desk)?,
            score: parse(score, "score")?,
            permanent_daily_routine: parse(daily_routine, "permanent daily routine cards")?,
            permanent_architecture_study: parse(architecture_study, "permanent architecture study cards")?,
        })
    }

    fn read_cards(&mut self, snapshot: &mut GameStateSnapshot) -> Result<()> {
        let count = self.read_count("card locations count")?;
        for _ in 0..count {
            let tokens = self.tokens("card location")?;
            let Some((location, counts)) = tokens.split_first() else {
                return Err(DecisionError::Malformed { what: "card location", token: String::new() }.into());
            };
            let location: CardLocation = location.parse()?;
            if counts.len() != CARD_KIND_COUNT {
                return Err(DecisionError::Malformed { what: "card counts", token: counts.join(" ") }.into());
            }
            let counts = counts
                .iter()
                .map(|token| parse(token, "card count"))
                .collect::<Result<Vec<u32>, _>>()?;
            let cards = Deck::from_counts(&counts)?;

            use CardLocation::*;
            let deck = match location {
                Hand => &mut snapshot.player.hand,
                Draw => &mut snapshot.player.draw,
                Discard => &mut snapshot.player.discard,
                PlayedCards => &mut snapshot.player.played,
                Automated => &mut snapshot.player.automated,
                OpponentCards => &mut snapshot.opponent.cards,
                OpponentAutomated => &mut snapshot.opponent.automated,
            };
            deck.extend(cards);
        }
        Ok(())
    }

    fn read_legal_actions(&mut self) -> Result<LegalActions> {
        let count = self.read_count("possible moves count")?;
        let mut commands = Vec::with_capacity(count);
        for _ in 0..count {
            let command = self.line("possible move")?.trim().to_string();
            debug!("input: possible move {command}");
            commands.push(command);
        }
        if commands.is_empty() {
            warn!("input: the referee offered no moves");
        }
        Ok(LegalActions::new(commands))
    }

    fn read_count(&mut self, what: &'static str) -> Result<usize> {
        let line = self.line(what)?;
        Ok(parse(line.trim(), what)?)
    }

    fn tokens(&mut self, what: &'static str) -> Result<Vec<String>> {
        Ok(self.line(what)?.split_whitespace().map(String::from).collect())
    }

    fn line(&mut self, what: &'static str) -> Result<&str> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(DecisionError::UnexpectedEof { what }.into()),
        }
    }

    /// Next non blank line, without its line ending.
    fn next_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if !self.line.trim().is_empty() {
                return Ok(Some(self.line.trim_end()));
            }
        }
    }
}

fn parse<T: FromStr>(token: &str, what: &'static str) -> Result<T, DecisionError> {
    token
        .parse()
        .map_err(|_| DecisionError::Malformed { what, token: token.into() })
}

/// `-1` is the wire value for a participant not on the board yet.
fn parse_desk(token: &str) -> Result<Option<Desk>, DecisionError> {
    let index: i64 = parse(token, "desk")?;
    if index < 0 {
        return Ok(None);
    }
    usize::try_from(index)
        .ok()
        .and_then(Desk::from_index)
        .map(Some)
        .ok_or(DecisionError::UnknownDesk(index))
}
