pub mod input;

use std::io::{BufRead, Write};

use color_eyre::{eyre::WrapErr, Result};
use log::info;

use crate::engine::prelude::*;

use input::SnapshotReader;

/// The referee's side of the conversation: snapshots come in one turn
/// at a time, a single command goes back for each.
pub struct Client<R, W> {
    reader: SnapshotReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Client<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            reader: SnapshotReader::new(input),
            output,
        }
    }

    pub fn next_snapshot(&mut self) -> Result<Option<GameStateSnapshot>> {
        self.reader.read_snapshot()
    }

    pub fn send(&mut self, action: Action) -> Result<()> {
        writeln!(self.output, "{action}").wrap_err("writing action")?;
        self.output.flush().wrap_err("flushing action")?;
        Ok(())
    }

    /// Plays turns until the referee closes the input. Any fatal error
    /// ends the game for us.
    pub fn run(&mut self, game: &Game) -> Result<()> {
        info!("client: waiting for the first turn");
        let mut turn = 0usize;
        while let Some(snapshot) = self.next_snapshot()? {
            turn += 1;
            let action = game
                .decide(&snapshot)
                .wrap_err_with(|| format!("deciding turn {turn} ({} phase)", snapshot.phase))?;
            self.send(action)?;
        }
        info!("client: input closed after {turn} turns");
        Ok(())
    }
}
