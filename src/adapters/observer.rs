use crate::core::{Roster, SpinObserver, SpinResult};
use crate::domain::model::star_bar;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

/// Announces spins on a writer; the CLI hands it stdout.
pub struct ConsoleObserver<W: Write + Send> {
    out: Mutex<W>,
    badges: HashMap<String, String>,
}

impl<W: Write + Send> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            badges: HashMap::new(),
        }
    }

    /// Remembers each restaurant's dietary badges so the winner line can show them.
    pub fn with_roster(mut self, roster: &Roster) -> Self {
        self.badges = roster
            .restaurants()
            .iter()
            .filter(|r| r.is_vegetarian || r.is_halal)
            .map(|r| (r.id.clone(), r.badges().join(" ")))
            .collect();
        self
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> SpinObserver for ConsoleObserver<W> {
    async fn on_spin_started(&self, _spin: &SpinResult) {
        if let Err(e) = self.write_line("🎰 Spinning...") {
            tracing::debug!("could not write spin banner: {}", e);
        }
    }

    async fn on_spin_finished(&self, spin: &SpinResult) -> Result<()> {
        let mut line = format!(
            "🎉 We're eating at {}! {}",
            spin.winner.name,
            star_bar(spin.winner.weight)
        );
        if let Some(badges) = self.badges.get(&spin.winner.id) {
            line.push_str("  ");
            line.push_str(badges);
        }
        self.write_line(&line)
    }
}
