//! Terminal confirmation and wall clock
//!
//! [`TerminalPrompt`] asks on stderr and reads one line from stdin.
//! [`AssumeYes`] answers every gate affirmatively (`--yes`).

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};
use colored::Colorize;

use crate::core::models::{Gate, is_affirmative};
use crate::core::ports::{Clock, Confirm};
use crate::error::Result;

/// Interactive confirmation on the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, gate: Gate) -> Result<bool> {
        eprint!("{} {} ", gate.question().bold(), "[y/N]".dimmed());
        io::stderr().flush()?;

        let input = read_answer(&mut io::stdin().lock())?;
        let answer = is_affirmative(&input);
        log::debug!("Gate {gate}: {}", if answer { "accepted" } else { "declined" });
        Ok(answer)
    }
}

/// Read one line of operator input
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so they decline
/// like any other answer. EOF yields an empty answer.
fn read_answer(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}

/// Non-interactive confirmation that accepts every gate
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, gate: Gate) -> Result<bool> {
        log::info!("Gate {gate}: accepted (--yes)");
        Ok(true)
    }
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
