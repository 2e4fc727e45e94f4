//! Text command stream driving a [`BinomialHeaps`]
//!
//! The input is a sequence of whitespace-separated integers: the heap count
//! `n`, the command count `q`, then `q` commands, each a tag followed by its
//! arguments:
//!
//! | tag | arguments    | operation                         |
//! |-----|--------------|-----------------------------------|
//! | 0   | `heap value` | insert                            |
//! | 1   | `from to`    | move every element of `from` to `to` |
//! | 2   | `id`         | delete                            |
//! | 3   | `id value`   | update                            |
//! | 4   | `heap`       | print the minimum, `-1` if empty  |
//! | 5   | `heap`       | extract the minimum               |
//!
//! Heap indices `0..=n` are accepted. Identities count from 1 in insertion
//! order; an identity that is negative or was never issued is ignored.

use crate::error::HeapError;
use crate::heaps::BinomialHeaps;
use crate::node::{ElementId, Value};
use std::io::{self, Write};
use std::str::{FromStr, SplitAsciiWhitespace};
use thiserror::Error;

/// Printed by [`Command::GetMin`] for an empty heap
pub const EMPTY_MIN: Value = -1;

/// Error raised while reading or replaying a command stream
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("input ended while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidInteger {
        expected: &'static str,
        token: String,
    },

    #[error("unknown command tag {0}")]
    UnknownTag(i64),

    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// One operation of a command stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert { heap: usize, value: Value },
    Move { from: usize, to: usize },
    Delete { id: ElementId },
    Update { id: ElementId, value: Value },
    GetMin { heap: usize },
    ExtractMin { heap: usize },
}

/// What a command produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Min(Option<Value>),
}

impl Command {
    /// Runs the command against `heaps`
    pub fn apply(&self, heaps: &mut BinomialHeaps) -> Result<Outcome, HeapError> {
        match *self {
            Command::Insert { heap, value } => {
                heaps.insert(heap, value)?;
            }
            Command::Move { from, to } => heaps.move_heap(from, to)?,
            Command::Delete { id } => {
                heaps.delete(id);
            }
            Command::Update { id, value } => {
                heaps.update(id, value);
            }
            Command::GetMin { heap } => return Ok(Outcome::Min(heaps.get_min(heap)?)),
            Command::ExtractMin { heap } => {
                heaps.extract_min(heap)?;
            }
        }
        Ok(Outcome::Silent)
    }
}

/// A parsed command stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub heap_count: usize,
    pub commands: Vec<Command>,
}

impl Script {
    /// Builds the heap collection this script addresses
    ///
    /// One extra heap is allocated so that both 0-based and 1-based heap
    /// numbering are accepted.
    pub fn heaps(&self) -> BinomialHeaps {
        BinomialHeaps::new(self.heap_count + 1)
    }

    /// Replays every command, writing one line per [`Command::GetMin`]
    ///
    /// Returns the final state of the heaps.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BinomialHeaps, ScriptError> {
        let mut heaps = self.heaps();
        for command in &self.commands {
            if let Outcome::Min(min) = command.apply(&mut heaps)? {
                writeln!(out, "{}", min.unwrap_or(EMPTY_MIN))?;
            }
        }
        Ok(heaps)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens {
            inner: input.split_ascii_whitespace(),
        };
        let heap_count = tokens.next("heap count")?;
        let command_count: usize = tokens.next("command count")?;

        let mut commands = Vec::with_capacity(command_count.min(1 << 20));
        for _ in 0..command_count {
            commands.push(tokens.command()?);
        }
        Ok(Script {
            heap_count,
            commands,
        })
    }
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ScriptError> {
        let token = self
            .inner
            .next()
            .ok_or(ScriptError::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| ScriptError::InvalidInteger {
            expected,
            token: token.to_owned(),
        })
    }

    /// Reads an identity; negative numbers map to the never-issued identity 0
    fn id(&mut self) -> Result<ElementId, ScriptError> {
        let raw: i64 = self.next("element identity")?;
        Ok(ElementId(usize::try_from(raw).unwrap_or(0)))
    }

    fn command(&mut self) -> Result<Command, ScriptError> {
        let tag: i64 = self.next("command tag")?;
        let command = match tag {
            0 => Command::Insert {
                heap: self.next("heap index")?,
                value: self.next("value")?,
            },
            1 => Command::Move {
                from: self.next("heap index")?,
                to: self.next("heap index")?,
            },
            2 => Command::Delete { id: self.id()? },
            3 => Command::Update {
                id: self.id()?,
                value: self.next("value")?,
            },
            4 => Command::GetMin {
                heap: self.next("heap index")?,
            },
            5 => Command::ExtractMin {
                heap: self.next("heap index")?,
            },
            other => return Err(ScriptError::UnknownTag(other)),
        };
        Ok(command)
    }
}
