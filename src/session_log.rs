//! JSON-lines session log.
//!
//! One record per line. A failed write disables the log for the rest of the
//! session; play never stops because of it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    SessionStart {
        seed: u64,
        width: u8,
        height: u8,
    },
    Lock {
        tick: u64,
        shape: &'a str,
        rows: &'a [i16],
        award: u32,
        score: u32,
    },
    GameOver {
        tick: u64,
        score: u32,
    },
}

pub struct SessionLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl SessionLog<BufWriter<File>> {
    /// Open `path` for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn session_start(&mut self, seed: u64, width: u8, height: u8) {
        self.write(&Record::SessionStart {
            seed,
            width,
            height,
        });
    }

    pub fn lock(&mut self, tick: u64, event: &LockEvent, score: u32) {
        self.write(&Record::Lock {
            tick,
            shape: event.kind.as_str(),
            rows: &event.rows,
            award: event.award,
            score,
        });
    }

    pub fn game_over(&mut self, tick: u64, score: u32) {
        self.write(&Record::GameOver { tick, score });
        self.flush();
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// Flush and hand back the writer, if the log is still enabled.
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }

    fn write(&mut self, record: &Record<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }
}
