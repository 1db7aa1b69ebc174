//! Drawing command encoding
//!
//! Geometry is written as a flat `u32` stream of command runs. A command word
//! packs a repeat count and an opcode, `(count << 3) | opcode`, and is
//! followed by the parameters of every repetition: a zigzag-encoded
//! `(dx, dy)` pair per MoveTo/LineTo, nothing for ClosePath. Deltas are taken
//! against a cursor that starts at the origin for each feature.

mod decode;
mod feature;
mod zigzag;

pub use decode::{CommandRun, decode_ops, decode_runs};
pub use feature::{diamond, encode_markers, encode_paths};
pub use zigzag::{zigzag_decode, zigzag_encode};

use glam::IVec2;

use crate::constants::{CMD_BITS, CMD_MASK};

/// Drawing command opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Opcode {
    MoveTo = 1,
    LineTo = 2,
    ClosePath = 7,
}

impl Opcode {
    /// Parse the opcode bits of a command word
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Opcode::MoveTo),
            2 => Some(Opcode::LineTo),
            7 => Some(Opcode::ClosePath),
            _ => None,
        }
    }

    /// Parameters consumed per repetition
    #[inline]
    pub fn parameter_count(self) -> usize {
        match self {
            Opcode::MoveTo | Opcode::LineTo => 2,
            Opcode::ClosePath => 0,
        }
    }
}

/// A single drawing operation in absolute grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    MoveTo(IVec2),
    LineTo(IVec2),
    ClosePath,
}

impl DrawOp {
    pub fn opcode(&self) -> Opcode {
        match self {
            DrawOp::MoveTo(_) => Opcode::MoveTo,
            DrawOp::LineTo(_) => Opcode::LineTo,
            DrawOp::ClosePath => Opcode::ClosePath,
        }
    }
}

/// Pack a run length and opcode into a command word
#[inline]
pub fn command_word(opcode: Opcode, count: u32) -> u32 {
    (count << CMD_BITS) | (opcode as u32 & CMD_MASK)
}

/// Split a command word into its opcode bits and run length
#[inline]
pub fn split_command(word: u32) -> (u32, u32) {
    (word & CMD_MASK, word >> CMD_BITS)
}

/// The currently open command run
#[derive(Debug, Clone, Copy)]
struct OpenRun {
    opcode: Opcode,
    length: u32,
    /// Index of the placeholder command word in the geometry stream
    index: usize,
}

/// Per-feature command stream encoder
///
/// Consecutive operations with the same opcode share one command word. The
/// word is written as a placeholder when a run opens and patched with the
/// final count when the opcode changes or the encoder is finished.
///
/// # Example
///
/// ```ignore
/// let mut encoder = CommandEncoder::new();
/// encoder.push(DrawOp::MoveTo(IVec2::new(0, 0)));
/// encoder.push(DrawOp::LineTo(IVec2::new(5, 5)));
/// let geometry = encoder.finish();
/// assert_eq!(geometry, vec![9, 0, 0, 10, 10, 10]);
/// ```
#[derive(Debug, Default)]
pub struct CommandEncoder {
    geometry: Vec<u32>,
    run: Option<OpenRun>,
    cursor: IVec2,
}

impl CommandEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position the next delta is measured from
    #[inline]
    pub fn cursor(&self) -> IVec2 {
        self.cursor
    }

    /// True once any command has been written
    #[inline]
    pub fn has_commands(&self) -> bool {
        self.run.is_some()
    }

    /// Append one drawing operation
    pub fn push(&mut self, op: DrawOp) {
        let opcode = op.opcode();
        let current = self.run;
        let run = match current {
            Some(run) if run.opcode == opcode => run,
            _ => {
                self.close_run();
                let index = self.geometry.len();
                self.geometry.push(0);
                OpenRun {
                    opcode,
                    length: 0,
                    index,
                }
            }
        };

        match op {
            DrawOp::MoveTo(point) | DrawOp::LineTo(point) => {
                let delta = point.wrapping_sub(self.cursor);
                self.geometry.push(zigzag_encode(delta.x));
                self.geometry.push(zigzag_encode(delta.y));
                self.cursor = point;
            }
            DrawOp::ClosePath => {}
        }

        self.run = Some(OpenRun {
            length: run.length + 1,
            ..run
        });
    }

    /// Patch the open run's command word, if any
    fn close_run(&mut self) {
        if let Some(run) = self.run.take() {
            self.geometry[run.index] = command_word(run.opcode, run.length);
        }
    }

    /// Close the last run and return the geometry stream
    pub fn finish(mut self) -> Vec<u32> {
        self.close_run();
        self.geometry
    }
}
