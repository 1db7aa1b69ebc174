//! Geometry stream decoding

use glam::IVec2;

use crate::error::GeometryError;

use super::{DrawOp, Opcode, split_command, zigzag_decode};

/// One decoded command run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRun {
    pub opcode: Opcode,
    pub count: u32,
    /// Relative `(dx, dy)` per repetition; empty for ClosePath
    pub deltas: Vec<IVec2>,
}

/// Parse a geometry stream into command runs
pub fn decode_runs(geometry: &[u32]) -> Result<Vec<CommandRun>, GeometryError> {
    let mut runs = Vec::new();
    let mut index = 0;

    while index < geometry.len() {
        let word = geometry[index];
        let (bits, count) = split_command(word);
        let opcode =
            Opcode::from_bits(bits).ok_or(GeometryError::UnknownCommand { word, index })?;
        index += 1;

        let expected = opcode.parameter_count() * count as usize;
        let available = geometry.len() - index;
        if expected > available {
            return Err(GeometryError::Truncated {
                index,
                expected,
                available,
            });
        }

        let deltas = geometry[index..index + expected]
            .chunks_exact(2)
            .map(|pair| IVec2::new(zigzag_decode(pair[0]), zigzag_decode(pair[1])))
            .collect();
        index += expected;

        runs.push(CommandRun {
            opcode,
            count,
            deltas,
        });
    }

    Ok(runs)
}

/// Parse a geometry stream into absolute drawing operations
pub fn decode_ops(geometry: &[u32]) -> Result<Vec<DrawOp>, GeometryError> {
    let mut ops = Vec::new();
    let mut cursor = IVec2::ZERO;

    for run in decode_runs(geometry)? {
        match run.opcode {
            Opcode::ClosePath => {
                ops.extend(std::iter::repeat_n(DrawOp::ClosePath, run.count as usize));
            }
            Opcode::MoveTo | Opcode::LineTo => {
                for delta in run.deltas {
                    cursor = cursor.wrapping_add(delta);
                    ops.push(if run.opcode == Opcode::MoveTo {
                        DrawOp::MoveTo(cursor)
                    } else {
                        DrawOp::LineTo(cursor)
                    });
                }
            }
        }
    }

    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{CommandEncoder, command_word};

    #[test]
    fn test_decode_ops_restores_absolute_points() {
        let ops = vec![
            DrawOp::MoveTo(IVec2::new(3, 4)),
            DrawOp::LineTo(IVec2::new(10, 2)),
            DrawOp::LineTo(IVec2::new(0, 0)),
            DrawOp::ClosePath,
            DrawOp::MoveTo(IVec2::new(4095, 4095)),
        ];
        let mut encoder = CommandEncoder::new();
        for op in &ops {
            encoder.push(*op);
        }
        assert_eq!(decode_ops(&encoder.finish()).unwrap(), ops);
    }

    #[test]
    fn test_decode_unknown_command() {
        let err = decode_runs(&[command_word(Opcode::MoveTo, 1), 0, 0, 0x0b]).unwrap_err();
        assert_eq!(err, GeometryError::UnknownCommand { word: 0x0b, index: 3 });
    }

    #[test]
    fn test_decode_truncated_run() {
        let err = decode_runs(&[command_word(Opcode::LineTo, 2), 2, 2, 4]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Truncated {
                index: 1,
                expected: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_runs(&[]).unwrap().is_empty());
    }
}
