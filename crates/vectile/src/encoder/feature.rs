//! Feature drivers: turn paths and markers into draw operations

use glam::IVec2;

use crate::chain::Path;
use crate::types::Marker;

use super::{CommandEncoder, DrawOp};

/// Encode the line feature
///
/// A MoveTo is emitted only when a path does not start at the cursor, so
/// paths that continue where the previous one ended extend the same LineTo
/// run.
pub fn encode_paths(paths: &[Path]) -> Vec<u32> {
    let mut encoder = CommandEncoder::new();

    for path in paths {
        let Some((first, rest)) = path.split_first() else {
            continue;
        };

        if !encoder.has_commands() || *first != encoder.cursor() {
            encoder.push(DrawOp::MoveTo(*first));
        }
        for point in rest {
            encoder.push(DrawOp::LineTo(*point));
        }
    }

    encoder.finish()
}

/// The closed unit diamond drawn around a marker
pub fn diamond(marker: Marker) -> [DrawOp; 5] {
    let p = marker.position;
    [
        DrawOp::MoveTo(p - IVec2::X),
        DrawOp::LineTo(p - IVec2::Y),
        DrawOp::LineTo(p + IVec2::X),
        DrawOp::LineTo(p + IVec2::Y),
        DrawOp::ClosePath,
    ]
}

/// Encode the polygon feature, one diamond per marker
pub fn encode_markers(markers: &[Marker]) -> Vec<u32> {
    let mut encoder = CommandEncoder::new();
    for marker in markers {
        for op in diamond(*marker) {
            encoder.push(op);
        }
    }
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{Opcode, command_word, decode_runs, zigzag_encode};

    fn zz(n: i32) -> u32 {
        zigzag_encode(n)
    }

    #[test]
    fn test_single_path_geometry() {
        let paths = vec![vec![IVec2::new(0, 0), IVec2::new(5, 5)]];
        assert_eq!(
            encode_paths(&paths),
            vec![
                command_word(Opcode::MoveTo, 1),
                zz(0),
                zz(0),
                command_word(Opcode::LineTo, 1),
                zz(5),
                zz(5),
            ]
        );
    }

    #[test]
    fn test_connected_paths_share_line_run() {
        let paths = vec![
            vec![IVec2::new(1, 1), IVec2::new(2, 2)],
            vec![IVec2::new(2, 2), IVec2::new(4, 2)],
        ];
        let runs = decode_runs(&encode_paths(&paths)).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].opcode, Opcode::MoveTo);
        assert_eq!(runs[1].opcode, Opcode::LineTo);
        assert_eq!(runs[1].count, 2);
    }

    #[test]
    fn test_disconnected_paths_move_again() {
        let paths = vec![
            vec![IVec2::new(1, 1), IVec2::new(2, 2)],
            vec![IVec2::new(8, 8), IVec2::new(9, 9)],
        ];
        let runs = decode_runs(&encode_paths(&paths)).unwrap();
        let opcodes: Vec<Opcode> = runs.iter().map(|r| r.opcode).collect();
        assert_eq!(
            opcodes,
            vec![Opcode::MoveTo, Opcode::LineTo, Opcode::MoveTo, Opcode::LineTo]
        );
        assert_eq!(runs[2].deltas, vec![IVec2::new(6, 6)]);
    }

    #[test]
    fn test_first_path_at_origin_still_moves() {
        let paths = vec![vec![IVec2::new(0, 0), IVec2::new(0, 3)]];
        let geometry = encode_paths(&paths);
        assert_eq!(geometry[0], command_word(Opcode::MoveTo, 1));
    }

    #[test]
    fn test_marker_geometry() {
        let geometry = encode_markers(&[Marker::new(10, 10)]);
        assert_eq!(
            geometry,
            vec![
                command_word(Opcode::MoveTo, 1),
                zz(9),
                zz(10),
                command_word(Opcode::LineTo, 3),
                zz(1),
                zz(-1),
                zz(1),
                zz(1),
                zz(-1),
                zz(1),
                command_word(Opcode::ClosePath, 1),
            ]
        );
    }

    #[test]
    fn test_markers_are_independent_runs() {
        let markers = [Marker::new(10, 10), Marker::new(20, 5)];
        let runs = decode_runs(&encode_markers(&markers)).unwrap();
        let shape: Vec<(Opcode, u32)> = runs.iter().map(|r| (r.opcode, r.count)).collect();
        assert_eq!(
            shape,
            vec![
                (Opcode::MoveTo, 1),
                (Opcode::LineTo, 3),
                (Opcode::ClosePath, 1),
                (Opcode::MoveTo, 1),
                (Opcode::LineTo, 3),
                (Opcode::ClosePath, 1),
            ]
        );
        // Second diamond starts at (19, 5), cursor was left at (10, 11)
        assert_eq!(runs[3].deltas, vec![IVec2::new(9, -6)]);
    }

    #[test]
    fn test_no_markers_empty_geometry() {
        assert!(encode_markers(&[]).is_empty());
        assert!(encode_paths(&[]).is_empty());
    }
}
