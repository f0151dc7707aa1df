use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Player, WinningLine};

pub const WIN_PATTERNS: [[usize; BOARD_SIDE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Player> {
    check_win_with_line(cells).map(|line| line.player)
}

/// First completed pattern in `WIN_PATTERNS` order.
pub fn check_win_with_line(cells: &[Mark; CELL_COUNT]) -> Option<WinningLine> {
    for pattern in WIN_PATTERNS {
        let [a, b, c] = pattern;
        let mark = cells[a];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b] == mark && cells[c] == mark {
            return mark.player().map(|player| WinningLine::new(player, pattern));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_cover_rows_columns_and_diagonals() {
        let mut hits = [0usize; CELL_COUNT];
        for pattern in WIN_PATTERNS {
            for index in pattern {
                hits[index] += 1;
            }
        }
        assert_eq!(hits[4], 4);
        for corner in [0, 2, 6, 8] {
            assert_eq!(hits[corner], 3);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(hits[edge], 2);
        }
    }

    #[test]
    fn test_check_win_each_pattern() {
        for pattern in WIN_PATTERNS {
            let mut cells = [Mark::Empty; CELL_COUNT];
            for index in pattern {
                cells[index] = Mark::O;
            }
            let line = check_win_with_line(&cells).unwrap();
            assert_eq!(line.player, Player::O);
            assert_eq!(line.cells, pattern);
        }
    }

    #[test]
    fn test_check_win_ignores_mixed_line() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[..BOARD_SIDE].copy_from_slice(&[Mark::X, Mark::O, Mark::X]);
        assert_eq!(check_win(&cells), None);
    }
}
