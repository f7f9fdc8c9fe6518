use tracing::debug;

use super::{
    common::{Direction, Position},
    grid::Grid,
};

/// Moves one cell towards `direction` if the target is inside the grid and
/// passable. A blocked move returns `position` unchanged.
pub fn attempt_move(position: Position, direction: Direction, grid: &Grid) -> Position {
    match position.step(direction) {
        Some(candidate) if grid.contains(&candidate) && grid.is_passable(&candidate) => {
            debug!("moved {:?} to {:?}", direction, candidate);
            candidate
        }
        _ => {
            debug!("blocked moving {:?} from {:?}", direction, position);
            position
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::{Direction, Grid, Position};

    use super::attempt_move;

    #[test]
    fn test_move_onto_floor() {
        let grid = create_grid();

        let p = attempt_move(Position::new(1, 1), Direction::Right, &grid);
        assert_eq!(p, Position::new(1, 2));
        let p = attempt_move(p, Direction::Down, &grid);
        assert_eq!(p, Position::new(2, 2));
        let p = attempt_move(p, Direction::Up, &grid);
        assert_eq!(p, Position::new(1, 2));
        let p = attempt_move(p, Direction::Left, &grid);
        assert_eq!(p, Position::new(1, 1));
    }

    #[test]
    fn test_wall_blocks_move() {
        let grid = create_grid();

        let start = Position::new(1, 1);
        assert_eq!(attempt_move(start, Direction::Up, &grid), start);
        assert_eq!(attempt_move(start, Direction::Left, &grid), start);
        assert_eq!(attempt_move(start, Direction::Down, &grid), start);
    }

    #[test]
    fn test_edges_do_not_underflow() {
        // open edges, so only the bounds check can stop the move
        let grid: Grid = "2,2\n01\n10".parse().unwrap();

        let corner = Position::new(0, 0);
        assert_eq!(attempt_move(corner, Direction::Up, &grid), corner);
        assert_eq!(attempt_move(corner, Direction::Left, &grid), corner);

        let corner = Position::new(1, 1);
        assert_eq!(attempt_move(corner, Direction::Down, &grid), corner);
        assert_eq!(attempt_move(corner, Direction::Right, &grid), corner);
    }

    fn create_grid() -> Grid {
        let s = r#"
5,5
wwwww
w01ww
ww1ww
w000w
wwwww"#;
        s.parse().unwrap()
    }
}
