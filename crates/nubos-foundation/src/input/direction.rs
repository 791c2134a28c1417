//! Four-way direction buckets for swipe classification.

use nubos_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Classifies a displacement by its angle in screen space (+Y down).
    ///
    /// Right covers `[-45°, 45°)`, down `[45°, 135°)`, up `[-135°, -45°)`
    /// and left everything else.
    pub fn from_displacement(displacement: Point) -> Direction {
        let angle = displacement.angle_degrees();
        if (-45.0..45.0).contains(&angle) {
            Direction::Right
        } else if (45.0..135.0).contains(&angle) {
            Direction::Down
        } else if (-135.0..-45.0).contains(&angle) {
            Direction::Up
        } else {
            Direction::Left
        }
    }

    /// Unit vector in screen space.
    pub fn vector(self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, -1.0),
            Direction::Down => Point::new(0.0, 1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_displacements() {
        assert_eq!(
            Direction::from_displacement(Point::new(20.0, 0.0)),
            Direction::Right
        );
        assert_eq!(
            Direction::from_displacement(Point::new(-20.0, 0.0)),
            Direction::Left
        );
        assert_eq!(
            Direction::from_displacement(Point::new(0.0, 20.0)),
            Direction::Down
        );
        assert_eq!(
            Direction::from_displacement(Point::new(0.0, -20.0)),
            Direction::Up
        );
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            Direction::from_displacement(Point::new(15.0, -4.0)),
            Direction::Right
        );
        assert_eq!(
            Direction::from_displacement(Point::new(-3.0, 16.0)),
            Direction::Down
        );
    }

    #[test]
    fn vector_round_trips_through_classification() {
        for direction in Direction::ALL {
            assert_eq!(
                Direction::from_displacement(direction.vector() * 20.0),
                direction
            );
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
