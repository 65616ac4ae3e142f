//! Day 18: digging out a lava lagoon from the elves' dig plan.

use itertools::Itertools;
use tracing::debug;

use crate::location::Position;
use crate::puzzles::{Answer, PuzzleError};
use crate::shape::{Direction, Step};

/// One line of a dig plan: a trench `length` cubes long, dug heading `direction`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Trench {
    /// Which way the digger moves.
    pub direction: Direction,
    /// How many cubes it digs.
    pub length: isize,
}

impl Trench {
    /// Read the plain instruction at the front of plan line `index`, like `R 6`.
    pub fn parse(index: usize, line: &str) -> Result<Self, PuzzleError> {
        let (direction, length, _) = fields(index, line)?;
        let letter = direction.chars()
            .exactly_one()
            .map_err(|_| PuzzleError::parse(index, format!("direction {direction:?} is not one letter")))?;

        Ok(Self {
            direction: Direction::try_from(letter)?,
            length: length.parse()
                .map_err(|_| PuzzleError::parse(index, format!("bad length {length:?}")))?,
        })
    }

    /// Read the instruction hidden in the colour code of plan line `index`, like `(#70c710)`.
    ///
    /// The first five hex digits are the length. The last is the direction, counting clockwise from east.
    pub fn decode(index: usize, line: &str) -> Result<Self, PuzzleError> {
        let (_, _, colour) = fields(index, line)?;
        let hex = colour.strip_prefix("(#")
            .and_then(|rest| rest.strip_suffix(')'))
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| PuzzleError::parse(index, format!("bad colour {colour:?}")))?;
        let (length, direction) = hex.split_at(5);

        let direction = match direction {
            "0" => Direction::East,
            "1" => Direction::South,
            "2" => Direction::West,
            "3" => Direction::North,
            other => return Err(PuzzleError::parse(index, format!("colour direction {other:?}"))),
        };
        let length = isize::from_str_radix(length, 16)
            .map_err(|_| PuzzleError::parse(index, format!("bad colour length {length:?}")))?;

        Ok(Self { direction, length })
    }
}

fn fields(index: usize, line: &str) -> Result<(&str, &str, &str), PuzzleError> {
    line.split_whitespace()
        .collect_tuple()
        .ok_or_else(|| PuzzleError::parse(index, "expected direction, length and colour"))
}

fn plan<F>(input: &str, read: F) -> Result<Vec<Trench>, PuzzleError>
where
    F: Fn(usize, &str) -> Result<Trench, PuzzleError>,
{
    input.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| read(index, line))
        .collect()
}

/// Every corner the digger visits, from the origin to wherever the last trench ends.
pub fn corners(plan: &[Trench]) -> Vec<Position> {
    let walked = plan.iter().scan(Position(0, 0), |position, trench| {
        *position = trench.direction.repeat_from(*position, trench.length);
        Some(*position)
    });

    std::iter::once(Position(0, 0)).chain(walked).collect_vec()
}

/// Cubes dug out once the trench loop and everything inside it are excavated.
///
/// The shoelace formula gives the area enclosed by the corners, and Pick's theorem turns it into whole cubes.
pub fn lagoon_volume(plan: &[Trench]) -> Answer {
    let corners = corners(plan);
    if corners.first() != corners.last() {
        return Err(PuzzleError::Missing("closed trench loop"));
    }

    let twice_area = corners.iter()
        .tuple_windows()
        .map(|(a, b)| a.0 * b.1 - a.1 * b.0)
        .sum::<isize>()
        .unsigned_abs() as u64;
    let boundary: u64 = plan.iter().map(|trench| trench.length.unsigned_abs() as u64).sum();

    debug!(corners = corners.len(), twice_area, boundary, "lagoon measured");
    Ok((twice_area + boundary) / 2 + 1)
}

/// Volume following the plain instructions.
pub fn part_one(input: &str) -> Answer {
    lagoon_volume(&plan(input, Trench::parse)?)
}

/// Volume following the instructions hidden in the colour codes.
pub fn part_two(input: &str) -> Answer {
    lagoon_volume(&plan(input, Trench::decode)?)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::shape::DirectionError;

    const EXAMPLE: &str = indoc! {"
        R 6 (#70c710)
        D 5 (#0dc571)
        L 2 (#5713f0)
        D 2 (#d2c081)
        R 2 (#59c680)
        D 2 (#411b91)
        L 5 (#8ceee2)
        U 2 (#caa173)
        L 1 (#1b58a2)
        U 2 (#caa171)
        R 2 (#7807d2)
        U 3 (#a77fa3)
        L 2 (#015232)
        U 2 (#7a21e3)
    "};

    #[test]
    fn plain_plan() -> Result<(), PuzzleError> {
        assert_eq!(part_one(EXAMPLE)?, 62);
        Ok(())
    }

    #[test]
    fn colour_plan() -> Result<(), PuzzleError> {
        assert_eq!(part_two(EXAMPLE)?, 952408144115);
        Ok(())
    }

    #[test]
    fn decode_colour() -> Result<(), PuzzleError> {
        let trench = Trench::decode(0, "R 6 (#70c710)")?;
        assert_eq!(trench, Trench { direction: Direction::East, length: 461937 });
        assert!(matches!(Trench::decode(0, "R 6 (#70c714)"), Err(PuzzleError::Parse { line: 1, .. })));
        Ok(())
    }

    #[test]
    fn square_corners() -> Result<(), PuzzleError> {
        let square = plan("R 2 (#000000)\nD 2 (#000000)\nL 2 (#000000)\nU 2 (#000000)\n", Trench::parse)?;
        assert_eq!(corners(&square), vec![
            Position(0, 0),
            Position(0, 2),
            Position(2, 2),
            Position(2, 0),
            Position(0, 0),
        ]);
        assert_eq!(lagoon_volume(&square)?, 9);
        Ok(())
    }

    #[test]
    fn rejects_bad_plans() {
        assert!(matches!(
            part_one("X 6 (#70c710)\n"),
            Err(PuzzleError::Direction(DirectionError::InvalidDirection('X')))
        ));
        assert!(matches!(part_one("RR 6 (#70c710)\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part_one("R six (#70c710)\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part_one("R 6 (#70c710)\nD 5 (#0dc571)\n"), Err(PuzzleError::Missing(_))));
    }
}
