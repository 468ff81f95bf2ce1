use eyre::{Result, eyre};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Move {
    type Error = eyre::Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            _ => Err(eyre!("unknown instruction: {value}"))
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "U"),
            Self::Down => write!(f, "D"),
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

impl Move {
    fn offset(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2D(pub isize, pub isize);

impl Point2D {
    fn step(&self, instruction: Move) -> Point2D {
        let (dx, dy) = instruction.offset();
        Point2D(self.0 + dx, self.1 + dy)
    }
}

/// Validates an instruction string. Empty input and any character outside
/// U, D, L, R are rejected, so a malformed route is never evaluated.
pub fn parse_route(input: &str) -> Result<Vec<Move>> {
    if input.is_empty() {
        return Err(eyre!("route is empty"));
    }
    input.chars().map(Move::try_from).collect()
}

/// Decides whether a walker starting at the origin and repeating `route`
/// without bound ever stands exactly on `target`.
///
/// One pass over the route collects the position after each prefix of a
/// single cycle; the position after the whole cycle is also the net
/// displacement every further cycle adds. The target is reachable iff
/// `target - prefix` is a non-negative integer multiple of the net
/// displacement for some prefix.
pub fn is_reachable(target: Point2D, route: &[Move]) -> bool {
    let mut prefixes = Vec::with_capacity(route.len() + 1);
    let mut cursor = Point2D::default();
    prefixes.push(cursor.clone());
    for instruction in route {
        cursor = cursor.step(*instruction);
        prefixes.push(cursor.clone());
    }
    let net = cursor;
    prefixes
        .iter()
        .any(|prefix| cycles_to(Point2D(target.0 - prefix.0, target.1 - prefix.1), &net))
}

// delta == k * net for some integer k >= 0.
fn cycles_to(delta: Point2D, net: &Point2D) -> bool {
    match (net.0, net.1) {
        (0, 0) => delta == Point2D(0, 0),
        (0, dy) => delta.0 == 0 && delta.1 % dy == 0 && delta.1 / dy >= 0,
        (dx, 0) => delta.1 == 0 && delta.0 % dx == 0 && delta.0 / dx >= 0,
        (dx, dy) => {
            delta.0 % dx == 0
                && delta.1 % dy == 0
                && delta.0 / dx == delta.1 / dy
                && delta.0 / dx >= 0
        }
    }
}
