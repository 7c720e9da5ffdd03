use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Direction, GridError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Wall layout of a rectangular grid. Cells outside the grid count as walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Maze {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "maze must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            walls: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_wall(&mut self, position: Position, wall: bool) {
        if let Some(idx) = self.idx(position) {
            self.walls[idx] = wall;
        }
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.idx(position).map(|idx| self.walls[idx]).unwrap_or(true)
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn idx(&self, position: Position) -> Option<usize> {
        if !self.in_bounds(position) {
            return None;
        }
        Some((position.y * self.width + position.x) as usize)
    }

    /// Where `direction` leads from `position`, or `None` when it walks into a wall.
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = position.offset(direction);
        (!self.is_wall(next)).then_some(next)
    }

    /// Open neighbours in [`Direction::CARDINAL`] order.
    pub fn moves(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::CARDINAL
            .into_iter()
            .filter_map(move |direction| Some((direction, self.step(position, direction)?)))
    }

    /// The four inner corners: top-left, bottom-left, top-right, bottom-right.
    pub fn corners(&self) -> [Position; 4] {
        let right = self.width - 2;
        let bottom = self.height - 2;
        [
            Position::new(1, 1),
            Position::new(1, bottom),
            Position::new(right, 1),
            Position::new(right, bottom),
        ]
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|&p| !self.is_wall(p))
    }
}

/// Boolean food grid. Hashable so it can be part of a search state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl FoodGrid {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cells: vec![false; (width.max(0) * height.max(0)) as usize],
        }
    }

    fn idx(&self, position: Position) -> Option<usize> {
        let inside = position.x >= 0
            && position.y >= 0
            && position.x < self.width
            && position.y < self.height;
        inside.then(|| (position.y * self.width + position.x) as usize)
    }

    pub fn has(&self, position: Position) -> bool {
        self.idx(position).map(|idx| self.cells[idx]).unwrap_or(false)
    }

    pub fn set(&mut self, position: Position, food: bool) {
        if let Some(idx) = self.idx(position) {
            self.cells[idx] = food;
        }
    }

    /// Removes the food at `position`, returning whether there was any.
    pub fn eat(&mut self, position: Position) -> bool {
        let had = self.has(position);
        self.set(position, false);
        had
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&food| food).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&food| food)
    }

    /// Food positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &food)| food)
            .map(move |(idx, _)| {
                let idx = idx as i32;
                Position::new(idx % self.width, idx / self.width)
            })
    }
}

/// A parsed text layout: walls, the start position, and food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub maze: Maze,
    pub start: Position,
    pub food: FoodGrid,
}

impl Layout {
    /// Parses `%` walls, one `P` start, and `.` food. Any other character is open floor.
    ///
    /// Blank lines and trailing whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyLayout);
        };
        let width = first.chars().count();

        let mut maze = Maze::new(width as u32, rows.len() as u32);
        let mut food = FoodGrid::new(width as u32, rows.len() as u32);
        let mut start = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedLayout {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, cell) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match cell {
                    '%' => maze.set_wall(position, true),
                    '.' => food.set(position, true),
                    'P' if start.is_some() => return Err(GridError::MultipleStarts),
                    'P' => start = Some(position),
                    _ => {}
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        Ok(Self { maze, start, food })
    }
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}
