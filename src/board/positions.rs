#![allow(missing_docs)]
//! Index types for cells, rows, columns, blocks and the units they form.
//!
//! All of them are thin wrappers around a `u8` index into the fixed 9x9 board.
//! Conversions between them are pure index arithmetic, there are no
//! backreferences anywhere.

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    row(cell) / 3 * 3 + col(cell) / 3
}

const COL_OFFSET: u8 = 9;
const BLOCK_OFFSET: u8 = 18;

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                pub fn get(self) -> u8 {
                    self.0
                }

                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
    Unit: 27,
    Position: 9,
);

/// One of the three kinds of unit. Units number rows first, then columns,
/// then blocks.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum UnitType {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl Unit {
    pub fn categorize(self) -> UnitType {
        debug_assert!(self.0 < 27);
        match self.0 {
            0..=8 => UnitType::Row(Row::new(self.0)),
            9..=17 => UnitType::Col(Col::new(self.0 - COL_OFFSET)),
            _ => UnitType::Block(Block::new(self.0 - BLOCK_OFFSET)),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Conversions
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! define_conversion_shortcuts {
    (
        $(
            $type:ty : {
                $( $target_type:ty , $method_name:ident );* $(;)*
            }
        )*
    ) => {
        $(
            impl $type {
                $(
                    #[inline(always)]
                    pub fn $method_name(self) -> $target_type {
                        <$target_type>::from(self)
                    }
                )*
            }
        )*
    };
}

define_conversion_shortcuts!(
    Cell : {
        Row, row;
        Col, col;
        Block, block;
    }
);

macro_rules! impl_from {
    ( $( $from:ty, $to:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for $to {
                fn from($arg: $from) -> $to {
                    let $arg = $arg.0;
                    <$to>::new($code)
                }
            }
        )*
    };
}

impl_from!(
    Row, Unit, |r| { r },
    Col, Unit, |c| { c + COL_OFFSET },
    Block, Unit, |b| { b + BLOCK_OFFSET },
);

// non-equivalent conversions
// the first type is the container of the second
impl_from!(
    Cell, Row, |c| { row(c) },
    Cell, Col, |c| { col(c) },
    Cell, Block, |c| { block(c) },
);

pub(crate) trait IntoUnit: Into<Unit> {
    #[inline(always)]
    fn unit(self) -> Unit {
        self.into()
    }
}

impl<T: Into<Unit>> IntoUnit for T {}

///////////////////////////////////////////////////////////////////////////////////////////////

impl Cell {
    /// The three units this cell belongs to, in row, column, block order.
    pub fn units(self) -> [Unit; 3] {
        [self.row().unit(), self.col().unit(), self.block().unit()]
    }
}

impl Row {
    pub fn cell_at(self, pos: Position) -> Cell {
        Cell::new(self.0 * 9 + pos.0)
    }
}

impl Col {
    pub fn cell_at(self, pos: Position) -> Cell {
        Cell::new(pos.0 * 9 + self.0)
    }
}

impl Block {
    pub fn cell_at(self, pos: Position) -> Cell {
        let band = self.0 / 3;
        let stack = self.0 % 3;
        let row_in_band = pos.0 / 3;
        let col_in_stack = pos.0 % 3;
        let row = band * 3 + row_in_band;
        let col = stack * 3 + col_in_stack;
        Cell::new(row * 9 + col)
    }
}

impl Unit {
    pub fn cell_at(self, pos: Position) -> Cell {
        match self.categorize() {
            UnitType::Row(row) => row.cell_at(pos),
            UnitType::Col(col) => col.cell_at(pos),
            UnitType::Block(block) => block.cell_at(pos),
        }
    }

    /// The cells of this unit in slot order.
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell(0); 9];
        for (pos, cell) in Position::all().zip(cells.iter_mut()) {
            *cell = self.cell_at(pos);
        }
        cells
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_cells() {
        for (raw_row, row) in (0..9).map(|r| (r, Row::new(r))) {
            let first_cell = raw_row * 9;

            let cells = Unit::from(row).cells();
            let expected = (first_cell..first_cell + 9).map(Cell::new);
            assert!(cells.iter().copied().eq(expected));
        }
    }

    #[test]
    fn col_cells() {
        for (raw_col, col) in (0..9).map(|c| (c, Col::new(c))) {
            let cells = Unit::from(col).cells();
            let expected = (raw_col..81).step_by(9).map(Cell::new);
            assert!(cells.iter().copied().eq(expected));
        }
    }

    #[test]
    fn block_cells() {
        // block 4 is the central 3x3 square
        let cells = Unit::from(Block::new(4)).cells();
        let expected = [30, 31, 32, 39, 40, 41, 48, 49, 50];
        assert!(cells.iter().copied().eq(expected.iter().copied().map(Cell::new)));
    }

    #[test]
    fn block_of_cell() {
        for cell in Cell::all() {
            let expected = cell.row().get() / 3 * 3 + cell.col().get() / 3;
            assert_eq!(cell.block().get(), expected);
        }
    }

    #[test]
    fn slot_in_block() {
        // slot within a block is (row % 3) * 3 + col % 3
        for cell in Cell::all() {
            let slot = cell.row().get() % 3 * 3 + cell.col().get() % 3;
            assert_eq!(cell.block().cell_at(Position::new(slot)), cell);
        }
    }

    #[test]
    fn each_cell_in_its_units() {
        for cell in Cell::all() {
            for unit in cell.units().iter() {
                let occurrences = unit.cells().iter().filter(|&&c| c == cell).count();
                assert_eq!(occurrences, 1);
            }
        }
    }

    #[test]
    fn units_partition_the_board() {
        // every cell appears in exactly 3 of the 27 units
        for cell in Cell::all() {
            let occurrences = Unit::all()
                .flat_map(|unit| unit.cells().to_vec())
                .filter(|&c| c == cell)
                .count();
            assert_eq!(occurrences, 3);
        }
    }
}
