use crate::{HEIGHT, VGA_TEXT_BUFFER, VgaAttribute, VgaCell, WIDTH};

/// Storage behind a [`VgaConsole`](crate::VgaConsole).
///
/// Callers address cells by `(row, col)` with `row < HEIGHT` and `col < WIDTH`.
/// The console upholds this by construction; implementations only check it in
/// debug builds.
pub trait TextBuffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: VgaCell);

    fn read_cell(&self, row: usize, col: usize) -> VgaCell;
}

/// The real display memory, accessed with volatile 16-bit loads and stores so
/// that every write becomes visible immediately.
pub struct MmioTextBuffer {
    base: *mut u16,
}

impl MmioTextBuffer {
    /// # Safety
    /// `base` must point to `WIDTH * HEIGHT` mapped, writable 16-bit cells that
    /// nothing else accesses for the lifetime of the returned value.
    #[must_use]
    pub const unsafe fn new(base: *mut u16) -> Self {
        Self { base }
    }

    /// The color text buffer at [`VGA_TEXT_BUFFER`].
    ///
    /// # Safety
    /// The region must be identity mapped and exclusively owned by the caller,
    /// see [`MmioTextBuffer::new`].
    #[must_use]
    pub unsafe fn vga() -> Self {
        unsafe { Self::new(VGA_TEXT_BUFFER as *mut u16) }
    }

    #[inline]
    fn cell_ptr(&self, row: usize, col: usize) -> *mut u16 {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell ({row}, {col}) outside the grid");
        // SAFETY: in bounds per the trait contract and the constructor's guarantee.
        unsafe { self.base.add(row * WIDTH + col) }
    }
}

impl TextBuffer for MmioTextBuffer {
    #[inline]
    fn write_cell(&mut self, row: usize, col: usize, cell: VgaCell) {
        unsafe { self.cell_ptr(row, col).write_volatile(cell.into_word()) }
    }

    #[inline]
    fn read_cell(&self, row: usize, col: usize) -> VgaCell {
        VgaCell::from_word(unsafe { self.cell_ptr(row, col).read_volatile() })
    }
}

/// An 80×25 grid kept in ordinary memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryTextBuffer {
    cells: [[VgaCell; WIDTH]; HEIGHT],
}

impl Default for MemoryTextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTextBuffer {
    /// A grid of NUL characters with a zero attribute, like display memory
    /// nobody has written to yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[VgaCell::new(0, VgaAttribute::from_bits(0)); WIDTH]; HEIGHT],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> &[[VgaCell; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// The characters of one row, attributes stripped.
    #[must_use]
    pub fn row_bytes(&self, row: usize) -> [u8; WIDTH] {
        self.cells[row].map(|cell| cell.character)
    }
}

impl TextBuffer for MemoryTextBuffer {
    #[inline]
    fn write_cell(&mut self, row: usize, col: usize, cell: VgaCell) {
        self.cells[row][col] = cell;
    }

    #[inline]
    fn read_cell(&self, row: usize, col: usize) -> VgaCell {
        self.cells[row][col]
    }
}
