//! Sheet layout planning.
//!
//! A "sheet" is one physical leaf of the book: up to two page faces, left
//! and right. The first sheet is the front cover (no left face) and the
//! last sheet is the back cover (no right face). The plan is built once at
//! startup from the total page count and never mutated afterwards.

/// One leaf of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    /// Page shown on the left face, 1-based. Absent on the front cover.
    pub left: Option<usize>,
    /// Page shown on the right face, 1-based. Absent on the back cover.
    pub right: Option<usize>,
}

/// Build the ordered sheet plan for an even `total_pages`.
///
/// Produces `total_pages / 2 + 1` sheets: the front cover carries page 1 on
/// its right face, each interior sheet `i` carries pages `2i` and `2i + 1`,
/// and the back cover carries the final page on its left face. Reading all
/// faces left-to-right yields `1..=total_pages` with no gaps or repeats.
pub fn plan_sheets(total_pages: usize) -> Vec<Sheet> {
    debug_assert!(total_pages >= 2 && total_pages % 2 == 0);

    let last = total_pages / 2;
    let mut sheets = Vec::with_capacity(last + 1);
    sheets.push(Sheet {
        left: None,
        right: Some(1),
    });
    for i in 1..last {
        sheets.push(Sheet {
            left: Some(2 * i),
            right: Some(2 * i + 1),
        });
    }
    sheets.push(Sheet {
        left: Some(total_pages),
        right: None,
    });
    sheets
}
