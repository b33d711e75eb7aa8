//! Fixed-size grid bookkeeping.
//!
//! The cell list always matches the cell count of the current [`GridType`];
//! [`reconcile`] is the only place the length changes.

use crate::models::{GridCell, GridType};
use crate::utils::ObjectUrl;

/// Resize `cells` to `len`.
///
/// Grows by appending empty cells whose ids continue the index sequence and
/// shrinks by truncating from the end. Retained positions keep their ids and
/// images; truncated cells are dropped, which revokes their image URLs.
pub fn reconcile(mut cells: Vec<GridCell>, len: usize) -> Vec<GridCell> {
    if cells.len() < len {
        let start = cells.len();
        cells.extend((start..len).map(GridCell::empty));
    } else {
        cells.truncate(len);
    }
    cells
}

/// Ordered grid cells for one editor.
#[derive(Debug)]
pub struct GridCells {
    cells: Vec<GridCell>,
}

impl GridCells {
    /// Empty cells for `grid_type`.
    pub fn new(grid_type: GridType) -> Self {
        Self {
            cells: reconcile(Vec::new(), grid_type.cell_count()),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Match the cell count of `grid_type`. Returns `true` if the length changed.
    pub fn resize_for(&mut self, grid_type: GridType) -> bool {
        let target = grid_type.cell_count();
        if self.cells.len() == target {
            return false;
        }
        let cells = std::mem::take(&mut self.cells);
        self.cells = reconcile(cells, target);
        true
    }

    /// Replace the image of the cell at `index`; `None` clears the slot.
    ///
    /// The previous image (if any) is dropped and its URL revoked. Other cells
    /// are untouched. Returns `false` if `index` is out of range.
    pub fn set_image(&mut self, index: usize, image: Option<ObjectUrl>) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                cell.image = image;
                true
            }
            None => false,
        }
    }

    /// Image URL of the cell at `index`.
    pub fn image_src(&self, index: usize) -> Option<String> {
        self.cells.get(index).and_then(GridCell::image_src)
    }

    /// `(index, id)` pairs for keyed rendering.
    pub fn keys(&self) -> Vec<(usize, String)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (index, cell.id.clone()))
            .collect()
    }

    /// Number of cells holding an image.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.image.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::object_url::revoked;

    fn filled(grid_type: GridType) -> GridCells {
        let mut cells = GridCells::new(grid_type);
        for i in 0..cells.len() {
            cells.set_image(i, Some(ObjectUrl::from_raw(format!("blob:{i}"))));
        }
        cells
    }

    #[test]
    fn test_new_matches_grid_type() {
        assert_eq!(GridCells::new(GridType::TwoByTwo).len(), 4);
        assert_eq!(GridCells::new(GridType::ThreeByThree).len(), 9);
    }

    #[test]
    fn test_reconcile_grows_with_sequential_ids() {
        let cells = reconcile(vec![GridCell::empty(0), GridCell::empty(1)], 4);
        let ids: Vec<_> = cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["cell-0", "cell-1", "cell-2", "cell-3"]);
    }

    #[test]
    fn test_reconcile_same_length_is_identity() {
        let mut cells = reconcile(Vec::new(), 4);
        cells[2].image = Some(ObjectUrl::from_raw("blob:keep"));
        let cells = reconcile(cells, 4);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2].image_src().as_deref(), Some("blob:keep"));
    }

    #[test]
    fn test_every_transition_preserves_retained_positions() {
        for from in GridType::ALL {
            for to in GridType::ALL {
                let mut cells = filled(from);
                cells.resize_for(to);
                assert_eq!(cells.len(), to.cell_count(), "{from} -> {to}");

                let retained = from.cell_count().min(to.cell_count());
                for i in 0..retained {
                    assert_eq!(cells.image_src(i), Some(format!("blob:{i}")));
                }
                for i in retained..cells.len() {
                    assert_eq!(cells.image_src(i), None);
                }
            }
        }
    }

    #[test]
    fn test_shrink_revokes_truncated_images() {
        let mut cells = filled(GridType::ThreeByThree);
        revoked::take();

        assert!(cells.resize_for(GridType::TwoByTwo));
        let mut released = revoked::take();
        released.sort();
        assert_eq!(
            released,
            ["blob:4", "blob:5", "blob:6", "blob:7", "blob:8"]
        );
        assert_eq!(cells.filled(), 4);
    }

    #[test]
    fn test_resize_noop_when_unchanged() {
        let mut cells = GridCells::new(GridType::TwoByTwo);
        assert!(!cells.resize_for(GridType::TwoByTwo));
    }

    #[test]
    fn test_set_image_touches_one_cell() {
        let mut cells = filled(GridType::TwoByTwo);
        revoked::take();

        assert!(cells.set_image(1, Some(ObjectUrl::from_raw("blob:new"))));
        assert_eq!(revoked::take(), ["blob:1"]);
        assert_eq!(cells.image_src(0).as_deref(), Some("blob:0"));
        assert_eq!(cells.image_src(1).as_deref(), Some("blob:new"));
        assert_eq!(cells.image_src(2).as_deref(), Some("blob:2"));
    }

    #[test]
    fn test_remove_clears_slot_but_keeps_cell() {
        let mut cells = filled(GridType::TwoByTwo);
        revoked::take();

        assert!(cells.set_image(3, None));
        assert_eq!(revoked::take(), ["blob:3"]);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.image_src(3), None);
        assert_eq!(cells.keys()[3], (3, "cell-3".to_string()));
    }

    #[test]
    fn test_set_image_out_of_range() {
        let mut cells = GridCells::new(GridType::TwoByTwo);
        assert!(!cells.set_image(4, Some(ObjectUrl::from_raw("blob:x"))));
        assert_eq!(cells.filled(), 0);
    }
}
