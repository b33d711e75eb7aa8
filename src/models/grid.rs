//! Grid layout types.

use std::fmt;

use crate::utils::ObjectUrl;

/// Fixed grid arity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridType {
    /// Two columns, two rows (default)
    #[default]
    TwoByTwo,
    /// Three columns, three rows
    ThreeByThree,
}

impl GridType {
    /// All grid types, in toolbar order.
    pub const ALL: [GridType; 2] = [GridType::TwoByTwo, GridType::ThreeByThree];

    /// Number of columns (and rows).
    pub fn columns(self) -> usize {
        match self {
            Self::TwoByTwo => 2,
            Self::ThreeByThree => 3,
        }
    }

    /// Number of cells the grid holds.
    pub fn cell_count(self) -> usize {
        self.columns() * self.columns()
    }

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoByTwo => "2×2",
            Self::ThreeByThree => "3×3",
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoByTwo => write!(f, "2x2"),
            Self::ThreeByThree => write!(f, "3x3"),
        }
    }
}

/// One grid slot.
#[derive(Debug)]
pub struct GridCell {
    /// Stable key, `cell-<index>`.
    pub id: String,
    /// Image shown in the slot; dropping it revokes the URL.
    pub image: Option<ObjectUrl>,
}

impl GridCell {
    /// Empty cell for position `index`.
    pub fn empty(index: usize) -> Self {
        Self {
            id: format!("cell-{index}"),
            image: None,
        }
    }

    /// Image URL for rendering, if any.
    pub fn image_src(&self) -> Option<String> {
        self.image.as_ref().map(|url| url.as_str().to_string())
    }
}
