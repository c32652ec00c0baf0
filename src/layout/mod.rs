//! Layout Module
//!
//! Two independent pieces:
//!
//! - **geometry**: resolves an element's absolute bounds and content box from
//!   its local bounds, box model, position type, and ancestors.
//! - **flex**: places a container's direct children along one axis.
//!
//! # Example
//!
//! ```
//! use finch_ui::layout::{arrange, FlexLayout};
//! use finch_ui::types::{Rect, Size};
//!
//! let layout = FlexLayout::row().with_spacing(10);
//! let placed = arrange(
//!     Size::new(500, 40),
//!     &layout,
//!     &[Size::new(100, 20), Size::new(120, 20)],
//! );
//!
//! assert_eq!(placed[1], Rect::new(110, 0, 120, 20));
//! ```

mod flex;
mod geometry;

pub use flex::{arrange, FlexLayout, LayoutPolicy};
