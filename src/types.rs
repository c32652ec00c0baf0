//! Core types for finch-ui.
//!
//! Geometry, box model, and positioning vocabulary shared by every module.
//! All coordinates are device pixels as `i32`. Negative sizes are accepted
//! and never validated.

// =============================================================================
// Geometry
// =============================================================================

/// A point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle with position and dimensions.
///
/// Whether `x`/`y` are absolute or an offset depends on who holds it: an
/// element's local bounds are offsets into its parent's content box, the
/// result of `computed_bounds` is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside this rect.
    ///
    /// Half-open: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Inset by a spacing (padding, border widths).
    pub fn shrink(&self, spacing: Spacing) -> Self {
        Self {
            x: self.x + spacing.left,
            y: self.y + spacing.top,
            width: self.width - spacing.horizontal(),
            height: self.height - spacing.vertical(),
        }
    }

    /// Translate by `dx`, `dy`. Size is unchanged.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

// =============================================================================
// Box Model
// =============================================================================

/// Spacing values for top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// CSS order: top, right, bottom, left.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same value on every side.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` applies to top/bottom, `horizontal` to left/right.
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Border widths, color, and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    pub width: Spacing,
    pub color: Rgba,
    pub style: BorderStyle,
}

impl Border {
    /// A solid border of equal width on every side.
    pub const fn solid(width: i32, color: Rgba) -> Self {
        Self {
            width: Spacing::all(width),
            color,
            style: BorderStyle::Solid,
        }
    }
}

/// Margin, padding and border of an element.
///
/// Margin shifts the element's computed position, padding shrinks the content
/// box children are placed in. Neither changes the element's own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxModel {
    pub margin: Spacing,
    pub padding: Spacing,
    pub border: Border,
}

impl BoxModel {
    pub fn with_margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }
}

// =============================================================================
// Positioning and Flex Enums
// =============================================================================

/// How an element's local bounds are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PositionType {
    /// Offset into the parent's content box.
    #[default]
    Relative,
    /// Geometrically identical to `Relative`.
    Absolute,
    /// Bounds are already in viewport space.
    Fixed,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

/// Alignment on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

// =============================================================================
// Interaction Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Pointer interaction state of an element.
    ///
    /// Combine with bitwise OR: `Interaction::HOVERED | Interaction::PRESSED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Interaction: u8 {
        const NONE = 0;
        const HOVERED = 1 << 0;
        const PRESSED = 1 << 1;
        /// Excluded from hit-testing, its subtree included.
        const DISABLED = 1 << 2;
    }
}
