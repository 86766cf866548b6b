//! Point roles
//!
//! Every stored point carries a role: a mutually exclusive [`PointKind`]
//! plus independent [`PointFlags`]. Inside the crate the two halves are
//! kept as separate fields; the packed byte form only exists at the
//! construction and snapshot boundary.

use std::fmt;

use vecpath_core::{PathError, Point, Result};

/// Mask selecting the kind bits of a packed role byte.
pub const KIND_MASK: u8 = 0x07;

/// What the point contributes to its subpath
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Begins a new subpath
    Start,
    /// Straight segment from the previous point to this one
    Line,
    /// One of the three trailing points of a cubic Bezier
    Bezier,
}

impl PointKind {
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::Line => 1,
            Self::Bezier => 3,
        }
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Start),
            1 => Some(Self::Line),
            3 => Some(Self::Bezier),
            _ => None,
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Line => write!(f, "Line"),
            Self::Bezier => write!(f, "Bezier"),
        }
    }
}

bitflags::bitflags! {
    /// Flags OR-ed onto a point's kind
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointFlags: u8 {
        /// Segments up to this point are dashed
        const DASH_MODE = 0x10;
        /// Caller-placed bookmark
        const PATH_MARKER = 0x20;
        /// Implicit edge from this point back to its subpath's start
        const CLOSE_SUBPATH = 0x80;
    }
}

/// Kind plus flags for a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRole {
    pub kind: PointKind,
    pub flags: PointFlags,
}

impl PointRole {
    pub const fn new(kind: PointKind, flags: PointFlags) -> Self {
        Self { kind, flags }
    }

    pub const fn start() -> Self {
        Self::new(PointKind::Start, PointFlags::empty())
    }

    pub const fn line() -> Self {
        Self::new(PointKind::Line, PointFlags::empty())
    }

    pub const fn bezier() -> Self {
        Self::new(PointKind::Bezier, PointFlags::empty())
    }

    pub fn with(mut self, flags: PointFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_closing(&self) -> bool {
        self.flags.contains(PointFlags::CLOSE_SUBPATH)
    }

    pub fn is_marker(&self) -> bool {
        self.flags.contains(PointFlags::PATH_MARKER)
    }

    /// Pack into the wire byte.
    pub fn to_byte(&self) -> u8 {
        self.kind.to_byte() | self.flags.bits()
    }

    /// Decode a wire byte, rejecting unknown kinds and stray bits.
    pub fn from_byte(value: u8) -> Result<Self> {
        let kind = PointKind::from_byte(value & KIND_MASK).ok_or_else(|| {
            PathError::invalid_argument(format!("unknown point kind in role byte {:#04x}", value))
        })?;
        let flags = PointFlags::from_bits(value & !KIND_MASK).ok_or_else(|| {
            PathError::invalid_argument(format!("unknown flag bits in role byte {:#04x}", value))
        })?;
        Ok(Self { kind, flags })
    }
}

impl From<PointKind> for PointRole {
    fn from(kind: PointKind) -> Self {
        Self::new(kind, PointFlags::empty())
    }
}

impl fmt::Display for PointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.flags.contains(PointFlags::DASH_MODE) {
            write!(f, "|Dash")?;
        }
        if self.flags.contains(PointFlags::PATH_MARKER) {
            write!(f, "|Marker")?;
        }
        if self.flags.contains(PointFlags::CLOSE_SUBPATH) {
            write!(f, "|Close")?;
        }
        Ok(())
    }
}

/// A stored point together with its role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub point: Point,
    pub role: PointRole,
}

impl PathNode {
    pub fn new(point: Point, role: PointRole) -> Self {
        Self { point, role }
    }

    pub fn kind(&self) -> PointKind {
        self.role.kind
    }
}
