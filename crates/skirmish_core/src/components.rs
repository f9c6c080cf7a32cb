//! Component records
//!
//! Four component types share an entity identifier: [`Army`] and [`Unit`]
//! tallies, a spatial [`Position`] and a [`Base`] footprint describing the
//! shape an entity occupies on the table. All components are plain `Copy`
//! data whose `Default` is the zero value a store slot holds before `add`
//! and after `remove`.

use std::fmt;

use crate::store::Component;

/// A scalar tally of armies attached to an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Army {
    pub value: u64,
}

impl Component for Army {}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Army: {}", self.value)
    }
}

/// A scalar tally of units. Same shape as [`Army`], semantically distinct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unit {
    pub value: u64,
}

impl Component for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit: {}", self.value)
    }
}

/// Spatial coordinates of an entity.
///
/// Rendering currently only consumes `x` and `y`; `z` is stored but unused.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Component for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position: ({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The footprint shape of a [`Base`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaseShape {
    /// No footprint; nothing is drawn for this base.
    #[default]
    None,
    Circular,
    Elliptical,
    Rectangular,
}

/// A footprint descriptor anchored at the entity's [`Position`].
///
/// The meaning of `r0`/`r1` depends on the shape:
/// - `Circular`: `r0` is the radius, `r1` is unused
/// - `Elliptical`: `r0`/`r1` are the x/y radii
/// - `Rectangular`: `r0`/`r1` are the half-width/half-height
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Base {
    pub shape: BaseShape,
    pub r0: f64,
    pub r1: f64,
}

impl Base {
    /// A circular base of radius `r`.
    pub fn circular(r: f64) -> Self {
        Self {
            shape: BaseShape::Circular,
            r0: r,
            r1: 0.0,
        }
    }

    /// An elliptical base with x-radius `rx` and y-radius `ry`.
    pub fn elliptical(rx: f64, ry: f64) -> Self {
        Self {
            shape: BaseShape::Elliptical,
            r0: rx,
            r1: ry,
        }
    }

    /// A rectangular base with half-width `hw` and half-height `hh`.
    pub fn rectangular(hw: f64, hh: f64) -> Self {
        Self {
            shape: BaseShape::Rectangular,
            r0: hw,
            r1: hh,
        }
    }
}

impl Component for Base {}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            BaseShape::None => write!(f, "Base: none"),
            BaseShape::Circular => write!(f, "Base: Circular (r = {})", self.r0),
            BaseShape::Elliptical => {
                write!(f, "Base: Elliptical (rx = {}, ry = {})", self.r0, self.r1)
            }
            BaseShape::Rectangular => {
                write!(f, "Base: Rectangular (hw = {}, hh = {})", self.r0, self.r1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(Army::default().value, 0);
        assert_eq!(Unit::default().value, 0);
        assert_eq!(Position::default(), Position::new(0.0, 0.0, 0.0));
        let base = Base::default();
        assert_eq!(base.shape, BaseShape::None);
        assert_eq!(base.r0, 0.0);
        assert_eq!(base.r1, 0.0);
    }

    #[test]
    fn test_tally_display() {
        assert_eq!(format!("{}", Army { value: 8 }), "Army: 8");
        assert_eq!(format!("{}", Unit { value: 8 }), "Unit: 8");
    }

    #[test]
    fn test_position_display() {
        let p = Position::new(1.0, 2.0, 3.0);
        assert_eq!(format!("{}", p), "Position: (1, 2, 3)");
    }

    #[test]
    fn test_base_display_covers_every_shape() {
        assert_eq!(format!("{}", Base::default()), "Base: none");
        assert_eq!(format!("{}", Base::circular(25.0)), "Base: Circular (r = 25)");
        assert_eq!(
            format!("{}", Base::elliptical(25.0, 70.0)),
            "Base: Elliptical (rx = 25, ry = 70)"
        );
        assert_eq!(
            format!("{}", Base::rectangular(25.0, 70.0)),
            "Base: Rectangular (hw = 25, hh = 70)"
        );
    }

    #[test]
    fn test_base_constructors() {
        let c = Base::circular(25.0);
        assert_eq!(c.shape, BaseShape::Circular);
        assert_eq!(c.r0, 25.0);

        let e = Base::elliptical(25.0, 70.0);
        assert_eq!(e.shape, BaseShape::Elliptical);
        assert_eq!((e.r0, e.r1), (25.0, 70.0));

        let r = Base::rectangular(25.0, 70.0);
        assert_eq!(r.shape, BaseShape::Rectangular);
        assert_eq!((r.r0, r.r1), (25.0, 70.0));
    }
}
