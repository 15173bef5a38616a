// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Affine, Point, Vec2};

/// Canonical transform handed to a host surface.
///
/// A descriptor is a 2D affine transform with a uniform scale on both axes,
/// no rotation or skew, followed by a translation. Its row-major coefficients
/// are `[scale, 0, 0, scale, tx, ty]` and its textual form is
/// `matrix(scale, 0, 0, scale, tx, ty)`.
///
/// The transform-origin is not part of the descriptor; hosts apply it
/// separately (see [`TransformDescriptor::affine_about`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformDescriptor {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl TransformDescriptor {
    /// The identity descriptor: `matrix(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0);

    /// Builds a descriptor from a uniform scale and a translation.
    #[must_use]
    pub const fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// Returns the uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the translation applied after scaling.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns the row-major coefficients `[sx, 0, 0, sy, tx, ty]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translate_x,
            self.translate_y,
        ]
    }

    /// Returns the descriptor as a [`kurbo::Affine`], ignoring any origin.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::new(self.coefficients())
    }

    /// Returns the affine a host produces when it applies this descriptor
    /// with `origin` as the transform-origin.
    ///
    /// This is `translate(origin) * matrix * translate(-origin)`.
    #[must_use]
    pub fn affine_about(&self, origin: Point) -> Affine {
        let origin = origin.to_vec2();
        Affine::translate(origin) * self.affine() * Affine::translate(-origin)
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        crate::is_finite_triple(self.scale, self.translate_x, self.translate_y)
    }
}

impl Default for TransformDescriptor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for TransformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({}, 0, 0, {}, {}, {})",
            self.scale, self.scale, self.translate_x, self.translate_y
        )
    }
}

impl FromStr for TransformDescriptor {
    type Err = ParseDescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("matrix(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseDescriptorError::Syntax)?;

        let mut coeffs = [0.0_f64; 6];
        let mut parts = body.split(',');
        for (index, slot) in coeffs.iter_mut().enumerate() {
            let part = parts.next().ok_or(ParseDescriptorError::Syntax)?;
            *slot = part
                .trim()
                .parse()
                .map_err(|_| ParseDescriptorError::Number(index))?;
        }
        if parts.next().is_some() {
            return Err(ParseDescriptorError::Syntax);
        }

        let [sx, b, c, sy, tx, ty] = coeffs;
        if b != 0.0 || c != 0.0 || sx.to_bits() != sy.to_bits() {
            return Err(ParseDescriptorError::NotUniformScale);
        }
        Ok(Self::new(sx, tx, ty))
    }
}

/// Error returned when parsing a [`TransformDescriptor`] from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDescriptorError {
    /// The text is not of the form `matrix(a, b, c, d, e, f)`.
    Syntax,
    /// The coefficient at this index is not a number.
    Number(usize),
    /// The matrix has skew/rotation terms or differing axis scales.
    NotUniformScale,
}

impl fmt::Display for ParseDescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("expected `matrix(a, b, c, d, e, f)`"),
            Self::Number(index) => write!(f, "coefficient {index} is not a number"),
            Self::NotUniformScale => {
                f.write_str("matrix is not a uniform scale followed by a translation")
            }
        }
    }
}

impl core::error::Error for ParseDescriptorError {}
