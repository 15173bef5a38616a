// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorzoom_math::TransformDescriptor;
use kurbo::{Affine, Point};

/// Host element that receives transform descriptors.
///
/// The engine calls [`Surface::set_transform`] every time it commits a valid
/// state. Implementations typically write the descriptor into a style
/// property (for example a CSS `transform`) and the origin into a
/// transform-origin property.
pub trait Surface {
    /// Applies `descriptor` with `origin` as the transform-origin.
    fn set_transform(&mut self, descriptor: TransformDescriptor, origin: Point);
}

/// Headless surface that discards every descriptor.
impl Surface for () {
    fn set_transform(&mut self, _descriptor: TransformDescriptor, _origin: Point) {}
}

/// Keeps the full effective affine, origin included.
impl Surface for Affine {
    fn set_transform(&mut self, descriptor: TransformDescriptor, origin: Point) {
        *self = descriptor.affine_about(origin);
    }
}

/// Keeps the most recent descriptor.
impl Surface for Option<TransformDescriptor> {
    fn set_transform(&mut self, descriptor: TransformDescriptor, _origin: Point) {
        *self = Some(descriptor);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_transform(&mut self, descriptor: TransformDescriptor, origin: Point) {
        (**self).set_transform(descriptor, origin);
    }
}
