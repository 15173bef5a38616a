// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorzoom: an anchored zoom/pan engine for one interactive surface.
//!
//! A [`ZoomPanEngine`] owns the scale, translation and transform-origin of a
//! rectangular surface shown inside a viewport. Callers feed it plain numbers
//! (a zoom target and step, a pan delta or an absolute position) and the
//! engine:
//! - Clamps the scale into the configured range.
//! - Rejects any candidate state containing NaN or infinity, keeping the
//!   previous state.
//! - Emits a [`TransformDescriptor`] plus transform-origin to its [`Surface`].
//!
//! It does **not** listen to input devices or paint anything. Turning pointer
//! events into engine calls lives in a higher-level crate
//! (`anchorzoom_controls`), and the host decides how to apply the
//! descriptor (a CSS `transform`, a GPU uniform, a [`kurbo::Affine`], ...).
//!
//! ## Minimal example
//!
//! ```rust
//! use anchorzoom::{EngineConfig, TransformDescriptor, ZoomPanEngine};
//!
//! // Keep the latest descriptor around as the "surface".
//! let config = EngineConfig::new().with_scale_limits(0.1, 10.0);
//! let mut engine = ZoomPanEngine::new(None::<TransformDescriptor>, config);
//!
//! // Wheel step at the cursor, then a drag.
//! engine.zoom(120.0, 80.0, 1.0);
//! engine.pan_by(15.0, -5.0);
//!
//! let state = engine.state();
//! assert_eq!(state.scale, 1.1);
//! assert_eq!((state.origin_x, state.origin_y), (120.0, 80.0));
//! assert_eq!(
//!     engine.surface().copied().flatten().map(|d| d.to_string()),
//!     Some("matrix(1.1, 0, 0, 1.1, 15, -5)".into())
//! );
//!
//! // After destroy, mutations are ignored.
//! engine.destroy();
//! engine.reset();
//! assert_eq!(engine.state(), state);
//! ```
//!
//! ## Design notes
//!
//! - The lifecycle is an enum with an active session and a destroyed
//!   snapshot; only the active session has mutating methods.
//! - By default zoom anchoring is delegated to the host's transform-origin
//!   ([`AnchorMode::Origin`]). [`AnchorMode::Compensated`] instead adjusts
//!   translation so the zoom target stays fixed in view space.
//! - All operations are synchronous and take `&mut self`; there is no
//!   internal locking.
//! - Diagnostics go through the [`log`] facade: rejected states are reported
//!   with `warn!`.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod state;
mod surface;

pub use anchorzoom_math::{ParseDescriptorError, TransformDescriptor};
pub use config::{
    AnchorMode, ConfigError, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE_SENSITIVITY,
    EngineConfig,
};
pub use engine::{EngineDebugInfo, InvalidTransform, ZoomPanEngine};
pub use state::TransformState;
pub use surface::Surface;
