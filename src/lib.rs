// Copyright 2026 The pictor authors
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! # pictor
//!
//! Small, self-contained raster and statistics helpers: an equal-width
//! [`Histogram`] for percentile estimates over pixel intensities or
//! descriptor responses, drawing primitives over in-memory
//! [`RgbImage`]/[`GrayImage`] buffers, a named color palette, and a thin
//! [`Svd`] wrapper around nalgebra's dense singular value decomposition.
//!
//! Each module is an independent leaf utility operating on caller-owned
//! buffers; there is no shared state and no internal layering.

pub mod color;
pub mod histogram;
pub mod image;
pub mod paint;
pub mod svd;

pub use color::ColorName;
pub use histogram::Histogram;
pub use image::{GrayImage, RgbImage};
pub use paint::Rect;
pub use svd::Svd;
