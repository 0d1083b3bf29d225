//! Angular spans for platform arcs
//!
//! A platform occupies `center ± length/2` on its orbit. Both ends are kept
//! normalized to [0, 2π), so a span crossing angle zero has `start > end`.

use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Angular extent of an arc, endpoints normalized to [0, 2π)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    /// Start angle (radians, normalized to [0, 2π))
    pub start: f32,
    /// End angle (radians, normalized to [0, 2π))
    pub end: f32,
}

impl ArcSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start: normalize_angle(start),
            end: normalize_angle(end),
        }
    }

    /// Span centered on `center` with total angular `length`
    pub fn centered(center: f32, length: f32) -> Self {
        let half = length / 2.0;
        Self::new(center - half, center + half)
    }

    /// Check if an angle is within the span (inclusive at both ends)
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);

        if self.start <= self.end {
            theta >= self.start && theta <= self.end
        } else {
            // Wraparound case (e.g., start=330°, end=30°)
            theta >= self.start || theta <= self.end
        }
    }
}
