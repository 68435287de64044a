//! Directed edge record stored in the caller's workspace.
//!
//! The x-intercept is kept exactly: `x + x_rem / dy` raw units, with
//! `0 <= x_rem < dy`. The per-row step is split the same way, so stepping a
//! row never drifts from the true line; only the whole part can saturate.

use crate::fixed::{Fixed, Scale};

/// One polygon edge, lower-y endpoint first (ties: lower x first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edge {
    pub(crate) x_low: Fixed,
    pub(crate) y_low: Fixed,
    pub(crate) x_high: Fixed,
    pub(crate) y_high: Fixed,
    /// Whole raw units of x per lattice row (saturated).
    pub(crate) step: Fixed,
    /// Remainder of the per-row step, in units of `1/dy`.
    pub(crate) step_rem: i64,
    /// Floor of the current x-intercept.
    pub(crate) x: Fixed,
    pub(crate) x_rem: i64,
}

impl Edge {
    /// Build from two fixed-point endpoints, computing the per-row step.
    pub(crate) fn between(a: (Fixed, Fixed), b: (Fixed, Fixed), scale: Scale) -> Self {
        let ((x_low, y_low), (x_high, y_high)) = if (a.1, a.0) <= (b.1, b.0) {
            (a, b)
        } else {
            (b, a)
        };
        let mut edge = Self {
            x_low,
            y_low,
            x_high,
            y_high,
            x: x_low,
            ..Self::default()
        };
        let dy = edge.dy();
        if dy > 0 {
            // Δx · 2^bs / Δy; the quotient clamps when Δy is tiny.
            match edge.dx().checked_mul(scale.one()) {
                Some(num) => {
                    let whole = num.div_euclid(dy);
                    edge.step = Fixed::saturating_from_i64(whole);
                    if i64::from(edge.step) == whole {
                        edge.step_rem = num.rem_euclid(dy);
                    }
                }
                None => {
                    edge.step = if edge.dx() < 0 { Fixed::MIN } else { Fixed::MAX };
                }
            }
        }
        edge
    }

    #[inline]
    pub fn low(&self) -> (Fixed, Fixed) {
        (self.x_low, self.y_low)
    }

    #[inline]
    pub fn high(&self) -> (Fixed, Fixed) {
        (self.x_high, self.y_high)
    }

    /// Floor of the current x-intercept.
    #[inline]
    pub fn intercept(&self) -> Fixed {
        self.x
    }

    #[inline]
    pub fn step(&self) -> Fixed {
        self.step
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.y_low == self.y_high
    }

    #[inline]
    pub(crate) fn dx(&self) -> i64 {
        i64::from(self.x_high) - i64::from(self.x_low)
    }

    #[inline]
    pub(crate) fn dy(&self) -> i64 {
        i64::from(self.y_high) - i64::from(self.y_low)
    }

    /// Smallest raw value `>=` the exact intercept.
    #[inline]
    pub(crate) fn intercept_ceil(&self) -> i64 {
        i64::from(self.x) + i64::from(self.x_rem > 0)
    }

    /// The intercept lies at or left of `boundary`.
    #[inline]
    pub(crate) fn crosses(&self, boundary: Fixed) -> bool {
        self.intercept_ceil() <= i64::from(boundary)
    }

    /// The intercept lies exactly on `boundary`.
    #[inline]
    pub(crate) fn hits(&self, boundary: Fixed) -> bool {
        self.x == boundary && self.x_rem == 0
    }

    /// Place the intercept at scan row `row_y` (`row_y >= y_low`).
    pub(crate) fn seek(&mut self, row_y: Fixed, span: (Fixed, Fixed)) {
        let dy = self.dy();
        if dy == 0 {
            self.x = self.x_low;
            self.x_rem = 0;
            return;
        }
        let rise = i64::from(row_y) - i64::from(self.y_low);
        match rise.checked_mul(self.dx()) {
            Some(num) => {
                let whole = i64::from(self.x_low).saturating_add(num.div_euclid(dy));
                self.x = Fixed::saturating_from_i64(whole);
                self.x_rem = if self.x.is_saturated() {
                    0
                } else {
                    num.rem_euclid(dy)
                };
            }
            None => {
                self.x = if self.dx() < 0 { Fixed::MIN } else { Fixed::MAX };
                self.x_rem = 0;
            }
        }
        self.clamp(span);
    }

    /// Advance the intercept by one lattice row.
    pub(crate) fn step_row(&mut self, span: (Fixed, Fixed)) {
        self.x = self.x.saturating_add(self.step);
        self.x_rem += self.step_rem;
        let dy = self.dy();
        if dy > 0 && self.x_rem >= dy {
            self.x_rem -= dy;
            self.x = self.x.saturating_add(Fixed::ONE_UNIT);
        }
        self.clamp(span);
    }

    fn clamp(&mut self, (lo, hi): (Fixed, Fixed)) {
        let clamped = self.x.clamp_span(lo, hi, self.dx());
        if clamped != self.x {
            self.x = clamped;
            self.x_rem = 0;
        }
    }
}
