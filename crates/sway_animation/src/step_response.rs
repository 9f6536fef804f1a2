//! Step-response curves
//!
//! Closed-form step responses of a first-order system (single real pole) and
//! of a second-order system (conjugate pole pair). The first gives a smooth
//! exponential approach to the gain, the second overshoots and oscillates
//! around the gain before settling.
//!
//! Sampling is O(1) and carries no integration error, so frames may arrive
//! at irregular intervals without drifting.
//!
//! The pure entry point is [`CurveConfig::sample`], which takes the previous
//! [`CurveState`] and returns the new value alongside the next state.
//! [`Curve`] bundles a config with its state for callers that prefer
//! `evaluate(t)`.

use crate::error::{ensure_positive, CurveError, Result};
use std::f32::consts::PI;

/// Number of time constants after which a response counts as settled
/// (`exp(-4)` leaves less than 2% of the gain).
pub const SETTLING_TIME_CONSTANTS: f32 = 4.0;

/// Real pole used by the first-order profile. Time is rescaled instead.
const REAL_POLE: f32 = 1.0;

/// Damping ratio used for `overshoot == 1`, whose exact ratio of zero would
/// make the natural frequency infinite. Every overshoot below 1 derives a
/// nonzero ratio and keeps it.
const UNDAMPED_FALLBACK_RATIO: f32 = f32::EPSILON;

/// Pole layout of a curve, with the parameters derived for it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveProfile {
    /// Single real pole, exponential approach without overshoot
    Real {
        /// Pole applied to the rescaled time, always `1.0`
        pole: f32,
    },
    /// Conjugate pole pair, damped oscillation around the gain
    Complex {
        /// Damping ratio
        ksi: f32,
        /// Natural frequency in rad/s
        wn: f32,
        /// Real part of the poles, `-ksi * wn`
        pole: f32,
    },
}

impl CurveProfile {
    /// Whether the curve swings past its gain
    pub fn is_bouncy(&self) -> bool {
        matches!(self, CurveProfile::Complex { .. })
    }
}

/// Immutable curve parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveConfig {
    gain: f32,
    overshoot: f32,
    settling_time: f32,
    profile: CurveProfile,
}

impl CurveConfig {
    /// First-order response converging to `gain`
    pub fn real(gain: f32, settling_time: f32) -> Result<Self> {
        let settling_time = ensure_positive("settling_time", settling_time)?;

        tracing::debug!(gain, settling_time, "real step response");

        Ok(Self {
            gain,
            overshoot: 0.0,
            settling_time,
            profile: CurveProfile::Real { pole: REAL_POLE },
        })
    }

    /// Second-order response that swings past `gain` by roughly `overshoot`
    ///
    /// `overshoot` must lie in `(0, 1]`.
    pub fn complex(gain: f32, overshoot: f32, settling_time: f32) -> Result<Self> {
        let settling_time = ensure_positive("settling_time", settling_time)?;
        if overshoot.is_nan() || overshoot <= 0.0 || overshoot > 1.0 {
            return Err(CurveError::invalid("overshoot", overshoot, "must lie in (0, 1]"));
        }

        let a = -overshoot.ln() / PI;
        let ksi = match (a * a / (1.0 + a * a)).sqrt() {
            ksi if ksi > 0.0 => ksi,
            _ => UNDAMPED_FALLBACK_RATIO,
        };
        let wn = SETTLING_TIME_CONSTANTS / (ksi * settling_time);
        let pole = -ksi * wn;

        tracing::debug!(
            gain,
            overshoot,
            settling_time,
            ksi,
            wn,
            pole,
            "complex step response"
        );

        Ok(Self {
            gain,
            overshoot,
            settling_time,
            profile: CurveProfile::Complex { ksi, wn, pole },
        })
    }

    /// Pick the profile from the overshoot: `0` is a plain real curve
    pub fn with_overshoot(gain: f32, overshoot: f32, settling_time: f32) -> Result<Self> {
        if overshoot == 0.0 {
            Self::real(gain, settling_time)
        } else {
            Self::complex(gain, overshoot, settling_time)
        }
    }

    /// Value the curve converges to
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Requested overshoot, `0.0` for real curves
    pub fn overshoot(&self) -> f32 {
        self.overshoot
    }

    /// Seconds until the curve stays within 2% of the gain
    pub fn settling_time(&self) -> f32 {
        self.settling_time
    }

    /// Pole layout and derived parameters
    pub fn profile(&self) -> CurveProfile {
        self.profile
    }

    /// Value of the response at elapsed time `t`
    ///
    /// Total over all `t`; values outside `[0, settling_time]` extrapolate
    /// the same formula.
    pub fn value_at(&self, t: f32) -> f32 {
        match self.profile {
            CurveProfile::Real { pole } => self.real_value(pole, t),
            CurveProfile::Complex { wn, pole, .. } => self.complex_value(wn, pole, t),
        }
    }

    /// Sample at `t`, returning the value and the successor of `state`
    pub fn sample(&self, state: CurveState, t: f32) -> (f32, CurveState) {
        let value = self.value_at(t);
        (value, state.record(value))
    }

    fn real_value(&self, pole: f32, t: f32) -> f32 {
        let normalized = (t / self.settling_time) * SETTLING_TIME_CONSTANTS;
        self.gain * (1.0 - (-pole * normalized).exp())
    }

    fn complex_value(&self, wn: f32, pole: f32, t: f32) -> f32 {
        self.gain * (1.0 - (pole * t).exp() * (wn * t).cos())
    }
}

/// What a curve remembers between samples
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurveState {
    last_value: f32,
    samples: u32,
}

impl CurveState {
    /// State before the first sample
    pub const INITIAL: CurveState = CurveState {
        last_value: 0.0,
        samples: 0,
    };

    /// Value returned by the most recent sample, `0.0` before any
    pub fn last_value(&self) -> f32 {
        self.last_value
    }

    /// Number of samples taken so far
    pub fn samples(&self) -> u32 {
        self.samples
    }

    fn record(self, value: f32) -> Self {
        Self {
            last_value: value,
            samples: self.samples.saturating_add(1),
        }
    }
}

/// A curve config together with its sampling state
///
/// One instance drives one animated quantity for one motion run.
#[derive(Clone, Debug)]
pub struct Curve {
    config: CurveConfig,
    state: CurveState,
}

impl Curve {
    pub fn new(config: CurveConfig) -> Self {
        Self {
            config,
            state: CurveState::INITIAL,
        }
    }

    /// Smooth curve, see [`CurveConfig::real`]
    pub fn new_real(gain: f32, settling_time: f32) -> Result<Self> {
        CurveConfig::real(gain, settling_time).map(Self::new)
    }

    /// Bouncy curve, see [`CurveConfig::complex`]
    pub fn new_complex(gain: f32, overshoot: f32, settling_time: f32) -> Result<Self> {
        CurveConfig::complex(gain, overshoot, settling_time).map(Self::new)
    }

    pub fn with_overshoot(gain: f32, overshoot: f32, settling_time: f32) -> Result<Self> {
        CurveConfig::with_overshoot(gain, overshoot, settling_time).map(Self::new)
    }

    /// Sample the curve at `t` and remember the result
    pub fn evaluate(&mut self, t: f32) -> f32 {
        let (value, state) = self.config.sample(self.state, t);
        self.state = state;
        value
    }

    /// Sample at `t` and return the change since the previous sample
    ///
    /// `t` must not go backwards between calls.
    pub fn advance(&mut self, t: f32) -> f32 {
        let previous = self.state.last_value();
        self.evaluate(t) - previous
    }

    /// Value returned by the last `evaluate`, `0.0` before the first call
    pub fn last_value(&self) -> f32 {
        self.state.last_value()
    }

    /// Snapshot of the sampling state
    pub fn state(&self) -> CurveState {
        self.state
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }
}
