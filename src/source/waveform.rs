//! Waveform primitives shared by the periodic sources.

use std::f64::consts::PI;

/// Position of `t` inside the current period, normalised to `[0, period)`.
///
/// `%` keeps the sign of the dividend, so a negative remainder is shifted
/// up by one period.
pub fn time_in_period(t: f64, period: f64) -> f64 {
    let mut phase = t % period;
    if phase < 0.0 {
        phase += period;
    }
    phase
}

/// Period of a periodic waveform, or `None` for a non-positive or
/// non-finite frequency.
pub fn period(frequency: f64) -> Option<f64> {
    if frequency > 0.0 && frequency.is_finite() {
        Some(1.0 / frequency)
    } else {
        None
    }
}

/// `amplitude * sin(2*pi*f*t) + offset`
pub fn sine(amplitude: f64, frequency: f64, offset: f64, t: f64) -> f64 {
    amplitude * (2.0 * PI * frequency * t).sin() + offset
}

/// Symmetric triangle rising from `offset` to `offset + amplitude` over the
/// first half period and falling back over the second half.
///
/// A degenerate frequency yields the constant `offset`.
pub fn triangle(amplitude: f64, frequency: f64, offset: f64, t: f64) -> f64 {
    let Some(period) = period(frequency) else {
        return offset;
    };
    let phase = time_in_period(t, period);
    let half = period / 2.0;

    if phase < half {
        offset + (amplitude / half) * phase
    } else {
        offset + amplitude - (amplitude / half) * (phase - half)
    }
}

/// Pulse train: `amplitude + offset` during the first `duty_cycle` fraction
/// of each period, `offset` for the rest.
///
/// A degenerate frequency yields the constant `offset`.
pub fn pulse(amplitude: f64, frequency: f64, duty_cycle: f64, offset: f64, t: f64) -> f64 {
    let Some(period) = period(frequency) else {
        return offset;
    };
    let phase = time_in_period(t, period);
    let on_time = period * duty_cycle;

    if phase < on_time {
        amplitude + offset
    } else {
        offset
    }
}
