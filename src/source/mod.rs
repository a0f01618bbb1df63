//! Driving voltage sources.
//!
//! A [`SignalSource`] is a pure function of time. Every variant returns 0
//! for negative time; the waveform itself only starts at `t = 0`.

mod waveform;

pub use waveform::{period, pulse, sine, time_in_period, triangle};

use std::fmt;
use std::str::FromStr;

use crate::circuit::check_non_negative;
use crate::error::{Result, SimError};

/// Source waveform selection.
///
/// The numeric indices (1-5) follow the historical source menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceKind {
    /// Sine wave
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "sine", alias = "sin"))]
    Sinusoidal,
    /// Step at a configurable start time
    Step,
    /// Symmetric triangle
    #[cfg_attr(feature = "serde", serde(alias = "triangle"))]
    Triangular,
    /// Square wave with configurable duty cycle
    Square,
    /// Rectangular wave with configurable duty cycle
    #[cfg_attr(feature = "serde", serde(alias = "rect"))]
    Rectangular,
}

impl SourceKind {
    /// Look up a source by its menu index (1-5).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Sinusoidal),
            2 => Some(Self::Step),
            3 => Some(Self::Triangular),
            4 => Some(Self::Square),
            5 => Some(Self::Rectangular),
            _ => None,
        }
    }

    /// Menu index of this source (1-5).
    pub fn index(&self) -> u8 {
        match self {
            Self::Sinusoidal => 1,
            Self::Step => 2,
            Self::Triangular => 3,
            Self::Square => 4,
            Self::Rectangular => 5,
        }
    }

    /// Whether the waveform uses a duty cycle.
    pub fn has_duty_cycle(&self) -> bool {
        matches!(self, Self::Square | Self::Rectangular)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sinusoidal => "sinusoidal",
            Self::Step => "step",
            Self::Triangular => "triangular",
            Self::Square => "square",
            Self::Rectangular => "rectangular",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SourceKind {
    type Err = SimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if let Ok(index) = value.parse::<u8>() {
            return Self::from_index(index).ok_or(SimError::UnknownSourceKind {
                value: s.to_string(),
            });
        }
        match value.as_str() {
            "sine" | "sin" | "sinus" | "sinusoidal" => Ok(Self::Sinusoidal),
            "step" | "echelon" => Ok(Self::Step),
            "triangle" | "tri" | "triangular" => Ok(Self::Triangular),
            "square" | "sq" | "creneau" => Ok(Self::Square),
            "rect" | "rectangular" => Ok(Self::Rectangular),
            _ => Err(SimError::UnknownSourceKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Plain numeric description of a source.
///
/// Fields not used by the selected kind are ignored: `start_time` only
/// matters for steps, `frequency` for the periodic waveforms and
/// `duty_cycle` for square and rectangular waves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceParams {
    /// Waveform selection
    pub kind: SourceKind,
    /// Amplitude in volts
    pub amplitude: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// DC offset in volts
    pub offset: f64,
    /// Fraction of the period spent high (0-1)
    pub duty_cycle: f64,
    /// Step start time in seconds
    pub start_time: f64,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            amplitude: 5.0,
            frequency: 50.0,
            offset: 0.0,
            duty_cycle: 0.5,
            start_time: 0.0,
        }
    }
}

impl SourceParams {
    /// Create default parameters for the given waveform.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the DC offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the duty cycle.
    pub fn with_duty_cycle(mut self, duty_cycle: f64) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    /// Set the step start time.
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }
}

/// A time-varying driving voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalSource {
    /// `A*sin(2*pi*f*t) + offset`
    Sinusoidal {
        amplitude: f64,
        frequency: f64,
        offset: f64,
    },
    /// `offset` before `start_time`, `A + offset` from then on
    Step {
        amplitude: f64,
        start_time: f64,
        offset: f64,
    },
    /// Triangle between `offset` and `offset + A`
    Triangular {
        amplitude: f64,
        frequency: f64,
        offset: f64,
    },
    /// Square wave, high for `duty_cycle` of each period
    Square {
        amplitude: f64,
        frequency: f64,
        duty_cycle: f64,
        offset: f64,
    },
    /// Rectangular wave; same waveform as [`SignalSource::Square`]
    Rectangular {
        amplitude: f64,
        frequency: f64,
        duty_cycle: f64,
        offset: f64,
    },
}

impl SignalSource {
    /// Create a sinusoidal source.
    pub fn sinusoidal(amplitude: f64, frequency: f64, offset: f64) -> Self {
        Self::Sinusoidal {
            amplitude,
            frequency,
            offset,
        }
    }

    /// Create a step source.
    pub fn step(amplitude: f64, start_time: f64, offset: f64) -> Self {
        Self::Step {
            amplitude,
            start_time,
            offset,
        }
    }

    /// Create a triangular source.
    pub fn triangular(amplitude: f64, frequency: f64, offset: f64) -> Self {
        Self::Triangular {
            amplitude,
            frequency,
            offset,
        }
    }

    /// Create a square source.
    pub fn square(amplitude: f64, frequency: f64, duty_cycle: f64, offset: f64) -> Self {
        Self::Square {
            amplitude,
            frequency,
            duty_cycle,
            offset,
        }
    }

    /// Create a rectangular source.
    pub fn rectangular(amplitude: f64, frequency: f64, duty_cycle: f64, offset: f64) -> Self {
        Self::Rectangular {
            amplitude,
            frequency,
            duty_cycle,
            offset,
        }
    }

    /// Validate parameters and build the source they describe.
    ///
    /// Amplitude, offset and start time must be finite; the frequency must
    /// be finite and non-negative; the duty cycle must lie in `[0, 1]`.
    pub fn from_params(params: &SourceParams) -> Result<Self> {
        let component = format!("{} source", params.kind);

        for (name, value) in [
            ("amplitude", params.amplitude),
            ("offset", params.offset),
            ("start_time", params.start_time),
        ] {
            if !value.is_finite() {
                return Err(SimError::invalid_parameter(&component, name, "must be finite"));
            }
        }
        check_non_negative(&component, "frequency", params.frequency)?;
        if params.kind.has_duty_cycle() && !(0.0..=1.0).contains(&params.duty_cycle) {
            return Err(SimError::invalid_parameter(
                &component,
                "duty_cycle",
                format!("must lie in [0, 1] (got {})", params.duty_cycle),
            ));
        }

        let p = params;
        Ok(match p.kind {
            SourceKind::Sinusoidal => Self::sinusoidal(p.amplitude, p.frequency, p.offset),
            SourceKind::Step => Self::step(p.amplitude, p.start_time, p.offset),
            SourceKind::Triangular => Self::triangular(p.amplitude, p.frequency, p.offset),
            SourceKind::Square => Self::square(p.amplitude, p.frequency, p.duty_cycle, p.offset),
            SourceKind::Rectangular => {
                Self::rectangular(p.amplitude, p.frequency, p.duty_cycle, p.offset)
            }
        })
    }

    /// Waveform selection of this source.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Sinusoidal { .. } => SourceKind::Sinusoidal,
            Self::Step { .. } => SourceKind::Step,
            Self::Triangular { .. } => SourceKind::Triangular,
            Self::Square { .. } => SourceKind::Square,
            Self::Rectangular { .. } => SourceKind::Rectangular,
        }
    }

    /// Source voltage at time `t`.
    pub fn ve(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }

        match *self {
            Self::Sinusoidal {
                amplitude,
                frequency,
                offset,
            } => sine(amplitude, frequency, offset, t),
            Self::Step {
                amplitude,
                start_time,
                offset,
            } => {
                if t < start_time {
                    offset
                } else {
                    amplitude + offset
                }
            }
            Self::Triangular {
                amplitude,
                frequency,
                offset,
            } => triangle(amplitude, frequency, offset, t),
            Self::Square {
                amplitude,
                frequency,
                duty_cycle,
                offset,
            }
            | Self::Rectangular {
                amplitude,
                frequency,
                duty_cycle,
                offset,
            } => pulse(amplitude, frequency, duty_cycle, offset, t),
        }
    }
}
