//! Circuit models.
//!
//! This module provides the state-space description of every supported
//! network. A [`CircuitModel`] is built once per run from plain
//! [`CircuitParams`] and then only evaluates derivatives: the state
//! variables it operates on are owned by the simulator.
//!
//! | Topology | Network | Order | State |
//! |----------|---------|-------|-------|
//! | A | RC low-pass | 1 | `vs` |
//! | B | RC with diode, discharge through R2 | 1 | `vs` |
//! | C | series RLC | 2 | `vc`, `i` |
//! | D | parallel RLC | 2 | `vc`, `i` |

mod model;
mod networks;
mod types;
mod validate;

pub use model::{CircuitModel, Network};
pub use networks::{ParallelRlc, RcDiode, RcLowPass, SeriesRlc};
pub use types::*;
pub use validate::validate_params;

pub(crate) use validate::check_non_negative;
