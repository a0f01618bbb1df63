//! WASM bindings for RLC Transient.
//!
//! This module exposes the simulator to JavaScript, for plotting transient
//! responses in a browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmTransientSim } from 'rlc_transient';
//!
//! await init();
//!
//! const config = `
//! circuit:
//!   topology: C
//!   resistance: 47
//! source:
//!   kind: square
//!   frequency: 1000
//! method: rk4
//! steps: 5000
//! t_max: 5.0e-3
//! `;
//!
//! const sim = new WasmTransientSim(config);
//! const data = sim.run(); // [t0, vin0, vout0, t1, vin1, vout1, ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::solver::Simulator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible transient simulator.
#[wasm_bindgen]
pub struct WasmTransientSim {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmTransientSim {
    /// Create a simulator from a YAML run configuration.
    ///
    /// Missing fields take their default values, so an empty string runs
    /// the stock RC low-pass scenario.
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: &str) -> Result<WasmTransientSim, JsValue> {
        let config = SimulationConfig::from_yaml_str(config_yaml).map_err(to_js)?;
        let simulator = config.build().map_err(to_js)?;
        Ok(WasmTransientSim { simulator })
    }

    /// Run the whole grid and return the records flattened as
    /// `[t, vin, vout, t, vin, vout, ...]`.
    #[wasm_bindgen]
    pub fn run(&mut self) -> Vec<f64> {
        self.simulator
            .run()
            .into_iter()
            .flat_map(|r| [r.time, r.input, r.output])
            .collect()
    }

    /// Number of records a run produces.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.simulator.grid().len()
    }

    /// Time step in seconds.
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 {
        self.simulator.grid().dt()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
