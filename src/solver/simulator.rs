//! Main simulator interface.

use tracing::{debug, info, warn};

use crate::circuit::CircuitModel;
use crate::error::{Result, SimError};
use crate::source::SignalSource;
use crate::{DEFAULT_STEPS, DEFAULT_T_MAX, SNAP_THRESHOLD};

use super::binder::Binder;
use super::integrators::{euler1, euler2, heun, heun_order1, rk4, rk4_order1};
use super::method::{Integrator, Method};

/// Uniform time grid of a run.
///
/// `steps` intervals of `dt = t_max / steps` seconds, visited at
/// `t = i * dt` for `i` in `0..=steps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingGrid {
    steps: usize,
    t_max: f64,
    dt: f64,
}

impl Default for TimingGrid {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            t_max: DEFAULT_T_MAX,
            dt: DEFAULT_T_MAX / DEFAULT_STEPS as f64,
        }
    }
}

impl TimingGrid {
    /// Create a grid of `steps` intervals covering `t_max` seconds.
    ///
    /// Fails when `steps` is zero or `t_max` is not a positive finite
    /// duration.
    pub fn new(steps: usize, t_max: f64) -> Result<Self> {
        if steps == 0 {
            return Err(SimError::simulation_param(
                "step count must be greater than zero",
            ));
        }
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(SimError::simulation_param(format!(
                "total duration must be positive and finite (got {t_max})"
            )));
        }

        Ok(Self {
            steps,
            t_max,
            dt: t_max / steps as f64,
        })
    }

    /// Number of intervals.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total simulated duration in seconds.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Step size in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of grid points, including `t = 0`.
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    /// A valid grid always contains at least the origin.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Time of grid point `index`.
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }
}

/// The state variables advanced by the integrators.
///
/// `x1` is the output voltage (or capacitor voltage); `x2` is the inductor
/// current of second-order circuits and stays 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationState {
    pub x1: f64,
    pub x2: f64,
}

impl SimulationState {
    /// Replace components smaller than `threshold` in magnitude with +0.
    pub fn snap_to_zero(&mut self, threshold: f64) {
        if self.x1.abs() < threshold {
            self.x1 = 0.0;
        }
        if self.x2.abs() < threshold {
            self.x2 = 0.0;
        }
    }
}

/// One output sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Grid time in seconds
    pub time: f64,
    /// Source voltage at `time`
    pub input: f64,
    /// Primary state variable after the step taken at `time`
    pub output: f64,
}

/// The transient simulator.
///
/// Owns the circuit, the source, the grid and the state of one run.
#[derive(Debug, Clone)]
pub struct Simulator {
    circuit: CircuitModel,
    source: SignalSource,
    method: Method,
    integrator: Integrator,
    grid: TimingGrid,
    state: SimulationState,
    /// Next grid point to visit
    index: usize,
}

impl Simulator {
    /// Create a simulator starting from the zero state.
    pub fn new(
        circuit: CircuitModel,
        source: SignalSource,
        method: Method,
        grid: TimingGrid,
    ) -> Self {
        let order = circuit.order();
        let integrator = Integrator::resolve(order, method);

        if !Integrator::is_exact(order, method) {
            warn!(
                %method,
                %order,
                %integrator,
                "method does not apply to this circuit order, using fallback"
            );
        }
        debug!(
            circuit = %circuit.topology(),
            source = %source.kind(),
            %integrator,
            steps = grid.steps(),
            dt = grid.dt(),
            "simulator created"
        );

        Self {
            circuit,
            source,
            method,
            integrator,
            grid,
            state: SimulationState::default(),
            index: 0,
        }
    }

    /// The simulated circuit.
    pub fn circuit(&self) -> &CircuitModel {
        &self.circuit
    }

    /// The driving source.
    pub fn source(&self) -> &SignalSource {
        &self.source
    }

    /// The requested method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The integrator actually applied.
    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    /// The time grid.
    pub fn grid(&self) -> &TimingGrid {
        &self.grid
    }

    /// Current state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Whether every grid point has been visited.
    pub fn is_finished(&self) -> bool {
        self.index > self.grid.steps()
    }

    /// Return to the zero state at `t = 0`.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
        self.index = 0;
    }

    /// Advance by one grid point.
    ///
    /// Samples the source at the current grid time, applies the integrator
    /// from there, snaps negligible state values to zero and returns the
    /// record. Returns `None` once the grid is exhausted.
    pub fn step(&mut self) -> Option<Record> {
        if self.is_finished() {
            return None;
        }

        let dt = self.grid.dt();
        let t = self.grid.time(self.index);
        let input = self.source.ve(t);

        let binder = Binder::new(&self.circuit, &self.source);
        let state = &mut self.state;
        match self.integrator {
            Integrator::Euler1 => euler1(&mut state.x1, dt, t, binder.first_order()),
            Integrator::Rk4Order1 => rk4_order1(&mut state.x1, dt, t, binder.first_order()),
            Integrator::HeunOrder1 => heun_order1(&mut state.x1, dt, t, binder.first_order()),
            Integrator::Euler2 => euler2(&mut state.x1, &mut state.x2, dt, t, binder.second_order()),
            Integrator::Rk4 => rk4(&mut state.x1, &mut state.x2, dt, t, binder.second_order()),
            Integrator::Heun => heun(&mut state.x1, &mut state.x2, dt, t, binder.second_order()),
        }
        state.snap_to_zero(SNAP_THRESHOLD);
        let output = state.x1;

        self.index += 1;
        Some(Record {
            time: t,
            input,
            output,
        })
    }

    /// Run the whole grid from the zero state.
    pub fn run(&mut self) -> Vec<Record> {
        self.reset();
        info!(
            circuit = %self.circuit.topology(),
            source = %self.source.kind(),
            integrator = %self.integrator,
            steps = self.grid.steps(),
            t_max = self.grid.t_max(),
            "starting transient run"
        );

        let mut records = Vec::with_capacity(self.grid.len());
        while let Some(record) = self.step() {
            records.push(record);
        }

        info!(
            points = records.len(),
            final_output = self.state.x1,
            "transient run finished"
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn rc_step(method: Method, steps: usize, t_max: f64) -> Simulator {
        Simulator::new(
            CircuitModel::rc_low_pass(1000.0, 1e-6, 50.0),
            SignalSource::step(5.0, 0.0, 0.0),
            method,
            TimingGrid::new(steps, t_max).unwrap(),
        )
    }

    #[test]
    fn test_grid_rejects_zero_steps() {
        let err = TimingGrid::new(0, 1.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidSimulationParam { .. }));
    }

    #[test]
    fn test_grid_rejects_bad_duration() {
        assert!(TimingGrid::new(10, 0.0).is_err());
        assert!(TimingGrid::new(10, -1.0).is_err());
        assert!(TimingGrid::new(10, f64::NAN).is_err());
    }

    #[test]
    fn test_grid_defaults() {
        let grid = TimingGrid::default();
        assert_eq!(grid.steps(), 20000);
        assert_eq!(grid.len(), 20001);
        assert_relative_eq!(grid.dt(), 500e-9 / 20000.0);
        assert_eq!(grid, TimingGrid::new(20000, 500e-9).unwrap());
    }

    #[test]
    fn test_snap_to_zero() {
        let mut state = SimulationState { x1: -1e-13, x2: 5e-13 };
        state.snap_to_zero(SNAP_THRESHOLD);
        assert_eq!(state.x1.to_bits(), 0.0f64.to_bits());
        assert_eq!(state.x2.to_bits(), 0.0f64.to_bits());

        let mut state = SimulationState { x1: -1e-11, x2: 2.0 };
        state.snap_to_zero(SNAP_THRESHOLD);
        assert_eq!(state.x1, -1e-11);
        assert_eq!(state.x2, 2.0);
    }

    #[test]
    fn test_default_scenario() {
        // RC low-pass, 5 V / 50 Hz sine, 20000 steps over 500 ns, Euler
        let mut sim = Simulator::new(
            CircuitModel::rc_low_pass(1000.0, 1e-6, 50.0),
            SignalSource::sinusoidal(5.0, 50.0, 0.0),
            Method::Euler,
            TimingGrid::new(20000, 500e-9).unwrap(),
        );
        let records = sim.run();

        assert_eq!(records.len(), 20001);
        assert_eq!(
            records[0],
            Record {
                time: 0.0,
                input: 0.0,
                output: 0.0
            }
        );
        for pair in records.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        for record in &records {
            assert!(record.output.abs() <= 5.0);
            assert!(record.output >= 0.0);
        }
        assert_relative_eq!(records.last().unwrap().time, 500e-9, max_relative = 1e-12);
        assert!(sim.is_finished());
        assert!(sim.step().is_none());
    }

    #[test]
    fn test_rc_converges_to_step_level() {
        // 20 time constants with dt = RC / 100
        for method in [Method::Euler, Method::Rk4, Method::Heun] {
            let records = rc_step(method, 2000, 20e-3).run();
            let last = records.last().unwrap();
            assert_abs_diff_eq!(last.output, 5.0, epsilon = 1e-6);
            assert_eq!(last.input, 5.0);
        }
    }

    #[test]
    fn test_higher_order_methods_smaller_local_error() {
        // One step from zero state; exact response V * (1 - exp(-dt/RC))
        let dt = 1e-5;
        let exact = 5.0 * (1.0 - (-dt / 1e-3f64).exp());

        let error = |method| {
            let mut sim = rc_step(method, 1, dt);
            (sim.step().unwrap().output - exact).abs()
        };
        let euler = error(Method::Euler);
        let heun = error(Method::Heun);
        let rk4 = error(Method::Rk4);

        assert!(heun < euler);
        assert!(rk4 < euler);
        assert!(rk4 < heun);
        assert!(rk4 < 1e-10);
    }

    #[test]
    fn test_run_is_reproducible() {
        let build = || {
            Simulator::new(
                CircuitModel::series_rlc(47.0, 1e-6, 1e-3, 50.0),
                SignalSource::triangular(5.0, 2000.0, 0.5),
                Method::Heun,
                TimingGrid::new(5000, 5e-3).unwrap(),
            )
        };
        let mut sim = build();
        let first = sim.run();
        let second = sim.run();
        let fresh = build().run();

        assert_eq!(first.len(), second.len());
        for ((a, b), c) in first.iter().zip(&second).zip(&fresh) {
            assert_eq!(a.output.to_bits(), b.output.to_bits());
            assert_eq!(a.output.to_bits(), c.output.to_bits());
            assert_eq!(a.input.to_bits(), c.input.to_bits());
        }
    }

    #[test]
    fn test_first_order_ignores_euler2() {
        let a = rc_step(Method::Euler, 100, 1e-3).run();
        let mut sim = rc_step(Method::Euler2, 100, 1e-3);
        assert_eq!(sim.integrator(), Integrator::Euler1);
        assert_eq!(a, sim.run());
    }

    #[test]
    fn test_second_order_euler_falls_back_to_rk4() {
        let build = |method| {
            Simulator::new(
                CircuitModel::parallel_rlc(100.0, 1e-6, 1e-3, 50.0),
                SignalSource::square(5.0, 500.0, 0.5, 0.0),
                method,
                TimingGrid::new(1000, 1e-3).unwrap(),
            )
        };
        let mut fallback = build(Method::Euler);
        assert_eq!(fallback.integrator(), Integrator::Rk4);
        assert_eq!(fallback.run(), build(Method::Rk4).run());
    }

    #[test]
    fn test_series_rlc_settles() {
        // Overdamped: slowest pole around 89 us, 2 ms is > 20 time constants
        for method in [Method::Euler2, Method::Rk4, Method::Heun] {
            let mut sim = Simulator::new(
                CircuitModel::series_rlc(100.0, 1e-6, 1e-3, 50.0),
                SignalSource::step(5.0, 0.0, 0.0),
                method,
                TimingGrid::new(20000, 2e-3).unwrap(),
            );
            let records = sim.run();
            assert_abs_diff_eq!(records.last().unwrap().output, 5.0, epsilon = 1e-6);
            assert_abs_diff_eq!(sim.state().x2, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_parallel_rlc_settles() {
        // Underdamped with 200 us envelope decay; inductor ends carrying V/R
        let mut sim = Simulator::new(
            CircuitModel::parallel_rlc(100.0, 1e-6, 1e-3, 50.0),
            SignalSource::step(5.0, 0.0, 0.0),
            Method::Rk4,
            TimingGrid::new(50000, 5e-3).unwrap(),
        );
        sim.run();
        assert_abs_diff_eq!(sim.state().x1, 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sim.state().x2, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_circuit_stays_at_rest() {
        let mut sim = Simulator::new(
            CircuitModel::series_rlc(100.0, 0.0, 1e-3, 50.0),
            SignalSource::sinusoidal(5.0, 50.0, 1.0),
            Method::Rk4,
            TimingGrid::new(100, 1e-2).unwrap(),
        );
        for record in sim.run() {
            assert_eq!(record.output, 0.0);
        }
        assert_eq!(sim.state(), SimulationState::default());
    }

    #[test]
    fn test_diode_circuit_rectifies() {
        // Negative half-waves cannot charge the capacitor
        let mut sim = Simulator::new(
            CircuitModel::rc_diode(100.0, 10e3, 10e-6, 50.0),
            SignalSource::sinusoidal(5.0, 50.0, 0.0),
            Method::Rk4,
            TimingGrid::new(20000, 0.1).unwrap(),
        );
        let records = sim.run();
        assert!(records.iter().all(|r| r.output >= 0.0));
        let peak = records.iter().map(|r| r.output).fold(0.0, f64::max);
        assert!(peak > 3.0 && peak < 5.0 - 0.6);
    }
}
