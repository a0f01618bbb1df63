//! Fixed-step explicit integrators.
//!
//! Every integrator advances the state in place by one step of size `dt`
//! starting at time `t`. They only see the derivative callables, never the
//! concrete circuit or source. No error estimation or step adaptation is
//! performed.
//!
//! First-order variants take `f(t, x) -> dx/dt`. Second-order variants take
//! a paired derivative `f(t, x1, x2) -> (dx1/dt, dx2/dt)` so that both
//! components of every stage are computed from one evaluation at the same
//! intermediate state.

/// Forward Euler for a single state.
pub fn euler1(x: &mut f64, dt: f64, t: f64, f: impl Fn(f64, f64) -> f64) {
    let dx_dt = f(t, *x);
    *x += dt * dx_dt;
}

/// Forward Euler for a two-state system.
pub fn euler2(
    x1: &mut f64,
    x2: &mut f64,
    dt: f64,
    t: f64,
    f: impl Fn(f64, f64, f64) -> (f64, f64),
) {
    let (dx1_dt, dx2_dt) = f(t, *x1, *x2);
    *x1 += dt * dx1_dt;
    *x2 += dt * dx2_dt;
}

/// Classic fourth-order Runge-Kutta for a single state.
pub fn rk4_order1(x: &mut f64, dt: f64, t: f64, f: impl Fn(f64, f64) -> f64) {
    let x0 = *x;
    let k1 = dt * f(t, x0);
    let k2 = dt * f(t + dt / 2.0, x0 + k1 / 2.0);
    let k3 = dt * f(t + dt / 2.0, x0 + k2 / 2.0);
    let k4 = dt * f(t + dt, x0 + k3);

    *x += (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
}

/// Classic fourth-order Runge-Kutta for a two-state system.
///
/// Both components advance through the same intermediate stage states.
pub fn rk4(
    x1: &mut f64,
    x2: &mut f64,
    dt: f64,
    t: f64,
    f: impl Fn(f64, f64, f64) -> (f64, f64),
) {
    let (a, b) = (*x1, *x2);

    let (d1, d2) = f(t, a, b);
    let (k1_x1, k1_x2) = (dt * d1, dt * d2);

    let (d1, d2) = f(t + dt / 2.0, a + k1_x1 / 2.0, b + k1_x2 / 2.0);
    let (k2_x1, k2_x2) = (dt * d1, dt * d2);

    let (d1, d2) = f(t + dt / 2.0, a + k2_x1 / 2.0, b + k2_x2 / 2.0);
    let (k3_x1, k3_x2) = (dt * d1, dt * d2);

    let (d1, d2) = f(t + dt, a + k3_x1, b + k3_x2);
    let (k4_x1, k4_x2) = (dt * d1, dt * d2);

    *x1 += (k1_x1 + 2.0 * k2_x1 + 2.0 * k3_x1 + k4_x1) / 6.0;
    *x2 += (k1_x2 + 2.0 * k2_x2 + 2.0 * k3_x2 + k4_x2) / 6.0;
}

/// Heun's predictor-corrector for a single state.
pub fn heun_order1(x: &mut f64, dt: f64, t: f64, f: impl Fn(f64, f64) -> f64) {
    // Euler predictor
    let slope1 = f(t, *x);
    let x_pred = *x + dt * slope1;

    // Trapezoidal corrector
    let slope2 = f(t + dt, x_pred);
    *x += dt * (slope1 + slope2) / 2.0;
}

/// Heun's predictor-corrector for a two-state system.
pub fn heun(
    x1: &mut f64,
    x2: &mut f64,
    dt: f64,
    t: f64,
    f: impl Fn(f64, f64, f64) -> (f64, f64),
) {
    let (dx1_dt, dx2_dt) = f(t, *x1, *x2);
    let x1_pred = *x1 + dt * dx1_dt;
    let x2_pred = *x2 + dt * dx2_dt;

    let (dx1_dt_pred, dx2_dt_pred) = f(t + dt, x1_pred, x2_pred);

    *x1 += dt * (dx1_dt + dx1_dt_pred) / 2.0;
    *x2 += dt * (dx2_dt + dx2_dt_pred) / 2.0;
}
