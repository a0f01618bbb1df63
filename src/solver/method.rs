//! Integration method selection and order-dependent dispatch.

use std::fmt;
use std::str::FromStr;

use crate::circuit::Order;
use crate::error::SimError;

/// User-facing integration method selection.
///
/// The numeric indices (1-4) follow the historical method menu. Not every
/// selection applies to every circuit order; see [`Integrator::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Forward Euler (first-order systems)
    #[default]
    Euler,
    /// Forward Euler for 2x2 systems
    #[cfg_attr(feature = "serde", serde(alias = "euler-2x2", alias = "euler2x2"))]
    Euler2,
    /// Classic Runge-Kutta 4
    Rk4,
    /// Heun predictor-corrector
    Heun,
}

impl Method {
    /// Look up a method by its menu index (1-4).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Euler),
            2 => Some(Self::Euler2),
            3 => Some(Self::Rk4),
            4 => Some(Self::Heun),
            _ => None,
        }
    }

    /// Menu index of this method (1-4).
    pub fn index(&self) -> u8 {
        match self {
            Self::Euler => 1,
            Self::Euler2 => 2,
            Self::Rk4 => 3,
            Self::Heun => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Euler => "euler",
            Self::Euler2 => "euler2",
            Self::Rk4 => "rk4",
            Self::Heun => "heun",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Method {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if let Ok(index) = value.parse::<u8>() {
            return Self::from_index(index).ok_or(SimError::UnknownMethod {
                value: s.to_string(),
            });
        }
        match value.as_str() {
            "euler" => Ok(Self::Euler),
            "euler2" | "euler-2x2" | "euler2x2" => Ok(Self::Euler2),
            "rk4" | "runge-kutta" => Ok(Self::Rk4),
            "heun" => Ok(Self::Heun),
            _ => Err(SimError::UnknownMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// Concrete integrator actually applied at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    Euler1,
    Rk4Order1,
    HeunOrder1,
    Euler2,
    Rk4,
    Heun,
}

impl Integrator {
    /// Resolve a method selection against the circuit order.
    ///
    /// First-order circuits use RK4 or Heun when asked and Euler otherwise,
    /// including for the 2x2 Euler selection. Second-order circuits use
    /// 2x2 Euler, RK4 or Heun when asked and fall back to RK4 for the
    /// first-order Euler selection.
    pub fn resolve(order: Order, method: Method) -> Self {
        match (order, method) {
            (Order::First, Method::Rk4) => Self::Rk4Order1,
            (Order::First, Method::Heun) => Self::HeunOrder1,
            (Order::First, Method::Euler | Method::Euler2) => Self::Euler1,
            (Order::Second, Method::Euler2) => Self::Euler2,
            (Order::Second, Method::Heun) => Self::Heun,
            (Order::Second, Method::Rk4 | Method::Euler) => Self::Rk4,
        }
    }

    /// Whether `method` is applied as requested for `order`, rather than
    /// replaced by a fallback.
    pub fn is_exact(order: Order, method: Method) -> bool {
        !matches!(
            (order, method),
            (Order::First, Method::Euler2) | (Order::Second, Method::Euler)
        )
    }

    /// Circuit order this integrator works on.
    pub fn order(&self) -> Order {
        match self {
            Self::Euler1 | Self::Rk4Order1 | Self::HeunOrder1 => Order::First,
            Self::Euler2 | Self::Rk4 | Self::Heun => Order::Second,
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Euler1 => "euler1",
            Self::Rk4Order1 => "rk4_order1",
            Self::HeunOrder1 => "heun_order1",
            Self::Euler2 => "euler2",
            Self::Rk4 => "rk4",
            Self::Heun => "heun",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("1".parse::<Method>().unwrap(), Method::Euler);
        assert_eq!("2".parse::<Method>().unwrap(), Method::Euler2);
        assert_eq!("RK4".parse::<Method>().unwrap(), Method::Rk4);
        assert_eq!("heun".parse::<Method>().unwrap(), Method::Heun);
        assert!("0".parse::<Method>().is_err());
        assert!("midpoint".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_index_roundtrip() {
        for index in 1..=4 {
            assert_eq!(Method::from_index(index).unwrap().index(), index);
        }
        assert!(Method::from_index(5).is_none());
    }

    #[test]
    fn test_first_order_dispatch() {
        assert_eq!(Integrator::resolve(Order::First, Method::Euler), Integrator::Euler1);
        assert_eq!(Integrator::resolve(Order::First, Method::Euler2), Integrator::Euler1);
        assert_eq!(Integrator::resolve(Order::First, Method::Rk4), Integrator::Rk4Order1);
        assert_eq!(Integrator::resolve(Order::First, Method::Heun), Integrator::HeunOrder1);
    }

    #[test]
    fn test_second_order_dispatch() {
        assert_eq!(Integrator::resolve(Order::Second, Method::Euler), Integrator::Rk4);
        assert_eq!(Integrator::resolve(Order::Second, Method::Euler2), Integrator::Euler2);
        assert_eq!(Integrator::resolve(Order::Second, Method::Rk4), Integrator::Rk4);
        assert_eq!(Integrator::resolve(Order::Second, Method::Heun), Integrator::Heun);
    }

    #[test]
    fn test_resolved_order_matches() {
        for order in [Order::First, Order::Second] {
            for index in 1..=4 {
                let method = Method::from_index(index).unwrap();
                assert_eq!(Integrator::resolve(order, method).order(), order);
            }
        }
        assert!(!Integrator::is_exact(Order::First, Method::Euler2));
        assert!(!Integrator::is_exact(Order::Second, Method::Euler));
        assert!(Integrator::is_exact(Order::Second, Method::Heun));
    }
}
