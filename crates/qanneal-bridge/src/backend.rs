//! Backend selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named external solving strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Physical quantum-annealing hardware via the Ocean cloud API.
    Qpu,
    /// Classical simulated-annealing sampler, runs locally.
    Sa,
}

impl Backend {
    /// The wire name passed to the external solver.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Qpu => "qpu",
            Backend::Sa => "sa",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for backend names that match no known strategy.
#[derive(Debug, Clone, Error)]
#[error("unknown backend '{0}' (expected \"qpu\" or \"sa\")")]
pub struct UnknownBackend(pub String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qpu" => Ok(Backend::Qpu),
            "sa" => Ok(Backend::Sa),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Backend::Qpu.as_str(), "qpu");
        assert_eq!(Backend::Sa.as_str(), "sa");
        assert_eq!(Backend::Sa.to_string(), "sa");
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("qpu".parse::<Backend>().unwrap(), Backend::Qpu);
        assert_eq!("sa".parse::<Backend>().unwrap(), Backend::Sa);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tabu".parse::<Backend>().unwrap_err();
        assert!(err.to_string().contains("tabu"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Backend::Qpu).unwrap(), "\"qpu\"");
    }
}
