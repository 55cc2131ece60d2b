// ============================================================================
// Solver Configuration
// Convergence tolerance, iteration bound and diagnostics settings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default iteration bound
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Configuration for creating a solver
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Converged once the residual between successive states drops below this
    pub tolerance: f64,

    /// Hard cap on iterations; the only cutoff (no timeouts)
    pub max_iterations: usize,

    /// Keep every residual for later inspection
    pub record_history: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            record_history: false,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with required parameters
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            record_history: false,
        }
    }

    /// Builder method: Set tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: Set iteration bound
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: Record residual history
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() {
            return Err("Tolerance must be finite".to_string());
        }

        if self.tolerance <= 0.0 {
            return Err("Tolerance must be positive".to_string());
        }

        if self.max_iterations == 0 {
            return Err("Max iterations must be at least 1".to_string());
        }

        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SolverConfig {
    /// High-precision configuration
    /// - Tolerance: 1e-12
    /// - Up to 1000 iterations
    pub fn precise() -> Self {
        Self::new(1e-12, 1000)
    }

    /// Quick, coarse configuration
    /// - Tolerance: 1e-6
    /// - Up to 50 iterations
    pub fn fast() -> Self {
        Self::new(1e-6, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SolverConfig::new(1e-6, 25);

        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 25);
        assert!(!config.record_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::fast()
            .with_max_iterations(10)
            .with_tolerance(1e-3)
            .with_history(true);

        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.tolerance, 1e-3);
        assert!(config.record_history);
    }

    #[test]
    fn test_validation() {
        assert!(SolverConfig::new(0.0, 10).validate().is_err());
        assert!(SolverConfig::new(-1e-9, 10).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 10).validate().is_err());
        assert!(SolverConfig::new(f64::INFINITY, 10).validate().is_err());
        assert_eq!(
            SolverConfig::new(1e-9, 0).validate(),
            Err("Max iterations must be at least 1".to_string())
        );
    }

    #[test]
    fn test_preset_configs() {
        let precise = SolverConfig::precise();
        assert_eq!(precise.tolerance, 1e-12);
        assert_eq!(precise.max_iterations, 1000);

        let fast = SolverConfig::fast();
        assert_eq!(fast.tolerance, 1e-6);
        assert_eq!(fast.max_iterations, 50);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = SolverConfig::from_json(r#"{"tolerance": 1e-7}"#).unwrap();
        assert_eq!(config.tolerance, 1e-7);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);

        let json = config.to_json().unwrap();
        assert_eq!(SolverConfig::from_json(&json).unwrap(), config);

        assert!(SolverConfig::from_json(r#"{"tolerance": -1.0}"#).is_err());
        assert!(SolverConfig::from_json("not json").is_err());
    }
}
