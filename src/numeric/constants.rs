// ============================================================================
// Constants
// Read-only table of named mathematical and physical constants
// ============================================================================

use super::errors::{MathError, MathResult};
use super::scalar::Scalar;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Process-wide table of named constants.
///
/// The table is built once, on first access, behind a one-time
/// initialisation barrier and is never mutated afterwards, so concurrent
/// readers need no locking. Names are case sensitive (`g` is standard
/// gravity, `G` the gravitational constant).
///
/// # Example
/// ```
/// use calculus::Constants;
///
/// let pi = Constants::get("pi")?;
/// assert_eq!(pi.value(), std::f64::consts::PI);
/// assert!(Constants::get("bogus").is_err());
/// # Ok::<(), calculus::MathError>(())
/// ```
pub struct Constants;

impl Constants {
    pub const PI: Scalar = Scalar::new(std::f64::consts::PI);
    pub const E: Scalar = Scalar::new(std::f64::consts::E);
    pub const TAU: Scalar = Scalar::new(std::f64::consts::TAU);
    pub const SQRT_2: Scalar = Scalar::new(std::f64::consts::SQRT_2);
    pub const LN_2: Scalar = Scalar::new(std::f64::consts::LN_2);
    pub const LN_10: Scalar = Scalar::new(std::f64::consts::LN_10);
    /// Golden ratio
    pub const PHI: Scalar = Scalar::new(1.618_033_988_749_895);

    /// Speed of light in vacuum (m/s)
    pub const SPEED_OF_LIGHT: Scalar = Scalar::new(299_792_458.0);
    /// Planck constant (J·s)
    pub const PLANCK: Scalar = Scalar::new(6.626_070_15e-34);
    /// Boltzmann constant (J/K)
    pub const BOLTZMANN: Scalar = Scalar::new(1.380_649e-23);
    /// Standard acceleration of gravity (m/s²)
    pub const STANDARD_GRAVITY: Scalar = Scalar::new(9.806_65);
    /// Newtonian constant of gravitation (m³/(kg·s²))
    pub const GRAVITATIONAL: Scalar = Scalar::new(6.674_30e-11);

    const ENTRIES: [(&'static str, Scalar); 12] = [
        ("pi", Self::PI),
        ("e", Self::E),
        ("tau", Self::TAU),
        ("sqrt2", Self::SQRT_2),
        ("ln2", Self::LN_2),
        ("ln10", Self::LN_10),
        ("phi", Self::PHI),
        ("c", Self::SPEED_OF_LIGHT),
        ("h", Self::PLANCK),
        ("k", Self::BOLTZMANN),
        ("g", Self::STANDARD_GRAVITY),
        ("G", Self::GRAVITATIONAL),
    ];

    fn table() -> &'static HashMap<&'static str, Scalar> {
        static TABLE: OnceLock<HashMap<&'static str, Scalar>> = OnceLock::new();
        TABLE.get_or_init(|| Self::ENTRIES.into_iter().collect())
    }

    /// Look up a constant by name.
    ///
    /// # Errors
    /// Returns `UnknownConstant` when the name is not in the table.
    pub fn get(name: &str) -> MathResult<Scalar> {
        Self::table()
            .get(name)
            .copied()
            .ok_or_else(|| MathError::UnknownConstant(name.to_string()))
    }

    pub fn contains(name: &str) -> bool {
        Self::table().contains_key(name)
    }

    /// All constant names, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::table().keys().copied().collect();
        names.sort_unstable();
        names
    }
}
