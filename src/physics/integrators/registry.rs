//! Registry pattern for dynamic integrator management
//!
//! Each integrator is self-describing, providing its own name, aliases, and
//! convergence order. The registry queries this metadata on registration to
//! build its lookup table, and hands out fresh boxed instances on request.

use super::Integrator;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Error returned when a name resolves to no registered integrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIntegrator {
    pub name: String,
    pub available: Vec<String>,
    pub aliases: Vec<String>,
}

impl fmt::Display for UnknownIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown integrator: '{}'. Available integrators: {}. Aliases: {}",
            self.name,
            self.available.join(", "),
            self.aliases.join(", ")
        )
    }
}

impl std::error::Error for UnknownIntegrator {}

/// Registry for runtime integrator selection
pub struct IntegratorRegistry {
    /// Maps names (canonical and aliases) to integrator instances
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register all built-in integrators.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{Heun, RungeKuttaFourthOrder, RungeKuttaSecondOrderMidpoint, VelocityVerlet};

        self.register_integrator(Box::new(RungeKuttaSecondOrderMidpoint));
        self.register_integrator(Box::new(Heun));
        self.register_integrator(Box::new(VelocityVerlet));
        self.register_integrator(Box::new(RungeKuttaFourthOrder));

        self
    }

    /// Register a single integrator, returning self for chaining.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }
        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, UnknownIntegrator> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| UnknownIntegrator {
                name: name.to_string(),
                available: self.list_available(),
                aliases: self
                    .list_aliases()
                    .into_iter()
                    .map(|(alias, _)| alias)
                    .collect(),
            })
    }

    /// Sorted canonical names
    pub fn list_available(&self) -> Vec<String> {
        self.integrators
            .values()
            .map(|integrator| integrator.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted `(alias, canonical)` pairs
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort();
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::AccelerationField;
    use crate::physics::math::{Scalar, Vector};

    #[derive(Debug, Clone)]
    struct TestIntegratorA;

    impl Integrator for TestIntegratorA {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut Vector, _: &mut Vector, _: &dyn AccelerationField, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            2
        }

        fn name(&self) -> &'static str {
            "test_a"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["ta", "test_alias_a"]
        }
    }

    #[derive(Debug, Clone)]
    struct TestIntegratorNoAlias;

    impl Integrator for TestIntegratorNoAlias {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut Vector, _: &mut Vector, _: &dyn AccelerationField, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            1
        }

        fn name(&self) -> &'static str {
            "no_alias"
        }
    }

    #[test]
    fn test_alias_resolution() {
        let registry = IntegratorRegistry::new().with_integrator(Box::new(TestIntegratorA));

        let canonical = registry.create("test_a").unwrap();
        let via_alias = registry.create("ta").unwrap();
        assert_eq!(canonical.name(), via_alias.name());
        assert_eq!(registry.create("test_alias_a").unwrap().name(), "test_a");
    }

    #[test]
    fn test_list_available_and_aliases() {
        let registry = IntegratorRegistry::new()
            .with_integrator(Box::new(TestIntegratorA))
            .with_integrator(Box::new(TestIntegratorNoAlias));

        assert_eq!(registry.list_available(), vec!["no_alias", "test_a"]);
        assert_eq!(
            registry.list_aliases(),
            vec![
                ("ta".to_string(), "test_a".to_string()),
                ("test_alias_a".to_string(), "test_a".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_integrator_error() {
        let registry = IntegratorRegistry::new().with_integrator(Box::new(TestIntegratorA));

        let error = registry.create("nonexistent").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Unknown integrator: 'nonexistent'"));
        assert!(message.contains("test_a"));
        assert!(message.contains("ta"));
    }

    #[test]
    fn test_case_sensitivity() {
        let registry = IntegratorRegistry::default();

        assert!(registry.create("MIDPOINT").is_err());
        assert!(registry.create("Rk4").is_err());
        assert!(registry.create("midpoint").is_ok());
    }

    #[test]
    fn test_standard_registry() {
        let registry = IntegratorRegistry::default();

        assert_eq!(
            registry.list_available(),
            vec!["heun", "midpoint", "runge_kutta_fourth_order", "velocity_verlet"]
        );
        for (alias, canonical) in registry.list_aliases() {
            assert_eq!(registry.create(&alias).unwrap().name(), canonical);
        }
        assert_eq!(registry.create("rk2").unwrap().name(), "midpoint");
    }

    #[test]
    fn test_empty_registry() {
        let registry = IntegratorRegistry::new();

        assert!(registry.list_available().is_empty());
        assert!(registry.list_aliases().is_empty());
        assert!(registry.create("anything").is_err());
    }
}
