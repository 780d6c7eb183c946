//! Registry pattern for dynamic integrator management
//!
//! The registry serves as a discovery and factory mechanism for the
//! integrator family. Each integrator is self-describing, providing its
//! own name, aliases, and convergence order; the registry queries that
//! metadata during registration to build its lookup table.
//!
//! The registry stores integrator instances indexed by name. Since all
//! integrators are zero-sized types, cloning simply creates new Box
//! allocations without any state copying.

use super::{
    ForwardEuler, Integrator, Leapfrog, RungeKuttaFourthOrder, RungeKuttaSecondOrderMidpoint,
};
use crate::math::Scalar;
use std::collections::{HashMap, HashSet};

/// Registry for runtime integrator registration
///
/// Maintains instances of each integrator indexed by canonical name and
/// alias. When an integrator is requested, the registry hands out a new
/// boxed instance via `clone_box()`.
pub struct IntegratorRegistry<T: Scalar> {
    /// Maps names (canonical and aliases) to integrator instances
    integrators: HashMap<String, Box<dyn Integrator<T>>>,
}

impl<T: Scalar> IntegratorRegistry<T> {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register all standard integrators.
    ///
    /// This populates the registry with the four built-in methods.
    /// Returns self for method chaining.
    pub fn with_standard_integrators(self) -> Self {
        self.with_integrator(Box::new(ForwardEuler))
            .with_integrator(Box::new(Leapfrog))
            .with_integrator(Box::new(RungeKuttaSecondOrderMidpoint))
            .with_integrator(Box::new(RungeKuttaFourthOrder))
    }

    /// Register a single integrator.
    ///
    /// Returns self for method chaining.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator<T>>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator<T>>) {
        // Store the integrator under each alias as well as its canonical name
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }

        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator<T>>, String> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| {
                let available = self.list_available();
                let aliases: Vec<String> = self
                    .list_aliases()
                    .into_iter()
                    .map(|(alias, _)| alias)
                    .collect();
                format!(
                    "Unknown integrator: '{}'. Available integrators: {}. Aliases: {}",
                    name,
                    available.join(", "),
                    aliases.join(", ")
                )
            })
    }

    pub fn list_available(&self) -> Vec<String> {
        let mut canonical_names = HashSet::new();

        // Get unique canonical names by querying each integrator
        for integrator in self.integrators.values() {
            canonical_names.insert(integrator.name().to_string());
        }

        let mut names: Vec<String> = canonical_names.into_iter().collect();
        names.sort();
        names
    }

    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = Vec::new();

        // Check each entry to see if it's an alias
        for (key, integrator) in &self.integrators {
            let canonical_name = integrator.name();
            if key != canonical_name {
                aliases.push((key.clone(), canonical_name.to_string()));
            }
        }

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl<T: Scalar> Default for IntegratorRegistry<T> {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrators::Rhs;
    use std::any::Any;

    // Minimal integrator that freezes the state, for registry tests
    #[derive(Debug, Clone, Copy)]
    struct Frozen;

    impl Integrator<f64> for Frozen {
        fn step(&self, _rhs: &dyn Rhs<f64>, f: f64, _t: f64, _dt: f64) -> f64 {
            f
        }

        fn convergence_order(&self) -> usize {
            1
        }

        fn name(&self) -> &'static str {
            "frozen"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["hold", "still"]
        }

        fn clone_box(&self) -> Box<dyn Integrator<f64>> {
            Box::new(*self)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    // Minimal integrator without aliases
    #[derive(Debug, Clone, Copy)]
    struct Shifter;

    impl Integrator<f64> for Shifter {
        fn step(&self, _rhs: &dyn Rhs<f64>, f: f64, _t: f64, dt: f64) -> f64 {
            f + dt
        }

        fn convergence_order(&self) -> usize {
            4
        }

        fn name(&self) -> &'static str {
            "shifter"
        }

        fn clone_box(&self) -> Box<dyn Integrator<f64>> {
            Box::new(*self)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn create_test_registry() -> IntegratorRegistry<f64> {
        IntegratorRegistry::new()
            .with_integrator(Box::new(Frozen))
            .with_integrator(Box::new(Shifter))
    }

    #[test]
    fn test_registry_discovery() {
        let registry = create_test_registry();

        let available = registry.list_available();
        assert!(available.contains(&"frozen".to_string()));
        assert!(available.contains(&"shifter".to_string()));
        assert_eq!(available.len(), 2, "Should have exactly our test integrators");
    }

    #[test]
    fn test_integrator_metadata() {
        let registry = create_test_registry();

        let frozen = registry.create("frozen").unwrap();
        assert_eq!(frozen.name(), "frozen");
        assert_eq!(frozen.convergence_order(), 1);
        assert_eq!(frozen.aliases(), vec!["hold", "still"]);

        let shifter = registry.create("shifter").unwrap();
        assert_eq!(shifter.name(), "shifter");
        assert_eq!(shifter.convergence_order(), 4);
        assert!(shifter.aliases().is_empty());
    }

    #[test]
    fn test_alias_resolution() {
        let registry = create_test_registry();

        let canonical = registry.create("frozen").unwrap();
        for alias in ["hold", "still"] {
            let via_alias = registry.create(alias).unwrap();
            assert_eq!(canonical.name(), via_alias.name());
            assert_eq!(canonical.convergence_order(), via_alias.convergence_order());
        }
    }

    #[test]
    fn test_list_aliases() {
        let registry = create_test_registry();
        let aliases = registry.list_aliases();

        let alias_map: HashMap<_, _> = aliases.into_iter().collect();
        assert_eq!(alias_map.get("hold"), Some(&"frozen".to_string()));
        assert_eq!(alias_map.get("still"), Some(&"frozen".to_string()));
        assert_eq!(alias_map.len(), 2, "Should have exactly 2 aliases");
    }

    #[test]
    fn test_unknown_integrator_error() {
        let registry = create_test_registry();

        let result = registry.create("nonexistent");
        assert!(result.is_err());

        if let Err(error) = result {
            assert!(error.contains("Unknown integrator"));
            assert!(error.contains("Available integrators"));
            assert!(error.contains("frozen"));
            assert!(error.contains("shifter"));
        }
    }

    #[test]
    fn test_case_sensitivity() {
        let registry = create_test_registry();

        assert!(registry.create("FROZEN").is_err());
        assert!(registry.create("Frozen").is_err());
        assert!(registry.create("frozen").is_ok());
        assert!(registry.create("hold").is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = IntegratorRegistry::<f64>::new();

        assert_eq!(registry.list_available().len(), 0);
        assert_eq!(registry.list_aliases().len(), 0);
        assert!(registry.create("anything").is_err());
    }

    #[test]
    fn test_duplicate_registration() {
        // Re-registering the same integrator overwrites the previous entry
        let registry = IntegratorRegistry::<f64>::new()
            .with_integrator(Box::new(Frozen))
            .with_integrator(Box::new(Frozen));

        assert_eq!(registry.list_available().len(), 1);
        assert!(registry.create("frozen").is_ok());
        assert!(registry.create("hold").is_ok());
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = IntegratorRegistry::<f64>::new().with_standard_integrators();

        let available = registry.list_available();
        assert_eq!(
            available,
            vec![
                "forward_euler",
                "leapfrog",
                "runge_kutta_fourth_order",
                "runge_kutta_second_order_midpoint",
            ]
        );

        // Every canonical name and every alias resolves
        for name in registry.list_available() {
            assert!(
                registry.create(&name).is_ok(),
                "Failed to create integrator '{name}'"
            );
        }
        for (alias, canonical) in registry.list_aliases() {
            let created = registry.create(&alias);
            assert!(
                created.is_ok(),
                "Alias '{alias}' (-> '{canonical}') failed to resolve"
            );
            assert_eq!(created.unwrap().name(), canonical);
        }
    }

    #[test]
    fn test_standard_registry_short_aliases() {
        let registry = IntegratorRegistry::<f64>::new().with_standard_integrators();

        assert_eq!(registry.create("euler").unwrap().name(), "forward_euler");
        assert_eq!(
            registry.create("rk2").unwrap().name(),
            "runge_kutta_second_order_midpoint"
        );
        assert_eq!(
            registry.create("rk4").unwrap().name(),
            "runge_kutta_fourth_order"
        );
    }
}
