//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

fn check_year_day(year: u16, day: u8) -> Result<(), RegistrationError> {
    if year < BASE_YEAR || day == 0 || day > DAYS_PER_YEAR {
        return Err(RegistrationError::InvalidYearDay(year, day));
    }
    Ok(())
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration rejects duplicates and out-of-calendar year/day pairs.
///
/// ```
/// # use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, register_solver};
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Echo, 2023, 1);
/// let registry = builder.build();
///
/// let mut solver = registry.create_solver(2023, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a solver factory with an explicit parts count
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        check_year_day(year, day)?;
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register solver type `S` for a year and day
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn instantiate<'a, S>(year: u16, day: u8, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<'a, S>::new(year, day, input)?))
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Metadata for every registered solver, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Object-safe registration hook, implemented for every [`Solver`].
///
/// `Solver` has associated types and consts, so plugins store a
/// `&'static dyn RegisterableSolver` instead.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "grid", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type with a mutable registry builder binding
///
/// Panics on registration failure, so it suits tests and doc examples.
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register::<$solver>($year, $day)
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Count;

    impl AocParser for Count {
        type SharedData<'a> = usize;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.len())
        }
    }

    impl Solver for Count {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            Ok((*shared * part as usize).to_string())
        }
    }

    #[test]
    fn test_create_registered_solver() {
        let registry = RegistryBuilder::new().register::<Count>(2023, 10).unwrap().build();
        let mut solver = registry.create_solver(2023, 10, "abcd").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "4");
        assert_eq!(solver.solve(2).unwrap().answer, "8");
        assert_eq!(solver.parts(), 2);
    }

    #[test]
    fn test_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create_solver(2023, 10, ""),
            Err(SolverError::NotFound(2023, 10))
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = RegistryBuilder::new()
            .register::<Count>(2023, 10)
            .unwrap()
            .register::<Count>(2023, 10);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2023, 10))
        ));
    }

    #[test]
    fn test_invalid_year_day_rejected() {
        for (year, day) in [(2014, 1), (2023, 0), (2023, 26)] {
            let result = RegistryBuilder::new().register::<Count>(year, day);
            assert!(matches!(
                result,
                Err(RegistrationError::InvalidYearDay(y, d)) if y == year && d == day
            ));
        }
    }

    #[test]
    fn test_iter_info_sorted() {
        let registry = RegistryBuilder::new()
            .register::<Count>(2023, 10)
            .unwrap()
            .register::<Count>(2022, 3)
            .unwrap()
            .build();
        let info: Vec<_> = registry.iter_info().map(|i| (i.year, i.day, i.parts)).collect();
        assert_eq!(info, vec![(2022, 3, 2), (2023, 10, 2)]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(2022, 3));
        assert!(!registry.contains(2022, 4));
    }
}
