use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = *shared.sum.get_or_insert_with(|| shared.numbers.iter().sum());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.sum.ok_or_else(|| SolveError::failed("part 1 must run first"))?;
        Ok((sum * shared.numbers.len() as i32).to_string())
    }
}

#[test]
fn test_part_one_caches_for_part_two() {
    let mut shared = TestDependentSolver::parse("1\n2\n3").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 1).unwrap(), "6");
    assert_eq!(shared.sum, Some(6));
    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), "18");
}

#[test]
fn test_part_two_without_part_one_fails() {
    let mut shared = TestDependentSolver::parse("1\n2\n3").unwrap();

    let result = TestDependentSolver::solve_part(&mut shared, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = TestDependentSolver::parse("1").unwrap();

    assert!(matches!(
        TestDependentSolver::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert_eq!(TestDependentSolver::PARTS, 2);
}
