use indexmap::IndexMap;
use roster_core::entities::Employee;

use crate::{Report, ReportValues};

/// Mean performance score per position.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceReport<'a> {
    employees: &'a [Employee],
}

impl<'a> PerformanceReport<'a> {
    #[must_use]
    pub const fn new(employees: &'a [Employee]) -> Self {
        Self { employees }
    }
}

impl Report for PerformanceReport<'_> {
    fn headers(&self) -> [&'static str; 2] {
        ["position", "performance"]
    }

    fn compute(&self) -> ReportValues {
        let mut by_position: IndexMap<&str, Vec<f64>> = IndexMap::new();
        for employee in self.employees {
            by_position
                .entry(employee.position())
                .or_default()
                .push(employee.performance());
        }

        by_position
            .into_iter()
            .map(|(position, scores)| (position.to_string(), average(&scores)))
            .collect()
    }
}

/// Arithmetic mean rounded to two decimal places; `0.0` for no values.
///
/// Rounding is done on the exact binary value with ties going to even, so
/// `4.125` becomes `4.12`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    format!("{mean:.2}").parse().unwrap_or(mean)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn employee(name: &str, position: &str, performance: f64) -> Employee {
        Employee::new(name, position, 30, performance, Vec::new(), "Team", 3)
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee("Ivanov Ivan", "Frontend Developer", 4.6),
            employee("Petrov Petr", "Backend Developer", 5.0),
            employee("Sergeev Andrey", "Frontend Developer", 4.1),
            employee("Pavlov Raul", "Backend Developer", 4.2),
        ]
    }

    #[test]
    fn groups_by_position_in_first_seen_order() {
        let employees = staff();
        let values = PerformanceReport::new(&employees).compute();

        let expected: ReportValues = [
            ("Frontend Developer".to_string(), 4.35),
            ("Backend Developer".to_string(), 4.6),
        ]
        .into_iter()
        .collect();
        assert_eq!(values, expected);
        assert_eq!(
            values.keys().collect::<Vec<_>>(),
            ["Frontend Developer", "Backend Developer"]
        );
    }

    #[test]
    fn compute_is_repeatable() {
        let employees = staff();
        let report = PerformanceReport::new(&employees);
        assert_eq!(report.compute(), report.compute());
    }

    #[test]
    fn empty_batch_yields_empty_mapping() {
        let report = PerformanceReport::new(&[]);
        assert!(report.compute().is_empty());
    }

    #[test]
    fn headers_are_fixed() {
        let report = PerformanceReport::new(&[]);
        assert_eq!(report.headers(), ["position", "performance"]);
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[2.4], 2.4)]
    #[case(&[1.1, 2.2, 3.3], 2.2)]
    #[case(&[4.6, 4.1], 4.35)]
    #[case(&[1.0, 2.0, 2.0], 1.67)]
    #[case(&[4.125], 4.12)]
    #[case(&[4.0, 4.25], 4.12)]
    #[case(&[4.375], 4.38)]
    fn average_rounds_to_two_places(#[case] values: &[f64], #[case] expected: f64) {
        assert!(
            (average(values) - expected).abs() < 1e-9,
            "average({values:?}) = {}, expected {expected}",
            average(values)
        );
    }
}
