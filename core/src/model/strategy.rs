use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Name,
    Date,
}

impl SortStrategy {
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortStrategy::Name => a.compare_by_name(b),
            SortStrategy::Date => a.compare_by_date(b),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortStrategy::Name),
            "date" => Ok(SortStrategy::Date),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Name => write!(f, "name"),
            SortStrategy::Date => write!(f, "date"),
        }
    }
}

/// Stable in-place sort; equal tasks keep their relative order.
pub fn sort_tasks(tasks: &mut [Task], strategy: SortStrategy) {
    tasks.sort_by(|a, b| strategy.compare(a, b));
}
