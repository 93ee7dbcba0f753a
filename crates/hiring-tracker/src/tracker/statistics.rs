use serde::Serialize;

use super::domain::{Applicant, Position};
use super::fields::{ApplicationStatus, Title};

/// Share of a position's applicants that were rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionRate {
    pub title: Title,
    pub total: usize,
    pub rejected: usize,
    pub rate: f64,
}

impl RejectionRate {
    pub fn for_position<'a, I>(position: &Position, applicants: I) -> Self
    where
        I: IntoIterator<Item = &'a Applicant>,
    {
        let (total, rejected) = applicants
            .into_iter()
            .filter(|applicant| applicant.is_applying_to(position))
            .fold((0usize, 0usize), |(total, rejected), applicant| {
                let rejected =
                    rejected + usize::from(applicant.status() == ApplicationStatus::Rejected);
                (total + 1, rejected)
            });

        Self {
            title: position.title.clone(),
            total,
            rejected,
            rate: rejection_rate(total, rejected),
        }
    }

    /// Rate as a percentage rounded to two decimals, for display.
    pub fn percentage(&self) -> f64 {
        (self.rate * 10_000.0).round() / 100.0
    }
}

/// `rejected / total`, or 0 when nobody applied.
pub fn rejection_rate(total: usize, rejected: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        rejected as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_positions_have_zero_rate() {
        assert_eq!(rejection_rate(0, 0), 0.0);
    }

    #[test]
    fn rate_is_a_ratio_not_a_percentage() {
        assert_eq!(rejection_rate(4, 1), 0.25);
        assert_eq!(rejection_rate(3, 3), 1.0);
    }
}
