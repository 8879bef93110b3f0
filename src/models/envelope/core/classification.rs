//! Summer performance grading of a (time shift, decrement factor) pair.

use std::fmt;

/// Qualitative summer performance grade, per the threshold table of the
/// Italian DM 26/06/2009.
///
/// The ranges are checked in a fixed priority order (see [`classify`]).
/// Pairs that fall outside every range — for example a time shift above
/// 12 h with a decrement factor of 0.2 — receive
/// [`SummerPerformance::Undetermined`], which is a valid outcome of the
/// table, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummerPerformance {
    /// 5/5: time shift over 12 h and decrement factor under 0.15.
    Excellent,
    /// 4/5: time shift in (10, 12] h and decrement factor in [0.15, 0.30).
    Good,
    /// 3/5: time shift in (8, 10] h and decrement factor in [0.30, 0.40).
    Medium,
    /// 2/5: time shift in (6, 8] h and decrement factor in [0.40, 0.60).
    Sufficient,
    /// 1/5: time shift of 6 h or less and decrement factor of 0.60 or more.
    Poor,
    /// The pair falls outside every graded range.
    Undetermined,
}

impl SummerPerformance {
    /// The score out of five, if the pair received a grade.
    #[must_use]
    pub fn score(self) -> Option<u8> {
        match self {
            Self::Excellent => Some(5),
            Self::Good => Some(4),
            Self::Medium => Some(3),
            Self::Sufficient => Some(2),
            Self::Poor => Some(1),
            Self::Undetermined => None,
        }
    }
}

impl fmt::Display for SummerPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent 5/5",
            Self::Good => "Good 4/5",
            Self::Medium => "Medium 3/5",
            Self::Sufficient => "Sufficient 2/5",
            Self::Poor => "Poor 1/5",
            Self::Undetermined => "Undetermined",
        };
        f.write_str(label)
    }
}

/// Grades a time shift (hours) and decrement factor pair.
///
/// The checks run in this exact order and the first match wins; the
/// boundary semantics (e.g. a shift of exactly 12 h is *not* Excellent)
/// depend on it.
#[must_use]
pub fn classify(time_shift_hours: f64, decrement_factor: f64) -> SummerPerformance {
    let shift = time_shift_hours;
    let factor = decrement_factor;

    if shift > 12.0 && factor < 0.15 {
        SummerPerformance::Excellent
    } else if (10.0 < shift && shift <= 12.0) && (0.15..0.30).contains(&factor) {
        SummerPerformance::Good
    } else if (8.0 < shift && shift <= 10.0) && (0.30..0.40).contains(&factor) {
        SummerPerformance::Medium
    } else if (6.0 < shift && shift <= 8.0) && (0.40..0.60).contains(&factor) {
        SummerPerformance::Sufficient
    } else if shift <= 6.0 && factor >= 0.60 {
        SummerPerformance::Poor
    } else {
        SummerPerformance::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_within_each_range() {
        assert_eq!(classify(12.5, 0.10), SummerPerformance::Excellent);
        assert_eq!(classify(11.0, 0.20), SummerPerformance::Good);
        assert_eq!(classify(9.0, 0.35), SummerPerformance::Medium);
        assert_eq!(classify(7.0, 0.50), SummerPerformance::Sufficient);
        assert_eq!(classify(5.0, 0.70), SummerPerformance::Poor);
    }

    #[test]
    fn boundary_edges() {
        // A shift of exactly 12 h is not Excellent; with a factor below the
        // Good range it falls through to Undetermined.
        assert_eq!(classify(12.0, 0.14), SummerPerformance::Undetermined);
        assert_eq!(classify(12.0, 0.15), SummerPerformance::Good);
        assert_eq!(classify(12.0, 0.299), SummerPerformance::Good);
        assert_eq!(classify(12.0, 0.30), SummerPerformance::Undetermined);

        // Lower bounds are exclusive on the shift.
        assert_eq!(classify(10.0, 0.20), SummerPerformance::Undetermined);
        assert_eq!(classify(10.0, 0.30), SummerPerformance::Medium);
        assert_eq!(classify(8.0, 0.35), SummerPerformance::Undetermined);
        assert_eq!(classify(8.0, 0.40), SummerPerformance::Sufficient);

        // Poor requires both a short shift and a large factor.
        assert_eq!(classify(6.0, 0.60), SummerPerformance::Poor);
        assert_eq!(classify(6.0, 0.59), SummerPerformance::Undetermined);
        assert_eq!(classify(6.1, 0.60), SummerPerformance::Undetermined);
    }

    #[test]
    fn otherwise_branch_is_reachable() {
        // Long shift but mediocre damping: no grade.
        assert_eq!(classify(13.0, 0.20), SummerPerformance::Undetermined);
        assert_eq!(classify(13.0, 0.20).score(), None);
    }

    #[test]
    fn display_labels() {
        assert_eq!(classify(12.5, 0.10).to_string(), "Excellent 5/5");
        assert_eq!(classify(5.0, 0.70).to_string(), "Poor 1/5");
        assert_eq!(SummerPerformance::Undetermined.to_string(), "Undetermined");
        assert_eq!(SummerPerformance::Good.score(), Some(4));
    }
}
