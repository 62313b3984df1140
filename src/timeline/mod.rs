//! Timeline ordering checks and year helpers.
//!
//! A timeline is valid when adjacent years are non-decreasing (ties
//! allowed). The placement engine inserts first and asks afterwards, so
//! these functions must stay pure - they are the arbiter of whether an
//! insertion sticks.

use crate::core::PlacedTrack;

/// Check chronological ordering: true iff every adjacent pair satisfies
/// `a.year <= b.year`. Empty and single-element timelines are trivially
/// ordered.
#[must_use]
pub fn is_ordered(timeline: &[PlacedTrack]) -> bool {
    timeline.windows(2).all(|pair| pair[0].year <= pair[1].year)
}

/// Decade bucket of a year (`1994 -> 199`).
///
/// Works on the raw `year / 10` quotient; the bonus rules only compare
/// buckets for distinctness.
#[must_use]
pub fn decade(year: i32) -> i32 {
    year.div_euclid(10)
}

/// Length of the longest timeline suffix in which adjacent years differ by
/// at most 1.
///
/// A single entry counts as a run of 1; an empty timeline as 0.
#[must_use]
pub fn consecutive_suffix_len(timeline: &[PlacedTrack]) -> usize {
    if timeline.is_empty() {
        return 0;
    }

    let mut run = 1;
    for pair in timeline.windows(2).rev() {
        if (pair[1].year - pair[0].year).abs() <= 1 {
            run += 1;
        } else {
            break;
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Track;

    fn timeline(years: &[i32]) -> Vec<PlacedTrack> {
        years
            .iter()
            .enumerate()
            .map(|(i, &y)| Track::new(format!("t{i}"), "Song", "Artist", y).into_placed())
            .collect()
    }

    #[test]
    fn test_empty_and_single_are_ordered() {
        assert!(is_ordered(&timeline(&[])));
        assert!(is_ordered(&timeline(&[1999])));
    }

    #[test]
    fn test_ordered_with_ties() {
        assert!(is_ordered(&timeline(&[1980, 1990, 1990, 2005])));
    }

    #[test]
    fn test_unordered() {
        assert!(!is_ordered(&timeline(&[1990, 1985, 2000])));
        assert!(!is_ordered(&timeline(&[2000, 1999])));
    }

    #[test]
    fn test_decade() {
        assert_eq!(decade(1994), 199);
        assert_eq!(decade(1990), 199);
        assert_eq!(decade(2000), 200);
        assert_eq!(decade(1989), 198);
    }

    #[test]
    fn test_consecutive_suffix_len() {
        assert_eq!(consecutive_suffix_len(&timeline(&[])), 0);
        assert_eq!(consecutive_suffix_len(&timeline(&[1990])), 1);
        assert_eq!(consecutive_suffix_len(&timeline(&[1990, 1991, 1992])), 3);
        // Ties count: difference of 0 is within 1
        assert_eq!(consecutive_suffix_len(&timeline(&[1990, 1990, 1991])), 3);
        // Run broken in the middle: only the suffix counts
        assert_eq!(consecutive_suffix_len(&timeline(&[1980, 1995, 1996])), 2);
        assert_eq!(consecutive_suffix_len(&timeline(&[1980, 1990, 2000])), 1);
    }
}
