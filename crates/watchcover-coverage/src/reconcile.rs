//! Third pass: remove valid coverage from invalid coverage.

use watchcover_common::Interval;

/// Subtract the merged set `valid` from the merged set `invalid`.
///
/// Each invalid interval may be trimmed, split into several pieces or dropped
/// entirely. Output stays sorted left to right.
pub fn subtract(invalid: &[Interval], valid: &[Interval]) -> Vec<Interval> {
    let mut remaining = Vec::with_capacity(invalid.len());

    for inv in invalid {
        // start of the part of `inv` not yet covered
        let mut cursor = inv.start;

        for v in valid {
            if v.end <= cursor {
                continue;
            }
            if v.start >= inv.end {
                break;
            }
            if v.start > cursor {
                remaining.push(Interval::new(cursor, v.start));
            }
            cursor = cursor.max(v.end);
            if cursor >= inv.end {
                break;
            }
        }

        if cursor < inv.end {
            remaining.push(Interval::new(cursor, inv.end));
        }
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_nothing_to_subtract() {
        let invalid = vec![iv(0.0, 10.0)];
        assert_eq!(subtract(&invalid, &[]), invalid);
        assert!(subtract(&[], &[iv(0.0, 10.0)]).is_empty());
    }

    #[test]
    fn test_valid_inside_splits() {
        assert_eq!(
            subtract(&[iv(0.0, 10.0)], &[iv(3.0, 5.0)]),
            vec![iv(0.0, 3.0), iv(5.0, 10.0)]
        );
    }

    #[test]
    fn test_edge_overlap_trims() {
        assert_eq!(subtract(&[iv(3.0, 8.0)], &[iv(0.0, 5.0)]), vec![iv(5.0, 8.0)]);
        assert_eq!(subtract(&[iv(3.0, 8.0)], &[iv(6.0, 12.0)]), vec![iv(3.0, 6.0)]);
    }

    #[test]
    fn test_full_cover_removes() {
        assert!(subtract(&[iv(3.0, 8.0)], &[iv(0.0, 10.0)]).is_empty());
        assert!(subtract(&[iv(3.0, 8.0)], &[iv(3.0, 8.0)]).is_empty());
    }

    #[test]
    fn test_touching_valid_leaves_invalid_alone() {
        assert_eq!(
            subtract(&[iv(3.0, 8.0)], &[iv(0.0, 3.0), iv(8.0, 9.0)]),
            vec![iv(3.0, 8.0)]
        );
    }

    #[test]
    fn test_many_valid_pieces() {
        let invalid = vec![iv(0.0, 20.0), iv(30.0, 40.0)];
        let valid = vec![iv(2.0, 4.0), iv(6.0, 8.0), iv(18.0, 32.0), iv(39.0, 45.0)];
        assert_eq!(
            subtract(&invalid, &valid),
            vec![
                iv(0.0, 2.0),
                iv(4.0, 6.0),
                iv(8.0, 18.0),
                iv(32.0, 39.0),
            ]
        );
    }
}
