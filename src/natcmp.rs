//! Natural order string comparison.
//!
//! Runs of ASCII digits compare by numeric value, so `"item2" < "item10"`.
//! A run starting with `'0'` is compared digit by digit from the left, which
//! orders it like a decimal fraction (`"1.010" < "1.02"`). Whitespace before
//! each unit is ignored. Everything else compares byte by byte.

use std::cmp::Ordering;

pub fn natcmp(a: &str, b: &str) -> Ordering {
    compare(a.as_bytes(), b.as_bytes(), false)
}

/// Like [`natcmp`], but ASCII letters compare without regard to case.
pub fn natcasecmp(a: &str, b: &str) -> Ordering {
    compare(a.as_bytes(), b.as_bytes(), true)
}

fn compare(a: &[u8], b: &[u8], fold_case: bool) -> Ordering {
    let (mut ai, mut bi) = (0, 0);

    loop {
        while a.get(ai).map_or(false, u8::is_ascii_whitespace) {
            ai += 1;
        }
        while b.get(bi).map_or(false, u8::is_ascii_whitespace) {
            bi += 1;
        }

        let (ca, cb) = (a.get(ai).copied(), b.get(bi).copied());

        if let (Some(x), Some(y)) = (ca, cb) {
            if x.is_ascii_digit() && y.is_ascii_digit() {
                let ord = if x == b'0' || y == b'0' {
                    compare_left(&a[ai..], &b[bi..])
                } else {
                    compare_right(&a[ai..], &b[bi..])
                };

                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }

        match (ca, cb) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(mut x), Some(mut y)) => {
                if fold_case {
                    x = x.to_ascii_uppercase();
                    y = y.to_ascii_uppercase();
                }

                match x.cmp(&y) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
        }

        ai += 1;
        bi += 1;
    }
}

fn digit_at(s: &[u8], i: usize) -> Option<u8> {
    s.get(i).copied().filter(u8::is_ascii_digit)
}

// integer runs: the longer run is bigger, otherwise the first differing digit decides
fn compare_right(a: &[u8], b: &[u8]) -> Ordering {
    let mut bias = Ordering::Equal;

    for i in 0.. {
        match (digit_at(a, i), digit_at(b, i)) {
            (None, None) => return bias,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if bias == Ordering::Equal {
                    bias = x.cmp(&y);
                }
            }
        }
    }

    bias
}

// fractional runs: the first differing digit decides
fn compare_left(a: &[u8], b: &[u8]) -> Ordering {
    for i in 0.. {
        match (digit_at(a, i), digit_at(b, i)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {}
                ord => return ord,
            },
        }
    }

    Ordering::Equal
}
