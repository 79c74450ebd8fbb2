use crate::palette::Cell;

/// Sub-ranges shorter than this are handed to insertion sort by
/// [`Strategy::MedianWithCutoff`]; the handful of swaps involved is not
/// worth animating as partition steps.
const INSERTION_CUTOFF: usize = 7;

/// How a partition pass splits the remaining work.
///
/// Two of the strategies report their result differently from the other
/// three, so the outcome is a tagged variant rather than a bare index pair:
/// the consumer branches on it when pushing child ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// A single split point at `at`. The left child is `[low, at - 1]`, the
    /// right child `[at + skip, high]`; `skip` is 1 when the element at `at`
    /// is already in its final position, 0 when nothing is settled yet.
    Point { at: usize, skip: usize },
    /// Bounds of the equal-to-pivot band from a three-way pass. Everything
    /// in `[lo, hi]` is final; children are `[low, lo - 1]` and
    /// `[hi + 1, high]`.
    Band { lo: usize, hi: usize },
    /// The whole sub-range was sorted outright; nothing left to recurse on.
    Sorted,
}

/// The five partitioning strategies, sharing one call contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Lomuto partition around the last element.
    LomutoHigh,
    /// Hoare partition with two pointers converging on the middle pivot.
    HoareMiddle,
    /// Median-of-three pivot choice feeding the Lomuto scan.
    MedianOfThree,
    /// Median-of-three, but short sub-ranges are insertion-sorted whole.
    MedianWithCutoff,
    /// Dutch-flag three-way partition around the middle element.
    ThreeWay,
}

impl Strategy {
    /// Rearrange `a[low..=high]` in place and report how to continue.
    ///
    /// Callers never pass an empty or inverted range; nothing outside
    /// `[low, high]` is touched.
    pub fn partition(self, low: usize, high: usize, a: &mut [Cell]) -> Split {
        debug_assert!(low <= high && high < a.len());
        match self {
            Strategy::LomutoHigh => Split::Point {
                at: lomuto_high(low, high, a),
                skip: 1,
            },
            Strategy::HoareMiddle => Split::Point {
                at: hoare_middle(low, high, a),
                skip: 0,
            },
            Strategy::MedianOfThree => Split::Point {
                at: median_of_three(low, high, a),
                skip: 1,
            },
            Strategy::MedianWithCutoff => {
                if high - low + 1 < INSERTION_CUTOFF {
                    let run = &mut a[low..=high];
                    for i in 0..run.len() {
                        insertion_step(i, run);
                    }
                    Split::Sorted
                } else {
                    Split::Point {
                        at: median_of_three(low, high, a),
                        skip: 1,
                    }
                }
            }
            Strategy::ThreeWay => {
                let (lo, hi) = three_way(low, high, a);
                Split::Band { lo, hi }
            }
        }
    }
}

/// Lomuto's partition (see also Programming Pearls): single forward scan,
/// elements at most the pivot swapped to the front, pivot dropped at `i`.
fn lomuto_high(low: usize, high: usize, a: &mut [Cell]) -> usize {
    let pivot = a[high];
    let mut i = low;

    for j in low..high {
        if a[j] <= pivot {
            a.swap(i, j);
            i += 1;
        }
    }

    a.swap(i, high);
    i
}

/// Hoare's original partition around the middle element. The cursors are
/// signed because the right one may pass below `low` on its final
/// decrement.
fn hoare_middle(low: usize, high: usize, a: &mut [Cell]) -> usize {
    let pivot = a[(low + high) / 2];
    let mut l = low as isize;
    let mut h = high as isize;

    while l <= h {
        while a[l as usize] < pivot {
            l += 1;
        }

        while a[h as usize] > pivot {
            h -= 1;
        }

        if l <= h {
            a.swap(l as usize, h as usize);
            l += 1;
            h -= 1;
        }
    }

    l as usize
}

/// Lomuto with a median-of-three pivot: the three conditional swaps leave
/// the median of `a[low]`, `a[mid]`, `a[high]` at `high`, where the Lomuto
/// scan picks it up.
fn median_of_three(low: usize, high: usize, a: &mut [Cell]) -> usize {
    let mid = (low + high) / 2;

    if a[mid] < a[low] {
        a.swap(mid, low);
    }
    if a[low] < a[high] {
        a.swap(low, high);
    }
    if a[mid] < a[high] {
        a.swap(mid, high);
    }

    lomuto_high(low, high, a)
}

/// Dutch-flag three-way partition around the middle element. Returns the
/// bounds of the equal-to-pivot band.
fn three_way(low: usize, high: usize, a: &mut [Cell]) -> (usize, usize) {
    let pivot = a[(low + high) / 2];
    let mut lo = low;
    let mut hi = high;
    let mut j = low;

    while j <= hi {
        if a[j] < pivot {
            a.swap(j, lo);
            lo += 1;
            j += 1;
        } else if a[j] > pivot {
            // The pivot value is still somewhere in a[j..=hi], so a[j] can
            // only exceed it while hi > j >= lo >= 0; no underflow.
            a.swap(j, hi);
            hi -= 1;
        } else {
            j += 1;
        }
    }

    (lo, hi)
}

/// One insertion-sort step: sink `a[i]` into the sorted prefix `a[..i]` by
/// adjacent swaps. Elements beyond `i` are untouched.
pub fn insertion_step(i: usize, a: &mut [Cell]) {
    let mut j = i;
    while j > 0 && a[j] < a[j - 1] {
        a.swap(j, j - 1);
        j -= 1;
    }
}
