use crate::palette::Cell;
use crate::partition::{Split, Strategy, insertion_step};

/// Result of one stepper invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step performed one frame's worth of work. `settled` is the
    /// column up to which rows rendered below the current one may be shown
    /// frozen at their own snapshot.
    Advanced { settled: usize },
    /// No work remains; the array will never be mutated again for this run.
    Done,
}

/// A resumable sort advanced one discrete step per call.
///
/// Step `i` corresponds to frame `i`; step 0 must leave the array untouched
/// so the first rendered frame shows the raw input. Once `Done` is
/// reported, every later call reports `Done` as well.
pub trait Stepper {
    fn step(&mut self, i: usize, array: &mut [Cell]) -> StepOutcome;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Iterative quicksort driven one partition per step.
///
/// The usual recursion is replaced by an explicit stack of inclusive index
/// pairs; each step pops one pending range, partitions it with the chosen
/// strategy and pushes back whichever children still hold unsorted work.
#[derive(Clone, Debug)]
pub struct QuickSort {
    strategy: Strategy,
    stack: Vec<(usize, usize)>,
    phase: Phase,
}

impl QuickSort {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            stack: Vec::new(),
            phase: Phase::Fresh,
        }
    }

    /// A child range goes on the stack only when it holds at least two
    /// elements; empty, inverted and single-element ranges have nothing
    /// left to sort. The comparisons are arranged so the index arithmetic
    /// never underflows.
    fn push_children(&mut self, low: usize, high: usize, split: Split) {
        match split {
            Split::Point { at, skip } => {
                if at > low + 1 {
                    self.stack.push((low, at - 1));
                }
                if at + skip < high {
                    self.stack.push((at + skip, high));
                }
            }
            Split::Band { lo, hi } => {
                if lo > low + 1 {
                    self.stack.push((low, lo - 1));
                }
                if hi + 1 < high {
                    self.stack.push((hi + 1, high));
                }
            }
            Split::Sorted => {}
        }
    }
}

impl Stepper for QuickSort {
    fn step(&mut self, _i: usize, array: &mut [Cell]) -> StepOutcome {
        match self.phase {
            Phase::Fresh => {
                // Seed the stack without touching the array so the first
                // frame is always the untouched input. A one-element array
                // has no pending work at all.
                self.stack.clear();
                if array.len() > 1 {
                    self.stack.push((0, array.len() - 1));
                }
                self.phase = Phase::Running;
                StepOutcome::Advanced {
                    settled: array.len(),
                }
            }
            Phase::Running => match self.stack.pop() {
                Some((low, high)) => {
                    let split = self.strategy.partition(low, high, array);
                    self.push_children(low, high, split);
                    StepOutcome::Advanced {
                        settled: array.len(),
                    }
                }
                None => {
                    self.phase = Phase::Done;
                    StepOutcome::Done
                }
            },
            Phase::Done => StepOutcome::Done,
        }
    }
}

/// Plain insertion sort, one array position per step. No stack: step `i`
/// sinks `array[i]` into the already-sorted prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl Stepper for InsertionSort {
    fn step(&mut self, i: usize, array: &mut [Cell]) -> StepOutcome {
        if i >= array.len() {
            return StepOutcome::Done;
        }
        insertion_step(i, array);
        StepOutcome::Advanced { settled: i }
    }
}

/// Algorithm selection at the collaborator boundary. The core only ever
/// sees the resulting [`Stepper`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Insertion,
    #[default]
    Lomuto,
    Hoare,
    Median,
    MedianInsertion,
    ThreeWay,
}

impl Algorithm {
    pub fn stepper(self) -> Box<dyn Stepper> {
        match self {
            Algorithm::Insertion => Box::new(InsertionSort),
            Algorithm::Lomuto => Box::new(QuickSort::new(Strategy::LomutoHigh)),
            Algorithm::Hoare => Box::new(QuickSort::new(Strategy::HoareMiddle)),
            Algorithm::Median => Box::new(QuickSort::new(Strategy::MedianOfThree)),
            Algorithm::MedianInsertion => Box::new(QuickSort::new(Strategy::MedianWithCutoff)),
            Algorithm::ThreeWay => Box::new(QuickSort::new(Strategy::ThreeWay)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[u8]) -> Vec<Cell> {
        values.iter().copied().map(Cell).collect()
    }

    /// Drive a stepper to completion, bounded by the array length the way
    /// the animation loop is. Returns the number of productive steps.
    fn drive(stepper: &mut dyn Stepper, array: &mut [Cell]) -> usize {
        let mut productive = 0;
        for i in 0..array.len() {
            match stepper.step(i, array) {
                StepOutcome::Advanced { .. } => productive += 1,
                StepOutcome::Done => break,
            }
        }
        productive
    }

    #[test]
    fn step_zero_never_mutates() {
        let input = cells(&[9, 3, 7, 1]);
        for algorithm in [Algorithm::Lomuto, Algorithm::ThreeWay, Algorithm::Insertion] {
            let mut a = input.clone();
            let mut stepper = algorithm.stepper();
            let outcome = stepper.step(0, &mut a);
            assert_ne!(outcome, StepOutcome::Done);
            assert_eq!(a, input, "{algorithm:?} mutated the array on step 0");
        }
    }

    #[test]
    fn lomuto_three_one_two_scenario() {
        let mut a = cells(&[3, 1, 2]);
        let mut q = QuickSort::new(Strategy::LomutoHigh);

        assert_eq!(q.step(0, &mut a), StepOutcome::Advanced { settled: 3 });
        assert_eq!(a, cells(&[3, 1, 2]));

        // Step 1 partitions on pivot a[2] == 2.
        assert_eq!(q.step(1, &mut a), StepOutcome::Advanced { settled: 3 });

        let mut productive = 1;
        for i in 2..16 {
            match q.step(i, &mut a) {
                StepOutcome::Advanced { .. } => productive += 1,
                StepOutcome::Done => break,
            }
        }
        assert_eq!(a, cells(&[1, 2, 3]));
        assert!(productive <= 3);
    }

    #[test]
    fn length_one_terminates_right_after_the_initial_frame() {
        let mut a = cells(&[5]);
        let mut q = QuickSort::new(Strategy::LomutoHigh);
        assert_eq!(q.step(0, &mut a), StepOutcome::Advanced { settled: 1 });
        assert_eq!(q.step(1, &mut a), StepOutcome::Done);
        assert_eq!(a, cells(&[5]));
    }

    #[test]
    fn done_is_sticky_and_stops_mutating() {
        let mut a = cells(&[4, 2, 3, 1]);
        let mut q = QuickSort::new(Strategy::MedianOfThree);
        let mut i = 0;
        while q.step(i, &mut a) != StepOutcome::Done {
            i += 1;
            assert!(i < 64, "engine failed to terminate");
        }
        let settled = a.clone();
        for j in 0..8 {
            assert_eq!(q.step(i + j, &mut a), StepOutcome::Done);
        }
        assert_eq!(a, settled);
    }

    #[test]
    fn insertion_prefix_is_sorted_after_each_step() {
        let input = cells(&[8, 3, 9, 1, 7, 2]);
        let mut a = input.clone();
        let mut s = InsertionSort;
        for i in 0..a.len() {
            assert_eq!(s.step(i, &mut a), StepOutcome::Advanced { settled: i });
            assert!(a[..=i].windows(2).all(|w| w[0] <= w[1]));
            // The suffix has not been touched yet.
            assert_eq!(a[i + 1..], input[i + 1..]);
        }
        assert_eq!(s.step(a.len(), &mut a), StepOutcome::Done);
    }

    #[test]
    fn every_algorithm_sorts_a_fixed_worst_case() {
        let input = cells(&[15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        for algorithm in [
            Algorithm::Insertion,
            Algorithm::Lomuto,
            Algorithm::Hoare,
            Algorithm::Median,
            Algorithm::MedianInsertion,
            Algorithm::ThreeWay,
        ] {
            let mut a = input.clone();
            let mut stepper = algorithm.stepper();
            drive(stepper.as_mut(), &mut a);
            assert!(
                a.windows(2).all(|w| w[0] <= w[1]),
                "{algorithm:?} left the array unsorted: {a:?}"
            );
        }
    }
}
