//! Index selection for the decorative "random trace" output.
//!
//! Production code draws from `rand`; tests inject a [`FixedPicker`] so the
//! rendered output is reproducible.

use rand::Rng;

/// Chooses one index out of a candidate sequence
pub trait Picker {
    /// Return an index in `0..len`, or `None` when `len` is zero
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniform selection backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| rand::rng().random_range(0..len))
    }
}

/// Always picks the same position, wrapped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0 % len)
    }
}

/// Pick one element of `items` with `picker`
pub fn choose<'a, T>(items: &'a [T], picker: &mut dyn Picker) -> Option<&'a T> {
    picker.pick(items.len()).and_then(|idx| items.get(idx))
}
