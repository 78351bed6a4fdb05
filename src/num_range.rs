use core::iter::FusedIterator;

use num_traits::{AsPrimitive, Float};
use thiserror::Error;

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Trait for types that can be used as the element type of a `NumRange`.
///
/// This trait is sealed and only implemented for `f32` and `f64`. The element
/// type determines the precision of the values the range produces; `f64` is
/// the default.
pub trait RangeNum: private::Sealed + Float + AsPrimitive<usize> + 'static
where
    isize: AsPrimitive<Self>,
{
}

impl RangeNum for f32 {}
impl RangeNum for f64 {}

/// Errors raised while constructing a [`NumRange`].
///
/// Both kinds are construction-time failures; every query on an already
/// constructed range is total and reports out-of-domain inputs as `None` or
/// `false` instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// No stop value was supplied before [`NumRangeBuilder::build`].
    #[error("stop value is required")]
    MissingStop,
    /// A step of zero was supplied; the counting loop would never terminate.
    #[error("step value cannot be zero")]
    InvalidStep,
}

/// An immutable arithmetic progression of numbers.
///
/// A `NumRange` describes the values a counting loop would visit (`start`,
/// `start + step`, `start + 2 * step`, and so on while the cursor stays on
/// the `start` side of `stop`) without materializing them. It answers four
/// questions about that sequence:
///
/// - [`len`](NumRange::len): how many values the loop visits
/// - [`at`](NumRange::at): the value at a position, negative positions
///   counting back from `stop`
/// - [`index_of`](NumRange::index_of): the position of a value
/// - [`contains`](NumRange::contains): whether a value is visited at all
///
/// plus a lazy, restartable traversal via [`iter`](NumRange::iter) or
/// `IntoIterator`.
///
/// # Type Parameters
/// - `T`: The element type (`f32` or `f64`). Defaults to `f64`.
///
/// # Construction
/// - [`NumRange::builder`]: all three fields optional except `stop`,
///   mirroring a configuration object; the only way to hit
///   [`RangeError::MissingStop`]
/// - [`NumRange::new`]: all three fields explicit
/// - [`NumRange::up_to`]: `stop` only, counting from 0 by 1, infallible
///
/// # Invariants
/// - All three fields are immutable for the lifetime of the instance.
/// - `step` is never zero, so every traversal is finite.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NumRange<T: RangeNum = f64>
where
    isize: AsPrimitive<T>,
{
    start: T,
    stop: T,
    step: T,
}

/// Builder for [`NumRange`].
///
/// `start` defaults to 0 and `step` to 1; `stop` has no default and must be
/// supplied before [`build`](NumRangeBuilder::build).
///
/// # Examples
/// ```
/// use num_range::NumRange;
///
/// let range = NumRange::builder().start(2.0).stop(11.0).step(4.0).build()?;
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![2.0, 6.0, 10.0]);
/// # Ok::<(), num_range::RangeError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NumRangeBuilder<T: RangeNum = f64>
where
    isize: AsPrimitive<T>,
{
    start: T,
    stop: Option<T>,
    step: T,
}

impl<T: RangeNum> NumRangeBuilder<T>
where
    isize: AsPrimitive<T>,
{
    /// Sets the start value. Defaults to 0.
    #[inline]
    pub fn start(mut self, start: T) -> Self {
        self.start = start;
        self
    }

    /// Sets the stop value. Required; the traversal never reaches it.
    #[inline]
    pub fn stop(mut self, stop: T) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the step value. Defaults to 1 and must be nonzero.
    #[inline]
    pub fn step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Validates the configuration and produces the range.
    ///
    /// # Errors
    /// - [`RangeError::MissingStop`] if [`stop`](NumRangeBuilder::stop) was
    ///   never called
    /// - [`RangeError::InvalidStep`] if the step is zero (`-0.0` included,
    ///   since it compares equal to zero)
    pub fn build(self) -> Result<NumRange<T>, RangeError> {
        let stop = self.stop.ok_or(RangeError::MissingStop)?;
        if self.step == T::zero() {
            return Err(RangeError::InvalidStep);
        }
        Ok(NumRange {
            start: self.start,
            stop,
            step: self.step,
        })
    }
}

impl<T: RangeNum> NumRange<T>
where
    isize: AsPrimitive<T>,
{
    /// Returns a builder with `start = 0`, `step = 1`, and no stop value.
    #[inline]
    pub fn builder() -> NumRangeBuilder<T> {
        NumRangeBuilder {
            start: T::zero(),
            stop: None,
            step: T::one(),
        }
    }

    /// Creates a range from explicit start, stop, and step values.
    ///
    /// Start and stop may be any real numbers, integral or fractional, in
    /// either order; no further validation is applied.
    ///
    /// # Errors
    /// [`RangeError::InvalidStep`] if `step` is zero.
    ///
    /// # Examples
    /// ```
    /// use num_range::NumRange;
    ///
    /// let range = NumRange::new(0.0, -10.0, -2.5)?;
    /// assert_eq!(range.len(), 4);
    /// # Ok::<(), num_range::RangeError>(())
    /// ```
    pub fn new(start: T, stop: T, step: T) -> Result<Self, RangeError> {
        if step == T::zero() {
            return Err(RangeError::InvalidStep);
        }
        Ok(Self { start, stop, step })
    }

    /// Creates a range counting from 0 towards `stop` by 1.
    ///
    /// Infallible: the defaulted start and step are always valid.
    ///
    /// # Examples
    /// ```
    /// use num_range::NumRange;
    ///
    /// let range = NumRange::up_to(4.0);
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn up_to(stop: T) -> Self {
        Self {
            start: T::zero(),
            stop,
            step: T::one(),
        }
    }

    /// Returns the start of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the stop of the range (exclusive).
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step of the range. Never zero.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values a forward traversal yields.
    ///
    /// Computed as `max(ceil((stop - start) / step), 0)` on every call. A
    /// partial final step still counts as one more element, and a stop on the
    /// wrong side of start for the step's sign gives 0.
    ///
    /// # Examples
    /// ```
    /// use num_range::NumRange;
    ///
    /// assert_eq!(NumRange::up_to(10.0).len(), 10);
    /// // 0, 3, 6, 9: the partial step to 10 rounds up
    /// assert_eq!(NumRange::new(0.0, 10.0, 3.0)?.len(), 4);
    /// // counting up, but stop is below start
    /// assert_eq!(NumRange::new(10.0, 0.0, 1.0)?.len(), 0);
    /// # Ok::<(), num_range::RangeError>(())
    /// ```
    pub fn len(&self) -> usize {
        let count = ((self.stop - self.start) / self.step).ceil();
        if count > T::zero() {
            count.as_()
        } else {
            0
        }
    }

    /// Returns `true` if a forward traversal yields nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a lazy iterator over the range's values.
    ///
    /// Every call starts a fresh traversal from `start`; iterators obtained
    /// from the same range are fully independent.
    #[inline]
    pub fn iter(&self) -> NumRangeIter<T> {
        NumRangeIter {
            current: self.start,
            stop: self.stop,
            step: self.step,
        }
    }

    /// Returns the value at the given position, or `None` when the position
    /// is out of range in either direction.
    ///
    /// Non-negative indices count forward from `start`; index `i` holds
    /// `start + step * i` for `i < len`. Negative indices count back from
    /// `stop`: index `-i` holds `stop - step * i` for `i <= len`. When
    /// `stop - start` is not an exact multiple of `step`, the two schemes are
    /// offset from each other by the partial final step.
    ///
    /// # Examples
    /// ```
    /// use num_range::NumRange;
    ///
    /// let range = NumRange::up_to(10.0);
    /// assert_eq!(range.at(0), Some(0.0));
    /// assert_eq!(range.at(-1), Some(9.0));
    /// assert_eq!(range.at(10), None);
    /// assert_eq!(range.at(-11), None);
    /// ```
    pub fn at(&self, index: isize) -> Option<T> {
        if index >= 0 {
            if index as usize >= self.len() {
                return None;
            }
            Some(self.start + self.step * index.as_())
        } else {
            if index.unsigned_abs() > self.len() {
                return None;
            }
            Some(self.stop + self.step * index.as_())
        }
    }

    /// Returns the position at which a forward traversal yields `value`, or
    /// `None` when it never does.
    ///
    /// A value qualifies only when it lands exactly on the step grid and
    /// falls inside the `[start, stop)` traversal window. NaN and infinite
    /// inputs are never found.
    ///
    /// # Examples
    /// ```
    /// use num_range::NumRange;
    ///
    /// let range = NumRange::new(0.0, 10.0, 3.0)?; // 0, 3, 6, 9
    /// assert_eq!(range.index_of(6.0), Some(2));
    /// assert_eq!(range.index_of(5.0), None); // off the grid
    /// assert_eq!(range.index_of(12.0), None); // on the grid, past stop
    /// # Ok::<(), num_range::RangeError>(())
    /// ```
    pub fn index_of(&self, value: T) -> Option<usize> {
        let candidate = (value - self.start) / self.step;
        if candidate < T::zero() || candidate.fract() != T::zero() {
            return None;
        }
        let index: usize = candidate.as_();
        (index < self.len()).then_some(index)
    }

    /// Returns `true` if a forward traversal yields `value`.
    ///
    /// Equivalent to `index_of(value).is_some()`, and implemented that way.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }
}

/// A lazy iterator over the values of a [`NumRange`].
///
/// Yields `start`, `start + step`, `start + 2 * step`, ... while the cursor
/// is below `stop` (positive step) or above it (negative step). The cursor
/// lives on the iterator, not on the range, so any number of traversals can
/// run concurrently.
#[derive(Clone, Debug)]
pub struct NumRangeIter<T> {
    current: T,
    stop: T,
    step: T,
}

impl<T: RangeNum> Iterator for NumRangeIter<T>
where
    isize: AsPrimitive<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let in_window = if self.step > T::zero() {
            self.current < self.stop
        } else {
            self.current > self.stop
        };
        if !in_window {
            return None;
        }
        let value = self.current;
        self.current = self.current + self.step;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = ((self.stop - self.current) / self.step).ceil();
        let remaining = if count > T::zero() { count.as_() } else { 0 };
        (remaining, Some(remaining))
    }
}

impl<T: RangeNum> FusedIterator for NumRangeIter<T> where isize: AsPrimitive<T> {}

impl<T: RangeNum> IntoIterator for NumRange<T>
where
    isize: AsPrimitive<T>,
{
    type Item = T;
    type IntoIter = NumRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: RangeNum> IntoIterator for &NumRange<T>
where
    isize: AsPrimitive<T>,
{
    type Item = T;
    type IntoIter = NumRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
