//! Conversion of caller-supplied positions into logical deque offsets.
//!
//! Lookups such as [`Deque::get`](crate::Deque::get) accept any type
//! implementing [`DequeIndex`]. Unsigned integers address elements from the
//! front, negative signed integers count from the back (`-1` is the last
//! element), and floating point values are accepted only when they hold an
//! exact integer. Anything that does not name an element resolves to [`None`]
//! instead of panicking.

/// Where a [`DequeIndex`] points, before the length of the deque is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Offset from the first element; `FromFront(0)` is the front.
    FromFront(usize),
    /// Distance from the end; `FromBack(1)` is the last element and
    /// `FromBack(0)` names nothing.
    FromBack(usize),
}

impl Position {
    /// Returns the logical offset of the element this position names in a
    /// deque of `len` elements, or [`None`] if there is no such element.
    ///
    /// A returned offset is always less than `len`.
    ///
    /// # Examples
    /// ```
    /// use ringque::Position;
    ///
    /// assert_eq!(Position::FromFront(3).resolve(4), Some(3));
    /// assert_eq!(Position::FromBack(1).resolve(4), Some(3));
    /// assert_eq!(Position::FromBack(0).resolve(4), None);
    /// assert_eq!(Position::FromBack(5).resolve(4), None);
    /// ```
    #[inline]
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            Position::FromFront(i) if i < len => Some(i),
            Position::FromBack(n) if n > 0 => len.checked_sub(n),
            _ => None,
        }
    }

    /// Like [`resolve`](Position::resolve), but also accepts the position
    /// just past the last element, as used for insertion.
    ///
    /// A returned offset is always at most `len`.
    #[inline]
    pub fn resolve_insertion(self, len: usize) -> Option<usize> {
        match self {
            Position::FromFront(i) if i <= len => Some(i),
            Position::FromBack(n) if n > 0 => len.checked_sub(n),
            _ => None,
        }
    }
}

/// A value that can name an element of a deque.
///
/// Implementors only describe which end they count from; range checks
/// against the actual length are done by [`Position`] and cannot be
/// replaced.
///
/// # Examples
/// ```
/// use ringque::{DequeIndex, Position};
///
/// assert_eq!(3usize.position(), Some(Position::FromFront(3)));
/// assert_eq!((-1i32).position(), Some(Position::FromBack(1)));
/// assert_eq!(2.0f64.position(), Some(Position::FromFront(2)));
/// assert_eq!(1.5f64.position(), None);
/// assert_eq!(None::<usize>.position(), None);
/// ```
pub trait DequeIndex: Copy {
    /// Returns the position `self` refers to, or [`None`] if it refers to no
    /// position at all (a fractional float, NaN, an absent value...).
    fn position(self) -> Option<Position>;
}

/// Resolves `index` against a deque of `len` elements.
#[inline]
pub(crate) fn resolve<I: DequeIndex>(index: I, len: usize) -> Option<usize> {
    index.position()?.resolve(len)
}

/// Resolves `index` as an insertion point in a deque of `len` elements.
#[inline]
pub(crate) fn resolve_insertion<I: DequeIndex>(index: I, len: usize) -> Option<usize> {
    index.position()?.resolve_insertion(len)
}

macro_rules! unsigned_index {
    ($($t:ty),*) => {$(
        impl DequeIndex for $t {
            #[inline]
            fn position(self) -> Option<Position> {
                usize::try_from(self).ok().map(Position::FromFront)
            }
        }
    )*}
}

macro_rules! signed_index {
    ($($t:ty),*) => {$(
        impl DequeIndex for $t {
            #[inline]
            fn position(self) -> Option<Position> {
                let magnitude = usize::try_from(self.unsigned_abs()).ok()?;
                if self < 0 {
                    Some(Position::FromBack(magnitude))
                } else {
                    Some(Position::FromFront(magnitude))
                }
            }
        }
    )*}
}

macro_rules! float_index {
    ($($t:ty),*) => {$(
        impl DequeIndex for $t {
            #[inline]
            fn position(self) -> Option<Position> {
                if self.is_nan() || self.is_infinite() {
                    return None;
                }

                // saturates outside the i128 range, which the round trip rejects
                let whole = self as i128;
                if whole as $t != self {
                    return None;
                }

                whole.position()
            }
        }
    )*}
}

unsigned_index!(u8, u16, u32, u64, u128, usize);
signed_index!(i8, i16, i32, i64, i128, isize);
float_index!(f32, f64);

impl<I: DequeIndex> DequeIndex for Option<I> {
    #[inline]
    fn position(self) -> Option<Position> {
        self?.position()
    }
}

impl<I: DequeIndex> DequeIndex for &I {
    #[inline]
    fn position(self) -> Option<Position> {
        (*self).position()
    }
}
