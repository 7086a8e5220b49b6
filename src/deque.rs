//! A growable double-ended queue implemented with a ring buffer.
//!
//! This queue has amortized O(1) inserts and removals at both ends of the
//! sequence, and O(1) indexing like a vector.
//!
//! The backing storage always holds a power of two number of slots, so
//! wrapping an index is a single mask instead of a division. One slot is always
//! kept free: the deque grows *before* the insertion that would fill it, which
//! keeps `head == tail` reserved for the empty state. Removals halve the
//! storage again once the deque is no more than a quarter full.

use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut, Range};
use core::slice;

use crate::config::{capacity_overflow, round_capacity, DequeConfig};
use crate::error::{PushError, ReserveError};
use crate::index::{resolve, resolve_insertion, DequeIndex};

/// A double-ended queue implemented with a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use
/// [`push_back`](Deque::push_back) to add to the queue, and
/// [`pop_front`](Deque::pop_front) to remove from it.
///
/// Since `Deque` is a ring buffer, its elements are not necessarily contiguous
/// in memory. [`as_slices`](Deque::as_slices) exposes them as two slices, and
/// [`to_vec`](Deque::to_vec) copies them out in order.
///
/// # Examples
/// ```
/// use ringque::Deque;
///
/// let mut deque = Deque::from([1, 2, 3, 4]);
/// deque.push_front(0);
/// deque.push_back(5);
/// assert_eq!(deque.get(-1), Some(&5));
/// assert_eq!(deque.pop_front(), Some(0));
/// assert_eq!(deque.to_vec(), [1, 2, 3, 4, 5]);
/// ```
pub struct Deque<T> {
    buf: Box<[MaybeUninit<T>]>,
    mask: usize,
    head: usize,
    tail: usize,
    floor: usize,
    shrink: bool,
}

fn allocate<T>(capacity: usize) -> Result<Box<[MaybeUninit<T>]>, ReserveError> {
    debug_assert!(capacity.is_power_of_two());
    let layout = Layout::array::<T>(capacity).map_err(|_| ReserveError::CapacityOverflow)?;

    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| ReserveError::AllocFailed { layout })?;
    storage.resize_with(capacity, MaybeUninit::uninit);
    Ok(storage.into_boxed_slice())
}

fn allocate_or_abort<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    match allocate(capacity) {
        Ok(storage) => storage,
        Err(ReserveError::CapacityOverflow) => capacity_overflow(),
        Err(ReserveError::AllocFailed { layout }) => handle_alloc_error(layout),
    }
}

#[inline(always)]
unsafe fn slice_assume_init_ref<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    &*(slice as *const [MaybeUninit<T>] as *const [T])
}

#[inline(always)]
unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slice as *mut [MaybeUninit<T>] as *mut [T])
}

impl<T> Deque<T> {
    /// Creates an empty `Deque` with the default capacity.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::<i32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty `Deque` with room for at least `capacity` elements
    /// before it has to grow.
    ///
    /// # Panics
    /// Panics if the required capacity overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::<i32>::with_capacity(10);
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let config = DequeConfig::default();
        Self::with_storage(config.capacity_for(capacity), &config)
    }

    /// Creates an empty `Deque` with the given configuration.
    pub fn with_config(config: DequeConfig) -> Self {
        Self::with_storage(config.capacity_for(0), &config)
    }

    pub(crate) fn from_iter_with_config<I: IntoIterator<Item = T>>(items: I, config: DequeConfig) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let len = items.len();

        let mut deque = Self::with_storage(config.capacity_for(len), &config);
        for (slot, item) in deque.buf.iter_mut().zip(items) {
            slot.write(item);
        }
        deque.tail = len;
        deque.debug_check_invariants();
        deque
    }

    fn with_storage(capacity: usize, config: &DequeConfig) -> Self {
        Deque {
            buf: allocate_or_abort(capacity),
            mask: capacity - 1,
            head: 0,
            tail: 0,
            floor: config.floor(),
            shrink: config.shrink,
        }
    }

    /// Returns the number of slots in the backing storage.
    ///
    /// This is always a power of two, and always strictly greater than
    /// [`len`](Deque::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if the `Deque` contains an element equal to the given value.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::from([0, 1]);
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    #[inline(always)]
    fn wrap(&self, index: usize) -> usize {
        index & self.mask
    }

    #[inline(always)]
    fn physical_index(&self, offset: usize) -> usize {
        self.wrap(self.head.wrapping_add(offset))
    }

    /// Physical index of the element at logical `offset`.
    ///
    /// # Panics
    /// Panics if `offset` does not name an element.
    #[inline(always)]
    fn occupied_slot(&self, offset: usize) -> usize {
        assert!(offset < self.len(), "out of bounds access");
        self.physical_index(offset)
    }

    /// The occupied slots, in logical order. The second range is empty unless
    /// the elements wrap around the end of the storage.
    #[inline]
    fn slot_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.head <= self.tail {
            (self.head..self.tail, 0..0)
        } else {
            (self.head..self.capacity(), 0..self.tail)
        }
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert!(self.capacity().is_power_of_two());
        debug_assert_eq!(self.mask, self.capacity() - 1);
        debug_assert!(self.head < self.capacity() && self.tail < self.capacity());
        debug_assert!(self.len() < self.capacity());
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index does not name an element.
    ///
    /// The element at index 0 is the front of the queue. Negative indices
    /// count from the back, so `-1` is the last element. Floating point
    /// indices are accepted if they hold an exact integer.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.get(0), Some(&1));
    /// assert_eq!(deque.get(-4), Some(&1));
    /// assert_eq!(deque.get(4), None);
    /// assert_eq!(deque.get(1.5), None);
    /// ```
    #[inline]
    pub fn get<I: DequeIndex>(&self, index: I) -> Option<&T> {
        let offset = resolve(index, self.len())?;
        let slot = &self.buf[self.occupied_slot(offset)];
        unsafe { Some(slot.assume_init_ref()) }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index does not name an element.
    ///
    /// Indices are resolved like in [`get`](Deque::get).
    #[inline]
    pub fn get_mut<I: DequeIndex>(&mut self, index: I) -> Option<&mut T> {
        let offset = resolve(index, self.len())?;
        let physical = self.occupied_slot(offset);
        unsafe { Some(self.buf[physical].assume_init_mut()) }
    }

    /// Returns a reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.get(0usize)
    }

    /// Returns a reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.get(-1isize)
    }

    /// Same as [`peek_front`](Deque::peek_front).
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.peek_front()
    }

    /// Same as [`peek_back`](Deque::peek_back).
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.peek_back()
    }

    /// Returns a mutable reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0usize)
    }

    /// Returns a mutable reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(-1isize)
    }

    /// Doubles the capacity if one more element would fill the storage.
    #[inline]
    fn reserve_one(&mut self) {
        if self.len() + 1 == self.capacity() {
            self.grow();
        }
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let capacity = self
            .capacity()
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        self.relocate(allocate_or_abort(capacity));
    }

    /// Moves every element into `storage`, starting at physical index 0, and
    /// makes it the backing storage.
    fn relocate(&mut self, mut storage: Box<[MaybeUninit<T>]>) {
        let len = self.len();
        debug_assert!(storage.len().is_power_of_two());
        debug_assert!(len < storage.len());

        let (front, back) = self.slot_ranges();
        let split = front.len();
        storage[..split].swap_with_slice(&mut self.buf[front]);
        storage[split..len].swap_with_slice(&mut self.buf[back]);

        self.buf = storage;
        self.mask = self.buf.len() - 1;
        self.head = 0;
        self.tail = len;
        self.debug_check_invariants();
    }

    /// The capacity this deque would shrink to after a removal.
    fn shrink_target(&self) -> usize {
        let len = self.len();
        let mut capacity = self.capacity();
        while len <= capacity / 4 && capacity / 2 >= self.floor {
            capacity /= 2;
        }

        capacity
    }

    fn shrink_if_sparse(&mut self) {
        if !self.shrink {
            return;
        }

        let target = self.shrink_target();
        if target < self.capacity() {
            // shrinking is an optimization; keep the current storage if the
            // allocator refuses
            if let Ok(storage) = allocate(target) {
                self.relocate(storage);
            }
        }
    }

    /// Tries to reserve capacity for at least `additional` more elements
    /// before the deque has to grow again.
    ///
    /// The capacity stays a power of two, so more space may be reserved.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::<u8>::new();
    /// deque.try_reserve(100).unwrap();
    /// assert_eq!(deque.capacity(), 128);
    ///
    /// assert!(deque.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        let required = self
            .len()
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(ReserveError::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }

        let capacity = required
            .checked_next_power_of_two()
            .ok_or(ReserveError::CapacityOverflow)?;
        self.relocate(allocate(capacity)?);
        Ok(())
    }

    /// Shrinks the capacity as far as the configured minimum allows, keeping
    /// one slot free.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::<u8>::with_capacity(100);
    /// deque.push_back_all([1, 2, 3]);
    /// deque.shrink_to_fit();
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let target = round_capacity((self.len() + 1).max(self.floor));
        if target < self.capacity() {
            self.relocate(allocate_or_abort(target));
        }
    }

    #[inline]
    fn write_back(&mut self, value: T) -> usize {
        debug_assert!(self.len() + 1 < self.capacity());
        let tail = self.tail;
        self.buf[tail].write(value);
        self.tail = self.wrap(tail + 1);
        self.len()
    }

    #[inline]
    fn write_front(&mut self, value: T) -> usize {
        debug_assert!(self.len() + 1 < self.capacity());
        let head = self.wrap(self.head.wrapping_sub(1));
        self.buf[head].write(value);
        self.head = head;
        self.len()
    }

    /// Appends an element to the back of the `Deque`, returning the new length.
    ///
    /// # Panics
    /// Panics if the capacity overflows `usize`, and aborts if the allocator
    /// fails. See [`try_push_back`](Deque::try_push_back) for a checked
    /// variant.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1, 2, 3]);
    /// assert_eq!(deque.capacity(), 4);
    /// assert_eq!(deque.push_back(4), 4);
    /// assert_eq!(deque.capacity(), 8);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) -> usize {
        self.reserve_one();
        self.write_back(value)
    }

    /// Prepends an element to the front of the `Deque`, returning the new length.
    ///
    /// # Panics
    /// Panics if the capacity overflows `usize`, and aborts if the allocator
    /// fails. See [`try_push_front`](Deque::try_push_front) for a checked
    /// variant.
    #[inline]
    pub fn push_front(&mut self, value: T) -> usize {
        self.reserve_one();
        self.write_front(value)
    }

    /// Appends an element to the back of the `Deque`, handing it back with the
    /// reason if the deque could not grow.
    pub fn try_push_back(&mut self, value: T) -> Result<usize, PushError<T>> {
        if let Err(source) = self.try_reserve(1) {
            return Err(PushError { value, source });
        }

        Ok(self.write_back(value))
    }

    /// Prepends an element to the front of the `Deque`, handing it back with
    /// the reason if the deque could not grow.
    pub fn try_push_front(&mut self, value: T) -> Result<usize, PushError<T>> {
        if let Err(source) = self.try_reserve(1) {
            return Err(PushError { value, source });
        }

        Ok(self.write_front(value))
    }

    /// Appends every item to the back of the `Deque` in order, returning the
    /// new length.
    ///
    /// With no items this does nothing and returns the current length.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1]);
    /// assert_eq!(deque.push_back_all([2, 3]), 3);
    /// assert_eq!(deque.push_back_all([]), 3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        for item in items {
            self.push_back(item);
        }

        self.len()
    }

    /// Prepends every item to the front of the `Deque`, returning the new
    /// length.
    ///
    /// The items keep their order: the first item becomes the new front.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([4, 5]);
    /// assert_eq!(deque.push_front_all([1, 2, 3]), 5);
    /// assert_eq!(deque, [1, 2, 3, 4, 5]);
    /// ```
    pub fn push_front_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for item in items.into_iter().rev() {
            self.push_front(item);
        }

        self.len()
    }

    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let head = self.head;
        self.head = self.wrap(head + 1);
        // `head` held the front element and is now outside the logical range
        unsafe { Some(self.buf[head].assume_init_read()) }
    }

    fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.tail = self.wrap(self.tail.wrapping_sub(1));
        unsafe { Some(self.buf[self.tail].assume_init_read()) }
    }

    /// Removes the first element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.take_front()?;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the last element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.take_back()?;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Clears the `Deque`, dropping all values. The capacity is unchanged.
    pub fn clear(&mut self) {
        /// Drops the wrapped-around part even if a destructor in the first
        /// part panics.
        struct Dropper<'a, T>(&'a mut [T]);
        impl<T> Drop for Dropper<'_, T> {
            fn drop(&mut self) {
                unsafe { core::ptr::drop_in_place(self.0) };
            }
        }

        let (front, back) = self.slot_ranges();
        // reset first, so a panicking destructor leaks instead of double dropping
        self.head = 0;
        self.tail = 0;

        let (low, high) = self.buf.split_at_mut(front.start);
        unsafe {
            let _back = Dropper(slice_assume_init_mut(&mut low[back]));
            core::ptr::drop_in_place(slice_assume_init_mut(&mut high[..front.len()]));
        }
    }

    /// Closes a gap of `count` vacated slots starting at logical `offset`,
    /// shifting whichever side of the gap holds fewer elements.
    fn close_gap(&mut self, offset: usize, count: usize) {
        if count == 0 {
            return;
        }

        let len = self.len();
        debug_assert!(offset + count <= len);
        let after = len - offset - count;

        if offset < after {
            for i in (0..offset).rev() {
                let (src, dst) = (self.physical_index(i), self.physical_index(i + count));
                self.buf.swap(src, dst);
            }
            self.head = self.physical_index(count);
        } else {
            for i in offset + count..len {
                let (src, dst) = (self.physical_index(i), self.physical_index(i - count));
                self.buf.swap(src, dst);
            }
            self.tail = self.wrap(self.tail.wrapping_sub(count));
        }
    }

    /// Moves `count` elements starting at logical `offset` out of the deque,
    /// leaving their slots vacated.
    fn take_range(&mut self, offset: usize, count: usize) -> Vec<T> {
        assert!(
            offset.checked_add(count).map_or(false, |end| end <= self.len()),
            "out of bounds access"
        );

        let mut taken = Vec::with_capacity(count);
        for i in offset..offset + count {
            let physical = self.physical_index(i);
            taken.push(unsafe { self.buf[physical].assume_init_read() });
        }

        self.close_gap(offset, count);
        taken
    }

    /// Removes and returns the element at `index`, or [`None`] if `index`
    /// does not name an element.
    ///
    /// Whichever end is closer to the removal point is moved to fill the gap.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.remove_one(1), Some(2));
    /// assert_eq!(deque.remove_one(-1), Some(4));
    /// assert_eq!(deque.remove_one(7), None);
    /// assert_eq!(deque, [1, 3]);
    /// ```
    pub fn remove_one<I: DequeIndex>(&mut self, index: I) -> Option<T> {
        let offset = resolve(index, self.len())?;
        let value = self.take_range(offset, 1).pop();
        self.shrink_if_sparse();
        value
    }

    /// Removes `count` elements starting at `index` and returns them in order.
    ///
    /// `count` is clamped to the number of elements from `index` to the back.
    /// Returns [`None`] if `index` does not name an element or `count` is zero.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1, 2, 3, 4, 5]);
    /// assert_eq!(deque.remove(1, 2), Some(vec![2, 3]));
    /// assert_eq!(deque.remove(-2, 10), Some(vec![4, 5]));
    /// assert_eq!(deque.remove(0, 0), None);
    /// assert_eq!(deque, [1]);
    /// ```
    pub fn remove<I: DequeIndex>(&mut self, index: I, count: usize) -> Option<Vec<T>> {
        let len = self.len();
        let offset = resolve(index, len)?;
        if count == 0 {
            return None;
        }

        let removed = self.take_range(offset, count.min(len - offset));
        self.shrink_if_sparse();
        Some(removed)
    }

    /// Removes `count` elements starting at `index`, inserts `items` in their
    /// place, and returns the removed elements.
    ///
    /// `index` may be one past the last element, in which case nothing is
    /// removed and the items are appended. Returns [`None`], leaving the deque
    /// untouched, if `index` is out of range.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.splice(1, 2, [9]), Some(vec![2, 3]));
    /// assert_eq!(deque, [1, 9, 4]);
    ///
    /// assert_eq!(deque.splice(3, 0, [5, 6]), Some(vec![]));
    /// assert_eq!(deque, [1, 9, 4, 5, 6]);
    /// assert_eq!(deque.splice(9, 0, [7]), None);
    /// ```
    pub fn splice<I, It>(&mut self, index: I, count: usize, items: It) -> Option<Vec<T>>
    where
        I: DequeIndex,
        It: IntoIterator<Item = T>,
    {
        let len = self.len();
        let offset = resolve_insertion(index, len)?;
        assert!(offset <= len, "out of bounds access");
        let items: Vec<T> = items.into_iter().collect();

        let removed = self.take_range(offset, count.min(len - offset));

        // set aside the shorter side of the insertion point, then rebuild
        let len = self.len();
        if offset < len - offset {
            let before: Vec<T> = (0..offset).filter_map(|_| self.take_front()).collect();
            self.push_front_all(items);
            self.push_front_all(before);
        } else {
            let mut after: Vec<T> = (offset..len).filter_map(|_| self.take_back()).collect();
            after.reverse();
            self.push_back_all(items);
            self.push_back_all(after);
        }

        self.shrink_if_sparse();
        Some(removed)
    }

    /// Returns a pair of slices which contain, in order, the contents of the `Deque`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::new();
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.slot_ranges();
        unsafe {
            (
                slice_assume_init_ref(&self.buf[front]),
                slice_assume_init_ref(&self.buf[back]),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `Deque`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.slot_ranges();
        let (low, high) = self.buf.split_at_mut(front.start);
        unsafe {
            (
                slice_assume_init_mut(&mut high[..front.len()]),
                slice_assume_init_mut(&mut low[back]),
            )
        }
    }

    /// Copies the elements into a new `Vec`, front to back.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let (front, back) = self.as_slices();
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(front);
        result.extend_from_slice(back);
        result
    }

    /// Moves the elements into a new `Vec`, front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let deque = ringque::Deque::from([5, 3, 4]);
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next_back(), Some(&4));
    /// assert_eq!(it.len(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([5, 3, 4]);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Removes every element, yielding them front to back.
    ///
    /// Elements the iterator does not get to are dropped when it is, and the
    /// storage shrinks as if they had been popped.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringque::Deque::from([1, 2, 3]);
    /// let drained: Vec<i32> = deque.drain().collect();
    /// assert_eq!(drained, [1, 2, 3]);
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { parent: self }
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut result = Self::with_storage(self.capacity(), &DequeConfig::default());
        result.floor = self.floor;
        result.shrink = self.shrink;
        result.extend(self.iter().cloned());
        result
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).expect("out of bounds access")
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("out of bounds access")
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<A: PartialEq<B>, B> PartialEq<Deque<B>> for Deque<A> {
    fn eq(&self, other: &Deque<B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for Deque<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }

        let (front, back) = self.as_slices();
        let mid = front.len();
        front == &other[..mid] && back == &other[mid..]
    }
}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.push_back_all(iter);
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for Deque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        self.push_back_all(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_iter_with_config(iter, DequeConfig::default())
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    /// Builds a deque holding the elements of `vec` in order, with at least
    /// one free slot.
    fn from(vec: Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    fn from(deque: Deque<T>) -> Self {
        deque.into_vec()
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](Deque::iter) method on [`Deque`].
/// See its documentation for more.
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](Deque::iter_mut) method on
/// [`Deque`]. See its documentation for more.
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the [`into_iter`](Deque::into_iter) method on
/// [`Deque`] (provided by the `IntoIterator` trait). See its documentation for
/// more.
pub struct IntoIter<T> {
    inner: Deque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Converts the `Deque` into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// A draining iterator over the elements of a deque.
///
/// This `struct` is created by the [`drain`](Deque::drain) method on [`Deque`].
/// See its documentation for more.
pub struct Drain<'p, T> {
    parent: &'p mut Deque<T>,
}

impl<T: Debug> Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.parent).finish()
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.parent.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.parent.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.parent.take_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.parent.clear();
        self.parent.shrink_if_sparse();
    }
}
