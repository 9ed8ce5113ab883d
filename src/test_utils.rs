use core::cell::Cell;

pub const RNG_SEED: u64 = 0x5432_1012_3454_3210;

pub struct DropCounter {
    count: Cell<usize>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            count: Cell::new(0),
        }
    }

    pub fn new_droppable<T>(&self, value: T) -> Droppable<'_, T> {
        Droppable {
            value,
            counter: self,
        }
    }

    pub fn dropped(&self) -> usize {
        self.count.get()
    }
}

#[derive(Debug)]
pub struct Droppable<'a, T> {
    pub value: T,
    counter: &'a DropCounter,
}

impl<T: Clone> Clone for Droppable<'_, T> {
    fn clone(&self) -> Self {
        self.counter.new_droppable(self.value.clone())
    }
}

impl<T: PartialEq> PartialEq for Droppable<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Droppable<'_, T> {
    fn drop(&mut self) {
        self.counter.count.set(self.counter.count.get() + 1);
    }
}

impl core::fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DropCounter({})", self.count.get())
    }
}
