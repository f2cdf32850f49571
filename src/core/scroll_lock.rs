use std::cell::RefCell;
use std::rc::Rc;

// Reference-counted page scroll lock.
//
// Every component that needs the page frozen (project modal, mobile menu)
// holds its own `ScrollLockGuard`. The page stays locked while at least one
// guard is alive, so overlapping holders can release in any order.

struct LockInner {
    holders: usize,
    apply: Box<dyn Fn(bool)>,
}

#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<RefCell<LockInner>>,
}

impl ScrollLock {
    /// `apply(true)` is invoked when the first holder arrives and
    /// `apply(false)` when the last one leaves.
    pub fn new(apply: impl Fn(bool) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LockInner {
                holders: 0,
                apply: Box::new(apply),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut inner = self.inner.borrow_mut();
        inner.holders += 1;
        if inner.holders == 1 {
            (inner.apply)(true);
        }
        ScrollLockGuard {
            inner: self.inner.clone(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.borrow().holders > 0
    }

    pub fn holders(&self) -> usize {
        self.inner.borrow().holders
    }
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    inner: Rc<RefCell<LockInner>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.holders = inner.holders.saturating_sub(1);
        if inner.holders == 0 {
            (inner.apply)(false);
        }
    }
}
