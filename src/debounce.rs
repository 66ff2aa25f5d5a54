use std::cell::Cell;
use std::rc::Rc;

use crate::scheduler::{Scheduler, TaskId};

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    callback: Box<dyn Fn(A)>,
    pending: Cell<Option<TaskId>>,
}

/// Collapses a burst of calls into one trailing call carrying the last arguments.
pub struct Debouncer<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> Debouncer<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                wait_ms,
                callback: Box::new(callback),
                pending: Cell::new(None),
            }),
        }
    }

    pub fn call(&self, args: A) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }

        let inner = self.inner.clone();
        let id = self.inner.scheduler.schedule(
            self.inner.wait_ms,
            Box::new(move || {
                inner.pending.set(None);
                (inner.callback)(args);
            }),
        );
        self.inner.pending.set(Some(id));
    }
}
