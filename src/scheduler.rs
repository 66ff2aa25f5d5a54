use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub type TaskId = u64;

/// Delayed-task seam shared by every timed behavior on the page.
///
/// The browser implementation sits on `setTimeout`; tests drive the same
/// components through a virtual clock.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId;

    /// Cancelling an unknown or already fired task does nothing.
    fn cancel(&self, id: TaskId);
}

/// Timer handles by state. A fired handle is still executing its own
/// closure, so it is parked and released on the next `insert`.
struct TimerSlots<H> {
    pending: HashMap<TaskId, H>,
    fired: Vec<H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            fired: Vec::new(),
        }
    }
}

impl<H> TimerSlots<H> {
    fn insert(&mut self, id: TaskId, handle: H) {
        self.fired.clear();
        self.pending.insert(id, handle);
    }

    fn take(&mut self, id: TaskId) -> Option<H> {
        self.pending.remove(&id)
    }

    fn retire(&mut self, handle: H) {
        self.fired.push(handle);
    }
}

#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<TaskId>,
    slots: Rc<RefCell<TimerSlots<Timeout>>>,
}

impl BrowserScheduler {
    pub fn shared() -> Rc<dyn Scheduler> {
        Rc::new(Self::default())
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let slots = self.slots.clone();
        let timeout = Timeout::new(delay_ms, move || {
            let handle = slots.borrow_mut().take(id);
            task();
            if let Some(handle) = handle {
                slots.borrow_mut().retire(handle);
            }
        });
        self.slots.borrow_mut().insert(id, timeout);
        id
    }

    fn cancel(&self, id: TaskId) {
        // Dropping a pending `Timeout` clears the browser timer.
        let pending = self.slots.borrow_mut().take(id);
        drop(pending);
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::*;

    struct Queued {
        due: u64,
        id: TaskId,
        task: Box<dyn FnOnce()>,
    }

    /// Virtual clock: nothing runs until `advance` moves time past a task's due point.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        next_id: Cell<TaskId>,
        queue: RefCell<Vec<Queued>>,
    }

    impl ManualScheduler {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn now(&self) -> u64 {
            self.now.get()
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Runs every task due within the next `ms`, including ones scheduled
        /// by tasks that run during this call.
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let position = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, q)| q.due <= target)
                        .min_by_key(|(_, q)| (q.due, q.id))
                        .map(|(i, _)| i);
                    position.map(|i| queue.remove(i))
                };
                match next {
                    Some(queued) => {
                        self.now.set(queued.due);
                        (queued.task)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push(Queued {
                due: self.now.get() + u64::from(delay_ms),
                id,
                task,
            });
            id
        }

        fn cancel(&self, id: TaskId) {
            self.queue.borrow_mut().retain(|q| q.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_runs_tasks_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(30, "b"), (10, "a"), (30, "c")] {
            let log = log.clone();
            scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance(29);
        assert_eq!(*log.borrow(), vec!["a"]);
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn manual_scheduler_runs_chained_tasks_inside_window() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(Cell::new(0));

        let inner = scheduler.clone();
        let fired = fired_at.clone();
        scheduler.schedule(
            100,
            Box::new(move || {
                let clock = inner.clone();
                inner.schedule(50, Box::new(move || fired.set(clock.now())));
            }),
        );

        scheduler.advance(1000);
        assert_eq!(fired_at.get(), 150);
        assert_eq!(scheduler.now(), 1000);
    }

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn fired_handles_are_released_by_the_next_insert() {
        let dropped = Rc::new(Cell::new(0));
        let mut slots = TimerSlots::default();

        for id in 0..100 {
            slots.insert(id, Counted(dropped.clone()));
            let handle = slots.take(id).expect("handle is pending");
            slots.retire(handle);
            assert!(slots.fired.len() <= 1);
        }
        assert_eq!(dropped.get(), 99);

        assert!(slots.take(42).is_none());
        slots.insert(100, Counted(dropped.clone()));
        assert_eq!(dropped.get(), 100);
        assert_eq!(slots.pending.len(), 1);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let id = scheduler.schedule(10, Box::new(move || flag.set(true)));
        scheduler.cancel(id);
        scheduler.cancel(id);
        scheduler.advance(100);
        assert!(!ran.get());
    }
}
