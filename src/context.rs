use std::rc::Rc;

use yew::prelude::*;

use crate::scheduler::{BrowserScheduler, Scheduler};

/// Whether the intro has finished and the page may react to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyFlag(bool);

impl ReadyFlag {
    pub const READY: ReadyFlag = ReadyFlag(true);

    pub fn is_ready(self) -> bool {
        self.0
    }
}

/// Page-wide timer source handed to components through context.
#[derive(Clone)]
pub struct Clock(pub Rc<dyn Scheduler>);

impl Clock {
    pub fn browser() -> Self {
        Clock(BrowserScheduler::shared())
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.0.clone()
    }
}

impl PartialEq for Clock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_ready() -> ReadyFlag {
    use_context::<ReadyFlag>().unwrap_or_default()
}

#[hook]
pub fn use_clock() -> Rc<dyn Scheduler> {
    let fallback = use_memo(|_| Clock::browser(), ());
    use_context::<Clock>()
        .unwrap_or_else(|| (*fallback).clone())
        .scheduler()
}
