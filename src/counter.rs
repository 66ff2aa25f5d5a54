use std::rc::Rc;

use crate::config;
use crate::scheduler::Scheduler;

/// A statistic such as `2024+` split into the number to count up to and the
/// text that trails it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub target: u64,
    pub suffix: String,
}

/// Every digit in the text forms the target; everything else is kept as suffix.
/// Returns `None` when there is nothing to count.
pub fn parse_stat(text: &str) -> Option<StatValue> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let target = digits.parse().ok()?;
    let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
    Some(StatValue { target, suffix })
}

#[derive(Debug, Clone)]
pub struct CountUp {
    value: StatValue,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(value: StatValue) -> Self {
        let increment = value.target as f64 / config::COUNTER_STEPS;
        Self {
            value,
            current: 0.0,
            increment,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.value.target as f64 {
            self.finished = true;
            Some(format!("{}{}", self.value.target, self.value.suffix))
        } else {
            Some(format!("{}{}", self.current.floor() as u64, self.value.suffix))
        }
    }
}

/// Renders one frame of `count` every tick until it reaches its target.
pub fn animate_count(scheduler: Rc<dyn Scheduler>, count: CountUp, render: impl Fn(&str) + 'static) {
    fn tick(scheduler: Rc<dyn Scheduler>, mut count: CountUp, render: Rc<dyn Fn(&str)>) {
        let next_scheduler = scheduler.clone();
        scheduler.schedule(
            config::COUNTER_TICK_MS,
            Box::new(move || {
                if let Some(frame) = count.next() {
                    render(&frame);
                }
                if !count.is_finished() {
                    tick(next_scheduler, count, render);
                }
            }),
        );
    }

    tick(scheduler, count, Rc::new(render));
}
