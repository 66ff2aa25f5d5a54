use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use yew::Callback;

use crate::config;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Counting(u8),
    /// Counter has hit its target; short hold before the overlay goes.
    Loaded,
    OverlayHidden,
    DoorOpening,
    Revealed,
}

impl IntroPhase {
    pub fn count(self) -> u8 {
        match self {
            IntroPhase::Counting(n) => n,
            _ => config::INTRO_COUNT_TARGET,
        }
    }

    pub fn overlay_hidden(self) -> bool {
        !matches!(self, IntroPhase::Counting(_) | IntroPhase::Loaded)
    }

    pub fn door_opening(self) -> bool {
        matches!(self, IntroPhase::DoorOpening)
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, IntroPhase::Revealed)
    }
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    has_door: bool,
    on_phase: Callback<IntroPhase>,
    phase: Cell<IntroPhase>,
    started: Cell<bool>,
}

/// One-shot loading sequence: count to 100, drop the loading overlay, open
/// the door, reveal the page.
#[derive(Clone)]
pub struct IntroSequencer {
    inner: Rc<Inner>,
}

impl IntroSequencer {
    pub fn new(scheduler: Rc<dyn Scheduler>, has_door: bool, on_phase: Callback<IntroPhase>) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                has_door,
                on_phase,
                phase: Cell::new(IntroPhase::Counting(0)),
                started: Cell::new(false),
            }),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> IntroPhase {
        self.inner.phase.get()
    }

    pub fn start(&self) {
        if self.inner.started.replace(true) {
            return;
        }
        info!("Starting intro sequence");
        enter(&self.inner, IntroPhase::Counting(0));
    }
}

fn enter(inner: &Rc<Inner>, phase: IntroPhase) {
    inner.phase.set(phase);
    if !matches!(phase, IntroPhase::Counting(_)) {
        debug!("Intro phase: {:?}", phase);
    }
    inner.on_phase.emit(phase);
    advance(inner);
}

fn after(inner: &Rc<Inner>, delay_ms: u32, next: IntroPhase) {
    let target = inner.clone();
    inner
        .scheduler
        .schedule(delay_ms, Box::new(move || enter(&target, next)));
}

fn advance(inner: &Rc<Inner>) {
    match inner.phase.get() {
        IntroPhase::Counting(n) if n >= config::INTRO_COUNT_TARGET => {
            enter(inner, IntroPhase::Loaded);
        }
        IntroPhase::Counting(n) => after(inner, config::INTRO_TICK_MS, IntroPhase::Counting(n + 1)),
        IntroPhase::Loaded => after(inner, config::INTRO_LOADED_PAUSE_MS, IntroPhase::OverlayHidden),
        IntroPhase::OverlayHidden if inner.has_door => {
            after(inner, config::DOOR_OPEN_DELAY_MS, IntroPhase::DoorOpening);
        }
        IntroPhase::OverlayHidden => enter(inner, IntroPhase::Revealed),
        IntroPhase::DoorOpening => after(inner, config::DOOR_OPEN_DURATION_MS, IntroPhase::Revealed),
        IntroPhase::Revealed => info!("Intro finished"),
    }
}

/// Delays at which the hero's fade-in elements become visible once the page
/// is revealed.
pub fn hero_reveal_delays(count: usize) -> impl Iterator<Item = u32> {
    (0..count as u32).map(|i| config::HERO_REVEAL_OFFSET_MS + i * config::HERO_REVEAL_STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;

    type Timeline = Rc<RefCell<Vec<(u64, IntroPhase)>>>;

    fn sequencer(has_door: bool) -> (Rc<ManualScheduler>, IntroSequencer, Timeline) {
        let scheduler = ManualScheduler::new();
        let timeline: Timeline = Rc::new(RefCell::new(Vec::new()));
        let clock = scheduler.clone();
        let sink = timeline.clone();
        let sequencer = IntroSequencer::new(
            scheduler.clone(),
            has_door,
            Callback::from(move |phase| sink.borrow_mut().push((clock.now(), phase))),
        );
        (scheduler, sequencer, timeline)
    }

    fn time_of(timeline: &Timeline, phase: IntroPhase) -> Option<u64> {
        timeline.borrow().iter().find(|(_, p)| *p == phase).map(|(t, _)| *t)
    }

    #[test]
    fn counter_reaches_one_hundred_at_three_seconds() {
        let (scheduler, intro, timeline) = sequencer(true);
        intro.start();

        scheduler.advance(2999);
        assert_eq!(intro.phase(), IntroPhase::Counting(99));
        scheduler.advance(1);
        assert_eq!(time_of(&timeline, IntroPhase::Counting(100)), Some(3000));
        assert_eq!(intro.phase(), IntroPhase::Loaded);
    }

    #[test]
    fn door_opens_and_page_reveals_on_schedule() {
        let (scheduler, intro, timeline) = sequencer(true);
        intro.start();
        scheduler.advance(10_000);

        assert_eq!(time_of(&timeline, IntroPhase::OverlayHidden), Some(3500));
        assert_eq!(time_of(&timeline, IntroPhase::DoorOpening), Some(3600));
        assert_eq!(time_of(&timeline, IntroPhase::Revealed), Some(5100));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn reveal_happens_exactly_once_and_never_early() {
        let (scheduler, intro, timeline) = sequencer(true);
        intro.start();
        intro.start();

        scheduler.advance(5099);
        assert!(!intro.phase().is_revealed());
        scheduler.advance(60_000);

        let reveals = timeline.borrow().iter().filter(|(_, p)| p.is_revealed()).count();
        assert_eq!(reveals, 1);
        assert!(intro.phase().is_revealed());
    }

    #[test]
    fn missing_door_reveals_when_overlay_hides() {
        let (scheduler, intro, timeline) = sequencer(false);
        intro.start();
        scheduler.advance(10_000);

        assert_eq!(time_of(&timeline, IntroPhase::DoorOpening), None);
        assert_eq!(time_of(&timeline, IntroPhase::Revealed), Some(3500));
    }

    #[test]
    fn hero_elements_are_staggered() {
        let delays: Vec<u32> = hero_reveal_delays(3).collect();
        assert_eq!(delays, vec![300, 500, 700]);
    }
}
