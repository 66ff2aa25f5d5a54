use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use crate::config;
use crate::scheduler::{Scheduler, TaskId};

/// DOM side of the carousel: the set of hero images sharing one animation.
pub trait CarouselSurface {
    fn set_flowing(&self, flowing: bool);
    /// Forces layout so a removed class is applied before it is added again.
    fn reflow(&self);
    fn set_paused(&self, paused: bool);
}

/// Where the hero section sits relative to the viewport, plus tab visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroVisibility {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
    pub tab_hidden: bool,
}

impl HeroVisibility {
    pub fn in_view(&self) -> bool {
        let margin = config::HERO_VISIBILITY_MARGIN_PX;
        !(self.bottom <= margin || self.top >= self.viewport_height - margin)
    }

    pub fn should_animate(&self) -> bool {
        !self.tab_hidden && self.in_view()
    }
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    surface: Box<dyn CarouselSurface>,
    image_count: usize,
    settled: Cell<usize>,
    armed: Cell<bool>,
    launch_scheduled: Cell<bool>,
    launched: Cell<bool>,
    stopped: Cell<bool>,
    running: Cell<bool>,
    pending_step: Cell<Option<TaskId>>,
}

/// Looping hero animation. Every image gets the flowing class at the same
/// moment, and it is stripped and reapplied each cycle so the loop restarts
/// without a visible jump.
#[derive(Clone)]
pub struct HeroCarousel {
    inner: Rc<Inner>,
}

impl PartialEq for HeroCarousel {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl HeroCarousel {
    pub fn new(scheduler: Rc<dyn Scheduler>, surface: impl CarouselSurface + 'static, image_count: usize) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                surface: Box::new(surface),
                image_count,
                settled: Cell::new(0),
                armed: Cell::new(false),
                launch_scheduled: Cell::new(false),
                launched: Cell::new(false),
                stopped: Cell::new(false),
                running: Cell::new(false),
                pending_step: Cell::new(None),
            }),
        }
    }

    /// Counts an image that finished loading, successfully or not.
    pub fn image_settled(&self) {
        let settled = self.inner.settled.get() + 1;
        self.inner.settled.set(settled);
        debug!("Hero image settled ({}/{})", settled, self.inner.image_count);
        self.try_schedule_launch();
    }

    /// Allows the first cycle to begin once every image has settled, with a
    /// watchdog that begins it anyway.
    pub fn initialize(&self) {
        if self.inner.armed.replace(true) {
            return;
        }
        let inner = self.inner.clone();
        self.inner.scheduler.schedule(
            config::CAROUSEL_WATCHDOG_MS,
            Box::new(move || {
                if !inner.launched.get() && !inner.stopped.get() {
                    info!("Hero images still loading, starting carousel anyway");
                    launch(&inner);
                }
            }),
        );
        self.try_schedule_launch();
    }

    fn try_schedule_launch(&self) {
        let inner = &self.inner;
        if !inner.armed.get() || inner.launch_scheduled.get() || inner.settled.get() < inner.image_count {
            return;
        }
        inner.launch_scheduled.set(true);
        let target = inner.clone();
        inner
            .scheduler
            .schedule(config::CAROUSEL_LAUNCH_DELAY_MS, Box::new(move || launch(&target)));
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn stop(&self) {
        info!("Hero carousel stopped");
        self.inner.stopped.set(true);
        self.halt();
        self.inner.surface.set_paused(true);
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        info!("Hero carousel started");
        self.inner.stopped.set(false);
        self.inner.launched.set(true);
        self.inner.surface.set_paused(false);
        cycle(&self.inner);
    }

    pub fn pause(&self) {
        self.inner.surface.set_paused(true);
    }

    pub fn resume(&self) {
        self.inner.surface.set_paused(false);
    }

    /// Pauses the CSS animation while the hero is off screen or the tab is
    /// hidden. The cycle timer keeps going either way.
    pub fn sync_visibility(&self, visibility: HeroVisibility) {
        if !visibility.should_animate() {
            self.pause();
        } else if self.is_running() {
            self.resume();
        }
    }

    /// Page is going away.
    pub fn teardown(&self) {
        self.halt();
    }

    fn halt(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.pending_step.take() {
            self.inner.scheduler.cancel(id);
        }
        self.inner.surface.set_flowing(false);
    }
}

// An explicit stop outranks the load gate and the watchdog.
fn launch(inner: &Rc<Inner>) {
    if inner.stopped.get() || inner.launched.replace(true) {
        return;
    }
    info!("Hero carousel launched");
    inner.running.set(true);
    cycle(inner);
}

fn cycle(inner: &Rc<Inner>) {
    if !inner.running.get() {
        return;
    }
    inner.surface.set_flowing(true);

    let target = inner.clone();
    let id = inner.scheduler.schedule(
        config::CAROUSEL_CYCLE_MS,
        Box::new(move || {
            if !target.running.get() {
                return;
            }
            target.surface.set_flowing(false);
            target.surface.reflow();

            let restart = target.clone();
            let id = target.scheduler.schedule(
                config::CAROUSEL_RESTART_GAP_MS,
                Box::new(move || {
                    restart.pending_step.set(None);
                    cycle(&restart);
                }),
            );
            target.pending_step.set(Some(id));
        }),
    );
    inner.pending_step.set(Some(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Flowing(bool),
        Reflow,
        Paused(bool),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<(u64, Call)>>>,
        clock: Rc<ManualScheduler>,
    }

    impl Recorder {
        fn record(&self, call: Call) {
            self.calls.borrow_mut().push((self.clock.now(), call));
        }

        fn flowing_changes(&self) -> Vec<(u64, bool)> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|(t, c)| match c {
                    Call::Flowing(on) => Some((*t, *on)),
                    _ => None,
                })
                .collect()
        }

        fn last_paused(&self) -> Option<bool> {
            self.calls.borrow().iter().rev().find_map(|(_, c)| match c {
                Call::Paused(p) => Some(*p),
                _ => None,
            })
        }
    }

    impl CarouselSurface for Recorder {
        fn set_flowing(&self, flowing: bool) {
            self.record(Call::Flowing(flowing));
        }

        fn reflow(&self) {
            self.record(Call::Reflow);
        }

        fn set_paused(&self, paused: bool) {
            self.record(Call::Paused(paused));
        }
    }

    fn carousel(images: usize) -> (Rc<ManualScheduler>, Recorder, HeroCarousel) {
        let scheduler = ManualScheduler::new();
        let recorder = Recorder {
            calls: Rc::default(),
            clock: scheduler.clone(),
        };
        let carousel = HeroCarousel::new(scheduler.clone(), recorder.clone(), images);
        (scheduler, recorder, carousel)
    }

    #[test]
    fn starts_after_all_images_settle() {
        let (scheduler, recorder, carousel) = carousel(3);
        carousel.initialize();
        carousel.image_settled();
        carousel.image_settled();
        scheduler.advance(1000);
        carousel.image_settled();

        scheduler.advance(1499);
        assert!(recorder.flowing_changes().is_empty());
        scheduler.advance(1);
        assert_eq!(recorder.flowing_changes(), vec![(2500, true)]);
        assert!(carousel.is_running());
    }

    #[test]
    fn images_loaded_before_initialize_still_count() {
        let (scheduler, recorder, carousel) = carousel(2);
        carousel.image_settled();
        carousel.image_settled();
        scheduler.advance(10_000);
        assert!(recorder.flowing_changes().is_empty());

        carousel.initialize();
        scheduler.advance(1500);
        assert_eq!(recorder.flowing_changes(), vec![(11_500, true)]);
    }

    #[test]
    fn watchdog_starts_when_images_never_settle() {
        let (scheduler, recorder, carousel) = carousel(4);
        carousel.initialize();
        carousel.image_settled();

        scheduler.advance(4999);
        assert!(!carousel.is_running());
        scheduler.advance(1);
        assert_eq!(recorder.flowing_changes(), vec![(5000, true)]);

        // Late images must not launch a second loop.
        for _ in 0..3 {
            carousel.image_settled();
        }
        scheduler.advance(1500);
        assert_eq!(recorder.flowing_changes(), vec![(5000, true)]);
    }

    #[test]
    fn cycle_strips_and_reapplies_every_forty_seconds() {
        let (scheduler, recorder, carousel) = carousel(1);
        carousel.image_settled();
        carousel.initialize();
        scheduler.advance(1500 + 80_200);

        assert_eq!(
            recorder.flowing_changes(),
            vec![
                (1500, true),
                (41_500, false),
                (41_600, true),
                (81_600, false),
                (81_700, true)
            ]
        );
        let reflows: Vec<u64> = recorder
            .calls
            .borrow()
            .iter()
            .filter(|(_, c)| *c == Call::Reflow)
            .map(|(t, _)| *t)
            .collect();
        assert_eq!(reflows, vec![41_500, 81_600]);
    }

    #[test]
    fn stop_freezes_until_start() {
        let (scheduler, recorder, carousel) = carousel(1);
        carousel.image_settled();
        carousel.initialize();
        scheduler.advance(2000);

        carousel.stop();
        assert!(!carousel.is_running());
        assert_eq!(recorder.last_paused(), Some(true));
        let frozen = recorder.flowing_changes();
        assert_eq!(frozen.last(), Some(&(2000, false)));

        scheduler.advance(200_000);
        assert_eq!(recorder.flowing_changes(), frozen);
        assert_eq!(scheduler.pending(), 0);

        carousel.start();
        carousel.start();
        assert!(carousel.is_running());
        assert_eq!(recorder.last_paused(), Some(false));
        assert_eq!(recorder.flowing_changes().last(), Some(&(202_000, true)));
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn stop_before_first_cycle_blocks_gate_and_watchdog() {
        let (scheduler, recorder, carousel) = carousel(2);
        carousel.image_settled();
        carousel.initialize();
        carousel.stop();
        let frozen = recorder.flowing_changes();
        assert_eq!(frozen, vec![(0, false)]);

        // Second image completes the gate; the watchdog is due at 5000.
        carousel.image_settled();
        scheduler.advance(10_000);
        assert_eq!(recorder.flowing_changes(), frozen);
        assert!(!carousel.is_running());
        assert_eq!(recorder.last_paused(), Some(true));

        carousel.start();
        assert!(carousel.is_running());
        assert_eq!(recorder.flowing_changes().last(), Some(&(10_000, true)));
    }

    #[test]
    fn visibility_pauses_animation_but_not_cycle() {
        let (scheduler, recorder, carousel) = carousel(1);
        carousel.image_settled();
        carousel.initialize();
        scheduler.advance(1500);

        let visible = HeroVisibility {
            top: 0.0,
            bottom: 800.0,
            viewport_height: 900.0,
            tab_hidden: false,
        };
        carousel.sync_visibility(HeroVisibility { bottom: 100.0, ..visible });
        assert_eq!(recorder.last_paused(), Some(true));
        assert!(carousel.is_running());

        carousel.sync_visibility(visible);
        assert_eq!(recorder.last_paused(), Some(false));

        carousel.sync_visibility(HeroVisibility { tab_hidden: true, ..visible });
        assert_eq!(recorder.last_paused(), Some(true));

        scheduler.advance(40_000);
        assert!(recorder.flowing_changes().contains(&(41_500, false)));
    }

    #[test]
    fn resume_is_skipped_when_not_running() {
        let (_, recorder, carousel) = carousel(1);
        carousel.sync_visibility(HeroVisibility {
            top: 0.0,
            bottom: 800.0,
            viewport_height: 900.0,
            tab_hidden: false,
        });
        assert_eq!(recorder.last_paused(), None);
    }

    #[test]
    fn hero_window_edges() {
        let at = |top: f64, bottom: f64| HeroVisibility {
            top,
            bottom,
            viewport_height: 1000.0,
            tab_hidden: false,
        };
        assert!(at(0.0, 101.0).in_view());
        assert!(!at(-700.0, 100.0).in_view());
        assert!(at(899.0, 1600.0).in_view());
        assert!(!at(900.0, 1600.0).in_view());
    }

    #[test]
    fn teardown_clears_marker_and_stops() {
        let (scheduler, recorder, carousel) = carousel(1);
        carousel.image_settled();
        carousel.initialize();
        scheduler.advance(1500);

        carousel.teardown();
        assert!(!carousel.is_running());
        assert_eq!(recorder.flowing_changes().last(), Some(&(1500, false)));
    }
}
