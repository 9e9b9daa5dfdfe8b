use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;

use crate::clock::Clock;
use crate::effects::particles::{Burst, Origin, ParticleSink, Shape};

pub const EMISSION_WINDOW_MS: f64 = 3000.0;

/// The two small cannons fired from the left and right edges every frame.
pub fn side_cannons(palette: &[String]) -> [Burst; 2] {
    let cannon = |angle: f64, x: f64| Burst {
        particle_count: 3,
        angle: Some(angle),
        spread: 55.0,
        origin: Origin { x: Some(x), y: None },
        colors: palette.to_vec(),
        shapes: Vec::new(),
    };
    [cannon(60.0, 0.0), cannon(120.0, 1.0)]
}

pub fn center_burst(palette: &[String]) -> Burst {
    Burst {
        particle_count: 100,
        angle: None,
        spread: 100.0,
        origin: Origin { x: None, y: Some(0.6) },
        colors: palette.to_vec(),
        shapes: vec![Shape::Circle],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Emitted,
    Expired,
}

/// Side-cannon emissions bounded by a wall-clock deadline. Once a tick lands
/// past the deadline the schedule stays expired.
pub struct EmissionSchedule {
    deadline_ms: f64,
    cannons: [Burst; 2],
    expired: Cell<bool>,
}

impl EmissionSchedule {
    pub fn starting_at(now_ms: f64, palette: &[String]) -> Self {
        Self {
            deadline_ms: now_ms + EMISSION_WINDOW_MS,
            cannons: side_cannons(palette),
            expired: Cell::new(false),
        }
    }

    pub fn tick(&self, now_ms: f64, sink: &dyn ParticleSink) -> Tick {
        if self.expired.get() || now_ms > self.deadline_ms {
            self.expired.set(true);
            return Tick::Expired;
        }
        for burst in &self.cannons {
            sink.fire(burst);
        }
        Tick::Emitted
    }
}

/// Fires the one-shot center burst and the first side-cannon tick.
pub fn begin(sink: &dyn ParticleSink, now_ms: f64, palette: &[String]) -> (EmissionSchedule, Tick) {
    sink.fire(&center_burst(palette));
    let schedule = EmissionSchedule::starting_at(now_ms, palette);
    let first = schedule.tick(now_ms, sink);
    (schedule, first)
}

/// Asks for `tick` to run on a later frame. The returned handle cancels it.
pub type FrameRequest = fn(Box<dyn FnOnce()>) -> Option<AnimationFrame>;

pub fn browser_frame(tick: Box<dyn FnOnce()>) -> Option<AnimationFrame> {
    Some(request_animation_frame(move |_| tick()))
}

struct LoopInner {
    schedule: EmissionSchedule,
    sink: Rc<dyn ParticleSink>,
    clock: Rc<dyn Clock>,
    request_frame: FrameRequest,
    frame: RefCell<Option<AnimationFrame>>,
    alive: Cell<bool>,
}

impl LoopInner {
    fn schedule_next(self: &Rc<Self>) {
        let inner = Rc::clone(self);
        let handle = (self.request_frame)(Box::new(move || {
            inner.frame.borrow_mut().take();
            inner.run_tick();
        }));
        *self.frame.borrow_mut() = handle;
    }

    fn run_tick(self: &Rc<Self>) {
        if !self.alive.get() {
            return;
        }
        match self.schedule.tick(self.clock.now_ms(), self.sink.as_ref()) {
            Tick::Emitted => self.schedule_next(),
            Tick::Expired => debug!("celebration emission window closed"),
        }
    }
}

/// Handle to a running celebration. Dropping it stops any further frames.
pub struct EmissionLoop {
    inner: Rc<LoopInner>,
}

impl EmissionLoop {
    /// Fires the opening bursts, then keeps the side cannons going on each
    /// frame `request_frame` hands out until the window closes.
    pub fn start(
        sink: Rc<dyn ParticleSink>,
        clock: Rc<dyn Clock>,
        palette: &[String],
        request_frame: FrameRequest,
    ) -> Self {
        let (schedule, first) = begin(sink.as_ref(), clock.now_ms(), palette);
        let inner = Rc::new(LoopInner {
            schedule,
            sink,
            clock,
            request_frame,
            frame: RefCell::new(None),
            alive: Cell::new(true),
        });
        if first == Tick::Emitted {
            inner.schedule_next();
        }
        Self { inner }
    }

    pub fn cancel(&self) {
        self.inner.alive.set(false);
        self.inner.frame.borrow_mut().take();
    }
}

impl Drop for EmissionLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::effects::particles::MockParticleSink;
    use super::manual_frames;

    fn palette() -> Vec<String> {
        ["#c44569", "#e17055", "#d4a373", "#ffd6e0", "#fff"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        fired: RefCell<Vec<Burst>>,
    }

    impl ParticleSink for Recorder {
        fn fire(&self, burst: &Burst) {
            self.fired.borrow_mut().push(burst.clone());
        }
    }

    #[test]
    fn begin_fires_center_burst_and_both_cannons_with_palette() {
        let expected = palette();
        let mut sink = MockParticleSink::new();
        sink.expect_fire()
            .withf(move |burst| burst.colors == expected)
            .times(3)
            .return_const(());

        let (_, first) = begin(&sink, 0.0, &palette());
        assert_eq!(first, Tick::Emitted);
    }

    #[test]
    fn cannons_mirror_each_other() {
        let [left, right] = side_cannons(&palette());
        assert_eq!(left.angle, Some(60.0));
        assert_eq!(right.angle, Some(120.0));
        assert_eq!(left.spread, 55.0);
        assert_eq!(right.spread, 55.0);
        assert_eq!(left.origin.x, Some(0.0));
        assert_eq!(right.origin.x, Some(1.0));
    }

    #[test]
    fn center_burst_is_large_and_low() {
        let burst = center_burst(&palette());
        assert_eq!(burst.particle_count, 100);
        assert_eq!(burst.spread, 100.0);
        assert_eq!(burst.origin.y, Some(0.6));
        assert_eq!(burst.shapes, vec![Shape::Circle]);
    }

    #[test]
    fn no_emissions_after_window_closes() {
        let clock = ManualClock::starting_at(10_000.0);
        let sink = Recorder::default();
        let (schedule, _) = begin(&sink, clock.now_ms(), &palette());
        assert_eq!(sink.fired.borrow().len(), 3);

        // one refresh every ~16ms until the deadline
        let mut emitted_ticks = 1;
        loop {
            clock.advance(16.0);
            match schedule.tick(clock.now_ms(), &sink) {
                Tick::Emitted => emitted_ticks += 1,
                Tick::Expired => break,
            }
        }
        assert!(clock.now_ms() > 10_000.0 + EMISSION_WINDOW_MS);
        assert_eq!(sink.fired.borrow().len(), 1 + emitted_ticks * 2);

        let before = sink.fired.borrow().len();
        for _ in 0..10 {
            clock.advance(16.0);
            assert_eq!(schedule.tick(clock.now_ms(), &sink), Tick::Expired);
        }
        assert_eq!(sink.fired.borrow().len(), before);
    }

    #[test]
    fn tick_exactly_at_deadline_still_emits() {
        let sink = Recorder::default();
        let schedule = EmissionSchedule::starting_at(0.0, &palette());
        assert_eq!(schedule.tick(EMISSION_WINDOW_MS, &sink), Tick::Emitted);
        assert_eq!(schedule.tick(EMISSION_WINDOW_MS + 0.5, &sink), Tick::Expired);
    }

    #[test]
    fn expiry_latches_even_if_clock_goes_backwards() {
        let sink = Recorder::default();
        let schedule = EmissionSchedule::starting_at(0.0, &palette());
        assert_eq!(schedule.tick(5_000.0, &sink), Tick::Expired);
        assert_eq!(schedule.tick(100.0, &sink), Tick::Expired);
        assert!(sink.fired.borrow().is_empty());
    }

    #[test]
    fn loop_runs_every_frame_until_the_window_closes() {
        let clock = Rc::new(ManualClock::starting_at(0.0));
        let sink = Rc::new(Recorder::default());
        let running = EmissionLoop::start(sink.clone(), clock.clone(), &palette(), manual_frames::queue);
        assert_eq!(sink.fired.borrow().len(), 3);
        assert_eq!(manual_frames::pending(), 1);

        let mut frames = 0;
        loop {
            clock.advance(16.0);
            assert!(manual_frames::run_next());
            frames += 1;
            if manual_frames::pending() == 0 {
                break;
            }
        }
        assert!(clock.now_ms() > EMISSION_WINDOW_MS);
        // the last frame found the window closed and fired nothing
        assert_eq!(sink.fired.borrow().len(), 3 + (frames - 1) * 2);
        drop(running);
    }

    #[test]
    fn stale_frame_after_teardown_fires_nothing() {
        let clock = Rc::new(ManualClock::starting_at(0.0));
        let sink = Rc::new(Recorder::default());
        let running = EmissionLoop::start(sink.clone(), clock.clone(), &palette(), manual_frames::queue);
        let before = sink.fired.borrow().len();
        assert_eq!(manual_frames::pending(), 1);

        drop(running);
        clock.advance(16.0);
        assert!(manual_frames::run_next());
        assert_eq!(sink.fired.borrow().len(), before);
        assert_eq!(manual_frames::pending(), 0);
    }
}
