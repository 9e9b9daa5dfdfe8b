use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;
use yew_hooks::use_unmount;

const SUBSTEP: f64 = 1.0 / 240.0;
const MAX_FRAME_DT: f64 = 1.0 / 30.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn minus(self, other: Offset) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringParams {
    /// Snappy and underdamped, so the runaway button visibly overshoots.
    pub const RUNAWAY: SpringParams = SpringParams {
        stiffness: 300.0,
        damping: 20.0,
        mass: 1.0,
    };
}

/// Damped harmonic oscillator in two dimensions.
#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    position: Offset,
    velocity: Offset,
    target: Offset,
}

impl Spring {
    pub fn new(at: Offset, params: SpringParams) -> Self {
        Self {
            params,
            position: at,
            velocity: Offset::ZERO,
            target: at,
        }
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn retarget(&mut self, target: Offset) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.target.minus(self.position).length() < REST_DELTA && self.velocity.length() < REST_SPEED
    }

    /// Advances by `dt` seconds in fixed substeps (semi-implicit Euler).
    pub fn step(&mut self, dt: f64) {
        let SpringParams { stiffness, damping, mass } = self.params;
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.position.minus(self.target);
            let ax = (-stiffness * displacement.x - damping * self.velocity.x) / mass;
            let ay = (-stiffness * displacement.y - damping * self.velocity.y) / mass;
            self.velocity.x += ax * h;
            self.velocity.y += ay * h;
            self.position.x += self.velocity.x * h;
            self.position.y += self.velocity.y * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = Offset::ZERO;
        }
    }
}

struct SpringDriver {
    spring: RefCell<Spring>,
    frame: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    position: UseStateSetter<Offset>,
}

impl SpringDriver {
    fn retarget(self: &Rc<Self>, target: Offset) {
        self.spring.borrow_mut().retarget(target);
        if self.frame.borrow().is_none() {
            self.schedule();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let driver = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            driver.frame.borrow_mut().take();
            driver.advance(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn advance(self: &Rc<Self>, timestamp: f64) {
        let dt = match self.last_timestamp.replace(Some(timestamp)) {
            Some(last) => ((timestamp - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => 1.0 / 60.0,
        };
        let (position, settled) = {
            let mut spring = self.spring.borrow_mut();
            spring.step(dt);
            (spring.position(), spring.is_settled())
        };
        self.position.set(position);
        if settled {
            self.last_timestamp.set(None);
        } else {
            self.schedule();
        }
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

/// Animates toward `target` with a spring and returns the current position.
#[hook]
pub fn use_spring(target: Offset, params: SpringParams) -> Offset {
    let position = use_state(|| target);
    let driver = {
        let setter = position.setter();
        use_memo(
            move |_| SpringDriver {
                spring: RefCell::new(Spring::new(target, params)),
                frame: RefCell::new(None),
                last_timestamp: Cell::new(None),
                position: setter,
            },
            (),
        )
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |target| {
                driver.retarget(*target);
                || ()
            },
            target,
        );
    }
    {
        let driver = driver.clone();
        use_unmount(move || driver.stop());
    }

    *position
}
