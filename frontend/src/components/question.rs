use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::clock::{Clock, SystemClock};
use crate::components::icons::{Heart, PartyPopper, Sparkles};
use crate::config::{CelebrationContent, QuestionContent};
use crate::effects::celebration::{browser_frame, EmissionLoop, FrameRequest};
use crate::effects::particles::{ConfettiSink, ParticleSink};
use crate::motion::reveal::use_reveal_once;
use crate::motion::spring::{use_spring, Offset, SpringParams};
use crate::rng::RandomSource;

/// Horizontal half-range of the runaway button.
pub const EVADE_X: f64 = 100.0;
/// Vertical half-range of the runaway button.
pub const EVADE_Y: f64 = 50.0;

/// How long the question panel takes to fade out once answered.
const EXIT_MS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Question,
    Celebration,
}

pub enum QuestionAction {
    Evade(Offset),
    Accept,
    ExitFinished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionState {
    phase: Phase,
    no_offset: Offset,
    exiting: bool,
}

impl Default for QuestionState {
    fn default() -> Self {
        Self {
            phase: Phase::Unanswered,
            no_offset: Offset::ZERO,
            exiting: false,
        }
    }
}

impl QuestionState {
    /// A fresh place for the "No" button, uniform over the evasion box.
    pub fn evade_offset(rng: &mut impl RandomSource) -> Offset {
        Offset::new(rng.uniform(-EVADE_X, EVADE_X), rng.uniform(-EVADE_Y, EVADE_Y))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn no_offset(&self) -> Offset {
        self.no_offset
    }

    pub fn panel(&self) -> Panel {
        match self.phase {
            Phase::Unanswered => Panel::Question,
            Phase::Answered => Panel::Celebration,
        }
    }

    /// True while the answered question panel is still fading out on top.
    pub fn question_exiting(&self) -> bool {
        self.exiting
    }
}

impl Reducible for QuestionState {
    type Action = QuestionAction;

    fn reduce(self: Rc<Self>, action: QuestionAction) -> Rc<Self> {
        match (self.phase, action) {
            (Phase::Unanswered, QuestionAction::Evade(offset)) => Rc::new(QuestionState {
                no_offset: offset,
                ..*self
            }),
            (Phase::Unanswered, QuestionAction::Accept) => {
                info!("question answered");
                Rc::new(QuestionState {
                    phase: Phase::Answered,
                    exiting: true,
                    ..*self
                })
            }
            (Phase::Answered, QuestionAction::ExitFinished) if self.exiting => Rc::new(QuestionState {
                exiting: false,
                ..*self
            }),
            // answered is terminal
            (Phase::Answered, _) | (Phase::Unanswered, QuestionAction::ExitFinished) => self,
        }
    }
}

/// Starts the celebration when `phase` is Answered. The sink is only built
/// then, so the particle library is looked up once per celebration.
pub fn start_celebration(
    phase: Phase,
    sink: impl FnOnce() -> Rc<dyn ParticleSink>,
    clock: Rc<dyn Clock>,
    palette: &[String],
    request_frame: FrameRequest,
) -> Option<EmissionLoop> {
    match phase {
        Phase::Unanswered => None,
        Phase::Answered => Some(EmissionLoop::start(sink(), clock, palette, request_frame)),
    }
}

#[derive(Properties, PartialEq)]
pub struct ValentineQuestionProps {
    pub question: QuestionContent,
    pub celebration: CelebrationContent,
    pub palette: Vec<String>,
}

#[function_component(ValentineQuestion)]
pub fn valentine_question(props: &ValentineQuestionProps) -> Html {
    let state = use_reducer(QuestionState::default);
    let rng = use_mut_ref(fastrand::Rng::new);
    let section_ref = use_node_ref();
    let in_view = use_reveal_once(section_ref.clone());
    let no_position = use_spring(state.no_offset(), SpringParams::RUNAWAY);

    // The loop lives in the cleanup closure, so unmounting stops any
    // remaining frames.
    {
        let palette = props.palette.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase| {
                let celebration = start_celebration(
                    *phase,
                    || -> Rc<dyn ParticleSink> { Rc::new(ConfettiSink::detect()) },
                    Rc::new(SystemClock),
                    &palette,
                    browser_frame,
                );
                let exit_timer = celebration.is_some().then(|| {
                    Timeout::new(EXIT_MS, move || dispatcher.dispatch(QuestionAction::ExitFinished))
                });
                move || {
                    drop(exit_timer);
                    drop(celebration);
                }
            },
            state.phase(),
        );
    }

    let on_yes = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(QuestionAction::Accept))
    };

    let evade = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let offset = QuestionState::evade_offset(&mut *rng.borrow_mut());
            debug!("no button evades to ({:.1}, {:.1})", offset.x, offset.y);
            state.dispatch(QuestionAction::Evade(offset));
        })
    };

    let question_panel = |class: Classes| {
        html! {
            <div class={classes!("glass-card", "panel", "panel--question", class)}>
                <div class="panel__wobble">
                    <Heart size={64} stroke_width={1.0} class={classes!("icon--filled")} />
                </div>
                <h2 class="panel__title">{&props.question.title}</h2>
                <p class="panel__prompt">{&props.question.prompt}</p>
                <div class="choices">
                    <button class="choice choice--yes" onclick={on_yes.clone()}>
                        <span class="choice__label">
                            {&props.question.yes_label}
                            <Heart size={20} class={classes!("icon--current")} />
                        </span>
                        <Sparkles size={20} class={classes!("choice__sparkle")} />
                    </button>
                    <button
                        class="choice choice--no"
                        style={format!("transform: translate({:.2}px, {:.2}px);", no_position.x, no_position.y)}
                        onmouseenter={evade.reform(|_: MouseEvent| ())}
                        ontouchstart={evade.reform(|_: TouchEvent| ())}
                    >
                        {&props.question.no_label}
                    </button>
                </div>
            </div>
        }
    };

    let stage = match state.panel() {
        Panel::Question => question_panel(classes!(in_view.then(|| "is-visible"))),
        Panel::Celebration => html! {
            <>
                <Celebration content={props.celebration.clone()} />
                if state.question_exiting() {
                    { question_panel(classes!("is-visible", "panel--exiting")) }
                }
            </>
        },
    };

    html! {
        <section ref={section_ref} class="question-section">
            <style>
                {r#"
                    .question-section {
                        position: relative;
                        min-height: 100vh;
                        padding: 8rem 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .question-section__glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 800px;
                        height: 800px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(236, 72, 153, 0.05);
                        filter: blur(200px);
                        z-index: 0;
                    }
                    .question-stage {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .panel {
                        text-align: center;
                        padding: 3rem;
                    }
                    .panel--question {
                        opacity: 0;
                        transform: scale(0.9);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .panel--question.is-visible {
                        opacity: 1;
                        transform: scale(1);
                    }
                    .panel--exiting {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        animation: panelExit 0.6s ease-in forwards;
                    }
                    @keyframes panelExit {
                        from { opacity: 1; transform: scale(1); }
                        to { opacity: 0; transform: scale(0.9); }
                    }
                    .panel__wobble {
                        display: inline-block;
                        margin-bottom: 2rem;
                        color: #ec4899;
                        animation: wobble 2s ease-in-out infinite;
                    }
                    @keyframes wobble {
                        0%, 100% { transform: rotate(0deg); }
                        33% { transform: rotate(5deg); }
                        66% { transform: rotate(-5deg); }
                    }
                    .icon--filled { fill: #ec4899; }
                    .icon--current { fill: currentColor; }
                    .panel__title {
                        font-size: clamp(1.5rem, 5vw, 3rem);
                        margin: 0 0 1rem;
                        color: var(--text-strong);
                    }
                    .panel__prompt {
                        font-size: 1.25rem;
                        color: var(--text-muted);
                        margin: 0 0 3rem;
                    }
                    .choices {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                        min-height: 100px;
                    }
                    @media (min-width: 640px) {
                        .choices { flex-direction: row; min-height: 80px; }
                    }
                    .choice {
                        padding: 1rem 3rem;
                        border-radius: 9999px;
                        font-family: inherit;
                        font-weight: 700;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .choice--yes {
                        position: relative;
                        border: none;
                        color: #fff;
                        background: linear-gradient(to right, #ec4899, #f43f5e, #ef4444);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s, box-shadow 0.3s;
                    }
                    .choice--yes:hover {
                        transform: scale(1.05);
                        box-shadow: 0 10px 25px rgba(236, 72, 153, 0.5);
                    }
                    .choice--yes:active { transform: scale(0.95); }
                    .choice__label {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .choice__sparkle {
                        position: absolute;
                        top: -0.5rem;
                        right: -0.5rem;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .choice--yes:hover .choice__sparkle { opacity: 1; }
                    .choice--no {
                        background: transparent;
                        border: 1px solid rgba(156, 163, 175, 0.3);
                        color: var(--text-muted);
                        transition: border-color 0.3s;
                        will-change: transform;
                    }
                    .choice--no:hover { border-color: rgba(236, 72, 153, 0.5); }
                "#}
            </style>
            <div class="question-section__glow" />
            <div class="question-stage">
                { stage }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CelebrationProps {
    pub content: CelebrationContent,
}

pub const BOBBING_HEARTS: usize = 5;

#[function_component(Celebration)]
pub fn celebration(props: &CelebrationProps) -> Html {
    let CelebrationContent {
        headline,
        message,
        closing,
    } = &props.content;

    html! {
        <div class="glass-card panel celebration">
            <style>
                {r#"
                    .celebration {
                        padding: 4rem 1.5rem;
                        animation: springIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    @keyframes springIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .celebration__popper {
                        display: inline-block;
                        margin-bottom: 2rem;
                        color: #fb7185;
                        animation: spinIn 0.8s ease-out 0.2s both;
                    }
                    @keyframes spinIn {
                        from { transform: scale(0) rotate(0deg); }
                        to { transform: scale(1) rotate(360deg); }
                    }
                    .celebration__headline {
                        font-size: clamp(2rem, 7vw, 3.75rem);
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                        animation: riseIn 0.5s ease-out 0.4s both;
                        --rise-from: 20px;
                    }
                    .celebration__message {
                        font-size: 1.5rem;
                        color: var(--text-strong);
                        margin: 0 0 2rem;
                        animation: fadeIn 0.5s ease-out 0.6s both;
                    }
                    .celebration__closing {
                        font-size: 1.25rem;
                        color: var(--text-muted);
                        animation: fadeIn 0.5s ease-out 0.8s both;
                    }
                    .celebration__hearts {
                        margin-top: 3rem;
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        color: #ec4899;
                        animation: popIn 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) 1s both;
                    }
                    .celebration__hearts .icon { fill: #ec4899; }
                    .bobbing-heart {
                        animation: bob 1.5s ease-in-out infinite;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }
                "#}
            </style>
            <div class="celebration__popper">
                <PartyPopper size={80} />
            </div>
            <h2 class="celebration__headline gradient-text">{headline}</h2>
            <p class="celebration__message">{message}</p>
            <div class="celebration__closing">{closing}</div>
            <div class="celebration__hearts">
                { for (0..BOBBING_HEARTS).map(|i| html! {
                    <div key={i} class="bobbing-heart" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>
                        <Heart size={32} />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::effects::celebration::{begin, manual_frames, Tick, EMISSION_WINDOW_MS};
    use crate::effects::particles::MockParticleSink;
    use crate::rng::Sequence;

    const PALETTE: [&str; 5] = ["#c44569", "#e17055", "#d4a373", "#ffd6e0", "#fff"];

    fn palette() -> Vec<String> {
        PALETTE.iter().map(|c| c.to_string()).collect()
    }

    fn in_bounds(offset: Offset) -> bool {
        (-EVADE_X..=EVADE_X).contains(&offset.x) && (-EVADE_Y..=EVADE_Y).contains(&offset.y)
    }

    #[test]
    fn starts_unanswered_at_origin() {
        let state = QuestionState::default();
        assert_eq!(state.phase(), Phase::Unanswered);
        assert_eq!(state.panel(), Panel::Question);
        assert_eq!(state.no_offset(), Offset::ZERO);
        assert!(in_bounds(state.no_offset()));
    }

    #[test]
    fn accept_is_terminal_and_idempotent() {
        let state = Rc::new(QuestionState::default());
        let answered = state.reduce(QuestionAction::Accept);
        assert_eq!(answered.phase(), Phase::Answered);
        assert_eq!(answered.panel(), Panel::Celebration);

        let mut current = answered.clone();
        for _ in 0..5 {
            current = current.reduce(QuestionAction::Accept);
            assert!(Rc::ptr_eq(&current, &answered));
            assert_eq!(current.panel(), Panel::Celebration);
        }
    }

    #[test]
    fn evasion_is_ignored_once_answered() {
        let state = Rc::new(QuestionState::default())
            .reduce(QuestionAction::Evade(Offset::new(10.0, 5.0)))
            .reduce(QuestionAction::Accept);
        let after = state.clone().reduce(QuestionAction::Evade(Offset::new(-90.0, 40.0)));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.no_offset(), Offset::new(10.0, 5.0));
    }

    #[test]
    fn evade_offset_covers_the_whole_box() {
        let mut edges = Sequence::new(&[0.0, 0.0, 0.5, 0.5]);
        assert_eq!(QuestionState::evade_offset(&mut edges), Offset::new(-100.0, -50.0));
        assert_eq!(QuestionState::evade_offset(&mut edges), Offset::ZERO);
    }

    #[test]
    fn offsets_stay_in_bounds_after_many_evasions() {
        let mut rng = fastrand::Rng::with_seed(0x14_02);
        let mut state = Rc::new(QuestionState::default());
        for _ in 0..1_000 {
            let offset = QuestionState::evade_offset(&mut rng);
            state = state.reduce(QuestionAction::Evade(offset));
            assert!(in_bounds(state.no_offset()), "{:?} escaped", state.no_offset());
        }
    }

    #[test]
    fn ten_hovers_record_ten_distinct_offsets() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut state = Rc::new(QuestionState::default());
        let mut seen: Vec<Offset> = Vec::new();
        for _ in 0..10 {
            state = state.reduce(QuestionAction::Evade(QuestionState::evade_offset(&mut rng)));
            seen.push(state.no_offset());
        }
        for (i, a) in seen.iter().enumerate() {
            assert!(in_bounds(*a));
            assert!(seen[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn answering_swaps_panels_and_keeps_the_old_panel_until_exit() {
        let state = Rc::new(QuestionState::default());
        assert_eq!(state.panel(), Panel::Question);
        assert!(!state.question_exiting());

        // the same state that swaps the panel also keeps the question fading out
        let answered = state.reduce(QuestionAction::Accept);
        assert_eq!(answered.panel(), Panel::Celebration);
        assert!(answered.question_exiting());

        let settled = answered.reduce(QuestionAction::ExitFinished);
        assert!(!settled.question_exiting());
        assert_eq!(settled.panel(), Panel::Celebration);

        let again = settled.clone().reduce(QuestionAction::ExitFinished);
        assert!(Rc::ptr_eq(&settled, &again));
    }

    #[test]
    fn exit_finished_before_answering_changes_nothing() {
        let state = Rc::new(QuestionState::default());
        let after = state.clone().reduce(QuestionAction::ExitFinished);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn unanswered_phase_starts_no_celebration() {
        let mut sink = MockParticleSink::new();
        sink.expect_fire().times(0);
        let sink: Rc<dyn ParticleSink> = Rc::new(sink);
        let clock = Rc::new(ManualClock::starting_at(0.0));

        let started = start_celebration(
            Phase::Unanswered,
            || sink.clone(),
            clock,
            &palette(),
            manual_frames::queue,
        );
        assert!(started.is_none());
        assert_eq!(manual_frames::pending(), 0);
    }

    #[test]
    fn answering_fires_palette_bursts_until_the_window_closes() {
        let expected = palette();
        let mut sink = MockParticleSink::new();
        sink.expect_fire()
            .withf(move |burst| burst.colors == expected)
            .times(1..)
            .return_const(());
        let sink: Rc<dyn ParticleSink> = Rc::new(sink);
        let clock = Rc::new(ManualClock::starting_at(1_000.0));

        let state = Rc::new(QuestionState::default()).reduce(QuestionAction::Accept);
        let started = start_celebration(
            state.phase(),
            || sink.clone(),
            clock.clone(),
            &palette(),
            manual_frames::queue,
        );
        assert!(started.is_some());

        while manual_frames::pending() > 0 {
            clock.advance(16.0);
            manual_frames::run_next();
        }
        assert!(clock.now_ms() > 1_000.0 + EMISSION_WINDOW_MS);
        drop(started);
    }

    #[test]
    fn transition_survives_a_missing_particle_library() {
        struct Silent;
        impl ParticleSink for Silent {
            fn fire(&self, _: &crate::effects::particles::Burst) {}
        }
        let state = Rc::new(QuestionState::default()).reduce(QuestionAction::Accept);
        let (_, first) = begin(&Silent, 0.0, &palette());
        assert_eq!(first, Tick::Emitted);
        assert_eq!(state.panel(), Panel::Celebration);
    }
}
