use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::components::icons::Play;
use crate::config::{asset_url, MediaContent};
use crate::motion::reveal::use_reveal_once;

/// Native events reported by the `<video>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Mirrors what the media element says it is doing. Clicks never write here,
/// only element events do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub failed: bool,
}

impl PlaybackState {
    pub fn command(&self) -> MediaCommand {
        if self.playing {
            MediaCommand::Pause
        } else {
            MediaCommand::Play
        }
    }

    pub fn overlay_visible(&self) -> bool {
        !self.playing
    }
}

impl Reducible for PlaybackState {
    type Action = MediaEvent;

    fn reduce(self: Rc<Self>, event: MediaEvent) -> Rc<Self> {
        let next = match event {
            MediaEvent::Play => PlaybackState { playing: true, ..*self },
            MediaEvent::Pause | MediaEvent::Ended => PlaybackState { playing: false, ..*self },
            MediaEvent::Failed => PlaybackState { playing: false, failed: true },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn issue(video: &HtmlMediaElement, command: MediaCommand) {
    match command {
        MediaCommand::Play => match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    warn!("video refused to play: {:?}", err);
                }
            }),
            Err(err) => warn!("video play failed: {:?}", err),
        },
        MediaCommand::Pause => {
            if let Err(err) = video.pause() {
                warn!("video pause failed: {:?}", err);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaPanelProps {
    pub content: MediaContent,
}

#[function_component(MediaPanel)]
pub fn media_panel(props: &MediaPanelProps) -> Html {
    let playback = use_reducer(PlaybackState::default);
    let video_ref = use_node_ref();
    let section_ref = use_node_ref();
    let in_view = use_reveal_once(section_ref.clone());

    let toggle = {
        let playback = playback.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                issue(&video, playback.command());
            }
        })
    };

    let on_event = |event: MediaEvent| {
        let playback = playback.clone();
        Callback::from(move |_: Event| playback.dispatch(event))
    };
    let onerror = {
        let playback = playback.clone();
        Callback::from(move |_: Event| {
            info!("memory video unavailable, showing fallback");
            playback.dispatch(MediaEvent::Failed);
        })
    };

    let content = &props.content;

    html! {
        <section ref={section_ref} class={classes!("media-panel", in_view.then(|| "is-visible"))}>
            <style>
                {r#"
                    .media-panel {
                        position: relative;
                        padding: 6rem 1rem;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .media-panel.is-visible {
                        opacity: 1;
                        transform: none;
                    }
                    .media-panel__frame {
                        position: relative;
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 0.75rem;
                        overflow: hidden;
                    }
                    .media-panel__frame video {
                        display: block;
                        width: 100%;
                        border-radius: 1rem;
                        cursor: pointer;
                    }
                    .media-panel__overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.25);
                        border: none;
                        border-radius: 1rem;
                        cursor: pointer;
                        color: #fff;
                        transition: background 0.3s;
                    }
                    .media-panel__overlay:hover { background: rgba(0, 0, 0, 0.35); }
                    .media-panel__play {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to right, #ec4899, #f43f5e);
                        box-shadow: 0 10px 30px rgba(236, 72, 153, 0.5);
                    }
                    .media-panel__play .icon { fill: #fff; margin-left: 4px; }
                    .media-panel__caption {
                        margin-top: 1.25rem;
                        text-align: center;
                        font-style: italic;
                        color: var(--text-muted);
                    }
                    .media-panel__fallback {
                        padding: 4rem 2rem;
                        text-align: center;
                        color: var(--text-muted);
                        font-size: 1.1rem;
                    }
                "#}
            </style>
            <div class="glass-card media-panel__frame">
                if playback.failed {
                    <div class="media-panel__fallback">{&content.fallback}</div>
                } else {
                    <>
                    <video
                        ref={video_ref}
                        src={asset_url(&content.video)}
                        poster={content.poster.as_deref().map(asset_url)}
                        playsinline=true
                        preload="metadata"
                        onclick={toggle.clone()}
                        onplay={on_event(MediaEvent::Play)}
                        onpause={on_event(MediaEvent::Pause)}
                        onended={on_event(MediaEvent::Ended)}
                        {onerror}
                    />
                    if playback.overlay_visible() {
                        <button class="media-panel__overlay" onclick={toggle} aria-label="Play video">
                            <span class="media-panel__play">
                                <Play size={32} />
                            </span>
                        </button>
                    }
                    </>
                }
            </div>
            <p class="media-panel__caption">{&content.caption}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<PlaybackState>, event: MediaEvent) -> Rc<PlaybackState> {
        state.reduce(event)
    }

    #[test]
    fn flag_follows_media_events() {
        let state = Rc::new(PlaybackState::default());
        assert!(!state.playing);
        assert!(state.overlay_visible());

        let state = apply(state, MediaEvent::Play);
        assert!(state.playing);
        assert!(!state.overlay_visible());

        let state = apply(state, MediaEvent::Pause);
        assert!(!state.playing);

        let state = apply(state, MediaEvent::Play);
        let state = apply(state, MediaEvent::Ended);
        assert!(!state.playing);
        assert!(state.overlay_visible());
    }

    #[test]
    fn command_depends_on_reported_state_only() {
        let idle = PlaybackState::default();
        assert_eq!(idle.command(), MediaCommand::Play);
        let playing = PlaybackState { playing: true, failed: false };
        assert_eq!(playing.command(), MediaCommand::Pause);
    }

    #[test]
    fn repeated_event_keeps_same_state() {
        let state = apply(Rc::new(PlaybackState::default()), MediaEvent::Play);
        let again = apply(state.clone(), MediaEvent::Play);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn failure_latches_and_stops_playback() {
        let state = apply(Rc::new(PlaybackState::default()), MediaEvent::Play);
        let state = apply(state, MediaEvent::Failed);
        assert!(state.failed);
        assert!(!state.playing);
        let state = apply(state, MediaEvent::Pause);
        assert!(state.failed);
    }
}
