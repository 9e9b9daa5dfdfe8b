use yew::prelude::*;

use crate::components::icons::{Heart, Sparkles};
use crate::config::HeroContent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroContent {
        eyebrow,
        headline_accent,
        headline,
        subtext,
    } = &props.content;

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 5rem 1rem;
                    }
                    .hero__glow {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(110px);
                        animation: pulse 3s ease-in-out infinite;
                    }
                    .hero__glow--left {
                        top: 25%;
                        left: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(236, 72, 153, 0.1);
                    }
                    .hero__glow--right {
                        bottom: 25%;
                        right: 25%;
                        width: 20rem;
                        height: 20rem;
                        background: rgba(251, 113, 133, 0.1);
                        animation-delay: -1.5s;
                    }
                    .hero__inner {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero__emblem {
                        position: relative;
                        display: inline-block;
                        margin-bottom: 2rem;
                        color: #ec4899;
                        animation: popIn 0.8s ease-out 0.2s both;
                    }
                    .hero__emblem .icon--heart {
                        fill: #ec4899;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .hero__emblem .icon--sparkles {
                        position: absolute;
                        top: -0.5rem;
                        right: -0.5rem;
                        color: #fb7185;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .hero__heading {
                        animation: riseIn 1s ease-out 0.4s both;
                        --rise-from: 40px;
                    }
                    .hero__eyebrow {
                        display: block;
                        color: #fb7185;
                        font-size: 1.1rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .hero__title {
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        font-weight: 700;
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }
                    .hero__subtext {
                        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
                        color: var(--text-muted);
                        max-width: 42rem;
                        margin: 0 auto;
                        line-height: 1.6;
                        animation: riseIn 0.8s ease-out 0.7s both;
                        --rise-from: 30px;
                    }
                "#}
            </style>
            <div class="hero__glow hero__glow--left" />
            <div class="hero__glow hero__glow--right" />
            <div class="hero__inner">
                <div class="hero__emblem">
                    <Heart size={72} stroke_width={1.0} class={classes!("icon--heart")} />
                    <Sparkles size={22} class={classes!("icon--sparkles")} />
                </div>
                <div class="hero__heading">
                    <span class="hero__eyebrow">{eyebrow}</span>
                    <h1 class="hero__title">
                        <span class="gradient-text">{headline_accent}</span>
                        <br />
                        <span class="strong-text">{headline}</span>
                    </h1>
                </div>
                <p class="hero__subtext">{subtext}</p>
            </div>
        </section>
    }
}
