use yew::prelude::*;

use crate::components::icons::{Heart, Quote};
use crate::config::{asset_url, LoveMessageContent, Polaroid};
use crate::motion::reveal::use_reveal_once;

#[derive(Properties, PartialEq)]
pub struct LoveMessageProps {
    pub content: LoveMessageContent,
}

/// Reason cards alternate sides and stagger by 100ms after a 400ms lead-in.
fn reason_style(index: usize) -> String {
    let from = if index % 2 == 0 { -30 } else { 30 };
    format!(
        "--slide-from: {}px; transition-delay: {:.1}s;",
        from,
        0.4 + index as f64 * 0.1
    )
}

fn polaroid_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "polaroid polaroid--left"
    } else {
        "polaroid polaroid--right"
    }
}

fn render_polaroid(index: usize, polaroid: &Polaroid) -> Html {
    html! {
        <div key={index} class={polaroid_class(index)}>
            <div class="polaroid__frame">
                <img src={asset_url(&polaroid.image)} alt={polaroid.alt.clone()} />
                <div class="polaroid__caption">{&polaroid.caption}</div>
            </div>
        </div>
    }
}

#[function_component(LoveMessage)]
pub fn love_message(props: &LoveMessageProps) -> Html {
    let section_ref = use_node_ref();
    let in_view = use_reveal_once(section_ref.clone());
    let content = &props.content;

    html! {
        <section ref={section_ref} class={classes!("love-message", in_view.then(|| "is-visible"))}>
            <style>
                {r#"
                    .love-message {
                        position: relative;
                        padding: 8rem 1rem;
                    }
                    .love-message__glow {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 600px;
                        height: 600px;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        background: rgba(236, 72, 153, 0.05);
                        filter: blur(150px);
                        z-index: 0;
                    }
                    .love-message__inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .polaroid {
                        position: absolute;
                        z-index: 20;
                        opacity: 0;
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .polaroid--left {
                        left: 2rem;
                        top: 4rem;
                        transform: translateX(-100px) rotate(-12deg);
                        transition-delay: 0.2s;
                    }
                    .polaroid--right {
                        right: 2rem;
                        bottom: 4rem;
                        transform: translateX(100px) rotate(12deg);
                        transition-delay: 0.4s;
                    }
                    .is-visible .polaroid--left {
                        opacity: 1;
                        transform: translateX(0) rotate(-8deg);
                    }
                    .is-visible .polaroid--right {
                        opacity: 1;
                        transform: translateX(0) rotate(6deg);
                    }
                    .polaroid__frame {
                        width: 12rem;
                        background: #fff;
                        padding: 0.75rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        transition: transform 0.3s;
                    }
                    .polaroid--left .polaroid__frame:hover { transform: rotate(4deg); }
                    .polaroid--right .polaroid__frame:hover { transform: rotate(-4deg); }
                    .polaroid__frame img {
                        display: block;
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                    }
                    .polaroid__caption {
                        margin-top: 0.5rem;
                        text-align: center;
                        font-size: 0.875rem;
                        font-style: italic;
                        color: #374151;
                    }
                    .quote-card {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.8s, transform 0.8s;
                    }
                    .quote-card .icon {
                        color: rgba(251, 113, 133, 0.5);
                        margin-bottom: 1.5rem;
                    }
                    .quote-card blockquote {
                        font-size: clamp(1.25rem, 3.5vw, 2.25rem);
                        line-height: 1.6;
                        margin: 0 0 1.5rem;
                        color: var(--text-strong);
                    }
                    .quote-card cite {
                        color: var(--text-muted);
                        font-size: 1.1rem;
                    }
                    .reasons-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                        opacity: 0;
                        transition: opacity 0.8s 0.3s;
                    }
                    .reasons-heading h2 {
                        font-size: clamp(1.75rem, 5vw, 3rem);
                        margin: 0 0 1rem;
                        background: linear-gradient(to right, #f59e0b, #eab308, #d97706);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .reasons-heading p {
                        color: var(--text-muted);
                        font-size: 1.1rem;
                    }
                    .reasons {
                        display: grid;
                        gap: 1.5rem;
                    }
                    @media (min-width: 640px) {
                        .reasons { grid-template-columns: 1fr 1fr; }
                    }
                    .reason {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        opacity: 0;
                        transform: translateX(var(--slide-from));
                        transition-property: opacity, transform, border-color;
                        transition-duration: 0.6s;
                    }
                    .reason:hover { border-color: rgba(236, 72, 153, 0.5); }
                    .reason__badge {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(236, 72, 153, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ec4899;
                        transition: transform 0.3s;
                    }
                    .reason:hover .reason__badge { transform: scale(1.1); }
                    .reason__badge .icon { fill: rgba(236, 72, 153, 0.5); }
                    .reason p {
                        margin: 0;
                        font-size: 1.1rem;
                        color: var(--text-strong);
                    }
                    .is-visible .quote-card,
                    .is-visible .reasons-heading,
                    .is-visible .reason {
                        opacity: 1;
                        transform: none;
                    }
                    @media (max-width: 768px) {
                        .polaroid__frame { width: 7.5rem; padding: 0.375rem; }
                        .polaroid--left { left: 0.25rem; top: -3rem; }
                        .polaroid--right { right: 0.25rem; bottom: -4rem; }
                        .polaroid__caption { font-size: 0.6rem; }
                    }
                "#}
            </style>
            <div class="love-message__glow" />
            { for content.polaroids.iter().enumerate().map(|(i, p)| render_polaroid(i, p)) }
            <div class="love-message__inner">
                <div class="glass-card quote-card">
                    <Quote size={40} />
                    <blockquote>{format!("\"{}\"", content.quote)}</blockquote>
                    <cite>{format!("— {}", content.attribution)}</cite>
                </div>
                <div class="reasons-heading">
                    <h2>{&content.heading}</h2>
                    <p>{&content.subheading}</p>
                </div>
                <div class="reasons">
                    { for content.reasons.iter().enumerate().map(|(i, reason)| html! {
                        <div key={i} class="glass-card reason" style={reason_style(i)}>
                            <div class="reason__badge">
                                <Heart size={20} />
                            </div>
                            <p>{reason}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_alternate_sides_and_stagger() {
        assert_eq!(reason_style(0), "--slide-from: -30px; transition-delay: 0.4s;");
        assert_eq!(reason_style(1), "--slide-from: 30px; transition-delay: 0.5s;");
        assert_eq!(reason_style(3), "--slide-from: 30px; transition-delay: 0.7s;");
    }

    #[test]
    fn polaroids_alternate_sides() {
        assert!(polaroid_class(0).ends_with("--left"));
        assert!(polaroid_class(1).ends_with("--right"));
    }
}
