use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(2.0)]
    pub stroke_width: f64,
    #[prop_or_default]
    pub class: Classes,
}

fn outline(props: &IconProps, paths: &[&'static str]) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[function_component(Heart)]
pub fn heart(props: &IconProps) -> Html {
    outline(
        props,
        &["M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"],
    )
}

#[function_component(Sparkles)]
pub fn sparkles(props: &IconProps) -> Html {
    outline(
        props,
        &[
            "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
    )
}

#[function_component(PartyPopper)]
pub fn party_popper(props: &IconProps) -> Html {
    outline(
        props,
        &[
            "M5.8 11.3 2 22l10.7-3.79",
            "M4 3h.01",
            "M22 8h.01",
            "M15 2h.01",
            "M22 20h.01",
            "m22 2-2.24.75a2.9 2.9 0 0 0-1.96 3.12c.1.86-.57 1.63-1.45 1.63h-.38c-.86 0-1.6.6-1.76 1.44L14 10",
            "m22 13-.82-.33c-.86-.34-1.82.2-1.98 1.11c-.11.7-.72 1.22-1.43 1.22H17",
            "m11 2 .33.82c.34.86-.2 1.82-1.11 1.98C9.52 4.9 9 5.52 9 6.23V7",
            "M11 13c1.93 1.93 2.83 4.17 2 5-.83.83-3.07-.07-5-2-1.93-1.93-2.83-4.17-2-5 .83-.83 3.07.07 5 2Z",
        ],
    )
}

#[function_component(Quote)]
pub fn quote(props: &IconProps) -> Html {
    outline(
        props,
        &[
            "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
            "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
        ],
    )
}

/// Small play triangle for the video overlay.
#[function_component(Play)]
pub fn play(props: &IconProps) -> Html {
    outline(props, &["M6 3l14 9-14 9V3z"])
}
