use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::{
    floating_hearts::FloatingHearts,
    footer::Footer,
    hero::Hero,
    love_message::LoveMessage,
    media_panel::MediaPanel,
    question::ValentineQuestion,
};
use crate::config::{PageConfig, SectionId, Variant};

fn render_section(id: SectionId, config: &PageConfig) -> Html {
    match id {
        SectionId::Hero => html! { <Hero content={config.hero.clone()} /> },
        SectionId::Media => match &config.media {
            Some(media) => html! { <MediaPanel content={media.clone()} /> },
            None => html! {},
        },
        SectionId::LoveMessage => html! {
            <LoveMessage content={config.love_message.clone()} />
        },
        SectionId::Question => html! {
            <ValentineQuestion
                question={config.question.clone()}
                celebration={config.celebration.clone()}
                palette={config.palette.clone()}
            />
        },
        SectionId::Footer => html! { <Footer content={config.footer.clone()} /> },
    }
}

/// Shown when the page content itself can't be assembled.
#[function_component(FallbackGreeting)]
pub fn fallback_greeting() -> Html {
    html! {
        <div class="fallback-greeting" style="min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; padding: 2rem;">
            <h1 class="gradient-text">{"Will You Be My Valentine?"}</h1>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ValentinePageProps {
    pub variant: Variant,
}

#[function_component(ValentinePage)]
pub fn valentine_page(props: &ValentinePageProps) -> Html {
    let config = use_context::<Rc<PageConfig>>();
    let Some(config) = config else {
        error!("page config missing from context");
        return html! { <FallbackGreeting /> };
    };

    let sections = match config.sections(props.variant) {
        Ok(sections) => sections,
        Err(err) => {
            error!("cannot lay out {} page: {}", props.variant.name(), err);
            return html! { <FallbackGreeting /> };
        }
    };

    html! {
        <div class="valentine-page" style="position: relative; overflow-x: hidden;">
            <FloatingHearts />
            { for sections.iter().map(|id| render_section(*id, &config)) }
        </div>
    }
}
