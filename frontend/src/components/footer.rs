use yew::prelude::*;

use crate::components::icons::Heart;
use crate::config::FooterContent;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="page-footer">
            <style>
                {r#"
                    .page-footer {
                        position: relative;
                        padding: 4rem 1rem;
                        text-align: center;
                    }
                    .page-footer__line {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        font-size: 1.1rem;
                        color: var(--text-muted);
                    }
                    .page-footer__line .icon {
                        color: #ec4899;
                        fill: #ec4899;
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .page-footer__caption {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
            <div class="page-footer__line">
                <span>{&props.content.lead}</span>
                <Heart size={20} />
                <span>{&props.content.trail}</span>
            </div>
            <p class="page-footer__caption">{&props.content.caption}</p>
        </footer>
    }
}
