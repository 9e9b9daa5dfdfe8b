use stylist::{css, yew::Global};
use yew::prelude::*;

/// Page-wide colors, typography and the shared glass card.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                :root {
                    --text-strong: #111827;
                    --text-muted: #4b5563;
                    --card-bg: rgba(255, 255, 255, 0.05);
                    --card-border: rgba(229, 231, 235, 0.2);
                }
                html, body {
                    margin: 0;
                    padding: 0;
                }
                body {
                    min-height: 100vh;
                    font-family: Georgia, "Times New Roman", serif;
                    background: linear-gradient(to bottom right, #fdf2f8, #fff1f2, #fef2f2);
                    overflow-x: hidden;
                }
                @media (prefers-color-scheme: dark) {
                    :root {
                        --text-strong: #ffffff;
                        --text-muted: #d1d5db;
                        --card-bg: rgba(0, 0, 0, 0.05);
                        --card-border: rgba(55, 65, 81, 0.2);
                    }
                    body {
                        background: linear-gradient(to bottom right, #111827, #1f2937, #111827);
                    }
                }
                .glass-card {
                    backdrop-filter: blur(4px);
                    background: var(--card-bg);
                    border: 1px solid var(--card-border);
                    border-radius: 1.5rem;
                }
                .gradient-text {
                    background: linear-gradient(to right, #ec4899, #f43f5e, #ef4444);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .strong-text {
                    color: var(--text-strong);
                }
            "#)} />
            <style>
                {r#"
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(var(--rise-from, 30px)); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        </>
    }
}
