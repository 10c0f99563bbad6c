use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{whatsapp_chat_url, FIRM_NAME, WHATSAPP_NUMBER};

const GREETING: &str = "Hello Blacksuit Solicitors, I would like to make a legal inquiry.";

/// Floating chat button pinned to the corner of every page.
#[function_component(WhatsAppWidget)]
pub fn whatsapp_widget() -> Html {
    let open = use_bool_toggle(false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.toggle())
    };

    html! {
        <div class="whatsapp-widget">
            if *open {
                <div class="whatsapp-bubble rise">
                    <div class="whatsapp-bubble-header">
                        <strong>{FIRM_NAME}</strong>
                        <span>{"Typically replies within an hour"}</span>
                    </div>
                    <p>{"Hi there 👋 How can we help you today?"}</p>
                    <a
                        class="btn whatsapp-start"
                        href={whatsapp_chat_url(WHATSAPP_NUMBER, GREETING)}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Start Chat"}
                    </a>
                </div>
            }
            <button
                class={classes!("whatsapp-toggle", (*open).then(|| "open"))}
                aria-label={if *open { "Close chat" } else { "Chat on WhatsApp" }}
                onclick={toggle}
            >
                { if *open { "✕" } else { "💬" } }
            </button>
            <style>
                {r#"
                    .whatsapp-widget {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 12px;
                        z-index: 900;
                    }
                    .whatsapp-toggle {
                        width: 60px;
                        height: 60px;
                        border: none;
                        border-radius: 50%;
                        background: #25D366;
                        color: white;
                        font-size: 1.6rem;
                        cursor: pointer;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        transition: transform 0.2s ease;
                    }
                    .whatsapp-toggle:hover {
                        transform: scale(1.08);
                    }
                    .whatsapp-toggle.open {
                        background: #333446;
                    }
                    .whatsapp-bubble {
                        width: 280px;
                        background: white;
                        border-radius: 16px;
                        padding: 1.25rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.2);
                        color: #333446;
                    }
                    .whatsapp-bubble-header {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 0.75rem;
                    }
                    .whatsapp-bubble-header span {
                        font-size: 0.8rem;
                        color: #7F8CAA;
                    }
                    .whatsapp-start {
                        display: block;
                        text-align: center;
                        background: #25D366;
                        color: white;
                    }
                "#}
            </style>
        </div>
    }
}
