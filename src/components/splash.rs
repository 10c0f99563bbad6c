use yew::prelude::*;

use crate::content::FIRM_NAME;

#[function_component(Splash)]
pub fn splash() -> Html {
    html! {
        <div class="splash">
            <div class="splash-inner">
                <div class="splash-spinner"></div>
                <h2>{FIRM_NAME}</h2>
                <p>{"Loading Excellence..."}</p>
            </div>
            <style>
                {r#"
                    .splash {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #333446 0%, #7F8CAA 100%);
                        z-index: 2000;
                    }
                    .splash-inner {
                        text-align: center;
                        color: #EAEFEF;
                        animation: fadeIn 0.6s ease-out;
                    }
                    .splash-spinner {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 1.5rem;
                        border: 4px solid rgba(184, 207, 206, 0.3);
                        border-top-color: #B8CFCE;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    .splash h2 {
                        font-size: 2rem;
                        margin: 0 0 0.5rem;
                        letter-spacing: 0.02em;
                    }
                    .splash p {
                        color: #B8CFCE;
                        margin: 0;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
