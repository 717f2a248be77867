use yew::prelude::*;

use crate::components::lead_modal::LeadModal;
use crate::config;
use crate::i18n::use_lang;
use crate::lead::{gmail_compose, telegram_url};

#[function_component(Contacts)]
pub fn contacts() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    let email_link = gmail_compose(config::CONTACT_EMAIL, s.mail_subject, s.mail_greeting);

    html! {
        <div class="contacts-page">
            <h1>{s.contacts_title}</h1>
            <p class="page-intro">{s.contacts_intro}</p>
            <div class="contact-options">
                <a class="contact-card" href={telegram_url(config::TELEGRAM_HANDLE)}
                    target="_blank" rel="noopener noreferrer">
                    <span class="contact-label">{s.contacts_telegram}</span>
                    <span class="contact-value">{format!("@{}", config::TELEGRAM_HANDLE)}</span>
                </a>
                <a class="contact-card" href={email_link} target="_blank" rel="noopener noreferrer">
                    <span class="contact-label">{s.contacts_email}</span>
                    <span class="contact-value">{config::CONTACT_EMAIL}</span>
                </a>
                <button class="contact-card" onclick={open_modal}>
                    <span class="contact-label">{s.contacts_form}</span>
                </button>
            </div>
            <LeadModal open={*modal_open} on_close={close_modal} />
        </div>
    }
}
