use std::borrow::Cow;

use wasm_bindgen::closure::Closure;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat_scene::ChatScene;
use crate::components::lead_modal::LeadModal;
use crate::components::takeover_scene::TakeoverScene;
use crate::components::timeline::ServicesTimeline;
use crate::config;
use crate::i18n::use_lang;
use crate::motion::dom::Listener;
use crate::Route;

/// Window offset that puts an element at `absolute_top` just below the fixed header.
pub fn anchor_target(absolute_top: f64, header_offset: f64) -> f64 {
    (absolute_top - header_offset).max(0.0)
}

pub const SERVICES_ANCHOR: &str = "services";

/// Element id named by a `location.hash` value, percent-decoded.
pub fn anchor_id(hash: &str) -> Option<Cow<'_, str>> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }
    urlencoding::decode(raw).ok().filter(|id| !id.is_empty())
}

/// Scroll so that the element `id` sits below the header. Returns `false` if
/// it is not on the page yet.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("no anchor #{} on the landing page", id);
        return false;
    };
    let absolute_top = el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
    window.scroll_to_with_x_and_y(0.0, anchor_target(absolute_top, config::HEADER_OFFSET_PX));
    true
}

/// Record `#id` in the address bar and scroll to it. Setting the hash is a
/// same-document navigation, so it never reloads the app.
pub fn jump_to_anchor(id: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(id);
    }
    scroll_to_anchor(id);
}

fn scroll_to_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    match anchor_id(&hash) {
        Some(id) => {
            scroll_to_anchor(&id);
        }
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let modal_open = use_state(|| false);

    // Jump to #anchor (or the top) on mount, then follow later hash changes
    use_effect_with_deps(
        move |_| {
            scroll_to_hash();
            let listener = web_sys::window().and_then(|window| {
                Listener::new(&window, "hashchange", Closure::<dyn FnMut()>::new(scroll_to_hash))
            });
            move || drop(listener)
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let open_modal_click = {
        let open_modal = open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(()))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{s.hero_title}</h1>
                    <p class="hero-subtitle">{s.hero_subtitle}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_modal_click.clone()}>{s.hero_cta}</button>
                        <Link<Route> to={Route::Projects} classes="secondary-link">
                            {s.hero_secondary}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <ServicesTimeline />
            <ChatScene />
            <TakeoverScene on_cta={open_modal} />

            <section class="final-cta">
                <h2>{s.form_title}</h2>
                <button class="hero-cta" onclick={open_modal_click}>{s.nav_cta}</button>
            </section>

            <LeadModal open={*modal_open} on_close={close_modal} />
        </div>
    }
}
