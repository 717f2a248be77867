use std::rc::Rc;

use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod lead;
mod motion;
mod pages {
    pub mod contacts;
    pub mod landing;
    pub mod not_found;
    pub mod projects;
}
mod components {
    pub mod chat_scene;
    pub mod fallback_image;
    pub mod lead_modal;
    pub mod takeover_scene;
    pub mod timeline;
}

use i18n::{use_lang, Lang, LangContext};
use motion::dom::Listener;
use motion::{DomScrollHost, PageScrollLock};
use pages::landing::{jump_to_anchor, SERVICES_ANCHOR};
use pages::{contacts::Contacts, landing::Landing, not_found::NotFound, projects::Projects};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/contacts")]
    Contacts,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contacts => {
            info!("Rendering Contacts page");
            html! { <Contacts /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let win = window.clone();
                    let scroll_callback = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                        let scroll_top = win.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > config::HEADER_OFFSET_PX);
                    });
                    Listener::new(&window, "scroll", scroll_callback)
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // In-app jump: push `/` through the router when coming from another page,
    // then set the hash so Landing scrolls to it below the header.
    let go_services = {
        let menu_open = menu_open.clone();
        let navigator = use_navigator();
        let on_home = use_route::<Route>() == Some(Route::Home);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if !on_home {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            jump_to_anchor(SERVICES_ANCHOR);
        })
    };

    let switch_lang = {
        let set_lang = lang.set_lang.clone();
        let next = lang.lang.other();
        Callback::from(move |_: MouseEvent| set_lang.emit(next))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"northwind"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#services" class="nav-link" onclick={go_services}>{s.nav_services}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes="nav-link">
                            {s.nav_projects}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contacts} classes="nav-link">
                            {s.nav_contacts}
                        </Link<Route>>
                    </div>
                    <button class="nav-lang-button" onclick={switch_lang}>
                        {s.lang_switch}
                    </button>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contacts} classes="nav-cta-button">
                            {s.nav_cta}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state(i18n::load);
    let scroll_lock = use_memo(|_| PageScrollLock::new(DomScrollHost), ());

    let lang_context = {
        let lang_state = lang.clone();
        LangContext {
            lang: *lang,
            set_lang: Callback::from(move |next: Lang| {
                info!("Switching language to {}", next.code());
                i18n::save(next);
                lang_state.set(next);
            }),
        }
    };

    // keep <html lang> in sync for screen readers and hyphenation
    use_effect_with_deps(
        |lang| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute("lang", lang.code());
            }
            || ()
        },
        *lang,
    );

    html! {
        <ContextProvider<Rc<PageScrollLock>> context={scroll_lock}>
            <ContextProvider<LangContext> context={lang_context}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<LangContext>>
        </ContextProvider<Rc<PageScrollLock>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
