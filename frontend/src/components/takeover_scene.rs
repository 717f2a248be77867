//! Laptop scene that takes over the viewport.
//!
//! While idle the laptop scales in with the page. Past
//! [`config::TAKEOVER_THRESHOLD`] the scene locks page scrolling, mounts a
//! full-screen overlay on `<body>` and plays the terminal from the overlay's
//! own scroll position. The overlay stays until the scene unmounts.

use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::i18n::{use_lang, Strings};
use crate::motion::math::{lerp, reveal};
use crate::motion::{
    use_reduced_motion, use_scroll_lock, use_scroll_progress, Beat, BeatStyle, Phase, ProgressSource, Sequencer,
    SequencerState, Side, Takeover, Transition,
};
use crate::Route;

fn terminal_beats(s: &'static Strings) -> Vec<Beat> {
    const IDS: [&str; 5] = ["create", "design", "catalog", "audit", "deploy"];
    let n = s.terminal.len() as f64;
    s.terminal
        .iter()
        .zip(IDS)
        .enumerate()
        .map(|(i, (&text, id))| {
            let from = 0.05 + 0.8 * i as f64 / n;
            Beat {
                id,
                side: Side::Us,
                style: BeatStyle::Code,
                text,
                from,
                // each line types out over 80% of its slot, then the cursor waits
                to: from + 0.8 * 0.8 / n,
            }
        })
        .collect()
}

fn render_terminal(sequencer: &Sequencer, state: &SequencerState) -> Html {
    let lines = sequencer.beats().iter().zip(&state.beats).map(|(beat, st)| {
        if st.phase == Phase::Pending || st.phase == Phase::Typing {
            return html! {};
        }
        let cursor = (st.phase == Phase::Active).then_some("cursor");
        html! {
            <div class={classes!("terminal-line", cursor)}>{reveal(beat.text, st.local)}</div>
        }
    });
    html! {
        <div class="terminal">
            { for lines }
        </div>
    }
}

fn laptop(content: Html, style: String) -> Html {
    html! {
        <div class="laptop" {style}>
            <div class="laptop-screen">{content}</div>
            <div class="laptop-base"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TakeoverSceneProps {
    pub on_cta: Callback<()>,
}

#[function_component(TakeoverScene)]
pub fn takeover_scene(props: &TakeoverSceneProps) -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let motion = use_reduced_motion();
    let section = use_node_ref();
    let overlay = use_node_ref();
    let takeover = use_mut_ref(|| Takeover::new(config::TAKEOVER_THRESHOLD));
    let active = use_state_eq(|| false);
    let overlay_progress = use_state_eq(|| 0.0);

    use_scroll_lock(*active);

    // Fresh overlay always starts from its top.
    {
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |active| {
                if *active {
                    if let Some(el) = overlay.cast::<Element>() {
                        el.set_scroll_top(0);
                    }
                }
                || ()
            },
            *active,
        );
    }

    let source = if *active {
        ProgressSource::overlay(overlay.clone())
    } else {
        ProgressSource::pinned(section.clone())
    };
    let progress = use_scroll_progress(source, motion);

    {
        let takeover = takeover.clone();
        let active = active.clone();
        let overlay_progress = overlay_progress.clone();
        use_effect_with_deps(
            move |&(progress, motion)| {
                let mut takeover = takeover.borrow_mut();
                if takeover.is_active() {
                    takeover.set_overlay_progress(progress);
                    overlay_progress.set(takeover.overlay_progress().unwrap_or(0.0));
                } else if takeover.observe(progress, motion) == Transition::Activated {
                    log::debug!("laptop scene took over the viewport at {:.2}", progress);
                    active.set(true);
                }
                || ()
            },
            (progress, motion),
        );
    }

    let sequencer = use_memo(
        move |_| Sequencer::for_scene("laptop scene", terminal_beats(s), 0.0),
        lang.lang,
    );
    let Some(sequencer) = &*sequencer else {
        return html! {};
    };

    if motion.is_reduced() {
        let terminal = render_terminal(sequencer, &sequencer.finished());
        return html! {
            <section class="laptop-section static" ref={section}>
                <div class="scene-copy">
                    <h2>{s.laptop_title}</h2>
                </div>
                { laptop(terminal, String::new()) }
            </section>
        };
    }

    let on_cta = {
        let on_cta = props.on_cta.clone();
        Callback::from(move |_: MouseEvent| on_cta.emit(()))
    };

    let takeover_layer = if *active {
        let state = sequencer.evaluate(*overlay_progress);
        let finished = state.beats.iter().all(|b| b.phase == Phase::Done);
        let layer = html! {
            <div class="takeover-overlay" ref={overlay}>
                <div class="takeover-track">
                    <div class="takeover-sticky">
                        { laptop(render_terminal(sequencer, &state), String::new()) }
                        {
                            if finished {
                                html! {
                                    <div class="takeover-actions">
                                        <button class="hero-cta" onclick={on_cta}>{s.hero_cta}</button>
                                        <Link<Route> to={Route::Projects} classes="secondary-link">
                                            {s.hero_secondary}
                                        </Link<Route>>
                                    </div>
                                }
                            } else {
                                html! { <p class="takeover-hint">{s.takeover_hint}</p> }
                            }
                        }
                    </div>
                </div>
            </div>
        };
        match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => create_portal(layer, body.into()),
            None => html! {},
        }
    } else {
        html! {}
    };

    // Before the takeover the laptop grows into place with the page.
    let scale = lerp(0.82, 1.0, progress / config::TAKEOVER_THRESHOLD);
    let idle_laptop = laptop(
        html! { <div class="terminal"><div class="terminal-line cursor"></div></div> },
        format!("transform: scale({:.3});", scale),
    );

    html! {
        <section class="laptop-section" ref={section}>
            <div class="laptop-sticky">
                <div class="scene-copy">
                    <h2>{s.laptop_title}</h2>
                    <p>{s.laptop_caption}</p>
                </div>
                { idle_laptop }
            </div>
            { takeover_layer }
        </section>
    }
}
