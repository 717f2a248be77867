use yew::prelude::*;

use crate::config;
use crate::i18n::{use_lang, Strings};
use crate::motion::math::{ease, reveal};
use crate::motion::{use_reduced_motion, use_scroll_progress, Beat, BeatStyle, Phase, ProgressSource, Sequencer, Side};

// (from, to) of each chat message inside the pinned section
const BANDS: [(f64, f64); 5] = [(0.05, 0.20), (0.26, 0.40), (0.46, 0.60), (0.66, 0.80), (0.86, 0.96)];

fn chat_beats(s: &'static Strings) -> Vec<Beat> {
    const IDS: [&str; 5] = ["ask", "offer", "scope", "estimate", "thanks"];
    BANDS
        .iter()
        .zip(s.chat.iter())
        .zip(IDS)
        .enumerate()
        .map(|(i, ((&(from, to), &text), id))| {
            let ours = i % 2 == 1;
            Beat {
                id,
                side: if ours { Side::Us } else { Side::Them },
                style: if ours { BeatStyle::Typed } else { BeatStyle::Bubble },
                text,
                from,
                to,
            }
        })
        .collect()
}

/// Phone mock-up whose messages arrive as the visitor scrolls past it.
#[function_component(ChatScene)]
pub fn chat_scene() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let motion = use_reduced_motion();
    let section = use_node_ref();
    let progress = use_scroll_progress(ProgressSource::pinned(section.clone()), motion);

    let sequencer = use_memo(
        move |_| Sequencer::for_scene("chat scene", chat_beats(s), config::TYPING_LEAD_IN),
        lang.lang,
    );
    let Some(sequencer) = &*sequencer else {
        return html! {};
    };

    let state = if motion.is_reduced() {
        sequencer.finished()
    } else {
        sequencer.evaluate(progress)
    };

    let bubbles = sequencer.beats().iter().zip(&state.beats).map(|(beat, st)| {
        if !st.is_visible() {
            return html! {};
        }
        let side = match beat.side {
            Side::Them => "bubble them",
            Side::Us => "bubble us",
        };
        let text = match beat.style {
            BeatStyle::Bubble => beat.text,
            BeatStyle::Typed | BeatStyle::Code => reveal(beat.text, st.local),
        };
        let shown = ease(st.local * 2.0);
        let style = format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            shown,
            (1.0 - shown) * 12.0
        );
        html! {
            <div class={classes!(side, (st.phase == Phase::Active).then_some("active"))} {style}>
                {text}
            </div>
        }
    });

    html! {
        <section class="chat-section" ref={section}>
            <div class="chat-sticky">
                <div class="scene-copy">
                    <h2>{s.chat_title}</h2>
                    <p>{s.chat_caption}</p>
                </div>
                <div class="phone">
                    <div class="phone-header">{s.chat_contact}</div>
                    <div class="phone-messages">
                        { for bubbles }
                        {
                            if state.is_typing {
                                html! { <div class="bubble typing">{s.typing}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
