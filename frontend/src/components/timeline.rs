use yew::prelude::*;

use crate::i18n::{use_lang, Strings};
use crate::pages::landing::SERVICES_ANCHOR;
use crate::motion::{use_reduced_motion, use_scroll_progress, Beat, BeatStyle, Phase, ProgressSource, Sequencer, Side};

fn steps(s: &'static Strings) -> Vec<Beat> {
    const IDS: [&str; 4] = ["discovery", "design", "development", "launch"];
    let n = s.services.len() as f64;
    s.services
        .iter()
        .zip(IDS)
        .enumerate()
        .map(|(i, (&(_, text), id))| Beat {
            id,
            side: Side::Us,
            style: BeatStyle::Bubble,
            text,
            // the middle half of the section's travel is split evenly between steps
            from: 0.25 + 0.5 * i as f64 / n,
            to: 0.25 + 0.5 * (i + 1) as f64 / n,
        })
        .collect()
}

/// "How we work" steps, highlighted one after another while the list
/// crosses the viewport.
#[function_component(ServicesTimeline)]
pub fn services_timeline() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let motion = use_reduced_motion();
    let section = use_node_ref();
    let progress = use_scroll_progress(ProgressSource::page(section.clone()), motion);

    let sequencer = use_memo(move |_| Sequencer::for_scene("services timeline", steps(s), 0.0), lang.lang);
    let state = match &*sequencer {
        Some(seq) if motion.is_reduced() => Some(seq.finished()),
        Some(seq) => Some(seq.evaluate(progress)),
        None => None,
    };

    let items = s.services.iter().enumerate().map(|(i, (title, description))| {
        let phase = state
            .as_ref()
            .and_then(|st| st.beats.get(i))
            .map(|b| b.phase)
            .unwrap_or(Phase::Done);
        let class = match phase {
            Phase::Active => "timeline-step active",
            Phase::Done => "timeline-step done",
            Phase::Pending | Phase::Typing => "timeline-step",
        };
        html! {
            <li {class}>
                <span class="timeline-index">{format!("0{}", i + 1)}</span>
                <div>
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                </div>
            </li>
        }
    });

    html! {
        <section id={SERVICES_ANCHOR} class="services-section" ref={section}>
            <h2>{s.services_title}</h2>
            <ol class="timeline">
                { for items }
            </ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Lang};

    #[test]
    fn steps_tile_the_middle_of_the_section() {
        let seq = Sequencer::new(steps(strings(Lang::En)), 0.0).unwrap();
        assert!(seq.band_issues().is_empty());
        assert_eq!(seq.beats()[0].from, 0.25);
        assert_eq!(seq.beats()[3].to, 0.75);
    }

    #[test]
    fn exactly_one_step_is_highlighted_inside_the_band() {
        let seq = Sequencer::new(steps(strings(Lang::Ru)), 0.0).unwrap();
        for i in 25..75 {
            let state = seq.evaluate(i as f64 / 100.0);
            let active = state.beats.iter().filter(|b| b.phase == Phase::Active).count();
            assert_eq!(active, 1, "at {i}%");
        }
        assert_eq!(seq.evaluate(0.1).active_index, None);
        assert!(seq.evaluate(0.9).beats.iter().all(|b| b.phase == Phase::Done));
    }
}
