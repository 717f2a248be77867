//! Scroll-driven animation primitives used by the landing scenes.

pub mod dom;
pub mod frame;
pub mod math;
pub mod progress;
pub mod reduced;
pub mod scroll_lock;
pub mod sequencer;
pub mod takeover;

pub use progress::{use_scroll_progress, ProgressSource};
pub use reduced::use_reduced_motion;
pub use scroll_lock::{use_scroll_lock, DomScrollHost, PageScrollLock};
pub use sequencer::{Beat, BeatStyle, Phase, Sequencer, SequencerState, Side};
pub use takeover::{Takeover, Transition};

#[cfg(test)]
mod tests {
    use super::progress::{PageGeometry, Travel};
    use super::reduced::Motion;
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const HEIGHT: f64 = 2000.0;

    // top of the section for a given share of its 2800px travel
    fn top_at(progress: f64) -> f64 {
        VIEWPORT - progress * (HEIGHT + VIEWPORT)
    }

    #[test]
    fn scrolling_through_a_section_drives_a_beat() {
        let seq = Sequencer::new(
            vec![Beat {
                id: "brief",
                side: Side::Them,
                style: BeatStyle::Typed,
                text: "Can you ship by spring?",
                from: 0.2,
                to: 0.5,
            }],
            0.0,
        )
        .unwrap();

        let local_at = |p: f64| {
            let geometry = PageGeometry {
                top: top_at(p),
                height: HEIGHT,
                viewport_height: VIEWPORT,
            };
            let progress = geometry.progress(Travel::Through);
            assert!((progress - p).abs() < 1e-9);
            seq.evaluate(progress).beats[0].local
        };

        assert_eq!(local_at(0.1), 0.0);
        assert!((local_at(0.35) - 0.5).abs() < 1e-9);
        assert_eq!(local_at(0.6), 1.0);
    }

    #[test]
    fn reduced_motion_renders_the_end_state_regardless_of_scroll() {
        let seq = Sequencer::new(
            vec![Beat {
                id: "hello",
                side: Side::Us,
                style: BeatStyle::Typed,
                text: "Hello!",
                from: 0.4,
                to: 0.9,
            }],
            0.05,
        )
        .unwrap();
        let mut takeover = Takeover::new(0.8);
        for p in [0.0, 0.5, 1.0] {
            let gated = Motion::Reduced.gate(p);
            assert_eq!(seq.evaluate(gated), seq.finished());
            assert_eq!(takeover.observe(gated, Motion::Reduced), Transition::None);
        }
    }
}
