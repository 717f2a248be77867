//! Scroll progress of a tracked region, normalised to `[0, 1]`.
//!
//! Two sources are available: the page position of a section
//! ([`ProgressSource::Page`]) and the internal offset of a scroll container
//! such as the takeover overlay ([`ProgressSource::Overlay`]). Scenes receive
//! one of them and feed it to [`use_scroll_progress`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{viewport_height, Listener};
use super::frame::FrameGate;
use super::math::clamp01;
use super::reduced::Motion;

/// How a page section's travel is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Travel {
    /// 0 when the top enters at the viewport bottom, 1 when the bottom leaves
    /// at the viewport top.
    Through,
    /// Travel of a sticky section: 0 when its top reaches the viewport top,
    /// 1 when its bottom reaches the viewport bottom.
    Pinned,
}

/// Bounding box of a section relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl PageGeometry {
    pub fn progress(&self, travel: Travel) -> f64 {
        match travel {
            Travel::Through => ratio(
                self.viewport_height - self.top,
                self.height + self.viewport_height,
                self.top <= 0.0,
            ),
            Travel::Pinned => ratio(-self.top, self.height - self.viewport_height, self.top <= 0.0),
        }
    }
}

/// Scroll metrics of a scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl OverlayGeometry {
    pub fn progress(&self) -> f64 {
        ratio(
            self.scroll_top,
            self.scroll_height - self.client_height,
            self.scroll_top > 0.0,
        )
    }
}

// A non-positive span has no travel to consume: settle on whichever end the
// region is at.
fn ratio(consumed: f64, span: f64, at_end: bool) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return if at_end { 1.0 } else { 0.0 };
    }
    clamp01(consumed / span)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProgressSource {
    Page { node: NodeRef, travel: Travel },
    Overlay { node: NodeRef },
}

impl ProgressSource {
    pub fn page(node: NodeRef) -> Self {
        Self::Page {
            node,
            travel: Travel::Through,
        }
    }

    pub fn pinned(node: NodeRef) -> Self {
        Self::Page {
            node,
            travel: Travel::Pinned,
        }
    }

    pub fn overlay(node: NodeRef) -> Self {
        Self::Overlay { node }
    }

    /// Current progress, or `None` while the node is not mounted.
    pub fn read(&self) -> Option<f64> {
        match self {
            Self::Page { node, travel } => {
                let el = node.cast::<Element>()?;
                let rect = el.get_bounding_client_rect();
                let geometry = PageGeometry {
                    top: rect.top(),
                    height: rect.height(),
                    viewport_height: viewport_height()?,
                };
                Some(geometry.progress(*travel))
            }
            Self::Overlay { node } => {
                let el = node.cast::<Element>()?;
                let geometry = OverlayGeometry {
                    scroll_top: el.scroll_top() as f64,
                    scroll_height: el.scroll_height() as f64,
                    client_height: el.client_height() as f64,
                };
                Some(geometry.progress())
            }
        }
    }

    fn scroll_container(&self) -> Option<Element> {
        match self {
            Self::Page { .. } => None,
            Self::Overlay { node } => node.cast::<Element>(),
        }
    }
}

/// Value the hook starts from whenever its source or motion setting changes.
/// An unmounted source starts at zero rather than keeping the previous
/// source's value.
pub fn initial_progress(read: Option<f64>, motion: Motion) -> f64 {
    if motion.is_reduced() {
        1.0
    } else {
        read.unwrap_or(0.0)
    }
}

/// Progress of `source`, recomputed at most once per animation frame after
/// scroll or resize. Reduced motion pins it to `1.0`.
#[hook]
pub fn use_scroll_progress(source: ProgressSource, motion: Motion) -> f64 {
    let progress = use_state(|| motion.gate(0.0));

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(source, motion)| {
                let mut listeners = Vec::new();
                let gate: Rc<RefCell<FrameGate<AnimationFrame>>> = Rc::default();

                progress.set(initial_progress(source.read(), *motion));

                if let Some(window) = web_sys::window().filter(|_| !motion.is_reduced()) {
                    let make_callback = || {
                        let gate = gate.clone();
                        let source = source.clone();
                        let progress = progress.clone();
                        Closure::<dyn FnMut()>::new(move || {
                            let frame_gate = gate.clone();
                            let source = source.clone();
                            let progress = progress.clone();
                            gate.borrow_mut().request(move || {
                                request_animation_frame(move |_| {
                                    frame_gate.borrow_mut().fire();
                                    if let Some(p) = source.read() {
                                        progress.set(p);
                                    }
                                })
                            });
                        })
                    };

                    listeners.extend(Listener::new(&window, "scroll", make_callback()));
                    listeners.extend(Listener::new(&window, "resize", make_callback()));
                    if let Some(container) = source.scroll_container() {
                        listeners.extend(Listener::new(&container, "scroll", make_callback()));
                    }
                }

                move || {
                    drop(listeners);
                    let mut gate = gate.borrow_mut();
                    gate.cancel();
                    log::debug!("scroll progress detached, {} events coalesced", gate.coalesced());
                }
            },
            (source, motion),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const HEIGHT: f64 = 2000.0;

    fn at(top: f64) -> PageGeometry {
        PageGeometry {
            top,
            height: HEIGHT,
            viewport_height: VIEWPORT,
        }
    }

    #[test]
    fn through_travel_spans_entry_to_exit() {
        // top at the viewport bottom
        assert_eq!(at(VIEWPORT).progress(Travel::Through), 0.0);
        // bottom at the viewport top
        assert_eq!(at(-HEIGHT).progress(Travel::Through), 1.0);

        let mut last = 0.0;
        let mut top = VIEWPORT;
        while top >= -HEIGHT {
            let p = at(top).progress(Travel::Through);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last, "progress went backwards at top = {top}");
            last = p;
            top -= 10.0;
        }
        assert!((at(VIEWPORT - 1400.0).progress(Travel::Through) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped_far_outside_the_section() {
        assert_eq!(at(50_000.0).progress(Travel::Through), 0.0);
        assert_eq!(at(-50_000.0).progress(Travel::Through), 1.0);
        assert_eq!(at(50_000.0).progress(Travel::Pinned), 0.0);
        assert_eq!(at(-50_000.0).progress(Travel::Pinned), 1.0);
    }

    #[test]
    fn reading_twice_gives_the_same_value() {
        let g = at(-321.0);
        assert_eq!(g.progress(Travel::Through), g.progress(Travel::Through));
        assert_eq!(g.progress(Travel::Pinned), g.progress(Travel::Pinned));
    }

    #[test]
    fn pinned_section_shorter_than_viewport_settles_on_an_end() {
        for top in [300.0, 1.0, 0.0, -1.0, -300.0] {
            for height in [0.0, 400.0, VIEWPORT] {
                let g = PageGeometry {
                    top,
                    height,
                    viewport_height: VIEWPORT,
                };
                let p = g.progress(Travel::Pinned);
                assert!(p == 0.0 || p == 1.0, "top={top} height={height} p={p}");
                assert_eq!(p, if top <= 0.0 { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn pinned_travel_is_linear_in_scroll() {
        assert_eq!(at(0.0).progress(Travel::Pinned), 0.0);
        assert!((at(-600.0).progress(Travel::Pinned) - 0.5).abs() < 1e-9);
        assert_eq!(at(-1200.0).progress(Travel::Pinned), 1.0);
    }

    #[test]
    fn degenerate_geometry_never_yields_nan() {
        let zero = PageGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: 0.0,
        };
        assert!(!zero.progress(Travel::Through).is_nan());
        let nan = PageGeometry {
            top: f64::NAN,
            height: HEIGHT,
            viewport_height: VIEWPORT,
        };
        assert_eq!(nan.progress(Travel::Through), 0.0);
    }

    #[test]
    fn overlay_progress_follows_internal_scroll() {
        let g = |scroll_top| OverlayGeometry {
            scroll_top,
            scroll_height: 3000.0,
            client_height: 1000.0,
        };
        assert_eq!(g(0.0).progress(), 0.0);
        assert_eq!(g(1000.0).progress(), 0.5);
        assert_eq!(g(2000.0).progress(), 1.0);
        assert_eq!(g(2600.0).progress(), 1.0);

        let flat = OverlayGeometry {
            scroll_top: 0.0,
            scroll_height: 600.0,
            client_height: 800.0,
        };
        assert_eq!(flat.progress(), 0.0);
    }

    #[test]
    fn switching_to_an_unmounted_source_starts_from_zero() {
        use crate::motion::takeover::Takeover;

        // the page section was at 0.9 when the overlay took over
        let mut takeover = Takeover::new(0.8);
        takeover.observe(0.9, Motion::Full);
        takeover.set_overlay_progress(initial_progress(None, Motion::Full));
        assert_eq!(takeover.overlay_progress(), Some(0.0));

        assert_eq!(initial_progress(Some(0.4), Motion::Full), 0.4);
        assert_eq!(initial_progress(None, Motion::Reduced), 1.0);
        assert_eq!(initial_progress(Some(0.4), Motion::Reduced), 1.0);
    }
}
