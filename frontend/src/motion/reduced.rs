use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryList;
use yew::prelude::*;

use super::dom::Listener;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether scenes may animate, derived from the platform preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }

    /// Reduced motion jumps straight to the end state.
    pub fn gate(self, progress: f64) -> f64 {
        match self {
            Self::Full => progress,
            Self::Reduced => 1.0,
        }
    }
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok()?
}

/// Tracks `prefers-reduced-motion`, including changes made while the page is open.
#[hook]
pub fn use_reduced_motion() -> Motion {
    let motion = use_state(|| {
        media_query()
            .map(|mql| Motion::from_reduced(mql.matches()))
            .unwrap_or_default()
    });

    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |_| {
                let listener = media_query().and_then(|mql| {
                    let query = mql.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        log::debug!("reduced motion preference changed: {}", query.matches());
                        motion.set(Motion::from_reduced(query.matches()));
                    });
                    Listener::new(&mql, "change", callback)
                });
                move || drop(listener)
            },
            (),
        );
    }

    *motion
}
