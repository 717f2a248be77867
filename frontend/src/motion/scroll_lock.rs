//! Reference-counted body scroll lock.
//!
//! Modals and the takeover overlay freeze the page while they are open. Locks
//! nest: the first acquire pins the body in place, the last release restores
//! the previous body style and scroll offset.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{CssStyleDeclaration, HtmlElement, Window};
use yew::prelude::*;

/// Body style properties touched while locked.
const LOCKED_PROPS: [&str; 7] = ["position", "top", "left", "right", "width", "overflow", "padding-right"];

/// The page the lock operates on.
pub trait ScrollHost {
    fn scroll_offset(&self) -> f64;
    fn scrollbar_width(&self) -> f64;
    fn style(&self, prop: &str) -> String;
    /// An empty value removes the property.
    fn set_style(&self, prop: &str, value: &str);
    fn scroll_to(&self, offset: f64);
}

#[derive(Debug, Default)]
struct Saved {
    offset: f64,
    style: Vec<(&'static str, String)>,
}

#[derive(Debug, Default)]
struct LockState {
    count: usize,
    saved: Option<Saved>,
}

pub struct ScrollLock<H: ScrollHost> {
    host: H,
    state: RefCell<LockState>,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: RefCell::default(),
        }
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.state.borrow().count
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.count() > 0
    }

    pub fn acquire(&self) {
        let mut state = self.state.borrow_mut();
        state.count += 1;
        if state.count > 1 {
            return;
        }

        let offset = self.host.scroll_offset();
        let scrollbar = self.host.scrollbar_width();
        let style = LOCKED_PROPS
            .iter()
            .map(|prop| (*prop, self.host.style(prop)))
            .collect();
        state.saved = Some(Saved { offset, style });

        self.host.set_style("position", "fixed");
        self.host.set_style("top", &format!("-{}px", offset));
        self.host.set_style("left", "0");
        self.host.set_style("right", "0");
        self.host.set_style("width", "100%");
        self.host.set_style("overflow", "hidden");
        if scrollbar > 0.0 {
            self.host.set_style("padding-right", &format!("{}px", scrollbar));
        }
        log::debug!("body scroll locked at {}px", offset);
    }

    /// Returns `false` when there was nothing to release.
    pub fn release(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.count == 0 {
            log::warn!("scroll lock released while not held");
            return false;
        }
        state.count -= 1;
        if state.count > 0 {
            return true;
        }

        if let Some(saved) = state.saved.take() {
            for (prop, value) in &saved.style {
                self.host.set_style(prop, value);
            }
            self.host.scroll_to(saved.offset);
            log::debug!("body scroll restored to {}px", saved.offset);
        }
        true
    }

    /// Acquire for as long as the returned guard lives.
    pub fn guard(self: &Rc<Self>) -> ScrollLockGuard<H> {
        self.acquire();
        ScrollLockGuard { lock: self.clone() }
    }
}

impl<H: ScrollHost> PartialEq for ScrollLock<H> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<H: ScrollHost> {
    lock: Rc<ScrollLock<H>>,
}

impl<H: ScrollHost> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// The document body of the current window.
#[derive(Default)]
pub struct DomScrollHost;

impl DomScrollHost {
    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn body() -> Option<HtmlElement> {
        Self::window()?.document()?.body()
    }

    fn body_style() -> Option<CssStyleDeclaration> {
        Some(Self::body()?.style())
    }
}

impl ScrollHost for DomScrollHost {
    fn scroll_offset(&self) -> f64 {
        Self::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scrollbar_width(&self) -> f64 {
        let Some(window) = Self::window() else {
            return 0.0;
        };
        let inner = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let client = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.client_width() as f64)
            .unwrap_or(inner);
        (inner - client).max(0.0)
    }

    fn style(&self, prop: &str) -> String {
        Self::body_style()
            .and_then(|s| s.get_property_value(prop).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, prop: &str, value: &str) {
        let Some(style) = Self::body_style() else {
            return;
        };
        if value.is_empty() {
            let _ = style.remove_property(prop);
        } else {
            let _ = style.set_property(prop, value);
        }
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(window) = Self::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}

pub type PageScrollLock = ScrollLock<DomScrollHost>;

/// Holds the page lock from the shared context while `active` is true and
/// releases it when `active` turns false or the component unmounts.
#[hook]
pub fn use_scroll_lock(active: bool) {
    let lock = use_context::<Rc<PageScrollLock>>();
    use_effect_with_deps(
        move |active| {
            let guard = match (*active, lock) {
                (true, Some(lock)) => Some(lock.guard()),
                _ => None,
            };
            move || drop(guard)
        },
        active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakePage {
        offset: Cell<f64>,
        scrollbar: f64,
        style: RefCell<BTreeMap<String, String>>,
        scroll_calls: Cell<u32>,
    }

    impl FakePage {
        fn with_style(offset: f64, scrollbar: f64, props: &[(&str, &str)]) -> Self {
            let page = Self {
                offset: Cell::new(offset),
                scrollbar,
                ..Self::default()
            };
            for (k, v) in props {
                page.style.borrow_mut().insert(k.to_string(), v.to_string());
            }
            page
        }

        fn get(&self, prop: &str) -> String {
            self.style.borrow().get(prop).cloned().unwrap_or_default()
        }

        fn snapshot(&self) -> BTreeMap<String, String> {
            self.style.borrow().clone()
        }
    }

    impl ScrollHost for &FakePage {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn scrollbar_width(&self) -> f64 {
            self.scrollbar
        }

        fn style(&self, prop: &str) -> String {
            self.style.borrow().get(prop).cloned().unwrap_or_default()
        }

        fn set_style(&self, prop: &str, value: &str) {
            let mut style = self.style.borrow_mut();
            if value.is_empty() {
                style.remove(prop);
            } else {
                style.insert(prop.to_string(), value.to_string());
            }
        }

        fn scroll_to(&self, offset: f64) {
            self.scroll_calls.set(self.scroll_calls.get() + 1);
            self.offset.set(offset);
        }
    }

    #[test]
    fn nested_round_trip_restores_the_page() {
        let page = FakePage::with_style(1234.0, 15.0, &[("overflow", "auto"), ("color", "red")]);
        let before = page.snapshot();
        let lock = ScrollLock::new(&page);

        lock.acquire();
        assert_eq!(page.get("position"), "fixed");
        assert_eq!(page.get("top"), "-1234px");
        assert_eq!(page.get("padding-right"), "15px");

        // the page "moves" under a fixed body; the second acquire must not recapture
        page.offset.set(0.0);
        lock.acquire();
        assert_eq!(lock.count(), 2);

        assert!(lock.release());
        assert!(lock.is_locked());
        assert_eq!(page.scroll_calls.get(), 0);

        assert!(lock.release());
        assert_eq!(page.snapshot(), before);
        assert_eq!(page.offset.get(), 1234.0);
        assert_eq!(page.scroll_calls.get(), 1);
    }

    #[test]
    fn release_without_acquire_keeps_count_at_zero() {
        let page = FakePage::default();
        let lock = ScrollLock::new(&page);
        assert!(!lock.release());
        assert_eq!(lock.count(), 0);

        lock.acquire();
        assert!(lock.release());
        assert!(!lock.release());
        assert_eq!(lock.count(), 0);
        assert!(page.snapshot().is_empty());
    }

    #[test]
    fn no_padding_without_a_scrollbar() {
        let page = FakePage::with_style(10.0, 0.0, &[]);
        let lock = ScrollLock::new(&page);
        lock.acquire();
        assert_eq!(page.get("padding-right"), "");
        lock.release();
    }

    #[test]
    fn guards_release_on_drop_in_any_order() {
        let page = FakePage::with_style(500.0, 0.0, &[("position", "relative")]);
        let before = page.snapshot();
        let lock = Rc::new(ScrollLock::new(&page));

        let a = lock.guard();
        let b = lock.guard();
        assert_eq!(lock.count(), 2);
        drop(a);
        assert_eq!(page.get("position"), "fixed");
        drop(b);
        assert_eq!(lock.count(), 0);
        assert_eq!(page.snapshot(), before);
        assert_eq!(page.offset.get(), 500.0);
    }

    #[test]
    fn rapid_churn_settles_unlocked() {
        let page = FakePage::with_style(42.0, 8.0, &[]);
        let lock = Rc::new(ScrollLock::new(&page));
        for _ in 0..50 {
            let g = lock.guard();
            let _inner = lock.guard();
            drop(g);
        }
        assert_eq!(lock.count(), 0);
        assert!(page.snapshot().is_empty());
        assert_eq!(page.offset.get(), 42.0);
    }
}
