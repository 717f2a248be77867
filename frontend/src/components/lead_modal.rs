use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::i18n::use_lang;
use crate::lead::{delivery, Delivery, LeadForm, MailDraft};
use crate::motion::use_scroll_lock;

fn open_draft(target: Delivery) {
    let Some(window) = window() else {
        return;
    };
    match target {
        Delivery::Mailto(url) => {
            let _ = window.location().set_href(&url);
        }
        Delivery::Gmail { compose, fallback } => match window.open_with_url_and_target(&compose, "_blank") {
            Ok(Some(_)) => {}
            _ => {
                log::warn!("compose tab blocked, falling back to mailto");
                let _ = window.location().set_href(&fallback);
            }
        },
    }
}

/// Close scheduled after a draft was handed off. Dropping the timer cancels it.
struct AutoClose<T> {
    timer: Option<T>,
}

impl<T> Default for AutoClose<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T> AutoClose<T> {
    fn arm(&mut self, timer: T) {
        self.timer = Some(timer);
    }

    /// Returns whether a close was still pending.
    fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let form = use_state(LeadForm::default);
    let error = use_state(|| None::<&'static str>);
    let sent = use_state(|| false);
    let close_timer = use_mut_ref(AutoClose::<Timeout>::default);

    use_scroll_lock(props.open);

    // a manual close drops the pending auto-close and the sent notice with it
    {
        let form = form.clone();
        let error = error.clone();
        let sent = sent.clone();
        let close_timer = close_timer.clone();
        use_effect_with_deps(
            move |&open| {
                if !open {
                    if close_timer.borrow_mut().cancel() {
                        log::debug!("lead modal closed before the notice timed out");
                    }
                    if *sent {
                        sent.set(false);
                        form.set(LeadForm::default());
                    }
                    error.set(None);
                }
                || ()
            },
            props.open,
        );
    }

    let text_input = |apply: fn(&mut LeadForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let select_input = |apply: fn(&mut LeadForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, select.value());
            form.set(next);
        })
    };

    let on_details = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.details = area.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let sent = sent.clone();
        let close_timer = close_timer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match MailDraft::from_form(&form, s) {
                Err(err) => {
                    log::info!("lead form rejected: {}", err);
                    error.set(Some(s.form_required));
                }
                Ok(draft) => {
                    error.set(None);
                    let user_agent = window()
                        .and_then(|w| w.navigator().user_agent().ok())
                        .unwrap_or_default();
                    open_draft(delivery(&draft, config::CONTACT_EMAIL, &user_agent));
                    sent.set(true);

                    let sent = sent.clone();
                    let form = form.clone();
                    let on_close = on_close.clone();
                    close_timer.borrow_mut().arm(Timeout::new(config::LEAD_NOTICE_MS, move || {
                        sent.set(false);
                        form.set(LeadForm::default());
                        on_close.emit(());
                    }));
                }
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    if !props.open {
        return html! {};
    }

    let options = |items: &[&'static str], selected: &str| -> Html {
        html! {
            <>
                <option value="" selected={selected.is_empty()}>{"—"}</option>
                { for items.iter().map(|item| html! {
                    <option value={*item} selected={*item == selected}>{*item}</option>
                }) }
            </>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="lead-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label={s.form_close} onclick={close}>{"×"}</button>
                <h2>{s.form_title}</h2>
                {
                    if *sent {
                        html! { <p class="lead-sent">{s.form_sent}</p> }
                    } else {
                        html! {
                            <form class="lead-form" {onsubmit}>
                                <label>
                                    {s.form_name}
                                    <input type="text" value={form.name.clone()}
                                        oninput={text_input(|f, v| f.name = v)} />
                                </label>
                                <div class="lead-row">
                                    <label>
                                        {s.form_email}
                                        <input type="email" value={form.email.clone()}
                                            oninput={text_input(|f, v| f.email = v)} />
                                    </label>
                                    <label>
                                        {s.form_telegram}
                                        <input type="text" placeholder="@username" value={form.telegram.clone()}
                                            oninput={text_input(|f, v| f.telegram = v)} />
                                    </label>
                                </div>
                                <div class="lead-row">
                                    <label>
                                        {s.form_project_type}
                                        <select onchange={select_input(|f, v| f.project_type = v)}>
                                            { options(&s.project_types, &form.project_type) }
                                        </select>
                                    </label>
                                    <label>
                                        {s.form_budget}
                                        <select onchange={select_input(|f, v| f.budget = v)}>
                                            { options(&s.budgets, &form.budget) }
                                        </select>
                                    </label>
                                    <label>
                                        {s.form_timeframe}
                                        <select onchange={select_input(|f, v| f.timeframe = v)}>
                                            { options(&s.timeframes, &form.timeframe) }
                                        </select>
                                    </label>
                                </div>
                                <label>
                                    {s.form_details}
                                    <textarea rows="4" value={form.details.clone()} oninput={on_details} />
                                </label>
                                {
                                    if let Some(message) = *error {
                                        html! { <p class="lead-error" role="alert">{message}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <button type="submit" class="hero-cta">{s.form_submit}</button>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Timer(Rc<Cell<u32>>);

    impl Drop for Timer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn closing_by_hand_cancels_the_pending_close() {
        let cancelled = Rc::new(Cell::new(0));
        let mut close = AutoClose::default();
        close.arm(Timer(cancelled.clone()));

        assert!(close.cancel());
        assert_eq!(cancelled.get(), 1);
        // reopening finds nothing left to fire
        assert!(!close.cancel());
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn a_second_submit_replaces_the_first_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut close = AutoClose::default();
        close.arm(Timer(cancelled.clone()));
        close.arm(Timer(cancelled.clone()));
        assert_eq!(cancelled.get(), 1);
        assert!(close.cancel());
        assert_eq!(cancelled.get(), 2);
    }
}
