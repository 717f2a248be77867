use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_lang;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let s = use_lang().strings();
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{s.not_found}</p>
            <Link<Route> to={Route::Home} classes="secondary-link">{s.back_home}</Link<Route>>
        </div>
    }
}
