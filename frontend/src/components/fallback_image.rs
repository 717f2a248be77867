use web_sys::HtmlImageElement;
use yew::prelude::*;

const FALLBACK_MARKER: &str = "data-fallback-applied";

/// The source to switch to after a load error, or `None` once the fallback
/// itself has been tried.
pub fn next_src(marker_set: bool, fallback: &str) -> Option<&str> {
    if marker_set || fallback.is_empty() {
        None
    } else {
        Some(fallback)
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub fallback: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let onerror = {
        let fallback = props.fallback.clone();
        Callback::from(move |e: Event| {
            let img: HtmlImageElement = e.target_unchecked_into();
            let marked = img.has_attribute(FALLBACK_MARKER);
            if let Some(src) = next_src(marked, &fallback) {
                log::debug!("image {} failed, using {}", img.src(), src);
                let _ = img.set_attribute(FALLBACK_MARKER, "true");
                img.set_src(src);
            }
        })
    };

    html! {
        <img
            class={props.class.clone()}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            {onerror}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_exactly_once() {
        assert_eq!(next_src(false, "/assets/fallback.png"), Some("/assets/fallback.png"));
        assert_eq!(next_src(true, "/assets/fallback.png"), None);
        assert_eq!(next_src(false, ""), None);
    }
}
