use serde::Deserialize;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::i18n::{use_lang, Lang};

const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const PLACEHOLDER_IMAGE: &str = "/assets/projects/placeholder.svg";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Localized {
    pub en: String,
    pub ru: String,
}

impl Localized {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ru => &self.ru,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub slug: String,
    pub year: u16,
    pub url: Option<String>,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub title: Localized,
    pub summary: Localized,
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>, serde_json::Error> {
    let mut projects: Vec<Project> = serde_json::from_str(json)?;
    projects.sort_by(|a, b| b.year.cmp(&a.year));
    Ok(projects)
}

fn load_projects() -> Vec<Project> {
    parse_projects(PROJECTS_JSON).unwrap_or_else(|e| {
        log::error!("failed to parse projects data: {}", e);
        Vec::new()
    })
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let lang = use_lang();
    let s = lang.strings();
    let projects = use_memo(|_| load_projects(), ());

    let cards = projects.iter().map(|p| {
        html! {
            <article class="project-card" key={p.slug.clone()}>
                <FallbackImage
                    class="project-image"
                    src={p.image.clone()}
                    fallback={PLACEHOLDER_IMAGE}
                    alt={p.title.get(lang.lang).to_string()}
                />
                <div class="project-body">
                    <span class="project-year">{p.year}</span>
                    <h3>{p.title.get(lang.lang)}</h3>
                    <p>{p.summary.get(lang.lang)}</p>
                    <ul class="project-tags">
                        { for p.tags.iter().map(|t| html! { <li>{t}</li> }) }
                    </ul>
                    {
                        if let Some(url) = &p.url {
                            html! {
                                <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="demo-link">
                                    {s.project_visit}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </article>
        }
    });

    html! {
        <div class="projects-page">
            <h1>{s.projects_title}</h1>
            <p class="page-intro">{s.projects_intro}</p>
            {
                if projects.is_empty() {
                    html! { <p>{s.projects_empty}</p> }
                } else {
                    html! { <div class="project-grid">{ for cards }</div> }
                }
            }
        </div>
    }
}
