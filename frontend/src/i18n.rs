use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Ru,
            Lang::Ru => Lang::En,
        }
    }
}

/// A stored choice wins; otherwise Russian browsers get Russian and everyone
/// else English.
pub fn detect(stored: Option<&str>, browser: Option<&str>) -> Lang {
    if let Some(lang) = stored.and_then(Lang::from_code) {
        return lang;
    }
    match browser {
        Some(locale) if locale.to_ascii_lowercase().starts_with("ru") => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn load() -> Lang {
    let window = window();
    let stored = window
        .as_ref()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::LANG_STORAGE_KEY).ok())
        .flatten();
    let browser = window.as_ref().and_then(|w| w.navigator().language());
    detect(stored.as_deref(), browser.as_deref())
}

pub fn save(lang: Lang) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(config::LANG_STORAGE_KEY, lang.code()).is_err() {
                log::warn!("could not persist language preference");
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct LangContext {
    pub lang: Lang,
    pub set_lang: Callback<Lang>,
}

impl LangContext {
    pub fn strings(&self) -> &'static Strings {
        strings(self.lang)
    }
}

/// Current language and its dictionary. Falls back to English outside a provider.
#[hook]
pub fn use_lang() -> LangContext {
    use_context::<LangContext>().unwrap_or_else(|| LangContext {
        lang: Lang::En,
        set_lang: Callback::noop(),
    })
}

pub struct Strings {
    pub nav_projects: &'static str,
    pub nav_contacts: &'static str,
    pub nav_services: &'static str,
    pub nav_cta: &'static str,
    pub lang_switch: &'static str,

    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub hero_secondary: &'static str,

    pub services_title: &'static str,
    pub services: [(&'static str, &'static str); 4],

    pub chat_title: &'static str,
    pub chat_caption: &'static str,
    pub chat_contact: &'static str,
    pub chat: [&'static str; 5],
    pub typing: &'static str,

    pub laptop_title: &'static str,
    pub laptop_caption: &'static str,
    pub terminal: [&'static str; 5],
    pub takeover_hint: &'static str,

    pub projects_title: &'static str,
    pub projects_intro: &'static str,
    pub project_visit: &'static str,
    pub projects_empty: &'static str,

    pub contacts_title: &'static str,
    pub contacts_intro: &'static str,
    pub contacts_telegram: &'static str,
    pub contacts_email: &'static str,
    pub contacts_form: &'static str,

    pub form_title: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_telegram: &'static str,
    pub form_project_type: &'static str,
    pub form_budget: &'static str,
    pub form_timeframe: &'static str,
    pub form_details: &'static str,
    pub form_submit: &'static str,
    pub form_close: &'static str,
    pub form_required: &'static str,
    pub form_sent: &'static str,
    pub project_types: [&'static str; 4],
    pub budgets: [&'static str; 4],
    pub timeframes: [&'static str; 3],

    pub mail_subject: &'static str,
    pub mail_greeting: &'static str,
    pub mail_not_given: &'static str,

    pub not_found: &'static str,
    pub back_home: &'static str,
}

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::Ru => &RU,
    }
}

static EN: Strings = Strings {
    nav_projects: "Projects",
    nav_contacts: "Contacts",
    nav_services: "Services",
    nav_cta: "Start a project",
    lang_switch: "RU",

    hero_title: "Websites and apps that feel alive",
    hero_subtitle: "Northwind is a small design and development studio. We plan, design and ship products for teams that care about details.",
    hero_cta: "Tell us about your project",
    hero_secondary: "See our work",

    services_title: "How we work",
    services: [
        ("Discovery", "A short call and a written brief. We agree on goals, scope and a budget before anything is drawn."),
        ("Design", "Wireframes, then a clickable prototype. You see the product moving before it is built."),
        ("Development", "Fast, accessible front ends and solid back ends, shipped in weekly increments."),
        ("Launch & care", "We release, measure and keep improving. Support plans for as long as you need them."),
    ],

    chat_title: "It starts with a message",
    chat_caption: "Most of our projects begin in a chat window.",
    chat_contact: "Northwind Studio",
    chat: [
        "Hi! We're opening a coffee roastery and need a website.",
        "Hello! Happy to help. Online shop or just a showcase?",
        "A shop, with subscriptions for monthly beans.",
        "Got it. We'll send a brief and a rough estimate today.",
        "Perfect, talk soon ☕",
    ],
    typing: "typing…",

    laptop_title: "Then we build it",
    laptop_caption: "Scroll to watch the launch.",
    terminal: [
        "$ npm create roastery-shop",
        "✔ design system imported",
        "✔ catalog and subscriptions wired up",
        "✔ lighthouse: 100 / 100 / 100 / 100",
        "$ deploy --prod  → https://roastery.example",
    ],
    takeover_hint: "Keep scrolling",

    projects_title: "Selected projects",
    projects_intro: "A few things we designed and built recently.",
    project_visit: "Visit",
    projects_empty: "Projects are on their way.",

    contacts_title: "Let's talk",
    contacts_intro: "Write to us in Telegram or by email, or fill in a short brief and we'll prepare the draft for you.",
    contacts_telegram: "Message us on Telegram",
    contacts_email: "Write an email",
    contacts_form: "Fill in a brief",

    form_title: "Tell us about your project",
    form_name: "Your name",
    form_email: "Email",
    form_telegram: "Telegram",
    form_project_type: "Project type",
    form_budget: "Budget",
    form_timeframe: "Timeframe",
    form_details: "Details",
    form_submit: "Prepare email",
    form_close: "Close",
    form_required: "Please enter your name and an email or Telegram handle.",
    form_sent: "Your email draft is ready. Just press send!",
    project_types: ["Website", "Online shop", "Mobile app", "Something else"],
    budgets: ["Under $5k", "$5k – $15k", "$15k – $50k", "Over $50k"],
    timeframes: ["ASAP", "1–3 months", "Flexible"],

    mail_subject: "New project request",
    mail_greeting: "Hi Northwind! Here is a short brief:",
    mail_not_given: "not given",

    not_found: "This page does not exist.",
    back_home: "Back to the main page",
};

static RU: Strings = Strings {
    nav_projects: "Проекты",
    nav_contacts: "Контакты",
    nav_services: "Услуги",
    nav_cta: "Начать проект",
    lang_switch: "EN",

    hero_title: "Сайты и приложения, которые живут",
    hero_subtitle: "Northwind — небольшая студия дизайна и разработки. Мы планируем, проектируем и запускаем продукты для команд, которым важны детали.",
    hero_cta: "Расскажите о проекте",
    hero_secondary: "Наши работы",

    services_title: "Как мы работаем",
    services: [
        ("Знакомство", "Короткий созвон и письменный бриф. Договариваемся о целях, объёме и бюджете до начала работ."),
        ("Дизайн", "Прототипы, затем кликабельный макет. Вы видите продукт в движении до разработки."),
        ("Разработка", "Быстрый доступный фронтенд и надёжный бэкенд, релизы каждую неделю."),
        ("Запуск и поддержка", "Выпускаем, измеряем и улучшаем. Поддержка столько, сколько нужно."),
    ],

    chat_title: "Всё начинается с сообщения",
    chat_caption: "Большинство наших проектов начинаются в чате.",
    chat_contact: "Студия Northwind",
    chat: [
        "Привет! Мы открываем обжарочную и нам нужен сайт.",
        "Здравствуйте! С радостью поможем. Магазин или витрина?",
        "Магазин, с подпиской на зерно каждый месяц.",
        "Понял. Сегодня пришлём бриф и примерную оценку.",
        "Отлично, до связи ☕",
    ],
    typing: "печатает…",

    laptop_title: "Потом мы его делаем",
    laptop_caption: "Прокрутите, чтобы увидеть запуск.",
    terminal: [
        "$ npm create roastery-shop",
        "✔ дизайн-система подключена",
        "✔ каталог и подписки настроены",
        "✔ lighthouse: 100 / 100 / 100 / 100",
        "$ deploy --prod  → https://roastery.example",
    ],
    takeover_hint: "Прокручивайте дальше",

    projects_title: "Избранные проекты",
    projects_intro: "Несколько вещей, которые мы недавно спроектировали и сделали.",
    project_visit: "Открыть",
    projects_empty: "Проекты скоро появятся.",

    contacts_title: "Давайте обсудим",
    contacts_intro: "Напишите нам в Telegram или на почту, или заполните короткий бриф, и мы подготовим письмо за вас.",
    contacts_telegram: "Написать в Telegram",
    contacts_email: "Написать письмо",
    contacts_form: "Заполнить бриф",

    form_title: "Расскажите о проекте",
    form_name: "Ваше имя",
    form_email: "Email",
    form_telegram: "Telegram",
    form_project_type: "Тип проекта",
    form_budget: "Бюджет",
    form_timeframe: "Сроки",
    form_details: "Подробности",
    form_submit: "Подготовить письмо",
    form_close: "Закрыть",
    form_required: "Укажите имя и email или Telegram.",
    form_sent: "Черновик письма готов. Осталось нажать «Отправить»!",
    project_types: ["Сайт", "Интернет-магазин", "Мобильное приложение", "Другое"],
    budgets: ["До 400 тыс. ₽", "400 тыс. – 1,2 млн ₽", "1,2 – 4 млн ₽", "Более 4 млн ₽"],
    timeframes: ["Срочно", "1–3 месяца", "Гибко"],

    mail_subject: "Новая заявка на проект",
    mail_greeting: "Привет, Northwind! Вот короткий бриф:",
    mail_not_given: "не указано",

    not_found: "Такой страницы нет.",
    back_home: "На главную",
};
