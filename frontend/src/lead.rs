//! Lead form: validation and the pre-filled email draft.
//!
//! Nothing is sent from the site itself. A valid form becomes a `mailto:` link
//! or, on desktops, a Gmail compose URL that the visitor sends themselves.

use thiserror::Error;
use urlencoding::encode;

use crate::i18n::Strings;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub telegram: String,
    pub project_type: String,
    pub budget: String,
    pub timeframe: String,
    pub details: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("name and at least one of email or telegram are required")]
    MissingRequired,
}

impl LeadForm {
    pub fn validate(&self) -> Result<(), LeadError> {
        let has_name = !self.name.trim().is_empty();
        let has_contact = !self.email.trim().is_empty() || !self.telegram.trim().is_empty();
        if has_name && has_contact {
            Ok(())
        } else {
            Err(LeadError::MissingRequired)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn from_form(form: &LeadForm, s: &Strings) -> Result<Self, LeadError> {
        form.validate()?;

        let field = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                s.mail_not_given.to_string()
            } else {
                value.to_string()
            }
        };

        let mut body = format!("{}\n\n", s.mail_greeting);
        for (label, value) in [
            (s.form_name, &form.name),
            (s.form_email, &form.email),
            (s.form_telegram, &form.telegram),
            (s.form_project_type, &form.project_type),
            (s.form_budget, &form.budget),
            (s.form_timeframe, &form.timeframe),
        ] {
            body.push_str(&format!("{}: {}\n", label, field(value)));
        }
        if !form.details.trim().is_empty() {
            body.push_str(&format!("\n{}:\n{}\n", s.form_details, form.details.trim()));
        }

        Ok(Self {
            subject: format!("{} — {}", s.mail_subject, form.name.trim()),
            body,
        })
    }

    pub fn mailto_url(&self, to: &str) -> String {
        mailto(to, &self.subject, &self.body)
    }

    pub fn gmail_url(&self, to: &str) -> String {
        gmail_compose(to, &self.subject, &self.body)
    }
}

pub fn mailto(to: &str, subject: &str, body: &str) -> String {
    format!("mailto:{}?subject={}&body={}", to, encode(subject), encode(body))
}

pub fn gmail_compose(to: &str, subject: &str, body: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
        encode(to),
        encode(subject),
        encode(body)
    )
}

pub fn telegram_url(handle: &str) -> String {
    format!("https://t.me/{}", handle.trim_start_matches('@'))
}

pub fn is_mobile(user_agent: &str) -> bool {
    const MARKERS: [&str; 6] = ["android", "iphone", "ipad", "ipod", "mobile", "opera mini"];
    let ua = user_agent.to_ascii_lowercase();
    MARKERS.iter().any(|m| ua.contains(m))
}

/// Where the submitted draft should go.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// Navigate the current tab to the `mailto:` link.
    Mailto(String),
    /// Open Gmail in a new tab, falling back to the `mailto:` link if blocked.
    Gmail { compose: String, fallback: String },
}

pub fn delivery(draft: &MailDraft, to: &str, user_agent: &str) -> Delivery {
    if is_mobile(user_agent) {
        Delivery::Mailto(draft.mailto_url(to))
    } else {
        Delivery::Gmail {
            compose: draft.gmail_url(to),
            fallback: draft.mailto_url(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Lang};

    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
    const PHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

    #[test]
    fn empty_form_is_rejected() {
        let form = LeadForm::default();
        assert_eq!(form.validate(), Err(LeadError::MissingRequired));
        assert_eq!(
            MailDraft::from_form(&form, strings(Lang::En)),
            Err(LeadError::MissingRequired)
        );
    }

    #[test]
    fn name_alone_is_not_enough() {
        let form = LeadForm {
            name: "A".into(),
            ..LeadForm::default()
        };
        assert!(form.validate().is_err());

        let blank = LeadForm {
            name: "   ".into(),
            email: "a@b.c".into(),
            ..LeadForm::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn name_and_telegram_produce_a_draft() {
        let form = LeadForm {
            name: "A".into(),
            telegram: "@x".into(),
            ..LeadForm::default()
        };
        let s = strings(Lang::En);
        let draft = MailDraft::from_form(&form, s).unwrap();
        assert_eq!(draft.subject, "New project request — A");
        assert!(draft.body.contains("Telegram: @x"));
        assert!(draft.body.contains("Email: not given"));

        let url = draft.mailto_url("hello@studio.test");
        assert!(url.starts_with("mailto:hello@studio.test?subject="));
        assert!(url.contains(&encode(&draft.subject).into_owned()));
        assert!(url.contains(&format!("body={}", encode(&draft.body))));
        assert!(url.contains("%40x"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn details_are_appended_when_given() {
        let form = LeadForm {
            name: "Ира".into(),
            email: "ira@example.com".into(),
            details: "Нужен магазин".into(),
            ..LeadForm::default()
        };
        let draft = MailDraft::from_form(&form, strings(Lang::Ru)).unwrap();
        assert!(draft.body.ends_with("Подробности:\nНужен магазин\n"));
        assert!(draft.gmail_url("a@b.c").starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=a%40b.c&su="));
    }

    #[test]
    fn delivery_depends_on_device() {
        let draft = MailDraft {
            subject: "Hi".into(),
            body: "x & y".into(),
        };
        assert_eq!(
            delivery(&draft, "a@b.c", PHONE),
            Delivery::Mailto("mailto:a@b.c?subject=Hi&body=x%20%26%20y".into())
        );
        match delivery(&draft, "a@b.c", DESKTOP) {
            Delivery::Gmail { compose, fallback } => {
                assert!(compose.contains("su=Hi&body=x%20%26%20y"));
                assert!(fallback.starts_with("mailto:"));
            }
            other => panic!("expected gmail delivery, got {other:?}"),
        }
    }

    #[test]
    fn telegram_links_drop_the_at_sign() {
        assert_eq!(telegram_url("@northwind"), "https://t.me/northwind");
        assert_eq!(telegram_url("northwind"), "https://t.me/northwind");
    }
}
