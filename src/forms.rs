//! Enrollment and contact form submission.
//!
//! Both forms are intercepted on submit and never navigate. The decision of
//! what happens is made by [`Intake::submit`], which is pure: a rejected
//! contact submission returns the alert text and nothing on the page changes;
//! an accepted submission returns a [`SuccessPlan`] naming the confirmation
//! panel and the confetti schedule. The browser side only carries that plan
//! out.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use regex_lite::Regex;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, FormData, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::config::PageConfig;
use crate::confetti::{Confetti, element_center};
use crate::dom::{Listener, Mounted, report, require_id};
use crate::error::{LandingError, ValidationError};

/// Characters a browser's `\s` matches. `regex-lite` only knows the ASCII
/// ones, so the patterns spell the full set out.
const BROWSER_SPACE: &str =
    "\t\n\u{b}\u{c}\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}";

fn email_pattern() -> String {
    format!("^[^{BROWSER_SPACE}@]+@[^{BROWSER_SPACE}@]+\\.[^{BROWSER_SPACE}@]+$")
}

fn phone_pattern() -> String {
    format!("^[0-9+\\-{BROWSER_SPACE}()]{{10,}}$")
}

const ENROLLMENT_PANEL: &str = r##"
    <div class="text-center py-12 animate-fadeInUp">
        <div class="w-24 h-24 bg-gradient-to-br from-primary to-secondary rounded-full flex items-center justify-center mx-auto mb-6 animate-bounce">
            <span class="material-symbols-outlined text-5xl text-white">check_circle</span>
        </div>
        <h3 class="text-3xl font-bold mb-4">Welcome to TaskBnb! 🎉</h3>
        <p class="text-xl text-gray-600 mb-6">Your enrollment is complete.</p>
        <p class="text-gray-600 mb-8">We'll send you an email with next steps within the next few minutes.</p>
        <div class="flex flex-col sm:flex-row gap-4 justify-center">
            <a href="#pricing" class="bg-gradient-to-r from-primary to-secondary text-white px-8 py-4 rounded-full text-lg font-semibold hover:scale-105 transition transform shadow-lg">
                View Plans
            </a>
            <a href="#features" class="bg-white text-dark px-8 py-4 rounded-full text-lg font-semibold hover:scale-105 transition transform shadow-lg border-2 border-gray-200">
                Explore Features
            </a>
        </div>
    </div>
"##;

const CONTACT_PANEL: &str = r##"
    <div class="text-center py-12 animate-fadeInUp">
        <div class="w-24 h-24 bg-gradient-to-br from-primary to-secondary rounded-full flex items-center justify-center mx-auto mb-6">
            <span class="material-symbols-outlined text-5xl text-white">check_circle</span>
        </div>
        <h3 class="text-3xl font-bold mb-4">Message Sent! 🎉</h3>
        <p class="text-xl text-gray-600 mb-6">Thanks for reaching out!</p>
        <p class="text-gray-600 mb-8">We'll get back to you within 24 hours.</p>
        <div class="flex flex-col sm:flex-row gap-4 justify-center">
            <a href="#enrollment" class="bg-gradient-to-r from-primary to-secondary text-white px-8 py-4 rounded-full text-lg font-semibold hover:scale-105 transition transform shadow-lg">
                Enroll Now
            </a>
            <a href="https://wa.me/919876543210" target="_blank" class="bg-green-500 text-white px-8 py-4 rounded-full text-lg font-semibold hover:scale-105 transition transform shadow-lg">
                Chat on WhatsApp
            </a>
        </div>
    </div>
"##;

/// Submitted `(name, value)` pairs in form order.
pub type Fields = Vec<(String, String)>;

/// Last value submitted under `name`, matching `Object.fromEntries`.
fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields.iter().rev().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

/// Fields as a JSON object for the submission log line.
#[must_use]
pub fn fields_json(fields: &[(String, String)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (key, value) in fields {
        map.insert(key.clone(), serde_json::Value::String(value.clone()));
    }
    serde_json::Value::Object(map)
}

/// An accepted contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Compiled email and phone patterns.
pub struct ContactValidator {
    email: Regex,
    phone: Regex,
}

impl ContactValidator {
    pub fn new() -> Result<Self, LandingError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|err| LandingError::Config(format!("validation pattern: {err}")))
        };
        Ok(Self { email: compile(&email_pattern())?, phone: compile(&phone_pattern())? })
    }

    /// Presence first, then email shape, then phone shape.
    pub fn validate(&self, fields: &[(String, String)]) -> Result<ContactSubmission, ValidationError> {
        let required = |name: &str| field(fields, name).filter(|value| !value.is_empty());
        let (Some(name), Some(phone), Some(email), Some(message)) =
            (required("name"), required("phone"), required("email"), required("message"))
        else {
            return Err(ValidationError::MissingFields);
        };
        if !self.email.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.phone.is_match(phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(ContactSubmission {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Delays at which success bursts fire: `0, stagger, 2 * stagger, ...`,
/// saturating at `u32::MAX`.
#[must_use]
pub fn burst_delays(count: u32, stagger_ms: u32) -> Vec<u32> {
    (0..count).map(|i| i.saturating_mul(stagger_ms)).collect()
}

/// What an accepted submission does to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessPlan {
    pub panel_html: &'static str,
    pub burst_delays_ms: Vec<u32>,
    /// JSON of the accepted payload, for the log.
    pub payload: String,
}

/// Which of the two page forms a handler serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// Sign-up form; no validation.
    Enrollment,
    /// Contact form; every field required.
    Contact,
}

impl FormKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment-form",
            Self::Contact => "contact-form",
        }
    }

    fn panel(self) -> &'static str {
        match self {
            Self::Enrollment => ENROLLMENT_PANEL,
            Self::Contact => CONTACT_PANEL,
        }
    }

    fn bursts(self, config: &PageConfig) -> u32 {
        match self {
            Self::Enrollment => config.enrollment_bursts,
            Self::Contact => config.contact_bursts,
        }
    }

    /// How this form checks its fields. Only contact compiles validation
    /// patterns.
    pub fn intake(self) -> Result<Intake, LandingError> {
        Ok(match self {
            Self::Enrollment => Intake::Enrollment,
            Self::Contact => Intake::Contact(ContactValidator::new()?),
        })
    }
}

/// A form kind together with whatever it needs to judge a submission.
pub enum Intake {
    /// Accepts any fields.
    Enrollment,
    /// Requires every contact field and checks email and phone shape.
    Contact(ContactValidator),
}

impl Intake {
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Enrollment => FormKind::Enrollment,
            Self::Contact(_) => FormKind::Contact,
        }
    }

    /// Decide the outcome of a submission.
    pub fn submit(&self, fields: &[(String, String)], config: &PageConfig) -> Result<SuccessPlan, ValidationError> {
        let kind = self.kind();
        let payload = match self {
            Self::Enrollment => fields_json(fields).to_string(),
            Self::Contact(validator) => {
                let submission = validator.validate(fields)?;
                serde_json::to_string(&submission).unwrap_or_else(|_| fields_json(fields).to_string())
            }
        };
        Ok(SuccessPlan {
            panel_html: kind.panel(),
            burst_delays_ms: burst_delays(kind.bursts(config), config.burst_stagger_ms),
            payload,
        })
    }
}

struct FormView {
    window: Window,
    form: HtmlFormElement,
    container: HtmlElement,
    confetti: Confetti,
}

impl FormView {
    fn collect(&self) -> Result<Fields, LandingError> {
        let data = FormData::new_with_form(&self.form)?;
        let mut fields = Vec::new();
        let Some(entries) = js_sys::try_iter(&data)? else {
            return Ok(fields);
        };
        for entry in entries {
            let pair: Array = entry?.unchecked_into();
            if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((key, value));
            }
        }
        Ok(fields)
    }

    fn on_submit(&self, intake: &Intake, config: &PageConfig) -> Result<(), LandingError> {
        let kind = intake.kind();
        let fields = self.collect()?;
        let plan = match intake.submit(&fields, config) {
            Ok(plan) => plan,
            Err(rejected) => {
                log::info!("{}: rejected: {rejected}", kind.name());
                self.window.alert_with_message(&rejected.to_string())?;
                return Ok(());
            }
        };

        log::info!("{} submitted: {}", kind.name(), plan.payload);
        self.container.set_inner_html(plan.panel_html);

        let (x, y) = element_center(&self.container);
        for delay in plan.burst_delays_ms {
            let confetti = self.confetti.clone();
            let name = kind.name();
            Timeout::new(delay, move || report(name, confetti.emit(x, y))).forget();
        }

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        self.container.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Submit interception for one form.
pub struct FormHandler {
    kind: FormKind,
    _submit: Listener,
}

impl FormHandler {
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &PageConfig,
        kind: FormKind,
        confetti: &Confetti,
    ) -> Result<Self, LandingError> {
        let name = kind.name();
        let form_id = match kind {
            FormKind::Enrollment => &config.enrollment_form_id,
            FormKind::Contact => &config.contact_form_id,
        };
        let form = require_id(document, name, form_id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| LandingError::missing(name, format!("form#{form_id}")))?;
        let container = form
            .parent_element()
            .and_then(|parent| parent.dyn_ref::<HtmlElement>().cloned())
            .ok_or_else(|| LandingError::missing(name, format!("#{form_id} parent")))?;

        let view = FormView { window: window.clone(), form: form.clone(), container, confetti: confetti.clone() };
        let intake = kind.intake()?;
        let config = config.clone();
        let submit = Listener::new(&form, "submit", move |event| {
            event.prevent_default();
            report(name, view.on_submit(&intake, &config));
        })?;

        log::debug!("{name}: mounted");
        Ok(Self { kind, _submit: submit })
    }
}

impl Mounted for FormHandler {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn dispose(self: Box<Self>) {}
}
