//! Contact form wired to the email relay.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::config::{FORM_ERROR_DISPLAY_MS, FORM_SUCCESS_DISPLAY_MS, RelayConfig};
use crate::content::site::{BUDGET_OPTIONS, PROJECT_TYPE_OPTIONS};
use crate::net::relay::EmailRelay;
use crate::state::contact::{self, Field, SubmitFinish, SubmitStart, TemplateParams};
use crate::util::timing::run_after;

fn schedule_banner_dismiss(form: RwSignal<contact::ContactForm>, token: u64) {
    run_after(FORM_ERROR_DISPLAY_MS, move || {
        form.update(|f| {
            f.banner.dismiss(token);
        });
    });
}

fn schedule_success_revert(form: RwSignal<contact::ContactForm>, token: u64) {
    run_after(FORM_SUCCESS_DISPLAY_MS, move || {
        form.update(|f| {
            f.revert_success(token);
        });
    });
}

/// Send `params` through `relay` and record the outcome on `form`.
///
/// Returns the follow-up the caller scheduled, or `None` if the form's
/// owner was disposed while the request was in flight.
pub async fn deliver<R: EmailRelay>(
    relay: &R,
    config: &RelayConfig,
    form: RwSignal<contact::ContactForm>,
    params: TemplateParams,
) -> Option<SubmitFinish> {
    let outcome = relay.send(config, &params).await;
    match &outcome {
        Ok(response) => log::info!("message sent: {} {}", response.status, response.text),
        Err(err) => log::error!("message send failed: {err}"),
    }
    let finish = form.try_update(|f| f.finish(outcome, &config.contact_email))?;
    match finish {
        SubmitFinish::Sent { revert_token } => schedule_success_revert(form, revert_token),
        SubmitFinish::Failed { banner_token } => schedule_banner_dismiss(form, banner_token),
    }
    Some(finish)
}

/// Validate the form and, if it passes, hand back the relay payload.
/// Rejections schedule their own banner dismissal.
pub fn begin_submit(form: RwSignal<contact::ContactForm>, config: &RelayConfig) -> Option<TemplateParams> {
    match form.try_update(|f| f.begin_submit(&config.contact_email))? {
        SubmitStart::Send(params) => Some(params),
        SubmitStart::Rejected { banner_token } => {
            schedule_banner_dismiss(form, banner_token);
            None
        }
        SubmitStart::Busy => None,
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = StoredValue::new(RelayConfig::from_build_env());
    let form = RwSignal::new(contact::ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(params) = config.with_value(|c| begin_submit(form, c)) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            deliver(&crate::net::relay::EmailJsRelay, &config, form, params).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = params;
    };

    let button = move || form.with(|f| f.submit.button());
    let banner = move || {
        form.with(|f| f.banner.message().map(str::to_owned))
            .map(|message| view! { <div class="form-error">{message}</div> })
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate on:submit=on_submit>
            {banner}
            <div class="form-row">
                <TextField label="Name *" kind="text" field=Field::Name form=form />
                <TextField label="Email *" kind="email" field=Field::Email form=form />
            </div>
            <TextField label="Company" kind="text" field=Field::Company form=form />
            <div class="form-row">
                <SelectField label="Budget" options=BUDGET_OPTIONS field=Field::Budget form=form />
                <SelectField label="Project Type" options=PROJECT_TYPE_OPTIONS field=Field::ProjectType form=form />
            </div>
            <div class="form-group">
                <label for="message">"Message *"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| form.update(|f| f.fields.set(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            <button
                class="btn btn-primary form-submit"
                type="submit"
                disabled=move || button().disabled
                class:success=move || button().success
                style:opacity=move || if button().dimmed { "0.7" } else { "1" }
            >
                <span class="btn-text">{move || button().label}</span>
            </button>
        </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    kind: &'static str,
    field: Field,
    form: RwSignal<contact::ContactForm>,
) -> impl IntoView {
    let name = field.name();
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=kind
                prop:value=move || form.with(|f| f.fields.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.fields.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    field: Field,
    form: RwSignal<contact::ContactForm>,
) -> impl IntoView {
    let name = field.name();
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <select
                id=name
                name=name
                prop:value=move || form.with(|f| f.fields.get(field).to_owned())
                on:change=move |ev| form.update(|f| f.fields.set(field, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect_view()}
            </select>
        </div>
    }
}
