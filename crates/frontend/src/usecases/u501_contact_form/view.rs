use super::validation::{
    counter_status, counter_text, is_allowed_name_input, remaining_chars, validate_contact,
    ContactValues, Purpose, NAME_INPUT_ERROR, SUBMIT_ERROR,
};
use crate::shared::config::config;
use contracts::shared::form_errors::FormErrorLog;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

fn radio_id(purpose: Purpose) -> String {
    format!("purpose-{}", purpose.value())
}

/// Element id that receives focus for an invalid field
fn focus_target(field: &str) -> String {
    match field {
        "purpose" => radio_id(Purpose::Feedback),
        other => other.to_string(),
    }
}

fn focus_by_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = element.focus();
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let cfg = &config().contact;
    let max_len = cfg.message_max_len;
    let warn_at = cfg.message_warn_remaining;
    let inline_error_ms = cfg.inline_error_ms;
    let purpose_info_ms = cfg.purpose_info_ms;

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let inline_error = RwSignal::new(None::<&'static str>);
    let name_flash = RwSignal::new(false);
    let purpose_info = RwSignal::new(None::<&'static str>);
    let submit_error = RwSignal::new(None::<&'static str>);
    // Bumped on every show so only the latest timer hides the message.
    let inline_error_gen = StoredValue::new(0u32);
    let purpose_info_gen = StoredValue::new(0u32);

    let error_log = StoredValue::new(FormErrorLog::new());
    let errors_json = RwSignal::new(error_log.with_value(|l| l.to_json()));
    let dialog_ref = NodeRef::<html::Dialog>::new();

    let remaining = Memo::new(move |_| message.with(|m| remaining_chars(max_len, m)));

    let flash_inline_error = move |msg: &'static str| {
        inline_error.set(Some(msg));
        inline_error_gen.update_value(|g| *g += 1);
        let generation = inline_error_gen.get_value();
        spawn_local(async move {
            TimeoutFuture::new(inline_error_ms).await;
            if inline_error_gen.get_value() == generation {
                inline_error.set(None);
            }
        });
    };

    let select_purpose = move |p: Purpose| {
        purpose.set(p.value().to_string());
        purpose_info.set(Some(p.description()));
        purpose_info_gen.update_value(|g| *g += 1);
        let generation = purpose_info_gen.get_value();
        spawn_local(async move {
            TimeoutFuture::new(purpose_info_ms).await;
            if purpose_info_gen.get_value() == generation {
                purpose_info.set(None);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = ContactValues {
            name: name.get_untracked(),
            email: email.get_untracked(),
            purpose: purpose.get_untracked(),
            message: message.get_untracked(),
        };
        let errors = validate_contact(&values, max_len, chrono::Utc::now());
        let first_invalid = errors.first().map(|e| e.field.clone());

        if !errors.is_empty() {
            error_log.update_value(|l| {
                if let Some(attempt) = l.record_attempt(errors) {
                    log::warn!("Contact form attempt {} blocked by validation", attempt);
                }
            });
        }
        errors_json.set(error_log.with_value(|l| l.to_json()));

        match first_invalid {
            Some(field) => {
                submit_error.set(Some(SUBMIT_ERROR));
                focus_by_id(&focus_target(&field));
            }
            None => {
                submit_error.set(None);
                if let Some(dialog) = dialog_ref.get() {
                    let _ = dialog.show_modal();
                }
                name.set(String::new());
                email.set(String::new());
                purpose.set(String::new());
                message.set(String::new());
            }
        }
    };

    view! {
        <form class="form contact-form" novalidate=true on:submit=on_submit>
            <h2 class="form__title">"Contact me"</h2>

            <div class="form__group">
                <label class="form__label" for="name">"Name"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    class="form__input"
                    class:flash=move || name_flash.get()
                    prop:value=move || name.get()
                    on:beforeinput=move |ev| {
                        let Some(data) = ev.data() else { return };
                        if is_allowed_name_input(&data) {
                            return;
                        }
                        ev.prevent_default();
                        name_flash.set(true);
                        spawn_local(async move {
                            TimeoutFuture::new(150).await;
                            name_flash.set(false);
                        });
                        flash_inline_error(NAME_INPUT_ERROR);
                    }
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <output
                    id="inline-error"
                    class="form__inline-error"
                    class:visible=move || inline_error.get().is_some()
                >
                    {move || inline_error.get().unwrap_or_default()}
                </output>
            </div>

            <div class="form__group">
                <label class="form__label" for="email">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    class="form__input"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <fieldset class="form__group form__radio-group">
                <legend class="form__label">"Purpose"</legend>
                {Purpose::all()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <label class="form__radio-wrapper" for=radio_id(p)>
                                <input
                                    id=radio_id(p)
                                    type="radio"
                                    name="purpose"
                                    class="form__radio"
                                    value=p.value()
                                    prop:checked=move || purpose.get() == p.value()
                                    on:change=move |_| select_purpose(p)
                                />
                                {p.label()}
                            </label>
                        }
                    })
                    .collect_view()}
                <output
                    id="form-info"
                    class="form__info"
                    class:visible=move || purpose_info.get().is_some()
                >
                    {move || purpose_info.get().unwrap_or_default()}
                </output>
            </fieldset>

            <div class="form__group">
                <label class="form__label" for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    class="form__textarea"
                    rows=6
                    maxlength=max_len
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <p
                    id="message-counter"
                    class=move || counter_status(remaining.get(), warn_at).css_class()
                >
                    {move || counter_text(remaining.get())}
                </p>
            </div>

            <input type="hidden" id="form-errors" name="form-errors" prop:value=move || errors_json.get() />

            <output
                id="submit-error"
                class="form__error"
                class:visible=move || submit_error.get().is_some()
            >
                {move || submit_error.get().unwrap_or_default()}
            </output>

            <div class="form__actions">
                <button type="submit" class="button button--primary">"Send"</button>
            </div>
        </form>

        <dialog id="submitted-dialog" class="dialog" node_ref=dialog_ref>
            <p>"Thanks! Your message has been sent."</p>
            <form method="dialog">
                <button class="button button--secondary">"Close"</button>
            </form>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_target() {
        assert_eq!(focus_target("email"), "email");
        assert_eq!(focus_target("purpose"), "purpose-feedback");
    }

    #[test]
    fn test_radio_ids_are_unique_per_purpose() {
        let ids: Vec<String> = Purpose::all().into_iter().map(radio_id).collect();
        assert_eq!(
            ids,
            vec!["purpose-feedback", "purpose-question", "purpose-request", "purpose-other"]
        );
    }
}
