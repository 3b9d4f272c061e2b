//! Contact section with a controlled form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs mirror `ContactForm` and write every input event back to it. On
//! submit the form is handed to the `ContactSink` found in context (the
//! console handler when none is provided) and cleared once accepted.

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::contact::{ContactError, ContactField, ContactForm, ContactHandler, ContactSink};

#[cfg(all(test, feature = "ssr"))]
#[path = "contact_test.rs"]
mod tests;

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let failure = RwSignal::new(None::<String>);
    let sink = use_context::<ContactSink>().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submit_contact(form, sink.handler()) {
            Ok(_) => failure.set(None),
            // Constraint failures are surfaced by the browser itself.
            Err(ContactError::Missing(_) | ContactError::InvalidEmail(_)) => {}
            Err(e) => failure.set(Some(e.to_string())),
        }
    };

    view! {
        <section id=SectionId::Contact.id() class="contact py-section px-container">
            <h2 class="contact__title text-center">"Contactez-nous"</h2>
            <p class="contact__description text-center">
                "Vous avez des questions ? Des besoins spécifiques ? N'hésitez pas à nous envoyer un message !"
            </p>
            <div class="contact__form-container">
                <form class="contact__form" on:submit=on_submit>
                    <div class="form-group">
                        <label for=ContactField::Name.id() class="form-group__label">
                            {ContactField::Name.label()}
                        </label>
                        <input
                            type="text"
                            id=ContactField::Name.id()
                            name=ContactField::Name.id()
                            class="form-group__input"
                            required=true
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for=ContactField::Email.id() class="form-group__label">
                            {ContactField::Email.label()}
                        </label>
                        <input
                            type="email"
                            id=ContactField::Email.id()
                            name=ContactField::Email.id()
                            class="form-group__input"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group form-group--textarea">
                        <label for=ContactField::Message.id() class="form-group__label">
                            {ContactField::Message.label()}
                        </label>
                        <textarea
                            id=ContactField::Message.id()
                            name=ContactField::Message.id()
                            class="form-group__textarea"
                            rows="6"
                            required=true
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary contact__submit-btn">
                        "Envoyer le message"
                    </button>
                    <Show when=move || failure.with(Option::is_some)>
                        <p class="contact__failure" role="alert">{move || failure.get().unwrap_or_default()}</p>
                    </Show>
                </form>
            </div>
        </section>
    }
}

/// Submit a snapshot of `form` to `handler` and clear the signal once the
/// handler accepts it. The signal is not borrowed while the handler runs.
///
/// # Errors
///
/// Same as [`ContactForm::submit`]; `form` is left untouched.
pub fn submit_contact(form: RwSignal<ContactForm>, handler: &dyn ContactHandler) -> Result<ContactForm, ContactError> {
    let mut draft = form.get_untracked();
    let submitted = draft.submit(handler)?;
    form.set(draft);
    Ok(submitted)
}
