use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::reveal::Reveal;
use crate::contact::{resolve_submission, send_message, ContactForm};
use crate::content::Section;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_message, set_submit_message) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        // the inputs are all `required`, so the browser has already
        // enforced non-empty fields by the time this runs
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting(true);

        let payload = form.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = send_message(&payload).await;
            if let Err(err) = &outcome {
                log::error!("contact form submission failed: {err}");
            }
            let (reset, status) = resolve_submission(&outcome);
            if let Some(cleared) = reset {
                set_form(cleared);
            }
            set_submit_message(status.to_string());
            set_is_submitting(false);
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-950">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center text-gray-100">"Get in Touch"</h2>
                <Reveal>
                    <div class="max-w-2xl mx-auto bg-gray-900 border border-gray-800 rounded-lg shadow">
                        <div class="p-6 pb-0">
                            <h3 class="text-xl font-semibold text-gray-100">"Contact Me"</h3>
                            <p class="text-sm text-gray-400">
                                "Fill out the form below and I'll get back to you as soon as possible."
                            </p>
                        </div>
                        <div class="p-6">
                            <form on:submit=on_submit class="space-y-6">
                                <div>
                                    <label for="name" class="block text-sm font-medium mb-1">
                                        "Name"
                                    </label>
                                    <input
                                        id="name"
                                        name="name"
                                        required
                                        prop:value=move || form().name
                                        on:input=move |ev| {
                                            set_form.update(|f| f.name = event_target_value(&ev))
                                        }
                                        class="w-full px-3 py-2 rounded-md bg-gray-800 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                    />
                                </div>
                                <div>
                                    <label for="email" class="block text-sm font-medium mb-1">
                                        "Email"
                                    </label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        required
                                        prop:value=move || form().email
                                        on:input=move |ev| {
                                            set_form.update(|f| f.email = event_target_value(&ev))
                                        }
                                        class="w-full px-3 py-2 rounded-md bg-gray-800 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                    />
                                </div>
                                <div>
                                    <label for="message" class="block text-sm font-medium mb-1">
                                        "Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required
                                        rows="5"
                                        prop:value=move || form().message
                                        on:input=move |ev| {
                                            set_form.update(|f| f.message = event_target_value(&ev))
                                        }
                                        class="w-full px-3 py-2 rounded-md bg-gray-800 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || is_submitting()
                                    class="w-full bg-teal-500 hover:bg-teal-400 disabled:opacity-60 disabled:pointer-events-none text-gray-950 font-medium px-4 py-2 rounded-md transition-colors"
                                >
                                    {move || if is_submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                                {move || {
                                    let status = submit_message();
                                    (!status.is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="text-green-500 text-center">{status}</p>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
