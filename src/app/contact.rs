use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::config;
use crate::contact::{ContactForm, Feedback, FeedbackKind, SubmitFlow};
use crate::content::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, RESUME_PATH};

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let flow = RwSignal::new(SubmitFlow::new());
    let (feedback, set_feedback) = signal(None::<Feedback>);
    let sending = Memo::new(move |_| flow.with(|f| f.is_in_flight()));
    // Submission is disabled outright when the delivery credentials were
    // absent at startup.
    let mail_ready = config::email_config().is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let outbound = match flow.try_update(|f| f.begin(&form)) {
            Some(Ok(outbound)) => outbound,
            // Invalid input or a submission already in flight; the delivery
            // collaborator is never touched.
            _ => return,
        };
        set_feedback(None);
        #[cfg(feature = "hydrate")]
        {
            use crate::contact::{feedback_for, EmailJsMailer, Mailer};

            let Ok(email_config) = config::email_config() else {
                flow.update(|f| f.finish());
                return;
            };
            leptos::task::spawn_local(async move {
                let result = EmailJsMailer::new(email_config).send(&outbound).await;
                if let Err(err) = &result {
                    log::error!("contact submission failed: {err}");
                }
                if result.is_ok() {
                    set_name(String::new());
                    set_email(String::new());
                    set_message(String::new());
                }
                set_feedback(Some(feedback_for(&result)));
                // The in-flight flag clears last, after feedback is visible.
                flow.update(|f| f.finish());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = outbound;
            flow.update(|f| f.finish());
        }
    };

    view! {
        <RevealSection id="contact" class="py-24 bg-gray-800 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-8 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        "Get in Touch"
                    </h2>
                    <p class="text-xl mb-12 text-gray-300">
                        "I'm always interested in hearing about new projects and opportunities. Let's create something amazing together!"
                    </p>
                    <form
                        class="max-w-xl mx-auto mb-12 bg-gradient-to-br from-blue-900/10 to-purple-900/10 p-8 rounded-2xl shadow-lg flex flex-col gap-6"
                        on:submit=on_submit
                    >
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            required
                            class="bg-gray-800 text-white border border-gray-600 rounded-lg px-4 py-3 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=name
                            on:input=move |ev| set_name(event_target_value(&ev))
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            required
                            class="bg-gray-800 text-white border border-gray-600 rounded-lg px-4 py-3 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=email
                            on:input=move |ev| set_email(event_target_value(&ev))
                        />
                        <textarea
                            name="message"
                            placeholder="Your Message"
                            required
                            rows=5
                            class="bg-gray-800 text-white border border-gray-600 rounded-lg px-4 py-3 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=message
                            on:input=move |ev| set_message(event_target_value(&ev))
                        ></textarea>
                        <button
                            type="submit"
                            disabled=move || sending() || !mail_ready
                            class="bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold py-3 rounded-lg shadow-md hover:from-blue-700 hover:to-purple-700 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || if sending() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || {
                            feedback()
                                .map(|fb| {
                                    let class = match fb.kind {
                                        FeedbackKind::Success => "text-green-500 font-semibold",
                                        FeedbackKind::Error => "text-red-500 font-semibold",
                                    };
                                    view! { <div class=class>{fb.text}</div> }
                                })
                        }}
                    </form>
                    <div class="mb-12">
                        <a
                            href=RESUME_PATH
                            download
                            class="inline-flex items-center bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-4 rounded-full font-semibold hover:from-blue-700 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 hover:shadow-xl"
                        >
                            "Download Resume ↓"
                        </a>
                    </div>
                    <div class="flex justify-center space-x-6">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group p-4 rounded-full bg-gradient-to-r from-gray-700 to-gray-600 transition-all duration-300 hover:scale-110 hover:shadow-xl hover:bg-gray-800 text-2xl"
                            aria-label="GitHub"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group p-4 rounded-full bg-gradient-to-r from-gray-700 to-gray-600 transition-all duration-300 hover:scale-110 hover:shadow-xl hover:bg-blue-600 text-2xl"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="group p-4 rounded-full bg-gradient-to-r from-gray-700 to-gray-600 transition-all duration-300 hover:scale-110 hover:shadow-xl hover:bg-red-500 text-2xl"
                            aria-label="Email"
                        >
                            <i class="extra-email"></i>
                        </a>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
