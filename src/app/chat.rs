use leptos::{ev::KeyboardEvent, prelude::*};

/// Floating chat assistant backed by the generative-text collaborator. Only
/// mounted when the API key was configured at startup; see `App`.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (prompt, set_prompt) = signal(String::new());
    let (reply, set_reply) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let ask = move || {
        if busy.get_untracked() || prompt.get_untracked().trim().is_empty() {
            return;
        }
        set_busy(true);
        #[cfg(feature = "hydrate")]
        {
            let question = prompt.get_untracked();
            leptos::task::spawn_local(async move {
                let answer = match crate::chat::generate_response(&question).await {
                    Ok(text) => text,
                    Err(err) => {
                        log::error!("chat request failed: {err}");
                        crate::chat::FALLBACK_REPLY.to_string()
                    }
                };
                set_reply(Some(answer));
                set_busy(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        set_busy(false);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            ask();
        }
    };

    view! {
        <button
            class="fixed bottom-4 right-4 z-40 bg-blue-500 text-white p-3 rounded-full shadow-lg"
            on:click=move |_| set_open.update(|open| *open = !*open)
        >
            {move || if open() { "Close ChatBot" } else { "Open ChatBot" }}
        </button>
        {move || {
            open()
                .then(|| {
                    view! {
                        <div class="fixed bottom-16 right-4 z-40 p-4 border border-gray-700 rounded-lg shadow-lg bg-gray-800 text-white w-80">
                            <div class="flex justify-between items-center mb-2">
                                <h2 class="text-xl font-bold">"Ask Questions With AI"</h2>
                                <button class="text-red-500" on:click=move |_| set_open(false)>
                                    "Close"
                                </button>
                            </div>
                            <textarea
                                class="w-full p-2 border border-gray-600 rounded mb-2 bg-gray-700 text-white"
                                rows=3
                                placeholder="Type your question..."
                                prop:value=prompt
                                on:input=move |ev| set_prompt(event_target_value(&ev))
                                on:keydown=on_keydown
                            ></textarea>
                            <button
                                class="bg-blue-500 text-white px-4 py-2 rounded disabled:opacity-60"
                                disabled=busy
                                on:click=move |_| ask()
                            >
                                {move || if busy() { "Generating..." } else { "Ask AI" }}
                            </button>
                            {move || {
                                reply()
                                    .map(|text| {
                                        view! {
                                            <p class="mt-4 p-2 border border-gray-600 rounded bg-gray-700">
                                                {text}
                                            </p>
                                        }
                                    })
                            }}
                        </div>
                    }
                })
        }}
    }
}
