use leptos::prelude::*;

use super::ThemeContext;
use crate::content::OWNER_NAME;

static NAV_LINKS: &[(&str, &str)] = &[
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    view! {
        <nav class="bg-gray-800/95 backdrop-blur-md shadow-lg fixed w-full z-50 border-b border-gray-700">
            <div class="container mx-auto px-6">
                <div class="flex justify-between items-center h-16">
                    <a href="#" class="text-xl font-bold text-white hover:text-blue-400 transition-colors">
                        {OWNER_NAME}
                    </a>
                    <div class="flex items-center gap-4">
                        <button
                            class="text-gray-300 hover:text-white transition-colors"
                            aria-label=move || theme().toggle_label()
                            on:click=move |_| set_theme(theme.get_untracked().toggled())
                        >
                            {move || theme().icon()}
                        </button>
                        <button
                            class="md:hidden transition-transform duration-200 hover:scale-110"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                        <div class="hidden md:flex items-center space-x-8">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="text-gray-300 hover:text-white transition-all duration-300"
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                {move || {
                    menu_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden py-4">
                                    <div class="flex flex-col space-y-4">
                                        {NAV_LINKS
                                            .iter()
                                            .map(|(href, label)| {
                                                view! {
                                                    <a
                                                        href=*href
                                                        class="text-gray-300 hover:text-white transition-colors"
                                                        on:click=move |_| set_menu_open(false)
                                                    >
                                                        {*label}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
