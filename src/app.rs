mod achievements;
#[cfg(feature = "hydrate")]
mod animate;
mod chat;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::config;
use crate::content::OWNER_NAME;
use crate::ui::{shows_scroll_top, Theme};

use achievements::Achievements;
use chat::ChatWidget;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::Nav;
use projects::Projects;
use skills::Skills;

/// Theme signal pair shared with the nav's toggle control.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    provide_context(ThemeContext { theme, set_theme });

    view! {
        // sets the document title
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <div
                class="min-h-screen bg-gray-900 text-white transition-colors duration-500"
                data-theme=move || theme().as_str()
            >
                <Nav />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ScrollTopButton />
                {config::chat_config().ok().map(|_| view! { <ChatWidget /> })}
            </div>
        </Router>
    }
}

/// Renders the single portfolio page, hero first, then each reveal-armed
/// section in scroll order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Experience />
        <Skills />
        <Projects />
        <Education />
        <Achievements />
        <Contact />
    }
}

#[component]
fn ScrollTopButton() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let scroll_y = {
        let (_, scroll_y) = leptos_use::use_window_scroll();
        scroll_y
    };
    #[cfg(not(feature = "hydrate"))]
    let scroll_y = Signal::derive(|| 0.0);

    let visible = Memo::new(move |_| shows_scroll_top(scroll_y.get()));

    view! {
        {move || {
            visible()
                .then(|| {
                    view! {
                        <button
                            class="fixed bottom-8 right-8 z-50 p-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg hover:scale-110 transition-all duration-300"
                            aria-label="Scroll to top"
                            on:click=|_| scroll_to_top()
                        >
                            "↑"
                        </button>
                    }
                })
        }}
    }
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
