use leptos::{html, prelude::*};

use crate::content::{
    CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER_INTRO, OWNER_NAME, OWNER_TAGLINE,
    PROFILE_IMAGE,
};

#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<html::Header>::new();
    let background_ref = NodeRef::<html::Div>::new();
    let text_ref = NodeRef::<html::Div>::new();
    let image_ref = NodeRef::<html::Div>::new();
    let buttons_ref = NodeRef::<html::Div>::new();
    let portrait_ref = NodeRef::<html::Img>::new();

    #[cfg(feature = "hydrate")]
    {
        use super::animate::{bind_parallax, drive_float, drive_timeline};
        use crate::motion::{hero_cascade, hero_float, HERO_DELAY};

        // The cascade's step order is fixed: text, then image, then buttons,
        // each overlapping the previous step's tail.
        let _start = drive_timeline(hero_cascade(), HERO_DELAY, true, move || {
            vec![
                text_ref.get_untracked().map(web_sys::HtmlElement::from),
                image_ref.get_untracked().map(web_sys::HtmlElement::from),
                buttons_ref.get_untracked().map(web_sys::HtmlElement::from),
            ]
        });
        drive_float(portrait_ref, hero_float());
        bind_parallax(hero_ref, background_ref);
    }

    view! {
        <header
            node_ref=hero_ref
            class="min-h-screen flex items-center justify-center bg-gray-900 text-white relative overflow-hidden pt-24 md:pt-0"
        >
            <div
                node_ref=background_ref
                class="absolute inset-0 bg-gradient-to-b from-blue-900/20 via-gray-900 to-gray-900"
            ></div>
            <div class="container mx-auto px-6 flex flex-col md:flex-row items-center relative z-10">
                <div node_ref=text_ref class="w-full md:w-1/2 text-center md:text-left">
                    <div class="mb-2 px-4 py-1.5 bg-blue-900/30 backdrop-blur-sm rounded-full border border-blue-500/30 inline-flex items-center">
                        <span class="w-2 h-2 bg-blue-400 rounded-full mr-2 animate-pulse"></span>
                        <span class="text-sm font-medium text-blue-200">
                            "Available for opportunities"
                        </span>
                    </div>
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold mt-6 mb-4 bg-gradient-to-r from-white via-blue-100 to-blue-200 bg-clip-text text-transparent leading-tight">
                        "Hi, I'm " {OWNER_NAME}
                    </h1>
                    <h2 class="text-2xl md:text-3xl font-semibold mb-6 text-blue-100">
                        {OWNER_TAGLINE}
                    </h2>
                    <p class="text-lg md:text-xl mb-8 text-blue-50/90 max-w-2xl leading-relaxed">
                        {OWNER_INTRO}
                    </p>
                    <div node_ref=buttons_ref class="flex flex-col sm:flex-row gap-4 mt-4 w-full max-w-md">
                        <a
                            href="#contact"
                            class="flex-1 bg-gradient-to-r from-blue-600 to-blue-700 text-white px-8 py-4 rounded-lg font-semibold hover:shadow-lg hover:shadow-blue-500/20 transition-all duration-300 text-center"
                        >
                            "Hire Me →"
                        </a>
                        <a
                            href="#projects"
                            class="flex-1 bg-transparent border-2 border-blue-500/30 text-white px-8 py-4 rounded-lg font-semibold hover:bg-blue-500/10 transition-all duration-300 text-center"
                        >
                            "View My Work ↓"
                        </a>
                    </div>
                    <div class="mt-12 flex items-center justify-center md:justify-start space-x-6">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-100 hover:text-white transition-colors duration-300 text-2xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-100 hover:text-white transition-colors duration-300 text-2xl"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="text-blue-100 hover:text-white transition-colors duration-300 text-2xl"
                            aria-label="Email Me"
                        >
                            <i class="extra-email"></i>
                        </a>
                    </div>
                </div>
                <div node_ref=image_ref class="w-full md:w-1/2 flex justify-center items-center mt-12 md:mt-0">
                    <div class="relative group">
                        <div class="absolute -inset-1 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full blur opacity-20 animate-pulse"></div>
                        <img
                            node_ref=portrait_ref
                            src=PROFILE_IMAGE
                            alt=format!("{OWNER_NAME} - Full Stack Developer")
                            class="relative rounded-full w-48 h-48 md:w-80 md:h-80 lg:w-96 lg:h-96 object-cover border-4 border-white/10 shadow-2xl"
                            loading="eager"
                        />
                        <div class="absolute -bottom-4 -right-2 bg-blue-600 text-white text-xs font-bold px-3 py-1 rounded-full shadow-lg">
                            "Available for work"
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <div class="w-8 h-12 border-2 border-blue-400 rounded-full flex justify-center p-1">
                    <div class="w-1 h-2 bg-blue-400 rounded-full mt-2"></div>
                </div>
            </div>
        </header>
    }
}
