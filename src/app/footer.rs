use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER_NAME, RESUME_PATH};

// Stamped by build.rs; the leading four characters are the build year.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = BUILD_TIME.get(..4).unwrap_or("2025");

    view! {
        <footer class="bg-gradient-to-br from-gray-900 via-gray-950 to-blue-950 text-white pt-16 pb-8 relative overflow-hidden">
            <div class="relative container mx-auto px-6 flex flex-col md:flex-row items-start md:items-center justify-between gap-12">
                <div class="flex-1 text-left">
                    <h3 class="text-2xl font-bold mb-2 text-blue-400">{OWNER_NAME}</h3>
                    <p class="text-gray-300 mb-4 max-w-xs">
                        "MERN Stack Developer passionate about building modern, scalable web apps."
                    </p>
                    <div class="flex items-center space-x-3">
                        <i class="extra-email text-blue-400"></i>
                        <a
                            href=format!("mailto:{CONTACT_EMAIL}")
                            class="hover:underline text-gray-200"
                        >
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                </div>
                <div class="flex-1 flex flex-col items-center">
                    <h4 class="text-lg font-semibold mb-4 text-blue-300">"Connect with me"</h4>
                    <div class="flex space-x-5 mb-4">
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group p-3 rounded-full bg-gradient-to-r from-gray-800 to-gray-700 transition-all duration-300 hover:scale-110 hover:shadow-xl hover:bg-gray-800 text-xl"
                            aria-label="GitHub"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group p-3 rounded-full bg-gradient-to-r from-gray-800 to-gray-700 transition-all duration-300 hover:scale-110 hover:shadow-xl hover:bg-blue-600 text-xl"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                    </div>
                    <a
                        href=RESUME_PATH
                        download
                        class="inline-flex items-center px-6 py-2 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold shadow-lg hover:from-blue-700 hover:to-purple-700 transition-all duration-300"
                    >
                        "Download Resume ↓"
                    </a>
                </div>
                <div class="flex-1 flex flex-col items-end sm:items-center">
                    <h4 class="text-lg font-semibold mb-4 text-blue-300">"Quick Links"</h4>
                    <nav class="flex flex-col items-end space-y-2">
                        <a href="#skills" class="hover:text-blue-400 transition-colors">
                            "Skills"
                        </a>
                        <a href="#projects" class="hover:text-blue-400 transition-colors">
                            "Projects"
                        </a>
                        <a href="#contact" class="hover:text-blue-400 transition-colors">
                            "Contact"
                        </a>
                    </nav>
                </div>
            </div>
            <div class="relative container mx-auto px-6 text-center mt-12 border-t border-gray-800 pt-6">
                <p class="text-gray-400 text-sm">
                    "© " {year} " " {OWNER_NAME} ". All rights reserved."
                </p>
            </div>
        </footer>
    }
}
