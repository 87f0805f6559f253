use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::EXPERIENCE;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <RevealSection id="experience" class="py-16 md:py-24 bg-gray-900 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-12 md:mb-16">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                        "Work Experience"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mt-4 rounded-full"></div>
                    <p class="text-lg sm:text-xl text-gray-300 mt-6 max-w-3xl mx-auto">
                        "My professional journey and the valuable experiences I've gained along the way"
                    </p>
                </div>
                <div class="max-w-4xl mx-auto space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="group bg-gray-800/50 backdrop-blur-sm p-6 rounded-xl border border-gray-700 group-hover:border-blue-500/50 transition-all duration-300">
                                    <div class="mb-4">
                                        <h3 class="text-xl sm:text-2xl font-bold text-white">
                                            {entry.role}
                                        </h3>
                                        <p class="text-blue-300">{entry.organization}</p>
                                        <p class="text-sm text-gray-400">{entry.period}</p>
                                    </div>
                                    <ul class="space-y-2 text-gray-300">
                                        {entry
                                            .highlights
                                            .iter()
                                            .map(|highlight| {
                                                view! {
                                                    <li class="flex items-start">
                                                        <span class="text-blue-400 mr-2">"•"</span>
                                                        <span>{*highlight}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <div class="mt-4 flex flex-wrap gap-2">
                                        {entry
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-3 py-1 bg-blue-900/50 text-blue-300 text-sm rounded-full">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
