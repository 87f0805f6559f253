use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::ACHIEVEMENTS;

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <RevealSection id="achievements" class="py-20 bg-gray-800">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    "Achievements"
                </h2>
                <ul class="max-w-2xl mx-auto space-y-6">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <li class="flex items-start gap-4 bg-gradient-to-r from-blue-800/10 to-purple-800/10 rounded-xl p-5 shadow">
                                    <span class="flex-shrink-0 mt-1 w-8 h-8 bg-blue-600/20 rounded-full flex items-center justify-center text-lg font-bold text-blue-500">
                                        "✓"
                                    </span>
                                    <span class="text-lg text-gray-300">{*achievement}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </RevealSection>
    }
}
