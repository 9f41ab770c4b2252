use yew::{Html, function_component, html};

/// Neutral waiting state shown while identity resolution or a page fetch is
/// in flight. Rendered instead of any allow/deny decision.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium">{"TutorHive"}</div>
                <div class="mt-3 flex items-center gap-2">
                    <span class="loading loading-dots loading-md"></span>
                    <span>{"Loading"}</span>
                </div>
            </div>
        </div>
    }
}
