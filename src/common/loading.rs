use yew::prelude::*;

/// Centered loading spinner shown while the report is being fetched.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-10">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
