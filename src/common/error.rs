use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Visible error state for a chart region, with an optional retry action.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center gap-3 py-8">
            <div class="alert alert-error max-w-md">
                <i class="fas fa-exclamation-circle"></i>
                <span>{format!("Report unavailable: {}", props.message)}</span>
            </div>
            {match &props.on_retry {
                Some(on_retry) => {
                    let on_retry = on_retry.clone();
                    html! {
                        <button
                            class="btn btn-sm btn-outline"
                            onclick={Callback::from(move |_| {
                                log::debug!("User clicked retry button");
                                on_retry.emit(());
                            })}
                        >
                            <i class="fas fa-redo"></i>
                            {" Try again"}
                        </button>
                    }
                }
                None => html! {},
            }}
        </div>
    }
}
