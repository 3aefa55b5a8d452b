use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: AttrValue,
    /// Class of the region the chart draws into.
    pub target: AttrValue,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Card shell around one chart target region. The target div stays mounted in
/// every state so a draw issued from the fetch flow always finds its region;
/// whatever the charting library puts inside it is never touched here.
#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{props.title.clone()}</h3>
                {if props.loading {
                    html! { <LoadingSpinner /> }
                } else {
                    html! {}
                }}
                {if let Some(err) = &props.error {
                    html! {
                        <ErrorDisplay
                            message={err.clone()}
                            on_retry={props.on_retry.clone()}
                        />
                    }
                } else {
                    html! {}
                }}
                <div
                    class={classes!(props.target.to_string(), "chart-container")}
                    style="height: 300px;"
                ></div>
            </div>
        </div>
    }
}
