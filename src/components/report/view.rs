use yew::prelude::*;

use super::charts::ChartCard;
use super::dial::{self, Dial};
use crate::api_client::report::{get_task_report, TaskReport};
use crate::chart::{self, flot::FlotPieRenderer, PieOptions};
use crate::hooks::FetchState;

/// Report dashboard: a row of status-count dials and the two task-count pies.
#[function_component(Report)]
pub fn report() -> Html {
    let report = use_state(|| FetchState::<TaskReport>::Loading);
    let refreshed_at = use_state(|| None::<String>);

    let load = {
        let report = report.clone();
        let refreshed_at = refreshed_at.clone();
        Callback::from(move |_: ()| {
            let report = report.clone();
            let refreshed_at = refreshed_at.clone();
            report.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match chart::load_and_render(get_task_report(), &FlotPieRenderer).await {
                    Ok(data) => {
                        report.set(FetchState::Success(data));
                        refreshed_at
                            .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
                    }
                    Err(err) => report.set(FetchState::Error(err)),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            // Knob dials in the host markup come alive before the fetch goes out.
            dial::activate_dials();
            load.emit(());
            || ()
        });
    }

    let loading = report.is_loading();
    let error = report.error().cloned();

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Task Report"}</h2>
                <div class="flex items-center gap-4">
                    {if let Some(at) = (*refreshed_at).as_ref() {
                        html! {
                            <span class="text-sm text-gray-500">
                                {format!("Refreshed at {}", at)}
                            </span>
                        }
                    } else {
                        html! {}
                    }}
                    <button class="btn btn-primary btn-sm" onclick={load.reform(|_| ())}>
                        <i class="fas fa-sync"></i>
                        {" Refresh"}
                    </button>
                </div>
            </div>

            {if let Some(data) = report.data() {
                let total = data.total_tasks();
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                        { for data.task_by_status.iter().map(|entry| html! {
                            <Dial
                                label={entry.label().to_string()}
                                value={entry.value()}
                                max={total}
                            />
                        })}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ChartCard
                    title="Tasks by Status"
                    target={PieOptions::status_chart().target_class()}
                    loading={loading}
                    error={error.clone()}
                    on_retry={load.clone()}
                />
                <ChartCard
                    title="Tasks by Module"
                    target={PieOptions::module_chart().target_class()}
                    loading={loading}
                    error={error}
                    on_retry={load.clone()}
                />
            </div>
        </>
    }
}
