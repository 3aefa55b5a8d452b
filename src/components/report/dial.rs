use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    type JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery(selector: &str) -> JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery_element(element: &Element) -> JQuery;

    #[wasm_bindgen(method)]
    fn knob(this: &JQuery);
}

/// Activate every knob dial already present in the host markup. Runs once at
/// page load, before the report fetch is issued.
pub fn activate_dials() {
    log::trace!("Activating .dial knob widgets");
    jquery(".dial").knob();
}

#[derive(Properties, PartialEq)]
pub struct DialProps {
    pub label: String,
    pub value: f64,
    pub max: f64,
}

/// Read-only knob dial for one status count, activated on mount.
#[function_component(Dial)]
pub fn dial(props: &DialProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with((input_ref, props.value), move |(input_ref, _)| {
            if let Some(element) = input_ref.cast::<Element>() {
                jquery_element(&element).knob();
            }
            || ()
        });
    }

    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat items-center">
                <div class="stat-title">{&props.label}</div>
                <input
                    ref={input_ref}
                    type="text"
                    class="dial"
                    value={props.value.to_string()}
                    data-max={props.max.to_string()}
                    data-width="90"
                    data-height="90"
                    data-readonly="true"
                    readonly=true
                />
            </div>
        </div>
    }
}
