use common::UnitsBreakdown;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const SLICE_COLORS: [&str; 3] = ["#3B82F6", "#10B981", "#F59E0B"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: UnitsBreakdown,
}

#[function_component(HousingUnits)]
pub fn housing_units(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let data = props.data.clone();

    {
        let data = data.clone();
        use_effect_with((chart_ref.clone(), data), move |(chart_ref, data)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let slices = data.occupancy_slices();
                let labels: Vec<&str> = slices.iter().map(|s| s.label).collect();
                let values: Vec<u32> = slices.iter().map(|s| s.count).collect();

                let trace = serde_json::json!([{
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                    "hole": 0.6,
                    "marker": {"colors": SLICE_COLORS},
                    "textinfo": "percent",
                    "textfont": {"size": 11}
                }]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "showlegend": false,
                    "height": 180
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&trace).unwrap_or(JsValue::NULL),
                        serde_wasm_bindgen::to_value(&layout).unwrap_or(JsValue::NULL),
                        serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL),
                    );
                }
            }
            || ()
        });
    }

    let slices = data.occupancy_slices();

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h2 class="card-title text-sm">{"Housing Units"}</h2>
                <div class="flex flex-col md:flex-row items-center gap-4">
                    <div class="w-full md:w-1/2">
                        <table class="table table-sm w-full">
                            <tbody class="text-gray-800">
                                <tr class="border-b">
                                    <td>{"Total"}</td>
                                    <td class="text-right font-bold">{format_count(data.total)}</td>
                                </tr>
                                {for slices.iter().zip(SLICE_COLORS).map(|(slice, color)| html! {
                                    <tr key={slice.label}>
                                        <td class="flex items-center">
                                            <span
                                                class="w-4 h-4 rounded-sm mr-2 inline-block"
                                                style={format!("background-color: {};", color)}
                                            ></span>
                                            {slice.label}
                                        </td>
                                        <td class="text-right font-bold">{format_count(slice.count)}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                    <div class="w-full md:w-1/2">
                        <div ref={chart_ref} id="chart-housing-units" class="chart-container" style="height: 180px;"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Thousands-separated display form, e.g. 86972 -> "86,972".
fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
