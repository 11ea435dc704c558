use common::DistributionBin;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart_id: String,
    pub title: String,
    pub y_label: String,
    pub data: Vec<DistributionBin>,
}

/// Reusable unit-count histogram panel with percent labels above the bars.
#[function_component(StructureBarChart)]
pub fn structure_bar_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();
    let data = props.data.clone();
    let y_label = props.y_label.clone();
    let chart_id = props.chart_id.clone();

    use_effect_with(
        (chart_ref.clone(), data, chart_id, y_label),
        move |(chart_ref, data, chart_id, y_label)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                element.set_id(chart_id);

                let labels: Vec<&str> = data.iter().map(|b| b.label.as_str()).collect();
                let units: Vec<u32> = data.iter().map(|b| b.units).collect();
                let percents: Vec<String> =
                    data.iter().map(|b| format!("{}%", b.percentage)).collect();

                let trace = serde_json::json!([{
                    "type": "bar",
                    "x": labels,
                    "y": units,
                    "marker": {"color": "#5E63E5"},
                    "text": percents,
                    "textposition": "outside",
                    "textfont": {"size": 10, "color": "#6b7280"}
                }]);

                let layout = serde_json::json!({
                    "margin": {"t": 20, "r": 20, "l": 50, "b": 70},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"tickangle": -45, "tickfont": {"size": 10}},
                    "yaxis": {
                        "title": {"text": y_label, "font": {"size": 12}},
                        "showgrid": true,
                        "gridcolor": "#eee"
                    },
                    "height": 320
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                newPlot(
                    chart_id,
                    serde_wasm_bindgen::to_value(&trace).unwrap_or(JsValue::NULL),
                    serde_wasm_bindgen::to_value(&layout).unwrap_or(JsValue::NULL),
                    serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL),
                );
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h2 class="card-title text-sm">{&props.title}</h2>
                <div ref={chart_ref} class="chart-container" style="height: 320px;"></div>
            </div>
        </div>
    }
}
