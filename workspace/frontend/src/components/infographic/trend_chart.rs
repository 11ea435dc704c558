use common::TrendPoint;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Vec<TrendPoint>,
}

#[function_component(HousingEmploymentChart)]
pub fn housing_employment_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let data = props.data.clone();
    let div_id = "chart-housing-employment".to_string();

    use_effect_with(
        (container_ref.clone(), data, div_id.clone()),
        move |(container_ref, data, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let years: Vec<String> = data.iter().map(|p| p.year.clone()).collect();
                let housing: Vec<f64> = data.iter().map(|p| p.housing_units).collect();
                let employed: Vec<f64> = data.iter().map(|p| p.employed_population).collect();

                let housing_trace = Scatter::new(years.clone(), housing)
                    .mode(Mode::LinesMarkers)
                    .name("Housing Units")
                    .line(plotly::common::Line::new().color("#4F46E5").width(2.0));

                let employed_trace = Scatter::new(years, employed)
                    .mode(Mode::LinesMarkers)
                    .name("Employed Population")
                    .line(plotly::common::Line::new().color("#EC4899").width(2.0));

                let layout = Layout::new()
                    .y_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text("% Change From 2019")),
                    )
                    .height(300);

                let data_js = js_sys::Array::new();
                for trace in [&housing_trace, &employed_trace] {
                    let trace_json = serde_json::to_string(trace).unwrap_or_default();
                    if let Ok(trace_js) = js_sys::JSON::parse(&trace_json) {
                        data_js.push(&trace_js);
                    }
                }

                let layout_json = serde_json::to_string(&layout).unwrap_or_default();
                if let Ok(layout_js) = js_sys::JSON::parse(&layout_json) {
                    newPlot(div_id, data_js.into(), layout_js);
                }
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h2 class="card-title text-sm">{"Housing vs Employment Trend"}</h2>
                <div ref={container_ref} class="chart-container" style="height: 300px;"></div>
            </div>
        </div>
    }
}
