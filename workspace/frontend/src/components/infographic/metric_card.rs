use common::KeyMetric;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metric: KeyMetric,
}

#[function_component(KeyMetricCard)]
pub fn key_metric_card(props: &Props) -> Html {
    let metric = &props.metric;

    html! {
        <div class="card bg-base-100 shadow flex-row items-center p-3">
            <div
                class="w-16 h-16 rounded-lg flex items-center justify-center mr-4 shrink-0"
                style="background-color: #E1E2FF;"
            >
                <i class={classes!(metric.icon.clone(), "text-2xl")} style="color: #5E63E5;"></i>
            </div>
            <div>
                <p class="text-sm text-gray-600 font-semibold">{&metric.title}</p>
                <p class="text-3xl font-bold text-gray-800">{&metric.value}</p>
                {if !metric.sub_value.is_empty() {
                    html! { <p class="text-sm text-gray-500">{&metric.sub_value}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
