use common::HeaderData;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: HeaderData,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    html! {
        <header
            class="flex flex-col sm:flex-row justify-between items-start sm:items-center p-6 rounded-t-xl shadow-lg"
            style="background-color: #5E63E5;"
        >
            <div>
                <h1 class="text-2xl md:text-4xl font-bold text-white">{&props.data.title}</h1>
                <p class="text-sm md:text-base text-white/90">{&props.data.subtitle}</p>
            </div>
            <div class="flex flex-col items-end mt-4 sm:mt-0">
                <p class="text-xs text-white/80 mt-1 text-right">{&props.data.attribution}</p>
            </div>
        </header>
    }
}
