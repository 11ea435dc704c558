use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub note: String,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    html! {
        <div class="text-center text-xs text-gray-500 p-4 border-t bg-base-100 rounded-b-xl mt-4">
            {&props.note}
        </div>
    }
}
