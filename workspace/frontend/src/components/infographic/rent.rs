use common::RentTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: RentTable,
}

#[function_component(RentAnalysis)]
pub fn rent_analysis(props: &Props) -> Html {
    let data = &props.data;

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h2 class="card-title text-sm">{"Monthly Housing Rent"}</h2>
                <table class="table table-sm w-full text-gray-800">
                    <thead>
                        <tr>
                            <th></th>
                            <th></th>
                            <th class="text-right font-semibold text-gray-500">{"Benchmark"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="border-b">
                            <td class="font-medium">{&data.median.range}</td>
                            <td class="text-right font-bold">{&data.median.value}</td>
                            <td class="text-right text-gray-500">{&data.median.benchmark}</td>
                        </tr>
                        {for data.breakdown.iter().map(|row| html! {
                            <tr key={row.range.clone()}>
                                <td>{&row.range}</td>
                                <td class="text-right font-medium">{&row.value}</td>
                                <td class="text-right text-gray-500">{&row.benchmark}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
