use yew::prelude::*;

use super::metric_card::KeyMetricCard;
use super::rent::RentAnalysis;
use super::structure_chart::StructureBarChart;
use super::trend_chart::HousingEmploymentChart;
use super::units::HousingUnits;
use crate::components::layout::{Footer, Header};
use crate::components::map_widget::TradeAreaMap;
use crate::mock_data;

#[function_component(Infographic)]
pub fn infographic() -> Html {
    let data = mock_data::infographic_data();

    html! {
        <>
            <Header data={data.header.clone()} />

            <main class="grid grid-cols-1 lg:grid-cols-3 gap-4 mt-4">
                <div class="lg:col-span-1">
                    <TradeAreaMap trade_area={data.trade_area.clone()} />
                </div>
                <div class="lg:col-span-2 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4">
                    {for data.key_metrics.iter().map(|metric| html! {
                        <KeyMetricCard key={metric.title.clone()} metric={metric.clone()} />
                    })}
                </div>

                <div class="lg:col-span-1">
                    <HousingEmploymentChart data={data.housing_vs_employment.clone()} />
                </div>
                <div class="lg:col-span-1">
                    <RentAnalysis data={data.monthly_rent.clone()} />
                </div>
                <div class="lg:col-span-1">
                    <HousingUnits data={data.housing_units.clone()} />
                </div>

                <div class="col-span-1 lg:col-span-3 grid grid-cols-1 md:grid-cols-2 gap-4">
                    <StructureBarChart
                        chart_id="chart-year-built"
                        title="Year Structure Built"
                        y_label="Housing Units"
                        data={data.year_built.clone()}
                    />
                    <StructureBarChart
                        chart_id="chart-owner-occupied-value"
                        title="Value of Owner-Occupied Housing Units"
                        y_label="Housing Units"
                        data={data.owner_occupied_value.clone()}
                    />
                </div>
            </main>

            <Footer note={data.footer_note.clone()} />
        </>
    }
}
