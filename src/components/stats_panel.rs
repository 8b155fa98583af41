use yew::prelude::*;
use yew_garden::model::Rewards;
use yew_garden::Season;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub rewards: Rewards,
    pub season: Season,
    pub on_cycle_season: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let season_cb = {
        let cb = props.on_cycle_season.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let r = props.rewards;
    let rows: [(&str, &str, &str, u64); 4] = [
        ("⭐", "Stars", "#d4af37", r.stars),
        ("🌻", "Flowers", "#f778ba", r.flowers_picked as u64),
        ("🥕", "Veggies", "#f0883e", r.vegetables_picked as u64),
        ("🦋", "Butterflies", "#58a6ff", r.butterflies_caught as u64),
    ];
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px; color:#e6edf3;">
            { for rows.iter().map(|(icon, label, color, value)| html! {
                <div style={row_style}>
                    <span style={format!("{} color:{};", icon_style, color)}>{ *icon }</span>
                    <span style={format!("{} color:{};", label_style, color)}>{ *label }</span>
                    <span style={format!("{} color:{};", value_style, color)}>{ *value }</span>
                </div>
            }) }
            <button onclick={season_cb} title="Change season" style="display:flex; align-items:center; justify-content:center; gap:6px;">
                <span style="font-size:18px;">{ props.season.icon() }</span>
                <span>{ format!("{:?}", props.season) }</span>
            </button>
        </div>
    }
}
