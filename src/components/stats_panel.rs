use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub clicks: u64,
    pub upgrades_owned: u32,
    pub efficiency: u32,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; font-size:11px;";
    html! {
        <div style="background:#161b22; border:2px solid #d29922; border-radius:8px; padding:16px;">
            <div style="font-size:13px; color:#d29922; margin-bottom:10px;">{"🏆 STATS"}</div>
            <div style="display:flex; flex-direction:column; gap:8px;">
                <div style={row_style}>
                    <span style="color:#8b949e;">{"TAPS:"}</span>
                    <span>{ props.clicks }</span>
                </div>
                <div style={row_style}>
                    <span style="color:#8b949e;">{"UPGRADES:"}</span>
                    <span>{ props.upgrades_owned }</span>
                </div>
                <div style={row_style}>
                    <span style="color:#8b949e;">{"EFFICIENCY:"}</span>
                    <span>{ format!("{}%", props.efficiency) }</span>
                </div>
            </div>
        </div>
    }
}
