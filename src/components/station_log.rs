use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StationLogProps {
    pub energy_per_second: f64,
    pub total_energy: f64,
}

#[function_component(StationLog)]
pub fn station_log(props: &StationLogProps) -> Html {
    let now = || String::from(js_sys::Date::new_0().to_locale_time_string("en-US"));

    html! {
        <div style="background:#161b22; border:2px solid #30363d; border-radius:8px; padding:16px;">
            <div style="font-size:13px; color:#58a6ff; margin-bottom:10px;">{"📡 STATION LOG"}</div>
            <div style="display:flex; flex-direction:column; gap:4px; font-size:12px; max-height:120px; overflow-y:auto;">
                <div style="color:#8b949e;">{ format!("[{}] SYSTEM ONLINE", now()) }</div>
                <div style="color:#3fb950;">{ format!("[{}] REACTOR ACTIVE", now()) }</div>
                { if props.energy_per_second > 0.0 {
                    html! { <div style="color:#d29922;">{ format!("[{}] AUTO-GEN: +{}/s", now(), props.energy_per_second) }</div> }
                } else { html! {} } }
                { if props.total_energy > 100.0 {
                    html! { <div style="color:#58a6ff;">{ format!("[{}] MILESTONE: 100 ENERGY", now()) }</div> }
                } else { html! {} } }
            </div>
        </div>
    }
}
