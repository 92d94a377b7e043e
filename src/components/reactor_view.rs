use crate::util::format_energy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReactorViewProps {
    pub energy: f64,
    pub total_energy: f64,
    pub energy_per_click: f64,
    pub energy_per_second: f64,
    pub clicks: u64,
    pub on_tap: Callback<()>,
}

#[function_component(ReactorView)]
pub fn reactor_view(props: &ReactorViewProps) -> Html {
    let tap = {
        let cb = props.on_tap.clone();
        Callback::from(move |_: yew::events::MouseEvent| cb.emit(()))
    };

    let cell_label = "font-size:10px; color:#8b949e; margin-bottom:4px;";
    let cell_value = "font-size:18px; font-variant-numeric:tabular-nums;";
    let charge = props.clicks % 100;

    html! {
        <div style="background:#161b22; border:2px solid #58a6ff; border-radius:8px; padding:20px;">
            <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:12px; text-align:center; margin-bottom:20px;">
                <div>
                    <div style={cell_label}>{"ENERGY"}</div>
                    <div style={format!("{} color:#58a6ff;", cell_value)}>{ format_energy(props.energy) }</div>
                </div>
                <div>
                    <div style={cell_label}>{"CLICK"}</div>
                    <div style={format!("{} color:#3fb950;", cell_value)}>{ format!("+{}", props.energy_per_click) }</div>
                </div>
                <div>
                    <div style={cell_label}>{"/SEC"}</div>
                    <div style={format!("{} color:#d29922;", cell_value)}>{ format!("+{:.1}", props.energy_per_second) }</div>
                </div>
                <div>
                    <div style={cell_label}>{"TOTAL"}</div>
                    <div style={cell_value}>{ format_energy(props.total_energy) }</div>
                </div>
            </div>

            <div style="display:flex; justify-content:center;">
                <button
                    onclick={tap}
                    style="width:220px; height:220px; border:4px solid #58a6ff; border-radius:8px; background:rgba(88,166,255,0.15); color:#58a6ff; cursor:pointer; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:8px;"
                >
                    <div style="font-size:48px;">{"⚛️"}</div>
                    <div style="font-size:14px; letter-spacing:2px;">{"REACTOR"}</div>
                    <div style="font-size:10px; opacity:0.7;">{"▲ TAP ▲"}</div>
                </button>
            </div>

            <div style="margin-top:20px; display:flex; flex-direction:column; gap:6px;">
                <div style="display:flex; justify-content:space-between; font-size:11px;">
                    <span style="color:#8b949e;">{"STATUS"}</span>
                    <span style="color:#3fb950;">{"ONLINE"}</span>
                </div>
                <div style="height:8px; background:#0d1117; border-radius:4px; overflow:hidden;">
                    <div style={format!("height:100%; width:{charge}%; background:#58a6ff;")}></div>
                </div>
                <div style="display:flex; justify-content:space-between; font-size:11px;">
                    <span style="color:#8b949e;">{"CHARGE"}</span>
                    <span style="color:#d29922;">{ format!("{}%", charge.min(100)) }</span>
                </div>
            </div>
        </div>
    }
}
