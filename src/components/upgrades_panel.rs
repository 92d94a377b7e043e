use crate::model::{GameState, UpgradeId, UpgradeKind};
use crate::util::format_energy;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UpgradesPanelProps {
    pub game: UseReducerHandle<GameState>,
    pub on_buy: Callback<UpgradeId>,
}

#[function_component(UpgradesPanel)]
pub fn upgrades_panel(props: &UpgradesPanelProps) -> Html {
    let rows: Vec<Html> = props
        .game
        .catalog()
        .map(|(def, up)| {
            let affordable = props.game.can_afford(def.id);
            let onclick = {
                let on_buy = props.on_buy.clone();
                let id = def.id;
                Callback::from(move |_: yew::events::MouseEvent| on_buy.emit(id))
            };
            let yield_label = match def.kind {
                UpgradeKind::PerClick => format!("+{}/tap", def.power),
                UpgradeKind::PerSecond => format!("+{}/s", def.power),
            };
            let look = if affordable {
                "border:2px solid #2ea043; background:rgba(46,160,67,0.15); color:#3fb950; cursor:pointer;"
            } else {
                "border:2px solid #30363d; background:rgba(48,54,61,0.1); color:#8b949e; opacity:0.5;"
            };
            html! {
                <button
                    onclick={onclick}
                    disabled={!affordable}
                    style={format!("width:100%; text-align:left; border-radius:6px; padding:10px; display:flex; flex-direction:column; gap:6px; font-family:inherit; {look}")}
                >
                    <div style="display:flex; justify-content:space-between; align-items:center; width:100%;">
                        <span style="font-size:12px; font-weight:700;">{ format!("{} {}", def.icon, def.name) }</span>
                        <span style="font-size:11px; background:#0d1117; border:1px solid currentColor; border-radius:4px; padding:1px 6px;">{ up.owned }</span>
                    </div>
                    <div style="display:flex; justify-content:space-between; width:100%; font-size:10px;">
                        <span>{ yield_label }</span>
                        <span>{ format!("⚡ {}", format_energy(up.cost)) }</span>
                    </div>
                </button>
            }
        })
        .collect();

    html! {
        <div style="background:#161b22; border:2px solid #2ea043; border-radius:8px; padding:16px;">
            <div style="font-size:13px; color:#3fb950; margin-bottom:10px;">{"🔧 UPGRADES"}</div>
            <div style="display:flex; flex-direction:column; gap:8px;">
                { for rows }
            </div>
        </div>
    }
}
