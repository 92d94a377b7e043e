use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    reactor_view::ReactorView, station_log::StationLog, stats_panel::StatsPanel,
    upgrades_panel::UpgradesPanel,
};
use crate::audio::{self, Melody};
use crate::model::{
    GameAction, GameState, SAVE_INTERVAL_MS, TICK_FRACTION, TICK_INTERVAL_MS, UpgradeId,
};
use crate::storage::{BrowserStorage, SaveSlot};
use crate::util::efficiency_percent;

#[function_component(App)]
pub fn app() -> Html {
    // Hydrate from the last save, or start fresh.
    let game = use_reducer(|| SaveSlot::new(BrowserStorage).load().unwrap_or_default());
    let melody = use_mut_ref(|| None::<Melody>);
    let music_on = use_state(|| false);

    // Mirror of the latest state for the save interval closure.
    let latest = {
        let initial = (*game).clone();
        use_mut_ref(move || initial)
    };
    {
        let latest = latest.clone();
        use_effect_with((*game).clone(), move |state: &GameState| {
            *latest.borrow_mut() = state.clone();
            || ()
        });
    }

    // Automatic generation tick.
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let tick = Closure::wrap(Box::new(move || {
                game.dispatch(GameAction::Tick {
                    fraction: TICK_FRACTION,
                });
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_INTERVAL_MS,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    // Background save flush, independently cancellable from the tick.
    {
        let latest = latest.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let slot = SaveSlot::new(BrowserStorage);
            let flush = Closure::wrap(Box::new(move || {
                slot.save(&latest.borrow());
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    flush.as_ref().unchecked_ref(),
                    SAVE_INTERVAL_MS,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(flush);
            }
        });
    }

    let on_tap = {
        let game = game.clone();
        let melody = melody.clone();
        let music_on = music_on.clone();
        Callback::from(move |_| {
            // First interaction also starts the background melody.
            if melody.borrow().is_none() {
                if let Ok(m) = Melody::start() {
                    *melody.borrow_mut() = Some(m);
                    music_on.set(true);
                }
            }
            game.dispatch(GameAction::Click);
            let _ = audio::tap_blip();
        })
    };

    let on_buy = {
        let game = game.clone();
        Callback::from(move |id: UpgradeId| {
            // Affordability also gates the button; the reducer re-checks.
            if !game.can_afford(id) {
                return;
            }
            game.dispatch(GameAction::Buy { id });
            let _ = audio::purchase_chirp();
        })
    };

    let toggle_music = {
        let melody = melody.clone();
        let music_on = music_on.clone();
        Callback::from(move |_: yew::events::MouseEvent| {
            let playing = melody.borrow_mut().take();
            match playing {
                Some(m) => {
                    m.stop();
                    music_on.set(false);
                }
                None => {
                    if let Ok(m) = Melody::start() {
                        *melody.borrow_mut() = Some(m);
                        music_on.set(true);
                    }
                }
            }
        })
    };

    let efficiency = efficiency_percent(game.energy_per_second, game.clicks);

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:monospace; padding:16px;">
            <div style="max-width:1100px; margin:0 auto;">
                <div style="text-align:center; margin-bottom:16px;">
                    <div style="display:flex; align-items:center; justify-content:center; gap:12px;">
                        <h1 style="margin:0; font-size:28px; color:#58a6ff; letter-spacing:4px;">{"SPACE STATION"}</h1>
                        <button onclick={toggle_music} style="background:#161b22; border:1px solid #58a6ff; color:#58a6ff; border-radius:6px; padding:4px 10px; cursor:pointer;">
                            { if *music_on { "🔊" } else { "🔇" } }
                        </button>
                    </div>
                    <div style="font-size:12px; color:#8b949e; letter-spacing:2px; margin-top:4px;">{"RESOURCE EXTRACTION"}</div>
                </div>
                <div style="display:grid; grid-template-columns:2fr 1fr; gap:16px; align-items:start;">
                    <div style="display:flex; flex-direction:column; gap:16px;">
                        <ReactorView
                            energy={game.energy}
                            total_energy={game.total_energy}
                            energy_per_click={game.energy_per_click}
                            energy_per_second={game.energy_per_second}
                            clicks={game.clicks}
                            on_tap={on_tap}
                        />
                        <StationLog
                            energy_per_second={game.energy_per_second}
                            total_energy={game.total_energy}
                        />
                    </div>
                    <div style="display:flex; flex-direction:column; gap:16px;">
                        <UpgradesPanel game={game.clone()} on_buy={on_buy} />
                        <StatsPanel
                            clicks={game.clicks}
                            upgrades_owned={game.upgrades_owned()}
                            efficiency={efficiency}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
