use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub sound_on: bool,
    pub on_toggle_sound: Callback<()>,
    pub voice_on: bool,
    pub on_toggle_voice: Callback<()>,
    pub on_hard_reset: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sound_cb = {
        let cb = props.on_toggle_sound.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_voice_cb = {
        let cb = props.on_toggle_voice.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let hard_reset_cb = {
        let cb = props.on_hard_reset.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message(
                        "This will erase the whole garden, your stars and settings. Are you sure?",
                    )
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Grown-up Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.sound_on} onclick={toggle_sound_cb} />
                    <span>{"Sound Effects"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.voice_on} onclick={toggle_voice_cb} />
                    <span>{"Spoken Praise"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={hard_reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Start Over (Wipe Garden)"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Start Over removes the saved garden, stars and settings. The reset tool in the palette keeps stars."}</div>
        </div>
    </div>}
}
