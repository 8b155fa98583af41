use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let start_btn = Callback::from(move |_| hide_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); color:#e6edf3; border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:16px; line-height:1.5;">
            <h2 style="margin:0 0 12px 0; font-size:26px; color:#7ee787; text-align:center;">{"🌷 My Little Garden 🌷"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Pick a tool at the bottom, then tap or drag on the grass."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:none; display:flex; flex-direction:column; gap:4px;">
                <li>{"💧 Water the grass and plants to help them grow."}</li>
                <li>{"🌸 🥕 Plant flowers and vegetables."}</li>
                <li>{"🚜 Drag the mower to cut the grass."}</li>
                <li>{"💐 🧺 Pick flowers and ripe vegetables for stars."}</li>
                <li>{"🦋 Let butterflies out, then catch them with the 🥅 net."}</li>
                <li>{"🎨 🌈 Paint on the lawn; the 🧹 broom sweeps it away."}</li>
                <li>{"↶ Undo a mistake or ☁️ start a fresh garden."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn} style="font-size:20px; padding:8px 28px;">{"Let's Play!"}</button>
            </div>
            <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">{"Tip: Ctrl+Z also undoes."}</div>
        </div>
    }
}
