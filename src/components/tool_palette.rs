use yew::prelude::*;
use yew_garden::Tool;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolPaletteProps {
    pub selected: Tool,
    pub can_undo: bool,
    pub on_select: Callback<Tool>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ToolPalette(props: &ToolPaletteProps) -> Html {
    let help_cb = {
        let cb = props.on_show_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buttons = Tool::ALL.iter().copied().map(|tool| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(tool));
        let active = tool == props.selected && !tool.is_immediate();
        let disabled = tool == Tool::Undo && !props.can_undo;
        let border = if active { "2px solid #f0c040" } else { "1px solid #30363d" };
        let style = format!(
            "display:flex; flex-direction:column; align-items:center; width:56px; padding:4px; border-radius:6px; border:{border}; background:{}; color:#e6edf3; cursor:pointer;",
            if active { "#2d333b" } else { "#1c2128" }
        );
        html! {
            <button {style} {onclick} {disabled} title={tool.label()}>
                <span style="font-size:24px;">{ tool.icon() }</span>
                <span style="font-size:10px; opacity:0.8;">{ tool.label() }</span>
            </button>
        }
    });
    html! {<div style="position:absolute; bottom:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-wrap:wrap; justify-content:center; gap:6px; max-width:calc(100vw - 24px);">
        { for buttons }
        <div style="display:flex; flex-direction:column; gap:4px; margin-left:6px;">
            <button onclick={help_cb} title="Help">{"❓"}</button>
            <button onclick={settings_cb} title="Settings">{"⚙️"}</button>
        </div>
    </div>}
}
