use yew::prelude::*;
use yew_garden::paint::{BrushSize, PAINT_COLORS};

#[derive(Properties, PartialEq, Clone)]
pub struct SwatchProps {
    pub color: &'static str,
    pub selected: bool,
    pub on_pick: Callback<String>,
}

#[function_component(Swatch)]
pub fn swatch(props: &SwatchProps) -> Html {
    let onclick = {
        let cb = props.on_pick.clone();
        let color = props.color;
        Callback::from(move |_| cb.emit(color.to_string()))
    };
    let ring = if props.selected { "3px solid #f0c040" } else { "1px solid #30363d" };
    html! { <button {onclick} title={props.color} style={format!("width:28px; height:28px; padding:0; border-radius:50%; background:{}; border:{ring}; cursor:pointer;", props.color)}></button> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PaintControlsProps {
    pub color: String,
    pub brush: BrushSize,
    pub on_color: Callback<String>,
    pub on_brush: Callback<BrushSize>,
}

#[function_component]
pub fn PaintControls(props: &PaintControlsProps) -> Html {
    let brushes = BrushSize::ALL.iter().copied().map(|size| {
        let cb = props.on_brush.clone();
        let onclick = Callback::from(move |_| cb.emit(size));
        let dot = size.width();
        let border = if size == props.brush { "2px solid #f0c040" } else { "1px solid #30363d" };
        html! {
            <button {onclick} title={format!("{size:?}")} style={format!("width:36px; height:36px; display:flex; align-items:center; justify-content:center; background:#1c2128; border:{border}; border-radius:6px;")}>
                <span style={format!("display:inline-block; width:{dot}px; height:{dot}px; border-radius:50%; background:{};", props.color)}></span>
            </button>
        }
    });
    html! {<div style="position:absolute; bottom:96px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 10px; display:flex; align-items:center; gap:8px;">
        { for PAINT_COLORS.iter().map(|c| html!{ <Swatch color={*c} selected={props.color == *c} on_pick={props.on_color.clone()} /> }) }
        <span style="width:1px; height:28px; background:#30363d;"></span>
        { for brushes }
    </div>}
}
