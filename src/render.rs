// Canvas drawing for one garden frame.

use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;
use yew_garden::effects::{ConfettiShape, EffectBody};
use yew_garden::{GardenSession, Season, Tool};

fn blade_shades(season: Season) -> [&'static str; 3] {
    match season {
        Season::Spring => ["#3E8E41", "#4CAF50", "#66BB6A"],
        Season::Summer => ["#1B5E20", "#2E7D32", "#388E3C"],
        Season::Fall => ["#827717", "#9E9D24", "#A1887F"],
        Season::Winter => ["#90A4AE", "#B0BEC5", "#CFD8DC"],
    }
}

/// Draws the whole garden. `dpr` maps logical units to device pixels.
pub fn draw(ctx: &CanvasRenderingContext2d, session: &GardenSession, dpr: f64) {
    let bounds = session.bounds();
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(session.season().lawn_color());
    ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);

    draw_grass(ctx, session);
    draw_paint(ctx, session);
    draw_plants(ctx, session);
    draw_decorations(ctx, session);
    draw_mower(ctx, session);
    draw_effects(ctx, session);
    ctx.set_global_alpha(1.0);
}

fn draw_grass(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    let shades = blade_shades(session.season());
    ctx.set_line_cap("round");
    ctx.set_line_width(2.0);
    // One path per shade keeps the stroke count low.
    for (shade_idx, shade) in shades.iter().enumerate() {
        ctx.begin_path();
        for blade in session.grass().blades() {
            let bucket = ((blade.hue_jitter + 1.0) * 1.5).floor().clamp(0.0, 2.0) as usize;
            if bucket != shade_idx {
                continue;
            }
            let sway = if blade.cut { 0.0 } else { blade.sway_offset() };
            ctx.move_to(blade.position.x, blade.position.y);
            ctx.line_to(blade.position.x + sway, blade.position.y - blade.height);
        }
        ctx.set_stroke_style_str(shade);
        ctx.stroke();
    }
}

fn draw_paint(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    for stroke in session.paint().iter() {
        ctx.set_line_width(stroke.width);
        match stroke.points.as_slice() {
            [] => {}
            [only] => {
                ctx.begin_path();
                ctx.set_fill_style_str(stroke.color_at(0));
                ctx.arc(only.x, only.y, stroke.width * 0.5, 0.0, TAU).ok();
                ctx.fill();
            }
            points => {
                for (i, pair) in points.windows(2).enumerate() {
                    ctx.begin_path();
                    ctx.set_stroke_style_str(stroke.color_at(i + 1));
                    ctx.move_to(pair[0].x, pair[0].y);
                    ctx.line_to(pair[1].x, pair[1].y);
                    ctx.stroke();
                }
            }
        }
    }
}

fn draw_glyph(ctx: &CanvasRenderingContext2d, glyph: &str, x: f64, y: f64, size: f64, rotation: f64) {
    ctx.save();
    ctx.translate(x, y).ok();
    if rotation != 0.0 {
        ctx.rotate(rotation).ok();
    }
    ctx.set_font(&format!("{:.0}px serif", size.max(1.0)));
    ctx.fill_text(glyph, 0.0, 0.0).ok();
    ctx.restore();
}

fn draw_plants(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    for plant in session.plants().plants() {
        let wobble = (plant.bounce * PI * 4.0).sin() * plant.bounce * 0.3;
        let size = plant.size * (1.0 + plant.bounce * 0.2);
        draw_glyph(ctx, plant.glyph(), plant.position.x, plant.position.y, size, wobble);
    }
}

fn draw_decorations(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for d in session.plants().decorations() {
        let (y, rot) = if d.is_butterfly() {
            (d.position.y + d.flutter_phase.sin() * 3.0, d.velocity.x * 0.1)
        } else {
            (d.position.y, d.rotation)
        };
        draw_glyph(ctx, &d.glyph, d.position.x, y, d.size, rot);
    }
}

fn draw_mower(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    let tools = session.tools();
    if tools.selected() != Tool::Mow || !tools.is_active() {
        return;
    }
    if let Some(p) = tools.last_point() {
        ctx.begin_path();
        ctx.set_stroke_style_str("rgba(255,255,255,0.5)");
        ctx.set_line_width(2.0);
        ctx.arc(p.x, p.y, session.config().radii.mow, 0.0, TAU).ok();
        ctx.stroke();
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        draw_glyph(ctx, Tool::Mow.icon(), p.x, p.y, 40.0, 0.0);
    }
}

fn draw_effects(ctx: &CanvasRenderingContext2d, session: &GardenSession) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for p in session.effects().particles() {
        ctx.set_global_alpha(p.alpha.clamp(0.0, 1.0));
        let (x, y) = (p.position.x, p.position.y);
        match &p.body {
            EffectBody::Water { radius } => {
                ctx.begin_path();
                ctx.set_fill_style_str("#4FC3F7");
                ctx.arc(x, y, *radius, 0.0, TAU).ok();
                ctx.fill();
            }
            EffectBody::Clipping { length, rotation, .. } => {
                ctx.begin_path();
                ctx.set_stroke_style_str("#7CB342");
                ctx.set_line_width(2.0);
                ctx.move_to(x, y);
                ctx.line_to(x + rotation.cos() * length, y + rotation.sin() * length);
                ctx.stroke();
            }
            EffectBody::Sparkle { size, rotation, color, .. } => {
                ctx.save();
                ctx.translate(x, y).ok();
                ctx.rotate(*rotation).ok();
                ctx.set_fill_style_str(color);
                ctx.fill_rect(-size * 0.5, -size * 0.5, *size, *size);
                ctx.restore();
            }
            EffectBody::Confetti { size, rotation, color, shape, .. } => {
                ctx.set_fill_style_str(color);
                match shape {
                    ConfettiShape::Circle => {
                        ctx.begin_path();
                        ctx.arc(x, y, size * 0.5, 0.0, TAU).ok();
                        ctx.fill();
                    }
                    ConfettiShape::Square => {
                        ctx.save();
                        ctx.translate(x, y).ok();
                        ctx.rotate(*rotation).ok();
                        ctx.fill_rect(-size * 0.5, -size * 0.25, *size, size * 0.5);
                        ctx.restore();
                    }
                }
            }
            EffectBody::Flyaway { glyph, scale, rotation, .. } => {
                draw_glyph(ctx, glyph, x, y, 30.0 * scale, *rotation);
            }
            EffectBody::Starburst { size, color } => {
                ctx.begin_path();
                ctx.set_fill_style_str(color);
                ctx.arc(x, y, *size, 0.0, TAU).ok();
                ctx.fill();
            }
        }
    }
}
