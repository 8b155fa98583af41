//! End-to-end garden scenarios driven through pointer input, the same way
//! the canvas view drives the session.

use yew_garden::config::{GardenConfig, GrassTuning};
use yew_garden::effects::{EffectKind, EffectSystem, SpawnConfig};
use yew_garden::feedback::RecordingSink;
use yew_garden::grass::GrassField;
use yew_garden::paint::{PaintCanvas, StrokeStyle};
use yew_garden::plants::{PlantKind, PlantRegistry};
use yew_garden::rng::GardenRng;
use yew_garden::{FieldBounds, GardenAction, GardenEvent, GardenSession, Point, Season, SoundCategory, Tool};

const DT: f64 = 1.0 / 60.0;

fn session() -> GardenSession {
    GardenSession::new(GardenConfig::default(), FieldBounds::new(800.0, 600.0))
}

fn tap(s: &mut GardenSession, tool: Tool, p: Point) {
    s.dispatch(GardenAction::SelectTool(tool));
    s.dispatch(GardenAction::PointerDown(p));
    s.dispatch(GardenAction::PointerUp);
}

fn run(s: &mut GardenSession, ticks: usize) {
    for _ in 0..ticks {
        s.dispatch(GardenAction::Tick(DT));
    }
}

#[test]
fn mowed_blades_regrow_after_one_watering() {
    let mut rng = GardenRng::from_seed_u64(11);
    let mut field = GrassField::new(GrassTuning::default());
    field.initialize(FieldBounds::new(800.0, 600.0), GrassTuning::default().density, &mut rng);
    let center = Point::new(100.0, 100.0);
    let in_range: Vec<usize> = field.blades_within(center, 50.0).map(|(i, _)| i).collect();
    assert!(!in_range.is_empty());

    let cut = field.mow(center, 50.0);
    assert_eq!(cut, in_range);
    assert_eq!(field.cut_count(), in_range.len());

    field.water(center, 80.0);
    for _ in 0..1000 {
        field.tick(DT);
    }
    assert!(in_range.iter().all(|&i| !field.blades()[i].cut));
    assert!(field.blades().iter().all(|b| (0.0..=1.0).contains(&b.regrowth)));
}

#[test]
fn mowing_empty_ground_changes_nothing() {
    let mut s = session();
    tap(&mut s, Tool::Mow, Point::new(400.0, 300.0));
    let cut_before = s.grass().cut_count();
    let actions = s.action_count();
    let particles = s.effects().len();
    // The spot is already bare now, and nothing else lives there.
    tap(&mut s, Tool::Mow, Point::new(400.0, 300.0));
    assert_eq!(s.grass().cut_count(), cut_before);
    assert_eq!(s.action_count(), actions);
    assert_eq!(s.effects().len(), particles);
    assert!(s.plants().plants().is_empty());
}

#[test]
fn reset_twice_is_idempotent() {
    let mut s = session();
    tap(&mut s, Tool::PlantFlower, Point::new(100.0, 100.0));
    tap(&mut s, Tool::Mow, Point::new(300.0, 300.0));
    tap(&mut s, Tool::Paint, Point::new(500.0, 100.0));
    s.dispatch(GardenAction::CycleSeason);

    s.dispatch(GardenAction::Reset);
    let blades = s.grass().blades().len();
    let snapshot = (s.plants().plants().len(), s.effects().len(), s.paint().strokes().len(), s.season());
    s.dispatch(GardenAction::Reset);
    assert_eq!(s.grass().blades().len(), blades);
    assert_eq!(
        (s.plants().plants().len(), s.effects().len(), s.paint().strokes().len(), s.season()),
        snapshot
    );
    assert_eq!(snapshot, (0, 0, 0, Season::Spring));
    assert_eq!(s.grass().cut_count(), 0);
    assert_eq!(s.action_count(), 0);
}

#[test]
fn vegetable_harvest_round_trip() {
    let mut s = session();
    let spot = Point::new(200.0, 200.0);
    tap(&mut s, Tool::PlantVegetable, spot);
    tap(&mut s, Tool::PlantVegetable, Point::new(400.0, 200.0));
    let target = s.plants().plants()[0].id;

    tap(&mut s, Tool::HarvestVegetable, spot);
    assert_eq!(s.plants().plants().len(), 2, "unripe vegetables stay put");

    run(&mut s, 200);
    let stars = s.rewards().stars;
    tap(&mut s, Tool::HarvestVegetable, spot);
    let left: Vec<u64> = s.plants().plants().iter().map(|p| p.id).collect();
    assert_eq!(left.len(), 1);
    assert!(!left.contains(&target));
    assert_eq!(s.rewards().stars, stars + s.config().rewards.harvest_vegetable as u64);
    assert_eq!(s.rewards().vegetables_picked, 1);
}

#[test]
fn crowded_planting_is_rejected() {
    let mut rng = GardenRng::default();
    let mut reg = PlantRegistry::new(FieldBounds::default(), 30.0);
    assert!(reg.plant(Point::new(10.0, 10.0), PlantKind::Flower, &mut rng).is_some());
    assert!(reg.plant(Point::new(12.0, 12.0), PlantKind::Flower, &mut rng).is_none());
    assert_eq!(reg.plants().len(), 1);
}

#[test]
fn sparkles_burn_out() {
    let mut rng = GardenRng::default();
    let mut fx = EffectSystem::new(FieldBounds::default(), 100);
    fx.spawn(EffectKind::Sparkle, Point::new(0.0, 0.0), SpawnConfig::count(5), &mut rng);
    assert_eq!(fx.len(), 5);
    let mut guard = 0;
    while !fx.is_empty() {
        fx.tick(DT);
        guard += 1;
        assert!(guard < 10_000);
    }
}

#[test]
fn paint_drag_is_smooth() {
    let mut canvas = PaintCanvas::new(8.0);
    canvas.begin(Point::new(0.0, 0.0), StrokeStyle::Rainbow, 10.0);
    canvas.extend(Point::new(100.0, 0.0));
    canvas.finish();
    let points = &canvas.strokes()[0].points;
    assert!(points.windows(2).all(|w| w[0].distance(w[1]) <= 8.0 + 1e-9));

    let mut s = session();
    s.dispatch(GardenAction::SelectTool(Tool::Paint));
    s.dispatch(GardenAction::PointerDown(Point::new(0.0, 50.0)));
    s.dispatch(GardenAction::PointerMove(Point::new(100.0, 50.0)));
    s.dispatch(GardenAction::PointerUp);
    let stroke = &s.paint().strokes()[0];
    assert!(stroke.points.windows(2).all(|w| w[0].distance(w[1]) <= s.config().paint_smoothing + 1e-9));
}

#[test]
fn celebration_every_interval() {
    let mut s = session();
    let interval = s.config().celebration_interval as usize;
    for i in 0..interval {
        let x = 40.0 + (i % 10) as f64 * 70.0;
        let y = 60.0 + (i / 10) as f64 * 70.0;
        tap(&mut s, Tool::PlantFlower, Point::new(x, y));
    }
    assert_eq!(s.action_count(), interval as u64);
    assert_eq!(s.effects().count_of(EffectKind::Confetti), EffectKind::Confetti.default_burst());

    let mut sink = RecordingSink::default();
    s.drain_events(&mut sink);
    let celebrations = sink
        .events
        .iter()
        .filter(|e| **e == GardenEvent::PlaySound(SoundCategory::Celebration))
        .count();
    assert_eq!(celebrations, 1);
}

#[test]
fn failed_actions_earn_nothing() {
    let mut s = session();
    tap(&mut s, Tool::HarvestFlower, Point::new(300.0, 300.0));
    tap(&mut s, Tool::CatchButterfly, Point::new(300.0, 300.0));
    tap(&mut s, Tool::Sweep, Point::new(300.0, 300.0));
    assert_eq!(s.action_count(), 0);
    assert_eq!(s.rewards().stars, 0);
    assert!(s.take_events().is_empty());
}

#[test]
fn butterflies_get_caught() {
    let mut s = session();
    tap(&mut s, Tool::SpawnButterfly, Point::new(300.0, 300.0));
    tap(&mut s, Tool::SpawnButterfly, Point::new(310.0, 300.0));
    tap(&mut s, Tool::SpawnButterfly, Point::new(320.0, 300.0));
    // Nothing roams between placing and catching, so all three are in the net.
    tap(&mut s, Tool::CatchButterfly, Point::new(310.0, 300.0));
    assert_eq!(s.rewards().butterflies_caught, s.config().max_catch as u32);
    assert_eq!(s.plants().butterflies().count(), 3 - s.config().max_catch);
}

#[test]
fn watering_drag_counts_one_action() {
    let mut s = session();
    s.dispatch(GardenAction::SelectTool(Tool::Water));
    s.dispatch(GardenAction::PointerDown(Point::new(100.0, 100.0)));
    for i in 0..20 {
        s.dispatch(GardenAction::PointerMove(Point::new(100.0 + i as f64 * 5.0, 100.0)));
    }
    s.dispatch(GardenAction::PointerUp);
    assert_eq!(s.action_count(), 1);
    assert_eq!(s.grass().watered_areas().len(), 21);
    assert!(s.effects().count_of(EffectKind::Water) >= 5);
}

#[test]
fn undo_walks_back_through_history() {
    let mut s = session();
    tap(&mut s, Tool::PlantFlower, Point::new(100.0, 100.0));
    tap(&mut s, Tool::PlaceShape, Point::new(300.0, 100.0));
    s.dispatch(GardenAction::SelectTool(Tool::Paint));
    s.dispatch(GardenAction::PointerDown(Point::new(500.0, 500.0)));
    s.dispatch(GardenAction::PointerMove(Point::new(550.0, 500.0)));
    s.dispatch(GardenAction::PointerUp);

    s.dispatch(GardenAction::Undo);
    assert!(s.paint().strokes().is_empty());
    s.dispatch(GardenAction::Undo);
    assert_eq!(s.plants().shapes().count(), 0);
    s.dispatch(GardenAction::Undo);
    assert!(s.plants().plants().is_empty());
    assert!(!s.can_undo());
    assert_eq!(s.selected_tool(), Tool::Paint);
    assert_eq!(s.rewards().stars, 0);
    assert_eq!(s.action_count(), 0);
}

#[test]
fn replanting_after_undo_does_not_celebrate_again() {
    let mut s = session();
    let interval = s.config().celebration_interval as usize;
    let spot = |i: usize| Point::new(40.0 + (i % 10) as f64 * 70.0, 60.0 + (i / 10) as f64 * 70.0);
    for i in 0..interval {
        tap(&mut s, Tool::PlantFlower, spot(i));
    }
    let stars = s.rewards().stars;
    s.take_events();

    for _ in 0..5 {
        s.dispatch(GardenAction::Undo);
        assert_eq!(s.action_count(), interval as u64 - 1);
        tap(&mut s, Tool::PlantFlower, spot(interval - 1));
    }
    assert_eq!(s.action_count(), interval as u64);
    assert_eq!(s.rewards().stars, stars);
    assert!(!s.take_events().contains(&GardenEvent::PlaySound(SoundCategory::Celebration)));
}

#[test]
fn second_finger_ends_the_first_mow_pass() {
    let mut s = session();
    s.dispatch(GardenAction::SelectTool(Tool::Mow));
    s.dispatch(GardenAction::PointerDown(Point::new(100.0, 100.0)));
    let first = s.grass().cut_count();
    s.dispatch(GardenAction::PointerDown(Point::new(500.0, 400.0)));
    s.dispatch(GardenAction::PointerUp);
    let both = s.grass().cut_count();
    assert!(first > 0 && both > first);
    assert_eq!(s.action_count(), 2);

    s.dispatch(GardenAction::Undo);
    assert_eq!(s.grass().cut_count(), first);
    s.dispatch(GardenAction::Undo);
    assert_eq!(s.grass().cut_count(), 0);
}

#[test]
fn reload_keeps_plants_beyond_the_default_field() {
    let wide = FieldBounds::new(1600.0, 900.0);
    let mut s = GardenSession::new(GardenConfig::default(), wide);
    tap(&mut s, Tool::PlantFlower, Point::new(1400.0, 800.0));
    let json = s.serialize().to_json().unwrap();

    // The page builds the session before the canvas is measured.
    let mut reloaded = GardenSession::new(GardenConfig::default(), FieldBounds::default());
    reloaded.load_json_or_fresh(Some(&json));
    reloaded.dispatch(GardenAction::Resize(wide));
    assert_eq!(reloaded.plants().plants()[0].position, Point::new(1400.0, 800.0));
}

#[test]
fn corrupt_save_starts_fresh() {
    let mut s = session();
    tap(&mut s, Tool::PlantFlower, Point::new(100.0, 100.0));
    s.load_json_or_fresh(Some("not a garden"));
    assert!(s.plants().plants().is_empty());
    assert_eq!(s.rewards().stars, 0);
}

#[test]
fn frames_drive_the_clock() {
    let mut s = session();
    s.dispatch(GardenAction::Frame(1000.0));
    s.dispatch(GardenAction::Frame(1016.0));
    s.dispatch(GardenAction::Frame(5000.0));
    assert_eq!(s.clock().tick_count(), 3);
    assert!(s.clock().elapsed() <= 1.0 / 60.0 + 0.016 + 0.1 + 1e-9);
}
