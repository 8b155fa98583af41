use super::garden_view::GardenView;
use crate::state::storage::{self, KEY_CONFIG, KEY_INTRO_SEEN, KEY_SAVE, KEY_SOUND, KEY_VOICE};
use crate::state::SessionHandle;
use crate::util::random_seed;
use yew::prelude::*;
use yew_garden::{FieldBounds, GardenConfig, GardenSession, GardenState};

fn build_session() -> SessionHandle {
    let stored_config = storage::load(KEY_CONFIG);
    let mut config = GardenConfig::from_json_or_default(stored_config.as_deref());
    if stored_config.is_none() {
        config.seed = random_seed();
    }
    let mut session = GardenSession::new(config, FieldBounds::default());
    session.load_json_or_fresh(storage::load(KEY_SAVE).as_deref());
    SessionHandle::new(session)
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(build_session);
    let sound_on = use_state(|| storage::load_flag(KEY_SOUND, true));
    let voice_on = use_state(|| storage::load_flag(KEY_VOICE, true));
    let show_intro = use_state(|| storage::load(KEY_INTRO_SEEN).is_none());
    let open_settings = use_state(|| false);

    // Persist toggles
    {
        let flag = *sound_on;
        use_effect_with(flag, move |_| {
            storage::save_flag(KEY_SOUND, flag);
            || ()
        });
    }
    {
        let flag = *voice_on;
        use_effect_with(flag, move |_| {
            storage::save_flag(KEY_VOICE, flag);
            || ()
        });
    }

    let toggle_sound = {
        let sound_on = sound_on.clone();
        Callback::from(move |()| sound_on.set(!*sound_on))
    };
    let toggle_voice = {
        let voice_on = voice_on.clone();
        Callback::from(move |()| voice_on.set(!*voice_on))
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        Callback::from(move |()| {
            show_intro.set(false);
            storage::save(KEY_INTRO_SEEN, "1");
        })
    };
    let show_help = {
        let show_intro = show_intro.clone();
        Callback::from(move |()| show_intro.set(true))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let hard_reset = {
        let session = session.clone();
        let open_settings = open_settings.clone();
        let show_intro = show_intro.clone();
        let sound_on = sound_on.clone();
        let voice_on = voice_on.clone();
        Callback::from(move |()| {
            storage::wipe_all();
            {
                let mut s = session.0.borrow_mut();
                s.deserialize(GardenState::fresh());
                s.reset();
            }
            log::info!("hard reset: save and settings wiped");
            sound_on.set(true);
            voice_on.set(true);
            open_settings.set(false);
            show_intro.set(true);
        })
    };

    html! {
        <GardenView
            session={(*session).clone()}
            sound_on={*sound_on}
            voice_on={*voice_on}
            show_intro={*show_intro}
            open_settings={*open_settings}
            on_toggle_sound={toggle_sound}
            on_toggle_voice={toggle_voice}
            on_hide_intro={hide_intro}
            on_show_help={show_help}
            on_open_settings={open_settings_cb}
            on_close_settings={close_settings_cb}
            on_hard_reset={hard_reset}
        />
    }
}
