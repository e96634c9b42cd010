use bevy::prelude::*;
use rover_dig_sim::{Command, EpisodePhase, SessionEvent};

use super::resources::{CommandIssued, RuntimeConfig, SessionState, ViewSettings};
use super::state::AppPhase;

pub fn next_xray(phase: EpisodePhase, command: Command, current: bool, on_start: bool) -> bool {
    match (phase, command) {
        (EpisodePhase::Playing, Command::ToggleXray) => !current,
        (EpisodePhase::Over { .. }, Command::Recharge) => on_start,
        _ => current,
    }
}

pub fn apply_commands(
    mut issued: EventReader<CommandIssued>,
    mut session: ResMut<SessionState>,
    mut view: ResMut<ViewSettings>,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    for CommandIssued(command) in issued.read().copied() {
        let xray = next_xray(
            session.session.phase(),
            command,
            view.xray,
            config.display.xray_on_start,
        );
        if xray != view.xray {
            view.xray = xray;
            debug!(xray, %command, "x-ray changed");
        }

        match session.session.submit(command) {
            SessionEvent::EpisodeEnded { .. } => {
                match serde_json::to_string(&session.session.engine().observe(true)) {
                    Ok(json) => info!(observation = %json, "final state"),
                    Err(err) => warn!("could not serialize final state: {err}"),
                }
                next_phase.set(AppPhase::GameOver);
            }
            SessionEvent::EpisodeStarted => next_phase.set(AppPhase::Playing),
            SessionEvent::Stepped(_) | SessionEvent::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rover_dig_sim::{Action, Command, EpisodePhase};

    use super::next_xray;

    const OVER: EpisodePhase = EpisodePhase::Over { minerals_found: 3 };

    #[test]
    fn toggle_flips_only_while_playing() {
        assert!(!next_xray(EpisodePhase::Playing, Command::ToggleXray, true, true));
        assert!(next_xray(EpisodePhase::Playing, Command::ToggleXray, false, true));

        assert!(next_xray(OVER, Command::ToggleXray, true, true));
        assert!(!next_xray(OVER, Command::ToggleXray, false, true));
    }

    #[test]
    fn recharge_restores_start_setting() {
        assert!(next_xray(OVER, Command::Recharge, false, true));
        assert!(!next_xray(OVER, Command::Recharge, true, false));

        assert!(!next_xray(EpisodePhase::Playing, Command::Recharge, false, true));
    }

    #[test]
    fn actions_leave_xray_alone() {
        for action in Action::ALL {
            assert!(next_xray(EpisodePhase::Playing, Command::Act(action), true, false));
            assert!(!next_xray(OVER, Command::Act(action), false, true));
        }
    }
}
