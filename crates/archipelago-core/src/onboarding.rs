//! Onboarding: avatar selection, name entry, and the start guard.
//!
//! During [`Phase::Onboarding`] the player cycles through the avatar roster
//! and types a name. Starting requires a non-empty name; once the game is
//! running both choices are frozen and the functions here leave the state
//! alone.

use archipelago_types::{CycleDirection, GameState, Phase};
use tracing::debug;

/// Avatar image paths shipped with the game.
pub const DEFAULT_AVATARS: [&str; 4] = [
    "images/avatar1.png",
    "images/avatar2.png",
    "images/avatar3.png",
    "images/avatar4.png",
];

/// Errors raised at the onboarding boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    /// Start was requested without a player name.
    #[error("cannot start without a player name")]
    EmptyName,

    /// Start was requested after the game already left onboarding.
    #[error("game already started (phase: {phase})")]
    AlreadyStarted {
        /// The phase the game was in.
        phase: Phase,
    },

    /// An avatar roster was built with no entries.
    #[error("avatar roster must contain at least one avatar")]
    EmptyRoster,
}

/// Ordered, non-empty list of selectable avatars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRoster {
    /// Image path per avatar.
    images: Vec<String>,
}

impl AvatarRoster {
    /// Build a roster from image paths.
    ///
    /// # Errors
    ///
    /// Returns [`OnboardingError::EmptyRoster`] if `images` is empty.
    pub fn new(images: Vec<String>) -> Result<Self, OnboardingError> {
        if images.is_empty() {
            return Err(OnboardingError::EmptyRoster);
        }
        Ok(Self { images })
    }

    /// Number of avatars.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`; a roster cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image path for an index, wrapping indices past the end.
    pub fn image(&self, index: usize) -> &str {
        index
            .checked_rem(self.images.len())
            .and_then(|i| self.images.get(i))
            .map_or("", String::as_str)
    }
}

impl Default for AvatarRoster {
    fn default() -> Self {
        Self {
            images: DEFAULT_AVATARS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Step an index one place left or right, wrapping in both directions.
///
/// `len` of zero yields zero.
pub fn cycle_index(index: usize, len: usize, direction: CycleDirection) -> usize {
    if len == 0 {
        return 0;
    }
    let current = index.checked_rem(len).unwrap_or(0);
    match direction {
        CycleDirection::Left => current.checked_sub(1).unwrap_or(len.saturating_sub(1)),
        CycleDirection::Right => current
            .saturating_add(1)
            .checked_rem(len)
            .unwrap_or(0),
    }
}

/// Whether a name is acceptable for starting the game.
pub const fn can_start(player_name: &str) -> bool {
    !player_name.is_empty()
}

/// Select the previous or next avatar. No-op outside onboarding.
pub fn cycle_avatar(state: &GameState, roster: &AvatarRoster, direction: CycleDirection) -> GameState {
    let mut next = state.clone();
    if state.phase == Phase::Onboarding {
        next.avatar_index = cycle_index(state.avatar_index, roster.len(), direction);
    } else {
        debug!(phase = %state.phase, "avatar is fixed after onboarding");
    }
    next
}

/// Replace the player name. No-op outside onboarding.
pub fn set_player_name(state: &GameState, name: &str) -> GameState {
    let mut next = state.clone();
    if state.phase == Phase::Onboarding {
        name.clone_into(&mut next.player_name);
    } else {
        debug!(phase = %state.phase, "name is fixed after onboarding");
    }
    next
}

/// Leave onboarding and start playing.
///
/// # Errors
///
/// Returns [`OnboardingError::EmptyName`] if no name was entered, or
/// [`OnboardingError::AlreadyStarted`] outside onboarding.
pub fn start(state: &GameState) -> Result<GameState, OnboardingError> {
    if state.phase != Phase::Onboarding {
        return Err(OnboardingError::AlreadyStarted { phase: state.phase });
    }
    if !can_start(&state.player_name) {
        return Err(OnboardingError::EmptyName);
    }
    let mut next = state.clone();
    next.phase = Phase::Playing;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_state;

    #[test]
    fn cycling_left_from_first_wraps_to_last() {
        assert_eq!(cycle_index(0, 4, CycleDirection::Left), 3);
        assert_eq!(cycle_index(2, 4, CycleDirection::Left), 1);
    }

    #[test]
    fn cycling_right_from_last_wraps_to_first() {
        assert_eq!(cycle_index(3, 4, CycleDirection::Right), 0);
        assert_eq!(cycle_index(1, 4, CycleDirection::Right), 2);
    }

    #[test]
    fn single_avatar_roster_stays_put() {
        assert_eq!(cycle_index(0, 1, CycleDirection::Left), 0);
        assert_eq!(cycle_index(0, 1, CycleDirection::Right), 0);
        assert_eq!(cycle_index(5, 0, CycleDirection::Right), 0);
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(AvatarRoster::new(Vec::new()), Err(OnboardingError::EmptyRoster));
    }

    #[test]
    fn default_roster_has_four_avatars() {
        let roster = AvatarRoster::default();
        assert_eq!(roster.len(), 4);
        assert!(!roster.is_empty());
        assert_eq!(roster.image(0), "images/avatar1.png");
        assert_eq!(roster.image(3), "images/avatar4.png");
        assert_eq!(roster.image(4), "images/avatar1.png");
    }

    #[test]
    fn cycle_avatar_updates_state_during_onboarding() {
        let roster = AvatarRoster::default();
        let state = cycle_avatar(&initial_state(), &roster, CycleDirection::Left);
        assert_eq!(state.avatar_index, 3);
        let state = cycle_avatar(&state, &roster, CycleDirection::Right);
        assert_eq!(state.avatar_index, 0);
    }

    #[test]
    fn start_requires_a_name() {
        let state = initial_state();
        assert!(!can_start(&state.player_name));
        assert_eq!(start(&state), Err(OnboardingError::EmptyName));

        let named = set_player_name(&state, "Ucup");
        assert!(can_start(&named.player_name));
        let playing = start(&named);
        assert_eq!(playing.map(|s| s.phase), Ok(Phase::Playing));
    }

    #[test]
    fn whitespace_name_is_accepted() {
        let named = set_player_name(&initial_state(), " ");
        assert!(start(&named).is_ok());
    }

    #[test]
    fn choices_freeze_once_playing() {
        let roster = AvatarRoster::default();
        let named = set_player_name(&initial_state(), "Ucup");
        let Ok(playing) = start(&named) else {
            panic!("start should succeed with a name");
        };

        let renamed = set_player_name(&playing, "Someone else");
        assert_eq!(renamed.player_name, "Ucup");
        let cycled = cycle_avatar(&playing, &roster, CycleDirection::Right);
        assert_eq!(cycled.avatar_index, 0);
        assert_eq!(
            start(&playing),
            Err(OnboardingError::AlreadyStarted {
                phase: Phase::Playing
            })
        );
    }
}
