//! Logical player actions and the held-action set

/// Closed action vocabulary a player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    /// Mapped but not wired to any behaviour yet
    Shoot,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Shoot,
    ];

    /// Map a host key identifier (`KeyboardEvent.key`) to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            "ArrowUp" => Some(Action::Jump),
            " " | "Space" => Some(Action::Shoot),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of currently held actions, one bit per action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn remove(&mut self, action: Action) {
        self.0 &= !action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Held actions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_arrows() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key("ArrowRight"), Some(Action::MoveRight));
        assert_eq!(Action::from_key("ArrowUp"), Some(Action::Jump));
    }

    #[test]
    fn test_from_key_shoot_is_reserved() {
        assert_eq!(Action::from_key(" "), Some(Action::Shoot));
        assert_eq!(Action::from_key("Space"), Some(Action::Shoot));
    }

    #[test]
    fn test_from_key_unmapped() {
        assert_eq!(Action::from_key("ArrowDown"), None);
        assert_eq!(Action::from_key("a"), None);
        assert_eq!(Action::from_key(""), None);
    }

    #[test]
    fn test_action_set_insert_remove() {
        let mut held = ActionSet::new();
        assert!(held.is_empty());

        held.insert(Action::MoveRight);
        held.insert(Action::MoveRight); // key repeat
        assert!(held.contains(Action::MoveRight));
        assert!(!held.contains(Action::MoveLeft));

        held.remove(Action::MoveRight);
        assert!(held.is_empty(), "Repeated presses need a single release");
    }

    #[test]
    fn test_action_set_remove_absent_is_noop() {
        let mut held: ActionSet = [Action::Jump].into_iter().collect();
        held.remove(Action::MoveLeft);
        assert!(held.contains(Action::Jump));
    }

    #[test]
    fn test_action_set_iter_order() {
        let held: ActionSet = [Action::Shoot, Action::MoveLeft, Action::Jump]
            .into_iter()
            .collect();
        let actions: Vec<_> = held.iter().collect();
        assert_eq!(
            actions,
            vec![Action::MoveLeft, Action::Jump, Action::Shoot]
        );

        let mut held = held;
        held.clear();
        assert_eq!(held.iter().count(), 0);
    }
}
