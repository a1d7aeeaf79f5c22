use crate::event::{PointerAction, ToolType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateDecision {
    /// The event must be absorbed without touching the stroke.
    pub denied: bool,
    /// New warning state to report, if the drawing phase changed.
    pub warning: Option<bool>,
}

/// Decides whether pointer input may draw, and when to tell the host about it.
///
/// Warnings are deduplicated on the drawing phase only: a report goes out when input enters or
/// leaves Down/Move, carrying whether that input was denied at the time. A denial that flips
/// without a phase change is not reported.
#[derive(Debug, Default)]
pub struct InputGate {
    stylus_only_allowed: bool,
    last_reported_drawing: bool,
}

impl InputGate {
    pub fn new(stylus_only_allowed: bool) -> Self {
        InputGate {
            stylus_only_allowed,
            last_reported_drawing: false,
        }
    }

    pub fn stylus_only_allowed(&self) -> bool {
        self.stylus_only_allowed
    }

    pub fn set_stylus_only_allowed(&mut self, allowed: bool) {
        self.stylus_only_allowed = allowed;
    }

    pub fn last_reported_drawing(&self) -> bool {
        self.last_reported_drawing
    }

    pub fn check(&mut self, action: PointerAction, tool: ToolType) -> GateDecision {
        let denied = self.stylus_only_allowed && !tool.is_stylus();
        let drawing = action.is_drawing();

        let warning = if drawing != self.last_reported_drawing {
            self.last_reported_drawing = drawing;
            Some(drawing && denied)
        } else {
            None
        };

        GateDecision { denied, warning }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use PointerAction::{Down, Move, Up};
    use ToolType::{Finger, Stylus};

    #[test]
    fn finger_denied_when_stylus_only() {
        let mut gate = InputGate::new(true);
        assert_eq!(
            gate.check(Down, Finger),
            GateDecision {
                denied: true,
                warning: Some(true),
            }
        );
        assert_eq!(
            gate.check(Move, Finger),
            GateDecision {
                denied: true,
                warning: None,
            }
        );
        assert_eq!(
            gate.check(Up, Finger),
            GateDecision {
                denied: true,
                warning: Some(false),
            }
        );
    }

    #[test]
    fn stylus_always_admitted() {
        let mut gate = InputGate::new(true);
        let decision = gate.check(Down, Stylus);
        assert!(!decision.denied);
        assert_eq!(decision.warning, Some(false));
    }

    #[test]
    fn reports_once_per_phase_change() {
        let mut gate = InputGate::new(false);
        let phases = [
            Down,
            Move,
            Move,
            Up,
            PointerAction::Other,
            Down,
            Up,
            Up,
            Move,
            PointerAction::Other,
        ];
        let reports = phases
            .iter()
            .filter_map(|action| gate.check(*action, Finger).warning)
            .count();

        // false->true at Down, true->false at Up, false->true at Down, true->false at Up,
        // false->true at Move, true->false at Other
        assert_eq!(reports, 6);
    }

    #[test]
    fn denial_flip_without_phase_change_is_silent() {
        let mut gate = InputGate::new(false);
        assert_eq!(gate.check(Down, Finger).warning, Some(false));

        gate.set_stylus_only_allowed(true);
        let decision = gate.check(Move, Finger);
        assert!(decision.denied);
        assert_eq!(decision.warning, None);

        gate.set_stylus_only_allowed(false);
        assert_eq!(gate.check(Move, Finger).warning, None);
        assert!(gate.last_reported_drawing());
    }
}
