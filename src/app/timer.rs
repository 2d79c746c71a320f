//! Timer als Zustandsmaschine, weitergeschaltet durch externe Ticks.

/// Zustand eines `Timer`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimerState {
    /// Nicht gestartet oder abgebrochen
    #[default]
    Idle,
    /// Läuft, verbleibende Zeit in Sekunden
    Running {
        /// Verbleibende Sekunden
        remaining: f32,
    },
    /// Abgelaufen
    Done,
}

/// Countdown ohne eigene Zeitquelle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timer {
    state: TimerState,
}

impl Timer {
    /// Neuer Timer im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet (oder startet neu) mit `duration` Sekunden.
    ///
    /// Eine Dauer ≤ 0 springt direkt auf `Done`.
    pub fn start(&mut self, duration: f32) {
        self.state = if duration > 0.0 {
            TimerState::Running {
                remaining: duration,
            }
        } else {
            TimerState::Done
        };
    }

    /// Zieht `dt` Sekunden ab und liefert den neuen Zustand.
    pub fn tick(&mut self, dt: f32) -> TimerState {
        if let TimerState::Running { remaining } = self.state {
            let remaining = remaining - dt.max(0.0);
            self.state = if remaining <= 0.0 {
                TimerState::Done
            } else {
                TimerState::Running { remaining }
            };
        }
        self.state
    }

    /// Bricht ab und kehrt nach `Idle` zurück.
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// `true` solange der Timer läuft.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// `true` wenn der Timer abgelaufen ist.
    pub fn is_done(&self) -> bool {
        self.state == TimerState::Done
    }

    /// Verbleibende Sekunden, falls der Timer läuft.
    pub fn remaining(&self) -> Option<f32> {
        match self.state {
            TimerState::Running { remaining } => Some(remaining),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_running_done() {
        let mut timer = Timer::new();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.tick(1.0), TimerState::Idle);

        timer.start(1.0);
        assert!(timer.is_running());
        assert_eq!(timer.tick(0.25), TimerState::Running { remaining: 0.75 });
        assert_eq!(timer.remaining(), Some(0.75));

        assert_eq!(timer.tick(0.75), TimerState::Done);
        assert!(timer.is_done());
        assert_eq!(timer.tick(1.0), TimerState::Done);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut timer = Timer::new();
        timer.start(5.0);
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_zero_duration_is_done_immediately() {
        let mut timer = Timer::new();
        timer.start(0.0);
        assert!(timer.is_done());
    }

    #[test]
    fn test_negative_tick_does_not_extend() {
        let mut timer = Timer::new();
        timer.start(1.0);
        assert_eq!(timer.tick(-3.0), TimerState::Running { remaining: 1.0 });
    }
}
