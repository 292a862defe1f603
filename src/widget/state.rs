use crate::datasources::RateResult;

pub const TITLE: &str = "Dolar del momento";
pub const LOADING: &str = "Cargando...";

const PRICE_SIZE: f32 = 32.0;
const MESSAGE_SIZE: f32 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Position {
        Position { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Muted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub pos: Position,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

/// Text content of the window. The price label is retained and rewritten on
/// every completed fetch.
pub struct WidgetState {
    title: Label,
    price: Label,
    date: Label,
    phase: Phase,
}

impl WidgetState {
    pub fn new(date: String) -> WidgetState {
        WidgetState {
            title: Label {
                text: TITLE.to_owned(),
                size: 14.0,
                pos: Position::new(25.0, 40.0),
                tone: Tone::Primary,
            },
            price: Label {
                text: LOADING.to_owned(),
                size: MESSAGE_SIZE,
                pos: Position::new(20.0, 65.0),
                tone: Tone::Primary,
            },
            date: Label {
                text: date,
                size: 12.0,
                pos: Position::new(26.0, 150.0),
                tone: Tone::Muted,
            },
            phase: Phase::Idle,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves to `Fetching`. Returns false if a fetch is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.phase == Phase::Fetching {
            return false;
        }
        self.phase = Phase::Fetching;
        true
    }

    pub fn complete_refresh(&mut self, result: RateResult) {
        match result {
            RateResult::Success { price } => {
                self.price.text = format!("{}Bs.", price);
                self.price.size = PRICE_SIZE;
            }
            RateResult::Failure { message } => {
                self.price.text = message;
                self.price.size = MESSAGE_SIZE;
            }
        }
        self.phase = Phase::Idle;
    }

    #[cfg(test)]
    pub fn price(&self) -> &Label {
        &self.price
    }

    /// Title, price and date, in drawing order.
    pub fn labels(&self) -> [&Label; 3] {
        [&self.title, &self.price, &self.date]
    }
}

/// A primary press outside the refresh button hands the window to the window
/// manager, which moves it by the pointer delta until release. Presses on the
/// button and frames without a new press leave the window alone.
pub fn starts_window_drag(pressed: bool, over_button: bool) -> bool {
    pressed && !over_button
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(price: &str) -> RateResult {
        RateResult::Success {
            price: price.to_owned(),
        }
    }

    #[test]
    fn starts_idle_and_loading() {
        let state = WidgetState::new("Jueves, 17 de octubre de 2024".to_owned());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.price().text, LOADING);
        let texts: Vec<_> = state.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            ["Dolar del momento", LOADING, "Jueves, 17 de octubre de 2024"]
        );
    }

    #[test]
    fn success_shows_price_with_suffix() {
        let mut state = WidgetState::new(String::new());
        assert!(state.begin_refresh());
        assert_eq!(state.phase(), Phase::Fetching);
        state.complete_refresh(success("36.50"));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.price().text, "36.50Bs.");
        assert_eq!(state.price().size, PRICE_SIZE);
    }

    #[test]
    fn failure_shows_message() {
        let mut state = WidgetState::new(String::new());
        state.begin_refresh();
        state.complete_refresh(RateResult::Failure {
            message: "No se pudo obtener el precio del dólar.".to_owned(),
        });
        assert_eq!(state.price().text, "No se pudo obtener el precio del dólar.");
        assert_eq!(state.price().size, MESSAGE_SIZE);
    }

    #[test]
    fn repeated_refresh_keeps_one_price_label() {
        let mut state = WidgetState::new(String::new());
        for result in [
            success("36.50"),
            RateResult::Failure {
                message: "x".to_owned(),
            },
            success("36.61"),
        ] {
            assert!(state.begin_refresh());
            state.complete_refresh(result);
        }
        let labels = state.labels();
        let at_price: Vec<_> = labels
            .iter()
            .filter(|l| l.pos == Position::new(20.0, 65.0))
            .collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(at_price.len(), 1);
        assert_eq!(at_price[0].text, "36.61Bs.");
    }

    #[test]
    fn refresh_is_ignored_while_fetching() {
        let mut state = WidgetState::new(String::new());
        assert!(state.begin_refresh());
        assert!(!state.begin_refresh());
        state.complete_refresh(success("1"));
        assert!(state.begin_refresh());
    }

    #[test]
    fn press_on_background_starts_drag() {
        assert!(starts_window_drag(true, false));
    }

    #[test]
    fn press_on_button_does_not_drag() {
        assert!(!starts_window_drag(true, true));
    }

    #[test]
    fn held_pointer_does_not_restart_drag() {
        assert!(!starts_window_drag(false, false));
        assert!(!starts_window_drag(false, true));
    }
}
