use ml_core::AppConfig;

const MAX_TYPED: usize = 6;

/// The study-hours number box.
///
/// Holds a committed value bounded to `[min, max]` plus an optional text
/// buffer while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursInput {
    value: f64,
    typed: Option<String>,
    min: f64,
    max: f64,
    step: f64,
}

impl HoursInput {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            value: config.hours_min,
            typed: None,
            min: config.hours_min,
            max: config.hours_max,
            step: config.hours_step,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.typed.is_some()
    }

    pub fn bounds(&self) -> (f64, f64, f64) {
        (self.min, self.max, self.step)
    }

    pub fn step_up(&mut self) {
        self.commit();
        self.value = self.bound(self.value + self.step);
    }

    pub fn step_down(&mut self) {
        self.commit();
        self.value = self.bound(self.value - self.step);
    }

    /// Appends a digit or a single decimal point to the typed text.
    pub fn push(&mut self, c: char) {
        let typed = self.typed.get_or_insert_with(String::new);
        let accepted = c.is_ascii_digit() || (c == '.' && !typed.contains('.'));
        if accepted && typed.len() < MAX_TYPED {
            typed.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let value = self.value;
        let typed = self.typed.get_or_insert_with(|| format_hours(value));
        typed.pop();
    }

    /// Turns the typed text into the committed value.
    ///
    /// Text that does not parse leaves the previous value in place.
    pub fn commit(&mut self) {
        if let Some(typed) = self.typed.take() {
            if let Ok(v) = typed.parse::<f64>() {
                self.value = self.bound(v);
            }
        }
    }

    /// Text shown in the box.
    pub fn display(&self) -> String {
        match &self.typed {
            Some(typed) => typed.clone(),
            None => format_hours(self.value),
        }
    }

    fn bound(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

fn format_hours(v: f64) -> String {
    format!("{v:.2}")
}
