//! Typed control models: dropdown, bounded slider and bounded integer
//! field.
//!
//! Controls hold state only. A user-driven change goes through
//! [`Dropdown::select`] / [`FloatSlider::set`] / [`IntField::submit_text`]
//! and reports whether anything changed; programmatic updates use the
//! `*_silently` methods and never count as a change, so panel handlers are
//! not re-entered by their own resets.

use serde::{Deserialize, Serialize};

use crate::error::OrbviewError;

// ── Dropdown ─────────────────────────────────────────────────────────────

/// One labelled dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption<T> {
    /// Text shown to the user.
    pub label: String,
    /// Value selected by this entry.
    pub value: T,
}

impl<T> DropdownOption<T> {
    /// Entry with `label` selecting `value`.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Single-choice selector over a fixed, ordered option list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown<T> {
    options: Vec<DropdownOption<T>>,
    value: T,
}

impl<T: Clone + PartialEq> Dropdown<T> {
    /// Dropdown showing `options`, currently at `value`.
    pub fn new(options: Vec<DropdownOption<T>>, value: T) -> Self {
        Self { options, value }
    }

    /// Current options, in display order.
    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.options
    }

    /// Current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Label of the current value, if it is among the options.
    pub fn label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label.as_str())
    }

    /// Whether `value` is one of the options.
    pub fn contains(&self, value: &T) -> bool {
        self.options.iter().any(|o| o.value == *value)
    }

    /// User pick. `None` if `value` is not an option, otherwise whether the
    /// value changed.
    pub fn select(&mut self, value: &T) -> Option<bool> {
        if !self.contains(value) {
            return None;
        }
        if self.value == *value {
            return Some(false);
        }
        self.value = value.clone();
        Some(true)
    }

    /// Programmatic value update; returns `false` (and leaves the value
    /// alone) if `value` is not an option.
    pub fn set_silently(&mut self, value: T) -> bool {
        if !self.contains(&value) {
            return false;
        }
        self.value = value;
        true
    }

    /// Programmatic replacement of both options and value.
    pub fn replace_silently(&mut self, options: Vec<DropdownOption<T>>, value: T) {
        self.options = options;
        self.value = value;
    }
}

// ── Float slider ─────────────────────────────────────────────────────────

/// Bounded real-valued slider. Values outside `[min, max]` are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatSlider {
    /// Label shown next to the slider.
    pub description: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    /// Decimals shown in the readout.
    pub readout_precision: usize,
}

impl FloatSlider {
    /// Slider over `[min, max]` with `step`, starting at `value`.
    ///
    /// # Errors
    ///
    /// [`OrbviewError::Configuration`] if the bounds are not a finite,
    /// non-empty interval, the step is not positive, or `value` is out of
    /// bounds.
    pub fn new(
        description: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
        value: f64,
    ) -> Result<Self, OrbviewError> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min >= max || step <= 0.0 || !(min..=max).contains(&value) {
            return Err(OrbviewError::Configuration(format!(
                "slider min={min} max={max} step={step} value={value} is invalid"
            )));
        }
        Ok(Self {
            description: description.into(),
            min,
            max,
            step,
            value,
            readout_precision: 4,
        })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step between slider positions.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current value formatted for display.
    #[must_use]
    pub fn readout(&self) -> String {
        format!("{:.*}", self.readout_precision, self.value)
    }

    /// User drag. Clamps into bounds; returns the new value if it changed.
    /// Non-finite input is ignored.
    pub fn set(&mut self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            log::warn!("{}: ignoring non-finite value {value}", self.description);
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return None;
        }
        self.value = clamped;
        Some(clamped)
    }

    /// Programmatic update, clamped into bounds. Returns the stored value.
    ///
    /// # Errors
    ///
    /// [`OrbviewError::Parse`] for non-finite input; the value is unchanged.
    pub fn set_silently(&mut self, value: f64) -> Result<f64, OrbviewError> {
        if !value.is_finite() {
            return Err(OrbviewError::Parse(format!(
                "{}: {value} is not a finite number",
                self.description
            )));
        }
        self.value = value.clamp(self.min, self.max);
        Ok(self.value)
    }
}

// ── Integer field ────────────────────────────────────────────────────────

/// Bounded integer input that also accepts typed-in text.
///
/// Bad text never changes the stored value: the field is flagged with an
/// error message and its text reverts to the last good value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntField {
    /// Label shown next to the field.
    pub description: String,
    min: u32,
    max: u32,
    value: u32,
    text: String,
    error: Option<String>,
}

impl IntField {
    /// Field over `[min, max]` starting at `value`.
    ///
    /// # Errors
    ///
    /// [`OrbviewError::Configuration`] if `value` is outside the bounds.
    pub fn new(
        description: impl Into<String>,
        min: u32,
        max: u32,
        value: u32,
    ) -> Result<Self, OrbviewError> {
        if !(min..=max).contains(&value) {
            return Err(OrbviewError::Configuration(format!(
                "field value {value} outside [{min}, {max}]"
            )));
        }
        Ok(Self {
            description: description.into(),
            min,
            max,
            value,
            text: value.to_string(),
            error: None,
        })
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Last accepted value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Text currently shown.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message from the last rejected submission, cleared on success.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Typed set, validated against the bounds.
    pub fn set(&mut self, value: u32) -> Result<u32, OrbviewError> {
        if !(self.min..=self.max).contains(&value) {
            return Err(self.reject(format!(
                "{value} is outside [{}, {}]",
                self.min, self.max
            )));
        }
        self.value = value;
        self.text = value.to_string();
        self.error = None;
        Ok(value)
    }

    /// Parse submitted text and store it.
    ///
    /// # Errors
    ///
    /// [`OrbviewError::Parse`] if the text is not an integer within bounds;
    /// the stored value is left unchanged.
    pub fn submit_text(&mut self, text: &str) -> Result<u32, OrbviewError> {
        match text.trim().parse::<u32>() {
            Ok(value) => self.set(value),
            Err(_) => Err(self.reject(format!("'{}' is not a positive integer", text.trim()))),
        }
    }

    fn reject(&mut self, msg: String) -> OrbviewError {
        log::warn!("{}: {msg}", self.description);
        self.text = self.value.to_string();
        self.error = Some(msg.clone());
        OrbviewError::Parse(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Dropdown<&'static str> {
        Dropdown::new(
            vec![
                DropdownOption::new("A", "a"),
                DropdownOption::new("B", "b"),
                DropdownOption::new("C", "c"),
            ],
            "a",
        )
    }

    #[test]
    fn dropdown_select_reports_change() {
        let mut d = abc();
        assert_eq!(d.select(&"a"), Some(false));
        assert_eq!(d.select(&"c"), Some(true));
        assert_eq!(d.label(), Some("C"));
        assert_eq!(d.select(&"z"), None);
        assert_eq!(*d.value(), "c");
    }

    #[test]
    fn dropdown_silent_updates() {
        let mut d = abc();
        assert!(!d.set_silently("z"));
        assert!(d.set_silently("b"));
        d.replace_silently(vec![DropdownOption::new("X", "x")], "x");
        assert_eq!(d.options().len(), 1);
        assert_eq!(*d.value(), "x");
    }

    #[test]
    fn slider_clamps_to_bounds() {
        let mut s = FloatSlider::new("Isovalue", 0.0, 0.075, 0.00075, 0.01).unwrap();
        assert_eq!(s.set(0.5), Some(0.075));
        assert_eq!(s.set(-1.0), Some(0.0));
        assert_eq!(s.set(0.0), None);
        assert_eq!(s.set(f64::NAN), None);
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.set(0.075), Some(0.075));
        assert_eq!(s.readout(), "0.0750");
    }

    #[test]
    fn slider_silent_update_clamps() {
        let mut s = FloatSlider::new("Isovalue", 0.0, 0.075, 0.00075, 0.01).unwrap();
        assert_eq!(s.set_silently(0.02).unwrap(), 0.02);
        assert_eq!(s.set_silently(3.0).unwrap(), 0.075);
        assert!(matches!(
            s.set_silently(f64::INFINITY),
            Err(OrbviewError::Parse(_))
        ));
        assert_eq!(s.value(), 0.075);
    }

    #[test]
    fn slider_rejects_bad_bounds() {
        assert!(FloatSlider::new("x", 1.0, 0.0, 0.1, 0.5).is_err());
        assert!(FloatSlider::new("x", 0.0, 1.0, 0.0, 0.5).is_err());
        assert!(FloatSlider::new("x", 0.0, 1.0, 0.1, 2.0).is_err());
    }

    #[test]
    fn field_parses_submitted_text() {
        let mut f = IntField::new("Orbital resolution", 2, 200, 40).unwrap();
        assert_eq!(f.submit_text(" 64 ").unwrap(), 64);
        assert_eq!(f.value(), 64);
        assert_eq!(f.text(), "64");
        assert!(f.error().is_none());
    }

    #[test]
    fn field_rejects_bad_text_without_corrupting_value() {
        let mut f = IntField::new("Orbital resolution", 2, 200, 40).unwrap();
        for bad in ["abc", "", "-3", "4.5", "0", "1000"] {
            assert!(matches!(f.submit_text(bad), Err(OrbviewError::Parse(_))));
            assert_eq!(f.value(), 40);
            assert_eq!(f.text(), "40");
            assert!(f.error().is_some());
        }
        assert_eq!(f.submit_text("41").unwrap(), 41);
        assert!(f.error().is_none());
    }
}
