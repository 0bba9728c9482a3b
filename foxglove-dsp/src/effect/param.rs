//! Steppable effect parameters.
//!
//! A parameter is a grid of integer positions mapped onto a value. The UI
//! moves the position; the audio cycle reads the value. The position is a
//! single atomic word, so neither side ever waits for the other.
//!
//! | Kind | Positions | Value at position `p` |
//! |------|-----------|-----------------------|
//! | Linear | `0..=round((max-min)/step)` | `min + (max-min) * p / last` |
//! | Logarithmic | `0..=points-1` | `exp(ln min + (ln max - ln min) * p / last)` |
//! | Choice | `0..choices.len()` | `p` (index into the choices) |

use core::sync::atomic::{AtomicU32, Ordering};

use libm::{expf, logf, roundf};

use crate::error::ParamError;

/// Slack for defaults that land on a grid point but come out a hair below it.
const GRID_EPSILON: f32 = 1e-3;

/// How positions map to values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    Linear { min: f32, max: f32 },
    Logarithmic { ln_min: f32, ln_max: f32 },
    Choice { choices: &'static [&'static str] },
}

/// One named, ranged parameter.
#[derive(Debug)]
pub struct EffectParam {
    label: &'static str,
    kind: ParamKind,
    max_position: u32,
    default_position: u32,
    position: AtomicU32,
}

impl EffectParam {
    /// Evenly spaced values from `min` to `max` in steps of `step`.
    pub fn linear(
        label: &'static str,
        min: f32,
        max: f32,
        step: f32,
        default: f32,
    ) -> Result<Self, ParamError> {
        if !(min < max) {
            return Err(ParamError::EmptyRange { label, min, max });
        }
        if !(step > 0.0) {
            return Err(ParamError::InvalidStep { label, step });
        }
        check_default(label, default, min, max)?;

        let max_position = roundf((max - min) / step) as u32;
        let fraction = (default - min) / (max - min);
        Ok(Self::with_grid(
            label,
            ParamKind::Linear { min, max },
            max_position,
            grid_position(fraction, max_position),
        ))
    }

    /// `points` values spaced evenly on a log scale from `min` to `max`.
    pub fn logarithmic(
        label: &'static str,
        min: f32,
        max: f32,
        points: u32,
        default: f32,
    ) -> Result<Self, ParamError> {
        if !(min > 0.0) {
            return Err(ParamError::NonPositiveLogBound { label });
        }
        if !(min < max) {
            return Err(ParamError::EmptyRange { label, min, max });
        }
        if points < 2 {
            return Err(ParamError::TooFewPoints { label, points });
        }
        check_default(label, default, min, max)?;

        let ln_min = logf(min);
        let ln_max = logf(max);
        let max_position = points - 1;
        let fraction = (logf(default) - ln_min) / (ln_max - ln_min);
        Ok(Self::with_grid(
            label,
            ParamKind::Logarithmic { ln_min, ln_max },
            max_position,
            grid_position(fraction, max_position),
        ))
    }

    /// A fixed list of named options. A `default` not in the list selects
    /// the first entry.
    pub fn choice(
        label: &'static str,
        choices: &'static [&'static str],
        default: &str,
    ) -> Result<Self, ParamError> {
        if choices.is_empty() {
            return Err(ParamError::NoChoices { label });
        }
        let default_position = choices
            .iter()
            .position(|&c| c == default)
            .unwrap_or(0) as u32;
        Ok(Self::with_grid(
            label,
            ParamKind::Choice { choices },
            choices.len() as u32 - 1,
            default_position,
        ))
    }

    fn with_grid(
        label: &'static str,
        kind: ParamKind,
        max_position: u32,
        default_position: u32,
    ) -> Self {
        EffectParam {
            label,
            kind,
            max_position,
            default_position,
            position: AtomicU32::new(default_position),
        }
    }

    /// The same parameter, back at its default position.
    pub fn fresh(&self) -> Self {
        Self::with_grid(self.label, self.kind, self.max_position, self.default_position)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    pub fn default_position(&self) -> u32 {
        self.default_position
    }

    pub fn position(&self) -> u32 {
        self.position.load(Ordering::Relaxed)
    }

    pub fn set_position(&self, position: u32) -> Result<(), ParamError> {
        if position > self.max_position {
            return Err(ParamError::PositionOutOfRange {
                label: self.label,
                position,
                max: self.max_position,
            });
        }
        self.position.store(position, Ordering::Relaxed);
        Ok(())
    }

    /// Move by `delta` positions, stopping at either end. Returns the new
    /// position.
    pub fn step_by(&self, delta: i32) -> u32 {
        let target =
            (self.position() as i64 + delta as i64).clamp(0, self.max_position as i64) as u32;
        self.position.store(target, Ordering::Relaxed);
        target
    }

    pub fn reset(&self) {
        self.position.store(self.default_position, Ordering::Relaxed);
    }

    /// Value at the current position. Choices report their index.
    ///
    /// Safe on the audio path: one relaxed load and a little float math.
    pub fn value(&self) -> f32 {
        self.value_at(self.position())
    }

    pub fn value_at(&self, position: u32) -> f32 {
        let position = position.min(self.max_position);
        let t = if self.max_position == 0 {
            0.0
        } else {
            position as f32 / self.max_position as f32
        };
        match self.kind {
            ParamKind::Linear { min, max } => min + (max - min) * t,
            ParamKind::Logarithmic { ln_min, ln_max } => expf(ln_min + (ln_max - ln_min) * t),
            ParamKind::Choice { .. } => position as f32,
        }
    }

    /// Index of the selected choice; the position for other kinds.
    pub fn choice_index(&self) -> usize {
        self.position() as usize
    }

    /// Name of the selected choice, `None` for numeric parameters.
    pub fn selected_choice(&self) -> Option<&'static str> {
        match self.kind {
            ParamKind::Choice { choices } => choices.get(self.choice_index()).copied(),
            _ => None,
        }
    }
}

fn check_default(label: &'static str, default: f32, min: f32, max: f32) -> Result<(), ParamError> {
    if default < min || default > max {
        return Err(ParamError::DefaultOutOfRange {
            label,
            default,
            min,
            max,
        });
    }
    Ok(())
}

/// Truncate a `[0, 1]` fraction onto `0..=last`.
fn grid_position(fraction: f32, last: u32) -> u32 {
    ((fraction * last as f32 + GRID_EPSILON) as u32).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn linear_grid_and_default() {
        let p = EffectParam::linear("Lin", -10.0, 10.0, 0.5, 1.0).unwrap();
        assert_eq!(p.max_position(), 40);
        assert_eq!(p.default_position(), 22);
        assert!(close(p.value(), 1.0, 1e-5));
        assert!(close(p.value_at(0), -10.0, 1e-5));
        assert!(close(p.value_at(40), 10.0, 1e-5));
    }

    #[test]
    fn logarithmic_grid_and_default() {
        let p = EffectParam::logarithmic("Log", 10.0, 1000.0, 100, 100.0).unwrap();
        assert_eq!(p.max_position(), 99);
        // midpoint of the log range truncates to position 49
        assert_eq!(p.default_position(), 49);
        assert!(close(p.value_at(0), 10.0, 1e-3));
        assert!(close(p.value_at(99), 1000.0, 0.1));
        assert!(p.value() < 100.0 && p.value() > 90.0);
    }

    #[test]
    fn logarithmic_default_at_top_of_range() {
        let p = EffectParam::logarithmic("Volume", 0.01, 1.0, 100, 1.0).unwrap();
        assert_eq!(p.default_position(), 99);
        assert!(close(p.value(), 1.0, 1e-5));
    }

    #[test]
    fn choice_defaults_and_fallback() {
        static TYPES: [&str; 3] = ["A", "B", "C"];
        let p = EffectParam::choice("Sel", &TYPES, "B").unwrap();
        assert_eq!(p.default_position(), 1);
        assert_eq!(p.selected_choice(), Some("B"));
        assert_eq!(p.max_position(), 2);

        let q = EffectParam::choice("Sel", &TYPES, "missing").unwrap();
        assert_eq!(q.selected_choice(), Some("A"));
    }

    #[test]
    fn invalid_definitions_are_rejected() {
        assert!(matches!(
            EffectParam::linear("x", 1.0, 1.0, 0.1, 1.0),
            Err(ParamError::EmptyRange { .. })
        ));
        assert!(matches!(
            EffectParam::linear("x", 0.0, 1.0, 0.0, 0.5),
            Err(ParamError::InvalidStep { .. })
        ));
        assert!(matches!(
            EffectParam::linear("x", 0.0, 1.0, 0.1, 2.0),
            Err(ParamError::DefaultOutOfRange { .. })
        ));
        assert!(matches!(
            EffectParam::logarithmic("x", 0.0, 1.0, 10, 0.5),
            Err(ParamError::NonPositiveLogBound { .. })
        ));
        assert!(matches!(
            EffectParam::logarithmic("x", 1.0, 10.0, 1, 5.0),
            Err(ParamError::TooFewPoints { .. })
        ));
        assert!(matches!(
            EffectParam::choice("x", &[], "a"),
            Err(ParamError::NoChoices { .. })
        ));
    }

    #[test]
    fn stepping_saturates_at_both_ends() {
        let p = EffectParam::linear("Lin", 0.0, 1.0, 0.25, 0.5).unwrap();
        assert_eq!(p.position(), 2);
        assert_eq!(p.step_by(1), 3);
        assert_eq!(p.step_by(10), 4);
        assert_eq!(p.step_by(-100), 0);
        p.reset();
        assert_eq!(p.position(), 2);
    }

    #[test]
    fn set_position_checks_range() {
        let p = EffectParam::linear("Lin", 0.0, 1.0, 0.25, 0.5).unwrap();
        assert_eq!(p.set_position(4), Ok(()));
        assert!(close(p.value(), 1.0, 1e-6));
        assert_eq!(
            p.set_position(5),
            Err(ParamError::PositionOutOfRange {
                label: "Lin",
                position: 5,
                max: 4
            })
        );
        assert_eq!(p.position(), 4);
    }

    #[test]
    fn fresh_copy_starts_at_default() {
        let p = EffectParam::linear("Lin", 0.0, 1.0, 0.25, 0.5).unwrap();
        p.set_position(0).unwrap();
        let q = p.fresh();
        assert_eq!(q.position(), 2);
        assert_eq!(p.position(), 0);
        assert_eq!(q.label(), "Lin");
    }
}
