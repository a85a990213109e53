//! # Workout summary
//!
//! Summary statistics (distance, mean speed, burnt calories) from raw
//! fitness-tracker sensor packages.
//!
//! A package is a workout code plus a flat list of numeric readings:
//!
//! ```notrust
//! ("SWM", [720, 1, 80, 25, 40])   # strokes, hours, kg, pool m, crossings
//! ("RUN", [15000, 1, 75])         # steps, hours, kg
//! ("WLK", [9000, 1, 75, 180])     # steps, hours, kg, height cm
//! ```
//!
//! [`read_package`] maps a package onto the matching [`Workout`] record,
//! which derives its statistics and renders them as one [`SummaryReport`]
//! line.

mod package;

pub use self::package::{PackageError, read_package};

const M_IN_KM: f64 = 1000.0;
const MINS_IN_H: f64 = 60.0;

/// Distance covered by one step, in meters.
const LEN_STEP: f64 = 0.65;
/// Distance covered by one stroke, in meters.
const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h expressed in m/s.
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readings {
    /// Number of steps or strokes.
    pub action: u64,
    /// Session length in hours. Always positive.
    pub duration_h: f64,
    /// Participant mass in kilograms.
    pub weight_kg: f64,
}

impl Readings {
    /// Build readings, rejecting a duration the speed formulas cannot
    /// divide by.
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Result<Self, PackageError> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(PackageError::InvalidDuration(duration_h));
        }

        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

/// Label identifying a workout kind in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }
}

/// A single recorded workout session.
///
/// The three kinds share the distance formula (action count times the
/// per-kind step length) and the speed formula (distance over duration),
/// except that swimming derives speed from pool crossings and measures
/// its step length per stroke. Each kind has its own calorie formula.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workout {
    Running(Readings),
    Walking {
        readings: Readings,
        /// Participant height in centimeters.
        height_cm: f64,
    },
    Swimming {
        readings: Readings,
        /// Pool length in meters.
        pool_length_m: f64,
        /// One-way pool lengths completed.
        pool_crossings: f64,
    },
}

impl Workout {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    const fn readings(&self) -> &Readings {
        match self {
            Self::Running(readings)
            | Self::Walking { readings, .. }
            | Self::Swimming { readings, .. } => readings,
        }
    }

    /// Distance covered during the session, in km.
    pub fn distance_km(&self) -> f64 {
        let step_len = match self {
            Self::Swimming { .. } => LEN_STROKE,
            _ => LEN_STEP,
        };

        self.readings().action as f64 * step_len / M_IN_KM
    }

    /// Mean speed over the session, in km/h.
    ///
    /// Swimming counts pool crossings instead of stroke distance.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                readings,
                pool_length_m,
                pool_crossings,
            } => pool_length_m * pool_crossings / M_IN_KM / readings.duration_h,
            _ => self.distance_km() / self.readings().duration_h,
        }
    }

    /// Calories burnt during the session, by the per-kind formula.
    pub fn calories_burnt(&self) -> f64 {
        let speed = self.mean_speed_kmh();

        match self {
            Self::Running(readings) => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * readings.weight_kg / M_IN_KM
                    * readings.duration_h
                    * MINS_IN_H
            }
            Self::Walking {
                readings,
                height_cm,
            } => {
                let speed_ms = speed * KMH_IN_MS;

                (WLK_WEIGHT_MULTIPLIER * readings.weight_kg
                    + speed_ms.powi(2) / (height_cm / CM_IN_M)
                        * WLK_SPEED_HEIGHT_MULTIPLIER
                        * readings.weight_kg)
                    * (readings.duration_h * MINS_IN_H)
            }
            Self::Swimming { readings, .. } => {
                (speed + SWM_SPEED_SHIFT)
                    * SWM_WEIGHT_MULTIPLIER
                    * readings.weight_kg
                    * readings.duration_h
            }
        }
    }

    /// Snapshot the derived statistics for rendering.
    pub fn summary(&self) -> SummaryReport {
        SummaryReport {
            kind: self.kind(),
            duration_h: self.readings().duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories_burnt(),
        }
    }
}

/// Completed-workout statistics, rendered by `Display` as a single line
/// with every numeric field fixed at three decimal digits.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryReport {
    pub kind: WorkoutKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl std::fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.kind.label(),
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn running() -> Workout {
        Workout::Running(Readings::new(15000, 1.0, 75.0).unwrap())
    }

    fn walking() -> Workout {
        Workout::Walking {
            readings: Readings::new(9000, 1.0, 75.0).unwrap(),
            height_cm: 180.0,
        }
    }

    fn swimming() -> Workout {
        Workout::Swimming {
            readings: Readings::new(720, 1.0, 80.0).unwrap(),
            pool_length_m: 25.0,
            pool_crossings: 40.0,
        }
    }

    #[test]
    fn running_statistics() {
        let workout = running();

        assert_close(workout.distance_km(), 9.75);
        assert_close(workout.mean_speed_kmh(), 9.75);
        // (18 * 9.75 + 1.79) * 75 / 1000 * 1 * 60
        assert_close(workout.calories_burnt(), 797.805);
    }

    #[test]
    fn walking_statistics() {
        let workout = walking();

        assert_close(workout.distance_km(), 5.85);
        assert_close(workout.mean_speed_kmh(), 5.85);
        // (0.035 * 75 + (5.85 * 0.278)^2 / 1.8 * 0.029 * 75) * 60
        assert_close(workout.calories_burnt(), 349.251747525);
    }

    #[test]
    fn swimming_statistics() {
        let workout = swimming();

        // Stroke distance; crossings only feed the speed formula
        assert_close(workout.distance_km(), 0.9936);
        assert_close(workout.mean_speed_kmh(), 1.0);
        assert_close(workout.calories_burnt(), 336.0);
    }

    #[test]
    fn swimming_report_line() {
        assert_eq!(
            swimming().summary().to_string(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn running_report_line() {
        assert_eq!(
            running().summary().to_string(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 797.805."
        );
    }

    #[test]
    fn integral_values_keep_three_decimals() {
        let report = SummaryReport {
            kind: WorkoutKind::Swimming,
            duration_h: 2.0,
            distance_km: 3.0,
            mean_speed_kmh: 1.5,
            calories: 336.0,
        };

        assert_eq!(
            report.to_string(),
            "Workout type: Swimming; Duration: 2.000 h; Distance: 3.000 km; \
             Avg speed: 1.500 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn summary_is_idempotent() {
        let workout = walking();

        let first = workout.summary();
        let second = workout.summary();

        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn zero_duration_rejected_at_construction() {
        assert_eq!(
            Readings::new(15000, 0.0, 75.0),
            Err(PackageError::InvalidDuration(0.0))
        );
        assert!(Readings::new(15000, -1.0, 75.0).is_err());
        assert!(Readings::new(15000, f64::NAN, 75.0).is_err());
    }
}
