//! Sensor-package dispatch.
//!
//! The tracker hands over `(workout code, readings)` pairs; this module
//! maps them onto the matching [`Workout`] record, validating the package
//! before anything is constructed.

use crate::{Readings, Workout};

const RUN: &str = "RUN";
const WLK: &str = "WLK";
const SWM: &str = "SWM";

/// Reasons a sensor package is rejected before a record is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    #[error("workout code `{0}` not recognized")]
    UnknownCode(String),
    #[error("workout data not received")]
    EmptyData,
    #[error("invalid parameter count for `{code}`: expected {expected}, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid duration: {0} h")]
    InvalidDuration(f64),
}

/// Map a sensor package onto the matching workout record.
///
/// `data` is positional: action count, duration in hours, weight in kg,
/// then the kind-specific readings (walking: height in cm; swimming: pool
/// length in m, pool crossings). A wrong parameter count fails with
/// [`PackageError::ArityMismatch`] rather than misassigning readings.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    if data.is_empty() {
        return Err(PackageError::EmptyData);
    }

    match workout_type {
        RUN => {
            let [action, duration_h, weight_kg] = expect_arity(RUN, data)?;

            Ok(Workout::Running(Readings::new(
                action as u64,
                duration_h,
                weight_kg,
            )?))
        }
        WLK => {
            let [action, duration_h, weight_kg, height_cm] = expect_arity(WLK, data)?;

            Ok(Workout::Walking {
                readings: Readings::new(action as u64, duration_h, weight_kg)?,
                height_cm,
            })
        }
        SWM => {
            let [action, duration_h, weight_kg, pool_length_m, pool_crossings] =
                expect_arity(SWM, data)?;

            Ok(Workout::Swimming {
                readings: Readings::new(action as u64, duration_h, weight_kg)?,
                pool_length_m,
                pool_crossings,
            })
        }
        other => Err(PackageError::UnknownCode(other.to_owned())),
    }
}

fn expect_arity<const N: usize>(
    code: &'static str,
    data: &[f64],
) -> Result<[f64; N], PackageError> {
    <[f64; N]>::try_from(data).map_err(|_| PackageError::ArityMismatch {
        code,
        expected: N,
        got: data.len(),
    })
}
