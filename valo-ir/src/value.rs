//! Reference runtime semantics of a generated value.
//!
//! The engine emits host-language text, so the behavioral contract of a
//! generated instance (normalize before validate, validate before construct,
//! uninitialized reads rejected, try-construction never failing) is pinned
//! here as an executable model. The dual uninitialized/initialized state is
//! a tagged variant, making the invalid-read guard an exhaustiveness
//! property instead of a boolean-guarded field pair.

use thiserror::Error;

/// Failure modes of the generated-value contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoRuntimeError {
    /// Reading the value of an instance built through the zero-argument path.
    #[error("Use of uninitialized Value Object.")]
    Uninitialized,
    /// The validation hook rejected the (normalized) input.
    #[error("{0}")]
    Validation(String),
}

/// A wrapper value: either the uninitialized sentinel or a validated value.
/// There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoValue<T> {
    Uninitialized,
    Valid(T),
}

impl<T> VoValue<T> {
    /// The factory path: normalize, then validate, then construct. A value
    /// either comes out fully valid or construction itself fails.
    pub fn from_with<N, V>(value: T, normalize: N, validate: V) -> Result<Self, VoRuntimeError>
    where
        N: FnOnce(T) -> T,
        V: FnOnce(&T) -> Result<(), String>,
    {
        let value = normalize(value);
        validate(&value).map_err(VoRuntimeError::Validation)?;
        Ok(VoValue::Valid(value))
    }

    /// The try-construction variant: the same pipeline, but a validation
    /// failure becomes `(false, Uninitialized)` instead of propagating.
    pub fn try_from_with<N, V>(value: T, normalize: N, validate: V) -> (bool, Self)
    where
        N: FnOnce(T) -> T,
        V: FnOnce(&T) -> Result<(), String>,
    {
        match Self::from_with(value, normalize, validate) {
            Ok(vo) => (true, vo),
            Err(_) => (false, VoValue::Uninitialized),
        }
    }

    /// The deserialize path: also normalizes, but validation is a separate
    /// policy; pass `None` when deserialization trusts the source.
    pub fn deserialize_with<N, V>(
        value: T,
        normalize: N,
        validate: Option<V>,
    ) -> Result<Self, VoRuntimeError>
    where
        N: FnOnce(T) -> T,
        V: FnOnce(&T) -> Result<(), String>,
    {
        let value = normalize(value);
        if let Some(validate) = validate {
            validate(&value).map_err(VoRuntimeError::Validation)?;
        }
        Ok(VoValue::Valid(value))
    }

    /// The public accessor: every read goes through the uninitialized guard.
    pub fn get(&self) -> Result<&T, VoRuntimeError> {
        match self {
            VoValue::Uninitialized => Err(VoRuntimeError::Uninitialized),
            VoValue::Valid(value) => Ok(value),
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, VoValue::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_normalize(v: i32) -> i32 {
        v
    }

    fn positive(v: &i32) -> Result<(), String> {
        if *v > 0 {
            Ok(())
        } else {
            Err(format!("must be positive, got {v}"))
        }
    }

    #[test]
    fn test_from_roundtrips_valid_values() {
        for v in [1, 42, i32::MAX] {
            let vo = VoValue::from_with(v, no_normalize, positive).unwrap();
            assert_eq!(*vo.get().unwrap(), v);
        }
    }

    #[test]
    fn test_uninitialized_read_is_rejected() {
        let vo: VoValue<i32> = VoValue::Uninitialized;
        assert_eq!(vo.get(), Err(VoRuntimeError::Uninitialized));
        assert!(!vo.is_initialized());
    }

    #[test]
    fn test_equality_tracks_underlying() {
        let a = VoValue::from_with(5, no_normalize, positive).unwrap();
        let b = VoValue::from_with(5, no_normalize, positive).unwrap();
        let c = VoValue::from_with(6, no_normalize, positive).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_validation_failure_carries_message() {
        let err = VoValue::from_with(-3, no_normalize, positive).unwrap_err();
        assert_eq!(err, VoRuntimeError::Validation("must be positive, got -3".into()));
    }

    #[test]
    fn test_try_from_never_fails() {
        // Fails exactly when the factory path would fail.
        let (ok, vo) = VoValue::try_from_with(-1, no_normalize, positive);
        assert!(!ok);
        assert_eq!(vo, VoValue::Uninitialized);

        let (ok, vo) = VoValue::try_from_with(7, no_normalize, positive);
        assert!(ok);
        assert_eq!(vo, VoValue::Valid(7));
    }

    #[test]
    fn test_normalize_runs_before_validate() {
        let clamp = |v: i32| v.max(1);
        let vo = VoValue::from_with(-10, clamp, positive).unwrap();
        assert_eq!(*vo.get().unwrap(), 1);
    }

    #[test]
    fn test_deserialize_matches_from_for_idempotent_normalize() {
        let normalize = |v: i32| v.abs();
        for v in [3, 9, 27] {
            let from = VoValue::from_with(v, normalize, positive).unwrap();
            let deser = VoValue::deserialize_with(v, normalize, Some(positive)).unwrap();
            assert_eq!(from, deser);
        }
    }

    #[test]
    fn test_deserialize_can_skip_validation() {
        let vo =
            VoValue::deserialize_with(-1, no_normalize, None::<fn(&i32) -> Result<(), String>>)
                .unwrap();
        assert_eq!(vo, VoValue::Valid(-1));
    }
}
