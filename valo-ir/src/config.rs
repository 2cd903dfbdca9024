//! Feature flags and layered configuration resolution.
//!
//! A [`Config`] is the fully-resolved, immutable flag set carried by a work
//! item. Resolution is layered with an explicit precedence order: the
//! per-type setting wins, then the process-wide default, then the hardcoded
//! baseline (no conversions, no comparison, validation required).

use serde::Serialize;

/// Bit flags selecting which conversion glue gets generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversions(u8);

impl Conversions {
    pub const NONE: Conversions = Conversions(0);
    /// A nested component-model type converter plus its attribute.
    pub const TYPE_CONVERTER: Conversions = Conversions(1);
    /// A nested EF Core value converter plus a mapping extension block.
    pub const EF_CORE_VALUE_CONVERTER: Conversions = Conversions(1 << 1);

    pub fn contains(self, other: Conversions) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Conversions {
    type Output = Conversions;

    fn bitor(self, rhs: Conversions) -> Conversions {
        Conversions(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonGeneration {
    Omit,
    /// Comparison operators delegating to the underlying type's total order.
    UseUnderlying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParsableGeneration {
    Omit,
    /// Hoisted `Parse`/`TryParse` static members only.
    Methods,
    /// Hoisted members plus the parsable interface header.
    MethodsAndInterfaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IsInitializedMethodGeneration {
    Omit,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebugGeneration {
    Off,
    /// Debugger-display attribute only.
    Default,
    /// Debugger-display attribute, construction-site stack trace field, and
    /// a nested debug-view proxy.
    Full,
}

/// Directness policy for one casting direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CastOperator {
    None,
    Explicit,
    Implicit,
}

/// Whether the deserialize factory re-runs validation. A value arriving
/// through a persisted/wire format may need different trust assumptions
/// than one built at the construction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeserializationValidation {
    Validate,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Normalization {
    Omit,
    /// Call the user-supplied `NormalizeInput` hook before validation.
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationGeneration {
    Omit,
    /// Call the user-supplied `Validate` method and reject on failure.
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StaticAbstractsGeneration {
    Omit,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StringComparersGeneration {
    Omit,
    Generate,
}

/// Fully-resolved feature flags for one wrapper type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub conversions: Conversions,
    pub comparison: ComparisonGeneration,
    pub parsing: ParsableGeneration,
    pub is_initialized_method: IsInitializedMethodGeneration,
    pub debug: DebugGeneration,
    pub cast_to_underlying: CastOperator,
    pub cast_from_underlying: CastOperator,
    pub deserialization_validation: DeserializationValidation,
    pub normalization: Normalization,
    pub validation: ValidationGeneration,
    pub static_abstracts: StaticAbstractsGeneration,
    pub string_comparers: StringComparersGeneration,
}

impl Config {
    /// The hardcoded last layer: no conversions, no comparison, validation
    /// required, explicit cast to the underlying type.
    pub fn baseline() -> Self {
        Self {
            conversions: Conversions::NONE,
            comparison: ComparisonGeneration::Omit,
            parsing: ParsableGeneration::Omit,
            is_initialized_method: IsInitializedMethodGeneration::Omit,
            debug: DebugGeneration::Default,
            cast_to_underlying: CastOperator::Explicit,
            cast_from_underlying: CastOperator::Explicit,
            deserialization_validation: DeserializationValidation::Validate,
            normalization: Normalization::Omit,
            validation: ValidationGeneration::Generate,
            static_abstracts: StaticAbstractsGeneration::Omit,
            string_comparers: StringComparersGeneration::Omit,
        }
    }

    /// Resolve the layered configuration: explicit per-type setting wins,
    /// otherwise the process-wide default, otherwise the baseline.
    pub fn resolve(per_type: &ConfigOverrides, defaults: &ConfigOverrides) -> Self {
        let base = Self::baseline();
        Self {
            conversions: per_type
                .conversions
                .or(defaults.conversions)
                .unwrap_or(base.conversions),
            comparison: per_type
                .comparison
                .or(defaults.comparison)
                .unwrap_or(base.comparison),
            parsing: per_type.parsing.or(defaults.parsing).unwrap_or(base.parsing),
            is_initialized_method: per_type
                .is_initialized_method
                .or(defaults.is_initialized_method)
                .unwrap_or(base.is_initialized_method),
            debug: per_type.debug.or(defaults.debug).unwrap_or(base.debug),
            cast_to_underlying: per_type
                .cast_to_underlying
                .or(defaults.cast_to_underlying)
                .unwrap_or(base.cast_to_underlying),
            cast_from_underlying: per_type
                .cast_from_underlying
                .or(defaults.cast_from_underlying)
                .unwrap_or(base.cast_from_underlying),
            deserialization_validation: per_type
                .deserialization_validation
                .or(defaults.deserialization_validation)
                .unwrap_or(base.deserialization_validation),
            normalization: per_type
                .normalization
                .or(defaults.normalization)
                .unwrap_or(base.normalization),
            validation: per_type
                .validation
                .or(defaults.validation)
                .unwrap_or(base.validation),
            static_abstracts: per_type
                .static_abstracts
                .or(defaults.static_abstracts)
                .unwrap_or(base.static_abstracts),
            string_comparers: per_type
                .string_comparers
                .or(defaults.string_comparers)
                .unwrap_or(base.string_comparers),
        }
    }
}

/// One layer of configuration: every field optional, unset fields fall
/// through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub conversions: Option<Conversions>,
    pub comparison: Option<ComparisonGeneration>,
    pub parsing: Option<ParsableGeneration>,
    pub is_initialized_method: Option<IsInitializedMethodGeneration>,
    pub debug: Option<DebugGeneration>,
    pub cast_to_underlying: Option<CastOperator>,
    pub cast_from_underlying: Option<CastOperator>,
    pub deserialization_validation: Option<DeserializationValidation>,
    pub normalization: Option<Normalization>,
    pub validation: Option<ValidationGeneration>,
    pub static_abstracts: Option<StaticAbstractsGeneration>,
    pub string_comparers: Option<StringComparersGeneration>,
    /// Exception type thrown on validation failure or uninitialized use.
    pub validation_exception: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_flags() {
        let both = Conversions::TYPE_CONVERTER | Conversions::EF_CORE_VALUE_CONVERTER;
        assert!(both.contains(Conversions::TYPE_CONVERTER));
        assert!(both.contains(Conversions::EF_CORE_VALUE_CONVERTER));
        assert!(!Conversions::TYPE_CONVERTER.contains(Conversions::EF_CORE_VALUE_CONVERTER));
        assert!(Conversions::NONE.is_empty());
        assert!(!Conversions::NONE.contains(Conversions::NONE));
    }

    #[test]
    fn test_baseline_is_last_layer() {
        let config = Config::resolve(&ConfigOverrides::default(), &ConfigOverrides::default());
        assert_eq!(config, Config::baseline());
        assert!(config.conversions.is_empty());
        assert_eq!(config.comparison, ComparisonGeneration::Omit);
        assert_eq!(config.validation, ValidationGeneration::Generate);
    }

    #[test]
    fn test_per_type_wins_over_defaults() {
        let defaults = ConfigOverrides {
            comparison: Some(ComparisonGeneration::UseUnderlying),
            debug: Some(DebugGeneration::Full),
            ..Default::default()
        };
        let per_type = ConfigOverrides {
            comparison: Some(ComparisonGeneration::Omit),
            ..Default::default()
        };

        let config = Config::resolve(&per_type, &defaults);
        assert_eq!(config.comparison, ComparisonGeneration::Omit);
        // Unset per-type field falls through to the process-wide default.
        assert_eq!(config.debug, DebugGeneration::Full);
    }
}
