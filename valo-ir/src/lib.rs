//! Descriptor model for the valo value-object generator.
//!
//! One [`WorkItem`] describes one wrapper-type declaration: the identifier
//! being synthesized, the underlying type it wraps, and the resolved feature
//! configuration. Work items are built fresh for every generation pass and
//! consumed synchronously; nothing in this crate holds mutable state.
//!
//! # Module Organization
//!
//! - [`config`] - Feature flags and layered configuration resolution
//! - [`underlying`] - Underlying-type identity and capability predicates
//! - [`work_item`] - The per-declaration descriptor and declaration shape
//! - [`marker`] - The shared "is this a wrapper value type" predicate
//! - [`value`] - Reference runtime semantics of a generated value

pub mod config;
pub mod marker;
pub mod underlying;
pub mod value;
pub mod work_item;

pub use config::{
    CastOperator, ComparisonGeneration, Config, ConfigOverrides, Conversions, DebugGeneration,
    DeserializationValidation, IsInitializedMethodGeneration, Normalization, ParsableGeneration,
    StaticAbstractsGeneration, StringComparersGeneration, ValidationGeneration,
};
pub use marker::{WRAPPER_MARKER_ATTRIBUTE, has_wrapper_marker, is_wrapper_marker};
pub use underlying::{UnderlyingKind, UnderlyingType};
pub use value::{VoRuntimeError, VoValue};
pub use work_item::{Declaration, Instance, TypeKind, WorkItem};
