//! Construction pipeline members: the public factory, the try-construction
//! variant, the private deserialize factory, and small factory sugar.
//!
//! The pipeline order is fixed: normalize before validate, validate before
//! construct.

use valo_ir::{
    DeserializationValidation, IsInitializedMethodGeneration, Normalization, UnderlyingKind,
    ValidationGeneration, WorkItem,
};

fn normalize_call(item: &WorkItem) -> Option<&'static str> {
    match item.config.normalization {
        Normalization::Omit => None,
        Normalization::Method => Some("value = NormalizeInput(value);"),
    }
}

fn validation_throw(item: &WorkItem) -> Option<String> {
    if item.config.validation == ValidationGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    let exc = &item.validation_exception_full_name;
    Some(format!(
        "var validation = {vo}.Validate(value);\n\
         if (validation != Valo.Validation.Ok)\n\
         {{\n    \
             throw new {exc}(validation.ErrorMessage);\n\
         }}"
    ))
}

fn body(steps: Vec<Option<String>>) -> String {
    let steps: Vec<String> = steps.into_iter().flatten().collect();
    let mut out = String::new();
    for step in steps {
        for line in step.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// The public factory (step 4): normalize, validate (throwing the configured
/// exception on rejection), construct.
pub fn from_factory(item: &WorkItem) -> String {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let body = body(vec![
        normalize_call(item).map(str::to_string),
        validation_throw(item),
    ]);
    format!(
        "/// <summary>\n\
         /// Builds an instance from the provided underlying type.\n\
         /// </summary>\n\
         public static {vo} From({und} value)\n\
         {{\n\
         {body}    \
             return new {vo}(value);\n\
         }}"
    )
}

/// The try-construction variant (step 5): the identical pipeline, but a
/// validation failure becomes a boolean result plus default output instead
/// of propagating.
pub fn try_from(item: &WorkItem) -> String {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let validation = if item.config.validation == ValidationGeneration::Omit {
        None
    } else {
        Some(format!(
            "var validation = {vo}.Validate(value);\n\
             if (validation != Valo.Validation.Ok)\n\
             {{\n    \
                 vo = default;\n    \
                 return false;\n\
             }}"
        ))
    };
    let body = body(vec![normalize_call(item).map(str::to_string), validation]);
    format!(
        "/// <summary>\n\
         /// Tries to build an instance from the provided underlying type;\n\
         /// never throws on validation failure.\n\
         /// </summary>\n\
         public static global::System.Boolean TryFrom({und} value, out {vo} vo)\n\
         {{\n\
         {body}    \
             vo = new {vo}(value);\n    \
             return true;\n\
         }}"
    )
}

/// The private deserialize factory (step 7): also normalizes, but validation
/// follows the separate deserialization policy, since a value arriving
/// through a persisted/wire format may need different trust assumptions.
pub fn deserialize_factory(item: &WorkItem) -> String {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let validate = item.config.deserialization_validation == DeserializationValidation::Validate;
    let body = body(vec![
        normalize_call(item).map(str::to_string),
        if validate { validation_throw(item) } else { None },
    ]);
    format!(
        "// only called internally when something has been deserialized into\n\
         // its primitive type.\n\
         private static {vo} __Deserialize({und} value)\n\
         {{\n\
         {body}    \
             return new {vo}(value);\n\
         }}"
    )
}

pub fn is_initialized_method(item: &WorkItem, decl: &valo_ir::Declaration) -> Option<String> {
    if item.config.is_initialized_method == IsInitializedMethodGeneration::Omit {
        return None;
    }
    let q = decl.member_qualifier();
    Some(format!(
        "public {q}global::System.Boolean IsInitialized() => _isInitialized;"
    ))
}

/// Factory convenience when the underlying type is a GUID.
pub fn guid_factory(item: &WorkItem) -> Option<String> {
    if item.underlying.kind != UnderlyingKind::Guid {
        return None;
    }
    let vo = &item.vo_type_name;
    Some(format!(
        "public static {vo} FromNewGuid() => From(global::System.Guid.NewGuid());"
    ))
}
