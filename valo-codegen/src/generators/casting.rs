//! Casting operators between the wrapper and its underlying type, governed
//! by a configured directness policy per direction.

use valo_ir::{CastOperator, WorkItem};

pub fn operators(item: &WorkItem) -> Option<String> {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let mut lines = Vec::new();

    match item.config.cast_to_underlying {
        CastOperator::None => {}
        CastOperator::Explicit => lines.push(format!(
            "public static explicit operator {und}({vo} vo) => vo.Value;"
        )),
        CastOperator::Implicit => lines.push(format!(
            "public static implicit operator {und}({vo} vo) => vo.Value;"
        )),
    }

    match item.config.cast_from_underlying {
        CastOperator::None => {}
        CastOperator::Explicit => lines.push(format!(
            "public static explicit operator {vo}({und} value) => From(value);"
        )),
        CastOperator::Implicit => lines.push(format!(
            "public static implicit operator {vo}({und} value) => From(value);"
        )),
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
