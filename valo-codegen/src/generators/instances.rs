//! Declared named instances: compile-time constants of the wrapper type.
//!
//! Instances are built through the private value constructor and bypass
//! validation, so sentinel values that would never pass `Validate` (an
//! `Unspecified = -1`, say) stay expressible.

use valo_ir::WorkItem;

pub fn instances(item: &WorkItem) -> Option<String> {
    if item.instances.is_empty() {
        return None;
    }
    let vo = &item.vo_type_name;
    let lines: Vec<String> = item
        .instances
        .iter()
        .map(|instance| {
            format!(
                "public static readonly {vo} {} = new {vo}({});",
                instance.name, instance.value
            )
        })
        .collect();
    Some(lines.join("\n"))
}
