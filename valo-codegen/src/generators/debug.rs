//! Debug support: debugger-display attribute, construction-site stack trace
//! capture, and the nested debug-view proxy.

use valo_ir::{DebugGeneration, WorkItem};

pub fn attributes(item: &WorkItem) -> Option<String> {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let display = format!(
        "[global::System.Diagnostics.DebuggerDisplay(\"Underlying type: {und}, Value = {{_value}}\")]"
    );
    match item.config.debug {
        DebugGeneration::Off => None,
        DebugGeneration::Default => Some(display),
        DebugGeneration::Full => Some(format!(
            "{display}\n[global::System.Diagnostics.DebuggerTypeProxy(typeof({vo}.{vo}DebugView))]"
        )),
    }
}

/// Field capturing where the uninitialized sentinel was constructed; debug
/// builds only.
pub fn stack_trace_field(item: &WorkItem) -> Option<String> {
    if item.config.debug != DebugGeneration::Full {
        return None;
    }
    Some(
        "#if DEBUG\n\
         private readonly global::System.Diagnostics.StackTrace _stackTrace = null;\n\
         #endif"
            .to_string(),
    )
}

/// Statement inserted into the zero-argument constructor.
pub fn capture_stack_trace(item: &WorkItem) -> Option<String> {
    if item.config.debug != DebugGeneration::Full {
        return None;
    }
    Some(
        "#if DEBUG\n\
         _stackTrace = new global::System.Diagnostics.StackTrace();\n\
         #endif"
            .to_string(),
    )
}

/// The message assignment inside the uninitialized-access guard. Debug
/// builds include the captured construction-site trace; release builds use
/// the fixed generic message, which downstream code may rely on.
pub fn uninitialized_message(item: &WorkItem) -> String {
    if item.config.debug == DebugGeneration::Full {
        "#if DEBUG\n\
         global::System.String message = \"Use of uninitialized Value Object at: \" + _stackTrace;\n\
         #else\n\
         global::System.String message = \"Use of uninitialized Value Object.\";\n\
         #endif"
            .to_string()
    } else {
        "global::System.String message = \"Use of uninitialized Value Object.\";".to_string()
    }
}

pub fn proxy(item: &WorkItem) -> Option<String> {
    if item.config.debug != DebugGeneration::Full {
        return None;
    }
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    Some(format!(
        "internal sealed class {vo}DebugView\n\
         {{\n    \
             private readonly {vo} _t;\n\
         \n    \
             {vo}DebugView({vo} t)\n    \
             {{\n        \
                 _t = t;\n    \
             }}\n\
         \n    \
             public global::System.String UnderlyingType => \"{und}\";\n    \
             public global::System.String Value => _t._isInitialized ? _t._value.ToString() : \"[not initialized]\";\n\
         }}"
    ))
}
