//! Static-abstract interface header.
//!
//! The static members the interface requires (`From`, `Value`) are already
//! emitted by the core of the type, so the header is the whole fragment.

use valo_ir::{StaticAbstractsGeneration, WorkItem};

pub fn header(item: &WorkItem) -> Option<String> {
    if item.config.static_abstracts == StaticAbstractsGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    Some(format!("global::Valo.IValueObject<{vo}, {und}>"))
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;

    #[test]
    fn test_header_only_when_configured() {
        let mut item = WorkItem {
            vo_type_name: "Score".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.Int32", UnderlyingKind::Int32),
            config: Config::baseline(),
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        };
        assert_eq!(header(&item), None);

        item.config.static_abstracts = StaticAbstractsGeneration::Generate;
        assert_eq!(
            header(&item).unwrap(),
            "global::Valo.IValueObject<Score, System.Int32>"
        );
    }
}
