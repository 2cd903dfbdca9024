//! End-to-end assembly tests: one declaration in, one complete type
//! definition out.

use valo_codegen::{Assembler, BuiltinTemplates, codes};
use valo_ir::{
    CastOperator, ComparisonGeneration, Config, Conversions, DebugGeneration, Declaration,
    Instance, IsInitializedMethodGeneration, Normalization, ParsableGeneration,
    StaticAbstractsGeneration, StringComparersGeneration, UnderlyingType, WorkItem,
};

fn work_item(name: &str, underlying: &str, config: Config) -> WorkItem {
    WorkItem {
        vo_type_name: name.to_string(),
        full_namespace: "Acme.Domain".to_string(),
        underlying: UnderlyingType::from_alias(underlying),
        config,
        validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
        instances: vec![],
    }
}

#[test]
fn everything_enabled_struct_assembles_every_fragment() {
    let mut config = Config::baseline();
    config.conversions = Conversions::TYPE_CONVERTER | Conversions::EF_CORE_VALUE_CONVERTER;
    config.comparison = ComparisonGeneration::UseUnderlying;
    config.parsing = ParsableGeneration::MethodsAndInterfaces;
    config.is_initialized_method = IsInitializedMethodGeneration::Generate;
    config.debug = DebugGeneration::Full;
    config.cast_to_underlying = CastOperator::Explicit;
    config.cast_from_underlying = CastOperator::Implicit;
    config.normalization = Normalization::Method;
    config.static_abstracts = StaticAbstractsGeneration::Generate;

    let mut item = work_item("CustomerId", "int", config);
    item.instances.push(Instance {
        name: "Unspecified".to_string(),
        value: "-1".to_string(),
    });

    let store = BuiltinTemplates::new();
    let source = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap();
    let text = &source.text;

    // Declaration header: fixed interface order.
    let decl_line = text
        .lines()
        .find(|line| line.contains("partial struct CustomerId"))
        .unwrap();
    let eq_self = decl_line.find("IEquatable<CustomerId>").unwrap();
    let eq_und = decl_line.find("IEquatable<System.Int32>").unwrap();
    let cmp = decl_line.find("IComparable<CustomerId>").unwrap();
    let parse = decl_line.find("IParsable<CustomerId>").unwrap();
    let statics = decl_line.find("IValueObject<CustomerId, System.Int32>").unwrap();
    assert!(eq_self < eq_und && eq_und < cmp && cmp < parse && parse < statics);

    // Provenance and coverage attributes.
    assert!(text.contains("[global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]"));
    assert!(text.contains("GeneratedCode(\"valo-codegen\""));

    // The two private fields are always present.
    assert!(text.contains("private readonly global::System.Boolean _isInitialized;"));
    assert!(text.contains("private readonly System.Int32 _value;"));

    // Construction pipeline and factories.
    assert!(text.contains("public static CustomerId From(System.Int32 value)"));
    assert!(text.contains("public static global::System.Boolean TryFrom(System.Int32 value, out CustomerId vo)"));
    assert!(text.contains("private static CustomerId __Deserialize(System.Int32 value)"));
    assert!(text.contains("value = NormalizeInput(value);"));
    assert!(text.contains("public readonly global::System.Boolean IsInitialized() => _isInitialized;"));

    // Casting policy is per direction.
    assert!(text.contains("public static explicit operator System.Int32(CustomerId vo) => vo.Value;"));
    assert!(text.contains("public static implicit operator CustomerId(System.Int32 value) => From(value);"));

    // Equality, ordering, parsing, hashing, rendering, guard.
    assert!(text.contains("operator ==(CustomerId left, System.Int32 right)"));
    assert!(text.contains("operator <(CustomerId left, CustomerId right)"));
    assert!(text.contains("public static CustomerId Parse(global::System.String input)"));
    assert!(text.contains("override global::System.Int32 GetHashCode()"));
    assert!(text.contains("override global::System.String ToString() => Value.ToString();"));
    assert!(text.contains("private readonly void EnsureInitialized()"));
    assert!(text.contains("throw new Valo.ValueObjectValidationException(message);"));

    // Debug support.
    assert!(text.contains("DebuggerDisplay"));
    assert!(text.contains("DebuggerTypeProxy"));
    assert!(text.contains("#if DEBUG"));
    assert!(text.contains("internal sealed class CustomerIdDebugView"));

    // Instances, conversion bodies, and the extension block outside the type.
    assert!(text.contains("public static readonly CustomerId Unspecified = new CustomerId(-1);"));
    assert!(text.contains("#nullable disable"));
    assert!(text.contains("#nullable restore"));
    assert!(text.contains("class CustomerIdTypeConverter"));
    assert!(text.contains("class CustomerIdValueConverter"));
    assert!(text.contains("static class CustomerIdEfCoreExtensions"));
}

#[test]
fn comparison_disabled_emits_no_ordering_operators() {
    let item = work_item("CustomerId", "int", Config::baseline());
    let store = BuiltinTemplates::new();
    let source = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap();

    assert!(!source.text.contains("operator <"));
    assert!(!source.text.contains("operator >"));
    assert!(!source.text.contains("CompareTo"));
    assert!(!source.text.contains("IComparable"));
}

#[test]
fn baseline_config_omits_every_optional_fragment() {
    let item = work_item("CustomerId", "int", Config::baseline());
    let store = BuiltinTemplates::new();
    let text = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap()
        .text;

    assert!(!text.contains("TypeConverter"));
    assert!(!text.contains("EfCore"));
    assert!(!text.contains("Parse"));
    assert!(!text.contains("IsInitialized()"));
    assert!(!text.contains("NormalizeInput"));
    assert!(!text.contains("FromNewGuid"));
    // Validation is required by the baseline.
    assert!(text.contains("CustomerId.Validate(value)"));
}

#[test]
fn class_declaration_gets_protected_constructor_and_null_checks() {
    let item = work_item("TenantName", "string", Config::baseline());
    let store = BuiltinTemplates::new();
    let text = Assembler::new(&store)
        .assemble(&item, &Declaration::public_class())
        .unwrap()
        .text;

    assert!(text.contains("public partial class TenantName"));
    assert!(text.contains("protected TenantName()"));
    assert!(text.contains("if (other is null)"));
    assert!(!text.contains("readonly void EnsureInitialized"));
}

#[test]
fn guid_backed_wrapper_gets_factory_sugar() {
    let item = work_item("OrderId", "guid", Config::baseline());
    let store = BuiltinTemplates::new();
    let text = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap()
        .text;

    assert!(text.contains("public static OrderId FromNewGuid() => From(global::System.Guid.NewGuid());"));
}

#[test]
fn string_comparers_on_non_string_underlying_is_a_diagnostic() {
    let mut config = Config::baseline();
    config.string_comparers = StringComparersGeneration::Generate;
    let item = work_item("Score", "int", config);
    let store = BuiltinTemplates::new();

    let diag = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap_err();
    assert_eq!(diag.code, codes::STRING_COMPARERS_NOT_STRING);
    assert_eq!(diag.location.as_deref(), Some("Score"));
}

#[test]
fn parsing_on_unparseable_underlying_is_a_diagnostic() {
    let mut config = Config::baseline();
    config.parsing = ParsableGeneration::Methods;
    let item = work_item("TenantName", "string", config);
    let store = BuiltinTemplates::new();

    let diag = Assembler::new(&store)
        .assemble(&item, &Declaration::public_struct())
        .unwrap_err();
    assert_eq!(diag.code, codes::PARSING_NOT_PARSEABLE);
}

#[test]
fn output_is_deterministic() {
    let mut config = Config::baseline();
    config.conversions = Conversions::TYPE_CONVERTER;
    config.comparison = ComparisonGeneration::UseUnderlying;
    let item = work_item("CustomerId", "int", config);
    let store = BuiltinTemplates::new();
    let assembler = Assembler::new(&store);

    let first = assembler
        .assemble(&item, &Declaration::public_struct())
        .unwrap();
    let second = assembler
        .assemble(&item, &Declaration::public_struct())
        .unwrap();
    assert_eq!(first, second);
}
