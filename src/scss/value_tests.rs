use crate::scss::units::SizeUnit;
use crate::scss::value::{parse_parameters, Argument, ColorEncoding, SizeComponent, Value};

fn size(magnitude: f64, unit: Option<SizeUnit>) -> SizeComponent {
    SizeComponent { magnitude, unit }
}

#[test]
fn test_size_list_keeps_order() {
    let value = Value::classify("10px 20px");
    assert_eq!(
        value,
        Value::Size {
            values: vec![size(10.0, Some(SizeUnit::Px)), size(20.0, Some(SizeUnit::Px))]
        }
    );
    assert_eq!(value.tokens(), vec!["10px".to_string(), "20px".to_string()]);
}

#[test]
fn test_size_variants() {
    assert_eq!(
        Value::classify("0"),
        Value::Size { values: vec![size(0.0, None)] }
    );
    assert_eq!(
        Value::classify("-2.5em"),
        Value::Size { values: vec![size(-2.5, Some(SizeUnit::Em))] }
    );
    assert_eq!(
        Value::classify("50% .5rem"),
        Value::Size {
            values: vec![size(50.0, Some(SizeUnit::Percent)), size(0.5, Some(SizeUnit::Rem))]
        }
    );
}

#[test]
fn test_mixed_tokens_are_not_a_size() {
    assert_eq!(
        Value::classify("10px auto"),
        Value::String { raw: "10px auto".to_string() }
    );
    assert_eq!(
        Value::classify("10qq"),
        Value::String { raw: "10qq".to_string() }
    );
}

#[test]
fn test_hex_colors() {
    assert_eq!(
        Value::classify("#fff"),
        Value::Color { encoding: ColorEncoding::Hex, raw: "#fff".to_string() }
    );
    // a hex token anywhere in the value wins over the size rule
    assert_eq!(
        Value::classify("1px solid #ccc"),
        Value::Color { encoding: ColorEncoding::Hex, raw: "1px solid #ccc".to_string() }
    );
    assert_eq!(
        Value::classify("#ggg"),
        Value::String { raw: "#ggg".to_string() }
    );
}

#[test]
fn test_interpolation_is_not_a_hex_color() {
    assert_eq!(
        Value::classify("#{$name}-suffix"),
        Value::String { raw: "#{$name}-suffix".to_string() }
    );
}

#[test]
fn test_rgb_colors() {
    assert_eq!(
        Value::classify("rgba(0, 0, 0, 0.5)"),
        Value::Color { encoding: ColorEncoding::Rgb, raw: "rgba(0, 0, 0, 0.5)".to_string() }
    );
}

#[test]
fn test_calc_takes_precedence() {
    assert_eq!(
        Value::classify("calc(100% - #fff)"),
        Value::Calc { expr: "100% - #fff".to_string() }
    );
    assert_eq!(
        Value::classify("calc(100% - (2 * 10px))"),
        Value::Calc { expr: "100% - (2 * 10px)".to_string() }
    );
}

#[test]
fn test_url_extracts_path() {
    assert_eq!(
        Value::classify("url('img/bg.png') no-repeat"),
        Value::Url { raw: "img/bg.png".to_string() }
    );
    assert_eq!(
        Value::classify("url(data:image/png;base64,iVBORw0KGgo=)"),
        Value::Url { raw: "data:image/png;base64,iVBORw0KGgo=".to_string() }
    );
}

#[test]
fn test_fallback_to_string() {
    assert_eq!(Value::classify("bold"), Value::String { raw: "bold".to_string() });
    assert_eq!(Value::classify("$base"), Value::String { raw: "$base".to_string() });
    assert_eq!(Value::classify(""), Value::String { raw: String::new() });
}

#[test]
fn test_classification_is_deterministic() {
    for text in ["10px 20px", "#abc", "calc(1px + 2px)", "url(a.png)", "inherit"] {
        assert_eq!(Value::classify(text), Value::classify(text));
    }
}

#[test]
fn test_value_display() {
    assert_eq!(Value::classify("10px 20px").to_string(), "10px 20px");
    assert_eq!(Value::classify("calc(100% - 2px)").to_string(), "calc(100% - 2px)");
    assert_eq!(Value::classify("url(\"a.png\")").to_string(), "url(a.png)");
    assert_eq!(Value::classify("red").to_string(), "red");
}

#[test]
fn test_keyword_argument() {
    let arg = Argument::classify("$size: 2px");
    assert_eq!(arg.name.as_deref(), Some("size"));
    assert_eq!(arg.value, Value::Size { values: vec![size(2.0, Some(SizeUnit::Px))] });

    let positional = Argument::classify("#333");
    assert!(positional.name.is_none());
    assert_eq!(positional.value.type_name(), "COLOR");
}

#[test]
fn test_argument_list() {
    let args = Argument::classify_list("rgba(0, 0, 0, .2), $blur: 4px, 'label'");
    assert_eq!(args.len(), 3);
    assert_eq!(args[0].value.type_name(), "COLOR");
    assert_eq!(args[1].name.as_deref(), Some("blur"));
    assert_eq!(args[2].value, Value::String { raw: "'label'".to_string() });
    assert!(Argument::classify_list("").is_empty());
}

#[test]
fn test_parse_parameters() {
    let params = parse_parameters("$a, $b: 10px, $rest...");
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "rest"]);
    assert!(params[0].default.is_none());
    assert_eq!(
        params[1].default,
        Some(Value::Size { values: vec![size(10.0, Some(SizeUnit::Px))] })
    );
    assert!(parse_parameters("").is_empty());
}

#[test]
fn test_serialized_shape() {
    let json = serde_json::to_value(Value::classify("10px 2em")).unwrap();
    assert_eq!(json["type"], "SIZE");
    assert_eq!(json["values"][0]["magnitude"], 10.0);
    assert_eq!(json["values"][0]["unit"], "px");
    assert_eq!(json["values"][1]["unit"], "em");

    let json = serde_json::to_value(Value::classify("#fff")).unwrap();
    assert_eq!(json["type"], "COLOR");
    assert_eq!(json["encoding"], "HEXADECIMAL");
}
