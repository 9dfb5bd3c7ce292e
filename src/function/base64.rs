// ABOUTME: Base64 encoding and decoding helpers in standard/URL and padded/raw variants
// ABOUTME: Decoded bytes are returned as (lossy) UTF-8 text

use ::base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use ::base64::engine::GeneralPurpose;
use ::base64::Engine as _;

use super::{Arg, Args, FunctionError, FunctionSet, Result};
use crate::value::Value;

const CATEGORY: &str = "Base64";

const VARIANTS: &str =
    "_raw variants remove the = padding characters, and _url variants use the alternate URL compliant alphabet";

pub fn function_sets() -> Vec<FunctionSet> {
    vec![
        FunctionSet::new(
            CATEGORY,
            "base64[_raw][_url]_encode <val string>",
            &[
                "Encodes val in Base64. This function comes in several variants by adding the _url and _raw tags.",
                VARIANTS,
            ],
        )
        .with_function("base64_encode", |args| encode(&STANDARD, args))
        .with_function("base64_raw_encode", |args| encode(&STANDARD_NO_PAD, args))
        .with_function("base64_url_encode", |args| encode(&URL_SAFE, args))
        .with_function("base64_raw_url_encode", |args| encode(&URL_SAFE_NO_PAD, args)),
        FunctionSet::new(
            CATEGORY,
            "base64[_raw][_url]_decode <val string>",
            &[
                "Decodes val from Base64. This function comes in several variants by adding the _url and _raw tags.",
                VARIANTS,
            ],
        )
        .with_function("base64_decode", |args| decode(&STANDARD, args))
        .with_function("base64_raw_decode", |args| decode(&STANDARD_NO_PAD, args))
        .with_function("base64_url_decode", |args| decode(&URL_SAFE, args))
        .with_function("base64_raw_url_decode", |args| decode(&URL_SAFE_NO_PAD, args)),
    ]
}

fn encode(engine: &GeneralPurpose, mut args: Args) -> Result<Arg> {
    let input = args.string()?;
    args.finish()?;
    Ok(Arg::Value(Value::String(engine.encode(input.as_bytes()))))
}

fn decode(engine: &GeneralPurpose, mut args: Args) -> Result<Arg> {
    let input = args.string()?;
    args.finish()?;
    let bytes = engine
        .decode(input.as_bytes())
        .map_err(|e| FunctionError::Decode(e.to_string()))?;
    Ok(Arg::Value(Value::String(
        String::from_utf8_lossy(&bytes).into_owned(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{call, Library};

    fn run(name: &'static str, input: &str) -> Result<Arg> {
        let library = Library::builder().register_all(function_sets()).build();
        let function = library.get(name).unwrap();
        call(name, function, vec![Arg::Value(Value::from(input))])
    }

    fn text(s: &str) -> Arg {
        Arg::Value(Value::from(s))
    }

    #[test]
    fn test_encode_variants() {
        assert_eq!(run("base64_encode", "hello world").unwrap(), text("aGVsbG8gd29ybGQ="));
        assert_eq!(run("base64_raw_encode", "hello world").unwrap(), text("aGVsbG8gd29ybGQ"));
        assert_eq!(run("base64_encode", "??>").unwrap(), text("Pz8+"));
        assert_eq!(run("base64_url_encode", "??>").unwrap(), text("Pz8-"));
        assert_eq!(run("base64_raw_url_encode", "?").unwrap(), text("Pw"));
    }

    #[test]
    fn test_decode_variants() {
        assert_eq!(run("base64_decode", "aGVsbG8gd29ybGQ=").unwrap(), text("hello world"));
        assert_eq!(run("base64_raw_decode", "aGVsbG8gd29ybGQ").unwrap(), text("hello world"));
        assert_eq!(run("base64_url_decode", "Pz8-").unwrap(), text("??>"));
        assert_eq!(run("base64_raw_url_decode", "Pw").unwrap(), text("?"));
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(matches!(
            run("base64_decode", "not base64!"),
            Err(FunctionError::Decode(_))
        ));
        assert!(matches!(
            run("base64_raw_decode", "aGVsbG8gd29ybGQ="),
            Err(FunctionError::Decode(_))
        ));
    }
}
