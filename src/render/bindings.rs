//! Shared utility bindings exposed to every template.

use minijinja::value::Value;
use minijinja::{Environment, Error, ErrorKind};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left untouched by the URL-encoder, matching form encoding.
const FORM_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Marker namespace exposed to templates for game-subsystem helpers.
#[derive(Debug, Default, Clone, Serialize)]
pub struct GameUtils {}

/// The capability bundle installed on the template engine.
///
/// Owning these here (instead of templates reaching for ambient imports)
/// keeps the rendering layer testable in isolation.
#[derive(Debug, Default, Clone)]
pub struct SharedBindings {
    game_utils: GameUtils,
}

impl SharedBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bindings on an engine environment.
    pub fn install(&self, env: &mut Environment<'_>) {
        env.add_filter("urlencode", urlencode);
        env.add_filter("tojson", to_json);
        env.add_global("game_utils", Value::from_serialize(&self.game_utils));
    }
}

/// Form-style URL encoding: spaces become `+`, everything outside the safe
/// set is percent-escaped.
fn urlencode(value: String) -> String {
    utf8_percent_encode(&value, FORM_SAFE)
        .to_string()
        .replace("%20", "+")
}

/// JSON-encode a template value.
fn to_json(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value)
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, "value is not JSON-serializable").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlencode_escapes_reserved_characters() {
        assert_eq!(urlencode("a b&c".into()), "a+b%26c");
        assert_eq!(urlencode("plain-text_1.0~x".into()), "plain-text_1.0~x");
    }

    #[test]
    fn tojson_round_trips_strings() {
        let encoded = to_json(Value::from("he said \"hi\"")).unwrap();
        assert_eq!(encoded, "\"he said \\\"hi\\\"\"");
    }

    #[test]
    fn bindings_are_usable_from_a_template() {
        let mut env = Environment::new();
        SharedBindings::new().install(&mut env);
        env.add_template("t", "{{ name | urlencode }} {{ ids | tojson }}")
            .unwrap();

        let rendered = env
            .get_template("t")
            .unwrap()
            .render(minijinja::context! { name => "a b", ids => vec![1, 2] })
            .unwrap();
        assert_eq!(rendered, "a+b [1,2]");
    }
}
