//! Built-in view templates.

/// One control per mood, separated by single spaces.
pub(crate) const SELECTOR: &str = r#"{{ pad }}
{%- for control in controls -%}
{% if not loop.first %} {% endif -%}
{{ control.text | style(control.style) }}
{%- endfor %}"#;

/// The themed display, one painted row per line.
pub(crate) const CONTENT: &str = r#"{% for line in lines -%}
{{ line.text | panel(loop.index0, loop.length, line.style) }}
{% endfor %}"#;
