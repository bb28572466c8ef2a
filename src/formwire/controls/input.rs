//! Single-line inputs and textareas.
//!
//! The current value is written into the control only when the field's
//! `default` tag is `"true"`.

use super::{escape, RenderContext};
use crate::error::Result;

/// `<input>` of type text, password, hidden or button.
pub fn render_input(ctx: &RenderContext<'_>) -> Result<String> {
    let mut tag = format!("<input{} type='{}'", ctx.name_attrs(), ctx.kind.tag());
    if ctx.emit_default {
        tag.push_str(&format!(" value='{}'", escape(&ctx.text)));
    }
    tag.push('>');
    Ok(tag)
}

pub fn render_textarea(ctx: &RenderContext<'_>) -> Result<String> {
    let content = if ctx.emit_default {
        escape(&ctx.text)
    } else {
        String::new()
    };
    Ok(format!("<textarea{}>{}</textarea>", ctx.name_attrs(), content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlKind;
    use crate::meta::{FieldMeta, Flag};
    use crate::schema::FieldTags;
    use crate::value::FieldRef;

    fn meta(required: Flag) -> FieldMeta {
        FieldMeta {
            ident: "comment",
            key: "comment",
            required,
            tags: FieldTags::new(&[]),
        }
    }

    fn ctx<'a>(meta: &'a FieldMeta, kind: ControlKind, text: &'a str, emit: bool) -> RenderContext<'a> {
        RenderContext {
            meta,
            kind,
            value: FieldRef::Str(text),
            text: text.to_string(),
            emit_default: emit,
        }
    }

    #[test]
    fn input_without_default_has_no_value() {
        let meta = meta(Flag::Unset);
        let html = render_input(&ctx(&meta, ControlKind::Text, "hi", false)).unwrap();
        assert_eq!(html, "<input name='comment' type='text'>");
    }

    #[test]
    fn input_with_default_escapes_value() {
        let meta = meta(Flag::True);
        let html = render_input(&ctx(&meta, ControlKind::Password, "a'b", true)).unwrap();
        assert_eq!(
            html,
            "<input name='comment' required type='password' value='a&#39;b'>"
        );
    }

    #[test]
    fn hidden_and_button_use_their_type() {
        let meta = meta(Flag::False);
        let hidden = render_input(&ctx(&meta, ControlKind::Hidden, "x", true)).unwrap();
        assert_eq!(hidden, "<input name='comment' type='hidden' value='x'>");
        let button = render_input(&ctx(&meta, ControlKind::Button, "Go", true)).unwrap();
        assert_eq!(button, "<input name='comment' type='button' value='Go'>");
    }

    #[test]
    fn textarea_contains_escaped_value_only_with_default() {
        let meta = meta(Flag::Unset);
        let empty = render_textarea(&ctx(&meta, ControlKind::Textarea, "<b>", false)).unwrap();
        assert_eq!(empty, "<textarea name='comment'></textarea>");
        let filled = render_textarea(&ctx(&meta, ControlKind::Textarea, "<b>", true)).unwrap();
        assert_eq!(filled, "<textarea name='comment'>&lt;b&gt;</textarea>");
    }
}
