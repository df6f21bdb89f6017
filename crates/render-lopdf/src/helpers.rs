use attest_render_core::utils::{flip_y, to_win_ansi};
use attest_types::{Color, Rect};
use lopdf::content::Operation;
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use std::collections::HashMap;

/// Builds the shared `/Font` resource dictionary and the PostScript-name to
/// resource-name map (`Helvetica` -> `F1`, ...). Duplicate names are registered once.
pub(crate) fn font_resources(fonts: &[&str]) -> (Dictionary, HashMap<String, String>) {
    let mut font_dict = Dictionary::new();
    let mut font_map = HashMap::new();
    for name in fonts {
        if font_map.contains_key(*name) {
            continue;
        }
        let internal_name = format!("F{}", font_map.len() + 1);
        let single_font_dict = dictionary! {
            "Type" => "Font", "Subtype" => "Type1", "BaseFont" => name.to_string(), "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
        font_map.insert(name.to_string(), internal_name);
    }
    (font_dict, font_map)
}

fn rgb_operands(color: Color) -> Vec<Object> {
    color.unit_rgb().into_iter().map(Object::from).collect()
}

pub(crate) fn fill_color_op(color: Color) -> Operation {
    Operation::new("rg", rgb_operands(color))
}

pub(crate) fn stroke_color_op(color: Color) -> Operation {
    Operation::new("RG", rgb_operands(color))
}

/// `re` operation for a top-left based rect on a page of `page_height`.
pub(crate) fn rect_op(rect: Rect, page_height: f32) -> Operation {
    let y = flip_y(rect.bottom(), page_height);
    Operation::new(
        "re",
        vec![
            Object::from(rect.x),
            Object::from(y),
            Object::from(rect.width),
            Object::from(rect.height),
        ],
    )
}

pub(crate) fn literal(text: &str) -> Object {
    Object::String(to_win_ansi(text), StringFormat::Literal)
}
