//! C# placeholders.

use crate::domain::{
    entities::request::GenerationRequest,
    macros::{MacroTable, c, flags},
};

pub const ACCESS: &str = "ACCESS";
pub const CLASS_MODIFIERS: &str = "CLASS_MODIFIERS";
pub const USING_STATEMENTS: &str = "USING_STATEMENTS";
pub const INHERITANCE: &str = "INHERITANCE";

/// `abstract`, `sealed` and `static` exclude each other; `partial`
/// combines with any of them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ClassModifiers {
    is_abstract: bool,
    is_sealed: bool,
    is_static: bool,
    is_partial: bool,
}

impl ClassModifiers {
    /// Later switches override earlier ones.
    fn from_args(args: &[String]) -> Self {
        let mut m = Self::default();
        for arg in args {
            if flags::PARTIAL.is_set(arg) {
                m.is_partial = true;
            } else if flags::ABSTRACT.is_set(arg) {
                (m.is_abstract, m.is_sealed, m.is_static) = (true, false, false);
            } else if flags::SEALED.is_set(arg) {
                (m.is_abstract, m.is_sealed, m.is_static) = (false, true, false);
            } else if flags::STATIC.is_set(arg) {
                (m.is_abstract, m.is_sealed, m.is_static) = (false, false, true);
            }
        }
        m
    }

    fn render(self) -> String {
        [
            (self.is_abstract, "abstract"),
            (self.is_sealed, "sealed"),
            (self.is_static, "static"),
            (self.is_partial, "partial"),
        ]
        .into_iter()
        .filter_map(|(set, word)| set.then_some(word))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn access_level(args: &[String]) -> &'static str {
    match flags::ACCESS
        .last_in(args)
        .map(|v| v.to_ascii_lowercase())
        .as_deref()
    {
        Some("pub" | "public") => "public",
        Some("prot" | "protected") => "protected",
        Some("priv" | "private") => "private",
        _ => "",
    }
}

pub fn stage(request: &GenerationRequest, table: &mut MacroTable) {
    let args = request.args();

    c::insert_namespace(args, table);
    table.text(ACCESS, access_level(args));
    table.text(CLASS_MODIFIERS, ClassModifiers::from_args(args).render());

    let usings: String = flags::USING
        .all_in(args)
        .iter()
        .map(|ns| format!("using {ns};\n"))
        .collect();
    table.text(USING_STATEMENTS, usings);

    let bases = flags::INHERIT.all_in(args);
    table.text(
        INHERITANCE,
        if bases.is_empty() {
            String::new()
        } else {
            format!(": {}", bases.join(", "))
        },
    );
}
