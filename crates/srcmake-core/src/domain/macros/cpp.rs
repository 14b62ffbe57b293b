//! C++ placeholders. Runs after the C stage.

use crate::domain::{
    capabilities,
    entities::request::GenerationRequest,
    error::DomainError,
    macros::{MacroTable, Replacement, flags},
    value_objects::{FileType, Language},
};

pub const INHERITANCE: &str = "INHERITANCE";
pub const VIRTUAL: &str = "VIRTUAL";
pub const INLINE_EXT: &str = "INLINE_EXT";

pub fn stage(request: &GenerationRequest, table: &mut MacroTable) -> Result<(), DomainError> {
    let args = request.args();

    table.insert(INHERITANCE, inheritance(args));
    table.text(
        VIRTUAL,
        if flags::VIRTUAL.any_in(args) {
            "virtual"
        } else {
            ""
        },
    );
    table.text(
        INLINE_EXT,
        capabilities::file_extension(Language::Cpp, FileType::TemplateSource)?,
    );

    Ok(())
}

/// `: public A, protected B, private C`, grouped by access level in that
/// order, or an erase marker when there are no base classes.
fn inheritance(args: &[String]) -> Replacement {
    let bases: Vec<String> = [
        ("public", flags::PUBLIC),
        ("protected", flags::PROTECTED),
        ("private", flags::PRIVATE),
    ]
    .into_iter()
    .flat_map(|(access, spec)| {
        spec.all_in(args)
            .into_iter()
            .map(move |base| format!("{access} {base}"))
    })
    .collect();

    if bases.is_empty() {
        Replacement::EraseWithLeadingColon
    } else {
        Replacement::Text(format!(": {}", bases.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::macros::test_support::request;

    fn run(args: &[&str]) -> MacroTable {
        let mut table = MacroTable::new();
        stage(
            &request(Language::Cpp, FileType::ClassHeader, "Player", args),
            &mut table,
        )
        .unwrap();
        table
    }

    #[test]
    fn public_then_private() {
        let t = run(&["-pub=Base1", "-priv=Base2"]);
        assert_eq!(
            t.apply("class Player $INHERITANCE$"),
            "class Player : public Base1, private Base2"
        );
    }

    #[test]
    fn groups_by_access_not_by_argument_order() {
        let t = run(&["-private=P", "-protected=Q", "-public=R", "-pub=S"]);
        assert_eq!(
            t.apply("$INHERITANCE$"),
            ": public R, public S, protected Q, private P"
        );
    }

    #[test]
    fn no_bases_removes_clause_and_colon() {
        let t = run(&[]);
        assert_eq!(t.apply("class Player : $INHERITANCE$\n{"), "class Player \n{");
        assert_eq!(t.apply("class Player :$INHERITANCE$"), "class Player ");
    }

    #[test]
    fn virtual_marker() {
        assert_eq!(run(&["-v"]).apply("[$VIRTUAL$]"), "[virtual]");
        assert_eq!(run(&["-VIRTUAL"]).apply("[$VIRTUAL$]"), "[virtual]");
        assert_eq!(run(&[]).apply("[$VIRTUAL$]"), "[]");
    }

    #[test]
    fn inline_extension_is_fixed() {
        assert_eq!(run(&[]).apply("$NAME$.$INLINE_EXT$"), "$NAME$.inl");
    }
}
