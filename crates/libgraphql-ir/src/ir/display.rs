use crate::ir::IrDocument;
use crate::ir::IrField;
use crate::ir::IrForest;
use crate::ir::SelectionMap;
use crate::ir::TypedChildren;
use std::fmt;

const INDENT: &str = "  ";

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_field(
    f: &mut fmt::Formatter<'_>,
    field: &IrField<'_, '_>,
    depth: usize,
) -> fmt::Result {
    write_indent(f, depth)?;
    let key = field.response_key();
    if key == field.field_name() {
        write!(f, "{key}")?;
    } else {
        write!(f, "{key}: {}", field.field_name())?;
    }
    write!(
        f,
        " -> {}",
        field.field_definition().type_annotation().to_graphql_string(),
    )?;

    let occurrences = field.occurrences();
    let conditional: Vec<String> = occurrences.iter()
        .filter(|occ| occ.is_conditional())
        .map(|occ| {
            occ.conditions().iter()
                .map(|cond| cond.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    if occurrences.len() > 1 {
        write!(f, " (x{})", occurrences.len())?;
    }
    if !conditional.is_empty() {
        write!(f, " [{}]", conditional.join(" | "))?;
    }
    writeln!(f)?;

    write_typed_children(f, field.typed_children(), depth + 1)
}

fn write_selection_map(
    f: &mut fmt::Formatter<'_>,
    selection_map: &SelectionMap<'_, '_>,
    depth: usize,
) -> fmt::Result {
    for field in selection_map.fields() {
        write_field(f, field, depth)?;
    }
    Ok(())
}

fn write_typed_children(
    f: &mut fmt::Formatter<'_>,
    typed_children: &TypedChildren<'_, '_>,
    depth: usize,
) -> fmt::Result {
    for (type_name, selection_map) in typed_children.iter() {
        write_indent(f, depth)?;
        writeln!(f, "... on {type_name}")?;
        write_selection_map(f, selection_map, depth + 1)?;
    }
    Ok(())
}

impl fmt::Display for IrField<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self, 0)
    }
}

impl fmt::Display for SelectionMap<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_selection_map(f, self, 0)
    }
}

impl fmt::Display for TypedChildren<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_typed_children(f, self, 0)
    }
}

impl fmt::Display for IrDocument<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation_kind())?;
        if let Some(name) = self.name() {
            write!(f, " {name}")?;
        }
        writeln!(f)?;
        write_typed_children(f, self.typed_children(), 1)
    }
}

impl fmt::Display for IrForest<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, document) in self.documents().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{document}")?;
        }
        Ok(())
    }
}
