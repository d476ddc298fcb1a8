use std::fmt::{Error, Result, Write as _};

use super::{CompoundSchema, SchemaNode};
use crate::tag::TagNode;

/// Format a schema tree in a readable style:
/// scalar, array and list nodes are rendered in one line, compounds are pretty-printed.
/// A root compound is rendered as its bare field list.
pub fn format_schema(schema: &SchemaNode) -> std::result::Result<String, Error> {
    let mut out = String::new();

    match schema {
        SchemaNode::Compound(compound) => format_fields(compound, 0, &mut out)?,
        other => format_node(other, 0, &mut out)?,
    }

    Ok(out)
}

fn format_fields(compound: &CompoundSchema, indent: usize, out: &mut String) -> Result {
    for child in compound.children() {
        format_node(child, indent, out)?;
    }
    Ok(())
}

fn format_node(node: &SchemaNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let label = if node.name().is_empty() {
        "_"
    } else {
        node.name()
    };

    match node {
        SchemaNode::Scalar(scalar) => {
            write!(out, "{pad}{label}: {{ type: {}", scalar.kind)?;
            if let Some(value) = &scalar.value {
                write!(out, ", value: ")?;
                format_value(value, out)?;
            }
        }
        SchemaNode::Array(array) => {
            write!(out, "{pad}{label}: {{ type: {}", array.kind)?;
            if array.length > 0 {
                write!(out, ", length: {}", array.length)?;
            }
        }
        SchemaNode::List(list) => {
            write!(out, "{pad}{label}: {{ type: list, item: {}", list.element)?;
            if list.length > 0 {
                write!(out, ", length: {}", list.length)?;
            }
        }
        SchemaNode::Compound(compound) => {
            writeln!(out, "{pad}{label}:")?;
            writeln!(out, "{pad}    type: compound")?;
            if compound.optional {
                writeln!(out, "{pad}    optional: true")?;
            }
            writeln!(out, "{pad}    fields:")?;
            return format_fields(compound, indent + 8, out);
        }
    }

    if node.is_optional() {
        write!(out, ", optional: true")?;
    }
    writeln!(out, " }}")
}

fn format_value(value: &TagNode, out: &mut String) -> Result {
    match value {
        TagNode::Byte(v) => write!(out, "{v}"),
        TagNode::Short(v) => write!(out, "{v}"),
        TagNode::Int(v) => write!(out, "{v}"),
        TagNode::Long(v) => write!(out, "{v}"),
        TagNode::Float(v) => write!(out, "{v}"),
        TagNode::Double(v) => write!(out, "{v}"),
        TagNode::String(v) => write!(out, "{v:?}"),
        other => write!(out, "<{}>", other.kind()),
    }
}
