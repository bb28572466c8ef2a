//! The schema walker shared by encode and decode.
//!
//! Visits a record's fields once, in declaration order. Excluded fields are
//! skipped before any other tag is looked at; every other field has its key
//! and `required` flag validated before the visitor runs. The first error
//! stops the walk.

use crate::error::{FormError, Result, SchemaIssue};
use crate::meta::FieldMeta;
use crate::schema::Form;
use tracing::{debug, trace};

pub(crate) fn walk<F, T>(slots: Vec<T>, mut visit: impl FnMut(FieldMeta, T) -> Result<()>) -> Result<()>
where
    F: Form,
{
    let schema = F::schema();
    if schema.len() != slots.len() {
        return Err(FormError::SchemaInvalid {
            field: std::any::type_name::<F>(),
            tag: "field",
            value: String::new(),
            issue: SchemaIssue::FieldCountMismatch {
                declared: schema.len(),
                exposed: slots.len(),
            },
        });
    }

    for (def, slot) in schema.iter().zip(slots) {
        let Some(meta) = FieldMeta::resolve(def)? else {
            trace!(field = def.ident, "skipping excluded field");
            continue;
        };
        debug!(field = meta.ident, key = meta.key, "visiting field");
        visit(meta, slot)?;
    }
    Ok(())
}
