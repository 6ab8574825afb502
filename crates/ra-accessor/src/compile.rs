//! Entry points that turn text into a finished [`Accessor`].

use ra_parse::Parser;
use tracing::{debug, error};

use crate::string_list::try_copy;
use crate::{Accessor, AccessorBuilder, AccessorKind, BuildError, make_key};

/// Longest expression the grammar can address with 32-bit spans.
const MAX_EXPRESSION_LEN: usize = u32::MAX as usize;

/// Compile `text` as a literal string accessor.
pub fn compile_string(text: &str) -> Result<Accessor, BuildError> {
    let mut builder = AccessorBuilder::new();
    let key = make_key(text).inspect_err(|e| {
        error!(%e, "could not create string context");
    })?;
    builder.set_key(key);
    builder.set_kind(AccessorKind::String);

    let accessor = builder.finish()?;
    debug!(len = text.len(), "compiled string accessor");
    Ok(accessor)
}

/// Compile a `$key['subkey']...` expression.
///
/// Either the whole expression compiles or nothing is returned: a syntax
/// error after some keys were already recognized discards them.
pub fn compile_expression(text: &str) -> Result<Accessor, BuildError> {
    check_len(text, MAX_EXPRESSION_LEN)?;
    let mut builder = AccessorBuilder::new();

    // the parser works on its own copy, independent of the caller's buffer
    let scratch = try_copy(text).map_err(|e| {
        error!(%e, "could not create meta context");
        BuildError::Alloc(e)
    })?;
    let parsed = Parser::new(&scratch).parse(&mut builder);
    drop(scratch);

    if let Err(e) = parsed {
        let error = builder.take_error().unwrap_or(BuildError::Syntax(e));
        debug!(%error, expression = text, "discarding partial accessor");
        return Err(error);
    }

    let accessor = builder.finish()?;
    debug!(
        key = accessor.name(),
        subkeys = accessor.subkeys().map_or(0, |s| s.len()),
        "compiled keymap accessor"
    );
    Ok(accessor)
}

fn check_len(text: &str, max: usize) -> Result<(), BuildError> {
    if text.len() > max {
        error!(len = text.len(), max, "expression too long");
        return Err(BuildError::TooLong {
            len: text.len(),
            max,
        });
    }
    Ok(())
}
