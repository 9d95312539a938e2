/*!
# Representations

Storage backends for directed graphs with vertex and edge payloads.
See [`DirectedGraph`] for an overview of the available representations and
[`convert`](self::convert) for conversions between them.
*/

use crate::{error::*, ops::*, *};

pub mod convert;
mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;
