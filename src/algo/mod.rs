/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, shortest paths and connectivity tests.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod traversal;
mod view;

use crate::{error::*, prelude::*};

pub use connectivity::*;
pub use traversal::*;
pub use view::*;
