//! # mdsh-gather
//!
//! Walks a directory of Markdown documentation and gathers the ordered test
//! plan: a [`Category`](mdsh_core::Category) tree whose pages carry the
//! shell [`Script`](mdsh_core::Script)s found in `:::code` directives.
//!
//! ```no_run
//! let plan = mdsh_gather::gather("docs")?;
//! # Ok::<(), mdsh_gather::GatherError>(())
//! ```

pub mod command;
pub mod error;
pub mod frontmatter;
pub mod gatherer;
pub mod miner;
pub mod walk;

mod page;

pub use command::reconstruct_command;
pub use error::GatherError;
pub use frontmatter::{PageMeta, resolve_frontmatter};
pub use gatherer::{GatherOptions, Gatherer, gather};
pub use miner::mine_scripts;
